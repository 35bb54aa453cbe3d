//! Error type shared by the scene store, persistence, and engine.

/// Failures surfaced by layout operations.
///
/// Everything else in the editor is total: adding items, hit-testing, and
/// dragging cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Stored text is not a valid encoded scene.
    #[error("malformed layout data: {0}")]
    MalformedData(String),
    /// No layout is saved under the requested key.
    #[error("no saved layout under key {key:?}")]
    NotFound { key: String },
    /// The persistence backend rejected the read or write.
    #[error("storage backend error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}

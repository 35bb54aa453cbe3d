//! Shared numeric and style constants for the layout editor.

// ── Grid ────────────────────────────────────────────────────────

/// Grid unit in scene coordinates; drag positions snap to multiples of this.
pub const GRID_SIZE: f64 = 20.0;

/// Stroke color of the cosmetic grid overlay.
pub const GRID_STROKE: &str = "#eee";

/// Line width of the grid overlay.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Smallest grid unit accepted from configuration.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Most grid lines drawn along one axis; denser grids are not drawn at all.
pub const MAX_GRID_LINES: u32 = 16_384;

// ── Items ───────────────────────────────────────────────────────

/// Left edge of a freshly added item.
pub const DEFAULT_ITEM_X: f64 = 50.0;

/// Top edge of a freshly added item.
pub const DEFAULT_ITEM_Y: f64 = 50.0;

/// Width of a freshly added item.
pub const DEFAULT_ITEM_WIDTH: f64 = 60.0;

/// Height of a freshly added item.
pub const DEFAULT_ITEM_HEIGHT: f64 = 60.0;

/// Fill for the selected item.
pub const SELECTED_FILL: &str = "rgba(0, 200, 0, 0.3)";

/// Fill for every unselected item.
pub const ITEM_FILL: &str = "rgba(0, 0, 200, 0.3)";

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_FILL: &str = "#000";
pub const LABEL_FONT: &str = "14px sans-serif";

/// Gap between the label baseline and the top edge of its item.
pub const LABEL_OFFSET: f64 = 5.0;

// ── Surface / persistence defaults ──────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Largest canvas width or height accepted from configuration.
pub const MAX_CANVAS_EXTENT: f64 = 16_384.0;

/// Key of the single slot the layout is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "roomLayout";

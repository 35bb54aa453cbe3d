//! Editor configuration parsed from environment variables.

use std::str::FromStr;

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_STORAGE_KEY, GRID_SIZE, MAX_CANVAS_EXTENT, MIN_GRID_SIZE,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Tunables for an editor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Key of the persistence slot used by save/load.
    pub storage_key: String,
    /// Grid unit used for snapping and the grid overlay.
    pub grid_size: f64,
    /// Width of the drawing surface in scene units.
    pub canvas_width: f64,
    /// Height of the drawing surface in scene units.
    pub canvas_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            grid_size: GRID_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `ROOMPLAN_STORAGE_KEY`: default `roomLayout`
    /// - `ROOMPLAN_GRID_SIZE`: default 20, accepted range 1 to 16384
    /// - `ROOMPLAN_CANVAS_WIDTH`: default 800, accepted range up to 16384
    /// - `ROOMPLAN_CANVAS_HEIGHT`: default 600, accepted range up to 16384
    ///
    /// Out-of-range values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let storage_key = match std::env::var("ROOMPLAN_STORAGE_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => DEFAULT_STORAGE_KEY.to_owned(),
        };

        Self {
            storage_key,
            grid_size: within_or(env_parse("ROOMPLAN_GRID_SIZE", GRID_SIZE), MIN_GRID_SIZE, GRID_SIZE),
            canvas_width: within_or(env_parse("ROOMPLAN_CANVAS_WIDTH", DEFAULT_CANVAS_WIDTH), 1.0, DEFAULT_CANVAS_WIDTH),
            canvas_height: within_or(env_parse("ROOMPLAN_CANVAS_HEIGHT", DEFAULT_CANVAS_HEIGHT), 1.0, DEFAULT_CANVAS_HEIGHT),
        }
    }
}

/// Parse an environment variable, returning `default` when it is missing or invalid.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// `value` if it lies in `[min, MAX_CANVAS_EXTENT]`, otherwise `default`.
fn within_or(value: f64, min: f64, default: f64) -> f64 {
    if (min..=MAX_CANVAS_EXTENT).contains(&value) { value } else { default }
}

//! Rendering: draws the full scene onto a passive 2D surface.
//!
//! The renderer is a pure function of the scene and the viewport. It receives
//! read-only state and issues draw calls. It never mutates application state,
//! so drawing twice with the same state produces the same picture.
//!
//! Draw order:
//! 1. clear the whole surface
//! 2. cosmetic grid lines (independent of grid snap and of scene content)
//! 3. every item back to front, filled by selection state, label above
//!
//! Rotation is stored on items but intentionally not applied here.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    GRID_LINE_WIDTH, GRID_STROKE, ITEM_FILL, LABEL_FILL, LABEL_FONT, LABEL_OFFSET, MAX_GRID_LINES, SELECTED_FILL,
};
use crate::scene::{Item, Scene};
use crate::viewport::Viewport;

/// Primitive draw target. Implemented for the browser 2D context when the
/// `web` feature is enabled.
pub trait Surface {
    type Error;

    /// Clear a `width` x `height` area starting at the surface origin.
    fn clear(&mut self, width: f64, height: f64);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Draw text with its baseline starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the text cannot be drawn.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str) -> Result<(), Self::Error>;
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene, viewport: &Viewport, grid_size: f64) -> Result<(), S::Error> {
    // Layer 1: clear.
    surface.clear(viewport.width, viewport.height);

    // Layer 2: grid.
    draw_grid(surface, viewport, grid_size);

    // Layer 3: items in z-order (bottom first).
    for item in scene.items() {
        draw_item(surface, item)?;
    }

    Ok(())
}

fn draw_grid<S: Surface>(surface: &mut S, viewport: &Viewport, grid_size: f64) {
    let (Some(columns), Some(rows)) = (grid_lines(viewport.width, grid_size), grid_lines(viewport.height, grid_size))
    else {
        return;
    };

    for x in (0..columns).map(|i| f64::from(i) * grid_size) {
        surface.stroke_line((x, 0.0), (x, viewport.height), GRID_STROKE, GRID_LINE_WIDTH);
    }
    for y in (0..rows).map(|i| f64::from(i) * grid_size) {
        surface.stroke_line((0.0, y), (viewport.width, y), GRID_STROKE, GRID_LINE_WIDTH);
    }
}

/// Number of lines at multiples of `grid_size` strictly below `extent`, or
/// `None` when the grid is degenerate or denser than `MAX_GRID_LINES`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_lines(extent: f64, grid_size: f64) -> Option<u32> {
    if !(grid_size.is_finite() && grid_size > 0.0 && extent.is_finite()) {
        return None;
    }
    let count = (extent / grid_size).ceil().max(0.0);
    (count <= f64::from(MAX_GRID_LINES)).then_some(count as u32)
}

fn draw_item<S: Surface>(surface: &mut S, item: &Item) -> Result<(), S::Error> {
    let fill = if item.selected { SELECTED_FILL } else { ITEM_FILL };
    surface.fill_rect(item.x, item.y, item.width, item.height, fill);
    surface.fill_text(&item.kind, item.x, item.y - LABEL_OFFSET, LABEL_FILL, LABEL_FONT)
}

// =============================================================
// Browser backend
// =============================================================

#[cfg(feature = "web")]
impl Surface for web_sys::CanvasRenderingContext2d {
    type Error = wasm_bindgen::JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.set_fill_style_str(color);
        web_sys::CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str) -> Result<(), Self::Error> {
        self.set_fill_style_str(color);
        self.set_font(font);
        web_sys::CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}

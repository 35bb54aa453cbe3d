//! Points and the screen-to-scene offset of the drawing surface.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Placement of the drawing surface on screen.
///
/// `origin_x` / `origin_y` are the surface's top-left corner in screen pixels.
/// `width` / `height` are the surface extent in scene units; the grid overlay
/// covers exactly this area. There is no zoom: one pixel is one scene unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// A viewport of the given size whose origin sits at the screen origin.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, width, height }
    }

    /// Move the surface origin, e.g. after the host element scrolled or re-laid out.
    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
    }

    /// Convert a screen-space point to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point {
            x: screen.x - self.origin_x,
            y: screen.y - self.origin_y,
        }
    }
}

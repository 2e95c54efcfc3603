#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in either client (viewport) or document space.
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
}

/// An element's bounding box relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner of the box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Visible window metrics at the time of an event.
///
/// `width` / `height` are the window's inner size; `scroll_x` / `scroll_y`
/// are the document scroll offsets. All in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport of the given size with no scroll.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }

    /// Same viewport, scrolled by the given offsets.
    #[must_use]
    pub fn scrolled(self, scroll_x: f64, scroll_y: f64) -> Self {
        Self { scroll_x, scroll_y, ..self }
    }

    /// Convert a client-space pointer position to document space.
    #[must_use]
    pub fn to_document(&self, client: Point) -> Point {
        Point {
            x: client.x + self.scroll_x,
            y: client.y + self.scroll_y,
        }
    }

    /// Largest origin that keeps a box of `rect`'s size fully visible.
    ///
    /// Either component is negative when the box is larger than the viewport on that axis.
    #[must_use]
    pub fn max_origin(&self, rect: &Rect) -> Point {
        Point {
            x: self.width - rect.width,
            y: self.height - rect.height,
        }
    }
}

/// Clamp `value` into `[0, max]`.
///
/// A negative or NaN `max` (box larger than the viewport) pins the result to 0.
#[must_use]
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    if max > 0.0 { value.clamp(0.0, max) } else { 0.0 }
}

// File: crates/hoverplot-core/src/types.rs
// Summary: Shared value types (sizes, points, pointer events) and layout constants.

/// Margin reserved on each edge of a chart, in pixels.
pub const DEFAULT_MARGIN: f64 = 50.0;
/// Extra inset used by the scatter chart so dots never touch the axes.
pub const DEFAULT_PLOT_RADIUS: f64 = 10.0;

/// Measured box of a mount point or surface, in pixels.
/// Contract: a surface is only ever created from a size with both sides > 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both sides are strictly positive (NaN is never usable).
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer event in surface-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

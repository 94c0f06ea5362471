// File: crates/hoverplot-core/src/axis.rs
// Summary: Axis decoration built from any tick-producing scale.

use crate::scale::{Tick, TickSource};
use crate::types::Point;

/// Default outward tick length, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick end and label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Axis snapshot: domain line over the scale range, ticks and labels, translated by `offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub offset: Point,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
}

impl Axis {
    pub fn new(orient: AxisOrient, scale: &impl TickSource) -> Self {
        Self {
            orient,
            offset: Point::default(),
            range: scale.range(),
            ticks: scale.ticks(),
            tick_size: TICK_SIZE,
        }
    }

    pub fn bottom(scale: &impl TickSource) -> Self {
        Self::new(AxisOrient::Bottom, scale)
    }

    pub fn left(scale: &impl TickSource) -> Self {
        Self::new(AxisOrient::Left, scale)
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.offset = Point::new(x, y);
        self
    }

    /// Tick line endpoints in surface coordinates.
    pub fn tick_lines(&self) -> Vec<(Point, Point)> {
        let o = self.offset;
        self.ticks
            .iter()
            .map(|t| match self.orient {
                AxisOrient::Bottom => (
                    Point::new(o.x + t.position, o.y),
                    Point::new(o.x + t.position, o.y + self.tick_size),
                ),
                AxisOrient::Left => (
                    Point::new(o.x, o.y + t.position),
                    Point::new(o.x - self.tick_size, o.y + t.position),
                ),
            })
            .collect()
    }

    /// Label anchor point for each tick, in surface coordinates.
    pub fn label_positions(&self) -> Vec<(Point, &str)> {
        let o = self.offset;
        let gap = self.tick_size + TICK_PADDING;
        self.ticks
            .iter()
            .map(|t| {
                let p = match self.orient {
                    AxisOrient::Bottom => Point::new(o.x + t.position, o.y + gap),
                    AxisOrient::Left => Point::new(o.x - gap, o.y + t.position),
                };
                (p, t.label.as_str())
            })
            .collect()
    }

    /// Domain line endpoints in surface coordinates.
    pub fn domain_line(&self) -> (Point, Point) {
        let o = self.offset;
        let (r0, r1) = self.range;
        match self.orient {
            AxisOrient::Bottom => (Point::new(o.x + r0, o.y), Point::new(o.x + r1, o.y)),
            AxisOrient::Left => (Point::new(o.x, o.y + r0), Point::new(o.x, o.y + r1)),
        }
    }
}

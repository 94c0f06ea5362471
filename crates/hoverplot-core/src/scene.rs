// File: crates/hoverplot-core/src/scene.rs
// Summary: Retained scene model: row-bound shapes, hover emphasis and static decorations.

use std::time::Duration;

use crate::axis::Axis;
use crate::color::Color;
use crate::geometry::{Circle, Rect};
use crate::types::Point;

/// Surface-unique shape identity. Ids are never reused on a surface, so a handle to a
/// shape from an earlier render can never alias a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    Circle(Circle),
}

impl Geometry {
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Geometry::Rect(r) => r.contains(p),
            Geometry::Circle(c) => c.contains(p),
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match *self {
            Geometry::Rect(r) => r,
            Geometry::Circle(c) => Rect::from_xywh(c.cx - c.r, c.cy - c.r, c.r * 2.0, c.r * 2.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Style {
    pub fn filled(fill: Color) -> Self {
        Self { fill, stroke: None, stroke_width: 0.0, opacity: 1.0 }
    }

    pub fn with_stroke(mut self, stroke: Color, width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = width;
        self
    }
}

/// Which style property a hover changes, with its resting and hovered values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Emphasis {
    Opacity { rest: f64, active: f64 },
    StrokeWidth { rest: f64, active: f64 },
}

impl Emphasis {
    fn values(&self) -> (f64, f64) {
        match *self {
            Emphasis::Opacity { rest, active } | Emphasis::StrokeWidth { rest, active } => (rest, active),
        }
    }

    fn write(&self, style: &mut Style, v: f64) {
        match self {
            Emphasis::Opacity { .. } => style.opacity = v,
            Emphasis::StrokeWidth { .. } => style.stroke_width = v,
        }
    }
}

/// Short tween of the emphasized property. `Surface::style_of` already reports `to`;
/// renderers that animate sample `value_at` instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

impl Transition {
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }
}

/// What a view asks the reconciler to create for one row.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    pub geometry: Geometry,
    pub style: Style,
    pub emphasis: Emphasis,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    /// Index of the bound row in the render's plot rows.
    pub row: usize,
    pub geometry: Geometry,
    /// Resting style; `Surface::style_of` applies hover emphasis.
    pub style: Style,
    pub emphasis: Emphasis,
    pub tooltip: String,
    pub transition: Option<Transition>,
}

impl Shape {
    pub(crate) fn from_spec(id: ShapeId, row: usize, spec: ShapeSpec) -> Self {
        let ShapeSpec { geometry, mut style, emphasis, tooltip } = spec;
        emphasis.write(&mut style, emphasis.values().0);
        Self { id, row, geometry, style, emphasis, tooltip, transition: None }
    }

    /// Record the tween toward the hovered (`on`) or resting value.
    pub(crate) fn begin_transition(&mut self, on: bool, duration: Duration) {
        let (rest, active) = self.emphasis.values();
        let (from, to) = if on { (rest, active) } else { (active, rest) };
        self.transition = Some(Transition { from, to, duration });
    }

    /// Style with the emphasized property at its hovered value.
    pub fn emphasized_style(&self) -> Style {
        let mut style = self.style;
        self.emphasis.write(&mut style, self.emphasis.values().1);
        style
    }

    /// Geometry, style and binding without the per-render id.
    pub fn signature(&self) -> (usize, Geometry, Style, &str) {
        (self.row, self.geometry, self.style, &self.tooltip)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
}

impl TextMark {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64) -> Self {
        Self { x, y, text: text.into(), size, bold: false, anchor: Anchor::Middle }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Dash on/off lengths; `None` draws a solid line.
    pub dash: Option<[f64; 2]>,
}

/// Static chart furniture, cleared and re-appended on every render.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoration {
    Text(TextMark),
    Axis(Axis),
    Path(PathMark),
}

// File: crates/hoverplot-core/src/scale.rs
// Summary: Banded, linear and color scales with axis tick generation.
// Scales are plain values rebuilt on every render; none of them keep identity across renders.

use crate::color::Color;

/// One axis tick: position along the scale's range and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Scales that can feed an axis.
pub trait TickSource {
    /// Ticks in range coordinates, ordered as they appear along the domain.
    fn ticks(&self) -> Vec<Tick>;
    /// Range endpoints, used to draw the axis domain line.
    fn range(&self) -> (f64, f64);
}

// ---- linear -----------------------------------------------------------------

/// Continuous linear map from `domain` to `range`.
///
/// A `None` domain (empty dataset) maps every value to itself. A collapsed domain
/// (`d0 == d1`) maps every value to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Option<(f64, f64)>,
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain: Some(domain), range }
    }

    /// Build from an optional data extent; `None` gives the identity mapping.
    pub fn from_extent(domain: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn identity() -> Self {
        Self { domain: None, range: (0.0, 1.0) }
    }

    pub fn is_identity(&self) -> bool {
        self.domain.is_none()
    }

    /// Position of `v` in the domain as a 0..1 fraction (unclamped).
    pub fn normalize(&self, v: f64) -> f64 {
        match self.domain {
            None => v,
            Some((d0, d1)) if d1 == d0 => 0.5,
            Some((d0, d1)) => (v - d0) / (d1 - d0),
        }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        if self.domain.is_none() {
            return v;
        }
        let t = self.normalize(v);
        let (r0, r1) = self.range;
        // a*(1-t) + b*t keeps both endpoints exact
        r0 * (1.0 - t) + r1 * t
    }

    /// Nicely rounded tick values covering the domain.
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        match self.domain {
            None => Vec::new(),
            Some((d0, d1)) => ticks(d0, d1, count as f64),
        }
    }

    /// Formatter matching the tick step: fixed precision with thousands grouping.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let decimals = match self.domain {
            Some((d0, d1)) => {
                let step = tick_step(d0, d1, count as f64).abs();
                if step.is_finite() && step > 0.0 {
                    (-step.log10().floor()).max(0.0) as usize
                } else {
                    0
                }
            }
            None => 0,
        };
        move |v| format_grouped(v, decimals)
    }
}

const DEFAULT_TICK_COUNT: usize = 10;

impl TickSource for LinearScale {
    fn ticks(&self) -> Vec<Tick> {
        let fmt = self.tick_format(DEFAULT_TICK_COUNT);
        self.tick_values(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|v| Tick { position: self.apply(v), label: fmt(v) })
            .collect()
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds and increment; a negative increment encodes 1/|inc|.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let fwd = 10f64.powf(power) * factor;
        i1 = (start / fwd).round();
        i2 = (stop / fwd).round();
        if i1 * fwd < start { i1 += 1.0; }
        if i2 * fwd > stop { i2 -= 1.0; }
        inc = fwd;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick values between `start` and `stop` (either order) using 1/2/5 x 10^k steps.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Spacing between ticks produced by [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_spec(lo, hi, count).2;
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if stop < start { -step } else { step }
}

/// Fixed-point formatting with `,` thousands separators.
pub fn format_grouped(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if v < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

// ---- band -------------------------------------------------------------------

/// Categorical scale splitting the range into equal bands with padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Distinct categories in first-seen order; `padding` applies inside and outside.
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for c in categories {
            let c = c.into();
            if !domain.contains(&c) {
                domain.push(c);
            }
        }
        let padding = padding.clamp(0.0, 1.0);
        let mut s = Self {
            domain,
            range,
            padding_inner: padding,
            padding_outer: padding,
            align: 0.5,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        s.rescale();
        s
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        self.step = step;
        self.start = start;
        self.bandwidth = step * (1.0 - self.padding_inner);
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start of the band for `category`, `None` for categories outside the domain.
    pub fn apply(&self, category: &str) -> Option<f64> {
        let i = self.domain.iter().position(|c| c == category)?;
        let n = self.domain.len();
        let (r0, r1) = self.range;
        // reversed ranges list bands from the far end
        let i = if r1 < r0 { n - 1 - i } else { i };
        Some(self.start + self.step * i as f64)
    }
}

impl TickSource for BandScale {
    fn ticks(&self) -> Vec<Tick> {
        let half = self.bandwidth / 2.0;
        self.domain
            .iter()
            .filter_map(|c| self.apply(c).map(|x| Tick { position: x + half, label: c.clone() }))
            .collect()
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

// ---- color ------------------------------------------------------------------

/// Continuous color scale: two-stop sequential or three-stop diverging.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScale {
    /// Linear over `domain`, blending `from` into `to`. A `None` domain treats values as 0..1 fractions.
    Sequential { domain: Option<(f64, f64)>, from: Color, to: Color },
    /// Piecewise over `[d0, mid, d1]`, the midpoint maps to the middle color.
    Diverging { domain: [f64; 3], colors: [Color; 3] },
}

impl ColorScale {
    pub fn sequential(domain: Option<(f64, f64)>, from: Color, to: Color) -> Self {
        ColorScale::Sequential { domain, from, to }
    }

    pub fn diverging(domain: [f64; 3], colors: [Color; 3]) -> Self {
        ColorScale::Diverging { domain, colors }
    }

    pub fn apply(&self, v: f64) -> Color {
        match *self {
            ColorScale::Sequential { domain, from, to } => {
                let t = LinearScale::from_extent(domain, (0.0, 1.0)).normalize(v);
                from.lerp(to, t)
            }
            ColorScale::Diverging { domain: [x0, x1, x2], colors } => {
                let k10 = if x0 == x1 { 0.0 } else { 0.5 / (x1 - x0) };
                let k21 = if x1 == x2 { 0.0 } else { 0.5 / (x2 - x1) };
                let s = if x1 < x0 { -1.0 } else { 1.0 };
                let t = 0.5 + (v - x1) * if s * v < s * x1 { k10 } else { k21 };
                if t.is_nan() {
                    return colors[1];
                }
                let scaled = t * 2.0;
                let seg = scaled.floor().clamp(0.0, 1.0);
                let local = scaled - seg;
                let i = seg as usize;
                colors[i].lerp(colors[i + 1], local)
            }
        }
    }
}

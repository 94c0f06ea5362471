// File: crates/hoverplot-core/src/scatter_chart.rs
// Summary: Per-state scatter: male share on x, death count on y, diverging color around parity.

use std::time::Duration;

use crate::axis::Axis;
use crate::chart::ChartView;
use crate::color::Color;
use crate::config::{DifficultyTable, ScatterChartConfig};
use crate::dataset::StatesDataset;
use crate::geometry::{extent, Circle};
use crate::scale::{ColorScale, LinearScale};
use crate::scene::{Anchor, Decoration, Emphasis, Geometry, PathMark, ShapeSpec, Style, TextMark};
use crate::types::{Point, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct StateRow {
    pub count: f64,
    pub name: String,
    pub ease_of_drawing: f64,
    pub male_count: f64,
    pub female_count: f64,
    /// `male_count / count`; NaN when either is missing.
    pub gender_ratio: f64,
    pub count_2012: f64,
    pub count_2013: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: ColorScale,
}

pub fn state_rows(data: &StatesDataset, difficulty: &DifficultyTable) -> Vec<StateRow> {
    data.states
        .iter()
        .map(|s| {
            let count = s.count.unwrap_or(f64::NAN);
            let male_count = s.male_count.unwrap_or(f64::NAN);
            StateRow {
                count,
                name: s.state.clone().unwrap_or_default(),
                ease_of_drawing: s
                    .abreviation
                    .as_deref()
                    .map_or(difficulty.fallback, |a| difficulty.lookup(a)),
                male_count,
                female_count: s.female_count.unwrap_or(f64::NAN),
                gender_ratio: male_count / count,
                count_2012: s.twelve_count.unwrap_or(f64::NAN),
                count_2013: s.thirt_count.unwrap_or(f64::NAN),
            }
        })
        .collect()
}

pub fn build_scatter_scales(rows: &[StateRow], size: Size, cfg: &ScatterChartConfig) -> ScatterScales {
    let inset = cfg.margin + cfg.plot_radius;
    let x = LinearScale::new((0.0, 1.0), (inset, size.width - inset));
    let y = LinearScale::from_extent(
        extent(rows.iter().map(|r| r.count)),
        (size.height - inset, inset),
    );
    let color = ColorScale::diverging(cfg.ratio_domain, cfg.ratio_colors);
    ScatterScales { x, y, color }
}

#[derive(Clone, Debug, Default)]
pub struct ScatterChart {
    pub config: ScatterChartConfig,
}

impl ScatterChart {
    pub fn new(config: ScatterChartConfig) -> Self {
        Self { config }
    }
}

impl ChartView for ScatterChart {
    type Data = StatesDataset;
    type Row = StateRow;
    type Scales = ScatterScales;

    fn name(&self) -> &'static str {
        "scatter"
    }

    fn plot_rows(&self, data: &StatesDataset) -> Vec<StateRow> {
        state_rows(data, &self.config.difficulty)
    }

    fn build_scales(&self, rows: &[StateRow], size: Size) -> ScatterScales {
        build_scatter_scales(rows, size, &self.config)
    }

    fn encode(&self, row: &StateRow, scales: &ScatterScales) -> ShapeSpec {
        let cfg = &self.config;
        ShapeSpec {
            geometry: Geometry::Circle(Circle {
                cx: scales.x.apply(row.gender_ratio),
                cy: scales.y.apply(row.count),
                r: cfg.dot_radius,
            }),
            style: Style::filled(scales.color.apply(row.gender_ratio)).with_stroke(cfg.stroke, cfg.stroke_width),
            emphasis: Emphasis::StrokeWidth { rest: cfg.stroke_width, active: cfg.hover_stroke_width },
            tooltip: format!(
                "{}<br>Gun Deaths: {}<br>Percentage of Male: {}",
                row.name, row.count, row.gender_ratio
            ),
        }
    }

    fn decorations(&self, rows: &[StateRow], scales: &ScatterScales, size: Size) -> Vec<Decoration> {
        let cfg = &self.config;
        let m = cfg.margin;
        let label_size = m / 3.0;
        let mut out = Vec::with_capacity(6);

        // dashed parity line spanning the count extent plus overhang
        if let Some((lo, hi)) = extent(rows.iter().map(|r| r.count)) {
            let x = scales.x.apply(0.5);
            out.push(Decoration::Path(PathMark {
                points: vec![
                    Point::new(x, scales.y.apply(hi + cfg.midline_overhang)),
                    Point::new(x, scales.y.apply(lo - cfg.midline_overhang)),
                ],
                stroke: Color::GRAY,
                stroke_width: 1.0,
                dash: Some([3.0, 3.0]),
            }));
        }

        out.push(Decoration::Text(TextMark::new(size.width / 2.0, label_size, &cfg.title, label_size).bold()));
        out.push(Decoration::Text(
            TextMark::new(size.width - 150.0, 45.0, &cfg.male_note, 10.0).anchor(Anchor::End),
        ));
        out.push(Decoration::Text(
            TextMark::new(size.width / 3.0 + 10.0, 45.0, &cfg.female_note, 10.0).anchor(Anchor::End),
        ));
        out.push(Decoration::Axis(Axis::bottom(&scales.x).translate(0.0, size.height - m + 1.0)));
        out.push(Decoration::Axis(Axis::left(&scales.y).translate(m - 2.0, 0.0)));
        out
    }

    fn hover_transition(&self) -> Duration {
        Duration::from_millis(self.config.transition_ms)
    }
}

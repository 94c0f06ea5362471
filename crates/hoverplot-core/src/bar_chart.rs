// File: crates/hoverplot-core/src/bar_chart.rs
// Summary: Monthly death-count bar chart: band x over months, floored linear y, green gradient fill.

use std::time::Duration;

use crate::axis::Axis;
use crate::chart::ChartView;
use crate::config::BarChartConfig;
use crate::dataset::MonthsDataset;
use crate::geometry::{extent, max_of, Rect};
use crate::scale::{BandScale, ColorScale, LinearScale};
use crate::scene::{Decoration, Emphasis, Geometry, ShapeSpec, Style, TextMark};
use crate::types::Size;

#[derive(Clone, Debug, PartialEq)]
pub struct MonthRow {
    pub count: f64,
    pub month: String,
    /// Highest death toll in a single incident that month.
    pub deaths: f64,
    pub order: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarScales {
    pub x: BandScale,
    pub y: LinearScale,
    pub color: ColorScale,
    /// Pixel y of the bar baseline (bottom of the plot area).
    pub baseline: f64,
}

/// Project raw months into plot rows, sorted chronologically by `order`.
/// The sort is stable, so months sharing an order keep their input order.
pub fn month_rows(data: &MonthsDataset) -> Vec<MonthRow> {
    let mut rows: Vec<MonthRow> = data
        .months
        .iter()
        .map(|m| MonthRow {
            count: m.count.unwrap_or(f64::NAN),
            month: m.month.clone().unwrap_or_default(),
            deaths: m.highest_death.unwrap_or(f64::NAN),
            order: m.order.unwrap_or(f64::NAN),
        })
        .collect();
    rows.sort_by(|a, b| a.order.total_cmp(&b.order));
    rows
}

/// Scales for the bar chart. Band order always follows `order`, whatever order `rows` come in.
pub fn build_bar_scales(rows: &[MonthRow], size: Size, cfg: &BarChartConfig) -> BarScales {
    let m = cfg.margin;
    let mut chrono: Vec<&MonthRow> = rows.iter().collect();
    chrono.sort_by(|a, b| a.order.total_cmp(&b.order));

    let x = BandScale::new(
        chrono.iter().map(|r| r.month.as_str()),
        (m, size.width - m),
        cfg.band_padding,
    );
    let y = LinearScale::from_extent(
        max_of(rows.iter().map(|r| r.count)).map(|hi| (cfg.y_floor, hi)),
        (size.height - m, m),
    );
    let color = ColorScale::sequential(
        extent(rows.iter().map(|r| r.deaths)),
        cfg.low_color,
        cfg.high_color,
    );
    BarScales { x, y, color, baseline: size.height - m }
}

#[derive(Clone, Debug, Default)]
pub struct BarChart {
    pub config: BarChartConfig,
}

impl BarChart {
    pub fn new(config: BarChartConfig) -> Self {
        Self { config }
    }
}

impl ChartView for BarChart {
    type Data = MonthsDataset;
    type Row = MonthRow;
    type Scales = BarScales;

    fn name(&self) -> &'static str {
        "bar"
    }

    fn plot_rows(&self, data: &MonthsDataset) -> Vec<MonthRow> {
        month_rows(data)
    }

    fn build_scales(&self, rows: &[MonthRow], size: Size) -> BarScales {
        build_bar_scales(rows, size, &self.config)
    }

    fn encode(&self, row: &MonthRow, scales: &BarScales) -> ShapeSpec {
        let x = scales.x.apply(&row.month).unwrap_or(f64::NAN);
        let y = scales.y.apply(row.count);
        // counts under the floor collapse to zero height instead of growing downward
        let height = (scales.baseline - y).max(0.0);
        ShapeSpec {
            geometry: Geometry::Rect(Rect::from_xywh(x, y, scales.x.bandwidth(), height)),
            style: Style::filled(scales.color.apply(row.deaths)),
            emphasis: Emphasis::Opacity { rest: 1.0, active: self.config.hover_opacity },
            tooltip: format!(
                "{}<br>Total deaths: {}<br>Highest death toll in single incident: {}",
                row.month, row.count, row.deaths
            ),
        }
    }

    fn decorations(&self, _rows: &[MonthRow], scales: &BarScales, size: Size) -> Vec<Decoration> {
        let m = self.config.margin;
        let label_size = m / 3.0;
        let mid = size.width / 2.0;
        vec![
            Decoration::Text(TextMark::new(mid, label_size, &self.config.title, label_size).bold()),
            Decoration::Text(TextMark::new(mid, label_size * 2.5, &self.config.subtitle, 15.0)),
            Decoration::Text(TextMark::new(mid, size.height - label_size + 10.0, &self.config.x_label, 12.0)),
            Decoration::Axis(Axis::bottom(&scales.x).translate(0.0, size.height - m)),
            Decoration::Axis(Axis::left(&scales.y).translate(m - 4.0, 0.0)),
        ]
    }

    fn hover_transition(&self) -> Duration {
        Duration::from_millis(self.config.transition_ms)
    }
}

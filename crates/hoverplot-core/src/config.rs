// File: crates/hoverplot-core/src/config.rs
// Summary: Chart configuration with defaults; any subset can be overridden from JSON.

use std::collections::HashMap;

use serde::Deserialize;

use crate::color::Color;
use crate::error::Result;
use crate::types::{DEFAULT_MARGIN, DEFAULT_PLOT_RADIUS};

/// Ease-of-drawing score for states missing from the table.
pub const DEFAULT_EASE_OF_DRAWING: f64 = 5.0;

/// State abbreviation → how hard the state's outline is to draw.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DifficultyTable {
    pub entries: HashMap<String, f64>,
    pub fallback: f64,
}

impl DifficultyTable {
    pub fn empty() -> Self {
        Self { entries: HashMap::new(), fallback: DEFAULT_EASE_OF_DRAWING }
    }

    pub fn builtin() -> Self {
        const TABLE: &[(&str, f64)] = &[
            ("IL", 9.0), ("AL", 2.0), ("AK", 1.0), ("AR", 3.0), ("CA", 9.51), ("CO", 0.0),
            ("DE", 3.1), ("DC", 1.3), ("FL", 8.9), ("GA", 3.9), ("HI", 4.5), ("ID", 4.0),
            ("IN", 4.3), ("IA", 4.1), ("KS", 1.6), ("KY", 7.0), ("LA", 6.5), ("MO", 5.5),
            ("ME", 7.44), ("MD", 10.0), ("MA", 6.8), ("MI", 9.7), ("MN", 5.1), ("MS", 3.8),
            ("MT", 1.4), ("NE", 1.9), ("NV", 0.5), ("NH", 3.7), ("NJ", 9.1), ("NM", 0.2),
            ("NY", 8.7), ("NC", 8.5), ("ND", 2.3), ("OH", 5.8), ("OK", 6.05), ("OR", 4.7),
            ("PA", 4.01), ("RI", 8.4), ("SC", 7.1), ("SD", 0.9), ("TN", 3.333333), ("TX", 8.1),
            ("UT", 2.8), ("VT", 2.6), ("VA", 8.2), ("WA", 9.2), ("WV", 7.9), ("WY", 0.0),
        ];
        let entries = TABLE.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        Self { entries, fallback: DEFAULT_EASE_OF_DRAWING }
    }

    pub fn lookup(&self, abbreviation: &str) -> f64 {
        self.entries.get(abbreviation).copied().unwrap_or(self.fallback)
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BarChartConfig {
    pub margin: f64,
    /// Inner and outer band padding as a fraction of the step.
    pub band_padding: f64,
    /// Fixed bottom of the count axis; not the data minimum.
    pub y_floor: f64,
    pub low_color: Color,
    pub high_color: Color,
    pub hover_opacity: f64,
    pub transition_ms: u64,
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            band_padding: 0.4,
            y_floor: 500.0,
            low_color: Color::rgb(0xf1, 0xfb, 0xee),
            high_color: Color::rgb(0x00, 0x44, 0x1b),
            hover_opacity: 0.5,
            transition_ms: 50,
            title: "Death Count per Month".into(),
            subtitle: "Color of bar represents the highest number of deaths in one incident".into(),
            x_label: "Month and Year".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterChartConfig {
    pub margin: f64,
    /// Extra inset so dots stay clear of the axes.
    pub plot_radius: f64,
    pub dot_radius: f64,
    pub stroke: Color,
    pub stroke_width: f64,
    pub hover_stroke_width: f64,
    pub transition_ms: u64,
    /// Diverging color domain `[low, mid, high]` over the male share.
    pub ratio_domain: [f64; 3],
    pub ratio_colors: [Color; 3],
    /// How far past the count extent the midline extends, in data units.
    pub midline_overhang: f64,
    pub title: String,
    pub male_note: String,
    pub female_note: String,
    pub difficulty: DifficultyTable,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            plot_radius: DEFAULT_PLOT_RADIUS,
            dot_radius: 6.0,
            stroke: Color::BLACK,
            stroke_width: 0.75,
            hover_stroke_width: 1.75,
            transition_ms: 50,
            ratio_domain: [0.0, 0.5, 1.0],
            ratio_colors: [Color::rgb(255, 0, 255), Color::WHITE, Color::rgb(0, 0, 128)],
            midline_overhang: 30.0,
            title: "Gender Ratio of Gun Deaths".into(),
            male_note: "More male victims than female victims".into(),
            female_note: "More female victims than male victims".into(),
            difficulty: DifficultyTable::builtin(),
        }
    }
}

/// Top-level configuration file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoverplotConfig {
    pub bar: BarChartConfig,
    pub scatter: ScatterChartConfig,
}

impl HoverplotConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

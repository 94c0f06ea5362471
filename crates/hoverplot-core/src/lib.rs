// File: crates/hoverplot-core/src/lib.rs
// Summary: Core library entry point; surfaces, scales, reconciliation, tooltips and chart views.

pub mod axis;
pub mod bar_chart;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod reconcile;
pub mod scale;
pub mod scatter_chart;
pub mod scene;
pub mod surface;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use bar_chart::{build_bar_scales, BarChart, BarScales, MonthRow};
pub use chart::{Chart, ChartView, Dependencies};
pub use color::Color;
pub use config::{BarChartConfig, DifficultyTable, HoverplotConfig, ScatterChartConfig, DEFAULT_EASE_OF_DRAWING};
pub use dataset::{DatasetHandle, MonthRecord, MonthsDataset, StateRecord, StatesDataset};
pub use error::{ChartError, Result};
pub use reconcile::{reconcile, Reconciled};
pub use scale::{BandScale, ColorScale, LinearScale, Tick, TickSource};
pub use scatter_chart::{build_scatter_scales, ScatterChart, ScatterScales, StateRow};
pub use scene::{Decoration, Emphasis, Geometry, Shape, ShapeId, ShapeSpec, Style};
pub use surface::{MountPoint, Surface, SurfaceId, SurfaceManager};
pub use tooltip::{FollowPointer, HoverOwner, HoverState, TooltipController, TooltipElement, TooltipHandle, TooltipHost, TooltipPlacement};
pub use types::{PointerEvent, Size};

// File: crates/demo/src/main.rs
// Summary: Demo mounts the bar and scatter charts under one tooltip host, hovers, resizes, and writes PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hoverplot_core::{
    BarChart, Chart, ChartView, DatasetHandle, MonthsDataset, MountPoint, ScatterChart, Size,
    StatesDataset, TooltipHost,
};
use hoverplot_core::geometry::Rect;
use hoverplot_render_skia::{RenderOptions, SkiaRenderer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SAMPLE_MONTHS: &str = include_str!("../data/months.json");
const SAMPLE_STATES: &str = include_str!("../data/states.json");

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hoverplot_core=debug,hoverplot_render_skia=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let months_json = read_or_sample(args.next(), SAMPLE_MONTHS)?;
    let states_json = read_or_sample(args.next(), SAMPLE_STATES)?;

    let months = MonthsDataset::from_json(&months_json).context("failed to parse months dataset")?;
    let states = StatesDataset::from_json(&states_json).context("failed to parse states dataset")?;
    info!(months = months.months.len(), states = states.states.len(), "loaded datasets");

    // Both charts share one tooltip element
    let host = TooltipHost::new();
    let mut bars = Chart::new(BarChart::default(), MountPoint::attached(Size::new(800.0, 600.0)), host.clone());
    let mut dots = Chart::new(ScatterChart::default(), MountPoint::attached(Size::new(800.0, 600.0)), host.clone());
    bars.set_dataset(DatasetHandle::new(months));
    dots.set_dataset(DatasetHandle::new(states));
    bars.update();
    dots.update();

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");

    write(&renderer, &bars, &opts, &out_dir.join("bars.png"))?;
    write(&renderer, &dots, &opts, &out_dir.join("scatter.png"))?;

    // Hover the center of the tallest bar and the first dot
    if let Some((x, y)) = center_of_first(&bars, |a, b| a.height > b.height) {
        bars.pointer_at(x, y);
        write(&renderer, &bars, &opts, &out_dir.join("bars_hover.png"))?;
        bars.pointer_at(0.0, 0.0);
    }
    if let Some((x, y)) = center_of_first(&dots, |_, _| false) {
        dots.pointer_at(x, y);
        write(&renderer, &dots, &opts, &out_dir.join("scatter_hover.png"))?;
        dots.pointer_at(0.0, 0.0);
    }

    // A drag-resize: many ticks, one re-render
    for step in 1..=20 {
        let t = step as f64 / 20.0;
        bars.observe_resize(Size::new(800.0 - 400.0 * t, 600.0 - 300.0 * t));
    }
    bars.update();
    info!(renders = bars.render_count(), "bar chart after resize");
    write(&renderer, &bars, &opts, &out_dir.join("bars_small.png"))?;

    bars.unmount();
    dots.unmount();
    info!(tooltips = host.created_count(), "done");
    Ok(())
}

fn read_or_sample(path: Option<String>, sample: &str) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(&p).with_context(|| format!("failed to read '{p}'")),
        None => Ok(sample.to_string()),
    }
}

/// Center of the shape that wins `better` against every other, by bounding box.
fn center_of_first<V: ChartView>(
    chart: &Chart<V>,
    better: impl Fn(&Rect, &Rect) -> bool,
) -> Option<(f64, f64)> {
    let surface = chart.surface()?;
    let mut best: Option<Rect> = None;
    for shape in surface.shapes() {
        let bounds = shape.geometry.bounds();
        if best.as_ref().map_or(true, |b| better(&bounds, b)) {
            best = Some(bounds);
        }
    }
    best.map(|r| (r.x + r.width / 2.0, r.y + r.height / 2.0))
}

fn write<V: ChartView>(renderer: &SkiaRenderer, chart: &Chart<V>, opts: &RenderOptions, path: &Path) -> Result<()> {
    let surface = chart
        .surface()
        .with_context(|| format!("{} chart has no surface", chart.view().name()))?;
    renderer.render_to_png(surface, opts, path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

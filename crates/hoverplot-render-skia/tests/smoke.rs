// File: crates/hoverplot-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests decoding the PNG output.

use hoverplot_core::{
    BarChart, Chart, DatasetHandle, MonthsDataset, MountPoint, PointerEvent, ScatterChart, Size,
    StatesDataset, TooltipHost,
};
use hoverplot_render_skia::{RenderOptions, SkiaRenderer, Theme};

const MONTHS: &str = r#"{"months":[
    {"month":"Jan","count":600,"highest_death":5,"order":1},
    {"month":"Feb","count":900,"highest_death":12,"order":2}
]}"#;

fn bar_chart(host: TooltipHost) -> Chart<BarChart> {
    let mut chart = Chart::new(BarChart::default(), MountPoint::attached(Size::new(800.0, 600.0)), host);
    chart.set_dataset(DatasetHandle::new(MonthsDataset::from_json(MONTHS).unwrap()));
    chart.update();
    chart
}

fn quiet() -> RenderOptions {
    // avoid font variance
    RenderOptions { draw_text: false, ..RenderOptions::default() }
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    image::load_from_memory(bytes).expect("decodable png").to_rgba8()
}

fn close(px: &image::Rgba<u8>, rgb: [u8; 3], tol: u8) -> bool {
    px.0[..3].iter().zip(rgb).all(|(&a, b)| a.abs_diff(b) <= tol)
}

#[test]
fn bar_chart_png_matches_surface() {
    let chart = bar_chart(TooltipHost::new());
    let bytes = SkiaRenderer::new()
        .render_to_png_bytes(chart.surface().unwrap(), &quiet())
        .expect("render bytes");
    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (800, 600));

    // background corner, then the middle of the darker Feb bar
    assert!(close(img.get_pixel(2, 2), [255, 255, 255], 0));
    assert!(close(img.get_pixel(545, 300), [0x00, 0x44, 0x1b], 1));
}

#[test]
fn hover_fades_the_bar_and_draws_tooltip() {
    let host = TooltipHost::new();
    let mut chart = bar_chart(host.clone());
    chart.pointer_at(545.0, 300.0);
    assert!(host.element().unwrap().borrow().visible);

    let img = decode(
        &SkiaRenderer::new()
            .render_to_png_bytes(chart.surface().unwrap(), &quiet())
            .unwrap(),
    );
    // half-opaque dark green over white
    assert!(close(img.get_pixel(545, 400), [128, 162, 141], 2));
    // tooltip box sits at pointer + (10, -20)
    assert!(!close(img.get_pixel(557, 282), [0x00, 0x44, 0x1b], 10));

    chart.pointer_exit(PointerEvent::at(0.0, 0.0));
    let img = decode(
        &SkiaRenderer::new()
            .render_to_png_bytes(chart.surface().unwrap(), &quiet())
            .unwrap(),
    );
    assert!(close(img.get_pixel(557, 282), [0x00, 0x44, 0x1b], 1));
}

#[test]
fn scatter_png_writes_to_disk() {
    let mut chart = Chart::new(
        ScatterChart::default(),
        MountPoint::attached(Size::new(640.0, 480.0)),
        TooltipHost::new(),
    );
    chart.set_dataset(DatasetHandle::new(
        StatesDataset::from_json(r#"{"states":[{"state":"Texas","abreviation":"TX","count":400,"male_count":320}]}"#)
            .unwrap(),
    ));
    chart.update();

    let opts = RenderOptions { theme: Theme::dark(), ..quiet() };
    let out = std::path::PathBuf::from("target/test_out/scatter.png");
    SkiaRenderer::new()
        .render_to_png(chart.surface().unwrap(), &opts, &out)
        .expect("render should succeed");
    let img = image::open(&out).expect("output exists").to_rgba8();
    assert_eq!(img.dimensions(), (640, 480));
    assert!(close(img.get_pixel(2, 2), [18, 18, 20], 0));
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(hoverplot_render_skia::theme::find("DARK").name, "dark");
    assert_eq!(hoverplot_render_skia::theme::find("sepia").name, "light");
}

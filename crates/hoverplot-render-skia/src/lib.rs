// File: crates/hoverplot-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a chart surface using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use hoverplot_core::axis::{Axis, AxisOrient};
use hoverplot_core::scene::{Anchor, Decoration, Geometry, PathMark, Shape, Style, TextMark};
use hoverplot_core::{Color, Surface, TooltipElement};

pub mod text;
pub mod theme;

pub use text::TextShaper;
pub use theme::Theme;

/// Font size for tick labels, matching the browser axis default.
pub const AXIS_FONT_SIZE: f32 = 10.0;
pub const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 6.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Disable to skip font loading (e.g. headless CI without system fonts).
    pub draw_text: bool,
    pub draw_tooltip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_text: true, draw_tooltip: true }
    }
}

/// Paints shapes, decorations and the shared tooltip of one surface.
#[derive(Default)]
pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `surface` to PNG bytes. Output dimensions are the surface size, rounded.
    pub fn render_to_png_bytes(&self, surface: &Surface, opts: &RenderOptions) -> Result<Vec<u8>> {
        let width = surface.width().round().max(1.0) as i32;
        let height = surface.height().round().max(1.0) as i32;
        let mut raster = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = raster.canvas();
        canvas.clear(opts.theme.background);

        for shape in surface.shapes() {
            draw_shape(canvas, shape, surface.style_of(shape));
        }
        for decoration in surface.decorations() {
            match decoration {
                Decoration::Axis(axis) => self.draw_axis(canvas, axis, opts),
                Decoration::Path(path) => draw_path(canvas, path),
                Decoration::Text(mark) if opts.draw_text => self.draw_text(canvas, mark, opts),
                Decoration::Text(_) => {}
            }
        }
        if opts.draw_tooltip {
            let tip = surface.tooltip();
            let tip = tip.borrow();
            if tip.visible {
                self.draw_tooltip(canvas, &tip, opts);
            }
        }

        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width, height, shapes = surface.shapes().len(), bytes = data.as_bytes().len(), "encoded png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render `surface` to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        surface: &Surface,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(surface, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    fn draw_text(&self, canvas: &skia::Canvas, mark: &TextMark, opts: &RenderOptions) {
        self.text.draw_anchored(
            canvas,
            &mark.text,
            mark.x as f32,
            mark.y as f32,
            mark.size as f32,
            opts.theme.text,
            mark.bold,
            mark.anchor,
        );
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &Axis, opts: &RenderOptions) {
        let mut paint = skia::Paint::default();
        paint.set_color(opts.theme.axis_line);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        let (a, b) = axis.domain_line();
        canvas.draw_line((a.x as f32, a.y as f32), (b.x as f32, b.y as f32), &paint);
        for (a, b) in axis.tick_lines() {
            canvas.draw_line((a.x as f32, a.y as f32), (b.x as f32, b.y as f32), &paint);
        }

        if !opts.draw_text {
            return;
        }
        for (p, label) in axis.label_positions() {
            // bottom labels hang below the tick; left labels are centered on it
            let (y, anchor) = match axis.orient {
                AxisOrient::Bottom => (p.y as f32 + AXIS_FONT_SIZE * 0.71, Anchor::Middle),
                AxisOrient::Left => (p.y as f32 + AXIS_FONT_SIZE * 0.32, Anchor::End),
            };
            self.text.draw_anchored(
                canvas,
                label,
                p.x as f32,
                y,
                AXIS_FONT_SIZE,
                opts.theme.axis_label,
                false,
                anchor,
            );
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, tip: &TooltipElement, opts: &RenderOptions) {
        let lines = tip.lines();
        let line_height = TOOLTIP_FONT_SIZE * 1.3;
        let (x, y) = (tip.position.x as f32, tip.position.y as f32);
        let text_width = if opts.draw_text {
            lines
                .iter()
                .map(|l| self.text.measure_width(l, TOOLTIP_FONT_SIZE, false))
                .fold(0.0_f32, f32::max)
        } else {
            0.0
        };
        let rect = skia::Rect::from_xywh(
            x,
            y,
            text_width + TOOLTIP_PADDING * 2.0,
            line_height * lines.len() as f32 + TOOLTIP_PADDING * 2.0,
        );

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(opts.theme.tooltip_background);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(opts.theme.tooltip_border);
        canvas.draw_round_rect(rect, 4.0, 4.0, &border);

        if !opts.draw_text {
            return;
        }
        for (i, line) in lines.iter().enumerate() {
            let baseline = y + TOOLTIP_PADDING + line_height * (i as f32 + 1.0) - (line_height - TOOLTIP_FONT_SIZE);
            self.text.draw_anchored(
                canvas,
                line,
                x + TOOLTIP_PADDING,
                baseline,
                TOOLTIP_FONT_SIZE,
                opts.theme.tooltip_text,
                false,
                Anchor::Start,
            );
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color, opacity: f64) -> skia::Color {
    let alpha = (c.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(alpha, c.r, c.g, c.b)
}

fn draw_shape(canvas: &skia::Canvas, shape: &Shape, style: Style) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(to_skia(style.fill, style.opacity));

    let stroke = style.stroke.map(|c| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(style.stroke_width as f32);
        p.set_color(to_skia(c, style.opacity));
        p
    });

    // NaN geometry stays in the scene but has nothing to paint
    match shape.geometry {
        Geometry::Rect(r) => {
            if ![r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite()) {
                return;
            }
            let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
            canvas.draw_rect(rect, &fill);
            if let Some(p) = &stroke {
                canvas.draw_rect(rect, p);
            }
        }
        Geometry::Circle(c) => {
            if ![c.cx, c.cy, c.r].iter().all(|v| v.is_finite()) {
                return;
            }
            let center = (c.cx as f32, c.cy as f32);
            canvas.draw_circle(center, c.r as f32, &fill);
            if let Some(p) = &stroke {
                canvas.draw_circle(center, c.r as f32, p);
            }
        }
    }
}

fn draw_path(canvas: &skia::Canvas, mark: &PathMark) {
    let mut finite = mark.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite());
    let Some(first) = finite.next() else {
        return;
    };
    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in finite {
        path.line_to((p.x as f32, p.y as f32));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(mark.stroke_width as f32);
    stroke.set_color(to_skia(mark.stroke, 1.0));
    if let Some([on, off]) = mark.dash {
        stroke.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    canvas.draw_path(&path, &stroke);
}

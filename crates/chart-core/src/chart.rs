// File: crates/chart-core/src/chart.rs
// Summary: ScatterChart and its headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::{fit_box, PlotRect};
use crate::overlay::{Legend, TooltipOverlay, TooltipState};
use crate::plot::ScatterPlot;
use crate::theme::Theme;
use crate::types::{Layout, DOT_RADIUS};

const TICK_LEN: f32 = 6.0;
const FONT_SIZE: f32 = 12.0;

/// Visual settings. Surface size and padding come from the plot's [`Layout`].
pub struct RenderOptions {
    pub theme: Theme,
    pub dot_radius: f32,
    pub draw_labels: bool,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            dot_radius: DOT_RADIUS,
            draw_labels: true,
            draw_grid: true,
        }
    }
}

/// Year x race-time scatter chart over one normalized dataset.
pub struct ScatterChart {
    pub plot: ScatterPlot,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl ScatterChart {
    pub fn new(plot: ScatterPlot) -> Self {
        let scales = *plot.scales();
        Self {
            x_axis: Axis::years("Year", &scales.x),
            y_axis: Axis::durations("Time in Minutes", &scales.y),
            legend: Legend::default(),
            plot,
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        overlay: Option<&TooltipOverlay>,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts, overlay)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote chart");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions, overlay: Option<&TooltipOverlay>) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts, overlay)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels as `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
        overlay: Option<&TooltipOverlay>,
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts, overlay)?;
        let layout = self.plot.layout();
        let (w, h) = (layout.width, layout.height);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None::<skia::ColorSpace>,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} surface failed", w, h);
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions, overlay: Option<&TooltipOverlay>) -> Result<skia::Surface> {
        let layout = self.plot.layout();
        let rect = PlotRect::from_layout(&layout);
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            anyhow::bail!("padding {} leaves no plot area in {}x{}", layout.padding, layout.width, layout.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((layout.width as i32, layout.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", layout.width, layout.height))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        let font = label_font();
        let hovered = overlay.and_then(|o| o.current());

        canvas.clear(theme.background);
        if opts.draw_grid {
            draw_grid(canvas, &rect, &self.x_axis, &self.y_axis, theme);
        }
        draw_axes(canvas, &rect, &self.x_axis, &self.y_axis, theme, opts.draw_labels.then_some(&font));
        draw_dots(canvas, &self.plot, opts.dot_radius, theme, hovered.as_ref().map(|s| s.index));
        draw_legend(canvas, &rect, &self.legend, theme, opts.draw_labels.then_some(&font));
        if let Some(state) = &hovered {
            draw_tooltip(canvas, &layout, state, theme, opts.draw_labels.then_some(&font));
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn label_font() -> skia::Font {
    let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default());
    match typeface {
        Some(tf) => skia::Font::from_typeface(tf, FONT_SIZE),
        None => {
            let mut font = skia::Font::default();
            font.set_size(FONT_SIZE);
            font
        }
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, r: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for t in &x.ticks {
        canvas.draw_line((t.px as f32, r.top), (t.px as f32, r.bottom), &paint);
    }
    for t in &y.ticks {
        canvas.draw_line((r.left, t.px as f32), (r.right, t.px as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, r: &PlotRect, x: &Axis, y: &Axis, theme: &Theme, font: Option<&skia::Font>) {
    let axis_paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &axis_paint);
    canvas.draw_line((r.left, r.top), (r.left, r.bottom), &axis_paint);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    for t in &x.ticks {
        let px = t.px as f32;
        canvas.draw_line((px, r.bottom), (px, r.bottom + TICK_LEN), &tick_paint);
    }
    for t in &y.ticks {
        let py = t.px as f32;
        canvas.draw_line((r.left - TICK_LEN, py), (r.left, py), &tick_paint);
    }

    let Some(font) = font else { return };
    let text = fill_paint(theme.axis_label);
    for t in &x.ticks {
        let (w, _) = font.measure_str(&t.label, Some(&text));
        canvas.draw_str(&t.label, (t.px as f32 - w * 0.5, r.bottom + TICK_LEN + FONT_SIZE + 2.0), font, &text);
    }
    for t in &y.ticks {
        let (w, _) = font.measure_str(&t.label, Some(&text));
        canvas.draw_str(&t.label, (r.left - TICK_LEN - 4.0 - w, t.px as f32 + FONT_SIZE * 0.35), font, &text);
    }
    let (w, _) = font.measure_str(&x.label, Some(&text));
    canvas.draw_str(&x.label, (r.right - w, r.bottom + TICK_LEN + FONT_SIZE * 2.0 + 8.0), font, &text);
    canvas.draw_str(&y.label, (r.left - TICK_LEN - 40.0, r.top - FONT_SIZE), font, &text);
}

fn draw_dots(canvas: &skia::Canvas, plot: &ScatterPlot, radius: f32, theme: &Theme, hovered: Option<usize>) {
    let stroke = stroke_paint(theme.dot_stroke, 1.0);
    let highlight = stroke_paint(theme.dot_stroke, 2.5);
    for (i, (x, y, rec)) in plot.points().enumerate() {
        let mut fill = fill_paint(theme.dot_fill(rec.has_doping_allegation()));
        let center = (x as f32, y as f32);
        if hovered == Some(i) {
            fill.set_alpha_f(0.85);
            canvas.draw_circle(center, radius, &fill);
            canvas.draw_circle(center, radius, &highlight);
        } else {
            canvas.draw_circle(center, radius, &fill);
            canvas.draw_circle(center, radius, &stroke);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, r: &PlotRect, legend: &Legend, theme: &Theme, font: Option<&skia::Font>) {
    let swatch = 12.0;
    let row_h = 20.0;
    let right = r.right - 8.0;
    let text = fill_paint(theme.axis_label);
    for (row, entry) in legend.entries.iter().enumerate() {
        let y = r.top + 8.0 + row as f32 * row_h;
        let rect = skia::Rect::from_xywh(right - swatch, y, swatch, swatch);
        canvas.draw_rect(rect, &fill_paint(theme.dot_fill(entry.doping)));
        if let Some(font) = font {
            let (w, _) = font.measure_str(entry.label, Some(&text));
            canvas.draw_str(entry.label, (right - swatch - 6.0 - w, y + swatch - 1.0), font, &text);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, layout: &Layout, state: &TooltipState, theme: &Theme, font: Option<&skia::Font>) {
    let lines = state.tooltip.lines();
    let text = fill_paint(theme.tooltip_text);
    let line_h = FONT_SIZE + 4.0;
    let pad = 6.0;
    let text_w = match font {
        Some(font) => lines.iter().map(|l| font.measure_str(l, Some(&text)).0).fold(0.0, f32::max),
        None => 160.0,
    };
    let (w, h) = (text_w + pad * 2.0, lines.len() as f32 * line_h + pad * 2.0);
    let (ax, ay) = (state.anchor.0 as f32, state.anchor.1 as f32);
    let (left, top) = fit_box(ax, ay, w, h, layout.width as f32, layout.height as f32);

    let rect = skia::Rect::from_xywh(left, top, w, h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(theme.tooltip_fill));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.axis_line, 1.0));
    let Some(font) = font else { return };
    for (i, line) in lines.iter().enumerate() {
        let baseline = top + pad + (i as f32 + 1.0) * line_h - 4.0;
        canvas.draw_str(line, (left + pad, baseline), font, &text);
    }
}

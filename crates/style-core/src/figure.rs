// File: crates/style-core/src/figure.rs
// Summary: Retained figure model and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use log::debug;
use skia_safe as skia;

use crate::axes::{Annotation, Axes};
use crate::geometry::{clamp, fig_to_pixels, LayoutRect};
use crate::handle::{FigureHandle, FontSlant, FontWeight, HAlign, Spine, TextSpec};
use crate::palette::parse_color;
use crate::rc::RcParams;
use crate::sizes::{FigureSize, DEFAULT_DPI};
use crate::text::{TextLook, TextShaper};
use crate::textbox::BoxKind;
use crate::ticks::{format_tick, linspace};

/// Axes placement before any layout adjustment (left, bottom, right, top).
pub const DEFAULT_SUBPLOT: LayoutRect = LayoutRect::new(0.125, 0.11, 0.9, 0.88);

const TICK_COUNT: usize = 6;
const GRID_COLOR: &str = "#b0b0b0";
const SPINE_COLOR: &str = "black";
/// Layout padding, as a multiple of the tick label size.
const LAYOUT_PAD: f32 = 1.08;

pub struct RenderOptions {
    /// Skip all text (titles, labels, ticks, annotations); keeps output deterministic across font setups.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_text: true }
    }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub size: FigureSize,
    pub dpi: f32,
    pub facecolor: String,
    pub suptitle: Option<TextSpec>,
    pub texts: Vec<TextSpec>,
    /// Set by `tight_layout`; `None` keeps the default subplot placement.
    pub layout: Option<LayoutRect>,
}

/// Create a figure of `size` (at the default dpi) with a single axes.
pub fn subplots(size: FigureSize) -> (Figure, Axes) {
    (Figure::new(size), Axes::new())
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            dpi: DEFAULT_DPI,
            facecolor: "white".to_string(),
            suptitle: None,
            texts: Vec::new(),
            layout: None,
        }
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        self.size.to_pixels(self.dpi)
    }

    fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.dpi / 72.0
    }

    /// Space reserved below (x) and left of (y) the axes for tick labels, in pixels.
    fn tick_room(&self, axes: &Axes, rc: &RcParams) -> (f32, f32) {
        if axes.show_ticks {
            (self.pt_to_px(rc.xtick_label_size) * 1.8, self.pt_to_px(rc.ytick_label_size) * 3.0)
        } else {
            (0.0, 0.0)
        }
    }

    /// Pixel rectangle the axes occupy for this figure's layout.
    pub fn axes_rect(&self, axes: &Axes, rc: &RcParams) -> skia::Rect {
        let (w, h) = self.pixel_size();
        let Some(rect) = self.layout else {
            return DEFAULT_SUBPLOT.to_pixels(w, h);
        };

        let outer = rect.to_pixels(w, h);
        let pad = self.pt_to_px(LAYOUT_PAD * rc.ytick_label_size);
        let label_room = |present: bool| if present { self.pt_to_px(rc.axes_label_size) * 1.6 } else { 0.0 };
        let (xtick_room, ytick_room) = self.tick_room(axes, rc);
        let title_room = if axes.title.is_some() { self.pt_to_px(rc.axes_title_size) * 1.6 } else { 0.0 };

        let left = outer.left + pad + ytick_room + label_room(axes.ylabel.is_some());
        let right = outer.right - pad;
        let top = outer.top + pad + title_room;
        let bottom = outer.bottom - pad - xtick_room - label_room(axes.xlabel.is_some());
        // keep at least a 1px plot area
        skia::Rect::from_ltrb(left, top, right.max(left + 1.0), bottom.max(top + 1.0))
    }

    /// Render the figure and its axes to PNG bytes.
    pub fn render_to_png_bytes(&self, axes: &Axes, rc: &RcParams, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = self.pixel_size();
        debug!("render figure {w}x{h}px (dpi={})", self.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(parse_color(&self.facecolor).context("figure facecolor")?);

        let plot = self.axes_rect(axes, rc);
        let shaper = opts.draw_text.then(|| TextShaper::new(rc));

        draw_axes_background(canvas, plot, axes)?;
        if axes.grid {
            draw_grid(canvas, plot, self.pt_to_px(0.8))?;
        }
        draw_spines(canvas, plot, axes, self.pt_to_px(0.8))?;
        if axes.show_ticks {
            draw_tick_marks(canvas, plot, self.pt_to_px(3.5), self.pt_to_px(0.8))?;
        }

        if let Some(shaper) = &shaper {
            self.draw_axes_text(canvas, shaper, plot, axes, rc)?;
            for a in &axes.annotations {
                self.draw_annotation(canvas, shaper, plot, axes, a)?;
            }
            for spec in self.suptitle.iter().chain(self.texts.iter()) {
                self.draw_fig_text(canvas, shaper, spec)?;
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        axes: &Axes,
        rc: &RcParams,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(axes, rc, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    fn draw_fig_text(&self, canvas: &skia::Canvas, shaper: &TextShaper, spec: &TextSpec) -> Result<()> {
        let (w, h) = self.pixel_size();
        let look = TextLook {
            size: self.pt_to_px(spec.size),
            color: parse_color(&spec.color)?,
            weight: spec.weight,
            slant: spec.slant,
        };
        let (x, y) = fig_to_pixels(spec.x, spec.y, w, h);
        shaper.draw(canvas, &spec.text, x, y, spec.align, &look);
        Ok(())
    }

    fn draw_axes_text(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: skia::Rect,
        axes: &Axes,
        rc: &RcParams,
    ) -> Result<()> {
        let ink = parse_color(SPINE_COLOR)?;
        let plain = |size_pt: f32| TextLook {
            size: self.pt_to_px(size_pt),
            color: ink,
            weight: FontWeight::Normal,
            slant: FontSlant::Upright,
        };

        if axes.show_ticks {
            let gap = self.pt_to_px(3.5 + 3.5);
            let xs = linspace(axes.xlim.0, axes.xlim.1, TICK_COUNT);
            let xstep = (axes.xlim.1 - axes.xlim.0) / (TICK_COUNT as f64 - 1.0);
            let xlook = plain(rc.xtick_label_size);
            for (px, v) in linspace(plot.left as f64, plot.right as f64, TICK_COUNT).into_iter().zip(xs) {
                let y = plot.bottom + gap + xlook.size * 0.5;
                shaper.draw(canvas, &format_tick(v, xstep), px as f32, y, HAlign::Center, &xlook);
            }
            let ys = linspace(axes.ylim.0, axes.ylim.1, TICK_COUNT);
            let ystep = (axes.ylim.1 - axes.ylim.0) / (TICK_COUNT as f64 - 1.0);
            let ylook = plain(rc.ytick_label_size);
            for (py, v) in linspace(plot.bottom as f64, plot.top as f64, TICK_COUNT).into_iter().zip(ys) {
                shaper.draw(canvas, &format_tick(v, ystep), plot.left - gap, py as f32, HAlign::Right, &ylook);
            }
        }

        let (xtick_room, ytick_room) = self.tick_room(axes, rc);
        let label = plain(rc.axes_label_size);
        if let Some(text) = &axes.xlabel {
            let y = plot.bottom + xtick_room + label.size;
            shaper.draw(canvas, text, plot.center_x(), y, HAlign::Center, &label);
        }
        if let Some(text) = &axes.ylabel {
            // rotate so the label reads bottom-to-top along the left edge
            let x = plot.left - ytick_room - label.size * 0.8;
            canvas.save();
            canvas.rotate(-90.0, Some((x, plot.center_y()).into()));
            shaper.draw(canvas, text, x, plot.center_y(), HAlign::Center, &label);
            canvas.restore();
        }
        if let Some(text) = &axes.title {
            let look = plain(rc.axes_title_size);
            shaper.draw(canvas, text, plot.center_x(), plot.top - look.size, HAlign::Center, &look);
        }
        Ok(())
    }

    fn draw_annotation(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: skia::Rect,
        axes: &Axes,
        a: &Annotation,
    ) -> Result<()> {
        let look = TextLook {
            size: self.pt_to_px(a.size),
            color: parse_color(&a.color)?,
            weight: FontWeight::Normal,
            slant: FontSlant::Upright,
        };
        let (fx, fy) = axes.to_fraction(a.x, a.y);
        let x = plot.left + fx as f32 * plot.width();
        let y = plot.bottom - fy as f32 * plot.height();

        if let Some(bbox) = &a.bbox {
            let (tw, th) = shaper.measure(&a.text, &look);
            let pad = bbox.boxstyle.pad * look.size;
            let rect = skia::Rect::from_ltrb(x - tw * 0.5 - pad, y - th * 0.5 - pad, x + tw * 0.5 + pad, y + th * 0.5 + pad);

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(parse_color(&bbox.facecolor)?);
            fill.set_alpha_f(clamp(bbox.alpha, 0.0, 1.0));

            let mut border = skia::Paint::default();
            border.set_anti_alias(true);
            border.set_style(skia::paint::Style::Stroke);
            border.set_color(parse_color(&bbox.edgecolor)?);
            border.set_alpha_f(clamp(bbox.alpha, 0.0, 1.0));
            border.set_stroke_width(self.pt_to_px(bbox.linewidth));

            match bbox.boxstyle.kind {
                BoxKind::Round => {
                    canvas.draw_round_rect(rect, pad, pad, &fill);
                    canvas.draw_round_rect(rect, pad, pad, &border);
                }
                BoxKind::Square => {
                    canvas.draw_rect(rect, &fill);
                    canvas.draw_rect(rect, &border);
                }
            }
        }

        shaper.draw(canvas, &a.text, x, y, HAlign::Center, &look);
        Ok(())
    }
}

impl FigureHandle for Figure {
    fn set_facecolor(&mut self, color: &str) {
        self.facecolor = color.to_string();
    }

    fn suptitle(&mut self, spec: TextSpec) {
        self.suptitle = Some(spec);
    }

    fn figtext(&mut self, spec: TextSpec) {
        self.texts.push(spec);
    }

    fn tight_layout(&mut self, rect: LayoutRect) {
        self.layout = Some(rect);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes_background(canvas: &skia::Canvas, plot: skia::Rect, axes: &Axes) -> Result<()> {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(parse_color(&axes.facecolor)?);
    canvas.draw_rect(plot, &paint);

    for p in &axes.patches {
        // clip to the axes box
        let frac = |x: f64, y: f64| {
            let (fx, fy) = axes.to_fraction(x, y);
            (clamp(fx, 0.0, 1.0), clamp(fy, 0.0, 1.0))
        };
        let (fx0, fy0) = frac(p.x0, p.y0);
        let (fx1, fy1) = frac(p.x1, p.y1);
        let rect = skia::Rect::from_ltrb(
            plot.left + fx0.min(fx1) as f32 * plot.width(),
            plot.bottom - fy0.max(fy1) as f32 * plot.height(),
            plot.left + fx0.max(fx1) as f32 * plot.width(),
            plot.bottom - fy0.min(fy1) as f32 * plot.height(),
        );
        paint.set_color(parse_color(&p.fill)?);
        canvas.draw_rect(rect, &paint);
    }
    Ok(())
}

fn draw_grid(canvas: &skia::Canvas, plot: skia::Rect, stroke: f32) -> Result<()> {
    let mut paint = skia::Paint::default();
    paint.set_color(parse_color(GRID_COLOR)?);
    paint.set_anti_alias(true);
    paint.set_stroke_width(stroke);

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, TICK_COUNT) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, TICK_COUNT) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
    Ok(())
}

fn draw_spines(canvas: &skia::Canvas, plot: skia::Rect, axes: &Axes, stroke: f32) -> Result<()> {
    let mut paint = skia::Paint::default();
    paint.set_color(parse_color(SPINE_COLOR)?);
    paint.set_anti_alias(true);
    paint.set_stroke_width(stroke);

    for spine in axes.visible_spines() {
        let (a, b) = match spine {
            Spine::Top => ((plot.left, plot.top), (plot.right, plot.top)),
            Spine::Right => ((plot.right, plot.top), (plot.right, plot.bottom)),
            Spine::Bottom => ((plot.left, plot.bottom), (plot.right, plot.bottom)),
            Spine::Left => ((plot.left, plot.top), (plot.left, plot.bottom)),
        };
        canvas.draw_line(a, b, &paint);
    }
    Ok(())
}

fn draw_tick_marks(canvas: &skia::Canvas, plot: skia::Rect, len: f32, stroke: f32) -> Result<()> {
    let mut paint = skia::Paint::default();
    paint.set_color(parse_color(SPINE_COLOR)?);
    paint.set_stroke_width(stroke);

    for x in linspace(plot.left as f64, plot.right as f64, TICK_COUNT) {
        canvas.draw_line((x as f32, plot.bottom), (x as f32, plot.bottom + len), &paint);
    }
    for y in linspace(plot.top as f64, plot.bottom as f64, TICK_COUNT) {
        canvas.draw_line((plot.left - len, y as f32), (plot.left, y as f32), &paint);
    }
    Ok(())
}

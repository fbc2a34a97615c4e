// File: crates/style-core/src/text.rs
// Summary: Text shaper using Skia textlayout, driven by the caller's RcParams font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::handle::{FontSlant, FontWeight, HAlign};
use crate::rc::RcParams;

/// How a run of text should look once shaped. `size` is in pixels.
#[derive(Clone, Copy, Debug)]
pub struct TextLook {
    pub size: f32,
    pub color: skia::Color,
    pub weight: FontWeight,
    pub slant: FontSlant,
}

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(rc: &RcParams) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let families = rc.font_families().into_iter().map(str::to_string).collect();
        Self { fonts: fc, families }
    }

    fn make_style(&self, look: &TextLook) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(look.size.max(1.0));
        ts.set_color(look.color);
        ts.set_font_families(&self.families[..]);
        let style = match (look.weight, look.slant) {
            (FontWeight::Normal, FontSlant::Upright) => skia::FontStyle::normal(),
            (FontWeight::Bold, FontSlant::Upright) => skia::FontStyle::bold(),
            (FontWeight::Normal, FontSlant::Italic) => skia::FontStyle::italic(),
            (FontWeight::Bold, FontSlant::Italic) => skia::FontStyle::bold_italic(),
        };
        ts.set_font_style(style);
        ts
    }

    pub fn layout(&self, text: &str, look: &TextLook) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&self.make_style(look));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of the shaped text, in pixels.
    pub fn measure(&self, text: &str, look: &TextLook) -> (f32, f32) {
        let p = self.layout(text, look);
        (p.longest_line(), p.height())
    }

    /// Draw `text` with its vertical centre at `y`, aligned horizontally around `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, align: HAlign, look: &TextLook) {
        let p = self.layout(text, look);
        let w = p.longest_line();
        let left = match align {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }
}

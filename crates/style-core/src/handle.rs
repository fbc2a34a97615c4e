// File: crates/style-core/src/handle.rs
// Summary: Figure/axes seams the style layer mutates; implemented by `Figure`/`Axes` or by a host backend.

use crate::geometry::LayoutRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spine {
    Top,
    Right,
    Bottom,
    Left,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Top, Spine::Right, Spine::Bottom, Spine::Left];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Upright,
    Italic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A piece of figure-level text. `x`/`y` are figure fractions; `size` is in points.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub color: String,
    pub align: HAlign,
}

impl TextSpec {
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            weight: FontWeight::Normal,
            slant: FontSlant::Upright,
            color: color.into(),
            align: HAlign::Center,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    pub fn aligned(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }
}

/// Figure-level presentation the style layer touches.
pub trait FigureHandle {
    fn set_facecolor(&mut self, color: &str);
    /// Title centred above all subplots.
    fn suptitle(&mut self, spec: TextSpec);
    /// Free text placed in figure coordinates.
    fn figtext(&mut self, spec: TextSpec);
    /// Re-fit subplots inside `rect`; `LayoutRect::FULL` means no reserved margin.
    fn tight_layout(&mut self, rect: LayoutRect);
}

/// Axes-level presentation the style layer touches.
pub trait AxesHandle {
    fn set_spine_visible(&mut self, spine: Spine, visible: bool);
    fn set_grid(&mut self, on: bool);
}

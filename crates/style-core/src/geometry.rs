// File: crates/style-core/src/geometry.rs
// Summary: Figure-fraction rectangles and their mapping to pixel space.

use skia_safe as skia;

/// Rectangle in figure fractions (0..1, origin bottom-left), as used by tight layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl LayoutRect {
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self { left, bottom, right, top }
    }

    /// The whole figure, no reserved margin.
    pub const FULL: LayoutRect = LayoutRect::new(0.0, 0.0, 1.0, 1.0);

    /// Fraction of the height kept free above `top`.
    pub fn reserved_top(&self) -> f32 {
        1.0 - self.top
    }

    /// Convert to pixels for a `w`×`h` surface (pixel origin is top-left).
    pub fn to_pixels(&self, w: i32, h: i32) -> skia::Rect {
        let (w, h) = (w as f32, h as f32);
        skia::Rect::from_ltrb(self.left * w, (1.0 - self.top) * h, self.right * w, (1.0 - self.bottom) * h)
    }
}

/// Map a figure-fraction point to pixels (y flipped).
pub fn fig_to_pixels(x: f32, y: f32, w: i32, h: i32) -> (f32, f32) {
    (x * w as f32, (1.0 - y) * h as f32)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

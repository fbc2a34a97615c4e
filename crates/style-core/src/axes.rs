// File: crates/style-core/src/axes.rs
// Summary: Retained axes model: spines, grid, limits, labels, patches and annotations.

use crate::handle::{AxesHandle, Spine};
use crate::textbox::TextBoxStyle;

/// Filled rectangle in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill: String,
}

/// Text anchored (centred) at a data-coordinate point, optionally boxed.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Points.
    pub size: f32,
    pub color: String,
    pub bbox: Option<TextBoxStyle>,
}

#[derive(Clone, Debug)]
pub struct Axes {
    spines: [bool; 4],
    pub grid: bool,
    pub facecolor: String,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub show_ticks: bool,
    pub patches: Vec<Patch>,
    pub annotations: Vec<Annotation>,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    /// Fresh axes: all spines shown, grid on, unit limits.
    pub fn new() -> Self {
        Self {
            spines: [true; 4],
            grid: true,
            facecolor: "white".to_string(),
            title: None,
            xlabel: None,
            ylabel: None,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            show_ticks: true,
            patches: Vec::new(),
            annotations: Vec::new(),
        }
    }

    fn spine_index(spine: Spine) -> usize {
        match spine {
            Spine::Top => 0,
            Spine::Right => 1,
            Spine::Bottom => 2,
            Spine::Left => 3,
        }
    }

    pub fn spine_visible(&self, spine: Spine) -> bool {
        self.spines[Self::spine_index(spine)]
    }

    pub fn visible_spines(&self) -> impl Iterator<Item = Spine> + '_ {
        Spine::ALL.into_iter().filter(|s| self.spine_visible(*s))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.xlim = (min, max);
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.ylim = (min, max);
    }

    pub fn add_patch(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, fill: impl Into<String>) {
        self.patches.push(Patch { x0, y0, x1, y1, fill: fill.into() });
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Map a data point into `0..1` axes fractions (y up).
    /// Inverted limits (`min > max`) flip the axis; a zero-width range maps everything to its start.
    pub fn to_fraction(&self, x: f64, y: f64) -> (f64, f64) {
        (fraction(x, self.xlim), fraction(y, self.ylim))
    }
}

fn fraction(v: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < 1e-9 {
        return 0.0;
    }
    (v - lo) / span
}

impl AxesHandle for Axes {
    fn set_spine_visible(&mut self, spine: Spine, visible: bool) {
        self.spines[Self::spine_index(spine)] = visible;
    }

    fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }
}

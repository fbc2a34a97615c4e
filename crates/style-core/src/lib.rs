// File: crates/style-core/src/lib.rs
// Summary: HBR plot style entry point; exports palette, presets, style helpers and the figure model.

pub mod aesthetics;
pub mod axes;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod handle;
pub mod palette;
pub mod rc;
pub mod sizes;
pub mod text;
pub mod textbox;
pub mod ticks;

pub use aesthetics::{set_figure_aesthetics, set_figure_aesthetics_with, AestheticsOptions, SubtitlePolicy};
pub use axes::{Annotation, Axes};
pub use error::StyleError;
pub use figure::{subplots, Figure, RenderOptions};
pub use geometry::LayoutRect;
pub use handle::{AxesHandle, FigureHandle, Spine, TextSpec};
pub use palette::HBR_COLORS;
pub use rc::{apply_hbr_style, RcParams};
pub use sizes::{figure_size, FigureSize, STANDARD_FIGURE_SIZES};
pub use textbox::{clean_text_box, TextBoxStyle};

// File: crates/style-core/src/aesthetics.rs
// Summary: Common figure aesthetics: chrome removal, background, title/subtitle and layout padding.

use log::{debug, warn};

use crate::error::StyleError;
use crate::geometry::LayoutRect;
use crate::handle::{AxesHandle, FigureHandle, HAlign, Spine, TextSpec};
use crate::palette;

pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_Y: f32 = 0.98;
pub const SUBTITLE_SIZE: f32 = 11.0;
pub const SUBTITLE_X: f32 = 0.5;
pub const SUBTITLE_Y: f32 = 0.94;

/// Layout when only a title is shown: top 4% reserved.
pub const TITLE_LAYOUT: LayoutRect = LayoutRect::new(0.0, 0.0, 1.0, 0.96);
/// Layout when title and subtitle are shown: top 8% reserved.
pub const TITLE_SUBTITLE_LAYOUT: LayoutRect = LayoutRect::new(0.0, 0.0, 1.0, 0.92);

/// What to do with a subtitle passed without a title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubtitlePolicy {
    /// Drop the subtitle (logged at warn) and use the plain layout.
    #[default]
    Lenient,
    /// Reject the call before touching the figure.
    Strict,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AestheticsOptions {
    pub subtitle_policy: SubtitlePolicy,
}

/// Set common figure aesthetics including title and subtitle.
///
/// Empty strings count as absent. A subtitle without a title is ignored.
pub fn set_figure_aesthetics<F, A>(fig: &mut F, ax: &mut A, title: Option<&str>, subtitle: Option<&str>)
where
    F: FigureHandle + ?Sized,
    A: AxesHandle + ?Sized,
{
    let title = non_empty(title);
    let subtitle = non_empty(subtitle);

    for spine in Spine::ALL {
        ax.set_spine_visible(spine, false);
    }
    ax.set_grid(false);
    fig.set_facecolor(palette::WHITE);

    let Some(title) = title else {
        if let Some(sub) = subtitle {
            warn!("subtitle '{sub}' ignored: no title given");
        }
        debug!("aesthetics: plain tight layout");
        fig.tight_layout(LayoutRect::FULL);
        return;
    };

    fig.suptitle(TextSpec::new(title, 0.5, TITLE_Y, TITLE_SIZE, palette::TEXT).bold());

    match subtitle {
        Some(sub) => {
            fig.figtext(
                TextSpec::new(sub, SUBTITLE_X, SUBTITLE_Y, SUBTITLE_SIZE, palette::LIGHT_TEXT)
                    .italic()
                    .aligned(HAlign::Center),
            );
            debug!("aesthetics: title+subtitle layout (top={})", TITLE_SUBTITLE_LAYOUT.top);
            fig.tight_layout(TITLE_SUBTITLE_LAYOUT);
        }
        None => {
            debug!("aesthetics: title layout (top={})", TITLE_LAYOUT.top);
            fig.tight_layout(TITLE_LAYOUT);
        }
    }
}

/// Like [`set_figure_aesthetics`], with the subtitle/title coupling governed by `opts`.
pub fn set_figure_aesthetics_with<F, A>(
    fig: &mut F,
    ax: &mut A,
    title: Option<&str>,
    subtitle: Option<&str>,
    opts: &AestheticsOptions,
) -> Result<(), StyleError>
where
    F: FigureHandle + ?Sized,
    A: AxesHandle + ?Sized,
{
    if opts.subtitle_policy == SubtitlePolicy::Strict
        && non_empty(title).is_none()
        && non_empty(subtitle).is_some()
    {
        return Err(StyleError::SubtitleWithoutTitle);
    }
    set_figure_aesthetics(fig, ax, title, subtitle);
    Ok(())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

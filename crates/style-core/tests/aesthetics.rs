// File: crates/style-core/tests/aesthetics.rs
// Purpose: Figure aesthetics call sequence (title/subtitle/layout paths) against a recording backend.

use hbr_style::aesthetics::{TITLE_LAYOUT, TITLE_SUBTITLE_LAYOUT};
use hbr_style::handle::{FontSlant, FontWeight, HAlign};
use hbr_style::palette;
use hbr_style::{
    set_figure_aesthetics, set_figure_aesthetics_with, subplots, AestheticsOptions, AxesHandle,
    FigureHandle, FigureSize, LayoutRect, Spine, StyleError, SubtitlePolicy, TextSpec,
};

#[derive(Debug, PartialEq)]
enum Call {
    Spine(Spine, bool),
    Grid(bool),
    Face(String),
    Suptitle(TextSpec),
    Figtext(TextSpec),
    Layout(LayoutRect),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl FigureHandle for Recorder {
    fn set_facecolor(&mut self, color: &str) {
        self.calls.push(Call::Face(color.to_string()));
    }
    fn suptitle(&mut self, spec: TextSpec) {
        self.calls.push(Call::Suptitle(spec));
    }
    fn figtext(&mut self, spec: TextSpec) {
        self.calls.push(Call::Figtext(spec));
    }
    fn tight_layout(&mut self, rect: LayoutRect) {
        self.calls.push(Call::Layout(rect));
    }
}

impl AxesHandle for Recorder {
    fn set_spine_visible(&mut self, spine: Spine, visible: bool) {
        self.calls.push(Call::Spine(spine, visible));
    }
    fn set_grid(&mut self, on: bool) {
        self.calls.push(Call::Grid(on));
    }
}

fn run(title: Option<&str>, subtitle: Option<&str>) -> (Vec<Call>, Vec<Call>) {
    let mut fig = Recorder::default();
    let mut ax = Recorder::default();
    set_figure_aesthetics(&mut fig, &mut ax, title, subtitle);
    (fig.calls, ax.calls)
}

fn titles(calls: &[Call]) -> usize {
    calls.iter().filter(|c| matches!(c, Call::Suptitle(_))).count()
}

fn figtexts(calls: &[Call]) -> usize {
    calls.iter().filter(|c| matches!(c, Call::Figtext(_))).count()
}

fn layouts(calls: &[Call]) -> Vec<LayoutRect> {
    calls.iter().filter_map(|c| if let Call::Layout(r) = c { Some(*r) } else { None }).collect()
}

#[test]
fn chrome_is_always_removed() {
    let (fig, ax) = run(None, None);
    assert_eq!(
        ax,
        vec![
            Call::Spine(Spine::Top, false),
            Call::Spine(Spine::Right, false),
            Call::Spine(Spine::Bottom, false),
            Call::Spine(Spine::Left, false),
            Call::Grid(false),
        ]
    );
    assert_eq!(fig.first(), Some(&Call::Face(palette::WHITE.to_string())));
}

#[test]
fn no_title_uses_plain_layout() {
    let (fig, _) = run(None, None);
    assert_eq!(titles(&fig), 0);
    assert_eq!(figtexts(&fig), 0);
    assert_eq!(layouts(&fig), vec![LayoutRect::FULL]);
}

#[test]
fn title_only_reserves_four_percent() {
    let (fig, _) = run(Some("Revenue by quarter"), None);
    assert_eq!(titles(&fig), 1);
    assert_eq!(figtexts(&fig), 0);
    assert_eq!(layouts(&fig), vec![TITLE_LAYOUT]);
    assert!((TITLE_LAYOUT.reserved_top() - 0.04).abs() < 1e-6);

    let Some(Call::Suptitle(spec)) = fig.iter().find(|c| matches!(c, Call::Suptitle(_))) else {
        panic!("expected a suptitle call");
    };
    assert_eq!(spec.text, "Revenue by quarter");
    assert_eq!((spec.y, spec.size), (0.98, 16.0));
    assert_eq!(spec.weight, FontWeight::Bold);
    assert_eq!(spec.color, palette::TEXT);
}

#[test]
fn title_and_subtitle_reserve_eight_percent() {
    let (fig, _) = run(Some("Growth matrix"), Some("FY2024, all regions"));
    assert_eq!(titles(&fig), 1);
    assert_eq!(figtexts(&fig), 1);
    assert_eq!(layouts(&fig), vec![TITLE_SUBTITLE_LAYOUT]);
    assert!((TITLE_SUBTITLE_LAYOUT.reserved_top() - 0.08).abs() < 1e-6);

    let Some(Call::Figtext(spec)) = fig.iter().find(|c| matches!(c, Call::Figtext(_))) else {
        panic!("expected a figtext call");
    };
    assert_eq!(spec.text, "FY2024, all regions");
    assert_eq!((spec.x, spec.y, spec.size), (0.5, 0.94, 11.0));
    assert_eq!(spec.slant, FontSlant::Italic);
    assert_eq!(spec.align, HAlign::Center);
    assert_eq!(spec.color, palette::LIGHT_TEXT);
}

#[test]
fn layout_is_applied_last() {
    let (fig, _) = run(Some("T"), Some("S"));
    assert!(matches!(fig.last(), Some(Call::Layout(_))));
}

#[test]
fn lenient_drops_subtitle_without_title() {
    let (fig, _) = run(None, Some("orphan"));
    assert_eq!(titles(&fig), 0);
    assert_eq!(figtexts(&fig), 0);
    assert_eq!(layouts(&fig), vec![LayoutRect::FULL]);
}

#[test]
fn empty_title_counts_as_absent() {
    let (fig, _) = run(Some(""), Some("sub"));
    assert_eq!(titles(&fig), 0);
    assert_eq!(layouts(&fig), vec![LayoutRect::FULL]);

    let (fig, _) = run(Some("T"), Some(""));
    assert_eq!(figtexts(&fig), 0);
    assert_eq!(layouts(&fig), vec![TITLE_LAYOUT]);
}

#[test]
fn strict_rejects_subtitle_without_title_untouched() {
    let opts = AestheticsOptions { subtitle_policy: SubtitlePolicy::Strict };
    let mut fig = Recorder::default();
    let mut ax = Recorder::default();
    let res = set_figure_aesthetics_with(&mut fig, &mut ax, None, Some("orphan"), &opts);
    assert_eq!(res, Err(StyleError::SubtitleWithoutTitle));
    assert!(fig.calls.is_empty());
    assert!(ax.calls.is_empty());

    set_figure_aesthetics_with(&mut fig, &mut ax, Some("T"), Some("S"), &opts).expect("valid pair");
    assert_eq!(layouts(&fig.calls), vec![TITLE_SUBTITLE_LAYOUT]);
}

#[test]
fn applies_to_retained_figure_model() {
    let (mut fig, mut ax) = subplots(FigureSize::new(6.0, 4.0));
    fig.facecolor = palette::BACKGROUND.to_string();
    assert!(ax.grid);
    assert_eq!(fig.layout, None);

    set_figure_aesthetics(&mut fig, &mut ax, Some("Title"), Some("Subtitle"));

    assert_eq!(ax.visible_spines().count(), 0);
    assert!(!ax.grid);
    assert_eq!(fig.facecolor, palette::WHITE);
    assert_eq!(fig.suptitle.as_ref().map(|t| t.text.as_str()), Some("Title"));
    assert_eq!(fig.texts.len(), 1);
    assert_eq!(fig.layout, Some(TITLE_SUBTITLE_LAYOUT));
}

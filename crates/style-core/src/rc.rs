// File: crates/style-core/src/rc.rs
// Summary: Rendering defaults (fonts, text sizes) owned by the caller and passed to every render.
// Notes:
// - There is no process-wide state here. Styling mutates a caller-owned
//   `RcParams`, so two figures can render with different settings side by side.

/// Font and text-size defaults consulted when a figure is rendered.
/// Sizes are in points.
#[derive(Clone, Debug, PartialEq)]
pub struct RcParams {
    /// Generic family; `sans-serif` selects `sans_serif` as the preference list.
    pub font_family: String,
    pub sans_serif: Vec<String>,
    pub axes_label_size: f32,
    pub axes_title_size: f32,
    pub xtick_label_size: f32,
    pub ytick_label_size: f32,
}

impl Default for RcParams {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            sans_serif: vec!["DejaVu Sans".into(), "Bitstream Vera Sans".into(), "Arial".into()],
            axes_label_size: 10.0,
            axes_title_size: 12.0,
            xtick_label_size: 10.0,
            ytick_label_size: 10.0,
        }
    }
}

impl RcParams {
    /// Defaults with the HBR style already applied.
    pub fn hbr() -> Self {
        let mut rc = Self::default();
        apply_hbr_style(&mut rc);
        rc
    }

    /// Font families to hand to the shaper, most preferred first.
    pub fn font_families(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.sans_serif.len() + 1);
        if self.font_family == "sans-serif" {
            out.extend(self.sans_serif.iter().map(String::as_str));
        }
        out.push(self.font_family.as_str());
        out
    }
}

/// Apply HBR-style font and text-size settings to `rc`.
pub fn apply_hbr_style(rc: &mut RcParams) {
    rc.font_family = "sans-serif".to_string();
    rc.sans_serif = vec!["Arial".into(), "Helvetica".into(), "DejaVu Sans".into()];
    rc.axes_label_size = 11.0;
    rc.axes_title_size = 14.0;
    rc.xtick_label_size = 10.0;
    rc.ytick_label_size = 10.0;
}

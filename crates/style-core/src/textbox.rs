// File: crates/style-core/src/textbox.rs
// Summary: Clean bordered text-box presentation (fill, border, opacity, rounding).

use std::fmt;
use std::str::FromStr;

use crate::palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxKind {
    Round,
    Square,
}

/// Box outline shape plus the padding between text and border, in font-size units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    pub kind: BoxKind,
    pub pad: f32,
}

impl BoxStyle {
    pub const fn round(pad: f32) -> Self {
        Self { kind: BoxKind::Round, pad }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            BoxKind::Round => "round",
            BoxKind::Square => "square",
        };
        write!(f, "{kind},pad={}", self.pad)
    }
}

impl FromStr for BoxStyle {
    type Err = String;

    /// Parses `"<kind>[,pad=<f32>]"`; pad defaults to 0.3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let kind = match parts.next() {
            Some("round") => BoxKind::Round,
            Some("square") => BoxKind::Square,
            other => return Err(format!("unknown box kind: {:?}", other.unwrap_or(""))),
        };
        let mut pad = 0.3;
        for part in parts {
            match part.split_once('=') {
                Some(("pad", v)) => {
                    pad = v.parse::<f32>().map_err(|e| format!("bad pad '{v}': {e}"))?;
                }
                _ => return Err(format!("unknown box attribute: {part}")),
            }
        }
        Ok(Self { kind, pad })
    }
}

/// Presentation attributes for an annotation box. Built fresh per call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBoxStyle {
    pub facecolor: String,
    pub edgecolor: String,
    pub alpha: f32,
    pub boxstyle: BoxStyle,
    pub linewidth: f32,
}

impl TextBoxStyle {
    /// Keyword-style attribute list, in a stable order.
    pub fn to_props(&self) -> Vec<(&'static str, String)> {
        vec![
            ("facecolor", self.facecolor.clone()),
            ("edgecolor", self.edgecolor.clone()),
            ("alpha", self.alpha.to_string()),
            ("boxstyle", self.boxstyle.to_string()),
            ("linewidth", self.linewidth.to_string()),
        ]
    }
}

/// Return a clean text box style; the border defaults to the palette blue.
pub fn clean_text_box(color: Option<&str>) -> TextBoxStyle {
    TextBoxStyle {
        facecolor: "white".to_string(),
        edgecolor: color.unwrap_or(palette::BLUE).to_string(),
        alpha: 0.9,
        boxstyle: BoxStyle::round(0.4),
        linewidth: 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxstyle_string_form() {
        assert_eq!(BoxStyle::round(0.4).to_string(), "round,pad=0.4");
        assert_eq!("round,pad=0.4".parse::<BoxStyle>(), Ok(BoxStyle::round(0.4)));
        assert_eq!("square".parse::<BoxStyle>().map(|b| b.kind), Ok(BoxKind::Square));
    }

    #[test]
    fn boxstyle_rejects_garbage() {
        assert!("circle,pad=1".parse::<BoxStyle>().is_err());
        assert!("round,pad=x".parse::<BoxStyle>().is_err());
        assert!("round,margin=1".parse::<BoxStyle>().is_err());
    }
}

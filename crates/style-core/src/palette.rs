// File: crates/style-core/src/palette.rs
// Summary: HBR colour palette (semantic name -> hex) and colour-spec parsing for Skia.

use log::error;
use skia_safe as skia;

use crate::error::StyleError;

/// Dark blue for headers and main elements.
pub const BLUE: &str = "#084B8A";
/// Light blue for backgrounds.
pub const LIGHT_BLUE: &str = "#E6F1F5";
/// Medium blue for accents and arrows.
pub const ACCENT_BLUE: &str = "#2E86C1";
/// Dark gray for main text.
pub const TEXT: &str = "#333333";
/// Light gray for secondary text.
pub const LIGHT_TEXT: &str = "#555555";

// Quadrant colors: lighter, professional tones
pub const QUADRANT1: &str = "#e6f2e6"; // light green
pub const QUADRANT2: &str = "#e6f0f7"; // light blue
pub const QUADRANT3: &str = "#f2f2e6"; // light yellow
pub const QUADRANT4: &str = "#f7e6e6"; // light red

/// Very light gray for backgrounds.
pub const BACKGROUND: &str = "#F8F9FA";
pub const WHITE: &str = "#FFFFFF";

/// The full palette in declaration order. Read-only lookup table.
pub const HBR_COLORS: &[(&str, &str)] = &[
    ("blue", BLUE),
    ("light_blue", LIGHT_BLUE),
    ("accent_blue", ACCENT_BLUE),
    ("text", TEXT),
    ("light_text", LIGHT_TEXT),
    ("quadrant1", QUADRANT1),
    ("quadrant2", QUADRANT2),
    ("quadrant3", QUADRANT3),
    ("quadrant4", QUADRANT4),
    ("background", BACKGROUND),
    ("white", WHITE),
];

/// Look up a palette colour by its semantic name.
pub fn color(name: &str) -> Result<&'static str, StyleError> {
    match HBR_COLORS.iter().find(|(key, _)| *key == name) {
        Some((_, hex)) => Ok(hex),
        None => {
            error!("unrecognized label for color (label={name})");
            Err(StyleError::UnknownColor(name.to_string()))
        }
    }
}

/// Parse a colour spec into a Skia colour.
///
/// Accepts `#RRGGBB`, `#RRGGBBAA` (case-insensitive) and the named colours
/// `white`, `black` and `none` (fully transparent).
pub fn parse_color(spec: &str) -> Result<skia::Color, StyleError> {
    let invalid = || StyleError::InvalidColor(spec.to_string());
    match spec.to_ascii_lowercase().as_str() {
        "white" => return Ok(skia::Color::from_argb(255, 255, 255, 255)),
        "black" => return Ok(skia::Color::from_argb(255, 0, 0, 0)),
        "none" => return Ok(skia::Color::from_argb(0, 0, 0, 0)),
        _ => {}
    }

    let digits = spec.strip_prefix('#').ok_or_else(invalid)?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(skia::Color::from_argb(a, r, g, b))
}

/// True when `spec` is exactly `#RRGGBB`.
pub fn is_hex_rgb(spec: &str) -> bool {
    spec.len() == 7
        && spec.starts_with('#')
        && spec[1..].chars().all(|c| c.is_ascii_hexdigit())
}

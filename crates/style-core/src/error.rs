// File: crates/style-core/src/error.rs
// Summary: Error type shared by palette/size lookups, colour parsing and strict aesthetics.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unrecognized palette color (name={0})")]
    UnknownColor(String),
    #[error("unrecognized figure size preset (name={0})")]
    UnknownFigureSize(String),
    #[error("invalid color spec '{0}'; expected #RRGGBB, #RRGGBBAA or a named color")]
    InvalidColor(String),
    #[error("subtitle given without a title")]
    SubtitleWithoutTitle,
}

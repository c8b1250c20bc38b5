//! Error types for the rendering library.
//!
//! Rendering itself never fails: any byte sequence is accepted and
//! unterminated formatting is closed at end of line. The errors here
//! cover the configuration surface only (palette entries, colors, fonts).

use thiserror::Error;

/// Convenience type alias for Results using [`ThemeError`].
pub type Result<T, E = ThemeError> = std::result::Result<T, E>;

/// Errors raised when building or parsing palette values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// A color index outside the 16-entry palette.
    #[error("color index out of range: {0} (max 15)")]
    IndexOutOfRange(u8),

    /// A color string that is not of the form `#rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Errors raised when validating a [`Theme`](crate::theme::Theme).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ThemeError {
    /// A palette entry or color failed to parse.
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Font size must be a positive, finite number of points.
    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    /// Font family must not be empty.
    #[error("font family is empty")]
    EmptyFontFamily,
}

//! Display settings consumed by the renderer.
//!
//! A [`Theme`] is an immutable value passed into every render call.
//! Changing colors or font means building a new `Theme` and handing it to
//! [`Renderer::set_theme`](crate::renderer::Renderer::set_theme), which
//! replaces the old one wholesale before rebuilding the transcript.

use crate::error::{Result, ThemeError};
use crate::message_type::MessageType;
use crate::palette::{Palette, Rgb};

/// Font applied to the whole transcript document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Family name, e.g. `"DejaVu Sans"`.
    pub family: String,
    /// Size in points.
    pub size_pt: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size_pt: f32) -> Self {
        Self {
            family: family.into(),
            size_pt,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

/// Base text color for each [`MessageType`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageColors {
    colors: [Rgb; MessageType::COUNT],
}

impl MessageColors {
    #[inline]
    pub fn get(&self, ty: MessageType) -> Rgb {
        self.colors[ty.index()]
    }

    pub fn set(&mut self, ty: MessageType, color: Rgb) {
        self.colors[ty.index()] = color;
    }
}

impl Default for MessageColors {
    fn default() -> Self {
        let mut colors = [Rgb::new(0, 0, 0); MessageType::COUNT];
        colors[MessageType::LocalInfo.index()] = Rgb::new(0x00, 0x80, 0x00);
        colors[MessageType::ServerInfo.index()] = Rgb::new(0x80, 0x80, 0x80);
        colors[MessageType::Notice.index()] = Rgb::new(0x80, 0x00, 0x00);
        colors[MessageType::Action.index()] = Rgb::new(0x80, 0x00, 0x80);
        colors[MessageType::Ctcp.index()] = Rgb::new(0xc0, 0x00, 0x00);
        colors[MessageType::Highlight.index()] = Rgb::new(0x00, 0x00, 0xc0);
        Self { colors }
    }
}

/// Complete set of display settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// Colors selected by in-line color codes.
    pub palette: Palette,
    /// Base color per message type.
    pub message_colors: MessageColors,
    /// Background of the container wrapping the user's own text.
    pub own_text_background: Rgb,
    /// Color of link and channel-mention anchors.
    pub link_color: Rgb,
    pub font: Font,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            message_colors: MessageColors::default(),
            own_text_background: Rgb::new(0xe8, 0xee, 0xf7),
            link_color: Rgb::new(0x00, 0x00, 0xee),
            font: Font::default(),
        }
    }
}

impl Theme {
    /// Check settings that cannot be expressed in the type system.
    pub fn validate(&self) -> Result<()> {
        if self.font.family.trim().is_empty() {
            return Err(ThemeError::EmptyFontFamily);
        }
        if !(self.font.size_pt.is_finite() && self.font.size_pt > 0.0) {
            return Err(ThemeError::InvalidFontSize(self.font.size_pt));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Base text color for a message type.
    #[inline]
    pub fn base_color(&self, ty: MessageType) -> Rgb {
        self.message_colors.get(ty)
    }
}

/// Options that change how lines are scanned, independent of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Characters that start a channel mention at a word boundary.
    pub channel_prefixes: Vec<char>,
    /// Render every space that follows another space as `&nbsp;`.
    pub collapse_spaces: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            channel_prefixes: vec!['#'],
            collapse_spaces: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        assert_eq!(Theme::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_font() {
        let theme = Theme::default().with_font(Font::new("", 10.0));
        assert_eq!(theme.validate(), Err(ThemeError::EmptyFontFamily));

        let theme = Theme::default().with_font(Font::new("Mono", 0.0));
        assert_eq!(theme.validate(), Err(ThemeError::InvalidFontSize(0.0)));

        let theme = Theme::default().with_font(Font::new("Mono", f32::NAN));
        assert!(matches!(theme.validate(), Err(ThemeError::InvalidFontSize(_))));
    }

    #[test]
    fn test_message_colors() {
        let mut colors = MessageColors::default();
        assert_eq!(colors.get(MessageType::Normal), Rgb::new(0, 0, 0));
        colors.set(MessageType::Notice, Rgb::new(1, 2, 3));
        assert_eq!(colors.get(MessageType::Notice), Rgb::new(1, 2, 3));

        let theme = Theme {
            message_colors: colors,
            ..Theme::default()
        };
        assert_eq!(theme.base_color(MessageType::Notice), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_render_options_default() {
        let opts = RenderOptions::default();
        assert_eq!(opts.channel_prefixes, vec!['#']);
        assert!(opts.collapse_spaces);
    }
}

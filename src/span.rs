//! Styled runs of text produced by the scanner.

use crate::palette::ColorIndex;

/// Prefix that marks a channel-mention href.
pub const CHANNEL_HREF_PREFIX: &str = "channel:";

/// Resolved text attributes at a point in a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub bold: bool,
    pub underline: bool,
    pub fg: Option<ColorIndex>,
    pub bg: Option<ColorIndex>,
}

impl Style {
    /// The style every line starts with.
    pub const PLAIN: Style = Style {
        bold: false,
        underline: false,
        fg: None,
        bg: None,
    };

    #[inline]
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A detected link target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// An absolute URL, or a `www.` address with `http://` prepended.
    Url(String),
    /// A channel name including its prefix character.
    Channel(String),
}

impl Link {
    /// Build a URL link from the token as it appeared in the text.
    ///
    /// Bare `www.` tokens get an `http://` scheme.
    ///
    /// ```
    /// use slirc_render::span::Link;
    ///
    /// assert_eq!(Link::url("www.example.org").href(), "http://www.example.org");
    /// assert_eq!(Link::url("https://a.b").href(), "https://a.b");
    /// ```
    pub fn url(token: &str) -> Self {
        if token.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("www.")) {
            Link::Url(format!("http://{}", token))
        } else {
            Link::Url(token.to_string())
        }
    }

    /// The anchor href: the URL itself, or `channel:<name>` for mentions.
    pub fn href(&self) -> String {
        match self {
            Link::Url(url) => url.clone(),
            Link::Channel(name) => format!("{}{}", CHANNEL_HREF_PREFIX, name),
        }
    }
}

/// A contiguous run of visible text sharing one style and link treatment.
///
/// `text` is the visible text, unescaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub link: Option<Link>,
}

impl Span {
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    pub fn link(text: impl Into<String>, style: Style, link: Link) -> Self {
        Self {
            text: text.into(),
            style,
            link: Some(link),
        }
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}

/// Concatenate the visible text of a span sequence.
pub fn visible_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_href() {
        let link = Link::Channel("#general".to_string());
        assert_eq!(link.href(), "channel:#general");
    }

    #[test]
    fn test_url_case_insensitive_www() {
        assert_eq!(Link::url("WWW.Example.org").href(), "http://WWW.Example.org");
        assert_eq!(Link::url("ww").href(), "ww");
    }

    #[test]
    fn test_plain_style() {
        assert!(Style::default().is_plain());
        let bold = Style {
            bold: true,
            ..Style::PLAIN
        };
        assert!(!bold.is_plain());
    }

    #[test]
    fn test_visible_text() {
        let spans = vec![
            Span::text("see ", Style::PLAIN),
            Span::link("#rust", Style::PLAIN, Link::Channel("#rust".into())),
        ];
        assert_eq!(visible_text(&spans), "see #rust");
        assert!(spans[1].is_link());
    }
}

//! Link and channel-mention detection.
//!
//! [`detect`] answers one question for a scan position: does a link or
//! channel mention start here? The scanner asks it at every position
//! where no link is already being built, and decides on its own where the
//! token ends using [`ends_mention`] and [`ends_url`].

/// Absolute URL schemes recognized at a scan position.
pub const URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

/// Bare web-address prefix, linked with an implied `http://`.
pub const WWW_PREFIX: &str = "www.";

/// Characters that end a channel mention.
pub const MENTION_TERMINATORS: &[char] = &[' ', ':', '.', ';', ',', '\'', '"', ')'];

/// What starts at a scan position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detection {
    None,
    ChannelMentionStart,
    UrlStart,
}

/// Test whether `chars[pos..]` begins with `prefix`, ignoring ASCII case.
fn starts_with_ignore_case(chars: &[char], pos: usize, prefix: &str) -> bool {
    let mut rest = chars.get(pos..).unwrap_or_default().iter();
    prefix
        .chars()
        .all(|p| rest.next().is_some_and(|c| c.eq_ignore_ascii_case(&p)))
}

/// Check the three link triggers at `pos`, in priority order.
///
/// 1. an absolute URL scheme,
/// 2. a bare `www.` prefix,
/// 3. a channel prefix at a word boundary.
///
/// URL checks run first, so a `#` inside a URL never starts a mention.
/// `prev` is the character before `pos` in the raw line, `None` at start
/// of line. A formatting code counts as a character, so `\x02#rust` is
/// not at a word boundary.
///
/// ```
/// use slirc_render::detect::{detect, Detection};
///
/// let line: Vec<char> = "see #general".chars().collect();
/// assert_eq!(detect(&line, 4, Some(' '), &['#']), Detection::ChannelMentionStart);
/// assert_eq!(detect(&line, 0, None, &['#']), Detection::None);
/// assert_eq!(detect(&line, 4, Some('\x02'), &['#']), Detection::None);
/// ```
pub fn detect(chars: &[char], pos: usize, prev: Option<char>, channel_prefixes: &[char]) -> Detection {
    let Some(&c) = chars.get(pos) else {
        return Detection::None;
    };

    if URL_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_case(chars, pos, scheme))
    {
        return Detection::UrlStart;
    }

    if starts_with_ignore_case(chars, pos, WWW_PREFIX) {
        return Detection::UrlStart;
    }

    let at_boundary = matches!(prev, None | Some(' '));
    if at_boundary && channel_prefixes.contains(&c) {
        return Detection::ChannelMentionStart;
    }

    Detection::None
}

/// Whether `c` ends a channel mention under construction.
#[inline]
pub fn ends_mention(c: char) -> bool {
    MENTION_TERMINATORS.contains(&c)
}

/// Whether `c` ends a URL under construction.
///
/// Only a space does; trailing punctuation stays part of the URL.
#[inline]
pub fn ends_url(c: char) -> bool {
    c == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    const HASH: &[char] = &['#'];

    #[test]
    fn test_url_schemes() {
        let line = chars("visit http://example.com.");
        assert_eq!(detect(&line, 6, Some(' '), HASH), Detection::UrlStart);
        assert_eq!(detect(&line, 7, Some('h'), HASH), Detection::None);

        let line = chars("HTTPS://EXAMPLE.COM");
        assert_eq!(detect(&line, 0, None, HASH), Detection::UrlStart);

        let line = chars("ftp://files");
        assert_eq!(detect(&line, 0, None, HASH), Detection::UrlStart);
    }

    #[test]
    fn test_scheme_needs_full_prefix() {
        assert_eq!(detect(&chars("http:/x"), 0, None, HASH), Detection::None);
        assert_eq!(detect(&chars("http"), 0, None, HASH), Detection::None);
        assert_eq!(detect(&chars("mailto:x"), 0, None, HASH), Detection::None);
    }

    #[test]
    fn test_www_prefix() {
        let line = chars("www.example.org now");
        assert_eq!(detect(&line, 0, None, HASH), Detection::UrlStart);
        assert_eq!(detect(&chars("Www.x"), 0, None, HASH), Detection::UrlStart);
        assert_eq!(detect(&chars("www"), 0, None, HASH), Detection::None);
    }

    #[test]
    fn test_url_prefix_mid_word() {
        // URL triggers do not require a word boundary.
        let line = chars("(http://x)");
        assert_eq!(detect(&line, 1, Some('('), HASH), Detection::UrlStart);
    }

    #[test]
    fn test_channel_mention_boundary() {
        let line = chars("see #general for help");
        assert_eq!(detect(&line, 4, Some(' '), HASH), Detection::ChannelMentionStart);

        let line = chars("#start");
        assert_eq!(detect(&line, 0, None, HASH), Detection::ChannelMentionStart);

        let line = chars("issue#12");
        assert_eq!(detect(&line, 5, Some('e'), HASH), Detection::None);
    }

    #[test]
    fn test_bare_prefix_starts_mention() {
        assert_eq!(detect(&chars("#"), 0, None, HASH), Detection::ChannelMentionStart);
        assert_eq!(detect(&chars("# x"), 0, None, HASH), Detection::ChannelMentionStart);
        assert_eq!(detect(&chars("#."), 0, None, HASH), Detection::ChannelMentionStart);

        let line = chars("end #");
        assert_eq!(detect(&line, 4, Some(' '), HASH), Detection::ChannelMentionStart);
    }

    #[test]
    fn test_formatting_code_breaks_boundary() {
        let line = chars("go \x02#rust");
        assert_eq!(detect(&line, 4, Some('\x02'), HASH), Detection::None);
        assert_eq!(detect(&line, 4, Some('\x0F'), HASH), Detection::None);
    }

    #[test]
    fn test_custom_prefixes() {
        let line = chars("&local");
        assert_eq!(detect(&line, 0, None, HASH), Detection::None);
        assert_eq!(detect(&line, 0, None, &['#', '&']), Detection::ChannelMentionStart);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(detect(&chars("abc"), 3, Some('c'), HASH), Detection::None);
        assert_eq!(detect(&[], 0, None, HASH), Detection::None);
    }

    #[test]
    fn test_terminators() {
        for c in [' ', ':', '.', ';', ',', '\'', '"', ')'] {
            assert!(ends_mention(c), "{:?}", c);
        }
        assert!(!ends_mention('-'));
        assert!(!ends_mention('#'));
        assert!(ends_url(' '));
        assert!(!ends_url('.'));
        assert!(!ends_url(')'));
    }
}

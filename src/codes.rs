//! IRC formatting control codes.
//!
//! Raw IRC text carries inline formatting as single control bytes. This
//! renderer styles four of them, using the mIRC values:
//! - 0x02: Bold (toggle)
//! - 0x03: Color (followed by optional `fg[,bg]` digits)
//! - 0x0F: Reset (terminator; clears every attribute)
//! - 0x1F: Underline (toggle)
//!
//! The remaining formatting bytes (hex color, monospace, reverse, italic,
//! strikethrough) and every other C0 control character are recognized
//! and dropped: they are never shown literally and carry no style.
//!
//! These values are fixed. Transcripts and logs written by other clients
//! use the same alphabet, so they must not change.

use std::borrow::Cow;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// Bold toggle.
pub const BOLD: char = '\x02';
/// Color change, followed by optional color digits.
pub const COLOR: char = '\x03';
/// Reset all formatting.
pub const RESET: char = '\x0F';
/// Underline toggle.
pub const UNDERLINE: char = '\x1F';

/// A control character classified by its effect on rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCode {
    /// Toggle bold.
    Bold,
    /// Begin a color sequence.
    Color,
    /// Clear all formatting.
    Reset,
    /// Toggle underline.
    Underline,
    /// Any other control character: consumed without effect.
    Ignored,
}

impl ControlCode {
    /// Classify a character, returning `None` for printable text.
    ///
    /// Tab is treated as text.
    ///
    /// ```
    /// use slirc_render::codes::ControlCode;
    ///
    /// assert_eq!(ControlCode::from_char('\x02'), Some(ControlCode::Bold));
    /// assert_eq!(ControlCode::from_char('\x1D'), Some(ControlCode::Ignored));
    /// assert_eq!(ControlCode::from_char('a'), None);
    /// assert_eq!(ControlCode::from_char('\t'), None);
    /// ```
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            BOLD => Some(Self::Bold),
            COLOR => Some(Self::Color),
            RESET => Some(Self::Reset),
            UNDERLINE => Some(Self::Underline),
            '\t' => None,
            c if c.is_ascii_control() => Some(Self::Ignored),
            _ => None,
        }
    }
}

/// Check if a string contains any control character the renderer would consume.
pub fn contains_formatting(s: &str) -> bool {
    s.chars().any(|c| ControlCode::from_char(c).is_some())
}

/// Raw color arguments following a [`COLOR`] code.
///
/// Values are the parsed decimal numbers (`0..=99`); mapping onto the
/// 16-entry palette is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorArgs {
    /// Foreground number, if any digits followed the code.
    pub fg: Option<u8>,
    /// Background number, present only after `fg` and a comma.
    pub bg: Option<u8>,
    /// Number of bytes consumed after the color code.
    pub len: usize,
}

fn color_number(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 2, |c: char| c.is_ascii_digit())(input)
}

fn color_pair(input: &str) -> IResult<&str, (Option<&str>, Option<&str>)> {
    let (rest, fg) = opt(color_number)(input)?;
    if fg.is_none() {
        return Ok((rest, (None, None)));
    }
    let (rest, bg) = opt(preceded(char(','), color_number))(rest)?;
    Ok((rest, (fg, bg)))
}

/// Parse the optional `fg[,bg]` digits that follow a color code.
///
/// At most two digits are taken per number. The comma is only consumed
/// when at least one digit follows it.
///
/// ```
/// use slirc_render::codes::parse_color_args;
///
/// let args = parse_color_args("4,12text");
/// assert_eq!((args.fg, args.bg, args.len), (Some(4), Some(12), 4));
///
/// let args = parse_color_args("123");
/// assert_eq!((args.fg, args.bg, args.len), (Some(12), None, 2));
///
/// let args = parse_color_args("4,x");
/// assert_eq!((args.fg, args.bg, args.len), (Some(4), None, 1));
/// ```
pub fn parse_color_args(input: &str) -> ColorArgs {
    match color_pair(input) {
        Ok((rest, (fg, bg))) => ColorArgs {
            fg: fg.and_then(|d| d.parse().ok()),
            bg: bg.and_then(|d| d.parse().ok()),
            len: input.len() - rest.len(),
        },
        Err(_) => ColorArgs::default(),
    }
}

/// Strip formatting codes, including color digits, leaving the visible text.
///
/// Returns the input unchanged (borrowed) when it carries no formatting.
///
/// ```
/// use slirc_render::codes::strip_formatting;
///
/// assert_eq!(strip_formatting("\x02bold\x02 and \x034,1red\x03"), "bold and red");
/// assert_eq!(strip_formatting("plain"), "plain");
/// ```
pub fn strip_formatting(s: &str) -> Cow<'_, str> {
    if !contains_formatting(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match ControlCode::from_char(c) {
            Some(ControlCode::Color) => {
                let args = parse_color_args(rest);
                rest = &rest[args.len..];
            }
            Some(_) => {}
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Extension trait for formatting queries on string types.
pub trait FormattedStringExt {
    /// Check if this string contains formatting codes.
    fn contains_formatting(&self) -> bool;

    /// Return the visible text with all formatting removed.
    fn strip_formatting(&self) -> Cow<'_, str>;
}

impl FormattedStringExt for str {
    #[inline]
    fn contains_formatting(&self) -> bool {
        contains_formatting(self)
    }

    #[inline]
    fn strip_formatting(&self) -> Cow<'_, str> {
        strip_formatting(self)
    }
}

impl FormattedStringExt for String {
    #[inline]
    fn contains_formatting(&self) -> bool {
        contains_formatting(self)
    }

    #[inline]
    fn strip_formatting(&self) -> Cow<'_, str> {
        strip_formatting(self)
    }
}

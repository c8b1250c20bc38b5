//! Span assembly and markup output.
//!
//! [`SpanBuilder`] folds scanner emissions into a flat list of spans. A
//! new span is opened only when the style or link treatment actually
//! changes, so adjacent text spans never share a style and empty spans
//! are never produced. Spans are never nested: a style change closes the
//! current span and opens another.
//!
//! [`line_markup`] turns one line's spans into HTML-like markup for the
//! display surface.

use std::fmt::Write as _;

use crate::message_type::MessageType;
use crate::palette::Palette;
use crate::scanner::Emission;
use crate::span::{Link, Span, Style};
use crate::theme::{RenderOptions, Theme};

/// Line terminator appended after every line except own text.
pub const LINE_BREAK: &str = "<br/>";

/// Collects emissions into coalesced spans.
#[derive(Debug, Default)]
pub struct SpanBuilder {
    spans: Vec<Span>,
    style: Style,
}

impl SpanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, emission: Emission) {
        match emission {
            Emission::Char(c) => self.push_char(c),
            Emission::Style(style) => self.style = style,
            Emission::Link { text, link } => self.push_link(text, link),
        }
    }

    pub fn push_char(&mut self, c: char) {
        match self.spans.last_mut() {
            Some(last) if last.link.is_none() && last.style == self.style => last.text.push(c),
            _ => self.spans.push(Span::text(c.to_string(), self.style)),
        }
    }

    pub fn push_link(&mut self, text: String, link: Link) {
        if !text.is_empty() {
            self.spans.push(Span::link(text, self.style, link));
        }
    }

    pub fn finish(self) -> Vec<Span> {
        self.spans
    }
}

/// Escape text for an HTML text node or attribute value.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        escape_char(out, c);
    }
}

#[inline]
fn escape_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Write `text` as the body of a single-quoted CSS string inside an HTML
/// attribute value.
///
/// Quotes and backslashes are CSS-escaped, line breaks and other control
/// characters become hex escapes, and the result is HTML-escaped.
///
/// ```
/// use slirc_render::emitter::escape_css_string_into;
///
/// let mut out = String::new();
/// escape_css_string_into(&mut out, "O'Brien \"Sans\"");
/// assert_eq!(out, r"O\'Brien &quot;Sans&quot;");
/// ```
pub fn escape_css_string_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c if c.is_control() => {
                let _ = write!(out, "\\{:x} ", u32::from(c));
            }
            c => escape_char(out, c),
        }
    }
}

/// CSS declarations for a style, empty for [`Style::PLAIN`].
pub fn style_declarations(style: &Style, palette: &Palette) -> String {
    let mut decls = Vec::with_capacity(4);
    if style.bold {
        decls.push("font-weight:bold".to_string());
    }
    if style.underline {
        decls.push("text-decoration:underline".to_string());
    }
    if let Some(fg) = style.fg {
        decls.push(format!("color:{}", palette.get(fg)));
    }
    if let Some(bg) = style.bg {
        decls.push(format!("background-color:{}", palette.get(bg)));
    }
    decls.join(";")
}

struct TextWriter<'a> {
    out: &'a mut String,
    prev_space: bool,
    collapse_spaces: bool,
}

impl TextWriter<'_> {
    fn write(&mut self, text: &str) {
        for c in text.chars() {
            if c == ' ' && self.prev_space && self.collapse_spaces {
                self.out.push_str("&nbsp;");
            } else {
                escape_char(self.out, c);
            }
            self.prev_space = c == ' ';
        }
    }
}

fn write_span(writer: &mut TextWriter<'_>, span: &Span, theme: &Theme) {
    let decls = style_declarations(&span.style, &theme.palette);
    if !decls.is_empty() {
        let _ = write!(writer.out, "<span style=\"{}\">", decls);
    }
    match &span.link {
        Some(link) => {
            writer.out.push_str("<a href=\"");
            escape_into(writer.out, &link.href());
            let _ = write!(writer.out, "\" style=\"color:{}\">", theme.link_color);
            writer.write(&span.text);
            writer.out.push_str("</a>");
        }
        None => writer.write(&span.text),
    }
    if !decls.is_empty() {
        writer.out.push_str("</span>");
    }
}

/// Render one line's spans.
///
/// Ordinary lines end with [`LINE_BREAK`]. Own text is wrapped in a
/// background container instead and carries no trailing break; removing
/// the break of the line above is the caller's job.
///
/// ```
/// use slirc_render::emitter::line_markup;
/// use slirc_render::message_type::MessageType;
/// use slirc_render::scanner::scan;
/// use slirc_render::theme::{RenderOptions, Theme};
///
/// let opts = RenderOptions::default();
/// let spans = scan("a <b>", &opts);
/// let html = line_markup(&spans, MessageType::Normal, &Theme::default(), &opts);
/// assert_eq!(html, "<span class=\"normal\" style=\"color:#000000\">a &lt;b&gt;</span><br/>");
/// ```
pub fn line_markup(spans: &[Span], ty: MessageType, theme: &Theme, options: &RenderOptions) -> String {
    let mut out = String::new();

    if ty.is_own_text() {
        let _ = write!(
            out,
            "<div class=\"{}\" style=\"background-color:{}\">",
            ty.css_class(),
            theme.own_text_background
        );
    }

    let _ = write!(
        out,
        "<span class=\"{}\" style=\"color:{}\">",
        ty.css_class(),
        theme.base_color(ty)
    );
    let mut writer = TextWriter {
        out: &mut out,
        prev_space: false,
        collapse_spaces: options.collapse_spaces,
    };
    for span in spans {
        write_span(&mut writer, span, theme);
    }
    out.push_str("</span>");

    if ty.is_own_text() {
        out.push_str("</div>");
    } else {
        out.push_str(LINE_BREAK);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorIndex;
    use crate::scanner::scan;

    fn render(line: &str, ty: MessageType) -> String {
        let opts = RenderOptions::default();
        line_markup(&scan(line, &opts), ty, &Theme::default(), &opts)
    }

    fn body(line: &str) -> String {
        let html = render(line, MessageType::Normal);
        let start = html.find('>').unwrap() + 1;
        let end = html.len() - "</span><br/>".len();
        html[start..end].to_string()
    }

    #[test]
    fn test_builder_coalesces_same_style() {
        let mut b = SpanBuilder::new();
        b.push_char('a');
        b.apply(Emission::Style(Style::PLAIN));
        b.push_char('b');
        assert_eq!(b.finish(), vec![Span::text("ab", Style::PLAIN)]);
    }

    #[test]
    fn test_builder_no_empty_spans() {
        let bold = Style {
            bold: true,
            ..Style::PLAIN
        };
        let mut b = SpanBuilder::new();
        b.apply(Emission::Style(bold));
        b.apply(Emission::Style(Style::PLAIN));
        b.push_link(String::new(), Link::Url("x".into()));
        assert!(b.finish().is_empty());
    }

    #[test]
    fn test_builder_text_after_link_opens_new_span() {
        let mut b = SpanBuilder::new();
        b.push_link("#a".into(), Link::Channel("#a".into()));
        b.push_char(' ');
        let spans = b.finish();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_link());
        assert!(!spans[1].is_link());
    }

    #[test]
    fn test_escaping() {
        assert_eq!(body("<a> & \"b\""), "&lt;a&gt; &amp; &quot;b&quot;");
    }

    #[test]
    fn test_css_string_escaping() {
        let mut out = String::new();
        escape_css_string_into(&mut out, "O'Brien Sans");
        assert_eq!(out, "O\\'Brien Sans");

        let mut out = String::new();
        escape_css_string_into(&mut out, "a\\b\n<c>");
        assert_eq!(out, "a\\\\b\\a &lt;c&gt;");
    }

    #[test]
    fn test_double_space_collapse() {
        assert_eq!(body("a  b"), "a &nbsp;b");
        assert_eq!(body("a   b"), "a &nbsp;&nbsp;b");
        assert_eq!(body(" a"), " a");
        // Space runs are tracked across span boundaries.
        assert_eq!(
            body("a \x02 b"),
            "a <span style=\"font-weight:bold\">&nbsp;b</span>"
        );
    }

    #[test]
    fn test_collapse_disabled() {
        let opts = RenderOptions {
            collapse_spaces: false,
            ..RenderOptions::default()
        };
        let html = line_markup(&scan("a  b", &opts), MessageType::Normal, &Theme::default(), &opts);
        assert!(html.contains(">a  b<"));
    }

    #[test]
    fn test_style_declarations() {
        let palette = Palette::default();
        let style = Style {
            bold: true,
            underline: true,
            fg: ColorIndex::from_code(4),
            bg: ColorIndex::from_code(1),
        };
        assert_eq!(
            style_declarations(&style, &palette),
            "font-weight:bold;text-decoration:underline;color:#ff0000;background-color:#000000"
        );
        assert_eq!(style_declarations(&Style::PLAIN, &palette), "");
    }

    #[test]
    fn test_odd_bold_is_closed() {
        let html = render("\x02bold", MessageType::Normal);
        assert_eq!(
            html,
            "<span class=\"normal\" style=\"color:#000000\">\
             <span style=\"font-weight:bold\">bold</span></span><br/>"
        );
    }

    #[test]
    fn test_link_markup() {
        assert_eq!(
            body("see #general"),
            "see <a href=\"channel:#general\" style=\"color:#0000ee\">#general</a>"
        );
        assert_eq!(
            body("www.a.org"),
            "<a href=\"http://www.a.org\" style=\"color:#0000ee\">www.a.org</a>"
        );
        assert_eq!(
            body("http://a/?x=1&y=\"2\""),
            "<a href=\"http://a/?x=1&amp;y=&quot;2&quot;\" style=\"color:#0000ee\">\
             http://a/?x=1&amp;y=&quot;2&quot;</a>"
        );
    }

    #[test]
    fn test_own_text_container() {
        let html = render("hi", MessageType::OwnText);
        assert_eq!(
            html,
            "<div class=\"own-text\" style=\"background-color:#e8eef7\">\
             <span class=\"own-text\" style=\"color:#000000\">hi</span></div>"
        );
        assert!(!html.ends_with(LINE_BREAK));
    }

    #[test]
    fn test_message_type_base_color() {
        let html = render("motd", MessageType::ServerInfo);
        assert!(html.starts_with("<span class=\"server-info\" style=\"color:#808080\">"));
    }
}

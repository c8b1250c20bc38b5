//! The render pipeline: submit, rebuild, clear.
//!
//! A [`Renderer`] owns the [`Transcript`] and the rendered output. Every
//! submitted line is scanned, emitted as markup, appended to the output
//! and stored raw. A theme change swaps the [`Theme`] and replays the
//! stored lines through the same path without storing them again, so the
//! output is always a pure function of (transcript, theme, options).
//!
//! # Example
//!
//! ```
//! use slirc_render::{MessageType, Renderer, Theme};
//!
//! let mut renderer = Renderer::new(Theme::default());
//! renderer.submit_line("\x02hello\x02 #rust", MessageType::Normal);
//! let before = renderer.markup();
//!
//! // Rebuilding with an unchanged theme reproduces the output exactly.
//! assert_eq!(renderer.rebuild(), before);
//! ```

use std::fmt::Write as _;
use std::ops::Range;

use tracing::{debug, trace};

use crate::codes::strip_formatting;
use crate::emitter::{escape_css_string_into, line_markup, LINE_BREAK};
use crate::error::Result;
use crate::events::{ActivatedLink, EventSink};
use crate::message_type::MessageType;
use crate::scanner::scan;
use crate::theme::{RenderOptions, Theme};
use crate::transcript::{RawLine, Transcript};

/// Markup produced for one submitted line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineUpdate {
    /// Markup to append to the display.
    pub markup: String,
    /// The previous entry's trailing line break was removed (own text).
    pub trimmed_previous_break: bool,
}

/// Incremental renderer with lossless rebuild.
#[derive(Debug, Default)]
pub struct Renderer {
    theme: Theme,
    options: RenderOptions,
    transcript: Transcript,
    rendered: Vec<String>,
}

/// Render `line` and append it to `rendered`, merging own text into the
/// entry above it.
///
/// Returns whether the previous entry's line break was removed.
fn append_rendered(
    rendered: &mut Vec<String>,
    theme: &Theme,
    options: &RenderOptions,
    line: &RawLine,
) -> bool {
    let spans = scan(&line.text, options);
    let markup = line_markup(&spans, line.message_type, theme, options);

    let mut trimmed_previous_break = false;
    if line.message_type.is_own_text() {
        if let Some(prev) = rendered.last_mut() {
            if prev.ends_with(LINE_BREAK) {
                prev.truncate(prev.len() - LINE_BREAK.len());
                trimmed_previous_break = true;
            }
        }
    }

    rendered.push(markup);
    trimmed_previous_break
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self::with_options(theme, RenderOptions::default())
    }

    pub fn with_options(theme: Theme, options: RenderOptions) -> Self {
        Self {
            theme,
            options,
            transcript: Transcript::new(),
            rendered: Vec::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Render a new line and store it.
    pub fn submit_line(&mut self, text: impl Into<String>, message_type: MessageType) -> LineUpdate {
        let line = RawLine::new(text, message_type);
        trace!("submitting {} line ({} bytes)", message_type, line.text.len());

        let trimmed_previous_break =
            append_rendered(&mut self.rendered, &self.theme, &self.options, &line);
        self.transcript.append(line);
        LineUpdate {
            markup: self.rendered.last().cloned().unwrap_or_default(),
            trimmed_previous_break,
        }
    }

    /// Replace the theme and rebuild the whole transcript with it.
    ///
    /// An invalid theme is rejected and the current one stays in effect.
    pub fn set_theme(&mut self, theme: Theme) -> Result<String> {
        theme.validate()?;
        debug!(
            "theme changed (font {:?} {}pt), rebuilding",
            theme.font.family, theme.font.size_pt
        );
        self.theme = theme;
        Ok(self.rebuild())
    }

    /// Replace scan options (channel prefixes, space collapsing) and rebuild.
    pub fn set_options(&mut self, options: RenderOptions) -> String {
        self.options = options;
        self.rebuild()
    }

    /// Re-derive all markup from the stored raw lines.
    ///
    /// Lines are not re-appended to the transcript.
    pub fn rebuild(&mut self) -> String {
        debug!("rebuilding {} transcript lines", self.transcript.len());
        self.rendered.clear();
        for line in self.transcript.iter() {
            append_rendered(&mut self.rendered, &self.theme, &self.options, line);
        }
        self.markup()
    }

    /// Drop every stored line and all rendered output.
    pub fn clear(&mut self) {
        debug!("clearing {} transcript lines", self.transcript.len());
        self.transcript.clear();
        self.rendered.clear();
    }

    /// Rendered entries, one per stored line.
    pub fn entries(&self) -> &[String] {
        &self.rendered
    }

    /// All rendered markup, concatenated.
    pub fn markup(&self) -> String {
        self.rendered.concat()
    }

    /// Rendered markup wrapped in a container carrying the theme font.
    pub fn document(&self) -> String {
        let mut out = String::from("<div style=\"font-family:'");
        escape_css_string_into(&mut out, &self.theme.font.family);
        let _ = write!(out, "';font-size:{}pt\">", self.theme.font.size_pt);
        for entry in &self.rendered {
            out.push_str(entry);
        }
        out.push_str("</div>");
        out
    }

    /// Visible text of the lines in `range`, joined by newlines.
    ///
    /// The range is clamped to the transcript.
    pub fn plain_text(&self, range: Range<usize>) -> String {
        let lines = self.transcript.all();
        let end = range.end.min(lines.len());
        let start = range.start.min(end);
        lines[start..end]
            .iter()
            .map(|line| strip_formatting(&line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Report the plain text of the selected lines to `sink`.
    pub fn copy_selection<S: EventSink + ?Sized>(&self, range: Range<usize>, sink: &mut S) {
        let text = self.plain_text(range);
        sink.on_selection_copied(&text);
    }

    /// Route an activated anchor href to `sink`.
    ///
    /// Returns `false` if the href is not one the renderer produces.
    pub fn activate_href<S: EventSink + ?Sized>(&self, href: &str, sink: &mut S) -> bool {
        match ActivatedLink::from_href(href) {
            Some(link) => {
                link.dispatch(sink);
                true
            }
            None => false,
        }
    }
}

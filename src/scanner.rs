//! Single-pass control-code scanner.
//!
//! The scanner walks a raw line one character at a time and turns it into
//! a stream of [`Emission`]s: visible characters, style changes and
//! finished links. Its state is an explicit [`ScanState`]; every
//! transition happens in [`ScanState::step`], which consumes one
//! character and either finishes with it or asks for it to be fed again
//! (a character that terminates a link or color sequence still has to be
//! processed as ordinary input).
//!
//! Scanning is total. Unterminated color sequences, open toggles and
//! unfinished links are all closed by [`ScanState::finish`].
//!
//! ```
//! use slirc_render::scanner::scan;
//! use slirc_render::span::Link;
//! use slirc_render::theme::RenderOptions;
//!
//! let spans = scan("see #general for help", &RenderOptions::default());
//! assert_eq!(spans.len(), 3);
//! assert_eq!(spans[1].link, Some(Link::Channel("#general".to_string())));
//! assert_eq!(spans[2].text, " for help");
//! ```

use crate::codes::ControlCode;
use crate::detect::{detect, ends_mention, ends_url, Detection};
use crate::emitter::SpanBuilder;
use crate::palette::ColorIndex;
use crate::span::{Link, Span, Style};
use crate::theme::RenderOptions;

/// Link-detection sub-state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkMode {
    #[default]
    None,
    BuildingChannelMention,
    BuildingUrl,
}

/// Progress through the digits that follow a color code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSeq {
    /// Not inside a color sequence.
    #[default]
    Idle,
    /// Reading foreground digits; `digits` is how many were seen.
    Foreground { value: u8, digits: u8 },
    /// Saw `fg,`; the comma only belongs to the sequence if a digit follows.
    Comma { fg: u8 },
    /// Reading background digits.
    Background { fg: u8, value: u8, digits: u8 },
}

/// One unit of scanner output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Emission {
    /// A visible character in the current style.
    Char(char),
    /// The active style changed; following text uses it.
    Style(Style),
    /// A completed link or channel mention.
    Link { text: String, link: Link },
}

/// Result of feeding one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The character was used up.
    Consumed,
    /// The state changed but the same character must be fed again.
    Reprocess,
}

/// Per-line scanner state. Starts at the default for every line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    pub style: Style,
    pub color: ColorSeq,
    pub link_mode: LinkMode,
    pub link_accumulator: String,
}

fn digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `chars[pos]` through the machine.
    ///
    /// `chars` is the whole line so link detection can look ahead, and
    /// back one character for the word-boundary check.
    pub fn step(
        &mut self,
        chars: &[char],
        pos: usize,
        channel_prefixes: &[char],
        out: &mut Vec<Emission>,
    ) -> Step {
        let Some(&c) = chars.get(pos) else {
            return Step::Consumed;
        };

        match self.color {
            ColorSeq::Idle => {}
            ColorSeq::Foreground { value, digits } => {
                return match digit(c) {
                    Some(d) if digits < 2 => {
                        self.color = ColorSeq::Foreground {
                            value: value * 10 + d,
                            digits: digits + 1,
                        };
                        Step::Consumed
                    }
                    _ if c == ',' && digits > 0 => {
                        self.color = ColorSeq::Comma { fg: value };
                        Step::Consumed
                    }
                    _ => {
                        if digits == 0 {
                            self.clear_colors(out);
                        } else {
                            self.apply_colors(value, None, out);
                        }
                        Step::Reprocess
                    }
                };
            }
            ColorSeq::Comma { fg } => {
                return match digit(c) {
                    Some(d) => {
                        self.color = ColorSeq::Background {
                            fg,
                            value: d,
                            digits: 1,
                        };
                        Step::Consumed
                    }
                    None => {
                        self.apply_colors(fg, None, out);
                        self.visible_char(',', out);
                        Step::Reprocess
                    }
                };
            }
            ColorSeq::Background { fg, value, digits } => {
                return match digit(c) {
                    Some(d) if digits < 2 => {
                        self.color = ColorSeq::Background {
                            fg,
                            value: value * 10 + d,
                            digits: digits + 1,
                        };
                        Step::Consumed
                    }
                    _ => {
                        self.apply_colors(fg, Some(value), out);
                        Step::Reprocess
                    }
                };
            }
        }

        let code = ControlCode::from_char(c);

        match self.link_mode {
            LinkMode::None => {}
            LinkMode::BuildingChannelMention => {
                if code.is_some() || ends_mention(c) {
                    self.flush_link(out);
                    return Step::Reprocess;
                }
                self.accumulate(c);
                return Step::Consumed;
            }
            LinkMode::BuildingUrl => {
                if code.is_some() || ends_url(c) {
                    self.flush_link(out);
                    return Step::Reprocess;
                }
                self.accumulate(c);
                return Step::Consumed;
            }
        }

        match code {
            Some(ControlCode::Bold) => {
                self.style.bold = !self.style.bold;
                out.push(Emission::Style(self.style));
            }
            Some(ControlCode::Underline) => {
                self.style.underline = !self.style.underline;
                out.push(Emission::Style(self.style));
            }
            Some(ControlCode::Reset) => {
                self.style = Style::PLAIN;
                out.push(Emission::Style(self.style));
            }
            Some(ControlCode::Color) => {
                self.color = ColorSeq::Foreground { value: 0, digits: 0 };
            }
            Some(ControlCode::Ignored) => {}
            None => {
                let prev = pos.checked_sub(1).and_then(|p| chars.get(p)).copied();
                match detect(chars, pos, prev, channel_prefixes) {
                    Detection::UrlStart => {
                        self.link_mode = LinkMode::BuildingUrl;
                        self.accumulate(c);
                    }
                    Detection::ChannelMentionStart => {
                        self.link_mode = LinkMode::BuildingChannelMention;
                        self.accumulate(c);
                    }
                    Detection::None => self.visible_char(c, out),
                }
            }
        }

        Step::Consumed
    }

    /// Close everything still open at end of line.
    pub fn finish(&mut self, out: &mut Vec<Emission>) {
        match std::mem::take(&mut self.color) {
            // A color code with nothing after it carries no span.
            ColorSeq::Idle | ColorSeq::Foreground { digits: 0, .. } => {}
            ColorSeq::Foreground { value, .. } => self.apply_colors(value, None, out),
            ColorSeq::Comma { fg } => {
                self.apply_colors(fg, None, out);
                self.visible_char(',', out);
            }
            ColorSeq::Background { fg, value, .. } => self.apply_colors(fg, Some(value), out),
        }
        if self.link_mode != LinkMode::None {
            self.flush_link(out);
        }
    }

    fn visible_char(&mut self, c: char, out: &mut Vec<Emission>) {
        out.push(Emission::Char(c));
    }

    fn accumulate(&mut self, c: char) {
        self.link_accumulator.push(c);
    }

    fn flush_link(&mut self, out: &mut Vec<Emission>) {
        let text = std::mem::take(&mut self.link_accumulator);
        let mode = std::mem::take(&mut self.link_mode);
        if text.is_empty() {
            return;
        }
        let link = match mode {
            LinkMode::BuildingUrl => Link::url(&text),
            LinkMode::BuildingChannelMention => Link::Channel(text.clone()),
            LinkMode::None => return,
        };
        out.push(Emission::Link { text, link });
    }

    fn clear_colors(&mut self, out: &mut Vec<Emission>) {
        self.color = ColorSeq::Idle;
        self.style.fg = None;
        self.style.bg = None;
        out.push(Emission::Style(self.style));
    }

    /// Finish a color sequence. Codes outside the palette mean "default";
    /// a missing background keeps the current one.
    fn apply_colors(&mut self, fg: u8, bg: Option<u8>, out: &mut Vec<Emission>) {
        self.color = ColorSeq::Idle;
        self.style.fg = ColorIndex::from_code(fg);
        if let Some(bg) = bg {
            self.style.bg = ColorIndex::from_code(bg);
        }
        out.push(Emission::Style(self.style));
    }
}

/// Run the machine over a whole line, collecting its emissions.
pub fn emissions(line: &str, channel_prefixes: &[char]) -> Vec<Emission> {
    let chars: Vec<char> = line.chars().collect();
    let mut state = ScanState::new();
    let mut out = Vec::with_capacity(chars.len());

    let mut pos = 0;
    while pos < chars.len() {
        if state.step(&chars, pos, channel_prefixes, &mut out) == Step::Consumed {
            pos += 1;
        }
    }
    state.finish(&mut out);
    out
}

/// Scan a raw line into coalesced spans.
pub fn scan(line: &str, options: &RenderOptions) -> Vec<Span> {
    let mut builder = SpanBuilder::new();
    for emission in emissions(line, &options.channel_prefixes) {
        builder.apply(emission);
    }
    builder.finish()
}

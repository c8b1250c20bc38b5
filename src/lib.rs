//! # slirc-render
//!
//! Renders IRC message text, with its inline formatting control codes,
//! into styled markup for a chat transcript.
//!
//! ## Features
//!
//! - Bold, underline, reset and mIRC color codes (`fg[,bg]`, 16 colors)
//! - URL (`http://`, `https://`, `ftp://`, `www.`) and channel-mention
//!   detection, rendered as anchors
//! - Escaping and visible double spaces for proportional fonts
//! - Own-text containers that merge with the line above
//! - An append-only raw transcript, so the whole display can be
//!   regenerated byte-for-byte after a theme or font change
//!
//! Rendering is total: any input renders, and unterminated formatting is
//! closed at end of line.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use slirc_render::{MessageType, Renderer, Theme};
//! use slirc_render::events::RecordingSink;
//!
//! let mut renderer = Renderer::new(Theme::default());
//! renderer.submit_line("* Now talking in #rust", MessageType::LocalInfo);
//! renderer.submit_line("\x02hello\x02 \x034world\x03, see www.rust-lang.org", MessageType::OwnText);
//!
//! let html = renderer.markup();
//! assert!(html.contains("href=\"channel:#rust\""));
//! assert!(html.contains("href=\"http://www.rust-lang.org\""));
//!
//! // The user changed colors: swap the theme and every line is redrawn.
//! let mut theme = Theme::default();
//! theme.link_color = "#336699".parse().unwrap();
//! let rebuilt = renderer.set_theme(theme).unwrap();
//! assert!(rebuilt.contains("color:#336699"));
//!
//! // Clicking an anchor is routed back through an event sink.
//! let mut sink = RecordingSink::default();
//! renderer.activate_href("channel:#rust", &mut sink);
//! ```

pub mod codes;
pub mod detect;
pub mod emitter;
pub mod error;
pub mod events;
pub mod message_type;
pub mod palette;
pub mod renderer;
pub mod scanner;
pub mod span;
pub mod theme;
pub mod transcript;

pub use self::codes::{strip_formatting, FormattedStringExt};
pub use self::detect::{detect, Detection};
pub use self::emitter::{line_markup, SpanBuilder};
pub use self::error::{PaletteError, ThemeError};
pub use self::events::{ActivatedLink, EventSink};
pub use self::message_type::MessageType;
pub use self::palette::{ColorIndex, Palette, Rgb};
pub use self::renderer::{LineUpdate, Renderer};
pub use self::scanner::{scan, ScanState};
pub use self::span::{Link, Span, Style};
pub use self::theme::{Font, RenderOptions, Theme};
pub use self::transcript::{RawLine, Transcript};

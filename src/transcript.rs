//! Append-only store of raw transcript lines.
//!
//! The store keeps every line exactly as it was submitted, control codes
//! included. Rendered markup is never cached here: it is always
//! re-derived from these lines, which is what makes a theme change
//! lossless.

use crate::message_type::MessageType;

/// One submitted line, immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLine {
    pub text: String,
    pub message_type: MessageType,
}

impl RawLine {
    pub fn new(text: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            text: text.into(),
            message_type,
        }
    }
}

/// Ordered sequence of [`RawLine`]s.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<RawLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: RawLine) {
        self.lines.push(line);
    }

    /// All lines in submission order.
    pub fn all(&self) -> &[RawLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a RawLine;
    type IntoIter = std::slice::Iter<'a, RawLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl Extend<RawLine> for Transcript {
    fn extend<I: IntoIterator<Item = RawLine>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

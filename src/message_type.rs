//! Message categories that select a line's base style.

use std::fmt;

/// The kind of a transcript line.
///
/// Each type has a base text color in the [`Theme`](crate::theme::Theme)
/// and a stable CSS class in the rendered markup. [`MessageType::OwnText`]
/// additionally gets a background container and merges with the line
/// above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MessageType {
    /// Ordinary channel or query text.
    #[default]
    Normal,
    /// Client-generated information (e.g. "Now talking in #rust").
    LocalInfo,
    /// Information relayed from the server (MOTD, numerics).
    ServerInfo,
    /// NOTICE messages.
    Notice,
    /// `/me` actions.
    Action,
    /// CTCP requests and replies.
    Ctcp,
    /// Lines that mention the local user.
    Highlight,
    /// Text the local user sent.
    OwnText,
}

impl MessageType {
    /// Every message type, in declaration order.
    pub const ALL: [MessageType; 8] = [
        MessageType::Normal,
        MessageType::LocalInfo,
        MessageType::ServerInfo,
        MessageType::Notice,
        MessageType::Action,
        MessageType::Ctcp,
        MessageType::Highlight,
        MessageType::OwnText,
    ];

    /// Number of message types.
    pub const COUNT: usize = Self::ALL.len();

    /// CSS class used for this type's line container.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageType::Normal => "normal",
            MessageType::LocalInfo => "local-info",
            MessageType::ServerInfo => "server-info",
            MessageType::Notice => "notice",
            MessageType::Action => "action",
            MessageType::Ctcp => "ctcp",
            MessageType::Highlight => "highlight",
            MessageType::OwnText => "own-text",
        }
    }

    /// Position of this type in [`MessageType::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_own_text(self) -> bool {
        self == MessageType::OwnText
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

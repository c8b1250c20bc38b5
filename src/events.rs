//! Callbacks from the display surface into the rendering core.
//!
//! The display widget owns selection and anchor clicks. It reports them
//! through an [`EventSink`], which keeps the renderer free of any UI
//! toolkit.

use crate::span::CHANNEL_HREF_PREFIX;

/// Receiver for user interactions with rendered markup.
pub trait EventSink {
    /// Selected transcript text was copied (formatting stripped).
    fn on_selection_copied(&mut self, text: &str);

    /// A URL anchor was activated.
    fn on_link_activated(&mut self, target: &str);

    /// A channel-mention anchor was activated; `name` includes the prefix.
    fn on_channel_link_activated(&mut self, name: &str);
}

/// An anchor href classified by what activating it should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivatedLink<'a> {
    Url(&'a str),
    Channel(&'a str),
}

impl<'a> ActivatedLink<'a> {
    /// Classify an href produced by the emitter.
    ///
    /// Returns `None` for an empty href or a channel href with no name.
    ///
    /// ```
    /// use slirc_render::events::ActivatedLink;
    ///
    /// assert_eq!(ActivatedLink::from_href("channel:#rust"), Some(ActivatedLink::Channel("#rust")));
    /// assert_eq!(ActivatedLink::from_href("http://a.b"), Some(ActivatedLink::Url("http://a.b")));
    /// assert_eq!(ActivatedLink::from_href("channel:"), None);
    /// ```
    pub fn from_href(href: &'a str) -> Option<Self> {
        if let Some(name) = href.strip_prefix(CHANNEL_HREF_PREFIX) {
            return (!name.is_empty()).then_some(ActivatedLink::Channel(name));
        }
        (!href.is_empty()).then_some(ActivatedLink::Url(href))
    }

    pub fn dispatch<S: EventSink + ?Sized>(self, sink: &mut S) {
        match self {
            ActivatedLink::Url(target) => sink.on_link_activated(target),
            ActivatedLink::Channel(name) => sink.on_channel_link_activated(name),
        }
    }
}

/// A recorded interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SelectionCopied(String),
    LinkActivated(String),
    ChannelLinkActivated(String),
}

/// Sink that records every event, for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl EventSink for RecordingSink {
    fn on_selection_copied(&mut self, text: &str) {
        self.events.push(Event::SelectionCopied(text.to_string()));
    }

    fn on_link_activated(&mut self, target: &str) {
        self.events.push(Event::LinkActivated(target.to_string()));
    }

    fn on_channel_link_activated(&mut self, name: &str) {
        self.events.push(Event::ChannelLinkActivated(name.to_string()));
    }
}

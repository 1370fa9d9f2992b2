//! Splitting a model token stream into markdown and studyplan channels.
//!
//! The model answers with free-form markdown and may embed one studyplan
//! between sentinel markers:
//!
//! ```text
//! Here's your plan! <¤§<STUDYPLAN>§¤>name: ...<¤§</STUDYPLAN>§¤> Have fun!
//! └──── markdown ──┘                 └ studyplan ┘                └ markdown ┘
//! ```
//!
//! Tokens arrive in arbitrary fragments, so a marker can be split across any
//! number of chunks. [`TagDemultiplexer`] is a character level state machine
//! with a bounded lookback buffer: characters that may still belong to a
//! marker are held back, everything else is forwarded to a [`ChannelSink`]
//! as soon as it is known to be content.
//!
//! # Examples
//!
//! ```rust
//! use studymate_core::demux::{ChannelSink, TagDemultiplexer};
//!
//! #[derive(Default)]
//! struct Split {
//!     markdown: String,
//!     studyplan: String,
//! }
//!
//! impl ChannelSink for Split {
//!     fn on_write_markdown(&mut self, text: &str) {
//!         self.markdown.push_str(text);
//!     }
//!
//!     fn on_write_studyplan(&mut self, text: &str) {
//!         self.studyplan.push_str(text);
//!     }
//! }
//!
//! let mut demux = TagDemultiplexer::new();
//! let mut split = Split::default();
//! for chunk in ["Hi <¤§<STUDY", "PLAN>§¤>name: A<¤§</STUDYPLAN>", "§¤> bye"] {
//!     demux.process_new_chunk(chunk, &mut split);
//! }
//! demux.finish(&mut split);
//!
//! assert_eq!(split.markdown, "Hi  bye");
//! assert_eq!(split.studyplan, "name: A");
//! ```

use log::{debug, warn};

use crate::tags::ModelTag;


/// Receiver of demultiplexed content.
///
/// Every method has an empty default so sinks only implement what they
/// consume. Text passed to the write callbacks never contains marker text.
pub trait ChannelSink {
    /// Markdown content, in stream order.
    fn on_write_markdown(&mut self, _text: &str) {}

    /// The opening studyplan marker was matched.
    fn on_start_writing_studyplan(&mut self) {}

    /// Studyplan payload content, in stream order.
    fn on_write_studyplan(&mut self, _text: &str) {}

    /// The closing studyplan marker was matched.
    fn on_finish_writing_studyplan(&mut self) {}
}

impl ChannelSink for () {}

/// The channel content is currently routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Free-form markdown for live rendering
    #[default]
    Markdown,

    /// Structured studyplan payload
    Studyplan,
}

/// Character level demultiplexer for one model response.
///
/// One instance handles exactly one stream. It holds no handles, so dropping
/// it is enough to cancel.
#[derive(Debug, Clone)]
pub struct TagDemultiplexer {
    channel: Channel,
    open: String,
    close: String,
    /// Characters that may still complete a marker
    buffer: String,
    /// Content known to be safe, not yet handed to the sink
    pending: String,
}

impl TagDemultiplexer {
    /// Creates a demultiplexer watching the studyplan markers.
    pub fn new() -> Self {
        Self::with_tag(ModelTag::Studyplan)
    }

    /// Creates a demultiplexer whose structured channel is delimited by
    /// `tag`.
    pub fn with_tag(tag: ModelTag) -> Self {
        Self {
            channel: Channel::Markdown,
            open: tag.open(),
            close: tag.close(),
            buffer: String::new(),
            pending: String::new(),
        }
    }

    /// Channel the next content character will be written to.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Feeds the next fragment of the stream.
    ///
    /// Content is delivered before this returns, except for a trailing
    /// partial marker which stays buffered until it is resolved by the next
    /// fragment or by [`finish`](Self::finish).
    pub fn process_new_chunk<S: ChannelSink + ?Sized>(&mut self, chunk: &str, sink: &mut S) {
        for c in chunk.chars() {
            self.push_char(c, sink);
        }
        self.flush_pending(sink);
    }

    /// Ends the stream, releasing a dangling partial marker as content.
    pub fn finish<S: ChannelSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.buffer.is_empty() {
            debug!(
                "Flushing {} buffered characters at end of stream",
                self.buffer.chars().count()
            );
            let rest = std::mem::take(&mut self.buffer);
            self.pending.push_str(&rest);
        }
        self.flush_pending(sink);
    }

    fn push_char<S: ChannelSink + ?Sized>(&mut self, c: char, sink: &mut S) {
        self.buffer.push(c);

        // Drop leading characters until the buffer is a marker prefix again.
        // They can no longer be part of a marker, so they are content.
        let mut start = 0;
        while start < self.buffer.len() && !self.is_marker_prefix(&self.buffer[start..]) {
            start += self.buffer[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        if start > 0 {
            let content: String = self.buffer.drain(..start).collect();
            self.pending.push_str(&content);
        }

        if self.buffer == self.open {
            self.buffer.clear();
            self.on_open_marker(sink);
        } else if self.buffer == self.close {
            self.buffer.clear();
            self.on_close_marker(sink);
        }
    }

    fn on_open_marker<S: ChannelSink + ?Sized>(&mut self, sink: &mut S) {
        match self.channel {
            Channel::Markdown => {
                self.flush_pending(sink);
                debug!("Studyplan channel opened");
                self.channel = Channel::Studyplan;
                sink.on_start_writing_studyplan();
            }
            Channel::Studyplan => {
                warn!("Opening tag found while already in studyplan mode");
            }
        }
    }

    fn on_close_marker<S: ChannelSink + ?Sized>(&mut self, sink: &mut S) {
        match self.channel {
            Channel::Studyplan => {
                self.flush_pending(sink);
                debug!("Studyplan channel closed");
                self.channel = Channel::Markdown;
                sink.on_finish_writing_studyplan();
            }
            Channel::Markdown => {
                warn!("Closing tag found while not in studyplan mode");
            }
        }
    }

    fn flush_pending<S: ChannelSink + ?Sized>(&mut self, sink: &mut S) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        match self.channel {
            Channel::Markdown => sink.on_write_markdown(&text),
            Channel::Studyplan => sink.on_write_studyplan(&text),
        }
    }

    fn is_marker_prefix(&self, candidate: &str) -> bool {
        self.open.starts_with(candidate) || self.close.starts_with(candidate)
    }
}

impl Default for TagDemultiplexer {
    fn default() -> Self {
        Self::new()
    }
}

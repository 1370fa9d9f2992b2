//! Collecting one complete model response into chat messages.
//!
//! [`ResponseCollector`] sits behind a [`TagDemultiplexer`]: markdown runs
//! become assistant messages, each studyplan block is fed to its own
//! [`StudyplanStreamParser`] and becomes a studyplan message once the block
//! closes. If any block cannot be finalized the whole generation is rejected
//! with [`StudymateError::InvalidStudyplan`] and nothing should be stored.
//!
//! ```text
//! Stream<String> ──▶ TagDemultiplexer ──▶ ResponseCollector ──▶ Vec<ChatMessage>
//!                                              │
//!                                              └──▶ ResponseObserver (live UI)
//! ```

use futures::{Stream, StreamExt};
use log::{debug, warn};

use crate::{
    demux::{ChannelSink, TagDemultiplexer},
    error::{Result, StudymateError},
    models::{ChatMessage, ChatStudyplan, Studyplan},
    params::ParseResponse,
    parser::{ParserObserver, StudyplanStreamParser},
};

/// Receiver of live progress while a response is collected.
///
/// Extends [`ParserObserver`] with the markdown channel so a single value
/// can drive a live view of both channels.
pub trait ResponseObserver: ParserObserver {
    /// Markdown content, in stream order.
    fn on_markdown(&mut self, _text: &str) {}
}

impl ResponseObserver for () {}

/// A run of content from one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSegment {
    /// Markdown written to the user
    Message(String),

    /// Raw payload of one studyplan block
    Studyplan(String),
}

/// Channel sink assembling the messages of one model response.
#[derive(Debug)]
pub struct ResponseCollector<O = ()> {
    observer: O,
    segments: Vec<StreamSegment>,
    /// Parser of the block currently open, if any
    parser: Option<StudyplanStreamParser>,
    /// Finalization result of every closed block, in order
    studyplans: Vec<Option<Studyplan>>,
    anomalies: Vec<String>,
}

impl ResponseCollector<()> {
    /// Creates a collector without a live observer.
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl Default for ResponseCollector<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ResponseObserver> ResponseCollector<O> {
    /// Creates a collector forwarding live progress to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            observer,
            segments: Vec::new(),
            parser: None,
            studyplans: Vec::new(),
            anomalies: Vec::new(),
        }
    }

    /// Segments collected so far.
    pub fn segments(&self) -> &[StreamSegment] {
        &self.segments
    }

    /// Finalized plans of the closed blocks; `None` for a rejected block.
    pub fn studyplans(&self) -> &[Option<Studyplan>] {
        &self.studyplans
    }

    /// Every anomaly reported by the parsers so far.
    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Ends the response. A studyplan block that never closed is rejected.
    pub fn finish(&mut self) {
        if self.parser.take().is_some() {
            let message = "Studyplan block was not closed before the end of the response";
            warn!("{message}");
            self.observer.on_error(message);
            self.anomalies.push(message.to_string());
            self.studyplans.push(None);
        }
    }

    /// Turns the collected segments into chat messages.
    ///
    /// # Errors
    ///
    /// Returns `StudymateError::InvalidStudyplan` with every anomaly seen if
    /// any studyplan block could not be finalized.
    pub fn into_messages(mut self) -> Result<Vec<ChatMessage>> {
        self.finish();

        if self.studyplans.iter().any(Option::is_none) {
            return Err(StudymateError::InvalidStudyplan {
                anomalies: self.anomalies,
            });
        }

        let mut plans = self.studyplans.into_iter().flatten();
        let mut messages = Vec::with_capacity(self.segments.len());
        for segment in self.segments {
            match segment {
                StreamSegment::Message(text) => messages.push(ChatMessage::Assistant(text)),
                StreamSegment::Studyplan(_) => {
                    if let Some(plan) = plans.next() {
                        messages.push(ChatMessage::Studyplan(ChatStudyplan::from(plan)));
                    }
                }
            }
        }
        Ok(messages)
    }
}

impl<O: ResponseObserver> ChannelSink for ResponseCollector<O> {
    fn on_write_markdown(&mut self, text: &str) {
        self.observer.on_markdown(text);
        match self.segments.last_mut() {
            Some(StreamSegment::Message(content)) => content.push_str(text),
            _ => self.segments.push(StreamSegment::Message(text.to_string())),
        }
    }

    fn on_start_writing_studyplan(&mut self) {
        self.segments.push(StreamSegment::Studyplan(String::new()));
        self.parser = Some(StudyplanStreamParser::new());
    }

    fn on_write_studyplan(&mut self, text: &str) {
        if let Some(StreamSegment::Studyplan(content)) = self.segments.last_mut() {
            content.push_str(text);
        }
        if let Some(parser) = self.parser.as_mut() {
            parser.process_new_chunk(text, &mut self.observer);
        }
    }

    fn on_finish_writing_studyplan(&mut self) {
        let Some(mut parser) = self.parser.take() else {
            return;
        };
        parser.finish(&mut self.observer);
        let studyplan = parser.get_full_studyplan(&mut self.observer);
        debug!(
            "Studyplan block {} finalized: {}",
            self.studyplans.len() + 1,
            if studyplan.is_some() { "valid" } else { "rejected" }
        );
        self.anomalies.extend_from_slice(parser.anomalies());
        self.studyplans.push(studyplan);
    }
}

/// Splits `text` into chunks of `params.chunk_size` characters, the way a
/// model stream delivers it.
///
/// # Errors
///
/// Returns `StudymateError::InvalidInput` if the chunk size is zero.
pub fn split_into_chunks(text: &str, params: &ParseResponse) -> Result<Vec<String>> {
    if params.chunk_size == 0 {
        return Err(StudymateError::invalid_input("chunk_size").with_reason("must be at least 1"));
    }

    let chars: Vec<char> = text.chars().collect();
    Ok(chars
        .chunks(params.chunk_size)
        .map(|chunk| chunk.iter().collect())
        .collect())
}

/// Runs a whole model stream through a fresh demultiplexer and collector.
///
/// The returned collector is finished; call
/// [`ResponseCollector::into_messages`] to get the messages to store.
pub async fn collect_stream<S, O>(stream: S, observer: O) -> ResponseCollector<O>
where
    S: Stream<Item = String>,
    O: ResponseObserver,
{
    let mut demux = TagDemultiplexer::new();
    let mut collector = ResponseCollector::with_observer(observer);

    futures::pin_mut!(stream);
    while let Some(chunk) = stream.next().await {
        demux.process_new_chunk(&chunk, &mut collector);
    }
    demux.finish(&mut collector);
    collector.finish();

    collector
}

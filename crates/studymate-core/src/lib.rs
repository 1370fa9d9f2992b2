//! Core library for the Studymate study assistant.
//!
//! The assistant answers in free-form markdown and may embed a structured
//! studyplan between sentinel tags. This crate turns such a token stream
//! into something an application can render live and store:
//!
//! - [`demux`]: splits the stream into a markdown and a studyplan channel
//! - [`parser`]: reconstructs a studyplan draft from the studyplan channel
//!   while it streams, then finalizes or rejects it
//! - [`response`]: glues both together for one complete response
//! - [`progress`]: derives the current day and completion flags of a
//!   started plan from task timestamps and the user's timezone
//! - [`prompt`]: renders a plan back into the model's format
//!
//! All stream components are plain single-owner state machines. Create one
//! per stream; there is no global state.
//!
//! # Quick Start
//!
//! ```rust
//! use studymate_core::{
//!     demux::TagDemultiplexer,
//!     models::ChatMessage,
//!     response::ResponseCollector,
//! };
//!
//! let mut demux = TagDemultiplexer::new();
//! let mut collector = ResponseCollector::new();
//! for chunk in [
//!     "Here you go!<¤§<STUDY",
//!     "PLAN>§¤>name: A\ndesc: B\ncategory: C\ndaily_lessons:\n",
//!     "### 1\nname: L1\ndesc: D1\ntasks:\n- t1\n<¤§</STUDYPLAN>§¤>",
//! ] {
//!     demux.process_new_chunk(chunk, &mut collector);
//! }
//! demux.finish(&mut collector);
//!
//! let messages = collector.into_messages()?;
//! assert_eq!(messages[0], ChatMessage::Assistant("Here you go!".to_string()));
//! assert!(matches!(messages[1], ChatMessage::Studyplan(_)));
//! # Ok::<(), studymate_core::StudymateError>(())
//! ```

pub mod demux;
pub mod display;
pub mod error;
pub mod files;
pub mod models;
pub mod params;
pub mod parser;
pub mod progress;
pub mod prompt;
pub mod response;
pub mod tags;

// Re-export commonly used types
pub use demux::{Channel, ChannelSink, TagDemultiplexer};
pub use display::{CompletionResult, LocalDateTime, ProgressReport};
pub use error::{Result, StudymateError};
pub use models::{
    ChatMessage, ChatStudyplan, DailyLesson, LessonDraft, Studyplan, StudyplanDraft,
    UserDailyLesson, UserStudyplan, UserTask,
};
pub use params::{CompleteTask, EvaluateProgress, ParseResponse};
pub use parser::{ParsePhase, ParserObserver, StudyplanStreamParser};
pub use progress::{complete_task, evaluate, evaluate_at, evaluate_with, ProgressState};
pub use prompt::to_model_prompt;
pub use response::{collect_stream, ResponseCollector, ResponseObserver, StreamSegment};
pub use tags::ModelTag;

//! Data models for studyplans, drafts, started plans and chat messages.
//!
//! This module contains the core domain models shared by the streaming
//! pipeline and the progress evaluator. Display implementations for these
//! models are located in [`crate::display::models`] to keep data structures
//! separate from presentation.
//!
//! # Lifecycle
//!
//! ```text
//! model stream ──▶ StudyplanDraft ──▶ Studyplan ──▶ UserStudyplan
//!                  (while parsing)    (finalized)   (started, with
//!                                                    completion times)
//! ```
//!
//! JSON field names follow the persisted format (`desc`, `daily_lessons`,
//! `completed_at`) so stored plans and chat histories round-trip unchanged.
//!
//! # Examples
//!
//! ```rust
//! use studymate_core::models::{DailyLesson, Studyplan, UserStudyplan};
//!
//! let plan = Studyplan {
//!     name: "Intro to Rust".to_string(),
//!     desc: "Ownership, borrowing and friends".to_string(),
//!     category: "Programming".to_string(),
//!     daily_lessons: vec![DailyLesson {
//!         name: "Hello, cargo".to_string(),
//!         desc: "Create and run a first project".to_string(),
//!         tasks: vec!["Run cargo new".to_string()],
//!     }],
//! };
//!
//! let started = UserStudyplan::start(None, &plan);
//! assert!(started.daily_lessons[0].tasks[0].completed_at.is_none());
//! ```

pub mod draft;
pub mod message;
pub mod studyplan;
pub mod user;


pub use draft::{LessonDraft, StudyplanDraft};
pub use message::{ChatMessage, ChatStudyplan};
pub use studyplan::{DailyLesson, Studyplan};
pub use user::{UserDailyLesson, UserStudyplan, UserTask};

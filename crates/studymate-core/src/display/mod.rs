//! Display wrappers and markdown formatting.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Output that needs context, such as the user's timezone, goes through the
//! wrapper types of this module instead. Everything renders as markdown so
//! the CLI can hand it to its terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Markdown      │
//! │ (Studyplan ...) │───▶│ (ProgressReport)│───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use studymate_core::{
//!     display::CompletionResult,
//!     progress::resolve_timezone,
//! };
//!
//! let tz = resolve_timezone("UTC")?;
//! let at: jiff::Timestamp = "2024-03-15T10:00:00Z".parse()?;
//! let result = CompletionResult::new(2, 0, "Read chapter 1", at, &tz);
//! assert!(format!("{result}").contains("2024-03-15 10:00:00 UTC"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod datetime;
pub mod models;
pub mod progress;

pub use datetime::LocalDateTime;
pub use progress::{CompletionResult, ProgressReport};

//! Parameter structures for studymate operations
//!
//! These structures carry operation input across interfaces without any
//! framework-specific derives. The CLI defines its own clap argument types
//! and converts them into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Core Logic     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (progress, ...) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::Timestamp;

/// Default number of characters per simulated stream chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 8;

/// Parameters for evaluating a started studyplan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluateProgress {
    /// IANA timezone identifier of the user, e.g. `Europe/Paris`
    pub timezone: String,
    /// Instant to evaluate at; `None` means the current time
    pub now: Option<Timestamp>,
}

/// Parameters for completing one of today's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTask {
    /// Zero-based index of the task within the current day
    pub index: usize,
    /// IANA timezone identifier of the user
    pub timezone: String,
    /// Completion instant; `None` means the current time
    pub now: Option<Timestamp>,
}

/// Parameters for replaying a raw model response through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResponse {
    /// Number of characters per chunk fed to the demultiplexer
    pub chunk_size: usize,
}

impl Default for ParseResponse {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

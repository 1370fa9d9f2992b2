//! Finalized studyplan model.

use serde::{Deserialize, Serialize};

/// A fully specified studyplan, as produced by
/// [`crate::parser::StudyplanStreamParser::get_full_studyplan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Studyplan {
    /// Title of the studyplan
    pub name: String,

    /// Short description of what the plan teaches
    pub desc: String,

    /// Category the plan belongs to
    pub category: String,

    /// Lessons in day order
    pub daily_lessons: Vec<DailyLesson>,
}

/// One day of a studyplan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyLesson {
    /// Lesson name
    pub name: String,

    /// Lesson description
    pub desc: String,

    /// Task goals, never empty in a finalized plan
    pub tasks: Vec<String>,
}

//! In-progress representations of a studyplan while it is being streamed.

use serde::{Deserialize, Serialize};

/// Snapshot of a studyplan that is still being generated.
///
/// Only the top-level fields and two progress indicators are tracked here;
/// this is what a "generating" card shows while lessons stream in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyplanDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Number of lesson headers seen so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<usize>,

    /// Name of the most recently started lesson
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lesson: Option<String>,
}

impl StudyplanDraft {
    /// Returns true once `name`, `desc` and `category` are all non-empty.
    pub fn has_header(&self) -> bool {
        self.missing_header_fields().is_empty()
    }

    /// Header keys that are still absent or empty, in stream order.
    pub fn missing_header_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("desc", &self.desc),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(key, _)| key)
        .collect()
    }
}

/// A lesson under construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    pub tasks: Vec<String>,
}

impl LessonDraft {
    /// Returns true if the lesson has a name, a description and a task.
    pub fn is_complete(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
            && self.desc.as_deref().is_some_and(|d| !d.is_empty())
            && !self.tasks.is_empty()
    }
}

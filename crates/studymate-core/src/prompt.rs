//! Rendering finalized studyplans back into the model payload format.
//!
//! When a conversation is replayed to the model, earlier studyplan messages
//! have to look exactly like what the model itself would have written, so
//! the output here is the format [`crate::parser`] reads, wrapped in the
//! studyplan markers.

use std::fmt::Write as _;

use crate::{models::Studyplan, tags::ModelTag};

/// Renders `studyplan` in the tagged payload format understood by
/// [`crate::demux`] and [`crate::parser`].
///
/// Lessons are numbered from 1.
///
/// # Examples
///
/// ```rust
/// use studymate_core::{models::{DailyLesson, Studyplan}, prompt::to_model_prompt};
///
/// let plan = Studyplan {
///     name: "A".to_string(),
///     desc: "B".to_string(),
///     category: "C".to_string(),
///     daily_lessons: vec![DailyLesson {
///         name: "L1".to_string(),
///         desc: "D1".to_string(),
///         tasks: vec!["t1".to_string()],
///     }],
/// };
///
/// let prompt = to_model_prompt(&plan);
/// assert!(prompt.starts_with("<¤§<STUDYPLAN>§¤>\nname: A\n"));
/// assert!(prompt.contains("### 1\nname: L1\ndesc: D1\ntasks:\n- t1\n"));
/// ```
pub fn to_model_prompt(studyplan: &Studyplan) -> String {
    let mut body = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(body, "name: {}", studyplan.name);
    let _ = writeln!(body, "desc: {}", studyplan.desc);
    let _ = writeln!(body, "category: {}", studyplan.category);
    let _ = write!(body, "daily_lessons:");

    for (i, lesson) in studyplan.daily_lessons.iter().enumerate() {
        let _ = write!(body, "\n### {}", i + 1);
        let _ = write!(body, "\nname: {}", lesson.name);
        let _ = write!(body, "\ndesc: {}", lesson.desc);
        let _ = write!(body, "\ntasks:");
        for task in &lesson.tasks {
            let _ = write!(body, "\n- {task}");
        }
    }

    ModelTag::Studyplan.wrap(&body)
}

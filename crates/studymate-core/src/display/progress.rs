//! Progress and task completion output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use super::datetime::LocalDateTime;
use crate::progress::ProgressState;

/// A [`ProgressState`] rendered for a user in their timezone.
///
/// Completed tasks show when they were completed, in local time.
pub struct ProgressReport<'a> {
    pub progress: &'a ProgressState,
    pub timezone: &'a TimeZone,
}

impl<'a> ProgressReport<'a> {
    /// Create a new report wrapper.
    pub fn new(progress: &'a ProgressState, timezone: &'a TimeZone) -> Self {
        Self { progress, timezone }
    }

    fn status(&self) -> &'static str {
        let progress = self.progress;
        if progress.studyplan_is_completed {
            "Studyplan completed"
        } else if progress.are_todays_tasks_all_done {
            "All done for today, come back tomorrow"
        } else if progress.is_on_last_day {
            "Last day"
        } else {
            "In progress"
        }
    }
}

impl fmt::Display for ProgressReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = self
            .progress
            .todays_tasks
            .iter()
            .filter(|t| t.is_done())
            .count();

        writeln!(
            f,
            "## Day {} ({done}/{})",
            self.progress.current_day,
            self.progress.todays_tasks.len()
        )?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status())?;
        writeln!(f)?;

        for (i, task) in self.progress.todays_tasks.iter().enumerate() {
            match &task.completed_at {
                Some(at) => writeln!(f, "{i}. {task} ({})", LocalDateTime(at, self.timezone))?,
                None => writeln!(f, "{i}. {task}")?,
            }
        }

        Ok(())
    }
}

/// Confirmation of a completed task.
pub struct CompletionResult<'a> {
    pub day: usize,
    pub index: usize,
    pub goal: &'a str,
    pub completed_at: Timestamp,
    pub timezone: &'a TimeZone,
}

impl<'a> CompletionResult<'a> {
    /// Create a new CompletionResult wrapper.
    pub fn new(
        day: usize,
        index: usize,
        goal: &'a str,
        completed_at: Timestamp,
        timezone: &'a TimeZone,
    ) -> Self {
        Self {
            day,
            index,
            goal,
            completed_at,
            timezone,
        }
    }
}

impl fmt::Display for CompletionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed task {} of day {}: {}",
            self.index, self.day, self.goal
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Completed at: {}",
            LocalDateTime(&self.completed_at, self.timezone)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserTask;

    fn state(tasks: Vec<UserTask>, all_done: bool) -> ProgressState {
        ProgressState {
            todays_tasks: tasks,
            is_on_last_day: false,
            current_day: 2,
            studyplan_is_completed: false,
            are_todays_tasks_all_done: all_done,
        }
    }

    #[test]
    fn test_progress_report() {
        let tz = TimeZone::get("Europe/Paris").unwrap();
        let progress = state(
            vec![
                UserTask {
                    goal: "Push a box".to_string(),
                    completed_at: Some("2024-03-15T10:00:00Z".parse().unwrap()),
                },
                UserTask {
                    goal: "Pull a box".to_string(),
                    completed_at: None,
                },
            ],
            false,
        );

        let output = ProgressReport::new(&progress, &tz).to_string();
        assert!(output.starts_with("## Day 2 (1/2)"));
        assert!(output.contains("- Status: In progress"));
        assert!(output.contains("0. [x] Push a box (2024-03-15 11:00:00 CET)"));
        assert!(output.contains("1. [ ] Pull a box\n"));
    }

    #[test]
    fn test_progress_report_status() {
        let progress = state(Vec::new(), true);
        let output = ProgressReport::new(&progress, &TimeZone::UTC).to_string();
        assert!(output.contains("come back tomorrow"));
    }
}

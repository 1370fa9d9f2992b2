//! Started studyplan model with per-task completion timestamps.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Studyplan;

/// A studyplan the user has started following.
///
/// Each task carries its completion instant. Tasks start uncompleted and are
/// completed exactly once; only abandoning or restarting the whole plan
/// resets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStudyplan {
    /// ID of the public studyplan this one was started from
    #[serde(default)]
    pub original_id: Option<String>,

    pub name: String,

    pub desc: String,

    pub category: String,

    pub daily_lessons: Vec<UserDailyLesson>,
}

/// One day of a started studyplan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDailyLesson {
    pub name: String,

    pub desc: String,

    pub tasks: Vec<UserTask>,
}

/// A task goal and the instant it was completed (UTC), if it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserTask {
    pub goal: String,

    pub completed_at: Option<Timestamp>,
}

impl UserTask {
    /// Returns true if the task has a completion timestamp.
    pub fn is_done(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl UserStudyplan {
    /// Starts `studyplan`, creating every task uncompleted.
    pub fn start(original_id: Option<String>, studyplan: &Studyplan) -> Self {
        let daily_lessons = studyplan
            .daily_lessons
            .iter()
            .map(|lesson| UserDailyLesson {
                name: lesson.name.clone(),
                desc: lesson.desc.clone(),
                tasks: lesson
                    .tasks
                    .iter()
                    .map(|goal| UserTask {
                        goal: goal.clone(),
                        completed_at: None,
                    })
                    .collect(),
            })
            .collect();

        Self {
            original_id,
            name: studyplan.name.clone(),
            desc: studyplan.desc.clone(),
            category: studyplan.category.clone(),
            daily_lessons,
        }
    }

    /// Total number of tasks across all days.
    pub fn total_tasks(&self) -> usize {
        self.daily_lessons.iter().map(|l| l.tasks.len()).sum()
    }

    /// Number of tasks with a completion timestamp.
    pub fn completed_tasks(&self) -> usize {
        self.daily_lessons
            .iter()
            .flat_map(|l| &l.tasks)
            .filter(|t| t.is_done())
            .count()
    }
}

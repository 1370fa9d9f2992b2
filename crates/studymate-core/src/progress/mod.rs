//! Progress evaluation for a started studyplan.
//!
//! Nothing about "where the user is" is stored: the current day and the
//! completion flags are derived on demand from the per-task completion
//! timestamps and the user's timezone.
//!
//! # Current day
//!
//! The current day is the first day (one-indexed) holding an uncompleted
//! task. One adjustment applies: when the user has not completed anything
//! on that day yet and finished the previous day *today* (calendar date in
//! their timezone), they are still considered to be on the previous day.
//! Finishing a day late in the evening therefore does not roll the user onto
//! the next lesson before midnight.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use studymate_core::{
//!     models::{DailyLesson, Studyplan, UserStudyplan},
//!     progress::evaluate_at,
//! };
//!
//! let plan = Studyplan {
//!     name: "Plan".to_string(),
//!     desc: "Desc".to_string(),
//!     category: "Programming".to_string(),
//!     daily_lessons: vec![DailyLesson {
//!         name: "Day one".to_string(),
//!         desc: "Start".to_string(),
//!         tasks: vec!["First task".to_string()],
//!     }],
//! };
//! let started = UserStudyplan::start(None, &plan);
//!
//! let now: Timestamp = "2024-06-01T12:00:00Z".parse()?;
//! let progress = evaluate_at(&started, "Europe/Madrid", now)?;
//! assert_eq!(progress.current_day, 1);
//! assert!(!progress.are_todays_tasks_all_done);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StudymateError},
    models::{UserDailyLesson, UserStudyplan, UserTask},
    params::{CompleteTask, EvaluateProgress},
};

#[cfg(test)]
mod tests;

/// Derived progress of a started studyplan. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// Tasks of the current day (the last day once completed)
    pub todays_tasks: Vec<UserTask>,

    /// Whether the current day is the last day
    pub is_on_last_day: bool,

    /// One-indexed current day
    pub current_day: usize,

    /// Whether every task of every day has been completed
    pub studyplan_is_completed: bool,

    /// Whether every task of the current day has been completed
    pub are_todays_tasks_all_done: bool,
}

/// Resolves an IANA timezone identifier.
///
/// # Errors
///
/// Returns `StudymateError::InvalidTimezone` for unknown identifiers.
pub fn resolve_timezone(timezone: &str) -> Result<TimeZone> {
    TimeZone::get(timezone).map_err(|source| StudymateError::InvalidTimezone {
        timezone: timezone.to_string(),
        source,
    })
}

/// Evaluates `plan` against the current time.
///
/// # Errors
///
/// See [`evaluate_at`].
pub fn evaluate(plan: &UserStudyplan, timezone: &str) -> Result<ProgressState> {
    evaluate_at(plan, timezone, Timestamp::now())
}

/// Evaluates `plan` as of `now`.
///
/// # Errors
///
/// - `StudymateError::InvalidTimezone` if `timezone` is not a known zone
/// - `StudymateError::InvalidInput` if the plan has no days
/// - `StudymateError::Invariant` if the day before the current day still has
///   uncompleted tasks
pub fn evaluate_at(plan: &UserStudyplan, timezone: &str, now: Timestamp) -> Result<ProgressState> {
    let tz = resolve_timezone(timezone)?;
    let days = &plan.daily_lessons;

    let Some(last_day) = days.last() else {
        return Err(StudymateError::invalid_input("daily_lessons")
            .with_reason("studyplan has no daily lessons"));
    };

    let Some(first_open) = days
        .iter()
        .position(|day| day.tasks.iter().any(|t| !t.is_done()))
    else {
        // Every task is done.
        return Ok(ProgressState {
            todays_tasks: last_day.tasks.clone(),
            is_on_last_day: true,
            current_day: days.len(),
            studyplan_is_completed: true,
            are_todays_tasks_all_done: true,
        });
    };

    let mut current_day = first_open + 1;
    let has_completed_a_task_today = days[first_open].tasks.iter().any(UserTask::is_done);

    if !has_completed_a_task_today && current_day > 1 {
        let today = local_date(now, &tz);
        let finished_today = was_finished_on(&days[current_day - 2], current_day - 1, today, &tz)?;

        if finished_today {
            debug!(
                "Day {} was finished today, staying on it",
                current_day - 1
            );
            current_day -= 1;
        }
    }

    let todays_tasks = days[current_day - 1].tasks.clone();
    let are_todays_tasks_all_done = todays_tasks.iter().all(UserTask::is_done);

    Ok(ProgressState {
        todays_tasks,
        is_on_last_day: current_day == days.len(),
        current_day,
        studyplan_is_completed: false,
        are_todays_tasks_all_done,
    })
}

/// Evaluates progress from parameter structure input.
///
/// # Errors
///
/// See [`evaluate_at`].
pub fn evaluate_with(plan: &UserStudyplan, params: &EvaluateProgress) -> Result<ProgressState> {
    evaluate_at(plan, &params.timezone, params.now.unwrap_or_else(Timestamp::now))
}

/// Marks task `params.index` of the current day as completed at
/// `params.now` (or the current time) and returns the stored timestamp.
///
/// # Errors
///
/// - Any error of [`evaluate_at`]
/// - `StudymateError::TaskNotCompletable` if the plan is already completed,
///   if today's tasks are all done, or if the index is out of range or the
///   task was already completed
pub fn complete_task(plan: &mut UserStudyplan, params: &CompleteTask) -> Result<Timestamp> {
    let now = params.now.unwrap_or_else(Timestamp::now);
    let progress = evaluate_at(plan, &params.timezone, now)?;

    if progress.studyplan_is_completed {
        return Err(StudymateError::not_completable("studyplan is already completed"));
    }

    if progress.are_todays_tasks_all_done {
        return Err(StudymateError::not_completable(
            "today's tasks are already completed, wait until tomorrow to complete more tasks",
        ));
    }

    let task = plan.daily_lessons[progress.current_day - 1]
        .tasks
        .get_mut(params.index)
        .filter(|t| !t.is_done())
        .ok_or_else(|| {
            StudymateError::not_completable(format!(
                "invalid task index {} or task is already completed",
                params.index
            ))
        })?;

    task.completed_at = Some(now);
    debug!(
        "Completed task {} of day {} at {now}",
        params.index, progress.current_day
    );
    Ok(now)
}

/// Returns true if any task of the fully completed `day` was completed on
/// `date` in `tz`.
///
/// # Errors
///
/// Returns `StudymateError::Invariant` if `day` has an uncompleted task.
fn was_finished_on(
    day: &UserDailyLesson,
    day_number: usize,
    date: Date,
    tz: &TimeZone,
) -> Result<bool> {
    let mut finished_on_date = false;
    for task in &day.tasks {
        let Some(completed_at) = task.completed_at else {
            return Err(StudymateError::invariant(format!(
                "day {day_number} has uncompleted tasks but a later day is the current day"
            )));
        };
        finished_on_date |= local_date(completed_at, tz) == date;
    }
    Ok(finished_on_date)
}

/// Calendar date of `at` in `tz`.
fn local_date(at: Timestamp, tz: &TimeZone) -> Date {
    at.to_zoned(tz.clone()).date()
}

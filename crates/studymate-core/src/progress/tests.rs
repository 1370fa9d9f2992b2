//! Tests for progress evaluation.

use super::*;

const PARIS: &str = "Europe/Paris";

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

/// Builds a plan from per-day completion timestamps (`None` = uncompleted).
fn plan_with(days: &[&[Option<&str>]]) -> UserStudyplan {
    UserStudyplan {
        original_id: None,
        name: "Plan".to_string(),
        desc: "Desc".to_string(),
        category: "Physics".to_string(),
        daily_lessons: days
            .iter()
            .enumerate()
            .map(|(d, tasks)| UserDailyLesson {
                name: format!("Day {}", d + 1),
                desc: "Lesson".to_string(),
                tasks: tasks
                    .iter()
                    .enumerate()
                    .map(|(t, at)| UserTask {
                        goal: format!("Task {}.{}", d + 1, t + 1),
                        completed_at: at.map(ts),
                    })
                    .collect(),
            })
            .collect(),
    }
}

// 11:00 in Paris.
const NOW: &str = "2024-03-15T10:00:00Z";
const YESTERDAY: &str = "2024-03-14T18:00:00Z";
const EARLIER_TODAY: &str = "2024-03-15T07:30:00Z";

#[test]
fn test_day_finished_yesterday_moves_to_next_day() {
    let plan = plan_with(&[
        &[Some(YESTERDAY), Some(YESTERDAY)],
        &[None, None],
        &[None, None],
    ]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert_eq!(progress.current_day, 2);
    assert!(!progress.is_on_last_day);
    assert!(!progress.studyplan_is_completed);
    assert!(!progress.are_todays_tasks_all_done);
    assert_eq!(progress.todays_tasks[0].goal, "Task 2.1");
}

#[test]
fn test_day_finished_today_stays_on_that_day() {
    let plan = plan_with(&[
        &[Some(YESTERDAY), Some(EARLIER_TODAY)],
        &[None, None],
        &[None, None],
    ]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert_eq!(progress.current_day, 1);
    assert!(progress.are_todays_tasks_all_done);
    assert_eq!(progress.todays_tasks[1].goal, "Task 1.2");
}

#[test]
fn test_started_day_ignores_previous_day() {
    // Day 2 already has a completed task, so the grace rule does not apply.
    let plan = plan_with(&[
        &[Some(EARLIER_TODAY)],
        &[Some(EARLIER_TODAY), None],
        &[None],
    ]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert_eq!(progress.current_day, 2);
    assert!(!progress.are_todays_tasks_all_done);
}

#[test]
fn test_fresh_plan_starts_on_day_one() {
    let plan = plan_with(&[&[None, None], &[None]]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert_eq!(progress.current_day, 1);
    assert!(!progress.is_on_last_day);
    assert!(!progress.are_todays_tasks_all_done);
}

#[test]
fn test_completed_plan() {
    let plan = plan_with(&[
        &[Some(YESTERDAY), Some(YESTERDAY)],
        &[Some(YESTERDAY), Some(EARLIER_TODAY)],
        &[Some(EARLIER_TODAY), Some(EARLIER_TODAY)],
    ]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert!(progress.studyplan_is_completed);
    assert!(progress.is_on_last_day);
    assert!(progress.are_todays_tasks_all_done);
    assert_eq!(progress.current_day, 3);
    assert_eq!(progress.todays_tasks[0].goal, "Task 3.1");
}

#[test]
fn test_last_day_in_progress() {
    let plan = plan_with(&[&[Some(YESTERDAY)], &[Some(EARLIER_TODAY), None]]);
    let progress = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();

    assert_eq!(progress.current_day, 2);
    assert!(progress.is_on_last_day);
    assert!(!progress.studyplan_is_completed);
}

#[test]
fn test_evaluation_is_idempotent() {
    let plan = plan_with(&[&[Some(YESTERDAY)], &[None], &[None]]);

    let first = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();
    let second = evaluate_at(&plan, PARIS, ts(NOW)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_calendar_date_not_24_hours() {
    let tz = "America/New_York";
    let plan = plan_with(&[&[Some("2024-03-10T05:10:00Z")], &[None]]);

    // 00:10 EST on March 10th vs 23:30 EDT the same day: more than 22 hours
    // apart across the DST switch, still the same calendar date.
    let progress = evaluate_at(&plan, tz, ts("2024-03-11T03:30:00Z")).unwrap();
    assert_eq!(progress.current_day, 1);

    // 23:30 EST on March 9th vs 00:30 EST on March 10th: one hour apart,
    // different calendar dates.
    let plan = plan_with(&[&[Some("2024-03-10T04:30:00Z")], &[None]]);
    let progress = evaluate_at(&plan, tz, ts("2024-03-10T05:30:00Z")).unwrap();
    assert_eq!(progress.current_day, 2);
}

#[test]
fn test_timezone_decides_today() {
    // 23:30 UTC on the 14th is already the 15th in Tokyo.
    let plan = plan_with(&[&[Some("2024-03-14T23:30:00Z")], &[None]]);
    let now = ts("2024-03-15T01:00:00Z");

    assert_eq!(evaluate_at(&plan, "Asia/Tokyo", now).unwrap().current_day, 1);
    assert_eq!(evaluate_at(&plan, "America/Los_Angeles", now).unwrap().current_day, 1);
    assert_eq!(evaluate_at(&plan, "UTC", now).unwrap().current_day, 2);
}

#[test]
fn test_invalid_timezone() {
    let plan = plan_with(&[&[None]]);
    let result = evaluate_at(&plan, "Mars/Olympus_Mons", ts(NOW));

    assert!(matches!(
        result,
        Err(StudymateError::InvalidTimezone { ref timezone, .. }) if timezone == "Mars/Olympus_Mons"
    ));
}

#[test]
fn test_plan_without_days() {
    let plan = plan_with(&[]);
    let result = evaluate_at(&plan, PARIS, ts(NOW));
    assert!(matches!(result, Err(StudymateError::InvalidInput { .. })));
}

#[test]
fn test_incomplete_previous_day_is_an_invariant_violation() {
    let plan = plan_with(&[&[Some(YESTERDAY), None]]);
    let day = &plan.daily_lessons[0];
    let tz = resolve_timezone(PARIS).unwrap();
    let today = local_date(ts(NOW), &tz);

    let result = was_finished_on(day, 1, today, &tz);
    assert!(matches!(result, Err(StudymateError::Invariant { .. })));
}

#[test]
fn test_evaluate_uses_wall_clock() {
    let plan = plan_with(&[&[None]]);
    let progress = evaluate(&plan, PARIS).unwrap();
    assert_eq!(progress.current_day, 1);
}

#[test]
fn test_evaluate_with_params() {
    let plan = plan_with(&[&[Some(YESTERDAY)], &[None]]);
    let params = EvaluateProgress {
        timezone: PARIS.to_string(),
        now: Some(ts(NOW)),
    };
    assert_eq!(evaluate_with(&plan, &params).unwrap().current_day, 2);
}

#[test]
fn test_progress_state_json_names() {
    let plan = plan_with(&[&[None]]);
    let value = serde_json::to_value(evaluate_at(&plan, PARIS, ts(NOW)).unwrap()).unwrap();

    assert_eq!(value["currentDay"], 1);
    assert_eq!(value["isOnLastDay"], true);
    assert_eq!(value["studyplanIsCompleted"], false);
    assert_eq!(value["areTodaysTasksAllDone"], false);
    assert_eq!(value["todaysTasks"][0]["completed_at"], serde_json::Value::Null);
}

fn complete(index: usize, now: &str) -> CompleteTask {
    CompleteTask {
        index,
        timezone: PARIS.to_string(),
        now: Some(ts(now)),
    }
}

#[test]
fn test_complete_task() {
    let mut plan = plan_with(&[&[Some(YESTERDAY)], &[None, None]]);

    let at = complete_task(&mut plan, &complete(1, NOW)).unwrap();
    assert_eq!(at, ts(NOW));
    assert_eq!(plan.daily_lessons[1].tasks[1].completed_at, Some(ts(NOW)));
    assert_eq!(plan.daily_lessons[1].tasks[0].completed_at, None);
}

#[test]
fn test_complete_task_refuses_done_or_missing_task() {
    let mut plan = plan_with(&[&[Some(EARLIER_TODAY), None]]);

    let already_done = complete_task(&mut plan, &complete(0, NOW));
    assert!(matches!(already_done, Err(StudymateError::TaskNotCompletable { .. })));

    let out_of_range = complete_task(&mut plan, &complete(5, NOW));
    assert!(matches!(out_of_range, Err(StudymateError::TaskNotCompletable { .. })));
}

#[test]
fn test_complete_task_waits_until_tomorrow() {
    // Day 1 was finished this morning, day 2 must wait.
    let mut plan = plan_with(&[&[Some(EARLIER_TODAY)], &[None]]);

    let result = complete_task(&mut plan, &complete(0, NOW));
    match result {
        Err(StudymateError::TaskNotCompletable { reason }) => {
            assert!(reason.contains("tomorrow"));
        }
        other => panic!("expected refusal, got {other:?}"),
    }
    assert_eq!(plan.daily_lessons[1].tasks[0].completed_at, None);

    // The next morning it goes through.
    assert!(complete_task(&mut plan, &complete(0, "2024-03-16T08:00:00Z")).is_ok());
}

#[test]
fn test_complete_task_on_completed_plan() {
    let mut plan = plan_with(&[&[Some(YESTERDAY)]]);
    let result = complete_task(&mut plan, &complete(0, NOW));

    match result {
        Err(StudymateError::TaskNotCompletable { reason }) => {
            assert!(reason.contains("already completed"));
        }
        other => panic!("expected refusal, got {other:?}"),
    }
}

//! Read-only aggregate statistics over a task snapshot. Everything here is
//! a pure function; `now` is passed in so the windows are testable.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Priority, Task, TaskAnalysis};

const RECENT_WINDOW_DAYS: i64 = 7;

/// Counts, overdue/recency windows, and the rounded completion rate. An
/// empty collection reports a 0% rate rather than dividing by zero.
pub fn analyze_tasks(tasks: &[Task], now: DateTime<Utc>) -> TaskAnalysis {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let pending_tasks = total_tasks - completed_tasks;

    let high_priority_tasks = tasks
        .iter()
        .filter(|task| task.priority == Priority::High)
        .count();
    let overdue_tasks = tasks.iter().filter(|task| task.is_overdue(now)).count();

    let recent_cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent_tasks = tasks
        .iter()
        .filter(|task| task.created_at > recent_cutoff)
        .count();

    let completion_rate = if total_tasks > 0 {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u32
    } else {
        0
    };

    TaskAnalysis {
        total_tasks,
        completed_tasks,
        pending_tasks,
        high_priority_tasks,
        overdue_tasks,
        recent_tasks,
        completion_rate,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

pub fn priority_breakdown(tasks: &[Task]) -> PriorityBreakdown {
    let mut breakdown = PriorityBreakdown::default();
    for task in tasks {
        match task.priority {
            Priority::High => breakdown.high += 1,
            Priority::Medium => breakdown.medium += 1,
            Priority::Low => breakdown.low += 1,
        }
    }
    breakdown
}

/// Completed-task counts per calendar day (UTC) for the trailing `days`
/// days, oldest first. Feeds the completion trend chart.
pub fn completion_trend(
    tasks: &[Task],
    days: usize,
    now: DateTime<Utc>,
) -> Vec<(NaiveDate, usize)> {
    (0..days)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset as i64)).date_naive();
            let count = tasks
                .iter()
                .filter(|task| {
                    task.completed_at
                        .is_some_and(|done| done.date_naive() == day)
                })
                .count();
            (day, count)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub total: usize,
    pub completed: usize,
}

/// Per-subject totals, alphabetical by label. Tasks without a subject are
/// not grouped.
pub fn subject_breakdown(tasks: &[Task]) -> BTreeMap<String, SubjectStats> {
    let mut breakdown: BTreeMap<String, SubjectStats> = BTreeMap::new();
    for task in tasks {
        let Some(subject) = task.subject.as_deref() else {
            continue;
        };
        if subject.trim().is_empty() {
            continue;
        }

        let stats = breakdown.entry(subject.to_string()).or_default();
        stats.total += 1;
        if task.completed {
            stats.completed += 1;
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(title: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            description: None,
            due_date: None,
            priority,
            subject: None,
            completed,
            created_at: Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn empty_collection_has_zero_rate() {
        let analysis = analyze_tasks(&[], Utc::now());
        assert_eq!(analysis.total_tasks, 0);
        assert_eq!(analysis.completion_rate, 0);
    }

    #[test]
    fn one_in_four_is_25_percent() {
        let tasks = vec![
            task("a", Priority::Medium, true),
            task("b", Priority::Medium, false),
            task("c", Priority::Medium, false),
            task("d", Priority::Medium, false),
        ];

        let analysis = analyze_tasks(&tasks, Utc::now());
        assert_eq!(analysis.total_tasks, 4);
        assert_eq!(analysis.completed_tasks, 1);
        assert_eq!(analysis.pending_tasks, 3);
        assert_eq!(analysis.completion_rate, 25);
    }

    #[test]
    fn overdue_and_recent_windows() {
        let now = Utc.with_ymd_and_hms(2025, 9, 5, 12, 0, 0).unwrap();

        let mut overdue = task("overdue", Priority::High, false);
        overdue.due_date = Some("2025-09-05".into());

        let mut done_late = task("done", Priority::Low, true);
        done_late.due_date = Some("2025-09-05".into());

        let mut old = task("old", Priority::Medium, false);
        old.created_at = now - Duration::days(30);

        let mut unparseable = task("garbled", Priority::Medium, false);
        unparseable.due_date = Some("someday soon".into());

        let tasks = vec![overdue, done_late, old, unparseable];
        let analysis = analyze_tasks(&tasks, now);

        assert_eq!(analysis.overdue_tasks, 1);
        assert_eq!(analysis.high_priority_tasks, 1);
        // Three created on 2025-09-01, inside the 7-day window.
        assert_eq!(analysis.recent_tasks, 3);
    }

    #[test]
    fn trend_buckets_by_completion_day() {
        let now = Utc.with_ymd_and_hms(2025, 9, 10, 20, 0, 0).unwrap();

        let mut yesterday = task("a", Priority::Medium, true);
        yesterday.completed_at = Some(now - Duration::days(1));
        let mut today = task("b", Priority::Medium, true);
        today.completed_at = Some(now - Duration::hours(1));
        let open = task("c", Priority::Medium, false);

        let trend = completion_trend(&[yesterday, today, open], 3, now);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].1, 0);
        assert_eq!(trend[1].1, 1);
        assert_eq!(trend[2].1, 1);
        assert!(trend[0].0 < trend[2].0);
    }

    #[test]
    fn subjects_group_alphabetically() {
        let mut math = task("a", Priority::Medium, true);
        math.subject = Some("Toán".into());
        let mut math2 = task("b", Priority::Medium, false);
        math2.subject = Some("Toán".into());
        let mut lit = task("c", Priority::Medium, false);
        lit.subject = Some("Văn".into());
        let unlabeled = task("d", Priority::Medium, false);

        let breakdown = subject_breakdown(&[math, math2, lit, unlabeled]);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(
            breakdown["Toán"],
            SubjectStats {
                total: 2,
                completed: 1
            }
        );
        assert_eq!(
            breakdown["Văn"],
            SubjectStats {
                total: 1,
                completed: 0
            }
        );
    }
}

//! Rule-based schedule suggestions derived from the pending/completed task
//! mix. Emission order is fixed: high-priority push, then medium-priority
//! plan, then a rest break after a productive day.

use chrono::{DateTime, Duration, Utc};

use crate::models::{AiSuggestion, Priority, SuggestionPriority, Task};

const HIGH_MINUTES_PER_TASK: u32 = 45;
const MEDIUM_MINUTES_PER_TASK: u32 = 30;
const REST_MINUTES: u32 = 30;
const REST_AFTER_COMPLETED_TODAY: usize = 3;

/// Up to three ordered suggestions for the current snapshot. Absent
/// conditions simply omit their entry.
pub fn suggest_schedule(tasks: &[Task], now: DateTime<Utc>) -> Vec<AiSuggestion> {
    let mut suggestions = Vec::new();

    let high_pending = tasks
        .iter()
        .filter(|task| !task.completed && task.priority == Priority::High)
        .count();
    if high_pending > 0 {
        suggestions.push(AiSuggestion {
            title: "Ưu tiên hoàn thành tasks quan trọng".into(),
            description: Some(format!(
                "Bạn có {high_pending} task quan trọng cần hoàn thành"
            )),
            estimated_minutes: Some(high_pending as u32 * HIGH_MINUTES_PER_TASK),
            priority: Some(SuggestionPriority::High),
            suggested_slot: Some((now + Duration::hours(2)).to_rfc3339()),
        });
    }

    let medium_pending = tasks
        .iter()
        .filter(|task| !task.completed && task.priority == Priority::Medium)
        .count();
    if medium_pending > 0 {
        suggestions.push(AiSuggestion {
            title: "Lên kế hoạch cho tasks trung bình".into(),
            description: Some(format!("Bạn có {medium_pending} task cần quan tâm")),
            estimated_minutes: Some(medium_pending as u32 * MEDIUM_MINUTES_PER_TASK),
            priority: Some(SuggestionPriority::Medium),
            suggested_slot: Some((now + Duration::hours(24)).to_rfc3339()),
        });
    }

    let completed_today = tasks
        .iter()
        .filter(|task| {
            task.completed
                && task
                    .completed_at
                    .is_some_and(|done| done.date_naive() == now.date_naive())
        })
        .count();
    if completed_today >= REST_AFTER_COMPLETED_TODAY {
        suggestions.push(AiSuggestion {
            title: "Nghỉ ngơi và thư giãn".into(),
            description: Some(
                "Bạn đã hoàn thành nhiều task hôm nay! Hãy dành thời gian nghỉ ngơi".into(),
            ),
            estimated_minutes: Some(REST_MINUTES),
            priority: Some(SuggestionPriority::Low),
            suggested_slot: Some((now + Duration::hours(1)).to_rfc3339()),
        });
    }

    suggestions
}

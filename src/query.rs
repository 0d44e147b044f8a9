//! Pure helpers for presentation surfaces: filtering, sorting, and
//! calendar-day lookups over a store snapshot. Nothing here touches the
//! store itself.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueDate,
    Priority,
    Title,
}

fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

/// Sorted copy of the snapshot. Due-date order puts dated tasks first,
/// earliest up; tasks without a parseable date keep their relative order at
/// the end. Sorts are stable.
pub fn sort_tasks(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match key {
        SortKey::DueDate => sorted.sort_by_key(|task| match task.due_at() {
            Some(due) => (0u8, due),
            None => (1u8, DateTime::<Utc>::MAX_UTC),
        }),
        SortKey::Priority => sorted.sort_by_key(|task| priority_rank(task.priority)),
        SortKey::Title => sorted.sort_by_key(|task| task.title.to_lowercase()),
    }
    sorted
}

/// Tasks whose due date falls on the given calendar day (UTC). Unparseable
/// dates never match.
pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_at().is_some_and(|due| due.date_naive() == day))
        .cloned()
        .collect()
}

//! Transient assistant types: the response envelope, task suggestions, and
//! the aggregate statistics block. None of these are persisted; suggestions
//! are promoted into [`Task`](super::Task)s only by an explicit caller action.

use serde::{Deserialize, Serialize};

use super::Priority;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AiAction {
    CreateTask,
    AnalyzeTasks,
    Summarize,
    SuggestSchedule,
    Unknown,
}

/// Suggestion priorities use a lowercase scale on the wire, distinct from
/// the capitalized scale stored on tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    Low,
    Medium,
    High,
}

impl SuggestionPriority {
    pub fn to_task_priority(self) -> Priority {
        match self {
            SuggestionPriority::Low => Priority::Low,
            SuggestionPriority::Medium => Priority::Medium,
            SuggestionPriority::High => Priority::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub priority: Option<SuggestionPriority>,
    /// ISO-8601 timestamp, or `None` for "no specific time". Kept as a string
    /// so promoting a suggestion copies it into `Task::due_date` verbatim.
    #[serde(default)]
    pub suggested_slot: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAnalysis {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub high_priority_tasks: usize,
    pub overdue_tasks: usize,
    pub recent_tasks: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub action: AiAction,
    pub message: String,
    #[serde(default)]
    pub suggestions: Option<Vec<AiSuggestion>>,
    #[serde(default)]
    pub analysis: Option<TaskAnalysis>,
}

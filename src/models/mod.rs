mod assistant;
mod task;

pub use assistant::{AiAction, AiResponse, AiSuggestion, SuggestionPriority, TaskAnalysis};
pub use task::{parse_flexible_date, Priority, Task, TaskPatch};

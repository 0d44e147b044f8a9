pub mod assistant;
pub mod models;
pub mod query;
pub mod settings;
pub mod store;

pub use assistant::{Assistant, BridgeConfig};
pub use models::{AiAction, AiResponse, AiSuggestion, Priority, Task, TaskPatch};
pub use store::{TaskStore, TasksChanged};

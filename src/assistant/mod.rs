pub mod analysis;
pub mod bridge;
pub mod intent;
pub mod orchestrator;
pub mod schedule;

pub use analysis::{analyze_tasks, completion_trend, priority_breakdown, subject_breakdown};
pub use bridge::{BridgeClient, BridgeConfig};
pub use intent::classify_intent;
pub use orchestrator::{Assistant, DEFAULT_MOOD};
pub use schedule::suggest_schedule;

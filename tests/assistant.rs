//! Assistant behavior when the suggestion bridge is unreachable: every
//! prompt must still resolve to a deterministic local answer.

use chrono::Utc;
use studyflow::assistant::{analyze_tasks, Assistant, BridgeConfig, DEFAULT_MOOD};
use studyflow::models::{AiAction, Priority, SuggestionPriority, Task};

/// Nothing listens on the discard port, so every bridge call fails fast
/// with a connection error.
fn offline_assistant() -> Assistant {
    Assistant::new(BridgeConfig {
        base_url: "http://127.0.0.1:9".into(),
    })
}

fn task(title: &str, priority: Priority, completed: bool) -> Task {
    Task {
        id: title.to_string(),
        title: title.to_string(),
        description: None,
        due_date: None,
        priority,
        subject: None,
        completed,
        created_at: Utc::now(),
        completed_at: completed.then(Utc::now),
    }
}

#[tokio::test]
async fn analyze_prompt_falls_back_to_local_analysis() {
    let tasks = vec![
        task("a", Priority::High, true),
        task("b", Priority::Medium, false),
        task("c", Priority::Medium, false),
        task("d", Priority::Low, false),
    ];

    let response = offline_assistant()
        .respond("Phân tích tasks hiện tại", &tasks, DEFAULT_MOOD)
        .await;

    assert_eq!(response.action, AiAction::AnalyzeTasks);
    let analysis = response.analysis.expect("local analysis attached");
    assert_eq!(analysis, analyze_tasks(&tasks, Utc::now()));
    assert_eq!(analysis.completion_rate, 25);
    assert!(response.message.contains("Tỷ lệ hoàn thành: 25%"));
}

#[tokio::test]
async fn schedule_prompt_uses_local_suggester() {
    let tasks = vec![
        task("a", Priority::High, false),
        task("b", Priority::High, false),
    ];

    let response = offline_assistant()
        .respond("Gợi ý lịch trình cho tôi", &tasks, DEFAULT_MOOD)
        .await;

    assert_eq!(response.action, AiAction::SuggestSchedule);
    let suggestions = response.suggestions.expect("schedule suggestions");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].estimated_minutes, Some(90));
    assert_eq!(suggestions[0].priority, Some(SuggestionPriority::High));
}

#[tokio::test]
async fn schedule_prompt_with_nothing_pending_says_so() {
    let response = offline_assistant()
        .respond("Sắp xếp thời gian giúp mình", &[], DEFAULT_MOOD)
        .await;

    assert_eq!(response.action, AiAction::SuggestSchedule);
    assert_eq!(response.suggestions, Some(Vec::new()));
    assert!(response.message.contains("🎉"));
}

#[tokio::test]
async fn create_prompt_synthesizes_a_local_suggestion() {
    let response = offline_assistant()
        .respond("Tạo task học toán", &[], DEFAULT_MOOD)
        .await;

    assert_eq!(response.action, AiAction::CreateTask);
    let suggestions = response.suggestions.expect("synthesized suggestion");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].title, "Tạo task học toán");
    assert_eq!(suggestions[0].priority, Some(SuggestionPriority::Medium));
    assert_eq!(suggestions[0].suggested_slot, None);
}

#[tokio::test]
async fn unmatched_prompt_gets_the_help_answer() {
    let response = offline_assistant().respond("xyz", &[], DEFAULT_MOOD).await;

    assert_eq!(response.action, AiAction::Unknown);
    assert_eq!(response.suggestions, Some(Vec::new()));
    assert!(response.message.contains("Tạo task học toán"));
}

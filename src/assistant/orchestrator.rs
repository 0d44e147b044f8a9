use anyhow::Result;
use chrono::Utc;
use log::{error, warn};

use crate::models::{AiAction, AiResponse, AiSuggestion, SuggestionPriority, Task};

use super::{
    analysis::analyze_tasks,
    bridge::{BridgeClient, BridgeConfig},
    intent::classify_intent,
    schedule::suggest_schedule,
};

pub const DEFAULT_MOOD: &str = "neutral";

const FALLBACK_MINUTES: u32 = 30;

/// Resolves a prompt into a final assistant response, combining the remote
/// bridge with deterministic local logic. `respond` cannot fail: every
/// failure path degrades to a locally produced answer.
pub struct Assistant {
    bridge: BridgeClient,
}

impl Assistant {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            bridge: BridgeClient::new(config),
        }
    }

    pub async fn respond(&self, prompt: &str, tasks: &[Task], mood: &str) -> AiResponse {
        match self.try_respond(prompt, tasks, mood).await {
            Ok(response) => response,
            Err(err) => {
                error!("Assistant failed unexpectedly: {err:#}");
                AiResponse {
                    action: AiAction::Unknown,
                    message: "⚠️ Rất tiếc, tôi đang gặp sự cố kỹ thuật. Vui lòng thử lại trong giây lát!".into(),
                    suggestions: Some(Vec::new()),
                    analysis: None,
                }
            }
        }
    }

    async fn try_respond(&self, prompt: &str, tasks: &[Task], mood: &str) -> Result<AiResponse> {
        // The local intent only drives the fallback; the remote attempt is
        // made regardless of what the classifier says.
        let intent = classify_intent(prompt);

        match self.bridge.analyze(prompt, mood, tasks).await {
            Ok(response) => return Ok(response),
            Err(err) => {
                warn!("Bridge unavailable, answering locally: {err:#}");
            }
        }

        Ok(self.local_response(intent, prompt, tasks, mood).await)
    }

    async fn local_response(
        &self,
        intent: AiAction,
        prompt: &str,
        tasks: &[Task],
        mood: &str,
    ) -> AiResponse {
        match intent {
            AiAction::AnalyzeTasks => {
                let analysis = analyze_tasks(tasks, Utc::now());
                AiResponse {
                    action: AiAction::AnalyzeTasks,
                    message: format!(
                        "📊 Phân tích tasks của bạn:\n\n\
                         • Tổng số task: {}\n\
                         • Đã hoàn thành: {}\n\
                         • Chưa hoàn thành: {}\n\
                         • Task quan trọng: {}\n\
                         • Task trễ hạn: {}\n\
                         • Tỷ lệ hoàn thành: {}%",
                        analysis.total_tasks,
                        analysis.completed_tasks,
                        analysis.pending_tasks,
                        analysis.high_priority_tasks,
                        analysis.overdue_tasks,
                        analysis.completion_rate,
                    ),
                    suggestions: None,
                    analysis: Some(analysis),
                }
            }
            AiAction::SuggestSchedule => {
                let suggestions = suggest_schedule(tasks, Utc::now());
                let message = if suggestions.is_empty() {
                    "🎉 Bạn không có task nào cần sắp xếp! Mọi thứ đã được tổ chức tốt."
                } else {
                    "📅 Dựa trên tasks hiện tại, tôi đề xuất lịch trình sau:"
                };
                AiResponse {
                    action: AiAction::SuggestSchedule,
                    message: message.into(),
                    suggestions: Some(suggestions),
                    analysis: None,
                }
            }
            AiAction::CreateTask => {
                let suggestions = self.suggest_tasks(prompt, mood).await;
                AiResponse {
                    action: AiAction::CreateTask,
                    message: format!("✅ Đã tạo {} task đề xuất cho bạn!", suggestions.len()),
                    suggestions: Some(suggestions),
                    analysis: None,
                }
            }
            AiAction::Summarize | AiAction::Unknown => AiResponse {
                action: AiAction::Unknown,
                message: "🤔 Tôi không chắc bạn muốn gì. Bạn có thể:\n\
                          • 'Tạo task học toán' - để thêm task mới\n\
                          • 'Phân tích tasks' - để xem thống kê\n\
                          • 'Gợi ý lịch trình' - để sắp xếp thời gian"
                    .into(),
                suggestions: Some(Vec::new()),
                analysis: None,
            },
        }
    }

    /// Standalone suggestion generation: one remote attempt, then a single
    /// synthesized suggestion. This path never re-enters the response
    /// pipeline, so a dead bridge terminates here.
    pub async fn suggest_tasks(&self, prompt: &str, mood: &str) -> Vec<AiSuggestion> {
        match self.bridge.generate(prompt, mood).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!("Suggestion generation failed, synthesizing locally: {err:#}");
                vec![fallback_suggestion(prompt)]
            }
        }
    }
}

/// Minimal local stand-in when the bridge cannot produce suggestions: the
/// prompt itself becomes the proposed task.
fn fallback_suggestion(prompt: &str) -> AiSuggestion {
    let trimmed = prompt.trim();
    let title = if trimmed.is_empty() { "Task mới" } else { trimmed };
    AiSuggestion {
        title: title.to_string(),
        description: None,
        estimated_minutes: Some(FALLBACK_MINUTES),
        priority: Some(SuggestionPriority::Medium),
        suggested_slot: None,
    }
}

//! Thin client for the remote suggestion relay. The relay wraps a
//! generative text service; this side treats it as a black box that either
//! returns a usable JSON body or fails. Untrusted bodies are normalized into
//! the strict response types at this boundary and nowhere else.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{AiAction, AiResponse, AiSuggestion, Task};

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the relay, without a trailing slash.
    pub base_url: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    mood: &'a str,
    task_count: usize,
    has_pending_tasks: bool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    mood: &'a str,
}

#[derive(Deserialize)]
struct SuggestionsBody {
    suggestions: Vec<AiSuggestion>,
}

pub struct BridgeClient {
    http: reqwest::Client,
    config: BridgeConfig,
}

impl BridgeClient {
    /// No request timeout is configured: a hanging relay call stalls only
    /// its own interaction, and the caller is free to abandon it.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Full assistant round-trip. Accepts either a complete response
    /// envelope or a bare suggestion list from the relay.
    pub async fn analyze(&self, prompt: &str, mood: &str, tasks: &[Task]) -> Result<AiResponse> {
        let request = AnalyzeRequest {
            prompt,
            mood,
            task_count: tasks.len(),
            has_pending_tasks: tasks.iter().any(|task| !task.completed),
        };

        let response = self
            .http
            .post(format!("{}/api/ai/analyze", self.config.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("bridge returned status {status}");
        }

        let body: Value = response.json().await?;
        normalize_response(body).ok_or_else(|| anyhow!("bridge response had no usable shape"))
    }

    /// Standalone suggestion generation. An empty or unusable suggestion
    /// list counts as a failure so the caller can synthesize locally.
    pub async fn generate(&self, prompt: &str, mood: &str) -> Result<Vec<AiSuggestion>> {
        let response = self
            .http
            .post(format!("{}/api/generateTask", self.config.base_url))
            .json(&GenerateRequest { prompt, mood })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("bridge returned status {status}");
        }

        let body: SuggestionsBody = response.json().await?;
        let suggestions = sanitize_suggestions(body.suggestions);
        if suggestions.is_empty() {
            bail!("bridge returned no usable suggestions");
        }
        Ok(suggestions)
    }
}

fn normalize_response(body: Value) -> Option<AiResponse> {
    if let Ok(mut response) = serde_json::from_value::<AiResponse>(body.clone()) {
        if let Some(suggestions) = response.suggestions.take() {
            response.suggestions = Some(sanitize_suggestions(suggestions));
        }
        return Some(response);
    }

    // Bare `{suggestions: [...]}` bodies become a create-task response.
    let body: SuggestionsBody = serde_json::from_value(body).ok()?;
    let suggestions = sanitize_suggestions(body.suggestions);
    if suggestions.is_empty() {
        return None;
    }

    Some(AiResponse {
        action: AiAction::CreateTask,
        message: format!("✅ Đã tạo {} task đề xuất cho bạn!", suggestions.len()),
        suggestions: Some(suggestions),
        analysis: None,
    })
}

/// Drop suggestions a consumer could not render: blank titles or
/// non-positive time estimates.
fn sanitize_suggestions(suggestions: Vec<AiSuggestion>) -> Vec<AiSuggestion> {
    suggestions
        .into_iter()
        .filter(|suggestion| !suggestion.title.trim().is_empty())
        .filter(|suggestion| suggestion.estimated_minutes.map_or(true, |minutes| minutes > 0))
        .collect()
}

//! AI task suggestions: turn a free-text goal into task drafts.
//!
//! The model is asked for a JSON object constrained by [`response_schema`],
//! and only that object is accepted. Any failure along the way ends the
//! request with a single [`SuggestionError`]; partial results are never
//! returned.

pub mod gemini;

use std::future::Future;

use serde_json::Value;

use crate::core::task::TaskDraft;
use crate::error::SuggestionError;

pub use gemini::GeminiClient;

/// A remote generative model that answers a prompt with schema-constrained
/// JSON text.
pub trait ModelBackend {
    /// Whether a credential is available. Checked before any request.
    fn is_configured(&self) -> bool;

    fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> impl Future<Output = Result<String, SuggestionError>> + Send;
}

pub fn build_prompt(goal: &str) -> String {
    format!(
        "You are a productivity assistant. Break down the following high-level goal \
         into a simple, actionable list of tasks. Keep each task concise. \
         Goal: \"{}\". Provide at least 3 tasks.",
        goal.trim()
    )
}

/// The only response shape accepted from the model: `{"tasks": [string, ...]}`.
pub fn response_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "tasks": {
                "type": "ARRAY",
                "description": "A list of task strings.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["tasks"]
    })
}

/// Parse the model's JSON text into drafts.
pub fn parse_suggestions(text: &str) -> Result<Vec<TaskDraft>, SuggestionError> {
    let value: Value = serde_json::from_str(text.trim())?;
    let items = value
        .get("tasks")
        .and_then(Value::as_array)
        .ok_or(SuggestionError::MissingTasks)?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(TaskDraft::new)
                .ok_or(SuggestionError::MissingTasks)
        })
        .collect()
}

/// Ask `backend` to decompose `goal` into tasks. Single attempt, no retry.
pub async fn suggest<B: ModelBackend>(
    backend: &B,
    goal: &str,
) -> Result<Vec<TaskDraft>, SuggestionError> {
    if !backend.is_configured() {
        return Err(SuggestionError::Configuration);
    }

    let prompt = build_prompt(goal);
    log::debug!("Requesting suggestions for goal {:?}", goal);
    let text = backend.generate(&prompt, &response_schema()).await?;

    let drafts = parse_suggestions(&text).inspect_err(|e| {
        log::error!("Unusable suggestion response: {}", e);
    })?;
    log::info!("Received {} suggested tasks", drafts.len());
    Ok(drafts)
}

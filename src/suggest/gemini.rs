use once_cell::sync::Lazy;
use serde_json::Value;

use super::ModelBackend;
use crate::config::TaskpadConfig;
use crate::error::SuggestionError;

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Gemini `generateContent` over HTTPS with a JSON response schema.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    pub fn from_config(config: &TaskpadConfig) -> Self {
        let client = Self::new(config.api_key(), config.model.clone(), config.api_base.clone());
        if !client.is_configured() {
            log::warn!("Suggestion API key not found. AI features will be disabled.");
        }
        client
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

pub fn build_request_body(prompt: &str, schema: &Value) -> Value {
    serde_json::json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Concatenated text of the first candidate's parts.
pub fn extract_text(api_resp: &Value) -> Result<String, SuggestionError> {
    let parts = api_resp["candidates"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .ok_or_else(|| SuggestionError::MalformedResponse(api_resp.to_string()))?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.trim().is_empty() {
        return Err(SuggestionError::MalformedResponse(api_resp.to_string()));
    }
    Ok(text)
}

impl ModelBackend for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, SuggestionError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestionError::Configuration)?;
        let body = build_request_body(prompt, schema);

        let resp = HTTP
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            log::error!("Suggestion API error {}: {}", status, body);
            return Err(SuggestionError::Api { status, body });
        }

        let api_resp: Value = resp.json().await?;
        extract_text(&api_resp)
    }
}

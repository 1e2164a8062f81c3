use crate::config::KeyFromEnv;
use crate::engine::CompletionClient;
use crate::error::{AIError, ConfigError, GeminiError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

pub struct GeminiModels;

impl GeminiModels {
    // Gemini 2.5 Models
    pub const FLASH_LITE_2_5: &'static str = "gemini-2.5-flash-lite";
    pub const FLASH_2_5: &'static str = "gemini-2.5-flash";
    pub const PRO_2_5: &'static str = "gemini-2.5-pro";

    // Gemini 2.0 Models
    pub const FLASH_2_0: &'static str = "gemini-2.0-flash";
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: GeminiModels::FLASH_LITE_2_5.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl KeyFromEnv for GeminiClient {
    const KEY_NAME: &'static str = "GEMINI_API_KEY";
}

impl GeminiClient {
    /// Create a new Gemini client with full configuration
    pub fn new(config: GeminiConfig) -> Self {
        info!(model = %config.model, "Creating new Gemini client");
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a client for `model` with the key resolved from the
    /// environment. A missing key is a startup error, not a panic.
    pub fn from_env(model: &str) -> Result<Self, ConfigError> {
        let api_key = Self::require_key()?;
        Ok(Self::new(GeminiConfig {
            api_key,
            model: model.to_string(),
        }))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), model = %self.config.model))]
    async fn generate(&self, prompt: String) -> Result<String, AIError> {
        debug!(model = %self.config.model, prompt_len = prompt.len(), "Preparing Gemini API request");

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.config.model
        );

        debug!("Sending request to Gemini API");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                AIError::Gemini(GeminiError::Http(e.to_string()))
            })?;

        debug!(status = %response.status(), "Received response from Gemini API");

        if response.status() == 429 {
            warn!("Gemini API rate limit exceeded");
            return Err(AIError::Gemini(GeminiError::RateLimit));
        }

        if response.status() == 401 || response.status() == 403 {
            error!("Gemini API authentication failed");
            return Err(AIError::Gemini(GeminiError::Authentication));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(AIError::Gemini(GeminiError::Api(error_text)));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response JSON");
            AIError::Gemini(GeminiError::Http(e.to_string()))
        })?;

        debug!(candidate_count = gemini_response.candidates.len(), "Parsed Gemini response");

        let result = gemini_response
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .ok_or_else(|| {
                error!("No candidates in Gemini response");
                AIError::Gemini(GeminiError::Api("No candidates in response".to_string()))
            });

        match &result {
            Ok(text) => info!(response_len = text.len(), "Successfully received Gemini response"),
            Err(e) => error!(error = %e, "Failed to extract content from Gemini response"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_generate_content_shape() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: "What is entropy?".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is entropy?");
    }

    #[test]
    fn response_text_spans_all_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "A measure "}, {"text": "of disorder."}], "role": "model"}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        assert_eq!(text, "A measure of disorder.");
    }

    #[test]
    fn response_without_candidates_parses_as_empty() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}

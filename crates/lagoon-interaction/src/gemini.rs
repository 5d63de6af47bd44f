//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! This agent calls the Gemini REST API directly. The API key is passed
//! as a URL query parameter and is supplied by configuration, never a
//! source literal.

use crate::agent::{GenerationOutcome, GenerativeAgent};
use async_trait::async_trait;
use lagoon_core::LagoonError;
use lagoon_core::config::GenerationParams;
use lagoon_core::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Agent implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<GenerationOutcome> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| LagoonError::transport(format!("Gemini API request failed: {err}")))?;

        // Error bodies arrive with non-2xx statuses but still carry the
        // structured { error: { message } } shape, so both paths decode
        // into the same DTO and go through the same classification.
        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            LagoonError::transport(format!("Failed to parse Gemini response: {err}"))
        })?;

        Ok(classify_response(parsed))
    }
}

#[async_trait]
impl GenerativeAgent for GeminiApiAgent {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<GenerationOutcome> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::from(params),
        };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Option<Vec<PartResponse>>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classifies a decoded response in the orchestrator's priority order:
/// structured error, then generated text, then safety block, then
/// invalid with a best-effort termination reason.
fn classify_response(response: GenerateContentResponse) -> GenerationOutcome {
    if let Some(error) = response.error {
        return GenerationOutcome::ServiceError(
            error.message.unwrap_or_else(|| "unspecified error".to_string()),
        );
    }

    let first_candidate = response
        .candidates
        .and_then(|mut candidates| candidates.drain(..).next());

    let Some(candidate) = first_candidate else {
        return GenerationOutcome::Invalid { finish_reason: None };
    };

    let text = candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.first())
        .and_then(|part| part.text.clone());

    if let Some(text) = text {
        return GenerationOutcome::Text(text);
    }

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return GenerationOutcome::SafetyBlocked;
    }

    GenerationOutcome::Invalid {
        finish_reason: candidate.finish_reason,
    }
}

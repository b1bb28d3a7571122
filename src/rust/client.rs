use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;

/// Finish reasons for which a candidate's text is not usable.
const BAD_FINISH_REASONS: [&str; 3] = ["RECITATION", "SAFETY", "LANGUAGE"];

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Response blocked: {0}")]
    Blocked(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A remote model that turns a prompt into free text.
///
/// The detector only depends on this trait, so tests can swap in a scripted
/// model instead of talking to the network.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Identifier of the underlying model, e.g. `gemini-2.0-flash`.
    fn model_name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Each call is a single request: no retries and no backoff.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GeminiClient {
    pub fn new(config: &DetectorConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("bullyguard/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }

    /// Joins the text parts of the first candidate, the way the Gemini SDKs
    /// expose `response.text()`.
    ///
    /// A reply without candidates or without text is returned as an empty
    /// string so the caller's parse fallback handles it. Only a blocked
    /// prompt or a candidate stopped for a bad finish reason is an error.
    fn response_text(response: GenerateResponse) -> Result<String, ClientError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ClientError::Blocked(reason));
            }
            return Ok(String::new());
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BAD_FINISH_REASONS.contains(&reason) {
                return Err(ClientError::Blocked(reason.to_string()));
            }
        }

        Ok(candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect())
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        let url = self.endpoint();
        log::debug!("Sending {} byte prompt to {}", prompt.len(), url);

        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Gemini response status: {}", status);

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body_text)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or(body_text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Self::response_text(parsed)
    }
}

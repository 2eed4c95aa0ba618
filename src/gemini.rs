use log::debug;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("{API_KEY_ENV} environment variable not set")]
    MissingApiKey,
    #[error("Gemini request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected Gemini API response format")]
    MalformedResponse,
}

/// Client for the Gemini generateContent endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the API key from the environment; absence is a startup error
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| GeminiError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Generate text from a prompt with the given model
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);
        debug!("Requesting completion from {model}");

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        extract_text(&parsed)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn extract_text(resp: &GenerateContentResponse) -> Result<String, GeminiError> {
    let text: String = resp
        .candidates
        .iter()
        .flatten()
        .take(1)
        .filter_map(|c| c.content.as_ref())
        .filter_map(|c| c.parts.as_ref())
        .flatten()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(GeminiError::MalformedResponse);
    }
    Ok(text)
}

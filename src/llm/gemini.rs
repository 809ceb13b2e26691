use async_trait::async_trait;
use serde_json::{json, Value};

use super::{GenerationError, TextGenerator};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for Google's Gemini `generateContent` API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn url(&self) -> String {
        format!(
            "{GEMINI_ENDPOINT}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 2048
            }
        });

        let response = self.http.post(self.url()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Surface the upstream error message when the body is parseable.
            let detail: Value = response.json().await.unwrap_or(Value::Null);
            let message = detail
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response.json().await?;
        data.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(GenerationError::EmptyResponse)
    }
}

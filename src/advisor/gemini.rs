// src/advisor/gemini.rs
use crate::advisor::{GenerativeBackend, GenerateRequest};
use crate::error::{ConsoleError, ConsoleResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// REST backend for the generative-language API. One shared client, key in
/// the query string, no retry.
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: &str) -> ConsoleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                ConsoleError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, model: &str, request: GenerateRequest) -> ConsoleResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::AdvisoryStatus(status));
        }

        let body: GenerateResponse = response.json().await?;
        body.first_text().ok_or(ConsoleError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.clone())
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_walks_the_candidate_tree() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "use a higher fee" } ] } }
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("use a higher fee"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());

        let body = r#"{ "candidates": [ { "content": { "parts": [ { "text": "" } ] } } ] }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(response.first_text().is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_a_transport_error() {
        let backend = GeminiBackend::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        let err = backend
            .generate("gemini-3-flash-preview", GenerateRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::AdvisoryTransport(_)));
        assert!(err.is_retryable());
    }
}

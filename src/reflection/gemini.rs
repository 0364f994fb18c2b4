//! Gemini `generateContent` client

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{ReflectionError, ReflectionProvider, Result};
use crate::config::ReflectionConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub struct GeminiReflection {
    client: Client,
    config: ReflectionConfig,
}

impl GeminiReflection {
    pub fn new(config: ReflectionConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl ReflectionProvider for GeminiReflection {
    fn reflect(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ReflectionError::MissingApiKey(self.config.api_key_env.clone()))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReflectionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json()?;
        parsed.text().ok_or(ReflectionError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_text() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "ذكر "}, {"text": "وطمأنينة"}], "role": "model"},
                "finishReason": "STOP"
            }]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("ذكر وطمأنينة"));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(empty.text(), None);

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), None);
    }

    #[test]
    fn test_endpoint() {
        let provider = GeminiReflection::new(ReflectionConfig::default()).unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let provider = GeminiReflection::new(ReflectionConfig {
            api_key_env: "RATIB_TEST_MISSING_KEY".to_string(),
            ..Default::default()
        })
        .unwrap();
        std::env::remove_var("RATIB_TEST_MISSING_KEY");

        assert!(matches!(
            provider.reflect("prompt"),
            Err(ReflectionError::MissingApiKey(name)) if name == "RATIB_TEST_MISSING_KEY"
        ));
    }
}

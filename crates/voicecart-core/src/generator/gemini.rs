//! Gemini Content Generator
//!
//! Integration with the Google Generative Language API (`generateContent`).
//! Every request pins `responseMimeType` to JSON and carries a response
//! schema, so the model's reply is parsed rather than treated as prose.

use crate::error::GenerationError;
use crate::generator::{ContentGenerator, SchemaDescriptor};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// One part of a content turn (text only; no media parts are used)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// A content turn in a generateContent request or response
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// Generation settings forcing structured JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// generateContent API request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

/// A single candidate in the API response
#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// generateContent API response
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Gemini provider for structured content generation
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    /// HTTP client for API requests
    client: reqwest::Client,
    /// API key for authentication
    api_key: String,
    /// Base URL for the Generative Language API
    base_url: String,
    /// Model to use
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a new Gemini provider from the GEMINI_API_KEY environment variable
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            GenerationError::Request("GEMINI_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::with_api_key(api_key))
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL (for proxies and test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request(&self, prompt: &str, schema: &SchemaDescriptor) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.to_value(),
            },
        }
    }

    /// Pull the first candidate's text out of a response
    fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl ContentGenerator for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Value, GenerationError> {
        let request = self.build_request(prompt, schema);

        let response = self
            .client
            .post(self.endpoint())
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let text = Self::extract_text(api_response)?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = GeminiProvider::with_api_key("test-key");
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_provider_with_model() {
        let provider = GeminiProvider::with_api_key("test-key").with_model("gemini-2.0-pro");
        assert_eq!(provider.model, "gemini-2.0-pro");
    }

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let provider = GeminiProvider::with_api_key("secret").with_model("gemini-2.5-flash");
        let endpoint = provider.endpoint();
        assert!(endpoint.contains("/models/gemini-2.5-flash:generateContent"));
        assert!(endpoint.ends_with("key=secret"));
    }

    #[test]
    fn test_build_request_pins_json_output() {
        let provider = GeminiProvider::with_api_key("test-key");
        let request = provider.build_request("classify this", &SchemaDescriptor::String);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].parts[0].text, "classify this");
        assert_eq!(
            request.generation_config.response_mime_type,
            "application/json"
        );
        assert_eq!(
            request.generation_config.response_schema,
            serde_json::json!({"type": "STRING"})
        );
    }

    #[test]
    fn test_extract_text_first_candidate() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: "{\"command\":\"clear\"}".to_string(),
                    }],
                }),
            }],
        };
        let text = GeminiProvider::extract_text(response).unwrap();
        assert_eq!(text, "{\"command\":\"clear\"}");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        let err = GeminiProvider::extract_text(response).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn test_extract_text_empty_part() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: String::new(),
                    }],
                }),
            }],
        };
        let err = GeminiProvider::extract_text(response).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }
}

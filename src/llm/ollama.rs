use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Settings;
use crate::llm::client::InferenceProvider;
use crate::llm::ResponseFormat;
use crate::{QuizgenError, Result};

const GENERATE_PATH: &str = "/api/generate";

/// Client for the Ollama `/api/generate` endpoint.
///
/// Returns the raw response body; decoding the envelope is the
/// normalizer's job so that malformed model output can degrade instead
/// of erroring here.
pub struct OllamaClient {
    http: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    format: ResponseFormat,
    stream: bool,
}

impl OllamaClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let endpoint = settings.ollama.endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(QuizgenError::Config(
                "Ollama endpoint is missing. Set ollama.endpoint in config or QUIZGEN_OLLAMA_ENDPOINT.".to_string(),
            ));
        }

        let model = settings.ollama.model.trim().to_string();
        if model.is_empty() {
            return Err(QuizgenError::Config(
                "Ollama model name is missing. Set ollama.model in config.".to_string(),
            ));
        }

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .map_err(|e| QuizgenError::Config(format!("Failed to build Ollama HTTP client: {}", e)))?,
            endpoint,
            model,
            temperature: settings.ollama.temperature,
            format: settings.ollama.format,
            stream: settings.ollama.stream,
        })
    }

    fn request_url(&self) -> String {
        format!("{}{}", self.endpoint, GENERATE_PATH)
    }
}

#[async_trait]
impl InferenceProvider for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            // "json" hint only; free-text deployments omit the field.
            format: match self.format {
                ResponseFormat::Json => Some("json"),
                ResponseFormat::Text => None,
            },
            stream: self.stream,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| QuizgenError::InferenceUnavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuizgenError::InferenceUnavailable(format!(
                "unexpected status {} from {}",
                status,
                self.request_url()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| QuizgenError::InferenceUnavailable(format!("failed to read body: {}", e)))?;

        if text.trim().is_empty() {
            return Err(QuizgenError::InferenceUnavailable(
                "empty response body".to_string(),
            ));
        }

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_endpoint() {
        let mut settings = Settings::default();
        settings.ollama.endpoint = "http://localhost:11434/".to_string();

        let client = OllamaClient::from_settings(&settings).expect("client should build");
        assert_eq!(client.request_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn blank_model_name_is_rejected() {
        let mut settings = Settings::default();
        settings.ollama.model = "  ".to_string();

        assert!(OllamaClient::from_settings(&settings).is_err());
    }

    #[test]
    fn json_format_hint_is_serialized() {
        let request = GenerateRequest {
            model: "mistral",
            prompt: "hello",
            format: Some("json"),
            stream: false,
            options: GenerateOptions { temperature: 0.5 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["format"], "json");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.5);
    }

    #[test]
    fn text_format_omits_the_hint() {
        let request = GenerateRequest {
            model: "mistral",
            prompt: "hello",
            format: None,
            stream: false,
            options: GenerateOptions { temperature: 0.2 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("format").is_none());
    }
}

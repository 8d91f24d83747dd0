use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::API_KEY_PREVIEW_CHARS;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::ai::chat_response::ChatResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Client for any OpenAI-style `/chat/completions` endpoint (Groq, OpenAI).
#[derive(Clone)]
pub struct OpenAiCompatibleProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatibleProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        let base_url = config.resolved_base_url().ok_or_else(|| {
            AiProviderError::ApiError(format!("No endpoint known for provider '{}'", config.provider))
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn key_preview(&self) -> String {
        let preview: String = self.api_key.chars().take(API_KEY_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    }

    fn get_messages(system_prompt: String, user_prompts: Vec<String>) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(ChatMessage::system(system_prompt));
        }

        for prompt in user_prompts {
            messages.push(ChatMessage::user(prompt));
        }

        messages
    }

    pub fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: Self::get_messages(system_prompt, user_prompts),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn error_for_status(status: u16, error_text: String) -> AiProviderError {
        match status {
            401 => AiProviderError::AuthenticationError(error_text),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }

    pub fn first_content(response: ChatResponse) -> Result<String, AiProviderError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAiCompatibleProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let request_body = self.get_request(system_prompt, user_prompts);
        log::info!("📦 Requesting {} with key {}", request_body.model, self.key_preview());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Provider API Error Response: {} {}", status, error_text);
            return Err(Self::error_for_status(status.as_u16(), error_text));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(usage) = &body.usage {
            log::debug!("🧮 Tokens used: {} prompt, {} completion", usage.prompt_tokens, usage.completion_tokens);
        }

        Self::first_content(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAiCompatibleProvider {
        let config = AiConfig {
            base_url: Some("https://api.groq.com/openai/v1/".to_string()),
            ..AiConfig::default()
        };
        OpenAiCompatibleProvider::new("gsk_secret_value".to_string(), &config).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(provider().endpoint(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn test_openai_provider_uses_openai_endpoint() {
        let config = AiConfig {
            provider: "openai".to_string(),
            ..AiConfig::default()
        };
        let provider = OpenAiCompatibleProvider::new("sk-test".to_string(), &config).unwrap();
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = AiConfig {
            provider: "carrier-pigeon".to_string(),
            ..AiConfig::default()
        };
        assert!(matches!(
            OpenAiCompatibleProvider::new("key".to_string(), &config),
            Err(AiProviderError::ApiError(_))
        ));
    }

    #[test]
    fn test_key_preview_hides_secret() {
        assert_eq!(provider().key_preview(), "gsk_se...");
    }

    #[test]
    fn test_request_skips_empty_system_prompt() {
        let request = provider().get_request(String::new(), vec!["analyze this".to_string()]);
        assert_eq!(request.messages, vec![ChatMessage::user("analyze this".to_string())]);
        assert_eq!(request.model, "deepseek-r1-distill-llama-70b");
        assert_eq!(request.max_tokens, 1500);
    }

    #[test]
    fn test_request_with_model_override() {
        let request = provider()
            .with_model("llama-3.3-70b-versatile".to_string())
            .get_request("be terse".to_string(), vec![]);
        assert_eq!(request.model, "llama-3.3-70b-versatile");
        assert_eq!(request.messages[0].role, "system");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            OpenAiCompatibleProvider::error_for_status(401, "bad key".to_string()),
            AiProviderError::AuthenticationError("bad key".to_string())
        );
        assert_eq!(
            OpenAiCompatibleProvider::error_for_status(429, "slow down".to_string()),
            AiProviderError::ApiError("Rate limit exceeded: slow down".to_string())
        );
        assert_eq!(
            OpenAiCompatibleProvider::error_for_status(500, "oops".to_string()),
            AiProviderError::ApiError("HTTP 500: oops".to_string())
        );
    }

    #[test]
    fn test_first_content() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"{\"score\": 80}"},"finish_reason":"stop"}]}"#,
        )
        .unwrap();
        assert_eq!(OpenAiCompatibleProvider::first_content(body).unwrap(), "{\"score\": 80}");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            OpenAiCompatibleProvider::first_content(empty),
            Err(AiProviderError::SerializationError(_))
        ));
    }
}

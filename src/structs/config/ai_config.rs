use serde::{Deserialize, Serialize};
use crate::config::constants::{GROQ_BASE_URL, OPENAI_BASE_URL};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    /// Overrides the endpoint implied by `provider`.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            base_url: None,
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            api_key_env: ConfigHelper::default_api_key_env(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            system_prompt: None,
        }
    }
}

impl AiConfig {
    /// Provider's default endpoint, unless `base_url` is set.
    pub fn resolved_base_url(&self) -> Option<String> {
        if let Some(base_url) = &self.base_url {
            return Some(base_url.clone());
        }

        match self.provider.as_str() {
            "groq" => Some(GROQ_BASE_URL.to_string()),
            "openai" => Some(OPENAI_BASE_URL.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_picks_base_url() {
        let groq = AiConfig::default();
        assert_eq!(groq.resolved_base_url().as_deref(), Some("https://api.groq.com/openai/v1"));

        let openai = AiConfig {
            provider: "openai".to_string(),
            ..AiConfig::default()
        };
        assert_eq!(openai.resolved_base_url().as_deref(), Some("https://api.openai.com/v1"));
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = AiConfig {
            provider: "openai".to_string(),
            base_url: Some("http://localhost:8000/v1".to_string()),
            ..AiConfig::default()
        };
        assert_eq!(config.resolved_base_url().as_deref(), Some("http://localhost:8000/v1"));
    }

    #[test]
    fn test_unknown_provider_has_no_endpoint() {
        let config = AiConfig {
            provider: "carrier-pigeon".to_string(),
            ..AiConfig::default()
        };
        assert_eq!(config.resolved_base_url(), None);
    }
}

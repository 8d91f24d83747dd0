use crate::config::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PROVIDER,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TEMPERATURE,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        DEFAULT_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_zero_score_is_missing() -> bool {
        true
    }

    pub fn default_pretty() -> bool {
        true
    }
}

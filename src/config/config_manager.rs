use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TEMPERATURE, SUPPORTED_PROVIDERS};
use crate::errors::{CoachError, CoachResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# CodeCoach Configuration

# Upstream model settings (any OpenAI-compatible chat completions API)
[ai]
# "groq" or "openai"; picks the default endpoint
provider = "groq"
model = "deepseek-r1-distill-llama-70b"
# Set only to reach another OpenAI-compatible endpoint
# base_url = "http://localhost:8000/v1"
max_tokens = 1500
temperature = 0.7
# Name of the environment variable holding the API key
api_key_env = "GROQ_API_KEY"
request_timeout_secs = 60

# Response normalization
[normalizer]
# A score of 0 is treated as "not provided" and replaced with the default (70)
zero_score_is_missing = true

# Output Configuration
[output]
pretty = true
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Loads the config from `path`, or the default location when `None`.
    /// A missing file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> CoachResult<Config> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> CoachResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| CoachError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the sample config, refusing to overwrite an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> CoachResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if path.exists() {
            return Err(CoachError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CoachError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(&path, SAMPLE_CONFIG)
            .map_err(|e| CoachError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        Ok(path)
    }

    pub fn validate_config(config: &Config) -> CoachResult<()> {
        let mut errors = Vec::new();

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(CoachError::validation_error(
                "ai.provider",
                &config.ai.provider,
                &format!("one of: {}", SUPPORTED_PROVIDERS.join(", ")),
                None,
            ));
        }

        if config.ai.model.trim().is_empty() {
            errors.push(CoachError::validation_error("ai.model", "", "must not be empty", None));
        }

        if let Some(base_url) = &config.ai.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                errors.push(CoachError::validation_error(
                    "ai.base_url",
                    base_url,
                    "must be an http(s) URL",
                    Some("e.g. https://api.groq.com/openai/v1"),
                ));
            }
        }

        if config.ai.max_tokens == 0 {
            errors.push(CoachError::validation_error("ai.max_tokens", "0", "must be greater than 0", None));
        }

        if !(0.0..=MAX_TEMPERATURE).contains(&config.ai.temperature) {
            errors.push(CoachError::validation_error(
                "ai.temperature",
                &config.ai.temperature.to_string(),
                &format!("0.0..={}", MAX_TEMPERATURE),
                None,
            ));
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push(CoachError::validation_error(
                "ai.api_key_env",
                "",
                "must name an environment variable",
                Some("e.g. GROQ_API_KEY"),
            ));
        }

        if config.ai.request_timeout_secs == 0 {
            errors.push(CoachError::validation_error("ai.request_timeout_secs", "0", "must be greater than 0", None));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(CoachError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            }),
        }
    }

    /// Reads the API key from the environment variable the config names.
    pub fn api_key(config: &Config) -> CoachResult<String> {
        std::env::var(&config.ai.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CoachError::config_error(
                &format!("{} not found in environment variables", config.ai.api_key_env),
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your key>", config.ai.api_key_env)),
            ))
    }
}

pub const CONFIG_DIR_NAME: &str = "codecoach";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_PROVIDER: &str = "groq";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_LANGUAGE: &str = "javascript";

pub const SUPPORTED_PROVIDERS: &[&str] = &["groq", "openai"];
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Number of leading key characters shown in logs.
pub const API_KEY_PREVIEW_CHARS: usize = 6;

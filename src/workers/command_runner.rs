use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{CoachError, CoachResult, ResultExt};
use crate::services::ai_providers::openai_compatible::OpenAiCompatibleProvider;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::config::config::Config;
use crate::structs::submission::Submission;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> CoachResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { file, problem, language } => self.analyze_command(&file, problem, language).await,
            Commands::Normalize { input, trace } => self.normalize_command(input.as_deref(), trace),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> CoachResult<()> {
        log::info!("🚀 Initializing codecoach configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔧 Run 'codecoach validate' to check your configuration.");

        Ok(())
    }

    fn load_config(&self) -> CoachResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    async fn analyze_command(&self, file: &Path, problem: String, language: String) -> CoachResult<()> {
        if problem.trim().is_empty() {
            return Err(CoachError::user_input_error("", "a problem name", "Pass --problem \"Two Sum\""));
        }

        log::info!("🔍 Analyzing solution for '{}'...", problem);

        let config = self.load_config()?;
        let code = fs::read_to_string(file)
            .map_err(|e| CoachError::file_error(&file.display().to_string(), "read", &e.to_string()))?;

        let api_key = ConfigManager::api_key(&config)?;
        let provider = OpenAiCompatibleProvider::new(api_key, &config.ai)?;

        let mut analyzer = CodeAnalyzer::new(Arc::new(provider), ResponseNormalizer::new(&config.normalizer));
        if let Some(system_prompt) = &config.ai.system_prompt {
            analyzer = analyzer.with_system_prompt(system_prompt.clone());
        }

        let submission = Submission::new(problem, code).with_language(language);
        let result = analyzer.analyze(&submission).await;

        Self::print_json(&result, config.output.pretty)
    }

    fn normalize_command(&self, input: Option<&Path>, trace: bool) -> CoachResult<()> {
        let config = self.load_config()?;

        let bytes = match input {
            Some(path) => fs::read(path)
                .map_err(|e| CoachError::file_error(&path.display().to_string(), "read", &e.to_string()))?,
            None => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer).with_operation("read stdin")?;
                buffer
            }
        };
        let raw = Self::decode_model_output(&bytes);

        let normalized = ResponseNormalizer::new(&config.normalizer).normalize_traced(&raw);
        if trace {
            log::info!("🧭 Extraction tier: {}", normalized.tier);
        }

        Self::print_json(&normalized.result, config.output.pretty)
    }

    fn validate_command(&self) -> CoachResult<()> {
        log::info!("🔍 Validating configuration...");

        let path = self.config_path.clone().unwrap_or_else(ConfigManager::default_path);
        if !path.exists() {
            log::warn!("⚠️ No configuration file at {}, checking built-in defaults", path.display());
        }

        let config = self.load_config()?;
        if ConfigManager::api_key(&config).is_err() {
            log::warn!("⚠️ {} is not set; 'analyze' will fail until it is", config.ai.api_key_env);
        }

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    /// Model output is not guaranteed to be UTF-8; invalid bytes become U+FFFD.
    fn decode_model_output(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn print_json<T: Serialize>(value: &T, pretty: bool) -> CoachResult<()> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::response_normalizer::normalize;

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut bytes = b"{\"strengths\":\"fast ".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\",\"score\":83}");

        let raw = CommandRunner::decode_model_output(&bytes);
        assert!(raw.contains('\u{fffd}'));

        let result = normalize(&raw);
        assert!(result.strengths.starts_with("fast "));
        assert_eq!(result.score, 83);
    }

    #[test]
    fn test_binary_garbage_normalizes_to_defaults() {
        let raw = CommandRunner::decode_model_output(&[0x00, 0xc3, 0x28, 0xa0, 0xa1, 0xff]);
        assert_eq!(normalize(&raw), crate::structs::analysis_result::AnalysisResult::default());
    }
}

use std::sync::Arc;
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::prompt_generator::generate_analysis_prompt;
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::normalized_analysis::NormalizedAnalysis;
use crate::structs::submission::Submission;
use crate::traits::ai_provider::AiProvider;

/// Sends a submission to the model and normalizes whatever comes back.
pub struct CodeAnalyzer {
    provider: Arc<dyn AiProvider>,
    normalizer: ResponseNormalizer,
    system_prompt: String,
}

impl CodeAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>, normalizer: ResponseNormalizer) -> Self {
        Self {
            provider,
            normalizer,
            system_prompt: String::new(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: String) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    /// Raw model reply for `submission`.
    pub async fn request_analysis(&self, submission: &Submission) -> Result<String, AiProviderError> {
        let prompt = generate_analysis_prompt(submission);
        self.provider.chat(self.system_prompt.clone(), vec![prompt]).await
    }

    pub async fn analyze_traced(&self, submission: &Submission) -> Result<NormalizedAnalysis, AiProviderError> {
        let raw = self.request_analysis(submission).await?;
        Ok(self.normalizer.normalize_traced(&raw))
    }

    /// Never fails: provider errors degrade to the default record.
    pub async fn analyze(&self, submission: &Submission) -> AnalysisResult {
        match self.analyze_traced(submission).await {
            Ok(normalized) => {
                log::info!("🧠 Feedback for '{}' extracted via {}", submission.problem_name, normalized.tier);
                normalized.result
            }
            Err(e) => {
                log::warn!("⚠️ Analysis request failed, using default feedback: {}", e);
                AnalysisResult::default()
            }
        }
    }
}

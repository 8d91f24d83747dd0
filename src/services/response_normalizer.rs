use once_cell::sync::Lazy;
use crate::enums::extraction_tier::ExtractionTier;
use crate::services::extraction::fragment_rescue::FragmentRescueStrategy;
use crate::services::extraction::structured_json::StructuredJsonStrategy;
use crate::services::extraction::text_heuristics::TextHeuristicsStrategy;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::normalizer_config::NormalizerConfig;
use crate::structs::normalized_analysis::NormalizedAnalysis;
use crate::traits::extraction_strategy::ExtractionStrategy;

static DEFAULT_NORMALIZER: Lazy<ResponseNormalizer> = Lazy::new(ResponseNormalizer::default);

/// Normalizes raw model output with the default configuration.
pub fn normalize(raw: &str) -> AnalysisResult {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// Turns free-form model output into an [`AnalysisResult`].
///
/// Strategies run in order and the first one that returns a partial record
/// wins. Nothing here can fail: the worst case is the default record.
pub struct ResponseNormalizer {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ResponseNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        let zero_is_missing = config.zero_score_is_missing;

        Self::with_strategies(vec![
            Box::new(StructuredJsonStrategy::new(zero_is_missing)),
            Box::new(FragmentRescueStrategy::new(zero_is_missing)),
            Box::new(TextHeuristicsStrategy::new(zero_is_missing)),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn normalize(&self, raw: &str) -> AnalysisResult {
        self.normalize_traced(raw).result
    }

    pub fn normalize_traced(&self, raw: &str) -> NormalizedAnalysis {
        for strategy in &self.strategies {
            let Some(partial) = strategy.extract(raw) else {
                log::debug!("⏭️  {} found nothing, trying next tier", strategy.tier());
                continue;
            };

            let tier = if partial.is_empty() {
                ExtractionTier::Defaulted
            } else {
                strategy.tier()
            };
            log::debug!("✅ Normalized response via {}", tier);

            return NormalizedAnalysis {
                result: AnalysisResult::from_partial(partial),
                tier,
            };
        }

        log::debug!("⚠️ No extraction tier matched, using defaults");
        NormalizedAnalysis {
            result: AnalysisResult::default(),
            tier: ExtractionTier::Defaulted,
        }
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::partial_analysis::PartialAnalysis;

    struct FixedStrategy(Option<PartialAnalysis>);

    impl ExtractionStrategy for FixedStrategy {
        fn tier(&self) -> ExtractionTier {
            ExtractionTier::FragmentRescue
        }

        fn extract(&self, _raw: &str) -> Option<PartialAnalysis> {
            self.0.clone()
        }
    }

    #[test]
    fn test_first_successful_strategy_wins() {
        let normalizer = ResponseNormalizer::with_strategies(vec![
            Box::new(FixedStrategy(None)),
            Box::new(FixedStrategy(Some(PartialAnalysis {
                score: Some(12),
                ..PartialAnalysis::default()
            }))),
            Box::new(FixedStrategy(Some(PartialAnalysis {
                score: Some(99),
                ..PartialAnalysis::default()
            }))),
        ]);

        let traced = normalizer.normalize_traced("anything");
        assert_eq!(traced.result.score, 12);
        assert_eq!(traced.tier, ExtractionTier::FragmentRescue);
    }

    #[test]
    fn test_empty_partial_reports_defaulted() {
        let normalizer = ResponseNormalizer::with_strategies(vec![
            Box::new(FixedStrategy(Some(PartialAnalysis::default()))),
            Box::new(FixedStrategy(Some(PartialAnalysis {
                score: Some(99),
                ..PartialAnalysis::default()
            }))),
        ]);

        let traced = normalizer.normalize_traced("anything");
        assert_eq!(traced.result, AnalysisResult::default());
        assert_eq!(traced.tier, ExtractionTier::Defaulted);
    }

    #[test]
    fn test_empty_pipeline_returns_defaults() {
        let normalizer = ResponseNormalizer::with_strategies(Vec::new());
        let traced = normalizer.normalize_traced("{\"score\": 10}");
        assert_eq!(traced.result, AnalysisResult::default());
        assert_eq!(traced.tier, ExtractionTier::Defaulted);
    }

    #[test]
    fn test_tiers_run_in_order() {
        let normalizer = ResponseNormalizer::default();

        assert_eq!(
            normalizer.normalize_traced(r#"{"strengths":"tidy"}"#).tier,
            ExtractionTier::StructuredJson
        );
        assert_eq!(
            normalizer.normalize_traced(r#"{"strengths":"ok" "score": 50}"#).tier,
            ExtractionTier::FragmentRescue
        );
        assert_eq!(
            normalizer.normalize_traced("Strengths: tidy loops").tier,
            ExtractionTier::TextHeuristics
        );
        assert_eq!(normalizer.normalize_traced("").tier, ExtractionTier::Defaulted);
    }

    #[test]
    fn test_zero_score_can_be_kept() {
        let normalizer = ResponseNormalizer::new(&NormalizerConfig {
            zero_score_is_missing: false,
        });
        assert_eq!(normalizer.normalize(r#"{"score": 0}"#).score, 0);
        assert_eq!(normalize(r#"{"score": 0}"#).score, 70);
    }
}

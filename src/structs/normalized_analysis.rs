use serde::Serialize;
use crate::enums::extraction_tier::ExtractionTier;
use crate::structs::analysis_result::AnalysisResult;

/// A normalized record together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedAnalysis {
    pub result: AnalysisResult,
    pub tier: ExtractionTier,
}

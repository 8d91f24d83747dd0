use serde::{Deserialize, Serialize};
use crate::structs::partial_analysis::PartialAnalysis;

pub const DEFAULT_STRENGTHS: &str = "Code analysis completed";
pub const DEFAULT_IMPROVEMENTS: &str = "Review the solution for optimization opportunities";
pub const DEFAULT_RECOMMENDATIONS: &str = "Practice similar problems to improve skills";
pub const DEFAULT_COMPLEXITY: &str = "O(n)";
pub const DEFAULT_SCORE: i64 = 70;

/// Display-ready feedback for a single submission.
///
/// Every field is always populated; values the model did not provide are
/// filled from the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub strengths: String,
    pub improvements: String,
    pub recommendations: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub score: i64,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            strengths: DEFAULT_STRENGTHS.to_string(),
            improvements: DEFAULT_IMPROVEMENTS.to_string(),
            recommendations: DEFAULT_RECOMMENDATIONS.to_string(),
            time_complexity: DEFAULT_COMPLEXITY.to_string(),
            space_complexity: DEFAULT_COMPLEXITY.to_string(),
            score: DEFAULT_SCORE,
        }
    }
}

impl AnalysisResult {
    /// Fills a fresh default record with whatever the partial carries.
    pub fn from_partial(partial: PartialAnalysis) -> Self {
        let mut result = Self::default();

        if let Some(strengths) = partial.strengths {
            result.strengths = strengths;
        }
        if let Some(improvements) = partial.improvements {
            result.improvements = improvements;
        }
        if let Some(recommendations) = partial.recommendations {
            result.recommendations = recommendations;
        }
        if let Some(time_complexity) = partial.time_complexity {
            result.time_complexity = time_complexity;
        }
        if let Some(space_complexity) = partial.space_complexity {
            result.space_complexity = space_complexity;
        }
        if let Some(score) = partial.score {
            result.score = score;
        }

        result
    }
}

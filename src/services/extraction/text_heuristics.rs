use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::extraction_tier::ExtractionTier;
use crate::structs::partial_analysis::PartialAnalysis;
use crate::traits::extraction_strategy::ExtractionStrategy;

static STRENGTH_LINE: Lazy<Regex> = Lazy::new(|| labelled_pattern("strength"));
static IMPROVEMENT_LINE: Lazy<Regex> = Lazy::new(|| labelled_pattern("improvement"));
static RECOMMENDATION_LINE: Lazy<Regex> = Lazy::new(|| labelled_pattern("recommendation"));

static BIG_O: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"O\([^)]+\)").expect("big-O pattern is valid")
});

static SPACE_COMPLEXITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:space[\s-]*complexity)[^\n]*?(O\([^)]+\))").expect("space complexity pattern is valid")
});

static PERCENT_SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*%").expect("percent pattern is valid")
});

fn labelled_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){}[^:]*:\s*([^.\n]+)", label)).expect("label pattern is valid")
}

/// Last resort: scrape prose for labelled sentences, big-O notation and a
/// percentage score. Always succeeds, possibly with nothing found.
pub struct TextHeuristicsStrategy {
    zero_score_is_missing: bool,
}

impl TextHeuristicsStrategy {
    pub fn new(zero_score_is_missing: bool) -> Self {
        Self { zero_score_is_missing }
    }

    fn labelled(pattern: &Regex, text: &str) -> Option<String> {
        let value = pattern.captures(text)?.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn score(&self, text: &str) -> Option<i64> {
        let digits = PERCENT_SCORE.captures(text)?.get(1)?.as_str();
        let score = digits.parse::<i64>().ok()?;
        if score == 0 && self.zero_score_is_missing {
            None
        } else {
            Some(score)
        }
    }
}

impl ExtractionStrategy for TextHeuristicsStrategy {
    fn tier(&self) -> ExtractionTier {
        ExtractionTier::TextHeuristics
    }

    fn extract(&self, raw: &str) -> Option<PartialAnalysis> {
        Some(PartialAnalysis {
            strengths: Self::labelled(&STRENGTH_LINE, raw),
            improvements: Self::labelled(&IMPROVEMENT_LINE, raw),
            recommendations: Self::labelled(&RECOMMENDATION_LINE, raw),
            time_complexity: BIG_O.find(raw).map(|m| m.as_str().to_string()),
            space_complexity: SPACE_COMPLEXITY
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            score: self.score(raw),
        })
    }
}

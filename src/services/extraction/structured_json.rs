use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::extraction_tier::ExtractionTier;
use crate::structs::partial_analysis::PartialAnalysis;
use crate::structs::raw_analysis::RawAnalysis;
use crate::traits::extraction_strategy::ExtractionStrategy;

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?i:json)?\s*(\{[\s\S]*?\})\s*```").expect("fenced JSON pattern is valid")
});

/// Parses the whole object the model was asked for, preferring a fenced
/// block over the first-to-last brace slice.
pub struct StructuredJsonStrategy {
    zero_score_is_missing: bool,
}

impl StructuredJsonStrategy {
    pub fn new(zero_score_is_missing: bool) -> Self {
        Self { zero_score_is_missing }
    }

    /// Picks the text that should hold the JSON object, if any.
    pub fn candidate(raw: &str) -> Option<&str> {
        if let Some(fenced) = FENCED_JSON.captures(raw).and_then(|caps| caps.get(1)) {
            return Some(fenced.as_str());
        }

        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end < start {
            return None;
        }

        Some(&raw[start..=end])
    }
}

impl ExtractionStrategy for StructuredJsonStrategy {
    fn tier(&self) -> ExtractionTier {
        ExtractionTier::StructuredJson
    }

    fn extract(&self, raw: &str) -> Option<PartialAnalysis> {
        let candidate = Self::candidate(raw)?;

        match RawAnalysis::parse(candidate) {
            Ok(parsed) => Some(parsed.into_partial(self.zero_score_is_missing)),
            Err(e) => {
                log::debug!("🔎 Structured JSON parse failed: {}", e);
                None
            }
        }
    }
}

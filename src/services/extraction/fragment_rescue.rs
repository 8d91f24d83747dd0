use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::extraction_tier::ExtractionTier;
use crate::structs::partial_analysis::PartialAnalysis;
use crate::structs::raw_analysis::RawAnalysis;
use crate::traits::extraction_strategy::ExtractionStrategy;

static STRENGTHS_FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{[^}]*"strengths"[^}]*\}"#).expect("strengths fragment pattern is valid")
});

static ADJACENT_STRINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\\])"\s+""#).expect("adjacent strings pattern is valid")
});

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*([}\]])").expect("trailing comma pattern is valid")
});

/// Recovers a smaller object around the `"strengths"` key when the full
/// response does not parse.
pub struct FragmentRescueStrategy {
    zero_score_is_missing: bool,
}

impl FragmentRescueStrategy {
    pub fn new(zero_score_is_missing: bool) -> Self {
        Self { zero_score_is_missing }
    }

    /// Fragment as found, then closed with an extra brace, then repaired.
    fn attempts(fragment: &str) -> [String; 3] {
        [
            fragment.to_string(),
            format!("{}}}", fragment),
            Self::repair(fragment),
        ]
    }

    /// Inserts commas between adjacent string values and drops trailing commas.
    pub fn repair(fragment: &str) -> String {
        let with_commas = ADJACENT_STRINGS.replace_all(fragment, "${1}\", \"");
        TRAILING_COMMA.replace_all(&with_commas, "${1}").into_owned()
    }
}

impl ExtractionStrategy for FragmentRescueStrategy {
    fn tier(&self) -> ExtractionTier {
        ExtractionTier::FragmentRescue
    }

    fn extract(&self, raw: &str) -> Option<PartialAnalysis> {
        let fragment = STRENGTHS_FRAGMENT.find(raw)?.as_str();

        for attempt in Self::attempts(fragment) {
            match RawAnalysis::parse(&attempt) {
                Ok(parsed) => return Some(parsed.into_partial(self.zero_score_is_missing)),
                Err(e) => log::debug!("🔎 Fragment attempt failed: {}", e),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_inserts_missing_comma() {
        let repaired = FragmentRescueStrategy::repair(r#"{"strengths":"ok" "improvements":"needs work"}"#);
        assert_eq!(repaired, r#"{"strengths":"ok", "improvements":"needs work"}"#);
    }

    #[test]
    fn test_repair_drops_trailing_comma() {
        let repaired = FragmentRescueStrategy::repair(r#"{"strengths":"ok", "score": 80, }"#);
        assert_eq!(repaired, r#"{"strengths":"ok", "score": 80}"#);
    }

    #[test]
    fn test_extract_recovers_fields_from_broken_fragment() {
        let strategy = FragmentRescueStrategy::new(true);
        let partial = strategy
            .extract(r#"{"strengths":"ok" "improvements":"needs work"}"#)
            .unwrap();

        assert_eq!(partial.strengths.as_deref(), Some("ok"));
        assert_eq!(partial.improvements.as_deref(), Some("needs work"));
        assert_eq!(partial.score, None);
    }

    #[test]
    fn test_extract_needs_strengths_key() {
        let strategy = FragmentRescueStrategy::new(true);
        assert!(strategy.extract(r#"{"improvements":"needs work"}"#).is_none());
    }

    #[test]
    fn test_extract_gives_up_on_unrecoverable_fragment() {
        let strategy = FragmentRescueStrategy::new(true);
        assert!(strategy.extract(r#"{"strengths": good code}"#).is_none());
    }
}

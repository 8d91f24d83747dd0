use std::fmt;
use serde::{Deserialize, Serialize};

/// Which stage of the normalization cascade produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    StructuredJson,
    FragmentRescue,
    TextHeuristics,
    Defaulted,
}

impl ExtractionTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StructuredJson => "structured JSON",
            Self::FragmentRescue => "fragment rescue",
            Self::TextHeuristics => "text heuristics",
            Self::Defaulted => "defaults",
        }
    }
}

impl fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

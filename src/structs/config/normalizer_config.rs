use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Treat a score of 0 as "not provided" and fall back to the default.
    #[serde(default = "ConfigHelper::default_zero_score_is_missing")]
    pub zero_score_is_missing: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            zero_score_is_missing: ConfigHelper::default_zero_score_is_missing(),
        }
    }
}

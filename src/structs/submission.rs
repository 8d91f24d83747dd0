use serde::{Deserialize, Serialize};
use crate::config::constants::DEFAULT_LANGUAGE;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A coding-practice solution sent for feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub problem_name: String,
    pub code: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Submission {
    pub fn new(problem_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            problem_name: problem_name.into(),
            code: code.into(),
            language: default_language(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

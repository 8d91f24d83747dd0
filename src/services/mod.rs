pub mod response_normalizer;
pub mod extraction;
pub mod ai_providers;
pub mod code_analyzer;

pub mod ai_provider;
pub mod extraction_strategy;

pub mod commands;
pub mod ai_provider_error;
pub mod extraction_tier;

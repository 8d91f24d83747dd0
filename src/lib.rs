//! Feedback for coding-practice solutions: prompt an upstream model, then
//! normalize its free-form reply into a fixed-shape [`AnalysisResult`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use enums::extraction_tier::ExtractionTier;
pub use services::response_normalizer::{normalize, ResponseNormalizer};
pub use structs::analysis_result::AnalysisResult;

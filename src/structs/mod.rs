pub mod analysis_result;
pub mod partial_analysis;
pub mod raw_analysis;
pub mod normalized_analysis;
pub mod submission;
pub mod cli;
pub mod config;
pub mod ai;

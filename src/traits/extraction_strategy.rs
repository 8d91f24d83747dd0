use crate::enums::extraction_tier::ExtractionTier;
use crate::structs::partial_analysis::PartialAnalysis;

/// One tier of the normalization cascade.
///
/// Returning `None` hands the input to the next strategy; `Some` ends the
/// cascade, and the partial is laid over the default record.
pub trait ExtractionStrategy: Send + Sync {
    fn tier(&self) -> ExtractionTier;

    fn extract(&self, raw: &str) -> Option<PartialAnalysis>;
}

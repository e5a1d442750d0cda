// ============================================================================
// Progressive Formatter Interface
// Defines the contract for as-you-type phone masking strategies
// ============================================================================

use crate::engine::PhoneMetadata;

/// Output of one progressive formatting pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressiveOutput {
    /// Masked text for the input
    pub formatted: String,

    /// National significant number recognised in the input (trunk prefix
    /// removed). Empty when the strategy could not tell.
    pub national_number: String,
}

/// Strategy pattern interface for as-you-type masking.
/// Implementations: AsYouTypeFormatter (layout rules), PlaceholderMaskFormatter
pub trait ProgressiveFormatter: Send + Sync {
    /// Mask national `digits` (ASCII digits only) for the metadata's country
    fn format(&self, metadata: &PhoneMetadata, digits: &str) -> ProgressiveOutput;

    /// Strategy name for logging
    fn name(&self) -> &str;
}

// ============================================================================
// Drafts
// Per-keystroke results recomputed from the current input text
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of parsing a locale-formatted decimal while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalDraft {
    /// Locale-formatted reconstruction of what was typed
    pub display_value: String,

    /// Canonical value, `None` until at least one digit is typed
    pub canonical_value: Option<String>,

    /// Whether any digit was typed
    pub has_digits: bool,

    /// The separator was typed but no fraction digit follows it yet
    pub has_trailing_separator: bool,
}

impl DecimalDraft {
    /// Draft for an empty field
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of parsing national phone digits while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneDraft {
    /// Masked display text
    pub display_value: String,

    /// E.164 value, empty unless the number validates
    pub canonical_value: String,
}

impl PhoneDraft {
    /// Draft for an empty field
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_canonical(&self) -> bool {
        !self.canonical_value.is_empty()
    }
}

/// Result of committing a phone value (blur or explicit assignment).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneNormalization {
    pub display_value: String,
    pub canonical_value: String,

    /// Full structural validity
    pub is_valid: bool,

    /// Plausible length for the region (weaker than `is_valid`)
    pub is_possible: bool,
}

impl PhoneNormalization {
    /// Drop the validity flags.
    pub fn into_draft(self) -> PhoneDraft {
        PhoneDraft {
            display_value: self.display_value,
            canonical_value: self.canonical_value,
        }
    }
}

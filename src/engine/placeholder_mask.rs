// ============================================================================
// Placeholder Mask
// Digit-group masks derived from a country's example number
// ============================================================================

use super::phone_metadata::PhoneMetadata;
use crate::interfaces::{ProgressiveFormatter, ProgressiveOutput};
use crate::utils::digits_only;
use smallvec::SmallVec;

/// Group sizes and separators read off a placeholder such as `"300 1234567"`
/// (groups `[3, 7]`, separator `" "`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskPattern {
    prefix: String,
    groups: SmallVec<[usize; 4]>,
    /// `separators[i]` goes between `groups[i]` and `groups[i + 1]`
    separators: SmallVec<[String; 4]>,
}

impl MaskPattern {
    /// Parse a placeholder. Non-digit runs between digit runs become
    /// separators, non-digits before the first digit become the prefix and
    /// anything after the last digit is dropped.
    pub fn from_placeholder(placeholder: &str) -> Self {
        let mut pattern = Self::default();
        let mut current = 0usize;
        let mut pending = String::new();

        for c in placeholder.chars() {
            if c.is_ascii_digit() {
                if current == 0 && !pattern.groups.is_empty() {
                    pattern.separators.push(std::mem::take(&mut pending));
                } else if current == 0 {
                    pattern.prefix = std::mem::take(&mut pending);
                }
                current += 1;
            } else {
                if current > 0 {
                    pattern.groups.push(current);
                    current = 0;
                }
                pending.push(c);
            }
        }
        if current > 0 {
            pattern.groups.push(current);
        }

        pattern
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Total digit slots
    pub fn capacity(&self) -> usize {
        self.groups.iter().sum()
    }

    /// Lay `digits` into the groups. Separators appear only once a digit
    /// follows them; digits past the last group extend it. Anything but
    /// ASCII digits is dropped first.
    pub fn apply(&self, digits: &str) -> String {
        let digits = digits_only(digits);
        if digits.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(digits.len() * 2 + self.prefix.len());
        out.push_str(&self.prefix);

        let mut rest = digits.as_str();
        for (i, group) in self.groups.iter().enumerate() {
            let is_last = i + 1 == self.groups.len();
            let take = if is_last { rest.len() } else { (*group).min(rest.len()) };
            out.push_str(&rest[..take]);
            rest = &rest[take..];

            if rest.is_empty() {
                break;
            }
            if let Some(separator) = self.separators.get(i) {
                out.push_str(separator);
            }
        }

        if self.groups.is_empty() {
            out.push_str(rest);
        }
        out
    }
}

/// Masks with the placeholder's digit groups regardless of leading digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderMaskFormatter;

impl ProgressiveFormatter for PlaceholderMaskFormatter {
    fn format(&self, metadata: &PhoneMetadata, digits: &str) -> ProgressiveOutput {
        let (_, national_number) = metadata.split_national_prefix(digits);
        ProgressiveOutput {
            formatted: MaskPattern::from_placeholder(metadata.placeholder()).apply(digits),
            national_number: national_number.to_string(),
        }
    }

    fn name(&self) -> &str {
        "PlaceholderMask"
    }
}

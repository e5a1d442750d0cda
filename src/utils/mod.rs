// ============================================================================
// Utilities Module
// Digit-level helpers shared by the decimal and phone engines
// ============================================================================

mod digits;

pub use digits::{count_digits, digits_only, fill_template, slot_count, DigitPattern, SLOT};

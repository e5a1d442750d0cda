// ============================================================================
// Digit Helpers
// Digit extraction, leading-digit patterns and slot templates
// ============================================================================

/// Keep only ASCII digits.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ASCII digits in `text`.
pub fn count_digits(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

// ============================================================================
// Leading-Digit Patterns
// ============================================================================

/// One position of a [`DigitPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum DigitClass {
    Exact(u8),
    Any,
    /// Inclusive ranges, e.g. `[2-57]` is `[(2,5), (7,7)]`
    Set(Vec<(u8, u8)>),
}

impl DigitClass {
    fn contains(&self, digit: u8) -> bool {
        match self {
            DigitClass::Exact(d) => *d == digit,
            DigitClass::Any => true,
            DigitClass::Set(ranges) => ranges.iter().any(|(lo, hi)| (*lo..=*hi).contains(&digit)),
        }
    }
}

/// Fixed-width pattern over leading digits: literal digits, `x` for any digit
/// and `[...]` sets with ranges. `"[1-9][1-9]9"` matches `"119"` and is
/// compatible with the partial input `"11"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitPattern {
    classes: Vec<DigitClass>,
}

impl DigitPattern {
    /// Parse a pattern. Returns `None` on malformed input.
    pub fn parse(pattern: &str) -> Option<Self> {
        let mut classes = Vec::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '0'..='9' => classes.push(DigitClass::Exact(c as u8 - b'0')),
                'x' => classes.push(DigitClass::Any),
                '[' => {
                    let mut ranges = Vec::new();
                    let mut pending: Option<u8> = None;
                    let mut in_range = false;
                    loop {
                        match chars.next()? {
                            ']' => break,
                            '-' => in_range = pending.is_some(),
                            d @ '0'..='9' => {
                                let d = d as u8 - b'0';
                                if in_range {
                                    let lo = pending.take()?;
                                    if lo > d {
                                        return None;
                                    }
                                    ranges.push((lo, d));
                                    in_range = false;
                                } else if let Some(single) = pending.replace(d) {
                                    ranges.push((single, single));
                                }
                            }
                            _ => return None,
                        }
                    }
                    if let Some(single) = pending {
                        ranges.push((single, single));
                    }
                    if ranges.is_empty() {
                        return None;
                    }
                    classes.push(DigitClass::Set(ranges));
                }
                _ => return None,
            }
        }

        Some(Self { classes })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every available digit fits its position. Shorter input is compatible
    /// as long as it does not contradict the pattern.
    pub fn is_compatible(&self, digits: &str) -> bool {
        digits
            .bytes()
            .zip(&self.classes)
            .all(|(b, class)| b.is_ascii_digit() && class.contains(b - b'0'))
    }

    /// The pattern is fully matched by the start of `digits`.
    pub fn matches_prefix(&self, digits: &str) -> bool {
        digits.len() >= self.classes.len() && self.is_compatible(digits)
    }
}

// ============================================================================
// Slot Templates
// ============================================================================

/// Character marking a digit slot in a template.
pub const SLOT: char = 'x';

/// Number of digit slots in a template.
pub fn slot_count(template: &str) -> usize {
    template.chars().filter(|c| *c == SLOT).count()
}

/// Fill template slots with `digits`, cutting the output right after the
/// last placed digit. Literals are only emitted once a digit follows them.
///
/// Digits beyond the template's slots are not placed.
pub fn fill_template(template: &str, digits: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut pending = String::new();
    let mut digits = digits.chars();

    for c in template.chars() {
        if c == SLOT {
            match digits.next() {
                Some(d) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(d);
                }
                None => break,
            }
        } else {
            pending.push(c);
        }
    }

    out
}

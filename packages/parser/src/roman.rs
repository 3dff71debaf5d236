//! Roman numeral conversion for Article labels.

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a canonical numeral.
pub const MAX_ROMAN: u32 = 3999;

/// Format a value as an upper-case Roman numeral.
///
/// Returns `None` for 0 and values above [`MAX_ROMAN`].
///
/// # Examples
/// ```
/// use cba_parser::roman::to_roman;
///
/// assert_eq!(to_roman(42).as_deref(), Some("XLII"));
/// assert_eq!(to_roman(0), None);
/// ```
#[must_use]
pub fn to_roman(mut value: u32) -> Option<String> {
    if value == 0 || value > MAX_ROMAN {
        return None;
    }

    let mut out = String::new();
    for (weight, symbol) in NUMERALS {
        while value >= weight {
            out.push_str(symbol);
            value -= weight;
        }
    }
    Some(out)
}

/// Parse a canonical upper-case Roman numeral.
///
/// Only the canonical spelling is accepted: "IIII", "IC" and lower-case
/// numerals are rejected, so every value has exactly one label.
///
/// # Examples
/// ```
/// use cba_parser::roman::parse_roman;
///
/// assert_eq!(parse_roman("XXIX"), Some(29));
/// assert_eq!(parse_roman("IIII"), None);
/// ```
#[must_use]
pub fn parse_roman(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    let mut total = 0u32;
    let mut prev = 0u32;
    for c in text.chars().rev() {
        let value = match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value < prev {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
            prev = value;
        }
    }

    // Reject non-canonical spellings by round-tripping.
    (to_roman(total)?.as_str() == text).then_some(total)
}

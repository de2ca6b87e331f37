//! Coercion of operator text into counts.
//!
//! Input is never rejected. Leading whitespace is skipped, an optional sign
//! and the leading run of digits are read, anything after is ignored.
//! No digits means 0, negatives clamp to 0, overflow saturates.
use crate::*;

/// Chip count for the buy-in and stack fields. Leading zeros are stripped.
pub fn chips(raw: &str) -> Chips {
    Chips::try_from(natural(raw)).unwrap_or(Chips::MAX)
}

/// All-in loss count.
pub fn losses(raw: &str) -> Losses {
    Losses::try_from(natural(raw)).unwrap_or(Losses::MAX)
}

fn natural(raw: &str) -> u64 {
    let text = raw.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let digits = text[..end].trim_start_matches('0');
    match (negative, digits.is_empty()) {
        (_, true) => 0,
        (true, false) => 0,
        (false, false) => digits.parse::<u64>().unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(chips("007"), 7);
        assert_eq!(chips("000"), 0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(chips(""), 0);
        assert_eq!(losses(""), 0);
        assert_eq!(chips("   "), 0);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(chips("abc"), 0);
        assert_eq!(chips("-"), 0);
        assert_eq!(losses("x3"), 0);
    }

    #[test]
    fn reads_leading_digits() {
        assert_eq!(chips("12abc"), 12);
        assert_eq!(chips("  15000"), 15_000);
        assert_eq!(chips("+250"), 250);
        assert_eq!(chips("1.5"), 1);
        assert_eq!(chips("1e3"), 1);
    }

    #[test]
    fn negatives_clamp_to_zero() {
        assert_eq!(chips("-500"), 0);
        assert_eq!(losses("-1"), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(chips("99999999999999999999999"), Chips::MAX);
        assert_eq!(chips("4294967296"), Chips::MAX);
        assert_eq!(chips("4294967295"), Chips::MAX);
        assert_eq!(chips("4294967294"), Chips::MAX - 1);
    }
}

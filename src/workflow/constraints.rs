//! Input filters for text fields.
//!
//! Each filter receives the field's current text and the proposed edit and
//! returns whichever of the two the field should hold.

/// Accept the edit only if it is all ASCII digits (or empty).
pub fn integer<'a>(current: &'a str, proposed: &'a str) -> &'a str {
    if proposed.chars().all(|c| c.is_ascii_digit()) {
        proposed
    } else {
        current
    }
}

/// Accept digits with at most one decimal point.
pub fn decimal<'a>(current: &'a str, proposed: &'a str) -> &'a str {
    let mut parts = proposed.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if digits(whole) && digits(fraction) {
        proposed
    } else {
        current
    }
}

/// Reject edits longer than `max` characters.
pub fn max_length<'a>(current: &'a str, proposed: &'a str, max: usize) -> &'a str {
    if proposed.chars().count() > max {
        current
    } else {
        proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(integer("12", "123"), "123");
        assert_eq!(integer("12", "12a"), "12");
        assert_eq!(integer("12", ""), "");
        assert_eq!(integer("", "-1"), "");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal("", "1500"), "1500");
        assert_eq!(decimal("1500", "1500."), "1500.");
        assert_eq!(decimal("1500.", "1500.5"), "1500.5");
        assert_eq!(decimal("1500.5", "1500.5."), "1500.5");
        assert_eq!(decimal("1", "1e3"), "1");
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert_eq!(max_length("abc", "abcd", 4), "abcd");
        assert_eq!(max_length("abcd", "abcde", 4), "abcd");
        // Multi-byte characters count once
        assert_eq!(max_length("", "ção", 3), "ção");
    }
}

//! Rating parsing with the storefront's lenient number handling.

/// Parses the leading integer of `raw` the way the storefront form handling
/// always has: skip leading whitespace, accept an optional sign, read a run
/// of ASCII digits, ignore whatever follows. `"3.9"` parses to 3 and
/// `"3abc"` to 3; input with no leading digits parses to nothing.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    let len = digits
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    // Digit runs that overflow i64 are out of rating range either way.
    let value = digits[..len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parses a raw rating string into a valid 1–5 rating.
///
/// Lenient leading-integer parse first, then the inclusive range check.
/// Non-numbers and out-of-range values both yield `None`; callers emit one
/// shared diagnostic for either case.
#[must_use]
pub fn parse_rating(raw: &str) -> Option<u8> {
    let n = parse_leading_int(raw)?;
    if (1..=5).contains(&n) {
        u8::try_from(n).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_plain() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("42"), Some(42));
    }

    #[test]
    fn leading_int_ignores_trailing_garbage() {
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("3abc"), Some(3));
        assert_eq!(parse_leading_int("5 stars"), Some(5));
    }

    #[test]
    fn leading_int_skips_leading_whitespace() {
        assert_eq!(parse_leading_int("  2"), Some(2));
        assert_eq!(parse_leading_int("\t4"), Some(4));
    }

    #[test]
    fn leading_int_handles_signs() {
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("-1"), Some(-1));
    }

    #[test]
    fn leading_int_rejects_no_digits() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(".5"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn leading_int_leading_zeros() {
        assert_eq!(parse_leading_int("05"), Some(5));
    }

    #[test]
    fn leading_int_overflow_is_none() {
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(parse_rating("1"), Some(1));
        assert_eq!(parse_rating("5"), Some(5));
        assert_eq!(parse_rating("0"), None);
        assert_eq!(parse_rating("6"), None);
    }

    #[test]
    fn rating_fractional_truncates() {
        assert_eq!(parse_rating("3.9"), Some(3));
    }

    #[test]
    fn rating_negative_is_invalid() {
        assert_eq!(parse_rating("-1"), None);
    }

    #[test]
    fn rating_non_numeric_is_invalid() {
        assert_eq!(parse_rating("abc"), None);
        assert_eq!(parse_rating(""), None);
    }
}

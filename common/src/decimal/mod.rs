//! Numeric types and lenient coercion for vendor payloads
//!
//! The vendor reports every number as a string. Missing or malformed values
//! collapse to zero, and a value with trailing garbage keeps its leading
//! numeric prefix (`"1234abc"` reads as 1234).

use std::str::FromStr;

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Whole-won price or amount
pub type Won = i64;

/// Percentage rate (e.g. daily change rate)
pub type Rate = Decimal;

/// Portfolio or holding weight, in percent
pub type Weight = Decimal;

/// Coercion helpers
pub mod coerce {
    use super::*;

    /// Parse the leading integer of `raw`, ignoring leading whitespace.
    ///
    /// Returns `None` when no digit follows the optional sign. A digit run
    /// too long for `i64` saturates at `i64::MAX` or `i64::MIN`.
    pub fn parse_int_prefix(raw: &str) -> Option<i64> {
        let s = raw.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = digits.bytes().take_while(u8::is_ascii_digit).count();
        if end == 0 {
            return None;
        }
        let signed = if negative { &s[..end + 1] } else { &digits[..end] };
        Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
    }

    /// Parse the leading decimal number of `raw` (`[+-]digits[.digits]`).
    pub fn parse_decimal_prefix(raw: &str) -> Option<Decimal> {
        let s = raw.trim_start();
        let bytes = s.as_bytes();
        let negative = bytes.first() == Some(&b'-');
        let start = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));

        let int_len = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
        let int_part = &s[start..start + int_len];

        let mut frac_part = "";
        let dot = start + int_len;
        if bytes.get(dot) == Some(&b'.') {
            let frac_len = bytes[dot + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
            frac_part = &s[dot + 1..dot + 1 + frac_len];
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let normalized = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if int_part.is_empty() { "0" } else { int_part },
            if frac_part.is_empty() { "0" } else { frac_part },
        );
        Decimal::from_str(&normalized).ok().map(|d| d.normalize())
    }

    /// Integer value of an optional vendor field, zero when absent or unparseable
    pub fn int_or_zero(raw: Option<&str>) -> i64 {
        raw.and_then(parse_int_prefix).unwrap_or(0)
    }

    /// Decimal value of an optional vendor field, zero when absent or unparseable
    pub fn decimal_or_zero(raw: Option<&str>) -> Decimal {
        raw.and_then(parse_decimal_prefix).unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::coerce::*;
    use super::*;

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("9850"), Some(9850));
        assert_eq!(parse_int_prefix("  -120"), Some(-120));
        assert_eq!(parse_int_prefix("+15"), Some(15));
        assert_eq!(parse_int_prefix("123.9"), Some(123));
        assert_eq!(parse_int_prefix("42abc"), Some(42));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(int_or_zero(Some("123456789012345678901234won")), i64::MAX);
    }

    #[test]
    fn test_decimal_prefix() {
        assert_eq!(parse_decimal_prefix("1.59"), Some(dec!(1.59)));
        assert_eq!(parse_decimal_prefix("-0.35"), Some(dec!(-0.35)));
        assert_eq!(parse_decimal_prefix(".5"), Some(dec!(0.5)));
        assert_eq!(parse_decimal_prefix("12."), Some(dec!(12)));
        assert_eq!(parse_decimal_prefix("12345.67xyz"), Some(dec!(12345.67)));
        assert_eq!(parse_decimal_prefix("n/a"), None);
        assert_eq!(parse_decimal_prefix("."), None);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        assert_eq!(int_or_zero(None), 0);
        assert_eq!(int_or_zero(Some("")), 0);
        assert_eq!(decimal_or_zero(None), Decimal::ZERO);
        assert_eq!(decimal_or_zero(Some("--1")), Decimal::ZERO);
    }
}

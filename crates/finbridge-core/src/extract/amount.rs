use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a monetary or numeric field tolerant of the markers OCR text tends
/// to carry: currency symbols, "Rs" prefixes, comma digit grouping and
/// stray whitespace.
///
/// - "₹ 5,00,000" -> 500000
/// - "300000" -> 300000
/// - "9.2" -> 9.2
///
/// Returns `None` when nothing parseable remains; callers treat that as a
/// missing field, never as an error.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let mut cleaned = s.trim().to_string();
    for marker in ["₹", "Rs.", "Rs", "INR"] {
        cleaned = cleaned.replace(marker, "");
    }
    let cleaned: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount("300000"), Some(dec!(300000)));
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(parse_amount("9.2"), Some(dec!(9.2)));
    }

    #[test]
    fn test_rupee_symbol_and_grouping() {
        assert_eq!(parse_amount("₹ 5,00,000"), Some(dec!(500000)));
    }

    #[test]
    fn test_rs_prefix() {
        assert_eq!(parse_amount("Rs. 42,000"), Some(dec!(42000)));
    }

    #[test]
    fn test_empty_returns_none() {
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn test_garbage_returns_none() {
        assert_eq!(parse_amount("not-a-number"), None);
    }
}

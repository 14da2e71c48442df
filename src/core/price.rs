use serde::{Deserialize, Serialize};

/// What an average does with a price that is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsablePrice {
    /// Count it as 0 and keep the average numeric.
    #[default]
    Zero,
    /// Let it turn the whole course average into NaN.
    Poison,
}

/// Parses price text the way it was typed into the form.
///
/// Blank text is 0. Returns `None` for anything that is not a finite
/// decimal number, hex and `Infinity` included.
pub fn parse_price(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Numeric value of `text` under `policy`.
pub fn price_value(text: &str, policy: UnparsablePrice) -> f64 {
    match parse_price(text) {
        Some(value) => value,
        None => {
            tracing::debug!("Unparsable price '{}' handled as {:?}", text, policy);
            match policy {
                UnparsablePrice::Zero => 0.0,
                UnparsablePrice::Poison => f64::NAN,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_plain_numbers() {
        assert_eq!(parse_price("50"), Some(50.0));
        assert_eq!(parse_price("12.75"), Some(12.75));
        assert_eq!(parse_price(" 80 "), Some(80.0));
        assert_eq!(parse_price("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_price_blank_is_zero() {
        assert_eq!(parse_price(""), Some(0.0));
        assert_eq!(parse_price("   "), Some(0.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("R50"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_price_is_decimal_only() {
        assert_eq!(parse_price("0x10"), None);
        assert_eq!(parse_price("Infinity"), None);
        assert_eq!(parse_price("-Infinity"), None);
        assert_eq!(price_value("0x10", UnparsablePrice::Zero), 0.0);
        assert!(price_value("Infinity", UnparsablePrice::Poison).is_nan());
    }

    #[test]
    fn test_price_value_policy() {
        assert_eq!(price_value("abc", UnparsablePrice::Zero), 0.0);
        assert!(price_value("abc", UnparsablePrice::Poison).is_nan());
        assert_eq!(price_value("42", UnparsablePrice::Poison), 42.0);
    }
}

//! Listing prices

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("invalid price {0:?}: must be a positive decimal number")]
    Invalid(String),
}

/// A listing price as a positive decimal string.
///
/// The stored string is the canonical form handed to the wallet layer, so
/// only plain decimal literals are accepted: digits with at most one dot,
/// surrounding whitespace dropped. Exponent forms and signs are rejected.
/// The parsed value is only used for derived marketplace statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn parse(raw: impl Into<String>) -> Result<Self, PriceError> {
        let raw = raw.into();
        let literal = raw.trim();
        if !is_plain_decimal(literal) {
            return Err(PriceError::Invalid(raw));
        }
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Self(literal.to_string())),
            _ => Err(PriceError::Invalid(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value for volume/trend statistics.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }
}

fn is_plain_decimal(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.matches('.').count() <= 1
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_decimals() {
        assert_eq!(Price::parse("0.001").unwrap().as_str(), "0.001");
        assert_eq!(Price::parse("42").unwrap().value(), 42.0);
    }

    #[test]
    fn canonical_form_is_the_trimmed_literal() {
        assert_eq!(Price::parse(" 0.5 ").unwrap().as_str(), "0.5");
        assert_eq!(Price::parse("0.5\n").unwrap().to_string(), "0.5");
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        for raw in ["0", "-1", "0.0", "abc", "", "NaN", "inf"] {
            assert!(Price::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_literal_numeric_forms() {
        for raw in ["1e-3", "1E3", "+1", "1.2.3", ".", "0x10"] {
            assert!(Price::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}

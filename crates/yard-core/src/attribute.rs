//! Sentinel-aware descriptive fields.
//!
//! The catalog encodes missing knowledge as the literal string `"unknown"`
//! inside otherwise typed fields (crew counts, costs, ratings). [`Attribute`]
//! decodes that sentinel once at deserialization time and re-encodes it
//! verbatim on serialization, so the raw catalog value is never lost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw sentinel used by the catalog for values nobody recorded.
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// A descriptive field that is either a known raw value or the catalog's
/// `unknown` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attribute {
    Known(String),
    #[default]
    Unknown,
}

impl Attribute {
    /// Decode a raw catalog value.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw == UNKNOWN_SENTINEL {
            Self::Unknown
        } else {
            Self::Known(raw.to_string())
        }
    }

    /// The known value, if any.
    #[must_use]
    pub fn known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The value exactly as the catalog sent it.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        match self {
            Self::Known(value) => value,
            Self::Unknown => UNKNOWN_SENTINEL,
        }
    }

    /// Parse the known value as a number, tolerating thousands separators
    /// (`"1,000,000"`). Returns `None` for `unknown` or non-numeric values.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = self.known()?;
        value.replace(',', "").trim().parse::<f64>().ok()
    }
}

impl From<String> for Attribute {
    fn from(raw: String) -> Self {
        if raw == UNKNOWN_SENTINEL {
            Self::Unknown
        } else {
            Self::Known(raw)
        }
    }
}

impl From<&str> for Attribute {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Attribute> for String {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Known(value) => value,
            Attribute::Unknown => UNKNOWN_SENTINEL.to_string(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_decodes_to_unknown() {
        let attribute: Attribute = serde_json::from_str("\"unknown\"").unwrap();
        assert!(attribute.is_unknown());
        assert_eq!(attribute.known(), None);
    }

    #[test]
    fn sentinel_is_preserved_verbatim_on_output() {
        let json = serde_json::to_string(&Attribute::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
        assert_eq!(Attribute::Unknown.to_string(), "unknown");
    }

    #[test]
    fn sentinel_match_is_exact() {
        assert_eq!(
            Attribute::from_raw("Unknown"),
            Attribute::Known("Unknown".to_string())
        );
        assert_eq!(Attribute::from_raw(""), Attribute::Known(String::new()));
    }

    #[test]
    fn numbers_parse_with_separators() {
        assert_eq!(Attribute::from_raw("1,000,000").as_number(), Some(1_000_000.0));
        assert_eq!(Attribute::from_raw("0.5").as_number(), Some(0.5));
        assert_eq!(Attribute::from_raw("30-165").as_number(), None);
        assert_eq!(Attribute::Unknown.as_number(), None);
    }
}

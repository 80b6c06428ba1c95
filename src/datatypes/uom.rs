//! Units of measure

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::full_match;
use crate::error::{ModelError, Result};
use crate::notify::{ToValue, Value};

static UOM_SYMBOL: OnceLock<Regex> = OnceLock::new();
static UOM_URI: OnceLock<Regex> = OnceLock::new();

/// Unit of measure: a bare symbol such as `m`, or a URI reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UomIdentifier {
    Symbol(String),
    Uri(String),
}

impl UomIdentifier {
    pub fn as_str(&self) -> &str {
        match self {
            UomIdentifier::Symbol(s) | UomIdentifier::Uri(s) => s,
        }
    }
}

impl fmt::Display for UomIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbol is tried first, so anything without a colon or whitespace is a symbol
impl FromStr for UomIdentifier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        if full_match(&UOM_SYMBOL, r"^[^: \n\r\t]+$", s) {
            Ok(UomIdentifier::Symbol(s.to_string()))
        } else if full_match(&UOM_URI, r"^([a-zA-Z][a-zA-Z0-9\-\+\.]*:|\.\./|\./|#).*$", s) {
            Ok(UomIdentifier::Uri(s.to_string()))
        } else {
            Err(ModelError::invalid_literal("UomIdentifier", s))
        }
    }
}

impl ToValue for UomIdentifier {
    fn to_value(&self) -> Value {
        Value::Text(self.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_wins() {
        assert_eq!(
            "m".parse::<UomIdentifier>().unwrap(),
            UomIdentifier::Symbol("m".into())
        );
        // relative path has no colon, so it is a symbol too
        assert!(matches!(
            "./units/m".parse::<UomIdentifier>().unwrap(),
            UomIdentifier::Symbol(_)
        ));
    }

    #[test]
    fn test_uri() {
        let uom: UomIdentifier = "urn:ogc:def:uom:EPSG::9001".parse().unwrap();
        assert!(matches!(uom, UomIdentifier::Uri(_)));
        assert!("1:x".parse::<UomIdentifier>().is_err());
        assert!("".parse::<UomIdentifier>().is_err());
    }
}

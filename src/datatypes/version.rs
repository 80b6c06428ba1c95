//! Resource version references

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{VersionActionTokens, XsdDateTime};
use crate::error::{ModelError, Result};
use crate::notify::{ToValue, Value};

/// Version of a resource: a symbolic action, a positive index or a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionType {
    Action(VersionActionTokens),
    Index(NonZeroU64),
    Timestamp(XsdDateTime),
}

impl VersionType {
    pub fn action(&self) -> Option<VersionActionTokens> {
        match self {
            VersionType::Action(token) => Some(*token),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<u64> {
        match self {
            VersionType::Index(n) => Some(n.get()),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> Option<XsdDateTime> {
        match self {
            VersionType::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionType::Action(token) => write!(f, "{}", token),
            VersionType::Index(n) => write!(f, "{}", n),
            VersionType::Timestamp(t) => write!(f, "{}", t),
        }
    }
}

/// Members are tried in order: action token, positive integer, dateTime
impl FromStr for VersionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(token) = s.parse::<VersionActionTokens>() {
            return Ok(VersionType::Action(token));
        }
        if let Ok(n) = s.parse::<NonZeroU64>() {
            return Ok(VersionType::Index(n));
        }
        s.parse::<XsdDateTime>()
            .map(VersionType::Timestamp)
            .map_err(|_| ModelError::invalid_literal("VersionType", s))
    }
}

impl From<VersionActionTokens> for VersionType {
    fn from(token: VersionActionTokens) -> Self {
        VersionType::Action(token)
    }
}

impl ToValue for VersionType {
    fn to_value(&self) -> Value {
        match self {
            VersionType::Timestamp(t) => Value::DateTime(*t),
            other => Value::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_order() {
        assert_eq!(
            "LAST".parse::<VersionType>().unwrap(),
            VersionType::Action(VersionActionTokens::Last)
        );
        assert_eq!("3".parse::<VersionType>().unwrap().index(), Some(3));
        let t = "2024-05-01T12:00:00Z".parse::<VersionType>().unwrap();
        assert!(t.timestamp().is_some());
        assert_eq!(t.to_string(), "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_zero_is_not_an_index() {
        assert!("0".parse::<VersionType>().is_err());
        assert!("latest".parse::<VersionType>().is_err());
    }

    #[test]
    fn test_unzoned_timestamp_round_trips() {
        for lexical in ["2024-05-01T12:00:00", "2024-05-01T12:00:00+02:00"] {
            let version = lexical.parse::<VersionType>().unwrap();
            assert_eq!(version.to_string(), lexical);
        }
        let local = "2024-05-01T12:00:00".parse::<VersionType>().unwrap();
        assert!(!local.timestamp().unwrap().is_zoned());
    }
}

//! `xsd:dateTime` values

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::notify::{ToValue, Value};

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// An `xsd:dateTime`, with or without a zone offset.
///
/// A value read without an offset stays unzoned and is written back the
/// same way; it is not an instant and is never compared as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XsdDateTime {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl XsdDateTime {
    pub fn is_zoned(&self) -> bool {
        matches!(self, XsdDateTime::Zoned(_))
    }

    pub fn zoned(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            XsdDateTime::Zoned(t) => Some(*t),
            XsdDateTime::Local(_) => None,
        }
    }

    /// Wall-clock fields as written, offset dropped
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            XsdDateTime::Zoned(t) => t.naive_local(),
            XsdDateTime::Local(t) => *t,
        }
    }
}

impl FromStr for XsdDateTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(t) = DateTime::parse_from_rfc3339(s) {
            return Ok(XsdDateTime::Zoned(t));
        }
        NaiveDateTime::parse_from_str(s, LOCAL_FORMAT)
            .map(XsdDateTime::Local)
            .map_err(|_| ModelError::invalid_literal("dateTime", s))
    }
}

impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XsdDateTime::Zoned(t) => {
                write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            XsdDateTime::Local(t) => write!(f, "{}", t.format(LOCAL_FORMAT)),
        }
    }
}

impl From<DateTime<FixedOffset>> for XsdDateTime {
    fn from(t: DateTime<FixedOffset>) -> Self {
        XsdDateTime::Zoned(t)
    }
}

impl From<NaiveDateTime> for XsdDateTime {
    fn from(t: NaiveDateTime) -> Self {
        XsdDateTime::Local(t)
    }
}

impl ToValue for XsdDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

/// Parse an `xsd:dateTime`, keeping a missing offset as unzoned
pub fn parse_date_time(s: &str) -> Result<XsdDateTime> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unzoned_stays_unzoned() {
        let t = parse_date_time("2024-05-01T12:00:00").unwrap();
        assert!(!t.is_zoned());
        assert_eq!(t.zoned(), None);
        assert_eq!(t.to_string(), "2024-05-01T12:00:00");
    }

    #[test]
    fn test_offsets_are_kept() {
        let utc = parse_date_time("2024-05-01T12:00:00Z").unwrap();
        assert_eq!(utc.to_string(), "2024-05-01T12:00:00Z");

        let east = parse_date_time("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(east.zoned().unwrap().offset().local_minus_utc(), 7200);
        assert_eq!(east.to_string(), "2024-05-01T12:00:00+02:00");
        assert_eq!(east.naive(), utc.naive());
        assert_ne!(east, utc);
    }

    #[test]
    fn test_fraction_round_trip() {
        let t = parse_date_time("2024-05-01T12:00:00.250").unwrap();
        assert_eq!(t.to_string(), "2024-05-01T12:00:00.250");
        assert!(parse_date_time("2024-05-01").is_err());
    }
}

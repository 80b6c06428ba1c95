//! FES enumerations and operator name unions

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::full_match;
use crate::error::{ModelError, Result};
use crate::notify::{ToValue, Value};

// =============================================================================
// Enumerations
// =============================================================================

lexical_enum! {
    /// How a comparison treats multi-valued operands
    MatchActionType as "MatchActionType" {
        All => "All",
        Any => "Any",
        One => "One",
    }
}

lexical_enum! {
    /// Direction of one sort key
    SortOrderType as "SortOrderType" {
        Desc => "DESC",
        Asc => "ASC",
    }
}

lexical_enum! {
    /// Symbolic version references of a resource id
    VersionActionTokens as "VersionActionTokens" {
        First => "FIRST",
        Last => "LAST",
        Previous => "PREVIOUS",
        Next => "NEXT",
        All => "ALL",
    }
}

lexical_enum! {
    /// Standard comparison operator names
    ComparisonOperator as "ComparisonOperatorNameType" {
        PropertyIsEqualTo => "PropertyIsEqualTo",
        PropertyIsNotEqualTo => "PropertyIsNotEqualTo",
        PropertyIsLessThan => "PropertyIsLessThan",
        PropertyIsGreaterThan => "PropertyIsGreaterThan",
        PropertyIsLessThanOrEqualTo => "PropertyIsLessThanOrEqualTo",
        PropertyIsGreaterThanOrEqualTo => "PropertyIsGreaterThanOrEqualTo",
        PropertyIsLike => "PropertyIsLike",
        PropertyIsNull => "PropertyIsNull",
        PropertyIsNil => "PropertyIsNil",
        PropertyIsBetween => "PropertyIsBetween",
    }
}

lexical_enum! {
    /// Standard spatial operator names
    SpatialOperator as "SpatialOperatorNameType" {
        Bbox => "BBOX",
        Equals => "Equals",
        Disjoint => "Disjoint",
        Intersects => "Intersects",
        Touches => "Touches",
        Crosses => "Crosses",
        Within => "Within",
        Contains => "Contains",
        Overlaps => "Overlaps",
        Beyond => "Beyond",
        DWithin => "DWithin",
    }
}

lexical_enum! {
    /// Standard temporal operator names
    TemporalOperator as "TemporalOperatorNameType" {
        After => "After",
        Before => "Before",
        Begins => "Begins",
        BegunBy => "BegunBy",
        TContains => "TContains",
        During => "During",
        TEquals => "TEquals",
        TOverlaps => "TOverlaps",
        Meets => "Meets",
        OverlappedBy => "OverlappedBy",
        MetBy => "MetBy",
        Ends => "Ends",
        EndedBy => "EndedBy",
    }
}

impl Default for MatchActionType {
    fn default() -> Self {
        MatchActionType::Any
    }
}

impl Default for SortOrderType {
    fn default() -> Self {
        SortOrderType::Desc
    }
}

// =============================================================================
// Operator name unions
// =============================================================================

/// A closed set of standard operator names that can be extended by
/// `extension:` names in capabilities documents
pub trait StandardOperator: Copy + fmt::Display + FromStr<Err = ModelError> {
    /// Schema name of the union type
    const NAME_TYPE: &'static str;
}

impl StandardOperator for ComparisonOperator {
    const NAME_TYPE: &'static str = "ComparisonOperatorNameType";
}

impl StandardOperator for SpatialOperator {
    const NAME_TYPE: &'static str = "SpatialOperatorNameType";
}

impl StandardOperator for TemporalOperator {
    const NAME_TYPE: &'static str = "TemporalOperatorNameType";
}

/// Either a standard operator or a vendor extension name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperatorName<T> {
    Standard(T),
    /// `extension:` followed by at least two word characters
    Extension(String),
}

pub type ComparisonOperatorName = OperatorName<ComparisonOperator>;
pub type SpatialOperatorName = OperatorName<SpatialOperator>;
pub type TemporalOperatorName = OperatorName<TemporalOperator>;

static EXTENSION_NAME: OnceLock<Regex> = OnceLock::new();

impl<T: StandardOperator> OperatorName<T> {
    pub fn standard(&self) -> Option<T> {
        match self {
            OperatorName::Standard(op) => Some(*op),
            OperatorName::Extension(_) => None,
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, OperatorName::Extension(_))
    }

    /// Extension name, checked against the `extension:` pattern
    pub fn extension(name: &str) -> Result<Self> {
        if is_extension_name(name) {
            Ok(OperatorName::Extension(name.to_string()))
        } else {
            Err(ModelError::invalid_literal(T::NAME_TYPE, name))
        }
    }
}

fn is_extension_name(name: &str) -> bool {
    full_match(&EXTENSION_NAME, r"^extension:\w{2,}$", name)
}

impl<T> From<T> for OperatorName<T> {
    fn from(op: T) -> Self {
        OperatorName::Standard(op)
    }
}

impl<T: StandardOperator> fmt::Display for OperatorName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorName::Standard(op) => op.fmt(f),
            OperatorName::Extension(name) => f.write_str(name),
        }
    }
}

/// Standard names are tried first, then the extension pattern
impl<T: StandardOperator> FromStr for OperatorName<T> {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<T>() {
            Ok(op) => Ok(OperatorName::Standard(op)),
            Err(_) => Self::extension(s),
        }
    }
}

impl<T: StandardOperator> ToValue for OperatorName<T> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_literals_round_trip() {
        for op in SpatialOperator::VALUES {
            let parsed: SpatialOperator = op.as_str().parse().unwrap();
            assert_eq!(parsed, *op);
        }
        assert_eq!(TemporalOperator::VALUES.len(), 13);
        assert_eq!(ComparisonOperator::VALUES.len(), 10);
    }

    #[test]
    fn test_sort_order_lexical() {
        assert_eq!("DESC".parse::<SortOrderType>().unwrap(), SortOrderType::Desc);
        assert!("desc".parse::<SortOrderType>().is_err());
        assert_eq!(SortOrderType::Asc.to_string(), "ASC");
    }

    #[test]
    fn test_operator_name_union() {
        let std_name: ComparisonOperatorName = "PropertyIsLike".parse().unwrap();
        assert_eq!(std_name.standard(), Some(ComparisonOperator::PropertyIsLike));

        let ext: SpatialOperatorName = "extension:Near".parse().unwrap();
        assert!(ext.is_extension());
        assert_eq!(ext.to_string(), "extension:Near");

        let err = "extension:x".parse::<TemporalOperatorName>().unwrap_err();
        assert!(err.to_string().contains("TemporalOperatorNameType"));
    }
}

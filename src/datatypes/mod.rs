//! Datatypes
//!
//! XML qualified names and the FES simple types: enumerations, operator
//! name unions, version references, units of measure and type name lists.
//! Every type parses from and formats to its XML lexical form.

use std::sync::OnceLock;

use regex::Regex;

/// Full match of `value` against an anchored built-in pattern
pub(crate) fn full_match(cell: &'static OnceLock<Regex>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).unwrap()).is_match(value)
}

/// Closed enumeration with a fixed lexical form per literal
macro_rules! lexical_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $datatype:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every literal, in schema order
            pub const VALUES: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ModelError;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    _ => Err(crate::error::ModelError::invalid_literal($datatype, s)),
                }
            }
        }

        impl crate::notify::ToValue for $name {
            fn to_value(&self) -> crate::notify::Value {
                crate::notify::Value::Text(self.as_str().to_string())
            }
        }
    };
}

pub(crate) use lexical_enum;

mod date_time;
mod operators;
mod qname;
mod type_names;
mod uom;
mod version;

pub use date_time::{parse_date_time, XsdDateTime};
pub use operators::{
    ComparisonOperator, ComparisonOperatorName, MatchActionType, OperatorName, SortOrderType,
    SpatialOperator, SpatialOperatorName, StandardOperator, TemporalOperator,
    TemporalOperatorName, VersionActionTokens,
};
pub use qname::{is_ncname, QName};
pub use type_names::{format_list, parse_aliases, parse_type_names, TypeName};
pub use uom::UomIdentifier;
pub use version::VersionType;

//! Query type names and alias lists

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{is_ncname, QName};
use crate::error::{ModelError, Result};
use crate::model::{Contained, Record};
use crate::notify::{ToValue, Value};

static SCHEMA_ELEMENT: OnceLock<Regex> = OnceLock::new();

/// One entry of a `typeNames` list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    /// `schema-element(...)`, holding the text between the parentheses
    SchemaElement(String),
    QName(QName),
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::SchemaElement(inner) => write!(f, "schema-element({inner})"),
            TypeName::QName(q) => q.fmt(f),
        }
    }
}

impl FromStr for TypeName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let pattern = SCHEMA_ELEMENT
            .get_or_init(|| Regex::new(r"^schema\-element\((.+)\)$").unwrap());
        if let Some(caps) = pattern.captures(s) {
            return Ok(TypeName::SchemaElement(caps[1].to_string()));
        }
        s.parse::<QName>()
            .map(TypeName::QName)
            .map_err(|_| ModelError::invalid_literal("TypeNamesType", s))
    }
}

impl From<QName> for TypeName {
    fn from(q: QName) -> Self {
        TypeName::QName(q)
    }
}

impl ToValue for TypeName {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Contained for TypeName {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// Parse a whitespace-separated `TypeNamesListType`
pub fn parse_type_names(s: &str) -> Result<Vec<TypeName>> {
    s.split_whitespace().map(str::parse).collect()
}

/// Parse a whitespace-separated `AliasesType`
pub fn parse_aliases(s: &str) -> Result<Vec<String>> {
    s.split_whitespace()
        .map(|alias| {
            if is_ncname(alias) {
                Ok(alias.to_string())
            } else {
                Err(ModelError::invalid_literal("AliasesType", alias))
            }
        })
        .collect()
}

/// Format any list datatype: items joined by single spaces
pub fn format_list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_element_tried_first() {
        let names = parse_type_names("schema-element(app:Road)  app:River").unwrap();
        assert_eq!(names[0], TypeName::SchemaElement("app:Road".into()));
        assert!(matches!(&names[1], TypeName::QName(q) if q.local_part() == "River"));
        assert_eq!(format_list(&names), "schema-element(app:Road) app:River");
    }

    #[test]
    fn test_bad_entries() {
        assert!(parse_type_names("app:Road 9x").is_err());
        assert!(parse_aliases("a b:c").is_err());
        assert_eq!(parse_aliases(" a  b ").unwrap(), vec!["a", "b"]);
    }
}

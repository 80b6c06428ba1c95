//! XML qualified names

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::model::{Contained, Record};

/// An XML qualified name.
///
/// Equality and hashing use the namespace URI and local part only; the
/// prefix is kept for formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QName {
    namespace_uri: String,
    local_part: String,
    prefix: String,
}

impl QName {
    pub fn new(namespace_uri: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
            prefix: String::new(),
        }
    }

    pub fn with_prefix(
        namespace_uri: impl Into<String>,
        local_part: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
            prefix: prefix.into(),
        }
    }

    /// Name without namespace
    pub fn local(local_part: impl Into<String>) -> Self {
        Self::new("", local_part)
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `{namespace}local`, or just `local` without a namespace
    pub fn to_clark(&self) -> String {
        if self.namespace_uri.is_empty() {
            self.local_part.clone()
        } else {
            format!("{{{}}}{}", self.namespace_uri, self.local_part)
        }
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace_uri == other.namespace_uri && self.local_part == other.local_part
    }
}

impl Eq for QName {}

impl Hash for QName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace_uri.hash(state);
        self.local_part.hash(state);
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            f.write_str(&self.local_part)
        } else {
            write!(f, "{}:{}", self.prefix, self.local_part)
        }
    }
}

/// Parses `prefix:local`, `local` or Clark notation `{namespace}local`.
///
/// A prefix is kept as written; resolving it to a namespace needs the
/// in-scope declarations of the document and is left to the caller.
impl FromStr for QName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ModelError::invalid_literal("QName", s);

        if let Some(rest) = s.strip_prefix('{') {
            let (namespace, local) = rest.split_once('}').ok_or_else(invalid)?;
            if !is_ncname(local) {
                return Err(invalid());
            }
            return Ok(QName::new(namespace, local));
        }

        match s.split_once(':') {
            Some((prefix, local)) if is_ncname(prefix) && is_ncname(local) => {
                Ok(QName::with_prefix("", local, prefix))
            }
            None if is_ncname(s) => Ok(QName::local(s)),
            _ => Err(invalid()),
        }
    }
}

impl Contained for QName {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// XML non-colonised name check
pub fn is_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed() {
        let q: QName = "gml:Point".parse().unwrap();
        assert_eq!(q.prefix(), "gml");
        assert_eq!(q.local_part(), "Point");
        assert_eq!(q.to_string(), "gml:Point");
    }

    #[test]
    fn test_parse_clark() {
        let q: QName = "{http://www.opengis.net/gml/3.2}Envelope".parse().unwrap();
        assert_eq!(q.namespace_uri(), "http://www.opengis.net/gml/3.2");
        assert_eq!(q.local_part(), "Envelope");
        assert_eq!(q.to_clark(), "{http://www.opengis.net/gml/3.2}Envelope");
    }

    #[test]
    fn test_prefix_ignored_in_equality() {
        let a = QName::with_prefix("urn:x", "A", "p");
        let b = QName::with_prefix("urn:x", "A", "q");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!("".parse::<QName>().is_err());
        assert!("1abc".parse::<QName>().is_err());
        assert!("a:b:c".parse::<QName>().is_err());
        assert!("{urn:x".parse::<QName>().is_err());
    }
}

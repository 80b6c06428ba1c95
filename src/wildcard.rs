//! Wildcard content
//!
//! Elements matched by `xsd:any` (geometries, extension operators, OWS
//! metadata, projection clauses) are kept opaquely: name, attributes in
//! document order, and child content. Mixed-content slots hold an ordered
//! run of [`MixedEntry`] values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::datatypes::QName;
use crate::model::{Contained, Record};
use crate::notify::{ToValue, Value};

/// An element retained without interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnyElement {
    pub name: QName,
    /// Attributes by lexical name, in document order
    pub attributes: IndexMap<String, String>,
    pub content: Vec<MixedEntry>,
}

impl AnyElement {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: IndexMap::new(),
            content: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(MixedEntry::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: AnyElement) -> Self {
        self.content.push(MixedEntry::Element(child));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated character data of this element and its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.content, &mut out);
        out
    }

    pub fn children(&self) -> impl Iterator<Item = &AnyElement> {
        self.content.iter().filter_map(MixedEntry::as_element)
    }
}

fn collect_text(entries: &[MixedEntry], out: &mut String) {
    for entry in entries {
        match entry {
            MixedEntry::Text(t) | MixedEntry::CData(t) => out.push_str(t),
            MixedEntry::Element(e) => collect_text(&e.content, out),
            MixedEntry::Comment(_) => {}
        }
    }
}

/// One entry of mixed content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MixedEntry {
    Text(String),
    CData(String),
    Comment(String),
    Element(AnyElement),
}

impl MixedEntry {
    pub fn tag(&self) -> &'static str {
        match self {
            MixedEntry::Text(_) => "text",
            MixedEntry::CData(_) => "cdata",
            MixedEntry::Comment(_) => "comment",
            MixedEntry::Element(_) => "element",
        }
    }

    pub fn as_element(&self) -> Option<&AnyElement> {
        match self {
            MixedEntry::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MixedEntry::Text(t) | MixedEntry::CData(t) => Some(t),
            _ => None,
        }
    }
}

impl ToValue for AnyElement {
    fn to_value(&self) -> Value {
        Value::QName(self.name.clone())
    }
}

impl ToValue for MixedEntry {
    fn to_value(&self) -> Value {
        let inner = match self {
            MixedEntry::Text(t) | MixedEntry::CData(t) | MixedEntry::Comment(t) => {
                Value::Text(t.clone())
            }
            MixedEntry::Element(e) => e.to_value(),
        };
        Value::entry(self.tag(), inner)
    }
}

impl Contained for AnyElement {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

impl Contained for MixedEntry {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_kept() {
        let name = QName::with_prefix("http://www.opengis.net/gml/3.2", "Envelope", "gml");
        let e = AnyElement::new(name)
            .with_attribute("srsName", "urn:ogc:def:crs:EPSG::4326")
            .with_attribute("srsDimension", "2");
        let keys: Vec<_> = e.attributes.keys().cloned().collect();
        assert_eq!(keys, vec!["srsName", "srsDimension"]);
    }

    #[test]
    fn test_text_collects_descendants() {
        let lower = AnyElement::new(QName::local("lowerCorner")).with_text("0 0");
        let env = AnyElement::new(QName::local("Envelope"))
            .with_child(lower)
            .with_text(" ");
        assert_eq!(env.text(), "0 0 ");
        assert_eq!(env.children().count(), 1);
    }
}

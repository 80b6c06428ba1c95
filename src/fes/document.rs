//! Document root: namespace declarations plus one FES global element

use indexmap::IndexMap;

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::QName;
use crate::fes::capabilities::{FilterCapabilitiesType, LogicalOperatorsType};
use crate::fes::expression::Expression;
use crate::fes::filter::FilterType;
use crate::fes::predicate::FilterPredicate;
use crate::fes::query::AdhocQueryExpressionType;
use crate::fes::sort::SortByType;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, ChildMut, Contained, ContainmentListMut, ObjectHeader,
    Record,
};
use crate::notify::{ChangeKind, Feature, Notification, ToValue, Value};
use crate::wildcard::MixedEntry;

/// The global element a document carries
#[derive(Debug, PartialEq)]
pub enum RootElement {
    Filter(FilterType),
    SortBy(SortByType),
    FilterCapabilities(FilterCapabilitiesType),
    LogicalOperators(LogicalOperatorsType),
    /// Any operator element, e.g. a bare `PropertyIsEqualTo`
    Predicate(FilterPredicate),
    /// Any expression element, e.g. a bare `Literal`
    Expression(Expression),
    AdhocQueryExpression(AdhocQueryExpressionType),
}

impl RootElement {
    pub fn element_name(&self) -> &str {
        match self {
            RootElement::Filter(_) => "Filter",
            RootElement::SortBy(_) => "SortBy",
            RootElement::FilterCapabilities(_) => "Filter_Capabilities",
            RootElement::LogicalOperators(_) => "LogicalOperators",
            RootElement::Predicate(p) => p.element_name(),
            RootElement::Expression(e) => e.element_name(),
            RootElement::AdhocQueryExpression(_) => "AbstractAdhocQueryExpression",
        }
    }
}

impl ToValue for RootElement {
    fn to_value(&self) -> Value {
        match self {
            RootElement::Filter(f) => Value::entry("Filter", f.to_value()),
            RootElement::SortBy(s) => Value::entry("SortBy", s.to_value()),
            RootElement::FilterCapabilities(c) => {
                Value::entry("Filter_Capabilities", c.to_value())
            }
            RootElement::LogicalOperators(l) => Value::entry("LogicalOperators", l.to_value()),
            RootElement::Predicate(p) => p.to_value(),
            RootElement::Expression(e) => e.to_value(),
            RootElement::AdhocQueryExpression(q) => {
                Value::entry("AbstractAdhocQueryExpression", q.to_value())
            }
        }
    }
}

impl Contained for RootElement {
    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            RootElement::Filter(f) => Some(f),
            RootElement::SortBy(s) => Some(s),
            RootElement::FilterCapabilities(c) => Some(c),
            RootElement::LogicalOperators(l) => Some(l),
            RootElement::Predicate(p) => Some(p.record()),
            RootElement::Expression(e) => e.as_record(),
            RootElement::AdhocQueryExpression(q) => Some(q),
        }
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            RootElement::Filter(f) => Some(f),
            RootElement::SortBy(s) => Some(s),
            RootElement::FilterCapabilities(c) => Some(c),
            RootElement::LogicalOperators(l) => Some(l),
            RootElement::Predicate(p) => Some(p.record_mut()),
            RootElement::Expression(e) => e.as_record_mut(),
            RootElement::AdhocQueryExpression(q) => Some(q),
        }
    }
}

/// Top of a parsed FES document.
///
/// Holds the mixed content around the root element, the namespace
/// declarations in document order and the `xsi:schemaLocation` pairs.
#[derive(Debug, PartialEq)]
pub struct DocumentRoot {
    header: ObjectHeader,
    mixed: Vec<MixedEntry>,
    xmlns_prefix_map: IndexMap<String, String>,
    schema_location: IndexMap<String, String>,
    root: Option<RootElement>,
}

impl DocumentRoot {
    pub const KIND: &'static str = "DocumentRoot";
    pub const MIXED: Feature = Feature::new(Self::KIND, "mixed");
    pub const XMLNS_PREFIX_MAP: Feature = Feature::new(Self::KIND, "xmlns_prefix_map");
    pub const SCHEMA_LOCATION: Feature = Feature::new(Self::KIND, "schema_location");
    pub const ROOT: Feature = Feature::new(Self::KIND, "root");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            mixed: Vec::new(),
            xmlns_prefix_map: IndexMap::new(),
            schema_location: IndexMap::new(),
            root: None,
        }
    }

    /// Document with `fes` bound to the FES namespace and the given root
    pub fn with_root(root: RootElement) -> Self {
        let mut doc = Self::new();
        doc.xmlns_prefix_map
            .insert("fes".to_string(), FES_NAMESPACE.to_string());
        doc.set_root(Some(root));
        doc
    }

    pub fn mixed(&self) -> &[MixedEntry] {
        &self.mixed
    }

    pub fn mixed_mut(&mut self) -> ContainmentListMut<'_, MixedEntry> {
        ContainmentListMut::new(&self.header, Self::MIXED, &mut self.mixed)
    }

    pub fn xmlns_prefix_map(&self) -> &IndexMap<String, String> {
        &self.xmlns_prefix_map
    }

    /// Bind `prefix` to `namespace`; returns the namespace it was bound to before
    pub fn declare_prefix(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        put_entry(
            &self.header,
            Self::XMLNS_PREFIX_MAP,
            &mut self.xmlns_prefix_map,
            prefix.into(),
            namespace.into(),
        )
    }

    pub fn namespace_for(&self, prefix: &str) -> Option<&str> {
        self.xmlns_prefix_map.get(prefix).map(String::as_str)
    }

    /// Fill in the namespace of a prefixed name from the declarations.
    /// `None` when the prefix is not declared.
    pub fn resolve(&self, name: &QName) -> Option<QName> {
        let namespace = self.namespace_for(name.prefix())?;
        Some(QName::with_prefix(namespace, name.local_part(), name.prefix()))
    }

    /// Namespace to schema document pairs of `xsi:schemaLocation`
    pub fn schema_location(&self) -> &IndexMap<String, String> {
        &self.schema_location
    }

    pub fn add_schema_location(
        &mut self,
        namespace: impl Into<String>,
        location: impl Into<String>,
    ) -> Option<String> {
        put_entry(
            &self.header,
            Self::SCHEMA_LOCATION,
            &mut self.schema_location,
            namespace.into(),
            location.into(),
        )
    }

    /// `xsi:schemaLocation` in its lexical form
    pub fn schema_location_lexical(&self) -> String {
        self.schema_location
            .iter()
            .map(|(ns, loc)| format!("{ns} {loc}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn root(&self) -> Option<&RootElement> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<ChildMut<'_, RootElement>> {
        child_mut(&self.header, Self::ROOT, &mut self.root)
    }

    pub fn set_root(&mut self, value: Option<RootElement>) -> Option<RootElement> {
        replace_child(&self.header, Self::ROOT, &mut self.root, value)
    }

    pub fn filter(&self) -> Option<&FilterType> {
        match self.root.as_ref()? {
            RootElement::Filter(f) => Some(f),
            _ => None,
        }
    }

    pub fn sort_by(&self) -> Option<&SortByType> {
        match self.root.as_ref()? {
            RootElement::SortBy(s) => Some(s),
            _ => None,
        }
    }

    pub fn filter_capabilities(&self) -> Option<&FilterCapabilitiesType> {
        match self.root.as_ref()? {
            RootElement::FilterCapabilities(c) => Some(c),
            _ => None,
        }
    }

    pub fn predicate(&self) -> Option<&FilterPredicate> {
        match self.root.as_ref()? {
            RootElement::Predicate(p) => Some(p),
            _ => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self.root.as_ref()? {
            RootElement::Expression(e) => Some(e),
            _ => None,
        }
    }

    pub fn adhoc_query_expression(&self) -> Option<&AdhocQueryExpressionType> {
        match self.root.as_ref()? {
            RootElement::AdhocQueryExpression(q) => Some(q),
            _ => None,
        }
    }
}

/// Insert or overwrite a map entry. New keys notify `Add` at their
/// position, overwrites notify `Set`.
fn put_entry(
    header: &ObjectHeader,
    feature: Feature,
    map: &mut IndexMap<String, String>,
    key: String,
    value: String,
) -> Option<String> {
    let (index, old) = map.insert_full(key, value);
    header.notify(|notifier| {
        let (kind, old_value) = match &old {
            Some(previous) => (ChangeKind::Set, Value::Text(previous.clone())),
            None => (ChangeKind::Add, Value::None),
        };
        Notification::new(notifier, feature, kind, old_value, Value::Text(map[index].clone()))
            .at(index)
    });
    old
}

impl_record!(DocumentRoot, DOCUMENT_ROOT_INFO, [one ROOT => root]);

pub(crate) static DOCUMENT_ROOT_INFO: TypeInfo = TypeInfo {
    name: DocumentRoot::KIND,
    xml_name: "DocumentRoot",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(DocumentRoot::MIXED, ":mixed", FeatureKind::Mixed, "MixedEntry").many(),
        FeatureInfo::new(
            DocumentRoot::XMLNS_PREFIX_MAP,
            "xmlns:prefix",
            FeatureKind::Attribute,
            "StringToStringMapEntry",
        )
        .many(),
        FeatureInfo::new(
            DocumentRoot::SCHEMA_LOCATION,
            "xsi:schemaLocation",
            FeatureKind::Attribute,
            "StringToStringMapEntry",
        )
        .many(),
        FeatureInfo::new(DocumentRoot::ROOT, "root", FeatureKind::Group, "RootElement"),
    ],
};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::fes::predicate::ResourceIdType;
    use crate::notify::ChangeRecorder;

    #[test]
    fn test_typed_root_getters() {
        let doc = DocumentRoot::with_root(RootElement::Filter(FilterType::with_predicate(
            ResourceIdType::with_rid("a"),
        )));
        assert!(doc.filter().is_some());
        assert!(doc.sort_by().is_none());
        assert_eq!(doc.root().unwrap().element_name(), "Filter");
        assert_eq!(doc.filter().unwrap().container().unwrap().parent, doc.object_ref());
        assert_eq!(doc.namespace_for("fes"), Some(FES_NAMESPACE));
    }

    #[test]
    fn test_declare_prefix_notifies() {
        let mut doc = DocumentRoot::new();
        let recorder = Arc::new(ChangeRecorder::new());
        doc.add_observer(recorder.clone());

        assert_eq!(doc.declare_prefix("app", "urn:app"), None);
        assert_eq!(doc.declare_prefix("gml", "urn:gml"), None);
        assert_eq!(doc.declare_prefix("app", "urn:app2"), Some("urn:app".to_string()));

        let seen = recorder.take();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].kind, ChangeKind::Add);
        assert_eq!(seen[1].position, Some(1));
        assert_eq!(seen[2].kind, ChangeKind::Set);
        assert_eq!(seen[2].position, Some(0));

        let resolved = doc.resolve(&"app:Road".parse().unwrap()).unwrap();
        assert_eq!(resolved.namespace_uri(), "urn:app2");
        assert!(doc.resolve(&"xx:Road".parse().unwrap()).is_none());
    }

    #[test]
    fn test_schema_location_lexical() {
        let mut doc = DocumentRoot::new();
        let location = "http://schemas.opengis.net/filter/2.0/filterAll.xsd";
        assert_eq!(doc.add_schema_location(FES_NAMESPACE, location), None);
        assert_eq!(
            doc.schema_location_lexical(),
            "http://www.opengis.net/fes/2.0 http://schemas.opengis.net/filter/2.0/filterAll.xsd"
        );
    }
}

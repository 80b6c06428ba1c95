//! Type Catalog
//!
//! Static description of every record type: its XML name and, per feature,
//! the XML name, kind, cardinality, set-flag behaviour and lexical default.
//! A codec that maps the records to and from XML reads this catalog instead
//! of reflecting over the types, and can compare [`fingerprint`]s to check
//! that it was built against the same structure.

use serde::Serialize;

use crate::checksum::Checksum;
use crate::error::{ModelError, Result};
use crate::fes;
use crate::notify::Feature;

// =============================================================================
// Metadata types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureKind {
    /// XML attribute with a simple value
    Attribute,
    /// Child element with a simple value
    Element,
    /// Contained record
    Containment,
    /// Ordered choice of tagged alternatives
    Group,
    /// Opaque `xsd:any` content
    Wildcard,
    /// Interleaved text and elements
    Mixed,
}

/// One feature of a record type
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureInfo {
    pub feature: Feature,
    pub xml_name: &'static str,
    pub kind: FeatureKind,
    /// Schema datatype or record type of the value
    pub datatype: &'static str,
    pub lower: u32,
    /// `None` for unbounded
    pub upper: Option<u32>,
    pub unsettable: bool,
    pub default: Option<&'static str>,
}

impl FeatureInfo {
    /// Optional, single-valued feature
    pub const fn new(
        feature: Feature,
        xml_name: &'static str,
        kind: FeatureKind,
        datatype: &'static str,
    ) -> Self {
        Self {
            feature,
            xml_name,
            kind,
            datatype,
            lower: 0,
            upper: Some(1),
            unsettable: false,
            default: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.lower = 1;
        self
    }

    pub const fn bounds(mut self, lower: u32, upper: Option<u32>) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub const fn many(mut self) -> Self {
        self.upper = None;
        self
    }

    /// Feature with an explicit set flag and a default reported while unset
    pub const fn unsettable(mut self, default: &'static str) -> Self {
        self.unsettable = true;
        self.default = Some(default);
        self
    }

    pub fn name(&self) -> &'static str {
        self.feature.name
    }

    pub fn is_many(&self) -> bool {
        self.upper.map_or(true, |u| u > 1)
    }

    /// `[lower..upper]` with `*` for unbounded
    pub fn cardinality(&self) -> String {
        match self.upper {
            Some(u) => format!("[{}..{}]", self.lower, u),
            None => format!("[{}..*]", self.lower),
        }
    }
}

/// One record type
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    /// Rust type name
    pub name: &'static str,
    /// Schema type name
    pub xml_name: &'static str,
    pub namespace: &'static str,
    pub features: &'static [FeatureInfo],
}

impl TypeInfo {
    /// Feature by Rust or XML name
    pub fn feature(&self, name: &str) -> Option<&'static FeatureInfo> {
        self.features
            .iter()
            .find(|f| f.feature.name == name || f.xml_name == name)
    }

    pub fn require_feature(&self, name: &str) -> Result<&'static FeatureInfo> {
        self.feature(name).ok_or_else(|| ModelError::UnknownFeature {
            owner: self.name.to_string(),
            feature: name.to_string(),
        })
    }
}

// =============================================================================
// Catalog
// =============================================================================

static TYPES: &[&TypeInfo] = &[
    // expressions
    &fes::expression::LITERAL_INFO,
    &fes::expression::FUNCTION_INFO,
    // comparison
    &fes::comparison::BINARY_COMPARISON_OP_INFO,
    &fes::comparison::PROPERTY_IS_LIKE_INFO,
    &fes::comparison::PROPERTY_IS_NULL_INFO,
    &fes::comparison::PROPERTY_IS_NIL_INFO,
    &fes::comparison::PROPERTY_IS_BETWEEN_INFO,
    &fes::comparison::LOWER_BOUNDARY_INFO,
    &fes::comparison::UPPER_BOUNDARY_INFO,
    // spatial
    &fes::spatial::BBOX_INFO,
    &fes::spatial::BINARY_SPATIAL_OP_INFO,
    &fes::spatial::DISTANCE_BUFFER_INFO,
    &fes::spatial::MEASURE_INFO,
    // temporal
    &fes::temporal::BINARY_TEMPORAL_OP_INFO,
    // logic and predicates
    &fes::logic::BINARY_LOGIC_OP_INFO,
    &fes::logic::UNARY_LOGIC_OP_INFO,
    &fes::predicate::EXTENSION_OPS_INFO,
    &fes::predicate::RESOURCE_ID_INFO,
    // filter and sorting
    &fes::filter::FILTER_INFO,
    &fes::sort::SORT_BY_INFO,
    &fes::sort::SORT_PROPERTY_INFO,
    // capabilities
    &fes::capabilities::FILTER_CAPABILITIES_INFO,
    &fes::capabilities::conformance::CONFORMANCE_INFO,
    &fes::capabilities::conformance::DOMAIN_INFO,
    &fes::capabilities::id::ID_CAPABILITIES_INFO,
    &fes::capabilities::id::RESOURCE_IDENTIFIER_INFO,
    &fes::capabilities::scalar::SCALAR_CAPABILITIES_INFO,
    &fes::capabilities::scalar::LOGICAL_OPERATORS_INFO,
    &fes::capabilities::scalar::COMPARISON_OPERATORS_INFO,
    &fes::capabilities::scalar::COMPARISON_OPERATOR_INFO,
    &fes::capabilities::spatial::SPATIAL_CAPABILITIES_INFO,
    &fes::capabilities::spatial::GEOMETRY_OPERANDS_INFO,
    &fes::capabilities::spatial::GEOMETRY_OPERAND_INFO,
    &fes::capabilities::spatial::SPATIAL_OPERATORS_INFO,
    &fes::capabilities::spatial::SPATIAL_OPERATOR_INFO,
    &fes::capabilities::temporal::TEMPORAL_CAPABILITIES_INFO,
    &fes::capabilities::temporal::TEMPORAL_OPERANDS_INFO,
    &fes::capabilities::temporal::TEMPORAL_OPERAND_INFO,
    &fes::capabilities::temporal::TEMPORAL_OPERATORS_INFO,
    &fes::capabilities::temporal::TEMPORAL_OPERATOR_INFO,
    &fes::capabilities::functions::AVAILABLE_FUNCTIONS_INFO,
    &fes::capabilities::functions::AVAILABLE_FUNCTION_INFO,
    &fes::capabilities::functions::ARGUMENTS_INFO,
    &fes::capabilities::functions::ARGUMENT_INFO,
    &fes::capabilities::extended::EXTENDED_CAPABILITIES_INFO,
    &fes::capabilities::extended::ADDITIONAL_OPERATORS_INFO,
    &fes::capabilities::extended::EXTENSION_OPERATOR_INFO,
    // queries and documents
    &fes::query::ADHOC_QUERY_EXPRESSION_INFO,
    &fes::document::DOCUMENT_ROOT_INFO,
];

/// Every record type, grouped by concern
pub fn types() -> &'static [&'static TypeInfo] {
    TYPES
}

/// Find a record type by Rust or schema name
pub fn lookup(name: &str) -> Result<&'static TypeInfo> {
    TYPES
        .iter()
        .copied()
        .find(|t| t.name == name || t.xml_name == name)
        .ok_or_else(|| ModelError::UnknownType(name.to_string()))
}

/// SHA-256 over the serialized catalog.
///
/// Changes whenever a type, feature, cardinality or default changes.
pub fn fingerprint() -> Result<Checksum> {
    Checksum::of_json(TYPES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = types().iter().map(|t| t.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn test_feature_owner_matches_type() {
        for info in types() {
            for feature in info.features {
                assert_eq!(feature.feature.owner, info.name, "{}", feature.feature);
            }
        }
    }

    #[test]
    fn test_unsettable_features_have_defaults() {
        for info in types() {
            for feature in info.features.iter().filter(|f| f.unsettable) {
                assert!(feature.default.is_some(), "{}", feature.feature);
            }
        }
    }

    #[test]
    fn test_lookup_by_either_name() {
        assert_eq!(lookup("SortPropertyType").unwrap().xml_name, "SortPropertyType");
        assert_eq!(lookup("Filter_Capabilities").unwrap().name, "FilterCapabilitiesType");
        assert_eq!(lookup("Id_CapabilitiesType").unwrap().name, "IdCapabilitiesType");
        assert!(matches!(lookup("Nope"), Err(ModelError::UnknownType(_))));
    }

    #[test]
    fn test_feature_lookup() {
        let info = lookup("SortPropertyType").unwrap();
        let order = info.feature("SortOrder").unwrap();
        assert_eq!(order.name(), "sort_order");
        assert_eq!(order.default, Some("DESC"));
        assert!(info.require_feature("direction").is_err());
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = fingerprint().unwrap();
        let b = fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }
}

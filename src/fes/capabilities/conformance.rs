//! Conformance declarations (OWS constraint domains)

use serde::Serialize;

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::fes::{FES_NAMESPACE, OWS_NAMESPACE};
use crate::model::{impl_record, set_attribute, ContainmentListMut, ObjectHeader};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::AnyElement;

/// The conformance classes a service claims, one constraint each
#[derive(Debug, PartialEq)]
pub struct ConformanceType {
    header: ObjectHeader,
    constraints: Vec<DomainType>,
}

impl ConformanceType {
    pub const KIND: &'static str = "ConformanceType";
    pub const CONSTRAINTS: Feature = Feature::new(Self::KIND, "constraints");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            constraints: Vec::new(),
        }
    }

    pub fn constraints(&self) -> &[DomainType] {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> ContainmentListMut<'_, DomainType> {
        ContainmentListMut::new(&self.header, Self::CONSTRAINTS, &mut self.constraints)
    }

    pub fn constraint(&self, name: &str) -> Option<&DomainType> {
        self.constraints.iter().find(|c| c.name() == Some(name))
    }

    /// Whether the named class is declared with default value `TRUE`.
    /// Missing classes count as not implemented.
    pub fn is_implemented(&self, name: &str) -> bool {
        self.constraint(name)
            .and_then(DomainType::default_value)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Declare a class, updating the existing constraint if there is one
    pub fn set_implemented(&mut self, name: &str, implemented: bool) {
        let value = if implemented { "TRUE" } else { "FALSE" };
        match self.constraints.iter().position(|c| c.name() == Some(name)) {
            Some(i) => self.constraints[i].set_default_value(Some(value.to_string())),
            None => self
                .constraints_mut()
                .push(DomainType::with_default(name, value)),
        }
    }
}

impl_record!(ConformanceType, CONFORMANCE_INFO, [many CONSTRAINTS => constraints]);

pub(crate) static CONFORMANCE_INFO: TypeInfo = TypeInfo {
    name: ConformanceType::KIND,
    xml_name: "ConformanceType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ConformanceType::CONSTRAINTS,
        "Constraint",
        FeatureKind::Containment,
        "DomainType",
    )
    .bounds(1, None)],
};

/// Value space of a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PossibleValues {
    AllowedValues(Vec<String>),
    AnyValue,
    NoValues,
    /// Reference to an externally defined list
    ValuesReference { reference: String, name: String },
}

impl PossibleValues {
    pub fn tag(&self) -> &'static str {
        match self {
            PossibleValues::AllowedValues(_) => "AllowedValues",
            PossibleValues::AnyValue => "AnyValue",
            PossibleValues::NoValues => "NoValues",
            PossibleValues::ValuesReference { .. } => "ValuesReference",
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        match self {
            PossibleValues::AllowedValues(values) => values.iter().any(|v| v == value),
            PossibleValues::AnyValue => true,
            PossibleValues::NoValues => false,
            PossibleValues::ValuesReference { .. } => false,
        }
    }
}

impl ToValue for PossibleValues {
    fn to_value(&self) -> Value {
        let inner = match self {
            PossibleValues::AllowedValues(values) => values.to_value(),
            PossibleValues::AnyValue | PossibleValues::NoValues => Value::None,
            PossibleValues::ValuesReference { reference, .. } => Value::Text(reference.clone()),
        };
        Value::entry(self.tag(), inner)
    }
}

/// OWS domain: a named parameter with its possible and default values
#[derive(Debug, PartialEq)]
pub struct DomainType {
    header: ObjectHeader,
    name: Option<String>,
    possible_values: Option<PossibleValues>,
    default_value: Option<String>,
    meaning: Option<String>,
    data_type: Option<String>,
    metadata: Vec<AnyElement>,
}

impl DomainType {
    pub const KIND: &'static str = "DomainType";
    pub const NAME: Feature = Feature::new(Self::KIND, "name");
    pub const POSSIBLE_VALUES: Feature = Feature::new(Self::KIND, "possible_values");
    pub const DEFAULT_VALUE: Feature = Feature::new(Self::KIND, "default_value");
    pub const MEANING: Feature = Feature::new(Self::KIND, "meaning");
    pub const DATA_TYPE: Feature = Feature::new(Self::KIND, "data_type");
    pub const METADATA: Feature = Feature::new(Self::KIND, "metadata");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            name: None,
            possible_values: None,
            default_value: None,
            meaning: None,
            data_type: None,
            metadata: Vec::new(),
        }
    }

    /// Constraint in the shape used by conformance declarations:
    /// `NoValues` plus a default value
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        let mut domain = Self::new();
        domain.name = Some(name.into());
        domain.possible_values = Some(PossibleValues::NoValues);
        domain.default_value = Some(default.into());
        domain
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }

    pub fn possible_values(&self) -> Option<&PossibleValues> {
        self.possible_values.as_ref()
    }

    pub fn set_possible_values(&mut self, value: Option<PossibleValues>) {
        set_attribute(&self.header, Self::POSSIBLE_VALUES, &mut self.possible_values, value);
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn set_default_value(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::DEFAULT_VALUE, &mut self.default_value, value);
    }

    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    pub fn set_meaning(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::MEANING, &mut self.meaning, value);
    }

    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    pub fn set_data_type(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::DATA_TYPE, &mut self.data_type, value);
    }

    pub fn metadata(&self) -> &[AnyElement] {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> ContainmentListMut<'_, AnyElement> {
        ContainmentListMut::new(&self.header, Self::METADATA, &mut self.metadata)
    }
}

impl_record!(DomainType, DOMAIN_INFO, []);

pub(crate) static DOMAIN_INFO: TypeInfo = TypeInfo {
    name: DomainType::KIND,
    xml_name: "DomainType",
    namespace: OWS_NAMESPACE,
    features: &[
        FeatureInfo::new(DomainType::NAME, "name", FeatureKind::Attribute, "string").required(),
        FeatureInfo::new(
            DomainType::POSSIBLE_VALUES,
            "PossibleValues",
            FeatureKind::Group,
            "PossibleValues",
        )
        .required(),
        FeatureInfo::new(DomainType::DEFAULT_VALUE, "DefaultValue", FeatureKind::Element, "string"),
        FeatureInfo::new(DomainType::MEANING, "Meaning", FeatureKind::Element, "string"),
        FeatureInfo::new(DomainType::DATA_TYPE, "DataType", FeatureKind::Element, "string"),
        FeatureInfo::new(DomainType::METADATA, "Metadata", FeatureKind::Wildcard, "AnyElement")
            .many(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_implemented_reads_default_value() {
        let mut conformance = ConformanceType::new();
        conformance.set_implemented("ImplementsQuery", true);
        conformance.set_implemented("ImplementsSorting", false);

        assert!(conformance.is_implemented("ImplementsQuery"));
        assert!(!conformance.is_implemented("ImplementsSorting"));
        assert!(!conformance.is_implemented("ImplementsMinimumXPath"));

        conformance.set_implemented("ImplementsSorting", true);
        assert_eq!(conformance.constraints().len(), 2);
        assert!(conformance.is_implemented("ImplementsSorting"));
    }

    #[test]
    fn test_possible_values() {
        let allowed = PossibleValues::AllowedValues(vec!["a".into(), "b".into()]);
        assert!(allowed.allows("b"));
        assert!(!PossibleValues::NoValues.allows("b"));
        assert_eq!(
            allowed.to_value(),
            Value::entry(
                "AllowedValues",
                Value::List(vec![Value::Text("a".into()), Value::Text("b".into())])
            )
        );
    }
}

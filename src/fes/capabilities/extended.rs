//! Vendor operator capabilities

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::QName;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, ChildMut, ContainmentListMut, ObjectHeader,
};
use crate::notify::Feature;

#[derive(Debug, PartialEq)]
pub struct ExtendedCapabilitiesType {
    header: ObjectHeader,
    additional_operators: Option<AdditionalOperatorsType>,
}

impl ExtendedCapabilitiesType {
    pub const KIND: &'static str = "ExtendedCapabilitiesType";
    pub const ADDITIONAL_OPERATORS: Feature = Feature::new(Self::KIND, "additional_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            additional_operators: None,
        }
    }

    pub fn additional_operators(&self) -> Option<&AdditionalOperatorsType> {
        self.additional_operators.as_ref()
    }

    pub fn additional_operators_mut(&mut self) -> Option<ChildMut<'_, AdditionalOperatorsType>> {
        child_mut(&self.header, Self::ADDITIONAL_OPERATORS, &mut self.additional_operators)
    }

    pub fn set_additional_operators(
        &mut self,
        value: Option<AdditionalOperatorsType>,
    ) -> Option<AdditionalOperatorsType> {
        replace_child(
            &self.header,
            Self::ADDITIONAL_OPERATORS,
            &mut self.additional_operators,
            value,
        )
    }
}

impl_record!(
    ExtendedCapabilitiesType,
    EXTENDED_CAPABILITIES_INFO,
    [one ADDITIONAL_OPERATORS => additional_operators]
);

pub(crate) static EXTENDED_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: ExtendedCapabilitiesType::KIND,
    xml_name: "Extended_CapabilitiesType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ExtendedCapabilitiesType::ADDITIONAL_OPERATORS,
        "AdditionalOperators",
        FeatureKind::Containment,
        "AdditionalOperatorsType",
    )],
};

#[derive(Debug, PartialEq)]
pub struct AdditionalOperatorsType {
    header: ObjectHeader,
    operators: Vec<ExtensionOperatorType>,
}

impl AdditionalOperatorsType {
    pub const KIND: &'static str = "AdditionalOperatorsType";
    pub const OPERATORS: Feature = Feature::new(Self::KIND, "operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            operators: Vec::new(),
        }
    }

    pub fn operators(&self) -> &[ExtensionOperatorType] {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> ContainmentListMut<'_, ExtensionOperatorType> {
        ContainmentListMut::new(&self.header, Self::OPERATORS, &mut self.operators)
    }

    pub fn contains(&self, name: &QName) -> bool {
        self.operators.iter().any(|op| op.name() == Some(name))
    }
}

impl_record!(AdditionalOperatorsType, ADDITIONAL_OPERATORS_INFO, [many OPERATORS => operators]);

pub(crate) static ADDITIONAL_OPERATORS_INFO: TypeInfo = TypeInfo {
    name: AdditionalOperatorsType::KIND,
    xml_name: "AdditionalOperatorsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        AdditionalOperatorsType::OPERATORS,
        "Operator",
        FeatureKind::Containment,
        "ExtensionOperatorType",
    )
    .many()],
};

#[derive(Debug, PartialEq)]
pub struct ExtensionOperatorType {
    header: ObjectHeader,
    name: Option<QName>,
}

impl ExtensionOperatorType {
    pub const KIND: &'static str = "ExtensionOperatorType";
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            name: None,
        }
    }

    pub fn named(name: QName) -> Self {
        let mut op = Self::new();
        op.name = Some(name);
        op
    }

    pub fn name(&self) -> Option<&QName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(ExtensionOperatorType, EXTENSION_OPERATOR_INFO, []);

pub(crate) static EXTENSION_OPERATOR_INFO: TypeInfo = TypeInfo {
    name: ExtensionOperatorType::KIND,
    xml_name: "ExtensionOperatorType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(ExtensionOperatorType::NAME, "name", FeatureKind::Attribute, "QName")
            .required(),
    ],
};

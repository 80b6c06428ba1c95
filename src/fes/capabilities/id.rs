//! Resource identifier capabilities

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::QName;
use crate::fes::FES_NAMESPACE;
use crate::model::{impl_record, replace_child, set_attribute, ContainmentListMut, ObjectHeader};
use crate::notify::Feature;
use crate::wildcard::AnyElement;

#[derive(Debug, PartialEq)]
pub struct IdCapabilitiesType {
    header: ObjectHeader,
    resource_identifiers: Vec<ResourceIdentifierType>,
}

impl IdCapabilitiesType {
    pub const KIND: &'static str = "IdCapabilitiesType";
    pub const RESOURCE_IDENTIFIERS: Feature = Feature::new(Self::KIND, "resource_identifiers");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            resource_identifiers: Vec::new(),
        }
    }

    pub fn resource_identifiers(&self) -> &[ResourceIdentifierType] {
        &self.resource_identifiers
    }

    pub fn resource_identifiers_mut(&mut self) -> ContainmentListMut<'_, ResourceIdentifierType> {
        ContainmentListMut::new(
            &self.header,
            Self::RESOURCE_IDENTIFIERS,
            &mut self.resource_identifiers,
        )
    }
}

impl_record!(
    IdCapabilitiesType,
    ID_CAPABILITIES_INFO,
    [many RESOURCE_IDENTIFIERS => resource_identifiers]
);

pub(crate) static ID_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: IdCapabilitiesType::KIND,
    xml_name: "Id_CapabilitiesType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        IdCapabilitiesType::RESOURCE_IDENTIFIERS,
        "ResourceIdentifier",
        FeatureKind::Containment,
        "ResourceIdentifierType",
    )
    .bounds(1, None)],
};

/// A kind of resource identifier the service understands
#[derive(Debug, PartialEq)]
pub struct ResourceIdentifierType {
    header: ObjectHeader,
    metadata: Option<AnyElement>,
    name: Option<QName>,
}

impl ResourceIdentifierType {
    pub const KIND: &'static str = "ResourceIdentifierType";
    pub const METADATA: Feature = Feature::new(Self::KIND, "metadata");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            metadata: None,
            name: None,
        }
    }

    pub fn named(name: QName) -> Self {
        let mut id = Self::new();
        id.name = Some(name);
        id
    }

    pub fn metadata(&self) -> Option<&AnyElement> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::METADATA, &mut self.metadata, value)
    }

    pub fn name(&self) -> Option<&QName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(ResourceIdentifierType, RESOURCE_IDENTIFIER_INFO, []);

pub(crate) static RESOURCE_IDENTIFIER_INFO: TypeInfo = TypeInfo {
    name: ResourceIdentifierType::KIND,
    xml_name: "ResourceIdentifierType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            ResourceIdentifierType::METADATA,
            "Metadata",
            FeatureKind::Wildcard,
            "AnyElement",
        ),
        FeatureInfo::new(ResourceIdentifierType::NAME, "name", FeatureKind::Attribute, "QName")
            .required(),
    ],
};

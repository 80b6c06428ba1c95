//! Spatial capabilities: geometry operands and spatial operators

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{QName, SpatialOperatorName};
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, ChildMut, ContainmentListMut, ObjectHeader,
};
use crate::notify::Feature;

#[derive(Debug, PartialEq)]
pub struct SpatialCapabilitiesType {
    header: ObjectHeader,
    geometry_operands: Option<GeometryOperandsType>,
    spatial_operators: Option<SpatialOperatorsType>,
}

impl SpatialCapabilitiesType {
    pub const KIND: &'static str = "SpatialCapabilitiesType";
    pub const GEOMETRY_OPERANDS: Feature = Feature::new(Self::KIND, "geometry_operands");
    pub const SPATIAL_OPERATORS: Feature = Feature::new(Self::KIND, "spatial_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            geometry_operands: None,
            spatial_operators: None,
        }
    }

    pub fn geometry_operands(&self) -> Option<&GeometryOperandsType> {
        self.geometry_operands.as_ref()
    }

    pub fn geometry_operands_mut(&mut self) -> Option<ChildMut<'_, GeometryOperandsType>> {
        child_mut(&self.header, Self::GEOMETRY_OPERANDS, &mut self.geometry_operands)
    }

    pub fn set_geometry_operands(
        &mut self,
        value: Option<GeometryOperandsType>,
    ) -> Option<GeometryOperandsType> {
        replace_child(&self.header, Self::GEOMETRY_OPERANDS, &mut self.geometry_operands, value)
    }

    pub fn spatial_operators(&self) -> Option<&SpatialOperatorsType> {
        self.spatial_operators.as_ref()
    }

    pub fn spatial_operators_mut(&mut self) -> Option<ChildMut<'_, SpatialOperatorsType>> {
        child_mut(&self.header, Self::SPATIAL_OPERATORS, &mut self.spatial_operators)
    }

    pub fn set_spatial_operators(
        &mut self,
        value: Option<SpatialOperatorsType>,
    ) -> Option<SpatialOperatorsType> {
        replace_child(&self.header, Self::SPATIAL_OPERATORS, &mut self.spatial_operators, value)
    }

    /// Whether an operator with this lexical name is listed
    pub fn supports(&self, name: &str) -> bool {
        self.spatial_operators.as_ref().is_some_and(|ops| ops.operator(name).is_some())
    }
}

impl_record!(
    SpatialCapabilitiesType,
    SPATIAL_CAPABILITIES_INFO,
    [
        one GEOMETRY_OPERANDS => geometry_operands,
        one SPATIAL_OPERATORS => spatial_operators,
    ]
);

pub(crate) static SPATIAL_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: SpatialCapabilitiesType::KIND,
    xml_name: "Spatial_CapabilitiesType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            SpatialCapabilitiesType::GEOMETRY_OPERANDS,
            "GeometryOperands",
            FeatureKind::Containment,
            "GeometryOperandsType",
        )
        .required(),
        FeatureInfo::new(
            SpatialCapabilitiesType::SPATIAL_OPERATORS,
            "SpatialOperators",
            FeatureKind::Containment,
            "SpatialOperatorsType",
        )
        .required(),
    ],
};

/// Geometry types accepted as operands
#[derive(Debug, PartialEq)]
pub struct GeometryOperandsType {
    header: ObjectHeader,
    geometry_operands: Vec<GeometryOperandType>,
}

impl GeometryOperandsType {
    pub const KIND: &'static str = "GeometryOperandsType";
    pub const GEOMETRY_OPERANDS: Feature = Feature::new(Self::KIND, "geometry_operands");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            geometry_operands: Vec::new(),
        }
    }

    pub fn of(names: impl IntoIterator<Item = QName>) -> Self {
        let mut operands = Self::new();
        operands
            .geometry_operands_mut()
            .extend(names.into_iter().map(GeometryOperandType::named));
        operands
    }

    pub fn geometry_operands(&self) -> &[GeometryOperandType] {
        &self.geometry_operands
    }

    pub fn geometry_operands_mut(&mut self) -> ContainmentListMut<'_, GeometryOperandType> {
        ContainmentListMut::new(&self.header, Self::GEOMETRY_OPERANDS, &mut self.geometry_operands)
    }

    /// Namespace-aware membership test
    pub fn contains(&self, name: &QName) -> bool {
        self.geometry_operands.iter().any(|o| o.name() == Some(name))
    }
}

impl_record!(
    GeometryOperandsType,
    GEOMETRY_OPERANDS_INFO,
    [many GEOMETRY_OPERANDS => geometry_operands]
);

pub(crate) static GEOMETRY_OPERANDS_INFO: TypeInfo = TypeInfo {
    name: GeometryOperandsType::KIND,
    xml_name: "GeometryOperandsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        GeometryOperandsType::GEOMETRY_OPERANDS,
        "GeometryOperand",
        FeatureKind::Containment,
        "GeometryOperandType",
    )
    .bounds(1, None)],
};

#[derive(Debug, PartialEq)]
pub struct GeometryOperandType {
    header: ObjectHeader,
    name: Option<QName>,
}

impl GeometryOperandType {
    pub const KIND: &'static str = "GeometryOperandType";
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            name: None,
        }
    }

    pub fn named(name: QName) -> Self {
        let mut operand = Self::new();
        operand.name = Some(name);
        operand
    }

    pub fn name(&self) -> Option<&QName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(GeometryOperandType, GEOMETRY_OPERAND_INFO, []);

pub(crate) static GEOMETRY_OPERAND_INFO: TypeInfo = TypeInfo {
    name: GeometryOperandType::KIND,
    xml_name: "GeometryOperand",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(GeometryOperandType::NAME, "name", FeatureKind::Attribute, "QName")
            .required(),
    ],
};

#[derive(Debug, PartialEq)]
pub struct SpatialOperatorsType {
    header: ObjectHeader,
    spatial_operators: Vec<SpatialOperatorType>,
}

impl SpatialOperatorsType {
    pub const KIND: &'static str = "SpatialOperatorsType";
    pub const SPATIAL_OPERATORS: Feature = Feature::new(Self::KIND, "spatial_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            spatial_operators: Vec::new(),
        }
    }

    pub fn of<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SpatialOperatorName>,
    {
        let mut ops = Self::new();
        ops.spatial_operators_mut()
            .extend(names.into_iter().map(|n| SpatialOperatorType::named(n.into())));
        ops
    }

    pub fn spatial_operators(&self) -> &[SpatialOperatorType] {
        &self.spatial_operators
    }

    pub fn spatial_operators_mut(&mut self) -> ContainmentListMut<'_, SpatialOperatorType> {
        ContainmentListMut::new(&self.header, Self::SPATIAL_OPERATORS, &mut self.spatial_operators)
    }

    pub fn operator(&self, name: &str) -> Option<&SpatialOperatorType> {
        self.spatial_operators
            .iter()
            .find(|op| op.name().is_some_and(|n| n.to_string() == name))
    }
}

impl_record!(
    SpatialOperatorsType,
    SPATIAL_OPERATORS_INFO,
    [many SPATIAL_OPERATORS => spatial_operators]
);

pub(crate) static SPATIAL_OPERATORS_INFO: TypeInfo = TypeInfo {
    name: SpatialOperatorsType::KIND,
    xml_name: "SpatialOperatorsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        SpatialOperatorsType::SPATIAL_OPERATORS,
        "SpatialOperator",
        FeatureKind::Containment,
        "SpatialOperatorType",
    )
    .bounds(1, None)],
};

/// One supported spatial operator, optionally restricted to some operands
#[derive(Debug, PartialEq)]
pub struct SpatialOperatorType {
    header: ObjectHeader,
    geometry_operands: Option<GeometryOperandsType>,
    name: Option<SpatialOperatorName>,
}

impl SpatialOperatorType {
    pub const KIND: &'static str = "SpatialOperatorType";
    pub const GEOMETRY_OPERANDS: Feature = Feature::new(Self::KIND, "geometry_operands");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            geometry_operands: None,
            name: None,
        }
    }

    pub fn named(name: SpatialOperatorName) -> Self {
        let mut op = Self::new();
        op.name = Some(name);
        op
    }

    pub fn geometry_operands(&self) -> Option<&GeometryOperandsType> {
        self.geometry_operands.as_ref()
    }

    pub fn set_geometry_operands(
        &mut self,
        value: Option<GeometryOperandsType>,
    ) -> Option<GeometryOperandsType> {
        replace_child(&self.header, Self::GEOMETRY_OPERANDS, &mut self.geometry_operands, value)
    }

    pub fn name(&self) -> Option<&SpatialOperatorName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<SpatialOperatorName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(
    SpatialOperatorType,
    SPATIAL_OPERATOR_INFO,
    [one GEOMETRY_OPERANDS => geometry_operands]
);

pub(crate) static SPATIAL_OPERATOR_INFO: TypeInfo = TypeInfo {
    name: SpatialOperatorType::KIND,
    xml_name: "SpatialOperatorType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            SpatialOperatorType::GEOMETRY_OPERANDS,
            "GeometryOperands",
            FeatureKind::Containment,
            "GeometryOperandsType",
        ),
        FeatureInfo::new(
            SpatialOperatorType::NAME,
            "name",
            FeatureKind::Attribute,
            "SpatialOperatorNameType",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::SpatialOperator;
    use crate::fes::GML_NAMESPACE;
    use crate::model::Record;

    #[test]
    fn test_operator_restricted_operands() {
        let mut intersects = SpatialOperatorType::named(SpatialOperator::Intersects.into());
        intersects.set_geometry_operands(Some(GeometryOperandsType::of([QName::new(
            GML_NAMESPACE,
            "Polygon",
        )])));

        let mut ops = SpatialOperatorsType::of([SpatialOperator::Bbox]);
        ops.spatial_operators_mut().push(intersects);

        let mut caps = SpatialCapabilitiesType::new();
        caps.set_spatial_operators(Some(ops));

        assert!(caps.supports("BBOX"));
        assert!(caps.supports("Intersects"));
        assert!(!caps.supports("Touches"));

        let found = caps.spatial_operators().unwrap().operator("Intersects").unwrap();
        let operands = found.geometry_operands().unwrap();
        assert!(operands.contains(&QName::new(GML_NAMESPACE, "Polygon")));
        assert_eq!(operands.container().unwrap().parent, found.object_ref());
    }
}

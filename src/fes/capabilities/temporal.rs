//! Temporal capabilities: temporal operands and temporal operators

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{QName, TemporalOperatorName};
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, ChildMut, ContainmentListMut, ObjectHeader,
};
use crate::notify::Feature;

#[derive(Debug, PartialEq)]
pub struct TemporalCapabilitiesType {
    header: ObjectHeader,
    temporal_operands: Option<TemporalOperandsType>,
    temporal_operators: Option<TemporalOperatorsType>,
}

impl TemporalCapabilitiesType {
    pub const KIND: &'static str = "TemporalCapabilitiesType";
    pub const TEMPORAL_OPERANDS: Feature = Feature::new(Self::KIND, "temporal_operands");
    pub const TEMPORAL_OPERATORS: Feature = Feature::new(Self::KIND, "temporal_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            temporal_operands: None,
            temporal_operators: None,
        }
    }

    pub fn temporal_operands(&self) -> Option<&TemporalOperandsType> {
        self.temporal_operands.as_ref()
    }

    pub fn temporal_operands_mut(&mut self) -> Option<ChildMut<'_, TemporalOperandsType>> {
        child_mut(&self.header, Self::TEMPORAL_OPERANDS, &mut self.temporal_operands)
    }

    pub fn set_temporal_operands(
        &mut self,
        value: Option<TemporalOperandsType>,
    ) -> Option<TemporalOperandsType> {
        replace_child(&self.header, Self::TEMPORAL_OPERANDS, &mut self.temporal_operands, value)
    }

    pub fn temporal_operators(&self) -> Option<&TemporalOperatorsType> {
        self.temporal_operators.as_ref()
    }

    pub fn temporal_operators_mut(&mut self) -> Option<ChildMut<'_, TemporalOperatorsType>> {
        child_mut(&self.header, Self::TEMPORAL_OPERATORS, &mut self.temporal_operators)
    }

    pub fn set_temporal_operators(
        &mut self,
        value: Option<TemporalOperatorsType>,
    ) -> Option<TemporalOperatorsType> {
        replace_child(&self.header, Self::TEMPORAL_OPERATORS, &mut self.temporal_operators, value)
    }

    /// Whether an operator with this lexical name is listed
    pub fn supports(&self, name: &str) -> bool {
        self.temporal_operators.as_ref().is_some_and(|ops| ops.operator(name).is_some())
    }
}

impl_record!(
    TemporalCapabilitiesType,
    TEMPORAL_CAPABILITIES_INFO,
    [
        one TEMPORAL_OPERANDS => temporal_operands,
        one TEMPORAL_OPERATORS => temporal_operators,
    ]
);

pub(crate) static TEMPORAL_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: TemporalCapabilitiesType::KIND,
    xml_name: "Temporal_CapabilitiesType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            TemporalCapabilitiesType::TEMPORAL_OPERANDS,
            "TemporalOperands",
            FeatureKind::Containment,
            "TemporalOperandsType",
        )
        .required(),
        FeatureInfo::new(
            TemporalCapabilitiesType::TEMPORAL_OPERATORS,
            "TemporalOperators",
            FeatureKind::Containment,
            "TemporalOperatorsType",
        )
        .required(),
    ],
};

/// Time primitive types accepted as operands
#[derive(Debug, PartialEq)]
pub struct TemporalOperandsType {
    header: ObjectHeader,
    temporal_operands: Vec<TemporalOperandType>,
}

impl TemporalOperandsType {
    pub const KIND: &'static str = "TemporalOperandsType";
    pub const TEMPORAL_OPERANDS: Feature = Feature::new(Self::KIND, "temporal_operands");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            temporal_operands: Vec::new(),
        }
    }

    pub fn of(names: impl IntoIterator<Item = QName>) -> Self {
        let mut operands = Self::new();
        operands
            .temporal_operands_mut()
            .extend(names.into_iter().map(TemporalOperandType::named));
        operands
    }

    pub fn temporal_operands(&self) -> &[TemporalOperandType] {
        &self.temporal_operands
    }

    pub fn temporal_operands_mut(&mut self) -> ContainmentListMut<'_, TemporalOperandType> {
        ContainmentListMut::new(&self.header, Self::TEMPORAL_OPERANDS, &mut self.temporal_operands)
    }

    /// Namespace-aware membership test
    pub fn contains(&self, name: &QName) -> bool {
        self.temporal_operands.iter().any(|o| o.name() == Some(name))
    }
}

impl_record!(
    TemporalOperandsType,
    TEMPORAL_OPERANDS_INFO,
    [many TEMPORAL_OPERANDS => temporal_operands]
);

pub(crate) static TEMPORAL_OPERANDS_INFO: TypeInfo = TypeInfo {
    name: TemporalOperandsType::KIND,
    xml_name: "TemporalOperandsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        TemporalOperandsType::TEMPORAL_OPERANDS,
        "TemporalOperand",
        FeatureKind::Containment,
        "TemporalOperandType",
    )
    .bounds(1, None)],
};

#[derive(Debug, PartialEq)]
pub struct TemporalOperandType {
    header: ObjectHeader,
    name: Option<QName>,
}

impl TemporalOperandType {
    pub const KIND: &'static str = "TemporalOperandType";
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

impl_record!(TemporalOperandType, TEMPORAL_OPERAND_INFO, []);

pub(crate) static TEMPORAL_OPERAND_INFO: TypeInfo = TypeInfo {
    name: TemporalOperandType::KIND,
    xml_name: "TemporalOperand",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(TemporalOperandType::NAME, "name", FeatureKind::Attribute, "QName")
            .required(),
    ],
};

#[derive(Debug, PartialEq)]
pub struct TemporalOperatorsType {
    header: ObjectHeader,
    temporal_operators: Vec<TemporalOperatorType>,
}

impl TemporalOperatorsType {
    pub const KIND: &'static str = "TemporalOperatorsType";
    pub const TEMPORAL_OPERATORS: Feature = Feature::new(Self::KIND, "temporal_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            temporal_operators: Vec::new(),
        }
    }

    pub fn of<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TemporalOperatorName>,
    {
        let mut ops = Self::new();
        ops.temporal_operators_mut()
            .extend(names.into_iter().map(|n| TemporalOperatorType::named(n.into())));
        ops
    }

    pub fn temporal_operators(&self) -> &[TemporalOperatorType] {
        &self.temporal_operators
    }

    pub fn temporal_operators_mut(&mut self) -> ContainmentListMut<'_, TemporalOperatorType> {
        ContainmentListMut::new(
            &self.header,
            Self::TEMPORAL_OPERATORS,
            &mut self.temporal_operators,
        )
    }

    pub fn operator(&self, name: &str) -> Option<&TemporalOperatorType> {
        self.temporal_operators
            .iter()
            .find(|op| op.name().is_some_and(|n| n.to_string() == name))
    }
}

impl_record!(
    TemporalOperatorsType,
    TEMPORAL_OPERATORS_INFO,
    [many TEMPORAL_OPERATORS => temporal_operators]
);

pub(crate) static TEMPORAL_OPERATORS_INFO: TypeInfo = TypeInfo {
    name: TemporalOperatorsType::KIND,
    xml_name: "TemporalOperatorsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        TemporalOperatorsType::TEMPORAL_OPERATORS,
        "TemporalOperator",
        FeatureKind::Containment,
        "TemporalOperatorType",
    )
    .bounds(1, None)],
};

/// One supported temporal operator, optionally restricted to some operands
#[derive(Debug, PartialEq)]
pub struct TemporalOperatorType {
    header: ObjectHeader,
    temporal_operands: Option<TemporalOperandsType>,
    name: Option<TemporalOperatorName>,
}

impl TemporalOperatorType {
    pub const KIND: &'static str = "TemporalOperatorType";
    pub const TEMPORAL_OPERANDS: Feature = Feature::new(Self::KIND, "temporal_operands");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            temporal_operands: None,
            name: None,
        }
    }

    pub fn named(name: TemporalOperatorName) -> Self {
        let mut op = Self::new();
        op.name = Some(name);
        op
    }

    pub fn temporal_operands(&self) -> Option<&TemporalOperandsType> {
        self.temporal_operands.as_ref()
    }

    pub fn set_temporal_operands(
        &mut self,
        value: Option<TemporalOperandsType>,
    ) -> Option<TemporalOperandsType> {
        replace_child(&self.header, Self::TEMPORAL_OPERANDS, &mut self.temporal_operands, value)
    }

    pub fn name(&self) -> Option<&TemporalOperatorName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<TemporalOperatorName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(
    TemporalOperatorType,
    TEMPORAL_OPERATOR_INFO,
    [one TEMPORAL_OPERANDS => temporal_operands]
);

pub(crate) static TEMPORAL_OPERATOR_INFO: TypeInfo = TypeInfo {
    name: TemporalOperatorType::KIND,
    xml_name: "TemporalOperatorType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            TemporalOperatorType::TEMPORAL_OPERANDS,
            "TemporalOperands",
            FeatureKind::Containment,
            "TemporalOperandsType",
        ),
        FeatureInfo::new(
            TemporalOperatorType::NAME,
            "name",
            FeatureKind::Attribute,
            "TemporalOperatorNameType",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::TemporalOperator;
    use crate::fes::GML_NAMESPACE;

    #[test]
    fn test_temporal_capabilities_lookup() {
        let mut caps = TemporalCapabilitiesType::new();
        caps.set_temporal_operands(Some(TemporalOperandsType::of([
            QName::new(GML_NAMESPACE, "TimeInstant"),
            QName::new(GML_NAMESPACE, "TimePeriod"),
        ])));
        caps.set_temporal_operators(Some(TemporalOperatorsType::of([
            TemporalOperator::After,
            TemporalOperator::During,
        ])));

        let operands = caps.temporal_operands().unwrap();
        assert_eq!(operands.temporal_operands().len(), 2);
        assert!(operands.contains(&QName::new(GML_NAMESPACE, "TimePeriod")));
        assert!(!operands.contains(&QName::local("TimePeriod")));

        assert!(caps.supports("During"));
        assert!(!caps.supports("AnyInteracts"));
    }
}

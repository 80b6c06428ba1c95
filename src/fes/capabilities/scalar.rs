//! Logical and comparison operator capabilities

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::ComparisonOperatorName;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, ChildMut, ContainmentListMut, ObjectHeader,
};
use crate::notify::Feature;

#[derive(Debug, PartialEq)]
pub struct ScalarCapabilitiesType {
    header: ObjectHeader,
    logical_operators: Option<LogicalOperatorsType>,
    comparison_operators: Option<ComparisonOperatorsType>,
}

impl ScalarCapabilitiesType {
    pub const KIND: &'static str = "ScalarCapabilitiesType";
    pub const LOGICAL_OPERATORS: Feature = Feature::new(Self::KIND, "logical_operators");
    pub const COMPARISON_OPERATORS: Feature = Feature::new(Self::KIND, "comparison_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            logical_operators: None,
            comparison_operators: None,
        }
    }

    pub fn logical_operators(&self) -> Option<&LogicalOperatorsType> {
        self.logical_operators.as_ref()
    }

    pub fn set_logical_operators(
        &mut self,
        value: Option<LogicalOperatorsType>,
    ) -> Option<LogicalOperatorsType> {
        replace_child(&self.header, Self::LOGICAL_OPERATORS, &mut self.logical_operators, value)
    }

    pub fn comparison_operators(&self) -> Option<&ComparisonOperatorsType> {
        self.comparison_operators.as_ref()
    }

    pub fn comparison_operators_mut(&mut self) -> Option<ChildMut<'_, ComparisonOperatorsType>> {
        child_mut(&self.header, Self::COMPARISON_OPERATORS, &mut self.comparison_operators)
    }

    pub fn set_comparison_operators(
        &mut self,
        value: Option<ComparisonOperatorsType>,
    ) -> Option<ComparisonOperatorsType> {
        replace_child(
            &self.header,
            Self::COMPARISON_OPERATORS,
            &mut self.comparison_operators,
            value,
        )
    }
}

impl_record!(
    ScalarCapabilitiesType,
    SCALAR_CAPABILITIES_INFO,
    [
        one LOGICAL_OPERATORS => logical_operators,
        one COMPARISON_OPERATORS => comparison_operators,
    ]
);

pub(crate) static SCALAR_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: ScalarCapabilitiesType::KIND,
    xml_name: "Scalar_CapabilitiesType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            ScalarCapabilitiesType::LOGICAL_OPERATORS,
            "LogicalOperators",
            FeatureKind::Containment,
            "LogicalOperatorsType",
        ),
        FeatureInfo::new(
            ScalarCapabilitiesType::COMPARISON_OPERATORS,
            "ComparisonOperators",
            FeatureKind::Containment,
            "ComparisonOperatorsType",
        ),
    ],
};

/// Marker: present when `And`, `Or` and `Not` are supported
#[derive(Debug, PartialEq)]
pub struct LogicalOperatorsType {
    header: ObjectHeader,
}

impl LogicalOperatorsType {
    pub const KIND: &'static str = "LogicalOperatorsType";

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
        }
    }
}

impl_record!(LogicalOperatorsType, LOGICAL_OPERATORS_INFO, []);

pub(crate) static LOGICAL_OPERATORS_INFO: TypeInfo = TypeInfo {
    name: LogicalOperatorsType::KIND,
    xml_name: "LogicalOperators",
    namespace: FES_NAMESPACE,
    features: &[],
};

#[derive(Debug, PartialEq)]
pub struct ComparisonOperatorsType {
    header: ObjectHeader,
    comparison_operators: Vec<ComparisonOperatorType>,
}

impl ComparisonOperatorsType {
    pub const KIND: &'static str = "ComparisonOperatorsType";
    pub const COMPARISON_OPERATORS: Feature = Feature::new(Self::KIND, "comparison_operators");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            comparison_operators: Vec::new(),
        }
    }

    /// List of operators built from names
    pub fn of<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ComparisonOperatorName>,
    {
        let mut ops = Self::new();
        ops.comparison_operators_mut()
            .extend(names.into_iter().map(|n| ComparisonOperatorType::named(n.into())));
        ops
    }

    pub fn comparison_operators(&self) -> &[ComparisonOperatorType] {
        &self.comparison_operators
    }

    pub fn comparison_operators_mut(&mut self) -> ContainmentListMut<'_, ComparisonOperatorType> {
        ContainmentListMut::new(
            &self.header,
            Self::COMPARISON_OPERATORS,
            &mut self.comparison_operators,
        )
    }

    /// Whether an operator with this lexical name is listed
    pub fn supports(&self, name: &str) -> bool {
        self.comparison_operators
            .iter()
            .filter_map(ComparisonOperatorType::name)
            .any(|n| n.to_string() == name)
    }
}

impl_record!(
    ComparisonOperatorsType,
    COMPARISON_OPERATORS_INFO,
    [many COMPARISON_OPERATORS => comparison_operators]
);

pub(crate) static COMPARISON_OPERATORS_INFO: TypeInfo = TypeInfo {
    name: ComparisonOperatorsType::KIND,
    xml_name: "ComparisonOperatorsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ComparisonOperatorsType::COMPARISON_OPERATORS,
        "ComparisonOperator",
        FeatureKind::Containment,
        "ComparisonOperatorType",
    )
    .bounds(1, None)],
};

#[derive(Debug, PartialEq)]
pub struct ComparisonOperatorType {
    header: ObjectHeader,
    name: Option<ComparisonOperatorName>,
}

impl ComparisonOperatorType {
    pub const KIND: &'static str = "ComparisonOperatorType";
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            name: None,
        }
    }

    pub fn named(name: ComparisonOperatorName) -> Self {
        let mut op = Self::new();
        op.name = Some(name);
        op
    }

    pub fn name(&self) -> Option<&ComparisonOperatorName> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, value: Option<ComparisonOperatorName>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(ComparisonOperatorType, COMPARISON_OPERATOR_INFO, []);

pub(crate) static COMPARISON_OPERATOR_INFO: TypeInfo = TypeInfo {
    name: ComparisonOperatorType::KIND,
    xml_name: "ComparisonOperatorType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ComparisonOperatorType::NAME,
        "name",
        FeatureKind::Attribute,
        "ComparisonOperatorNameType",
    )
    .required()],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ComparisonOperator;

    #[test]
    fn test_supports_standard_and_extension_names() {
        let mut ops = ComparisonOperatorsType::of([
            ComparisonOperator::PropertyIsEqualTo,
            ComparisonOperator::PropertyIsLike,
        ]);
        ops.comparison_operators_mut().push(ComparisonOperatorType::named(
            ComparisonOperatorName::extension("extension:Soundex").unwrap(),
        ));

        assert!(ops.supports("PropertyIsLike"));
        assert!(ops.supports("extension:Soundex"));
        assert!(!ops.supports("PropertyIsBetween"));
    }
}

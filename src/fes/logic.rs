//! Logical operators over nested predicates

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::fes::predicate::FilterPredicate;
use crate::fes::FES_NAMESPACE;
use crate::model::{impl_record, Contained, ContainmentListMut, ObjectHeader, Record};
use crate::notify::{Feature, ToValue, Value};

/// One member of the `logicOps` substitution group
#[derive(Debug, PartialEq)]
pub enum LogicOp {
    And(BinaryLogicOpType),
    Or(BinaryLogicOpType),
    Not(UnaryLogicOpType),
}

impl LogicOp {
    pub fn element_name(&self) -> &'static str {
        match self {
            LogicOp::And(_) => "And",
            LogicOp::Or(_) => "Or",
            LogicOp::Not(_) => "Not",
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryLogicOpType> {
        match self {
            LogicOp::And(b) | LogicOp::Or(b) => Some(b),
            LogicOp::Not(_) => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryLogicOpType> {
        match self {
            LogicOp::Not(u) => Some(u),
            _ => None,
        }
    }

    /// Operands of the operator, whichever arity it has
    pub fn predicates(&self) -> &[FilterPredicate] {
        match self {
            LogicOp::And(b) | LogicOp::Or(b) => b.predicates(),
            LogicOp::Not(u) => u.predicates(),
        }
    }

    pub fn record(&self) -> &dyn Record {
        match self {
            LogicOp::And(b) | LogicOp::Or(b) => b,
            LogicOp::Not(u) => u,
        }
    }

    pub fn record_mut(&mut self) -> &mut dyn Record {
        match self {
            LogicOp::And(b) | LogicOp::Or(b) => b,
            LogicOp::Not(u) => u,
        }
    }
}

impl ToValue for LogicOp {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.record().to_value())
    }
}

impl Contained for LogicOp {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.record_mut())
    }
}

/// `And` / `Or` body
#[derive(Debug, PartialEq)]
pub struct BinaryLogicOpType {
    header: ObjectHeader,
    predicates: Vec<FilterPredicate>,
}

impl BinaryLogicOpType {
    pub const KIND: &'static str = "BinaryLogicOpType";
    pub const PREDICATES: Feature = Feature::new(Self::KIND, "predicates");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            predicates: Vec::new(),
        }
    }

    pub fn with_predicates<I>(predicates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FilterPredicate>,
    {
        let mut op = Self::new();
        op.predicates_mut().extend(predicates.into_iter().map(Into::into));
        op
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn predicates_mut(&mut self) -> ContainmentListMut<'_, FilterPredicate> {
        ContainmentListMut::new(&self.header, Self::PREDICATES, &mut self.predicates)
    }
}

impl_record!(BinaryLogicOpType, BINARY_LOGIC_OP_INFO, [many PREDICATES => predicates]);

pub(crate) static BINARY_LOGIC_OP_INFO: TypeInfo = TypeInfo {
    name: BinaryLogicOpType::KIND,
    xml_name: "BinaryLogicOpType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        BinaryLogicOpType::PREDICATES,
        "FilterPredicates",
        FeatureKind::Group,
        "FilterPredicate",
    )
    .many()],
};

/// `Not` body: one predicate, or several ids
#[derive(Debug, PartialEq)]
pub struct UnaryLogicOpType {
    header: ObjectHeader,
    predicates: Vec<FilterPredicate>,
}

impl UnaryLogicOpType {
    pub const KIND: &'static str = "UnaryLogicOpType";
    pub const PREDICATES: Feature = Feature::new(Self::KIND, "predicates");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            predicates: Vec::new(),
        }
    }

    pub fn negating(predicate: impl Into<FilterPredicate>) -> Self {
        let mut op = Self::new();
        op.predicates_mut().push(predicate.into());
        op
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn predicates_mut(&mut self) -> ContainmentListMut<'_, FilterPredicate> {
        ContainmentListMut::new(&self.header, Self::PREDICATES, &mut self.predicates)
    }

    /// The negated predicate, if one is present
    pub fn predicate(&self) -> Option<&FilterPredicate> {
        self.predicates.first()
    }
}

impl_record!(UnaryLogicOpType, UNARY_LOGIC_OP_INFO, [many PREDICATES => predicates]);

pub(crate) static UNARY_LOGIC_OP_INFO: TypeInfo = TypeInfo {
    name: UnaryLogicOpType::KIND,
    xml_name: "UnaryLogicOpType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        UnaryLogicOpType::PREDICATES,
        "FilterPredicates",
        FeatureKind::Group,
        "FilterPredicate",
    )
    .bounds(1, None)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fes::predicate::{PredicateSlice, ResourceIdType};

    #[test]
    fn test_nested_predicates_are_contained() {
        let and = BinaryLogicOpType::with_predicates([
            ResourceIdType::with_rid("a"),
            ResourceIdType::with_rid("b"),
        ]);
        let owner = and.object_ref();
        for p in and.predicates() {
            let container = p.record().container().unwrap();
            assert_eq!(container.parent, owner);
            assert_eq!(container.feature, BinaryLogicOpType::PREDICATES);
        }
        assert_eq!(and.predicates().ids().len(), 2);
    }

    #[test]
    fn test_not_wraps_single_predicate() {
        let not = LogicOp::Not(UnaryLogicOpType::negating(ResourceIdType::with_rid("x")));
        assert_eq!(not.element_name(), "Not");
        assert_eq!(not.predicates().len(), 1);
        assert!(not.as_binary().is_none());
        let inner = not.as_unary().unwrap().predicate().unwrap();
        assert_eq!(inner.element_name(), "ResourceId");
    }
}

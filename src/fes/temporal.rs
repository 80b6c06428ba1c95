//! Temporal operators

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::TemporalOperator;
use crate::fes::expression::Expression;
use crate::fes::FES_NAMESPACE;
use crate::model::{impl_record, replace_child, set_attribute, Contained, ObjectHeader, Record};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::AnyElement;

/// One member of the `temporalOps` substitution group.
///
/// Every operator carries a [`BinaryTemporalOpType`]; only the tag differs.
#[derive(Debug, PartialEq)]
pub enum TemporalOp {
    After(BinaryTemporalOpType),
    Before(BinaryTemporalOpType),
    Begins(BinaryTemporalOpType),
    BegunBy(BinaryTemporalOpType),
    TContains(BinaryTemporalOpType),
    During(BinaryTemporalOpType),
    EndedBy(BinaryTemporalOpType),
    Ends(BinaryTemporalOpType),
    TEquals(BinaryTemporalOpType),
    Meets(BinaryTemporalOpType),
    MetBy(BinaryTemporalOpType),
    TOverlaps(BinaryTemporalOpType),
    OverlappedBy(BinaryTemporalOpType),
    AnyInteracts(BinaryTemporalOpType),
}

impl TemporalOp {
    pub fn new(operator: TemporalOperator, body: BinaryTemporalOpType) -> Self {
        use TemporalOperator as Op;
        match operator {
            Op::After => TemporalOp::After(body),
            Op::Before => TemporalOp::Before(body),
            Op::Begins => TemporalOp::Begins(body),
            Op::BegunBy => TemporalOp::BegunBy(body),
            Op::TContains => TemporalOp::TContains(body),
            Op::During => TemporalOp::During(body),
            Op::EndedBy => TemporalOp::EndedBy(body),
            Op::Ends => TemporalOp::Ends(body),
            Op::TEquals => TemporalOp::TEquals(body),
            Op::Meets => TemporalOp::Meets(body),
            Op::MetBy => TemporalOp::MetBy(body),
            Op::TOverlaps => TemporalOp::TOverlaps(body),
            Op::OverlappedBy => TemporalOp::OverlappedBy(body),
        }
    }

    /// Standard operator name; `AnyInteracts` has none in the capabilities vocabulary
    pub fn operator(&self) -> Option<TemporalOperator> {
        use TemporalOperator as Op;
        let op = match self {
            TemporalOp::After(_) => Op::After,
            TemporalOp::Before(_) => Op::Before,
            TemporalOp::Begins(_) => Op::Begins,
            TemporalOp::BegunBy(_) => Op::BegunBy,
            TemporalOp::TContains(_) => Op::TContains,
            TemporalOp::During(_) => Op::During,
            TemporalOp::EndedBy(_) => Op::EndedBy,
            TemporalOp::Ends(_) => Op::Ends,
            TemporalOp::TEquals(_) => Op::TEquals,
            TemporalOp::Meets(_) => Op::Meets,
            TemporalOp::MetBy(_) => Op::MetBy,
            TemporalOp::TOverlaps(_) => Op::TOverlaps,
            TemporalOp::OverlappedBy(_) => Op::OverlappedBy,
            TemporalOp::AnyInteracts(_) => return None,
        };
        Some(op)
    }

    pub fn element_name(&self) -> &'static str {
        self.operator().map_or("AnyInteracts", |op| op.as_str())
    }

    pub fn body(&self) -> &BinaryTemporalOpType {
        match self {
            TemporalOp::After(b)
            | TemporalOp::Before(b)
            | TemporalOp::Begins(b)
            | TemporalOp::BegunBy(b)
            | TemporalOp::TContains(b)
            | TemporalOp::During(b)
            | TemporalOp::EndedBy(b)
            | TemporalOp::Ends(b)
            | TemporalOp::TEquals(b)
            | TemporalOp::Meets(b)
            | TemporalOp::MetBy(b)
            | TemporalOp::TOverlaps(b)
            | TemporalOp::OverlappedBy(b)
            | TemporalOp::AnyInteracts(b) => b,
        }
    }

    pub fn body_mut(&mut self) -> &mut BinaryTemporalOpType {
        match self {
            TemporalOp::After(b)
            | TemporalOp::Before(b)
            | TemporalOp::Begins(b)
            | TemporalOp::BegunBy(b)
            | TemporalOp::TContains(b)
            | TemporalOp::During(b)
            | TemporalOp::EndedBy(b)
            | TemporalOp::Ends(b)
            | TemporalOp::TEquals(b)
            | TemporalOp::Meets(b)
            | TemporalOp::MetBy(b)
            | TemporalOp::TOverlaps(b)
            | TemporalOp::OverlappedBy(b)
            | TemporalOp::AnyInteracts(b) => b,
        }
    }
}

impl ToValue for TemporalOp {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.body().to_value())
    }
}

impl Contained for TemporalOp {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.body())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.body_mut())
    }
}

/// Property compared with a time primitive or expression
#[derive(Debug, PartialEq)]
pub struct BinaryTemporalOpType {
    header: ObjectHeader,
    value_reference: Option<String>,
    expression: Option<Expression>,
    any: Option<AnyElement>,
}

impl BinaryTemporalOpType {
    pub const KIND: &'static str = "BinaryTemporalOpType";
    pub const VALUE_REFERENCE: Feature = Feature::new(Self::KIND, "value_reference");
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");
    pub const ANY: Feature = Feature::new(Self::KIND, "any");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            value_reference: None,
            expression: None,
            any: None,
        }
    }

    pub fn value_reference(&self) -> Option<&str> {
        self.value_reference.as_deref()
    }

    pub fn set_value_reference(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::VALUE_REFERENCE, &mut self.value_reference, value);
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    /// Time instant or period operand
    pub fn any(&self) -> Option<&AnyElement> {
        self.any.as_ref()
    }

    pub fn set_any(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::ANY, &mut self.any, value)
    }
}

impl_record!(BinaryTemporalOpType, BINARY_TEMPORAL_OP_INFO, [one EXPRESSION => expression]);

pub(crate) static BINARY_TEMPORAL_OP_INFO: TypeInfo = TypeInfo {
    name: BinaryTemporalOpType::KIND,
    xml_name: "BinaryTemporalOpType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            BinaryTemporalOpType::VALUE_REFERENCE,
            "ValueReference",
            FeatureKind::Element,
            "string",
        )
        .required(),
        FeatureInfo::new(
            BinaryTemporalOpType::EXPRESSION,
            "expression",
            FeatureKind::Group,
            "Expression",
        ),
        FeatureInfo::new(BinaryTemporalOpType::ANY, ":3", FeatureKind::Wildcard, "AnyElement"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_standard_operator_round_trips_through_tag() {
        for op in TemporalOperator::VALUES {
            let wrapped = TemporalOp::new(*op, BinaryTemporalOpType::new());
            assert_eq!(wrapped.operator(), Some(*op));
            assert_eq!(wrapped.element_name(), op.as_str());
        }
    }

    #[test]
    fn test_any_interacts_has_no_standard_name() {
        let op = TemporalOp::AnyInteracts(BinaryTemporalOpType::new());
        assert_eq!(op.operator(), None);
        assert_eq!(op.element_name(), "AnyInteracts");
    }
}

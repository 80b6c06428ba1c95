//! Comparison operators

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{ComparisonOperator, MatchActionType};
use crate::fes::expression::Expression;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, set_settable, unset_settable, ChildMut,
    Contained, ContainmentListMut, ObjectHeader, Record, Settable,
};
use crate::notify::{Feature, ToValue, Value};

// =============================================================================
// comparisonOps group
// =============================================================================

/// One member of the `comparisonOps` substitution group
#[derive(Debug, PartialEq)]
pub enum ComparisonOp {
    PropertyIsEqualTo(BinaryComparisonOpType),
    PropertyIsNotEqualTo(BinaryComparisonOpType),
    PropertyIsLessThan(BinaryComparisonOpType),
    PropertyIsGreaterThan(BinaryComparisonOpType),
    PropertyIsLessThanOrEqualTo(BinaryComparisonOpType),
    PropertyIsGreaterThanOrEqualTo(BinaryComparisonOpType),
    PropertyIsLike(PropertyIsLikeType),
    PropertyIsNull(PropertyIsNullType),
    PropertyIsNil(PropertyIsNilType),
    PropertyIsBetween(PropertyIsBetweenType),
}

impl ComparisonOp {
    /// Wrap a binary comparison under one of the six binary operator tags.
    /// Returns `None` for operators with a dedicated record type.
    pub fn binary(operator: ComparisonOperator, body: BinaryComparisonOpType) -> Option<Self> {
        use ComparisonOperator as Op;
        let op = match operator {
            Op::PropertyIsEqualTo => ComparisonOp::PropertyIsEqualTo(body),
            Op::PropertyIsNotEqualTo => ComparisonOp::PropertyIsNotEqualTo(body),
            Op::PropertyIsLessThan => ComparisonOp::PropertyIsLessThan(body),
            Op::PropertyIsGreaterThan => ComparisonOp::PropertyIsGreaterThan(body),
            Op::PropertyIsLessThanOrEqualTo => ComparisonOp::PropertyIsLessThanOrEqualTo(body),
            Op::PropertyIsGreaterThanOrEqualTo => {
                ComparisonOp::PropertyIsGreaterThanOrEqualTo(body)
            }
            Op::PropertyIsLike | Op::PropertyIsNull | Op::PropertyIsNil | Op::PropertyIsBetween => {
                return None
            }
        };
        Some(op)
    }

    pub fn operator(&self) -> ComparisonOperator {
        use ComparisonOperator as Op;
        match self {
            ComparisonOp::PropertyIsEqualTo(_) => Op::PropertyIsEqualTo,
            ComparisonOp::PropertyIsNotEqualTo(_) => Op::PropertyIsNotEqualTo,
            ComparisonOp::PropertyIsLessThan(_) => Op::PropertyIsLessThan,
            ComparisonOp::PropertyIsGreaterThan(_) => Op::PropertyIsGreaterThan,
            ComparisonOp::PropertyIsLessThanOrEqualTo(_) => Op::PropertyIsLessThanOrEqualTo,
            ComparisonOp::PropertyIsGreaterThanOrEqualTo(_) => Op::PropertyIsGreaterThanOrEqualTo,
            ComparisonOp::PropertyIsLike(_) => Op::PropertyIsLike,
            ComparisonOp::PropertyIsNull(_) => Op::PropertyIsNull,
            ComparisonOp::PropertyIsNil(_) => Op::PropertyIsNil,
            ComparisonOp::PropertyIsBetween(_) => Op::PropertyIsBetween,
        }
    }

    pub fn element_name(&self) -> &'static str {
        self.operator().as_str()
    }

    pub fn as_binary(&self) -> Option<&BinaryComparisonOpType> {
        match self {
            ComparisonOp::PropertyIsEqualTo(b)
            | ComparisonOp::PropertyIsNotEqualTo(b)
            | ComparisonOp::PropertyIsLessThan(b)
            | ComparisonOp::PropertyIsGreaterThan(b)
            | ComparisonOp::PropertyIsLessThanOrEqualTo(b)
            | ComparisonOp::PropertyIsGreaterThanOrEqualTo(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_binary_mut(&mut self) -> Option<&mut BinaryComparisonOpType> {
        match self {
            ComparisonOp::PropertyIsEqualTo(b)
            | ComparisonOp::PropertyIsNotEqualTo(b)
            | ComparisonOp::PropertyIsLessThan(b)
            | ComparisonOp::PropertyIsGreaterThan(b)
            | ComparisonOp::PropertyIsLessThanOrEqualTo(b)
            | ComparisonOp::PropertyIsGreaterThanOrEqualTo(b) => Some(b),
            _ => None,
        }
    }

    pub fn record(&self) -> &dyn Record {
        match self {
            ComparisonOp::PropertyIsLike(r) => r,
            ComparisonOp::PropertyIsNull(r) => r,
            ComparisonOp::PropertyIsNil(r) => r,
            ComparisonOp::PropertyIsBetween(r) => r,
            ComparisonOp::PropertyIsEqualTo(b)
            | ComparisonOp::PropertyIsNotEqualTo(b)
            | ComparisonOp::PropertyIsLessThan(b)
            | ComparisonOp::PropertyIsGreaterThan(b)
            | ComparisonOp::PropertyIsLessThanOrEqualTo(b)
            | ComparisonOp::PropertyIsGreaterThanOrEqualTo(b) => b,
        }
    }

    pub fn record_mut(&mut self) -> &mut dyn Record {
        match self {
            ComparisonOp::PropertyIsLike(r) => r,
            ComparisonOp::PropertyIsNull(r) => r,
            ComparisonOp::PropertyIsNil(r) => r,
            ComparisonOp::PropertyIsBetween(r) => r,
            ComparisonOp::PropertyIsEqualTo(b)
            | ComparisonOp::PropertyIsNotEqualTo(b)
            | ComparisonOp::PropertyIsLessThan(b)
            | ComparisonOp::PropertyIsGreaterThan(b)
            | ComparisonOp::PropertyIsLessThanOrEqualTo(b)
            | ComparisonOp::PropertyIsGreaterThanOrEqualTo(b) => b,
        }
    }
}

impl ToValue for ComparisonOp {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.record().to_value())
    }
}

impl Contained for ComparisonOp {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.record_mut())
    }
}

// =============================================================================
// BinaryComparisonOpType
// =============================================================================

/// Two expressions compared by the operator tag of the enclosing
/// [`ComparisonOp`]
#[derive(Debug, PartialEq)]
pub struct BinaryComparisonOpType {
    header: ObjectHeader,
    expressions: Vec<Expression>,
    match_action: Settable<MatchActionType>,
    match_case: Settable<bool>,
}

impl BinaryComparisonOpType {
    pub const KIND: &'static str = "BinaryComparisonOpType";
    pub const EXPRESSIONS: Feature = Feature::new(Self::KIND, "expressions");
    pub const MATCH_ACTION: Feature = Feature::new(Self::KIND, "match_action");
    pub const MATCH_CASE: Feature = Feature::new(Self::KIND, "match_case");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expressions: Vec::new(),
            match_action: Settable::new(MatchActionType::Any),
            match_case: Settable::new(true),
        }
    }

    pub fn with_operands(left: Expression, right: Expression) -> Self {
        let mut op = Self::new();
        op.expressions_mut().extend([left, right]);
        op
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn expressions_mut(&mut self) -> ContainmentListMut<'_, Expression> {
        ContainmentListMut::new(&self.header, Self::EXPRESSIONS, &mut self.expressions)
    }

    pub fn match_action(&self) -> MatchActionType {
        *self.match_action.get()
    }

    pub fn set_match_action(&mut self, value: MatchActionType) {
        set_settable(&self.header, Self::MATCH_ACTION, &mut self.match_action, value);
    }

    pub fn unset_match_action(&mut self) {
        unset_settable(&self.header, Self::MATCH_ACTION, &mut self.match_action);
    }

    pub fn is_set_match_action(&self) -> bool {
        self.match_action.is_set()
    }

    pub fn match_case(&self) -> bool {
        *self.match_case.get()
    }

    pub fn set_match_case(&mut self, value: bool) {
        set_settable(&self.header, Self::MATCH_CASE, &mut self.match_case, value);
    }

    pub fn unset_match_case(&mut self) {
        unset_settable(&self.header, Self::MATCH_CASE, &mut self.match_case);
    }

    pub fn is_set_match_case(&self) -> bool {
        self.match_case.is_set()
    }
}

impl_record!(BinaryComparisonOpType, BINARY_COMPARISON_OP_INFO, [many EXPRESSIONS => expressions]);

pub(crate) static BINARY_COMPARISON_OP_INFO: TypeInfo = TypeInfo {
    name: BinaryComparisonOpType::KIND,
    xml_name: "BinaryComparisonOpType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            BinaryComparisonOpType::EXPRESSIONS,
            "expression",
            FeatureKind::Group,
            "Expression",
        )
        .bounds(2, Some(2)),
        FeatureInfo::new(
            BinaryComparisonOpType::MATCH_ACTION,
            "matchAction",
            FeatureKind::Attribute,
            "MatchActionType",
        )
        .unsettable("Any"),
        FeatureInfo::new(
            BinaryComparisonOpType::MATCH_CASE,
            "matchCase",
            FeatureKind::Attribute,
            "boolean",
        )
        .unsettable("true"),
    ],
};

// =============================================================================
// PropertyIsLike
// =============================================================================

/// Pattern match of an expression against a literal pattern
#[derive(Debug, PartialEq)]
pub struct PropertyIsLikeType {
    header: ObjectHeader,
    expressions: Vec<Expression>,
    wild_card: Option<String>,
    single_char: Option<String>,
    escape_char: Option<String>,
}

impl PropertyIsLikeType {
    pub const KIND: &'static str = "PropertyIsLikeType";
    pub const EXPRESSIONS: Feature = Feature::new(Self::KIND, "expressions");
    pub const WILD_CARD: Feature = Feature::new(Self::KIND, "wild_card");
    pub const SINGLE_CHAR: Feature = Feature::new(Self::KIND, "single_char");
    pub const ESCAPE_CHAR: Feature = Feature::new(Self::KIND, "escape_char");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expressions: Vec::new(),
            wild_card: None,
            single_char: None,
            escape_char: None,
        }
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn expressions_mut(&mut self) -> ContainmentListMut<'_, Expression> {
        ContainmentListMut::new(&self.header, Self::EXPRESSIONS, &mut self.expressions)
    }

    pub fn wild_card(&self) -> Option<&str> {
        self.wild_card.as_deref()
    }

    pub fn set_wild_card(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::WILD_CARD, &mut self.wild_card, value);
    }

    pub fn single_char(&self) -> Option<&str> {
        self.single_char.as_deref()
    }

    pub fn set_single_char(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::SINGLE_CHAR, &mut self.single_char, value);
    }

    pub fn escape_char(&self) -> Option<&str> {
        self.escape_char.as_deref()
    }

    pub fn set_escape_char(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::ESCAPE_CHAR, &mut self.escape_char, value);
    }
}

impl_record!(PropertyIsLikeType, PROPERTY_IS_LIKE_INFO, [many EXPRESSIONS => expressions]);

pub(crate) static PROPERTY_IS_LIKE_INFO: TypeInfo = TypeInfo {
    name: PropertyIsLikeType::KIND,
    xml_name: "PropertyIsLikeType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            PropertyIsLikeType::EXPRESSIONS,
            "expression",
            FeatureKind::Group,
            "Expression",
        )
        .bounds(2, Some(2)),
        FeatureInfo::new(
            PropertyIsLikeType::WILD_CARD,
            "wildCard",
            FeatureKind::Attribute,
            "string",
        )
        .required(),
        FeatureInfo::new(
            PropertyIsLikeType::SINGLE_CHAR,
            "singleChar",
            FeatureKind::Attribute,
            "string",
        )
        .required(),
        FeatureInfo::new(
            PropertyIsLikeType::ESCAPE_CHAR,
            "escapeChar",
            FeatureKind::Attribute,
            "string",
        )
        .required(),
    ],
};

// =============================================================================
// PropertyIsNull / PropertyIsNil
// =============================================================================

#[derive(Debug, PartialEq)]
pub struct PropertyIsNullType {
    header: ObjectHeader,
    expression: Option<Expression>,
}

impl PropertyIsNullType {
    pub const KIND: &'static str = "PropertyIsNullType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn expression_mut(&mut self) -> Option<ChildMut<'_, Expression>> {
        child_mut(&self.header, Self::EXPRESSION, &mut self.expression)
    }

    /// Replace the operand, returning the detached previous one
    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    pub fn take_expression(&mut self) -> Option<Expression> {
        self.set_expression(None)
    }
}

impl_record!(PropertyIsNullType, PROPERTY_IS_NULL_INFO, [one EXPRESSION => expression]);

pub(crate) static PROPERTY_IS_NULL_INFO: TypeInfo = TypeInfo {
    name: PropertyIsNullType::KIND,
    xml_name: "PropertyIsNullType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        PropertyIsNullType::EXPRESSION,
        "expression",
        FeatureKind::Group,
        "Expression",
    )],
};

#[derive(Debug, PartialEq)]
pub struct PropertyIsNilType {
    header: ObjectHeader,
    expression: Option<Expression>,
    nil_reason: Option<String>,
}

impl PropertyIsNilType {
    pub const KIND: &'static str = "PropertyIsNilType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");
    pub const NIL_REASON: Feature = Feature::new(Self::KIND, "nil_reason");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
            nil_reason: None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn expression_mut(&mut self) -> Option<ChildMut<'_, Expression>> {
        child_mut(&self.header, Self::EXPRESSION, &mut self.expression)
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    pub fn take_expression(&mut self) -> Option<Expression> {
        self.set_expression(None)
    }

    pub fn nil_reason(&self) -> Option<&str> {
        self.nil_reason.as_deref()
    }

    pub fn set_nil_reason(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::NIL_REASON, &mut self.nil_reason, value);
    }
}

impl_record!(PropertyIsNilType, PROPERTY_IS_NIL_INFO, [one EXPRESSION => expression]);

pub(crate) static PROPERTY_IS_NIL_INFO: TypeInfo = TypeInfo {
    name: PropertyIsNilType::KIND,
    xml_name: "PropertyIsNilType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            PropertyIsNilType::EXPRESSION,
            "expression",
            FeatureKind::Group,
            "Expression",
        ),
        FeatureInfo::new(
            PropertyIsNilType::NIL_REASON,
            "nilReason",
            FeatureKind::Attribute,
            "string",
        ),
    ],
};

// =============================================================================
// PropertyIsBetween
// =============================================================================

/// Range test: lower boundary <= expression <= upper boundary
#[derive(Debug, PartialEq)]
pub struct PropertyIsBetweenType {
    header: ObjectHeader,
    expression: Option<Expression>,
    lower_boundary: Option<LowerBoundaryType>,
    upper_boundary: Option<UpperBoundaryType>,
}

impl PropertyIsBetweenType {
    pub const KIND: &'static str = "PropertyIsBetweenType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");
    pub const LOWER_BOUNDARY: Feature = Feature::new(Self::KIND, "lower_boundary");
    pub const UPPER_BOUNDARY: Feature = Feature::new(Self::KIND, "upper_boundary");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
            lower_boundary: None,
            upper_boundary: None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn expression_mut(&mut self) -> Option<ChildMut<'_, Expression>> {
        child_mut(&self.header, Self::EXPRESSION, &mut self.expression)
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    pub fn lower_boundary(&self) -> Option<&LowerBoundaryType> {
        self.lower_boundary.as_ref()
    }

    pub fn lower_boundary_mut(&mut self) -> Option<ChildMut<'_, LowerBoundaryType>> {
        child_mut(&self.header, Self::LOWER_BOUNDARY, &mut self.lower_boundary)
    }

    pub fn set_lower_boundary(
        &mut self,
        value: Option<LowerBoundaryType>,
    ) -> Option<LowerBoundaryType> {
        replace_child(&self.header, Self::LOWER_BOUNDARY, &mut self.lower_boundary, value)
    }

    pub fn upper_boundary(&self) -> Option<&UpperBoundaryType> {
        self.upper_boundary.as_ref()
    }

    pub fn upper_boundary_mut(&mut self) -> Option<ChildMut<'_, UpperBoundaryType>> {
        child_mut(&self.header, Self::UPPER_BOUNDARY, &mut self.upper_boundary)
    }

    pub fn set_upper_boundary(
        &mut self,
        value: Option<UpperBoundaryType>,
    ) -> Option<UpperBoundaryType> {
        replace_child(&self.header, Self::UPPER_BOUNDARY, &mut self.upper_boundary, value)
    }
}

impl_record!(
    PropertyIsBetweenType,
    PROPERTY_IS_BETWEEN_INFO,
    [
        one EXPRESSION => expression,
        one LOWER_BOUNDARY => lower_boundary,
        one UPPER_BOUNDARY => upper_boundary,
    ]
);

pub(crate) static PROPERTY_IS_BETWEEN_INFO: TypeInfo = TypeInfo {
    name: PropertyIsBetweenType::KIND,
    xml_name: "PropertyIsBetweenType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            PropertyIsBetweenType::EXPRESSION,
            "expression",
            FeatureKind::Group,
            "Expression",
        )
        .required(),
        FeatureInfo::new(
            PropertyIsBetweenType::LOWER_BOUNDARY,
            "LowerBoundary",
            FeatureKind::Containment,
            "LowerBoundaryType",
        )
        .required(),
        FeatureInfo::new(
            PropertyIsBetweenType::UPPER_BOUNDARY,
            "UpperBoundary",
            FeatureKind::Containment,
            "UpperBoundaryType",
        )
        .required(),
    ],
};

#[derive(Debug, PartialEq)]
pub struct LowerBoundaryType {
    header: ObjectHeader,
    expression: Option<Expression>,
}

impl LowerBoundaryType {
    pub const KIND: &'static str = "LowerBoundaryType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
        }
    }

    pub fn of(expression: Expression) -> Self {
        let mut boundary = Self::new();
        boundary.set_expression(Some(expression));
        boundary
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }
}

impl_record!(LowerBoundaryType, LOWER_BOUNDARY_INFO, [one EXPRESSION => expression]);

pub(crate) static LOWER_BOUNDARY_INFO: TypeInfo = TypeInfo {
    name: LowerBoundaryType::KIND,
    xml_name: "LowerBoundaryType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        LowerBoundaryType::EXPRESSION,
        "expression",
        FeatureKind::Group,
        "Expression",
    )],
};

#[derive(Debug, PartialEq)]
pub struct UpperBoundaryType {
    header: ObjectHeader,
    expression: Option<Expression>,
}

impl UpperBoundaryType {
    pub const KIND: &'static str = "UpperBoundaryType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
        }
    }

    pub fn of(expression: Expression) -> Self {
        let mut boundary = Self::new();
        boundary.set_expression(Some(expression));
        boundary
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }
}

impl_record!(UpperBoundaryType, UPPER_BOUNDARY_INFO, [one EXPRESSION => expression]);

pub(crate) static UPPER_BOUNDARY_INFO: TypeInfo = TypeInfo {
    name: UpperBoundaryType::KIND,
    xml_name: "UpperBoundaryType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        UpperBoundaryType::EXPRESSION,
        "expression",
        FeatureKind::Group,
        "Expression",
    )
    .required()],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ChangeKind, ChangeRecorder};
    use std::sync::Arc;

    #[test]
    fn test_match_flags_defaults_and_unset() {
        let mut op = BinaryComparisonOpType::new();
        assert!(!op.is_set_match_case());
        assert!(op.match_case());
        assert_eq!(op.match_action(), MatchActionType::Any);

        op.set_match_case(false);
        op.set_match_action(MatchActionType::All);
        assert!(op.is_set_match_case());
        assert!(!op.match_case());
        assert_eq!(op.match_action(), MatchActionType::All);

        op.unset_match_case();
        op.unset_match_action();
        assert!(!op.is_set_match_case());
        assert!(!op.is_set_match_action());
        assert!(op.match_case());
        assert_eq!(op.match_action(), MatchActionType::Any);
    }

    #[test]
    fn test_setting_default_reports_transition() {
        let mut op = BinaryComparisonOpType::new();
        let recorder = Arc::new(ChangeRecorder::new());
        op.add_observer(recorder.clone());

        op.set_match_case(true);
        let seen = recorder.take();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].feature, BinaryComparisonOpType::MATCH_CASE);
        assert!(!seen[0].was_set());
        assert!(!seen[0].is_touch());

        op.unset_match_case();
        let seen = recorder.take();
        assert_eq!(seen[0].kind, ChangeKind::Unset);
    }

    #[test]
    fn test_binary_tags() {
        let body = BinaryComparisonOpType::with_operands(
            Expression::value_reference("age"),
            Expression::literal("18"),
        );
        let op = ComparisonOp::binary(ComparisonOperator::PropertyIsLessThan, body).unwrap();
        assert_eq!(op.element_name(), "PropertyIsLessThan");
        assert_eq!(op.as_binary().unwrap().expressions().len(), 2);

        assert!(
            ComparisonOp::binary(ComparisonOperator::PropertyIsLike, BinaryComparisonOpType::new())
                .is_none()
        );
    }

    #[test]
    fn test_between_boundaries_are_contained() {
        let mut between = PropertyIsBetweenType::new();
        between.set_expression(Some(Expression::value_reference("depth")));
        between.set_lower_boundary(Some(LowerBoundaryType::of(Expression::literal("100"))));
        between.set_upper_boundary(Some(UpperBoundaryType::of(Expression::literal("200"))));

        let lower = between.lower_boundary().unwrap();
        assert_eq!(lower.container().unwrap().parent.id, between.id());
        assert_eq!(between.children().len(), 2);

        let old = between.set_lower_boundary(None).unwrap();
        assert!(old.container().is_none());
    }
}

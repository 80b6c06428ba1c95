//! Object Model Tests
//!
//! Containment, set flags, change notification and choice groups across
//! the FES record types.

use std::sync::Arc;

use fes_model::datatypes::{
    ComparisonOperator, MatchActionType, SortOrderType, SpatialOperator, TemporalOperator,
    UomIdentifier,
};
use fes_model::fes::{
    BinaryComparisonOpType, BinaryLogicOpType, BinaryTemporalOpType, ComparisonOp,
    ComparisonOperatorsType, DistanceBufferType, DocumentRoot, Expression, FilterCapabilitiesType,
    FilterPredicate, FilterType, LogicOp, LogicalOperatorsType, LowerBoundaryType, MeasureType,
    PredicateGroup, PredicateSlice, PropertyIsBetweenType, PropertyIsNullType, ResourceIdType,
    RootElement, ScalarCapabilitiesType, SortByType, SortPropertyType, SpatialOp, TemporalOp,
    UnaryLogicOpType, UpperBoundaryType,
};
use fes_model::model::{all_contents, verify_containment, Record};
use fes_model::notify::{ChangeKind, ChangeRecorder, SetTransition, Value};

fn equal_to(path: &str, literal: &str) -> ComparisonOp {
    ComparisonOp::binary(
        ComparisonOperator::PropertyIsEqualTo,
        BinaryComparisonOpType::with_operands(
            Expression::value_reference(path),
            Expression::literal(literal),
        ),
    )
    .unwrap()
}

fn observed<R: Record>(record: &mut R) -> Arc<ChangeRecorder> {
    let recorder = Arc::new(ChangeRecorder::new());
    record.add_observer(recorder.clone());
    recorder
}

// =============================================================================
// Set flags
// =============================================================================

#[test]
fn test_unsettable_attribute_lifecycle() {
    let mut op = BinaryComparisonOpType::new();
    assert!(!op.is_set_match_case());
    assert!(op.match_case());
    assert!(!op.is_set_match_action());
    assert_eq!(op.match_action(), MatchActionType::Any);

    op.set_match_case(false);
    op.set_match_action(MatchActionType::All);
    assert!(op.is_set_match_case());
    assert!(!op.match_case());
    assert_eq!(op.match_action(), MatchActionType::All);

    op.unset_match_case();
    op.unset_match_action();
    assert!(!op.is_set_match_case());
    assert!(op.match_case());
    assert_eq!(op.match_action(), MatchActionType::Any);
}

#[test]
fn test_setting_the_default_still_marks_set() {
    let mut key = SortPropertyType::new();
    key.set_sort_order(SortOrderType::Desc);
    assert!(key.is_set_sort_order());
    assert_eq!(key.sort_order(), SortOrderType::Desc);
}

#[test]
fn test_measure_value_defaults_to_zero() {
    let mut measure = MeasureType::new();
    assert!(!measure.is_set_value());
    assert_eq!(measure.value(), 0.0);

    measure.set_value(12.5);
    measure.set_uom(Some(UomIdentifier::Symbol("m".into())));
    assert_eq!(measure.value(), 12.5);
    assert_eq!(measure.uom(), Some(&UomIdentifier::Symbol("m".into())));

    measure.unset_value();
    assert_eq!(measure.value(), 0.0);
}

// =============================================================================
// Containment
// =============================================================================

#[test]
fn test_replacing_child_detaches_previous() {
    let mut between = PropertyIsBetweenType::new();
    between.set_expression(Some(Expression::literal("a")));
    let old = between.set_expression(Some(Expression::literal("b"))).unwrap();

    let old_literal = old.as_literal().unwrap();
    assert!(old_literal.container().is_none());
    let new_literal = between.expression().unwrap().as_literal().unwrap();
    assert_eq!(new_literal.container().unwrap().parent, between.object_ref());
    assert_eq!(new_literal.container().unwrap().feature, PropertyIsBetweenType::EXPRESSION);
}

#[test]
fn test_child_taken_from_another_parent_is_relinked() {
    let mut first = FilterCapabilitiesType::new();
    let mut scalar = ScalarCapabilitiesType::new();
    scalar.set_logical_operators(Some(LogicalOperatorsType::new()));
    first.set_scalar_capabilities(Some(scalar));

    // Swap the section out through the mutable accessor
    let taken = std::mem::replace(
        &mut *first.scalar_capabilities_mut().unwrap(),
        ScalarCapabilitiesType::new(),
    );
    assert_eq!(taken.container().unwrap().parent, first.object_ref());

    let mut second = FilterCapabilitiesType::new();
    second.set_scalar_capabilities(Some(taken));
    let moved = second.scalar_capabilities().unwrap();
    assert_eq!(moved.container().unwrap().parent, second.object_ref());
    assert!(second.supports_logical());
    assert!(!first.supports_logical());

    // the placeholder left behind was attached when the accessor dropped
    let placeholder = first.scalar_capabilities().unwrap();
    assert_eq!(placeholder.container().unwrap().parent, first.object_ref());
    assert!(verify_containment(&first).is_consistent());
    assert!(verify_containment(&second).is_consistent());
}

#[test]
fn test_overwriting_a_list_entry_relinks_it() {
    let mut and = BinaryLogicOpType::with_predicates([
        FilterPredicate::from(ResourceIdType::with_rid("a")),
        FilterPredicate::from(ResourceIdType::with_rid("c")),
    ]);
    let recorder = observed(&mut and);

    *and.predicates_mut().get_mut(0).unwrap() = ResourceIdType::with_rid("b").into();

    let report = verify_containment(&and);
    assert!(report.is_consistent());
    let replaced = and.predicates()[0].record();
    assert_eq!(replaced.container().unwrap().parent, and.object_ref());
    assert_eq!(replaced.container().unwrap().feature, BinaryLogicOpType::PREDICATES);

    let seen = recorder.take();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, ChangeKind::Set);
    assert_eq!(seen[0].position, Some(0));
    assert_eq!(seen[0].new_value.as_object(), Some(replaced.object_ref()));
}

#[test]
fn test_editing_in_place_leaves_parent_silent() {
    let mut sort = SortByType::new();
    sort.add_key("name", SortOrderType::Asc);
    let recorder = observed(&mut sort);

    sort.sort_properties_mut().get_mut(0).unwrap().set_sort_order(SortOrderType::Desc);
    sort.add_key("date", SortOrderType::Asc).set_sort_order(SortOrderType::Desc);

    assert_eq!(sort.sort_properties()[0].sort_order(), SortOrderType::Desc);
    assert_eq!(sort.sort_properties()[1].sort_order(), SortOrderType::Desc);
    // only the second key's Add reaches the sort record
    let kinds: Vec<_> = recorder.take().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [ChangeKind::Add]);
    assert!(verify_containment(&sort).is_consistent());
}

#[test]
fn test_overwriting_single_children_relinks_them() {
    let mut null = PropertyIsNullType::new();
    null.set_expression(Some(Expression::literal("a")));
    let recorder = observed(&mut null);
    *null.expression_mut().unwrap() = Expression::literal("b");
    assert!(verify_containment(&null).is_consistent());
    assert_eq!(recorder.take()[0].feature, PropertyIsNullType::EXPRESSION);

    let mut between = PropertyIsBetweenType::new();
    between.set_lower_boundary(Some(LowerBoundaryType::of(Expression::literal("1"))));
    between.set_upper_boundary(Some(UpperBoundaryType::of(Expression::literal("9"))));
    *between.lower_boundary_mut().unwrap() = LowerBoundaryType::of(Expression::literal("2"));
    *between.upper_boundary_mut().unwrap() = UpperBoundaryType::of(Expression::literal("8"));
    assert!(verify_containment(&between).is_consistent());

    let mut doc = DocumentRoot::with_root(RootElement::SortBy(SortByType::new()));
    *doc.root_mut().unwrap() = RootElement::Filter(FilterType::new());
    assert!(verify_containment(&doc).is_consistent());
    assert_eq!(doc.filter().unwrap().container().unwrap().parent, doc.object_ref());

    let mut caps = FilterCapabilitiesType::new();
    caps.set_scalar_capabilities(Some(ScalarCapabilitiesType::new()));
    *caps.scalar_capabilities_mut().unwrap() = ScalarCapabilitiesType::new();
    assert!(verify_containment(&caps).is_consistent());
}

#[test]
fn test_clearing_a_list_detaches_everything() {
    let mut sort = SortByType::new();
    sort.sort_properties_mut().extend([
        SortPropertyType::by("a", SortOrderType::Asc),
        SortPropertyType::by("b", SortOrderType::Desc),
    ]);
    let removed = sort.sort_properties_mut().clear();

    assert!(sort.sort_properties().is_empty());
    assert_eq!(removed.len(), 2);
    assert!(removed.iter().all(|p| p.container().is_none()));
}

#[test]
fn test_list_remove_and_set() {
    let mut ops = ComparisonOperatorsType::of([
        ComparisonOperator::PropertyIsEqualTo,
        ComparisonOperator::PropertyIsLike,
    ]);
    let removed = ops.comparison_operators_mut().remove(0).unwrap();
    assert!(removed.container().is_none());
    assert!(ops.comparison_operators_mut().remove(5).is_none());
    assert_eq!(ops.comparison_operators().len(), 1);
    assert!(ops.supports("PropertyIsLike"));
    assert!(!ops.supports("PropertyIsEqualTo"));
}

#[test]
fn test_deep_tree_walk() {
    let inner_or = BinaryLogicOpType::with_predicates([equal_to("a", "1"), equal_to("b", "2")]);
    let not = UnaryLogicOpType::negating(LogicOp::Or(inner_or));
    let and = BinaryLogicOpType::with_predicates([
        FilterPredicate::Logic(LogicOp::Not(not)),
        FilterPredicate::from(equal_to("c", "3")),
    ]);
    let filter = FilterType::with_predicate(LogicOp::And(and));

    let kinds: Vec<_> = all_contents(&filter).iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        [
            "BinaryLogicOpType",
            "UnaryLogicOpType",
            "BinaryLogicOpType",
            "BinaryComparisonOpType",
            "LiteralType",
            "BinaryComparisonOpType",
            "LiteralType",
            "BinaryComparisonOpType",
            "LiteralType",
        ]
    );

    let report = verify_containment(&filter);
    assert!(report.is_consistent());
    assert_eq!(report.checked, 9);
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_set_and_unset_notifications() {
    let mut op = BinaryComparisonOpType::new();
    let recorder = observed(&mut op);

    op.set_match_case(false);
    op.unset_match_case();
    op.unset_match_case();

    let seen = recorder.take();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].kind, ChangeKind::Set);
    assert_eq!(seen[0].feature, BinaryComparisonOpType::MATCH_CASE);
    assert_eq!(seen[0].old_value, Value::Bool(true));
    assert_eq!(seen[0].new_value, Value::Bool(false));
    assert_eq!(seen[1].kind, ChangeKind::Unset);
    assert_eq!(seen[1].transition, Some(SetTransition { was_set: true, is_set: false }));
    // unsetting an unset feature is a touch
    assert!(seen[2].is_touch());
    assert_eq!(seen[0].notifier, op.object_ref());
}

#[test]
fn test_list_notifications() {
    let mut sort = SortByType::new();
    let recorder = observed(&mut sort);

    sort.sort_properties_mut().push(SortPropertyType::by("a", SortOrderType::Asc));
    sort.sort_properties_mut().extend([
        SortPropertyType::by("b", SortOrderType::Asc),
        SortPropertyType::by("c", SortOrderType::Asc),
    ]);
    sort.sort_properties_mut().remove(1);
    sort.sort_properties_mut().clear();

    let kinds: Vec<_> = recorder.take().iter().map(|n| (n.kind, n.position)).collect();
    assert_eq!(
        kinds,
        [
            (ChangeKind::Add, Some(0)),
            (ChangeKind::AddMany, Some(1)),
            (ChangeKind::Remove, Some(1)),
            (ChangeKind::RemoveMany, None),
        ]
    );
}

#[test]
fn test_disabled_delivery_is_silent() {
    let mut key = SortPropertyType::new();
    let recorder = observed(&mut key);
    key.set_deliver(false);
    key.set_sort_order(SortOrderType::Desc);
    assert!(recorder.is_empty());

    key.set_deliver(true);
    key.set_value_reference(Some("name".into()));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_closure_observer() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let mut id = ResourceIdType::new();
    id.add_observer(Arc::new(move |_: &fes_model::Notification| {
        seen.fetch_add(1, Ordering::SeqCst);
    }));
    id.set_rid(Some("r1".into()));
    id.set_previous_rid(Some("r0".into()));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Choice groups
// =============================================================================

#[test]
fn test_group_order_and_views() {
    let mut and = BinaryLogicOpType::new();
    and.predicates_mut().extend([
        FilterPredicate::from(equal_to("a", "1")),
        FilterPredicate::from(SpatialOp::DWithin(DistanceBufferType::new())),
        FilterPredicate::from(TemporalOp::new(
            TemporalOperator::During,
            BinaryTemporalOpType::new(),
        )),
        FilterPredicate::from(equal_to("b", "2")),
        FilterPredicate::from(ResourceIdType::with_rid("r")),
    ]);

    let tags: Vec<_> = and.predicates().iter().map(FilterPredicate::element_name).collect();
    assert_eq!(
        tags,
        ["PropertyIsEqualTo", "DWithin", "During", "PropertyIsEqualTo", "ResourceId"]
    );

    let paths: Vec<_> = and
        .predicates()
        .comparison_ops()
        .iter()
        .filter_map(|op| op.as_binary())
        .filter_map(|b| b.expressions()[0].as_value_reference())
        .collect();
    assert_eq!(paths, ["a", "b"]);

    assert_eq!(and.predicates().spatial_ops()[0].operator(), SpatialOperator::DWithin);
    assert_eq!(and.predicates().temporal_ops().len(), 1);
    assert_eq!(and.predicates().of_group(PredicateGroup::Id).len(), 1);
    assert!(and.predicates().logic_ops().is_empty());
}

#[test]
fn test_sort_by_example() {
    let mut sort = SortByType::new();
    sort.sort_properties_mut().extend([
        SortPropertyType::by("name", SortOrderType::Asc),
        SortPropertyType::by("date", SortOrderType::Desc),
    ]);

    let props = sort.sort_properties();
    assert_eq!(props.len(), 2);
    assert_eq!(props[0].value_reference(), Some("name"));
    assert_eq!(props[0].sort_order(), SortOrderType::Asc);
    assert!(props[0].is_set_sort_order());
    assert_eq!(props[1].value_reference(), Some("date"));
    assert_eq!(props[1].sort_order(), SortOrderType::Desc);
    assert!(props[1].is_set_sort_order());
}

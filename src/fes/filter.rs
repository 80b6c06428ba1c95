//! The `Filter` element

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::fes::predicate::FilterPredicate;
use crate::fes::FES_NAMESPACE;
use crate::model::{impl_record, ContainmentListMut, ObjectHeader};
use crate::notify::Feature;

/// Root of a filter expression
#[derive(Debug, PartialEq)]
pub struct FilterType {
    header: ObjectHeader,
    predicates: Vec<FilterPredicate>,
}

impl FilterType {
    pub const KIND: &'static str = "FilterType";
    pub const PREDICATES: Feature = Feature::new(Self::KIND, "predicates");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            predicates: Vec::new(),
        }
    }

    pub fn with_predicate(predicate: impl Into<FilterPredicate>) -> Self {
        let mut filter = Self::new();
        filter.predicates_mut().push(predicate.into());
        filter
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn predicates_mut(&mut self) -> ContainmentListMut<'_, FilterPredicate> {
        ContainmentListMut::new(&self.header, Self::PREDICATES, &mut self.predicates)
    }

    /// First predicate; a well-formed filter has exactly one unless it
    /// lists resource ids
    pub fn predicate(&self) -> Option<&FilterPredicate> {
        self.predicates.first()
    }
}

impl_record!(FilterType, FILTER_INFO, [many PREDICATES => predicates]);

pub(crate) static FILTER_INFO: TypeInfo = TypeInfo {
    name: FilterType::KIND,
    xml_name: "FilterType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        FilterType::PREDICATES,
        "FilterPredicates",
        FeatureKind::Group,
        "FilterPredicate",
    )
    .bounds(1, None)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ComparisonOperator;
    use crate::fes::comparison::{BinaryComparisonOpType, ComparisonOp};
    use crate::fes::expression::Expression;
    use crate::fes::predicate::{PredicateGroup, PredicateSlice, ResourceIdType};
    use crate::model::{all_contents, verify_containment, Record};

    fn equal_to(path: &str, value: &str) -> ComparisonOp {
        let body = BinaryComparisonOpType::with_operands(
            Expression::value_reference(path),
            Expression::literal(value),
        );
        ComparisonOp::binary(ComparisonOperator::PropertyIsEqualTo, body).unwrap()
    }

    #[test]
    fn test_filter_owns_its_predicate_tree() {
        let filter = FilterType::with_predicate(equal_to("name", "Main St"));
        let predicate = filter.predicate().unwrap();
        assert_eq!(predicate.element_name(), "PropertyIsEqualTo");
        assert_eq!(predicate.record().container().unwrap().parent, filter.object_ref());

        // filter -> comparison body -> literal
        assert_eq!(all_contents(&filter).len(), 2);
        assert!(verify_containment(&filter).is_consistent());
    }

    #[test]
    fn test_group_views_preserve_order() {
        let mut filter = FilterType::new();
        filter.predicates_mut().extend([
            FilterPredicate::from(ResourceIdType::with_rid("r1")),
            FilterPredicate::from(equal_to("a", "1")),
            FilterPredicate::from(ResourceIdType::with_rid("r2")),
        ]);

        let rids: Vec<_> = filter
            .predicates()
            .ids()
            .iter()
            .filter_map(|id| id.as_resource_id())
            .filter_map(|r| r.rid())
            .collect();
        assert_eq!(rids, ["r1", "r2"]);
        assert_eq!(filter.predicates().comparison_ops().len(), 1);
        assert_eq!(filter.predicates().of_group(PredicateGroup::Id).len(), 2);
    }
}

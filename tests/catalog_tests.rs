//! Catalog Tests

use fes_model::catalog::{self, FeatureKind};

#[test]
fn test_every_type_resolves_by_both_names() {
    for info in catalog::types() {
        assert_eq!(catalog::lookup(info.name).unwrap().name, info.name);
        let found = catalog::lookup(info.xml_name).unwrap();
        assert!(found.name == info.xml_name || found.xml_name == info.xml_name);
    }
}

#[test]
fn test_unknown_type() {
    let err = catalog::lookup("PropertyIsFuzzyType").unwrap_err();
    assert_eq!(err.to_string(), "Unknown schema type: PropertyIsFuzzyType");
}

#[test]
fn test_sort_order_is_unsettable_with_default() {
    let info = catalog::lookup("SortPropertyType").unwrap();
    let order = info.require_feature("sort_order").unwrap();
    assert_eq!(order.xml_name, "SortOrder");
    assert_eq!(order.kind, FeatureKind::Element);
    assert!(order.unsettable);
    assert_eq!(order.default, Some("DESC"));
    assert!(info.require_feature("direction").is_err());
}

#[test]
fn test_filter_requires_a_predicate() {
    let info = catalog::lookup("FilterType").unwrap();
    let predicates = info
        .features
        .iter()
        .find(|f| f.kind == FeatureKind::Group)
        .unwrap();
    assert_eq!(predicates.lower, 1);
    assert!(predicates.is_many());
}

#[test]
fn test_fingerprint_is_stable_across_calls() {
    let a = catalog::fingerprint().unwrap();
    let b = catalog::fingerprint().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_str().len(), 64);
    assert!(a.matches(&a.as_str().to_uppercase()));
}

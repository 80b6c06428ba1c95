//! Sort specifications

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::SortOrderType;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    impl_record, set_attribute, set_settable, unset_settable, ChildMut, ContainmentListMut,
    ObjectHeader, Settable,
};
use crate::notify::Feature;

/// Ordered list of sort keys
#[derive(Debug, PartialEq)]
pub struct SortByType {
    header: ObjectHeader,
    sort_properties: Vec<SortPropertyType>,
}

impl SortByType {
    pub const KIND: &'static str = "SortByType";
    pub const SORT_PROPERTIES: Feature = Feature::new(Self::KIND, "sort_properties");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            sort_properties: Vec::new(),
        }
    }

    pub fn sort_properties(&self) -> &[SortPropertyType] {
        &self.sort_properties
    }

    pub fn sort_properties_mut(&mut self) -> ContainmentListMut<'_, SortPropertyType> {
        ContainmentListMut::new(&self.header, Self::SORT_PROPERTIES, &mut self.sort_properties)
    }

    /// Append a key and return it for further edits
    pub fn add_key(
        &mut self,
        path: impl Into<String>,
        order: SortOrderType,
    ) -> ChildMut<'_, SortPropertyType> {
        self.sort_properties_mut().push_mut(SortPropertyType::by(path, order))
    }
}

impl_record!(SortByType, SORT_BY_INFO, [many SORT_PROPERTIES => sort_properties]);

pub(crate) static SORT_BY_INFO: TypeInfo = TypeInfo {
    name: SortByType::KIND,
    xml_name: "SortByType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        SortByType::SORT_PROPERTIES,
        "SortProperty",
        FeatureKind::Containment,
        "SortPropertyType",
    )
    .bounds(1, None)],
};

/// One sort key: a property path and a direction
#[derive(Debug, PartialEq)]
pub struct SortPropertyType {
    header: ObjectHeader,
    value_reference: Option<String>,
    sort_order: Settable<SortOrderType>,
}

impl SortPropertyType {
    pub const KIND: &'static str = "SortPropertyType";
    pub const VALUE_REFERENCE: Feature = Feature::new(Self::KIND, "value_reference");
    pub const SORT_ORDER: Feature = Feature::new(Self::KIND, "sort_order");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            value_reference: None,
            sort_order: Settable::new(SortOrderType::default()),
        }
    }

    /// Key with an explicitly set direction
    pub fn by(path: impl Into<String>, order: SortOrderType) -> Self {
        let mut key = Self::new();
        key.value_reference = Some(path.into());
        key.sort_order.set(order);
        key
    }

    pub fn value_reference(&self) -> Option<&str> {
        self.value_reference.as_deref()
    }

    pub fn set_value_reference(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::VALUE_REFERENCE, &mut self.value_reference, value);
    }

    /// `DESC` (the first enumeration literal) while unset
    pub fn sort_order(&self) -> SortOrderType {
        *self.sort_order.get()
    }

    pub fn set_sort_order(&mut self, value: SortOrderType) {
        set_settable(&self.header, Self::SORT_ORDER, &mut self.sort_order, value);
    }

    pub fn unset_sort_order(&mut self) {
        unset_settable(&self.header, Self::SORT_ORDER, &mut self.sort_order);
    }

    pub fn is_set_sort_order(&self) -> bool {
        self.sort_order.is_set()
    }
}

impl_record!(SortPropertyType, SORT_PROPERTY_INFO, []);

pub(crate) static SORT_PROPERTY_INFO: TypeInfo = TypeInfo {
    name: SortPropertyType::KIND,
    xml_name: "SortPropertyType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            SortPropertyType::VALUE_REFERENCE,
            "ValueReference",
            FeatureKind::Element,
            "string",
        )
        .required(),
        FeatureInfo::new(
            SortPropertyType::SORT_ORDER,
            "SortOrder",
            FeatureKind::Element,
            "SortOrderType",
        )
        .unsettable("DESC"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::model::Record;
    use crate::notify::{ChangeKind, ChangeRecorder, SetTransition, Value};

    #[test]
    fn test_sort_by_two_keys() {
        let mut sort = SortByType::new();
        sort.add_key("name", SortOrderType::Asc);
        sort.add_key("date", SortOrderType::Desc);

        let keys: Vec<_> = sort
            .sort_properties()
            .iter()
            .map(|p| (p.value_reference().unwrap(), p.sort_order(), p.is_set_sort_order()))
            .collect();
        assert_eq!(
            keys,
            [("name", SortOrderType::Asc, true), ("date", SortOrderType::Desc, true)]
        );
        for p in sort.sort_properties() {
            assert_eq!(p.container().unwrap().parent, sort.object_ref());
        }
    }

    #[test]
    fn test_unset_sort_order_reports_default() {
        let mut key = SortPropertyType::new();
        assert!(!key.is_set_sort_order());
        assert_eq!(key.sort_order(), SortOrderType::Desc);

        let recorder = Arc::new(ChangeRecorder::new());
        key.add_observer(recorder.clone());

        key.set_sort_order(SortOrderType::Asc);
        key.unset_sort_order();
        assert_eq!(key.sort_order(), SortOrderType::Desc);

        let seen = recorder.take();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].kind, ChangeKind::Set);
        assert_eq!(seen[0].old_value, Value::Text("DESC".into()));
        assert_eq!(seen[0].new_value, Value::Text("ASC".into()));
        assert_eq!(
            seen[0].transition,
            Some(SetTransition { was_set: false, is_set: true })
        );
        assert_eq!(seen[1].kind, ChangeKind::Unset);
        assert_eq!(seen[1].old_value, Value::Text("ASC".into()));
        assert_eq!(seen[1].new_value, Value::Text("DESC".into()));
    }
}

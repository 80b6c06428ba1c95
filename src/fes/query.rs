//! Ad hoc query expressions, as embedded by WFS

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{format_list, parse_aliases, parse_type_names, TypeName};
use crate::error::Result;
use crate::fes::filter::FilterType;
use crate::fes::sort::SortByType;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    impl_record, replace_child, set_attribute, Contained, ContainmentListMut, ObjectHeader, Record,
};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::AnyElement;

/// Member of the `AbstractSelectionClause` substitution group
#[derive(Debug, PartialEq)]
pub enum SelectionClause {
    Filter(FilterType),
    /// Selection clause defined by another schema
    Other(AnyElement),
}

impl SelectionClause {
    pub fn element_name(&self) -> &str {
        match self {
            SelectionClause::Filter(_) => "Filter",
            SelectionClause::Other(e) => e.name.local_part(),
        }
    }

    pub fn as_filter(&self) -> Option<&FilterType> {
        match self {
            SelectionClause::Filter(f) => Some(f),
            SelectionClause::Other(_) => None,
        }
    }
}

impl ToValue for SelectionClause {
    fn to_value(&self) -> Value {
        match self {
            SelectionClause::Filter(f) => Value::entry("Filter", f.to_value()),
            SelectionClause::Other(e) => e.to_value(),
        }
    }
}

impl Contained for SelectionClause {
    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            SelectionClause::Filter(f) => Some(f),
            SelectionClause::Other(_) => None,
        }
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            SelectionClause::Filter(f) => Some(f),
            SelectionClause::Other(_) => None,
        }
    }
}

/// Member of the `AbstractSortingClause` substitution group
#[derive(Debug, PartialEq)]
pub enum SortingClause {
    SortBy(SortByType),
    Other(AnyElement),
}

impl SortingClause {
    pub fn element_name(&self) -> &str {
        match self {
            SortingClause::SortBy(_) => "SortBy",
            SortingClause::Other(e) => e.name.local_part(),
        }
    }

    pub fn as_sort_by(&self) -> Option<&SortByType> {
        match self {
            SortingClause::SortBy(s) => Some(s),
            SortingClause::Other(_) => None,
        }
    }
}

impl ToValue for SortingClause {
    fn to_value(&self) -> Value {
        match self {
            SortingClause::SortBy(s) => Value::entry("SortBy", s.to_value()),
            SortingClause::Other(e) => e.to_value(),
        }
    }
}

impl Contained for SortingClause {
    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            SortingClause::SortBy(s) => Some(s),
            SortingClause::Other(_) => None,
        }
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            SortingClause::SortBy(s) => Some(s),
            SortingClause::Other(_) => None,
        }
    }
}

/// Query over one or more feature types with optional selection,
/// projection and sorting clauses
#[derive(Debug, PartialEq)]
pub struct AdhocQueryExpressionType {
    header: ObjectHeader,
    handle: Option<String>,
    type_names: Vec<TypeName>,
    aliases: Vec<String>,
    projection_clauses: Vec<AnyElement>,
    selection_clause: Option<SelectionClause>,
    sorting_clause: Option<SortingClause>,
}

impl AdhocQueryExpressionType {
    pub const KIND: &'static str = "AdhocQueryExpressionType";
    pub const HANDLE: Feature = Feature::new(Self::KIND, "handle");
    pub const TYPE_NAMES: Feature = Feature::new(Self::KIND, "type_names");
    pub const ALIASES: Feature = Feature::new(Self::KIND, "aliases");
    pub const PROJECTION_CLAUSES: Feature = Feature::new(Self::KIND, "projection_clauses");
    pub const SELECTION_CLAUSE: Feature = Feature::new(Self::KIND, "selection_clause");
    pub const SORTING_CLAUSE: Feature = Feature::new(Self::KIND, "sorting_clause");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            handle: None,
            type_names: Vec::new(),
            aliases: Vec::new(),
            projection_clauses: Vec::new(),
            selection_clause: None,
            sorting_clause: None,
        }
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    pub fn set_handle(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::HANDLE, &mut self.handle, value);
    }

    pub fn type_names(&self) -> &[TypeName] {
        &self.type_names
    }

    pub fn type_names_mut(&mut self) -> ContainmentListMut<'_, TypeName> {
        ContainmentListMut::new(&self.header, Self::TYPE_NAMES, &mut self.type_names)
    }

    /// Replace the type names from their lexical list form.
    /// On error the current list is left untouched.
    pub fn set_type_names_lexical(&mut self, s: &str) -> Result<()> {
        let names = parse_type_names(s)?;
        self.type_names_mut().replace_all(names);
        Ok(())
    }

    pub fn type_names_lexical(&self) -> String {
        format_list(&self.type_names)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> ContainmentListMut<'_, String> {
        ContainmentListMut::new(&self.header, Self::ALIASES, &mut self.aliases)
    }

    pub fn set_aliases_lexical(&mut self, s: &str) -> Result<()> {
        let aliases = parse_aliases(s)?;
        self.aliases_mut().replace_all(aliases);
        Ok(())
    }

    /// Alias paired with the type name at the same position
    pub fn alias_for(&self, type_name: &TypeName) -> Option<&str> {
        let index = self.type_names.iter().position(|t| t == type_name)?;
        self.aliases.get(index).map(String::as_str)
    }

    pub fn projection_clauses(&self) -> &[AnyElement] {
        &self.projection_clauses
    }

    pub fn projection_clauses_mut(&mut self) -> ContainmentListMut<'_, AnyElement> {
        ContainmentListMut::new(
            &self.header,
            Self::PROJECTION_CLAUSES,
            &mut self.projection_clauses,
        )
    }

    pub fn selection_clause(&self) -> Option<&SelectionClause> {
        self.selection_clause.as_ref()
    }

    pub fn set_selection_clause(
        &mut self,
        value: Option<SelectionClause>,
    ) -> Option<SelectionClause> {
        replace_child(&self.header, Self::SELECTION_CLAUSE, &mut self.selection_clause, value)
    }

    /// The selection clause when it is an FES `Filter`
    pub fn filter(&self) -> Option<&FilterType> {
        self.selection_clause.as_ref()?.as_filter()
    }

    pub fn sorting_clause(&self) -> Option<&SortingClause> {
        self.sorting_clause.as_ref()
    }

    pub fn set_sorting_clause(&mut self, value: Option<SortingClause>) -> Option<SortingClause> {
        replace_child(&self.header, Self::SORTING_CLAUSE, &mut self.sorting_clause, value)
    }

    pub fn sort_by(&self) -> Option<&SortByType> {
        self.sorting_clause.as_ref()?.as_sort_by()
    }
}

impl_record!(
    AdhocQueryExpressionType,
    ADHOC_QUERY_EXPRESSION_INFO,
    [
        one SELECTION_CLAUSE => selection_clause,
        one SORTING_CLAUSE => sorting_clause,
    ]
);

pub(crate) static ADHOC_QUERY_EXPRESSION_INFO: TypeInfo = TypeInfo {
    name: AdhocQueryExpressionType::KIND,
    xml_name: "AbstractAdhocQueryExpressionType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            AdhocQueryExpressionType::HANDLE,
            "handle",
            FeatureKind::Attribute,
            "string",
        ),
        FeatureInfo::new(
            AdhocQueryExpressionType::TYPE_NAMES,
            "typeNames",
            FeatureKind::Attribute,
            "TypeNamesListType",
        )
        .bounds(1, None),
        FeatureInfo::new(
            AdhocQueryExpressionType::ALIASES,
            "aliases",
            FeatureKind::Attribute,
            "AliasesType",
        )
        .many(),
        FeatureInfo::new(
            AdhocQueryExpressionType::PROJECTION_CLAUSES,
            "AbstractProjectionClause",
            FeatureKind::Wildcard,
            "AnyElement",
        )
        .many(),
        FeatureInfo::new(
            AdhocQueryExpressionType::SELECTION_CLAUSE,
            "AbstractSelectionClause",
            FeatureKind::Group,
            "SelectionClause",
        ),
        FeatureInfo::new(
            AdhocQueryExpressionType::SORTING_CLAUSE,
            "AbstractSortingClause",
            FeatureKind::Group,
            "SortingClause",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::SortOrderType;
    use crate::fes::predicate::ResourceIdType;

    #[test]
    fn test_lexical_lists() {
        let mut query = AdhocQueryExpressionType::new();
        query.set_type_names_lexical("app:Road app:River").unwrap();
        query.set_aliases_lexical("r v").unwrap();

        assert_eq!(query.type_names().len(), 2);
        assert_eq!(query.type_names_lexical(), "app:Road app:River");
        let river: TypeName = "app:River".parse().unwrap();
        assert_eq!(query.alias_for(&river), Some("v"));

        assert!(query.set_type_names_lexical("app:Road 1bad").is_err());
        assert_eq!(query.type_names().len(), 2);
    }

    #[test]
    fn test_clauses_are_contained() {
        let mut query = AdhocQueryExpressionType::new();
        query.set_selection_clause(Some(SelectionClause::Filter(FilterType::with_predicate(
            ResourceIdType::with_rid("road.1"),
        ))));
        let mut sort = SortByType::new();
        sort.add_key("name", SortOrderType::Asc);
        query.set_sorting_clause(Some(SortingClause::SortBy(sort)));

        let filter = query.filter().unwrap();
        assert_eq!(filter.container().unwrap().parent, query.object_ref());
        assert_eq!(
            query.sort_by().unwrap().container().unwrap().feature,
            AdhocQueryExpressionType::SORTING_CLAUSE
        );
        assert_eq!(query.children().len(), 2);
    }
}

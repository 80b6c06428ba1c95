//! Filter predicates, resource ids and extension operators

use serde::Serialize;

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{VersionType, XsdDateTime};
use crate::fes::comparison::ComparisonOp;
use crate::fes::expression::FunctionType;
use crate::fes::logic::LogicOp;
use crate::fes::spatial::SpatialOp;
use crate::fes::temporal::TemporalOp;
use crate::fes::FES_NAMESPACE;
use crate::model::{impl_record, replace_child, set_attribute, Contained, ObjectHeader, Record};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::AnyElement;

// =============================================================================
// FilterPredicates group
// =============================================================================

/// Which alternative of the predicate choice an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PredicateGroup {
    Comparison,
    Spatial,
    Temporal,
    Logic,
    Extension,
    Function,
    Id,
}

impl PredicateGroup {
    /// Schema name of the group
    pub fn group_name(&self) -> &'static str {
        match self {
            PredicateGroup::Comparison => "comparisonOps",
            PredicateGroup::Spatial => "spatialOps",
            PredicateGroup::Temporal => "temporalOps",
            PredicateGroup::Logic => "logicOps",
            PredicateGroup::Extension => "extensionOps",
            PredicateGroup::Function => "Function",
            PredicateGroup::Id => "_Id",
        }
    }
}

/// One entry of a predicate choice (`Filter`, `Not`, `And`, `Or`)
#[derive(Debug, PartialEq)]
pub enum FilterPredicate {
    Comparison(ComparisonOp),
    Spatial(SpatialOp),
    Temporal(TemporalOp),
    Logic(LogicOp),
    Extension(ExtensionOpsType),
    Function(FunctionType),
    Id(IdPredicate),
}

impl FilterPredicate {
    pub fn group(&self) -> PredicateGroup {
        match self {
            FilterPredicate::Comparison(_) => PredicateGroup::Comparison,
            FilterPredicate::Spatial(_) => PredicateGroup::Spatial,
            FilterPredicate::Temporal(_) => PredicateGroup::Temporal,
            FilterPredicate::Logic(_) => PredicateGroup::Logic,
            FilterPredicate::Extension(_) => PredicateGroup::Extension,
            FilterPredicate::Function(_) => PredicateGroup::Function,
            FilterPredicate::Id(_) => PredicateGroup::Id,
        }
    }

    /// Concrete element tag, e.g. `PropertyIsEqualTo` or `ResourceId`
    pub fn element_name(&self) -> &'static str {
        match self {
            FilterPredicate::Comparison(op) => op.element_name(),
            FilterPredicate::Spatial(op) => op.element_name(),
            FilterPredicate::Temporal(op) => op.element_name(),
            FilterPredicate::Logic(op) => op.element_name(),
            FilterPredicate::Extension(_) => "extensionOps",
            FilterPredicate::Function(_) => "Function",
            FilterPredicate::Id(id) => id.element_name(),
        }
    }

    pub fn record(&self) -> &dyn Record {
        match self {
            FilterPredicate::Comparison(op) => op.record(),
            FilterPredicate::Spatial(op) => op.record(),
            FilterPredicate::Temporal(op) => op.body(),
            FilterPredicate::Logic(op) => op.record(),
            FilterPredicate::Extension(ext) => ext,
            FilterPredicate::Function(f) => f,
            FilterPredicate::Id(id) => id.record(),
        }
    }

    pub fn record_mut(&mut self) -> &mut dyn Record {
        match self {
            FilterPredicate::Comparison(op) => op.record_mut(),
            FilterPredicate::Spatial(op) => op.record_mut(),
            FilterPredicate::Temporal(op) => op.body_mut(),
            FilterPredicate::Logic(op) => op.record_mut(),
            FilterPredicate::Extension(ext) => ext,
            FilterPredicate::Function(f) => f,
            FilterPredicate::Id(id) => id.record_mut(),
        }
    }

    pub fn as_comparison(&self) -> Option<&ComparisonOp> {
        match self {
            FilterPredicate::Comparison(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_spatial(&self) -> Option<&SpatialOp> {
        match self {
            FilterPredicate::Spatial(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_temporal(&self) -> Option<&TemporalOp> {
        match self {
            FilterPredicate::Temporal(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_logic(&self) -> Option<&LogicOp> {
        match self {
            FilterPredicate::Logic(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> Option<&ExtensionOpsType> {
        match self {
            FilterPredicate::Extension(ext) => Some(ext),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            FilterPredicate::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<&IdPredicate> {
        match self {
            FilterPredicate::Id(id) => Some(id),
            _ => None,
        }
    }
}

impl From<ComparisonOp> for FilterPredicate {
    fn from(op: ComparisonOp) -> Self {
        FilterPredicate::Comparison(op)
    }
}

impl From<SpatialOp> for FilterPredicate {
    fn from(op: SpatialOp) -> Self {
        FilterPredicate::Spatial(op)
    }
}

impl From<TemporalOp> for FilterPredicate {
    fn from(op: TemporalOp) -> Self {
        FilterPredicate::Temporal(op)
    }
}

impl From<LogicOp> for FilterPredicate {
    fn from(op: LogicOp) -> Self {
        FilterPredicate::Logic(op)
    }
}

impl From<ExtensionOpsType> for FilterPredicate {
    fn from(ext: ExtensionOpsType) -> Self {
        FilterPredicate::Extension(ext)
    }
}

impl From<FunctionType> for FilterPredicate {
    fn from(f: FunctionType) -> Self {
        FilterPredicate::Function(f)
    }
}

impl From<ResourceIdType> for FilterPredicate {
    fn from(id: ResourceIdType) -> Self {
        FilterPredicate::Id(IdPredicate::ResourceId(id))
    }
}

impl ToValue for FilterPredicate {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.record().to_value())
    }
}

impl Contained for FilterPredicate {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.record_mut())
    }
}

/// Views over a predicate choice filtered by group. Each view keeps the
/// relative order of the underlying list.
pub trait PredicateSlice {
    fn of_group(&self, group: PredicateGroup) -> Vec<&FilterPredicate>;
    fn comparison_ops(&self) -> Vec<&ComparisonOp>;
    fn spatial_ops(&self) -> Vec<&SpatialOp>;
    fn temporal_ops(&self) -> Vec<&TemporalOp>;
    fn logic_ops(&self) -> Vec<&LogicOp>;
    fn extension_ops(&self) -> Vec<&ExtensionOpsType>;
    fn functions(&self) -> Vec<&FunctionType>;
    fn ids(&self) -> Vec<&IdPredicate>;
}

impl PredicateSlice for [FilterPredicate] {
    fn of_group(&self, group: PredicateGroup) -> Vec<&FilterPredicate> {
        self.iter().filter(|p| p.group() == group).collect()
    }

    fn comparison_ops(&self) -> Vec<&ComparisonOp> {
        self.iter().filter_map(FilterPredicate::as_comparison).collect()
    }

    fn spatial_ops(&self) -> Vec<&SpatialOp> {
        self.iter().filter_map(FilterPredicate::as_spatial).collect()
    }

    fn temporal_ops(&self) -> Vec<&TemporalOp> {
        self.iter().filter_map(FilterPredicate::as_temporal).collect()
    }

    fn logic_ops(&self) -> Vec<&LogicOp> {
        self.iter().filter_map(FilterPredicate::as_logic).collect()
    }

    fn extension_ops(&self) -> Vec<&ExtensionOpsType> {
        self.iter().filter_map(FilterPredicate::as_extension).collect()
    }

    fn functions(&self) -> Vec<&FunctionType> {
        self.iter().filter_map(FilterPredicate::as_function).collect()
    }

    fn ids(&self) -> Vec<&IdPredicate> {
        self.iter().filter_map(FilterPredicate::as_id).collect()
    }
}

// =============================================================================
// Extension operators
// =============================================================================

/// Vendor operator in the `extensionOps` group, kept opaque
#[derive(Debug, PartialEq)]
pub struct ExtensionOpsType {
    header: ObjectHeader,
    any: Option<AnyElement>,
}

impl ExtensionOpsType {
    pub const KIND: &'static str = "ExtensionOpsType";
    pub const ANY: Feature = Feature::new(Self::KIND, "any");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            any: None,
        }
    }

    pub fn wrapping(element: AnyElement) -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            any: Some(element),
        }
    }

    pub fn any(&self) -> Option<&AnyElement> {
        self.any.as_ref()
    }

    pub fn set_any(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::ANY, &mut self.any, value)
    }
}

impl_record!(ExtensionOpsType, EXTENSION_OPS_INFO, []);

pub(crate) static EXTENSION_OPS_INFO: TypeInfo = TypeInfo {
    name: ExtensionOpsType::KIND,
    xml_name: "ExtensionOpsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ExtensionOpsType::ANY,
        "extensionOps",
        FeatureKind::Wildcard,
        "AnyElement",
    )],
};

// =============================================================================
// Resource ids
// =============================================================================

/// One member of the `_Id` substitution group
#[derive(Debug, PartialEq)]
pub enum IdPredicate {
    ResourceId(ResourceIdType),
}

impl IdPredicate {
    pub fn element_name(&self) -> &'static str {
        match self {
            IdPredicate::ResourceId(_) => "ResourceId",
        }
    }

    pub fn as_resource_id(&self) -> Option<&ResourceIdType> {
        match self {
            IdPredicate::ResourceId(r) => Some(r),
        }
    }

    pub fn record(&self) -> &dyn Record {
        match self {
            IdPredicate::ResourceId(r) => r,
        }
    }

    pub fn record_mut(&mut self) -> &mut dyn Record {
        match self {
            IdPredicate::ResourceId(r) => r,
        }
    }
}

impl ToValue for IdPredicate {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.record().to_value())
    }
}

impl Contained for IdPredicate {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.record_mut())
    }
}

/// Identifier of one resource, optionally pinned to a version or time range
#[derive(Debug, PartialEq)]
pub struct ResourceIdType {
    header: ObjectHeader,
    rid: Option<String>,
    previous_rid: Option<String>,
    version: Option<VersionType>,
    start_date: Option<XsdDateTime>,
    end_date: Option<XsdDateTime>,
}

impl ResourceIdType {
    pub const KIND: &'static str = "ResourceIdType";
    pub const RID: Feature = Feature::new(Self::KIND, "rid");
    pub const PREVIOUS_RID: Feature = Feature::new(Self::KIND, "previous_rid");
    pub const VERSION: Feature = Feature::new(Self::KIND, "version");
    pub const START_DATE: Feature = Feature::new(Self::KIND, "start_date");
    pub const END_DATE: Feature = Feature::new(Self::KIND, "end_date");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            rid: None,
            previous_rid: None,
            version: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_rid(rid: impl Into<String>) -> Self {
        let mut id = Self::new();
        id.rid = Some(rid.into());
        id
    }

    pub fn rid(&self) -> Option<&str> {
        self.rid.as_deref()
    }

    pub fn set_rid(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::RID, &mut self.rid, value);
    }

    pub fn previous_rid(&self) -> Option<&str> {
        self.previous_rid.as_deref()
    }

    pub fn set_previous_rid(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::PREVIOUS_RID, &mut self.previous_rid, value);
    }

    pub fn version(&self) -> Option<&VersionType> {
        self.version.as_ref()
    }

    pub fn set_version(&mut self, value: Option<VersionType>) {
        set_attribute(&self.header, Self::VERSION, &mut self.version, value);
    }

    pub fn start_date(&self) -> Option<XsdDateTime> {
        self.start_date
    }

    pub fn set_start_date(&mut self, value: Option<XsdDateTime>) {
        set_attribute(&self.header, Self::START_DATE, &mut self.start_date, value);
    }

    pub fn end_date(&self) -> Option<XsdDateTime> {
        self.end_date
    }

    pub fn set_end_date(&mut self, value: Option<XsdDateTime>) {
        set_attribute(&self.header, Self::END_DATE, &mut self.end_date, value);
    }
}

impl_record!(ResourceIdType, RESOURCE_ID_INFO, []);

pub(crate) static RESOURCE_ID_INFO: TypeInfo = TypeInfo {
    name: ResourceIdType::KIND,
    xml_name: "ResourceIdType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(ResourceIdType::RID, "rid", FeatureKind::Attribute, "string").required(),
        FeatureInfo::new(
            ResourceIdType::PREVIOUS_RID,
            "previousRid",
            FeatureKind::Attribute,
            "string",
        ),
        FeatureInfo::new(ResourceIdType::VERSION, "version", FeatureKind::Attribute, "VersionType"),
        FeatureInfo::new(
            ResourceIdType::START_DATE,
            "startDate",
            FeatureKind::Attribute,
            "dateTime",
        ),
        FeatureInfo::new(ResourceIdType::END_DATE, "endDate", FeatureKind::Attribute, "dateTime"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{parse_date_time, VersionActionTokens};

    #[test]
    fn test_resource_id_fields_round_trip() {
        let mut id = ResourceIdType::with_rid("road.17");
        id.set_previous_rid(Some("road.16".into()));
        id.set_version(Some(VersionType::Action(VersionActionTokens::Previous)));
        let start = parse_date_time("2020-01-01T00:00:00Z").unwrap();
        id.set_start_date(Some(start));

        assert_eq!(id.rid(), Some("road.17"));
        assert_eq!(id.previous_rid(), Some("road.16"));
        assert_eq!(id.version().unwrap().action(), Some(VersionActionTokens::Previous));
        assert_eq!(id.start_date(), Some(start));
        assert_eq!(id.end_date(), None);

        id.set_previous_rid(None);
        assert_eq!(id.previous_rid(), None);
    }

    #[test]
    fn test_unzoned_end_date_is_kept() {
        let mut id = ResourceIdType::with_rid("road.17");
        id.set_end_date(Some(parse_date_time("2021-06-30T23:59:59").unwrap()));

        let end = id.end_date().unwrap();
        assert!(!end.is_zoned());
        assert_eq!(end.to_string(), "2021-06-30T23:59:59");
    }

    #[test]
    fn test_predicate_tags() {
        let p: FilterPredicate = ResourceIdType::with_rid("a").into();
        assert_eq!(p.group(), PredicateGroup::Id);
        assert_eq!(p.element_name(), "ResourceId");
        assert_eq!(p.group().group_name(), "_Id");
    }
}

//! `Filter_Capabilities`: what a service can evaluate
//!
//! The root record groups one section per concern. Helper queries on
//! [`FilterCapabilitiesType`] answer the usual "is operator X supported"
//! questions without walking the sections by hand.

pub mod conformance;
pub mod extended;
pub mod functions;
pub mod id;
pub mod scalar;
pub mod spatial;
pub mod temporal;

pub use conformance::{ConformanceType, DomainType, PossibleValues};
pub use extended::{AdditionalOperatorsType, ExtendedCapabilitiesType, ExtensionOperatorType};
pub use functions::{ArgumentType, ArgumentsType, AvailableFunctionType, AvailableFunctionsType};
pub use id::{IdCapabilitiesType, ResourceIdentifierType};
pub use scalar::{
    ComparisonOperatorType, ComparisonOperatorsType, LogicalOperatorsType, ScalarCapabilitiesType,
};
pub use spatial::{
    GeometryOperandType, GeometryOperandsType, SpatialCapabilitiesType, SpatialOperatorType,
    SpatialOperatorsType,
};
pub use temporal::{
    TemporalCapabilitiesType, TemporalOperandType, TemporalOperandsType, TemporalOperatorType,
    TemporalOperatorsType,
};

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::fes::FES_NAMESPACE;
use crate::model::{child_mut, impl_record, replace_child, ChildMut, ObjectHeader};
use crate::notify::Feature;

#[derive(Debug, PartialEq)]
pub struct FilterCapabilitiesType {
    header: ObjectHeader,
    conformance: Option<ConformanceType>,
    id_capabilities: Option<IdCapabilitiesType>,
    scalar_capabilities: Option<ScalarCapabilitiesType>,
    spatial_capabilities: Option<SpatialCapabilitiesType>,
    temporal_capabilities: Option<TemporalCapabilitiesType>,
    functions: Option<AvailableFunctionsType>,
    extended_capabilities: Option<ExtendedCapabilitiesType>,
}

/// Generates the getter, mutable getter and containment setter of one
/// optional section
macro_rules! section {
    ($get:ident, $get_mut:ident, $set:ident, $feature:ident, $ty:ty) => {
        pub fn $get(&self) -> Option<&$ty> {
            self.$get.as_ref()
        }

        pub fn $get_mut(&mut self) -> Option<ChildMut<'_, $ty>> {
            child_mut(&self.header, Self::$feature, &mut self.$get)
        }

        pub fn $set(&mut self, value: Option<$ty>) -> Option<$ty> {
            replace_child(&self.header, Self::$feature, &mut self.$get, value)
        }
    };
}

impl FilterCapabilitiesType {
    pub const KIND: &'static str = "FilterCapabilitiesType";
    pub const CONFORMANCE: Feature = Feature::new(Self::KIND, "conformance");
    pub const ID_CAPABILITIES: Feature = Feature::new(Self::KIND, "id_capabilities");
    pub const SCALAR_CAPABILITIES: Feature = Feature::new(Self::KIND, "scalar_capabilities");
    pub const SPATIAL_CAPABILITIES: Feature = Feature::new(Self::KIND, "spatial_capabilities");
    pub const TEMPORAL_CAPABILITIES: Feature = Feature::new(Self::KIND, "temporal_capabilities");
    pub const FUNCTIONS: Feature = Feature::new(Self::KIND, "functions");
    pub const EXTENDED_CAPABILITIES: Feature = Feature::new(Self::KIND, "extended_capabilities");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            conformance: None,
            id_capabilities: None,
            scalar_capabilities: None,
            spatial_capabilities: None,
            temporal_capabilities: None,
            functions: None,
            extended_capabilities: None,
        }
    }

    section!(conformance, conformance_mut, set_conformance, CONFORMANCE, ConformanceType);
    section!(
        id_capabilities,
        id_capabilities_mut,
        set_id_capabilities,
        ID_CAPABILITIES,
        IdCapabilitiesType
    );
    section!(
        scalar_capabilities,
        scalar_capabilities_mut,
        set_scalar_capabilities,
        SCALAR_CAPABILITIES,
        ScalarCapabilitiesType
    );
    section!(
        spatial_capabilities,
        spatial_capabilities_mut,
        set_spatial_capabilities,
        SPATIAL_CAPABILITIES,
        SpatialCapabilitiesType
    );
    section!(
        temporal_capabilities,
        temporal_capabilities_mut,
        set_temporal_capabilities,
        TEMPORAL_CAPABILITIES,
        TemporalCapabilitiesType
    );
    section!(functions, functions_mut, set_functions, FUNCTIONS, AvailableFunctionsType);
    section!(
        extended_capabilities,
        extended_capabilities_mut,
        set_extended_capabilities,
        EXTENDED_CAPABILITIES,
        ExtendedCapabilitiesType
    );

    /// `And`, `Or` and `Not` are advertised
    pub fn supports_logical(&self) -> bool {
        self.scalar_capabilities
            .as_ref()
            .is_some_and(|s| s.logical_operators().is_some())
    }

    pub fn supports_comparison(&self, name: &str) -> bool {
        self.scalar_capabilities
            .as_ref()
            .and_then(ScalarCapabilitiesType::comparison_operators)
            .is_some_and(|ops| ops.supports(name))
    }

    pub fn supports_spatial(&self, name: &str) -> bool {
        self.spatial_capabilities
            .as_ref()
            .is_some_and(|s| s.supports(name))
    }

    pub fn supports_temporal(&self, name: &str) -> bool {
        self.temporal_capabilities
            .as_ref()
            .is_some_and(|t| t.supports(name))
    }

    /// Advertised function by name
    pub fn function(&self, name: &str) -> Option<&AvailableFunctionType> {
        self.functions.as_ref()?.function(name)
    }
}

impl_record!(
    FilterCapabilitiesType,
    FILTER_CAPABILITIES_INFO,
    [
        one CONFORMANCE => conformance,
        one ID_CAPABILITIES => id_capabilities,
        one SCALAR_CAPABILITIES => scalar_capabilities,
        one SPATIAL_CAPABILITIES => spatial_capabilities,
        one TEMPORAL_CAPABILITIES => temporal_capabilities,
        one FUNCTIONS => functions,
        one EXTENDED_CAPABILITIES => extended_capabilities,
    ]
);

pub(crate) static FILTER_CAPABILITIES_INFO: TypeInfo = TypeInfo {
    name: FilterCapabilitiesType::KIND,
    xml_name: "Filter_Capabilities",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            FilterCapabilitiesType::CONFORMANCE,
            "Conformance",
            FeatureKind::Containment,
            "ConformanceType",
        )
        .required(),
        FeatureInfo::new(
            FilterCapabilitiesType::ID_CAPABILITIES,
            "Id_Capabilities",
            FeatureKind::Containment,
            "IdCapabilitiesType",
        ),
        FeatureInfo::new(
            FilterCapabilitiesType::SCALAR_CAPABILITIES,
            "Scalar_Capabilities",
            FeatureKind::Containment,
            "ScalarCapabilitiesType",
        ),
        FeatureInfo::new(
            FilterCapabilitiesType::SPATIAL_CAPABILITIES,
            "Spatial_Capabilities",
            FeatureKind::Containment,
            "SpatialCapabilitiesType",
        ),
        FeatureInfo::new(
            FilterCapabilitiesType::TEMPORAL_CAPABILITIES,
            "Temporal_Capabilities",
            FeatureKind::Containment,
            "TemporalCapabilitiesType",
        ),
        FeatureInfo::new(
            FilterCapabilitiesType::FUNCTIONS,
            "Functions",
            FeatureKind::Containment,
            "AvailableFunctionsType",
        ),
        FeatureInfo::new(
            FilterCapabilitiesType::EXTENDED_CAPABILITIES,
            "Extended_Capabilities",
            FeatureKind::Containment,
            "ExtendedCapabilitiesType",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{ComparisonOperator, QName, SpatialOperator};
    use crate::model::{all_contents, verify_containment, Record};

    fn sample() -> FilterCapabilitiesType {
        let mut conformance = ConformanceType::new();
        conformance.set_implemented("ImplementsQuery", true);

        let mut scalar = ScalarCapabilitiesType::new();
        scalar.set_logical_operators(Some(LogicalOperatorsType::new()));
        scalar.set_comparison_operators(Some(ComparisonOperatorsType::of([
            ComparisonOperator::PropertyIsEqualTo,
        ])));

        let mut spatial = SpatialCapabilitiesType::new();
        spatial.set_spatial_operators(Some(SpatialOperatorsType::of([SpatialOperator::Bbox])));

        let mut functions = AvailableFunctionsType::new();
        functions
            .functions_mut()
            .push(AvailableFunctionType::signature("abs", QName::local("double")));

        let mut caps = FilterCapabilitiesType::new();
        caps.set_conformance(Some(conformance));
        caps.set_scalar_capabilities(Some(scalar));
        caps.set_spatial_capabilities(Some(spatial));
        caps.set_functions(Some(functions));
        caps
    }

    #[test]
    fn test_support_queries() {
        let caps = sample();
        assert!(caps.supports_logical());
        assert!(caps.supports_comparison("PropertyIsEqualTo"));
        assert!(!caps.supports_comparison("PropertyIsLike"));
        assert!(caps.supports_spatial("BBOX"));
        assert!(!caps.supports_temporal("After"));
        assert!(caps.function("abs").is_some());
        assert!(caps.function("sqrt").is_none());
        assert!(caps.conformance().unwrap().is_implemented("ImplementsQuery"));
    }

    #[test]
    fn test_sections_are_contained() {
        let mut caps = sample();
        assert!(verify_containment(&caps).is_consistent());

        let kinds: Vec<_> = all_contents(&caps).iter().map(|r| r.kind()).collect();
        assert_eq!(kinds[0], ConformanceType::KIND);
        assert!(kinds.contains(&"ComparisonOperatorType"));

        let released = caps.set_scalar_capabilities(None).unwrap();
        assert!(released.container().is_none());
        assert!(!caps.supports_logical());
    }
}

//! FES 2.0 Records
//!
//! One Rust type per schema type of the OGC Filter Encoding 2.0 schema.
//! Substitution groups (`expression`, `comparisonOps`, `spatialOps`,
//! `temporalOps`, `logicOps`, `_Id`) are enums whose variant is the element
//! tag; choice groups are ordered `Vec`s of those enums.

pub mod capabilities;
pub mod comparison;
pub mod document;
pub mod expression;
pub mod filter;
pub mod logic;
pub mod predicate;
pub mod query;
pub mod sort;
pub mod spatial;
pub mod temporal;

/// `http://www.opengis.net/fes/2.0`
pub const FES_NAMESPACE: &str = "http://www.opengis.net/fes/2.0";
/// OWS 1.1, home of `DomainType` and metadata elements
pub const OWS_NAMESPACE: &str = "http://www.opengis.net/ows/1.1";
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2";

pub use capabilities::{
    AdditionalOperatorsType, ArgumentType, ArgumentsType, AvailableFunctionType,
    AvailableFunctionsType, ComparisonOperatorType, ComparisonOperatorsType, ConformanceType,
    DomainType, ExtendedCapabilitiesType, ExtensionOperatorType, FilterCapabilitiesType,
    GeometryOperandType, GeometryOperandsType, IdCapabilitiesType, LogicalOperatorsType,
    PossibleValues, ResourceIdentifierType, ScalarCapabilitiesType, SpatialCapabilitiesType,
    SpatialOperatorType, SpatialOperatorsType, TemporalCapabilitiesType, TemporalOperandType,
    TemporalOperandsType, TemporalOperatorType, TemporalOperatorsType,
};
pub use comparison::{
    BinaryComparisonOpType, ComparisonOp, LowerBoundaryType, PropertyIsBetweenType,
    PropertyIsLikeType, PropertyIsNilType, PropertyIsNullType, UpperBoundaryType,
};
pub use document::{DocumentRoot, RootElement};
pub use expression::{Expression, ExpressionSlice, FunctionType, LiteralType};
pub use filter::FilterType;
pub use logic::{BinaryLogicOpType, LogicOp, UnaryLogicOpType};
pub use predicate::{
    ExtensionOpsType, FilterPredicate, IdPredicate, PredicateGroup, PredicateSlice,
    ResourceIdType,
};
pub use query::{AdhocQueryExpressionType, SelectionClause, SortingClause};
pub use sort::{SortByType, SortPropertyType};
pub use spatial::{BBOXType, BinarySpatialOpType, DistanceBufferType, MeasureType, SpatialOp};
pub use temporal::{BinaryTemporalOpType, TemporalOp};

//! Spatial operators

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::{SpatialOperator, UomIdentifier};
use crate::fes::expression::Expression;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, set_settable, unset_settable, ChildMut,
    Contained, ObjectHeader, Record, Settable,
};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::AnyElement;

// =============================================================================
// spatialOps group
// =============================================================================

/// One member of the `spatialOps` substitution group
#[derive(Debug, PartialEq)]
pub enum SpatialOp {
    Bbox(BBOXType),
    Equals(BinarySpatialOpType),
    Disjoint(BinarySpatialOpType),
    Touches(BinarySpatialOpType),
    Within(BinarySpatialOpType),
    Overlaps(BinarySpatialOpType),
    Crosses(BinarySpatialOpType),
    Intersects(BinarySpatialOpType),
    Contains(BinarySpatialOpType),
    DWithin(DistanceBufferType),
    Beyond(DistanceBufferType),
}

impl SpatialOp {
    pub fn operator(&self) -> SpatialOperator {
        match self {
            SpatialOp::Bbox(_) => SpatialOperator::Bbox,
            SpatialOp::Equals(_) => SpatialOperator::Equals,
            SpatialOp::Disjoint(_) => SpatialOperator::Disjoint,
            SpatialOp::Touches(_) => SpatialOperator::Touches,
            SpatialOp::Within(_) => SpatialOperator::Within,
            SpatialOp::Overlaps(_) => SpatialOperator::Overlaps,
            SpatialOp::Crosses(_) => SpatialOperator::Crosses,
            SpatialOp::Intersects(_) => SpatialOperator::Intersects,
            SpatialOp::Contains(_) => SpatialOperator::Contains,
            SpatialOp::DWithin(_) => SpatialOperator::DWithin,
            SpatialOp::Beyond(_) => SpatialOperator::Beyond,
        }
    }

    pub fn element_name(&self) -> &'static str {
        self.operator().as_str()
    }

    pub fn as_binary(&self) -> Option<&BinarySpatialOpType> {
        match self {
            SpatialOp::Equals(b)
            | SpatialOp::Disjoint(b)
            | SpatialOp::Touches(b)
            | SpatialOp::Within(b)
            | SpatialOp::Overlaps(b)
            | SpatialOp::Crosses(b)
            | SpatialOp::Intersects(b)
            | SpatialOp::Contains(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_distance_buffer(&self) -> Option<&DistanceBufferType> {
        match self {
            SpatialOp::DWithin(d) | SpatialOp::Beyond(d) => Some(d),
            _ => None,
        }
    }

    pub fn record(&self) -> &dyn Record {
        match self {
            SpatialOp::Bbox(r) => r,
            SpatialOp::DWithin(d) | SpatialOp::Beyond(d) => d,
            SpatialOp::Equals(b)
            | SpatialOp::Disjoint(b)
            | SpatialOp::Touches(b)
            | SpatialOp::Within(b)
            | SpatialOp::Overlaps(b)
            | SpatialOp::Crosses(b)
            | SpatialOp::Intersects(b)
            | SpatialOp::Contains(b) => b,
        }
    }

    pub fn record_mut(&mut self) -> &mut dyn Record {
        match self {
            SpatialOp::Bbox(r) => r,
            SpatialOp::DWithin(d) | SpatialOp::Beyond(d) => d,
            SpatialOp::Equals(b)
            | SpatialOp::Disjoint(b)
            | SpatialOp::Touches(b)
            | SpatialOp::Within(b)
            | SpatialOp::Overlaps(b)
            | SpatialOp::Crosses(b)
            | SpatialOp::Intersects(b)
            | SpatialOp::Contains(b) => b,
        }
    }
}

impl ToValue for SpatialOp {
    fn to_value(&self) -> Value {
        Value::entry(self.element_name(), self.record().to_value())
    }
}

impl Contained for SpatialOp {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self.record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self.record_mut())
    }
}

// =============================================================================
// BBOX
// =============================================================================

/// Bounding box test against an envelope
#[derive(Debug, PartialEq)]
pub struct BBOXType {
    header: ObjectHeader,
    expression: Option<Expression>,
    any: Option<AnyElement>,
}

impl BBOXType {
    pub const KIND: &'static str = "BBOXType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");
    pub const ANY: Feature = Feature::new(Self::KIND, "any");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
            any: None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    /// The envelope or geometry operand
    pub fn any(&self) -> Option<&AnyElement> {
        self.any.as_ref()
    }

    pub fn set_any(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::ANY, &mut self.any, value)
    }
}

impl_record!(BBOXType, BBOX_INFO, [one EXPRESSION => expression]);

pub(crate) static BBOX_INFO: TypeInfo = TypeInfo {
    name: BBOXType::KIND,
    xml_name: "BBOXType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(BBOXType::EXPRESSION, "expression", FeatureKind::Group, "Expression"),
        FeatureInfo::new(BBOXType::ANY, ":2", FeatureKind::Wildcard, "AnyElement").required(),
    ],
};

// =============================================================================
// Binary spatial operators
// =============================================================================

/// Property compared with a geometry or expression
#[derive(Debug, PartialEq)]
pub struct BinarySpatialOpType {
    header: ObjectHeader,
    value_reference: Option<String>,
    expression: Option<Expression>,
    any: Option<AnyElement>,
}

impl BinarySpatialOpType {
    pub const KIND: &'static str = "BinarySpatialOpType";
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

    pub fn any(&self) -> Option<&AnyElement> {
        self.any.as_ref()
    }

    pub fn set_any(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::ANY, &mut self.any, value)
    }
}

impl_record!(BinarySpatialOpType, BINARY_SPATIAL_OP_INFO, [one EXPRESSION => expression]);

pub(crate) static BINARY_SPATIAL_OP_INFO: TypeInfo = TypeInfo {
    name: BinarySpatialOpType::KIND,
    xml_name: "BinarySpatialOpType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            BinarySpatialOpType::VALUE_REFERENCE,
            "ValueReference",
            FeatureKind::Element,
            "string",
        )
        .required(),
        FeatureInfo::new(
            BinarySpatialOpType::EXPRESSION,
            "expression",
            FeatureKind::Group,
            "Expression",
        ),
        FeatureInfo::new(BinarySpatialOpType::ANY, ":3", FeatureKind::Wildcard, "AnyElement"),
    ],
};

// =============================================================================
// Distance buffers
// =============================================================================

/// `DWithin` / `Beyond`: geometry test with a distance
#[derive(Debug, PartialEq)]
pub struct DistanceBufferType {
    header: ObjectHeader,
    expression: Option<Expression>,
    any: Option<AnyElement>,
    distance: Option<MeasureType>,
}

impl DistanceBufferType {
    pub const KIND: &'static str = "DistanceBufferType";
    pub const EXPRESSION: Feature = Feature::new(Self::KIND, "expression");
    pub const ANY: Feature = Feature::new(Self::KIND, "any");
    pub const DISTANCE: Feature = Feature::new(Self::KIND, "distance");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expression: None,
            any: None,
            distance: None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn set_expression(&mut self, value: Option<Expression>) -> Option<Expression> {
        replace_child(&self.header, Self::EXPRESSION, &mut self.expression, value)
    }

    pub fn any(&self) -> Option<&AnyElement> {
        self.any.as_ref()
    }

    pub fn set_any(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::ANY, &mut self.any, value)
    }

    pub fn distance(&self) -> Option<&MeasureType> {
        self.distance.as_ref()
    }

    pub fn distance_mut(&mut self) -> Option<ChildMut<'_, MeasureType>> {
        child_mut(&self.header, Self::DISTANCE, &mut self.distance)
    }

    pub fn set_distance(&mut self, value: Option<MeasureType>) -> Option<MeasureType> {
        replace_child(&self.header, Self::DISTANCE, &mut self.distance, value)
    }
}

impl_record!(
    DistanceBufferType,
    DISTANCE_BUFFER_INFO,
    [one EXPRESSION => expression, one DISTANCE => distance]
);

pub(crate) static DISTANCE_BUFFER_INFO: TypeInfo = TypeInfo {
    name: DistanceBufferType::KIND,
    xml_name: "DistanceBufferType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            DistanceBufferType::EXPRESSION,
            "expression",
            FeatureKind::Group,
            "Expression",
        ),
        FeatureInfo::new(DistanceBufferType::ANY, ":2", FeatureKind::Wildcard, "AnyElement")
            .required(),
        FeatureInfo::new(
            DistanceBufferType::DISTANCE,
            "Distance",
            FeatureKind::Containment,
            "MeasureType",
        )
        .required(),
    ],
};

/// Numeric value with a unit of measure
#[derive(Debug, PartialEq)]
pub struct MeasureType {
    header: ObjectHeader,
    value: Settable<f64>,
    uom: Option<UomIdentifier>,
}

impl MeasureType {
    pub const KIND: &'static str = "MeasureType";
    pub const VALUE: Feature = Feature::new(Self::KIND, "value");
    pub const UOM: Feature = Feature::new(Self::KIND, "uom");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            value: Settable::new(0.0),
            uom: None,
        }
    }

    pub fn with_value(value: f64, uom: UomIdentifier) -> Self {
        let mut measure = Self::new();
        measure.value.set(value);
        measure.uom = Some(uom);
        measure
    }

    pub fn value(&self) -> f64 {
        *self.value.get()
    }

    pub fn set_value(&mut self, value: f64) {
        set_settable(&self.header, Self::VALUE, &mut self.value, value);
    }

    pub fn unset_value(&mut self) {
        unset_settable(&self.header, Self::VALUE, &mut self.value);
    }

    pub fn is_set_value(&self) -> bool {
        self.value.is_set()
    }

    pub fn uom(&self) -> Option<&UomIdentifier> {
        self.uom.as_ref()
    }

    pub fn set_uom(&mut self, value: Option<UomIdentifier>) {
        set_attribute(&self.header, Self::UOM, &mut self.uom, value);
    }
}

impl_record!(MeasureType, MEASURE_INFO, []);

pub(crate) static MEASURE_INFO: TypeInfo = TypeInfo {
    name: MeasureType::KIND,
    xml_name: "MeasureType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(MeasureType::VALUE, ":0", FeatureKind::Element, "double")
            .unsettable("0.0"),
        FeatureInfo::new(MeasureType::UOM, "uom", FeatureKind::Attribute, "UomIdentifier")
            .required(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::QName;

    #[test]
    fn test_dwithin_distance() {
        let mut dwithin = DistanceBufferType::new();
        dwithin.set_expression(Some(Expression::value_reference("geom")));
        dwithin.set_any(Some(AnyElement::new(QName::local("Point"))));
        dwithin.set_distance(Some(MeasureType::with_value(10.0, "m".parse().unwrap())));

        let op = SpatialOp::DWithin(dwithin);
        assert_eq!(op.element_name(), "DWithin");
        let distance = op.as_distance_buffer().unwrap().distance().unwrap();
        assert_eq!(distance.value(), 10.0);
        assert!(distance.is_set_value());
        assert_eq!(distance.uom().unwrap().as_str(), "m");
    }

    #[test]
    fn test_measure_value_default() {
        let mut m = MeasureType::new();
        assert_eq!(m.value(), 0.0);
        assert!(!m.is_set_value());
        m.set_value(0.0);
        assert!(m.is_set_value());
        m.unset_value();
        assert!(!m.is_set_value());
    }

    #[test]
    fn test_replacing_geometry_returns_previous() {
        let mut bbox = BBOXType::new();
        assert!(bbox.set_any(Some(AnyElement::new(QName::local("Envelope")))).is_none());
        let old = bbox.set_any(Some(AnyElement::new(QName::local("Polygon"))));
        assert_eq!(old.unwrap().name.local_part(), "Envelope");
        assert_eq!(bbox.any().unwrap().name.local_part(), "Polygon");
    }
}

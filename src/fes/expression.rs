//! Expressions: value references, literals, functions

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::QName;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    impl_record, set_attribute, Contained, ContainmentListMut, ObjectHeader, Record,
};
use crate::notify::{Feature, ToValue, Value};
use crate::wildcard::{AnyElement, MixedEntry};

// =============================================================================
// Expression group
// =============================================================================

/// One member of the `expression` substitution group
#[derive(Debug, PartialEq)]
pub enum Expression {
    /// Path to a property of the filtered resource
    ValueReference(String),
    Literal(LiteralType),
    Function(FunctionType),
    /// Expression element from another namespace
    Extension(AnyElement),
}

impl Expression {
    pub fn value_reference(path: impl Into<String>) -> Self {
        Expression::ValueReference(path.into())
    }

    /// Literal holding a single text run
    pub fn literal(text: impl Into<String>) -> Self {
        Expression::Literal(LiteralType::from_text(text))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Expression::ValueReference(_) => "ValueReference",
            Expression::Literal(_) => "Literal",
            Expression::Function(_) => "Function",
            Expression::Extension(_) => "expression",
        }
    }

    /// Element name as it would appear in a document
    pub fn element_name(&self) -> &str {
        match self {
            Expression::Extension(e) => e.name.local_part(),
            other => other.tag(),
        }
    }

    pub fn as_value_reference(&self) -> Option<&str> {
        match self {
            Expression::ValueReference(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralType> {
        match self {
            Expression::Literal(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Expression::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<LiteralType> for Expression {
    fn from(l: LiteralType) -> Self {
        Expression::Literal(l)
    }
}

impl From<FunctionType> for Expression {
    fn from(f: FunctionType) -> Self {
        Expression::Function(f)
    }
}

impl ToValue for Expression {
    fn to_value(&self) -> Value {
        let inner = match self {
            Expression::ValueReference(path) => Value::Text(path.clone()),
            Expression::Literal(l) => l.to_value(),
            Expression::Function(f) => f.to_value(),
            Expression::Extension(e) => e.to_value(),
        };
        Value::entry(self.tag(), inner)
    }
}

impl Contained for Expression {
    fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Expression::Literal(l) => Some(l),
            Expression::Function(f) => Some(f),
            _ => None,
        }
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            Expression::Literal(l) => Some(l),
            Expression::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// Tag-filtered views over an expression list, in list order
pub trait ExpressionSlice {
    fn value_references(&self) -> Vec<&str>;
    fn literals(&self) -> Vec<&LiteralType>;
    fn functions(&self) -> Vec<&FunctionType>;
}

impl ExpressionSlice for [Expression] {
    fn value_references(&self) -> Vec<&str> {
        self.iter().filter_map(Expression::as_value_reference).collect()
    }

    fn literals(&self) -> Vec<&LiteralType> {
        self.iter().filter_map(Expression::as_literal).collect()
    }

    fn functions(&self) -> Vec<&FunctionType> {
        self.iter().filter_map(Expression::as_function).collect()
    }
}

// =============================================================================
// Literal
// =============================================================================

/// Literal value: mixed text and element content with an optional type
#[derive(Debug, PartialEq)]
pub struct LiteralType {
    header: ObjectHeader,
    mixed: Vec<MixedEntry>,
    literal_type: Option<QName>,
}

impl LiteralType {
    pub const KIND: &'static str = "LiteralType";
    pub const MIXED: Feature = Feature::new(Self::KIND, "mixed");
    pub const LITERAL_TYPE: Feature = Feature::new(Self::KIND, "literal_type");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            mixed: Vec::new(),
            literal_type: None,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let mut literal = Self::new();
        literal.mixed.push(MixedEntry::Text(text.into()));
        literal
    }

    pub fn mixed(&self) -> &[MixedEntry] {
        &self.mixed
    }

    pub fn mixed_mut(&mut self) -> ContainmentListMut<'_, MixedEntry> {
        ContainmentListMut::new(&self.header, Self::MIXED, &mut self.mixed)
    }

    /// Element entries of the mixed content
    pub fn any(&self) -> Vec<&AnyElement> {
        self.mixed.iter().filter_map(MixedEntry::as_element).collect()
    }

    /// Concatenated text and CDATA runs, elements skipped
    pub fn text_content(&self) -> String {
        self.mixed.iter().filter_map(MixedEntry::as_text).collect()
    }

    pub fn literal_type(&self) -> Option<&QName> {
        self.literal_type.as_ref()
    }

    pub fn set_literal_type(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::LITERAL_TYPE, &mut self.literal_type, value);
    }
}

impl_record!(LiteralType, LITERAL_INFO, []);

pub(crate) static LITERAL_INFO: TypeInfo = TypeInfo {
    name: LiteralType::KIND,
    xml_name: "LiteralType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(LiteralType::MIXED, ":mixed", FeatureKind::Mixed, "MixedEntry").many(),
        FeatureInfo::new(LiteralType::LITERAL_TYPE, "type", FeatureKind::Attribute, "QName"),
    ],
};

// =============================================================================
// Function
// =============================================================================

/// Named function applied to argument expressions
#[derive(Debug, PartialEq)]
pub struct FunctionType {
    header: ObjectHeader,
    expressions: Vec<Expression>,
    name: Option<String>,
}

impl FunctionType {
    pub const KIND: &'static str = "FunctionType";
    pub const EXPRESSIONS: Feature = Feature::new(Self::KIND, "expressions");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            expressions: Vec::new(),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        let mut function = Self::new();
        function.name = Some(name.into());
        function
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn expressions_mut(&mut self) -> ContainmentListMut<'_, Expression> {
        ContainmentListMut::new(&self.header, Self::EXPRESSIONS, &mut self.expressions)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(FunctionType, FUNCTION_INFO, [many EXPRESSIONS => expressions]);

pub(crate) static FUNCTION_INFO: TypeInfo = TypeInfo {
    name: FunctionType::KIND,
    xml_name: "FunctionType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(FunctionType::EXPRESSIONS, "expression", FeatureKind::Group, "Expression")
            .many(),
        FeatureInfo::new(FunctionType::NAME, "name", FeatureKind::Attribute, "string").required(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_arguments_keep_order_and_tags() {
        let mut f = FunctionType::named("strConcat");
        f.expressions_mut().push(Expression::value_reference("name"));
        f.expressions_mut().push(Expression::literal("-x"));
        f.expressions_mut().push(Expression::value_reference("code"));

        let tags: Vec<_> = f.expressions().iter().map(Expression::tag).collect();
        assert_eq!(tags, vec!["ValueReference", "Literal", "ValueReference"]);
        assert_eq!(f.expressions().value_references(), vec!["name", "code"]);
        assert_eq!(f.expressions().literals().len(), 1);
    }

    #[test]
    fn test_nested_function_is_contained() {
        let mut outer = FunctionType::named("abs");
        outer
            .expressions_mut()
            .push(Expression::Function(FunctionType::named("neg")));

        let inner = outer.expressions()[0].as_function().unwrap();
        let link = inner.container().unwrap();
        assert_eq!(link.parent.id, outer.id());
        assert_eq!(link.feature, FunctionType::EXPRESSIONS);
    }

    #[test]
    fn test_literal_mixed_views() {
        let mut lit = LiteralType::from_text("10");
        lit.mixed_mut()
            .push(MixedEntry::Element(AnyElement::new(QName::local("Point"))));
        lit.mixed_mut().push(MixedEntry::CData(" m".into()));

        assert_eq!(lit.text_content(), "10 m");
        assert_eq!(lit.any().len(), 1);
        assert!(lit.literal_type().is_none());
    }
}

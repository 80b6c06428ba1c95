//! Function capabilities

use crate::catalog::{FeatureInfo, FeatureKind, TypeInfo};
use crate::datatypes::QName;
use crate::fes::FES_NAMESPACE;
use crate::model::{
    child_mut, impl_record, replace_child, set_attribute, ChildMut, ContainmentListMut, ObjectHeader,
};
use crate::notify::Feature;
use crate::wildcard::AnyElement;

/// Functions a service can evaluate inside filters
#[derive(Debug, PartialEq)]
pub struct AvailableFunctionsType {
    header: ObjectHeader,
    functions: Vec<AvailableFunctionType>,
}

impl AvailableFunctionsType {
    pub const KIND: &'static str = "AvailableFunctionsType";
    pub const FUNCTIONS: Feature = Feature::new(Self::KIND, "functions");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            functions: Vec::new(),
        }
    }

    pub fn functions(&self) -> &[AvailableFunctionType] {
        &self.functions
    }

    pub fn functions_mut(&mut self) -> ContainmentListMut<'_, AvailableFunctionType> {
        ContainmentListMut::new(&self.header, Self::FUNCTIONS, &mut self.functions)
    }

    pub fn function(&self, name: &str) -> Option<&AvailableFunctionType> {
        self.functions.iter().find(|f| f.name() == Some(name))
    }
}

impl_record!(AvailableFunctionsType, AVAILABLE_FUNCTIONS_INFO, [many FUNCTIONS => functions]);

pub(crate) static AVAILABLE_FUNCTIONS_INFO: TypeInfo = TypeInfo {
    name: AvailableFunctionsType::KIND,
    xml_name: "AvailableFunctionsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        AvailableFunctionsType::FUNCTIONS,
        "Function",
        FeatureKind::Containment,
        "AvailableFunctionType",
    )
    .bounds(1, None)],
};

/// Signature of one function
#[derive(Debug, PartialEq)]
pub struct AvailableFunctionType {
    header: ObjectHeader,
    metadata: Option<AnyElement>,
    returns: Option<QName>,
    arguments: Option<ArgumentsType>,
    name: Option<String>,
}

impl AvailableFunctionType {
    pub const KIND: &'static str = "AvailableFunctionType";
    pub const METADATA: Feature = Feature::new(Self::KIND, "metadata");
    pub const RETURNS: Feature = Feature::new(Self::KIND, "returns");
    pub const ARGUMENTS: Feature = Feature::new(Self::KIND, "arguments");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            metadata: None,
            returns: None,
            arguments: None,
            name: None,
        }
    }

    pub fn signature(name: impl Into<String>, returns: QName) -> Self {
        let mut f = Self::new();
        f.name = Some(name.into());
        f.returns = Some(returns);
        f
    }

    pub fn metadata(&self) -> Option<&AnyElement> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::METADATA, &mut self.metadata, value)
    }

    pub fn returns(&self) -> Option<&QName> {
        self.returns.as_ref()
    }

    pub fn set_returns(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::RETURNS, &mut self.returns, value);
    }

    pub fn arguments(&self) -> Option<&ArgumentsType> {
        self.arguments.as_ref()
    }

    pub fn arguments_mut(&mut self) -> Option<ChildMut<'_, ArgumentsType>> {
        child_mut(&self.header, Self::ARGUMENTS, &mut self.arguments)
    }

    pub fn set_arguments(&mut self, value: Option<ArgumentsType>) -> Option<ArgumentsType> {
        replace_child(&self.header, Self::ARGUMENTS, &mut self.arguments, value)
    }

    /// Number of declared arguments, zero when the list is absent
    pub fn arity(&self) -> usize {
        self.arguments.as_ref().map_or(0, |a| a.arguments().len())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(AvailableFunctionType, AVAILABLE_FUNCTION_INFO, [one ARGUMENTS => arguments]);

pub(crate) static AVAILABLE_FUNCTION_INFO: TypeInfo = TypeInfo {
    name: AvailableFunctionType::KIND,
    xml_name: "AvailableFunctionType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(
            AvailableFunctionType::METADATA,
            "Metadata",
            FeatureKind::Wildcard,
            "AnyElement",
        ),
        FeatureInfo::new(AvailableFunctionType::RETURNS, "Returns", FeatureKind::Element, "QName")
            .required(),
        FeatureInfo::new(
            AvailableFunctionType::ARGUMENTS,
            "Arguments",
            FeatureKind::Containment,
            "ArgumentsType",
        ),
        FeatureInfo::new(AvailableFunctionType::NAME, "name", FeatureKind::Attribute, "string")
            .required(),
    ],
};

#[derive(Debug, PartialEq)]
pub struct ArgumentsType {
    header: ObjectHeader,
    arguments: Vec<ArgumentType>,
}

impl ArgumentsType {
    pub const KIND: &'static str = "ArgumentsType";
    pub const ARGUMENTS: Feature = Feature::new(Self::KIND, "arguments");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            arguments: Vec::new(),
        }
    }

    pub fn arguments(&self) -> &[ArgumentType] {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> ContainmentListMut<'_, ArgumentType> {
        ContainmentListMut::new(&self.header, Self::ARGUMENTS, &mut self.arguments)
    }
}

impl_record!(ArgumentsType, ARGUMENTS_INFO, [many ARGUMENTS => arguments]);

pub(crate) static ARGUMENTS_INFO: TypeInfo = TypeInfo {
    name: ArgumentsType::KIND,
    xml_name: "ArgumentsType",
    namespace: FES_NAMESPACE,
    features: &[FeatureInfo::new(
        ArgumentsType::ARGUMENTS,
        "Argument",
        FeatureKind::Containment,
        "ArgumentType",
    )
    .bounds(1, None)],
};

#[derive(Debug, PartialEq)]
pub struct ArgumentType {
    header: ObjectHeader,
    metadata: Option<AnyElement>,
    argument_type: Option<QName>,
    name: Option<String>,
}

impl ArgumentType {
    pub const KIND: &'static str = "ArgumentType";
    pub const METADATA: Feature = Feature::new(Self::KIND, "metadata");
    pub const ARGUMENT_TYPE: Feature = Feature::new(Self::KIND, "argument_type");
    pub const NAME: Feature = Feature::new(Self::KIND, "name");

    pub fn new() -> Self {
        Self {
            header: ObjectHeader::new(Self::KIND),
            metadata: None,
            argument_type: None,
            name: None,
        }
    }

    pub fn typed(name: impl Into<String>, argument_type: QName) -> Self {
        let mut arg = Self::new();
        arg.name = Some(name.into());
        arg.argument_type = Some(argument_type);
        arg
    }

    pub fn metadata(&self) -> Option<&AnyElement> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, value: Option<AnyElement>) -> Option<AnyElement> {
        replace_child(&self.header, Self::METADATA, &mut self.metadata, value)
    }

    /// The `Type` element
    pub fn argument_type(&self) -> Option<&QName> {
        self.argument_type.as_ref()
    }

    pub fn set_argument_type(&mut self, value: Option<QName>) {
        set_attribute(&self.header, Self::ARGUMENT_TYPE, &mut self.argument_type, value);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        set_attribute(&self.header, Self::NAME, &mut self.name, value);
    }
}

impl_record!(ArgumentType, ARGUMENT_INFO, []);

pub(crate) static ARGUMENT_INFO: TypeInfo = TypeInfo {
    name: ArgumentType::KIND,
    xml_name: "ArgumentType",
    namespace: FES_NAMESPACE,
    features: &[
        FeatureInfo::new(ArgumentType::METADATA, "Metadata", FeatureKind::Wildcard, "AnyElement"),
        FeatureInfo::new(ArgumentType::ARGUMENT_TYPE, "Type", FeatureKind::Element, "QName")
            .required(),
        FeatureInfo::new(ArgumentType::NAME, "name", FeatureKind::Attribute, "string").required(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const XS: &str = "http://www.w3.org/2001/XMLSchema";

    #[test]
    fn test_function_signature() {
        let mut args = ArgumentsType::new();
        args.arguments_mut().extend([
            ArgumentType::typed("text", QName::new(XS, "string")),
            ArgumentType::typed("count", QName::new(XS, "integer")),
        ]);
        let mut f = AvailableFunctionType::signature("truncate", QName::new(XS, "string"));
        assert_eq!(f.arity(), 0);
        f.set_arguments(Some(args));

        let mut functions = AvailableFunctionsType::new();
        functions.functions_mut().push(f);

        let found = functions.function("truncate").unwrap();
        assert_eq!(found.arity(), 2);
        assert_eq!(found.arguments().unwrap().arguments()[1].name(), Some("count"));
        assert!(functions.function("upper").is_none());
    }
}

//! Generated `AttributeUsage` annotations.

use serde::{Deserialize, Serialize};
use sharpen_common::well_known;
use sharpen_syntax::{GreenNode, factory};

/// Program elements an attribute may be applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeTargets {
    Assembly,
    Module,
    #[default]
    Class,
    Struct,
    Enum,
    Constructor,
    Method,
    Property,
    Field,
    Event,
    Interface,
    Parameter,
    Delegate,
    ReturnValue,
    GenericParameter,
    All,
}

impl AttributeTargets {
    pub const ALL: [AttributeTargets; 16] = [
        AttributeTargets::Assembly,
        AttributeTargets::Module,
        AttributeTargets::Class,
        AttributeTargets::Struct,
        AttributeTargets::Enum,
        AttributeTargets::Constructor,
        AttributeTargets::Method,
        AttributeTargets::Property,
        AttributeTargets::Field,
        AttributeTargets::Event,
        AttributeTargets::Interface,
        AttributeTargets::Parameter,
        AttributeTargets::Delegate,
        AttributeTargets::ReturnValue,
        AttributeTargets::GenericParameter,
        AttributeTargets::All,
    ];

    /// Member name in `System.AttributeTargets`.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeTargets::Assembly => "Assembly",
            AttributeTargets::Module => "Module",
            AttributeTargets::Class => "Class",
            AttributeTargets::Struct => "Struct",
            AttributeTargets::Enum => "Enum",
            AttributeTargets::Constructor => "Constructor",
            AttributeTargets::Method => "Method",
            AttributeTargets::Property => "Property",
            AttributeTargets::Field => "Field",
            AttributeTargets::Event => "Event",
            AttributeTargets::Interface => "Interface",
            AttributeTargets::Parameter => "Parameter",
            AttributeTargets::Delegate => "Delegate",
            AttributeTargets::ReturnValue => "ReturnValue",
            AttributeTargets::GenericParameter => "GenericParameter",
            AttributeTargets::All => "All",
        }
    }
}

impl std::fmt::Display for AttributeTargets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct AttributeUsageAnnotationGenerator;

impl AttributeUsageAnnotationGenerator {
    /// `[System.AttributeUsage(System.AttributeTargets.<target>)]`
    pub fn generate(target: AttributeTargets) -> GreenNode {
        let argument = factory::member_access(
            factory::member_access_chain(well_known::ATTRIBUTE_TARGETS),
            target.as_str(),
        );
        factory::attribute_list(vec![factory::attribute(
            factory::parse_name(well_known::ATTRIBUTE_USAGE_SYNTAX),
            Some(factory::attribute_argument_list(vec![
                factory::attribute_argument(argument),
            ])),
        )])
    }
}

#[cfg(test)]
#[path = "../tests/generator_tests.rs"]
mod generator_tests;

use crate::ast::Field;
use crate::ast::FieldType;
use indexmap::IndexMap;

/// The body of a `service` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ServiceDefinition {
    /// The dotted name after `extends`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Functions keyed by name, in first-declared order. A later function
    /// with the same name replaces the earlier one.
    pub functions: IndexMap<String, FunctionDefinition>,
}

/// A service function:
/// `oneway? <type> <name> ( <field>* ) (throws ( <field>* ))?`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FunctionDefinition {
    #[serde(rename = "type")]
    pub return_type: FieldType,

    pub name: String,

    pub args: Vec<Field>,

    /// Exceptions from the `throws` clause; empty when there is none.
    pub throws: Vec<Field>,

    pub oneway: bool,
}

//! AST types for parsed Thrift IDL documents.
//!
//! Every top-level declaration parses to a [`Definition`]: a name plus a
//! [`DefinitionBody`] tagged by declaration kind. The [`Document`] folds
//! definitions into one insertion-ordered map per kind, keyed by name.
//!
//! All nodes own their strings, so a `Document` outlives the source text it
//! was parsed from and is `Send + Sync`.
//!
//! Nodes implement [`serde::Serialize`] with the JSON shape used by the
//! `thrift-to-json` tool: camelCase keys, bare strings for named types, and
//! `{"=": [...]}` for symbolic references.
//!
//! # Example
//!
//! ```rust
//! use libthrift_parser::ast::FieldType;
//!
//! let doc = libthrift_parser::parse("typedef list<string> Names").unwrap();
//! assert_eq!(
//!     doc.typedefs["Names"].field_type,
//!     FieldType::List(Box::new(FieldType::named("string"))),
//! );
//! ```

mod const_value;
mod definition;
mod document;
mod enum_definition;
mod field;
mod field_requiredness;
mod field_type;
mod service_definition;

pub use const_value::ConstValue;
pub use definition::ConstDefinition;
pub use definition::Definition;
pub use definition::DefinitionBody;
pub use definition::IncludeDefinition;
pub use definition::NamespaceDefinition;
pub use definition::TypedefDefinition;
pub use document::Document;
pub use enum_definition::EnumDefinition;
pub use enum_definition::EnumItem;
pub use field::Field;
pub use field_requiredness::FieldRequiredness;
pub use field_type::FieldType;
pub use service_definition::FunctionDefinition;
pub use service_definition::ServiceDefinition;

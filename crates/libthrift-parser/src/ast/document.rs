use crate::ast::ConstDefinition;
use crate::ast::Definition;
use crate::ast::DefinitionBody;
use crate::ast::EnumDefinition;
use crate::ast::Field;
use crate::ast::IncludeDefinition;
use crate::ast::NamespaceDefinition;
use crate::ast::ServiceDefinition;
use crate::ast::TypedefDefinition;
use crate::DefinitionKind;
use indexmap::IndexMap;

/// Root AST node for a Thrift document.
///
/// A mapping from declaration kind to a mapping from name to body. Each
/// inner map keeps first-declared order; a later declaration with the same
/// kind and name replaces the earlier body in place. No duplicate
/// detection is performed.
///
/// Struct, union, and exception bodies are stored directly as their field
/// lists.
///
/// Serializes to the `thrift-to-json` layout, where only kinds
/// that occur in the document appear as keys.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Document {
    #[serde(rename = "typedef", skip_serializing_if = "IndexMap::is_empty")]
    pub typedefs: IndexMap<String, TypedefDefinition>,

    #[serde(rename = "const", skip_serializing_if = "IndexMap::is_empty")]
    pub consts: IndexMap<String, ConstDefinition>,

    #[serde(rename = "enum", skip_serializing_if = "IndexMap::is_empty")]
    pub enums: IndexMap<String, EnumDefinition>,

    #[serde(rename = "struct", skip_serializing_if = "IndexMap::is_empty")]
    pub structs: IndexMap<String, Vec<Field>>,

    #[serde(rename = "union", skip_serializing_if = "IndexMap::is_empty")]
    pub unions: IndexMap<String, Vec<Field>>,

    #[serde(rename = "exception", skip_serializing_if = "IndexMap::is_empty")]
    pub exceptions: IndexMap<String, Vec<Field>>,

    #[serde(rename = "service", skip_serializing_if = "IndexMap::is_empty")]
    pub services: IndexMap<String, ServiceDefinition>,

    #[serde(rename = "namespace", skip_serializing_if = "IndexMap::is_empty")]
    pub namespaces: IndexMap<String, NamespaceDefinition>,

    #[serde(rename = "include", skip_serializing_if = "IndexMap::is_empty")]
    pub includes: IndexMap<String, IncludeDefinition>,
}

impl Document {
    /// Folds a definition into the document, replacing any earlier body
    /// stored under the same kind and name.
    pub fn insert(&mut self, definition: Definition) {
        let Definition { name, body } = definition;
        match body {
            DefinitionBody::Typedef(body) => {
                self.typedefs.insert(name, body);
            }
            DefinitionBody::Const(body) => {
                self.consts.insert(name, body);
            }
            DefinitionBody::Enum(body) => {
                self.enums.insert(name, body);
            }
            DefinitionBody::Struct(fields) => {
                self.structs.insert(name, fields);
            }
            DefinitionBody::Union(fields) => {
                self.unions.insert(name, fields);
            }
            DefinitionBody::Exception(fields) => {
                self.exceptions.insert(name, fields);
            }
            DefinitionBody::Service(body) => {
                self.services.insert(name, body);
            }
            DefinitionBody::Namespace(body) => {
                self.namespaces.insert(name, body);
            }
            DefinitionBody::Include(body) => {
                self.includes.insert(name, body);
            }
        }
    }

    /// Names declared under `kind`, in first-declared order.
    pub fn names(&self, kind: DefinitionKind) -> Vec<&str> {
        fn keys<V>(map: &IndexMap<String, V>) -> Vec<&str> {
            map.keys().map(String::as_str).collect()
        }

        match kind {
            DefinitionKind::Typedef => keys(&self.typedefs),
            DefinitionKind::Const => keys(&self.consts),
            DefinitionKind::Enum => keys(&self.enums),
            DefinitionKind::Struct => keys(&self.structs),
            DefinitionKind::Union => keys(&self.unions),
            DefinitionKind::Exception => keys(&self.exceptions),
            DefinitionKind::Service => keys(&self.services),
            DefinitionKind::Namespace => keys(&self.namespaces),
            DefinitionKind::Include => keys(&self.includes),
        }
    }

    /// Total number of distinct `(kind, name)` entries.
    pub fn len(&self) -> usize {
        DefinitionKind::ALL
            .iter()
            .map(|kind| self.names(*kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

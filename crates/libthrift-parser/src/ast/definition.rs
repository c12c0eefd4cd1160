use crate::ast::ConstValue;
use crate::ast::EnumDefinition;
use crate::ast::Field;
use crate::ast::FieldType;
use crate::ast::ServiceDefinition;
use crate::DefinitionKind;

/// One parsed top-level declaration: `{kind, name, body}`.
///
/// The kind is carried by the [`DefinitionBody`] variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    /// The key this definition is stored under in the [`crate::ast::Document`].
    ///
    /// For namespaces this is the scope (e.g. `java`, `*`); for includes it
    /// is the include path without directories or `.thrift` suffix.
    pub name: String,
    pub body: DefinitionBody,
}

impl Definition {
    pub fn new(name: impl Into<String>, body: DefinitionBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn kind(&self) -> DefinitionKind {
        self.body.kind()
    }
}

/// The kind-specific body of a [`Definition`].
#[derive(Clone, Debug, PartialEq)]
pub enum DefinitionBody {
    Typedef(TypedefDefinition),
    Const(ConstDefinition),
    Enum(EnumDefinition),
    Struct(Vec<Field>),
    Union(Vec<Field>),
    Exception(Vec<Field>),
    Service(ServiceDefinition),
    Namespace(NamespaceDefinition),
    Include(IncludeDefinition),
}

impl DefinitionBody {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Typedef(_) => DefinitionKind::Typedef,
            Self::Const(_) => DefinitionKind::Const,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::Struct(_) => DefinitionKind::Struct,
            Self::Union(_) => DefinitionKind::Union,
            Self::Exception(_) => DefinitionKind::Exception,
            Self::Service(_) => DefinitionKind::Service,
            Self::Namespace(_) => DefinitionKind::Namespace,
            Self::Include(_) => DefinitionKind::Include,
        }
    }
}

/// `typedef <type> <name>`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct TypedefDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// `const <type> <name> = <value>`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ConstDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: ConstValue,
}

/// `namespace <scope> <dotted-name>`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDefinition {
    /// The dotted name, e.g. `com.example.api`.
    pub service_name: String,
}

/// `include "<path>"`
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct IncludeDefinition {
    /// The path exactly as written between the quotes.
    pub path: String,
}

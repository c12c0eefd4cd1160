use std::fmt;

/// The kind of a top-level declaration in a Thrift document.
///
/// Used as the outer key of a [`crate::ast::Document`] and in log and error
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// `typedef <type> <name>`
    Typedef,

    /// `const <type> <name> = <value>`
    Const,

    /// `enum <name> { ... }`
    Enum,

    /// `struct <name> { ... }`
    Struct,

    /// `union <name> { ... }`
    Union,

    /// `exception <name> { ... }`
    Exception,

    /// `service <name> (extends <name>)? { ... }`
    Service,

    /// `namespace <scope> <name>`
    Namespace,

    /// `include "<path>"`
    Include,
}

impl DefinitionKind {
    /// All kinds, in the order the document driver tries them.
    pub const ALL: [DefinitionKind; 9] = [
        DefinitionKind::Typedef,
        DefinitionKind::Const,
        DefinitionKind::Enum,
        DefinitionKind::Struct,
        DefinitionKind::Union,
        DefinitionKind::Exception,
        DefinitionKind::Service,
        DefinitionKind::Namespace,
        DefinitionKind::Include,
    ];

    /// The declaration keyword, which is also the kind's JSON key.
    pub fn keyword(&self) -> &'static str {
        match self {
            DefinitionKind::Typedef => "typedef",
            DefinitionKind::Const => "const",
            DefinitionKind::Enum => "enum",
            DefinitionKind::Struct => "struct",
            DefinitionKind::Union => "union",
            DefinitionKind::Exception => "exception",
            DefinitionKind::Service => "service",
            DefinitionKind::Namespace => "namespace",
            DefinitionKind::Include => "include",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

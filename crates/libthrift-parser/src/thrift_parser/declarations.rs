//! Grammar productions for types, fields, and top-level declarations.
//!
//! Every declaration production consumes its keyword, its body, and then
//! an optional trailing separator.

use crate::ast::ConstDefinition;
use crate::ast::Definition;
use crate::ast::DefinitionBody;
use crate::ast::EnumDefinition;
use crate::ast::EnumItem;
use crate::ast::Field;
use crate::ast::FieldRequiredness;
use crate::ast::FieldType;
use crate::ast::FunctionDefinition;
use crate::ast::IncludeDefinition;
use crate::ast::NamespaceDefinition;
use crate::ast::ServiceDefinition;
use crate::ast::TypedefDefinition;
use crate::scan_failure::ScanResult;
use crate::ThriftParser;

impl<'src> ThriftParser<'src> {
    /// Parses any one top-level declaration.
    pub(crate) fn parse_definition(&mut self) -> ScanResult<Definition> {
        self.try_in_order(
            "a declaration keyword",
            &[
                Self::parse_typedef,
                Self::parse_const,
                Self::parse_enum,
                Self::parse_struct,
                Self::parse_union,
                Self::parse_exception,
                Self::parse_service,
                Self::parse_namespace,
                Self::parse_include,
            ],
        )
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `map<K, V>`, `list<T>`, `set<T>`, or a bare name.
    pub(crate) fn parse_field_type(&mut self) -> ScanResult<FieldType> {
        self.nested(|parser| {
            parser.try_in_order(
                "a type",
                &[
                    Self::parse_map_type,
                    Self::parse_list_or_set_type,
                    Self::parse_named_type,
                ],
            )
        })
    }

    fn parse_map_type(&mut self) -> ScanResult<FieldType> {
        self.expect_keyword("map")?;
        self.expect_char(b'<')?;
        let key_type = self.parse_field_type()?;
        self.scan_separator();
        let value_type = self.parse_field_type()?;
        self.expect_char(b'>')?;
        Ok(FieldType::Map {
            key_type: Box::new(key_type),
            value_type: Box::new(value_type),
        })
    }

    fn parse_list_or_set_type(&mut self) -> ScanResult<FieldType> {
        let container = self.try_in_order(
            "`list` or `set`",
            &[
                |parser: &mut Self| parser.expect_keyword("list"),
                |parser: &mut Self| parser.expect_keyword("set"),
            ],
        )?;
        self.expect_char(b'<')?;
        let value_type = Box::new(self.parse_field_type()?);
        self.expect_char(b'>')?;
        Ok(if container == "set" {
            FieldType::Set(value_type)
        } else {
            FieldType::List(value_type)
        })
    }

    fn parse_named_type(&mut self) -> ScanResult<FieldType> {
        self.scan_identifier().map(FieldType::Named)
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// `{ field* }`, shared by struct, union, and exception.
    fn parse_struct_like_body(&mut self) -> ScanResult<Vec<Field>> {
        self.expect_char(b'{')?;
        let fields = self.repeat_until_failure(Self::parse_field);
        self.expect_char(b'}')?;
        Ok(fields)
    }

    /// `( field* )`, used for function arguments and `throws` clauses.
    fn parse_field_list(&mut self) -> ScanResult<Vec<Field>> {
        self.expect_char(b'(')?;
        let fields = self.repeat_until_failure(Self::parse_field);
        self.expect_char(b')')?;
        Ok(fields)
    }

    /// `(id :)? (required | optional)? type name (= value)? sep?`
    ///
    /// The id prefix is attempted as a unit: if either the id or its colon
    /// is missing, the field is left unnumbered and parsing continues from
    /// the same place.
    pub(crate) fn parse_field(&mut self) -> ScanResult<Field> {
        let id = self.optional(|parser| {
            let id = parser.parse_hex_or_integer()?;
            parser.expect_char(b':')?;
            Ok(id)
        });
        let requiredness = self.optional(Self::parse_field_requiredness);
        let field_type = self.parse_field_type()?;
        let name = self.scan_identifier()?;
        let default_value = self.optional(|parser| {
            parser.expect_char(b'=')?;
            parser.parse_const_value()
        });
        self.scan_separator();

        Ok(Field {
            field_type,
            name,
            id,
            requiredness,
            default_value,
        })
    }

    fn parse_field_requiredness(&mut self) -> ScanResult<FieldRequiredness> {
        self.try_in_order(
            "`required` or `optional`",
            &[
                |parser: &mut Self| {
                    parser
                        .expect_keyword("required")
                        .map(|_| FieldRequiredness::Required)
                },
                |parser: &mut Self| {
                    parser
                        .expect_keyword("optional")
                        .map(|_| FieldRequiredness::Optional)
                },
            ],
        )
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `typedef <type> <name>`
    fn parse_typedef(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("typedef")?;
        let field_type = self.parse_field_type()?;
        let name = self.scan_identifier()?;
        self.scan_separator();
        Ok(Definition::new(
            name,
            DefinitionBody::Typedef(TypedefDefinition { field_type }),
        ))
    }

    /// `const <type> <name> = <value>`
    fn parse_const(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("const")?;
        let field_type = self.parse_field_type()?;
        let name = self.scan_identifier()?;
        self.expect_char(b'=')?;
        let value = self.parse_const_value()?;
        self.scan_separator();
        Ok(Definition::new(
            name,
            DefinitionBody::Const(ConstDefinition { field_type, value }),
        ))
    }

    /// `enum <name> { (<name> (= <hex-or-integer>)? sep?)* }`
    fn parse_enum(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("enum")?;
        let name = self.scan_identifier()?;
        self.expect_char(b'{')?;
        let items = self.repeat_until_failure(Self::parse_enum_item);
        self.expect_char(b'}')?;
        self.scan_separator();
        Ok(Definition::new(
            name,
            DefinitionBody::Enum(EnumDefinition { items }),
        ))
    }

    fn parse_enum_item(&mut self) -> ScanResult<EnumItem> {
        let name = self.scan_identifier()?;
        let value = self.optional(|parser| {
            parser.expect_char(b'=')?;
            parser.parse_hex_or_integer()
        });
        self.scan_separator();
        Ok(EnumItem { name, value })
    }

    fn parse_struct(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("struct")?;
        let name = self.scan_identifier()?;
        let fields = self.parse_struct_like_body()?;
        self.scan_separator();
        Ok(Definition::new(name, DefinitionBody::Struct(fields)))
    }

    fn parse_union(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("union")?;
        let name = self.scan_identifier()?;
        let fields = self.parse_struct_like_body()?;
        self.scan_separator();
        Ok(Definition::new(name, DefinitionBody::Union(fields)))
    }

    fn parse_exception(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("exception")?;
        let name = self.scan_identifier()?;
        let fields = self.parse_struct_like_body()?;
        self.scan_separator();
        Ok(Definition::new(name, DefinitionBody::Exception(fields)))
    }

    /// `service <name> (extends <dotted-name>)? { function* }`
    fn parse_service(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("service")?;
        let name = self.scan_identifier()?;
        let extends = self.optional(|parser| {
            parser.expect_keyword("extends")?;
            Ok(parser.scan_symbolic_reference()?.join("."))
        });
        self.expect_char(b'{')?;
        let functions = self.repeat_until_failure_keyed(
            Self::parse_function,
            |function| function.name.clone(),
        );
        self.expect_char(b'}')?;
        self.scan_separator();
        Ok(Definition::new(
            name,
            DefinitionBody::Service(ServiceDefinition { extends, functions }),
        ))
    }

    /// `oneway? <type> <name> ( field* ) (throws ( field* ))? sep?`
    fn parse_function(&mut self) -> ScanResult<FunctionDefinition> {
        let oneway = self
            .optional(|parser| parser.expect_keyword("oneway"))
            .is_some();
        let return_type = self.parse_field_type()?;
        let name = self.scan_identifier()?;
        let args = self.parse_field_list()?;
        let throws = self
            .optional(|parser| {
                parser.expect_keyword("throws")?;
                parser.parse_field_list()
            })
            .unwrap_or_default();
        self.scan_separator();

        Ok(FunctionDefinition {
            return_type,
            name,
            args,
            throws,
            oneway,
        })
    }

    /// `namespace <scope> <dotted-name>`
    ///
    /// The scope becomes the definition's name.
    fn parse_namespace(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("namespace")?;
        let scope = self.scan_scoped_identifier()?;
        let service_name = self.scan_symbolic_reference()?.join(".");
        self.scan_separator();
        Ok(Definition::new(
            scope,
            DefinitionBody::Namespace(NamespaceDefinition { service_name }),
        ))
    }

    /// `include "<path>"`
    ///
    /// The definition's name is the path without any directory prefix and
    /// without a trailing `.thrift`.
    fn parse_include(&mut self) -> ScanResult<Definition> {
        self.expect_keyword("include")?;
        let path = self.scan_quoted_path()?;
        self.scan_separator();
        let name = include_name(&path).to_string();
        Ok(Definition::new(
            name,
            DefinitionBody::Include(IncludeDefinition { path }),
        ))
    }
}

/// `"../shared/base.thrift"` -> `"base"`
pub(crate) fn include_name(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.strip_suffix(".thrift").unwrap_or(file_name)
}

/// The body of an `enum` declaration.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct EnumDefinition {
    /// Items in declaration order.
    pub items: Vec<EnumItem>,
}

/// One member of an enum, e.g. `RED = 1`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct EnumItem {
    pub name: String,

    /// The explicit value, if one was written. Implicit numbering is left to
    /// consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// The `required` / `optional` qualifier on a field.
///
/// Fields without a qualifier carry `None` rather than a third variant, so
/// "default requiredness" stays distinguishable from an explicit keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRequiredness {
    Required,
    Optional,
}

impl FieldRequiredness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

use crate::ast::ConstValue;
use crate::ast::FieldRequiredness;
use crate::ast::FieldType;

/// One field of a struct-like body, or one argument / `throws` entry of a
/// service function.
///
/// ```text
/// 1: required i32 count = 0;
/// ^  ^        ^   ^       ^
/// id option   type name   default_value
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub name: String,

    /// The numeric field id, if the field was numbered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "option", skip_serializing_if = "Option::is_none")]
    pub requiredness: Option<FieldRequiredness>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ConstValue>,
}

impl Field {
    pub fn is_required(&self) -> bool {
        self.requiredness == Some(FieldRequiredness::Required)
    }
}

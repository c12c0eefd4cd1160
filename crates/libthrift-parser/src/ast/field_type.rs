use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

/// A type reference in a field, typedef, constant, or function signature.
///
/// Container types nest recursively, e.g. `map<string, list<i32>>`.
/// Names are not resolved: `i32`, `string`, and `shared.UUID` are all
/// [`FieldType::Named`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldType {
    /// A base type, typedef, struct, enum, or other declared name.
    Named(String),

    /// `map<K, V>`
    Map {
        key_type: Box<FieldType>,
        value_type: Box<FieldType>,
    },

    /// `list<T>`
    List(Box<FieldType>),

    /// `set<T>`
    Set(Box<FieldType>),
}

impl FieldType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The type's name: the declared name for [`FieldType::Named`], or the
    /// container keyword (`map`, `list`, `set`) otherwise.
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Map { .. } => "map",
            Self::List(_) => "list",
            Self::Set(_) => "set",
        }
    }
}

/// Named types serialize as bare strings; containers as
/// `{"name": ..., "keyType"?: ..., "valueType": ...}`.
impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(name) => serializer.serialize_str(name),
            Self::Map {
                key_type,
                value_type,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", self.name())?;
                map.serialize_entry("keyType", key_type)?;
                map.serialize_entry("valueType", value_type)?;
                map.end()
            }
            Self::List(value_type) | Self::Set(value_type) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", self.name())?;
                map.serialize_entry("valueType", value_type)?;
                map.end()
            }
        }
    }
}

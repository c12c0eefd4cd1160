use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde::Serialize;
use serde::Serializer;

/// A literal value: a constant's initializer or a field's default value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstValue {
    /// Hexadecimal (`0x1A`), integer, or dot-free decimal literal.
    Int(i64),

    /// Scientific-notation (`1.5e3`) or dotted decimal (`2.5`) literal, or a
    /// dot-free decimal too large for `i64`.
    Double(f64),

    /// A quoted string, with escapes copied through verbatim.
    String(String),

    Bool(bool),

    /// `[a, b, c]`
    List(Vec<ConstValue>),

    /// `{k1: v1, k2: v2}` as ordered pairs. Duplicate keys are kept.
    Map(Vec<(ConstValue, ConstValue)>),

    /// A dotted reference to another constant or enum member
    /// (e.g. `Color.RED`), left unresolved.
    Reference(Vec<String>),
}

impl ConstValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Double` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

/// 2^63: every integral `f64` below this magnitude converts to `i64`
/// exactly.
const I64_EXACT_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Serialize for ConstValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            // Integral doubles print without a fraction, as JavaScript numbers
            // do. Non-finite values serialize as `null`.
            Self::Double(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value.abs() < I64_EXACT_BOUND =>
            {
                serializer.serialize_i64(*value as i64)
            }
            Self::Double(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::List(items) => items.serialize(serializer),
            Self::Map(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for (key, value) in entries {
                    seq.serialize_element(&MapEntry { key, value })?;
                }
                seq.end()
            }
            Self::Reference(segments) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("=", segments)?;
                map.end()
            }
        }
    }
}

#[derive(Serialize)]
struct MapEntry<'a> {
    key: &'a ConstValue,
    value: &'a ConstValue,
}

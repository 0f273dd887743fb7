use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

use super::tag::TypeTag;

/// A single extracted value, tagged with its declared type.
///
/// Produced by typed scanning and stored in the output slots of indexed
/// scanning. One variant exists per [`TypeTag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    Boolean(bool),
    Byte(u8),
    SByte(i8),
    Char(char),
    Decimal(Decimal),
}

impl Value {
    /// The tag describing this value's runtime type.
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::String(_) => TypeTag::String,
            Self::Int16(_) => TypeTag::Int16,
            Self::UInt16(_) => TypeTag::UInt16,
            Self::Int32(_) => TypeTag::Int32,
            Self::UInt32(_) => TypeTag::UInt32,
            Self::Int64(_) => TypeTag::Int64,
            Self::UInt64(_) => TypeTag::UInt64,
            Self::Single(_) => TypeTag::Single,
            Self::Double(_) => TypeTag::Double,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Byte(_) => TypeTag::Byte,
            Self::SByte(_) => TypeTag::SByte,
            Self::Char(_) => TypeTag::Char,
            Self::Decimal(_) => TypeTag::Decimal,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Single(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::SByte(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_try_from_value {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ScanError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ScanError::Coercion {
                            tag: TypeTag::$variant,
                            text: other.to_string(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_try_from_value! {
    String => String,
    Int16 => i16,
    UInt16 => u16,
    Int32 => i32,
    UInt32 => u32,
    Int64 => i64,
    UInt64 => u64,
    Single => f32,
    Double => f64,
    Boolean => bool,
    Byte => u8,
    SByte => i8,
    Char => char,
    Decimal => Decimal,
}

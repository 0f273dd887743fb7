use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

use super::value::Value;

/// The closed set of value types a template placeholder can name.
///
/// The set is fixed for the lifetime of the process, which keeps pattern
/// synthesis total: every tag has a sub-pattern and a parse function in the
/// grammar table. Whitespace separates tokens and is never a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    String,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Boolean,
    Byte,
    SByte,
    Char,
    Decimal,
}

impl TypeTag {
    /// Every registered tag, in grammar-table order.
    pub const ALL: [Self; 14] = [
        Self::String,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::Boolean,
        Self::Byte,
        Self::SByte,
        Self::Char,
        Self::Decimal,
    ];

    /// The name this tag is written as in a template placeholder.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::SByte => "SByte",
            Self::Char => "Char",
            Self::Decimal => "Decimal",
        }
    }

    /// The zero value used to seed an output slot of this type.
    #[must_use]
    pub fn zero_value(self) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Int16 => Value::Int16(0),
            Self::UInt16 => Value::UInt16(0),
            Self::Int32 => Value::Int32(0),
            Self::UInt32 => Value::UInt32(0),
            Self::Int64 => Value::Int64(0),
            Self::UInt64 => Value::UInt64(0),
            Self::Single => Value::Single(0.0),
            Self::Double => Value::Double(0.0),
            Self::Boolean => Value::Boolean(false),
            Self::Byte => Value::Byte(0),
            Self::SByte => Value::SByte(0),
            Self::Char => Value::Char('\0'),
            Self::Decimal => Value::Decimal(Decimal::ZERO),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TemplateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "String" => Ok(Self::String),
            "Int16" => Ok(Self::Int16),
            "UInt16" => Ok(Self::UInt16),
            "Int32" => Ok(Self::Int32),
            "UInt32" => Ok(Self::UInt32),
            "Int64" => Ok(Self::Int64),
            "UInt64" => Ok(Self::UInt64),
            "Single" => Ok(Self::Single),
            "Double" => Ok(Self::Double),
            "Boolean" => Ok(Self::Boolean),
            "Byte" => Ok(Self::Byte),
            "SByte" => Ok(Self::SByte),
            "Char" => Ok(Self::Char),
            "Decimal" => Ok(Self::Decimal),
            other => Err(TemplateError::UnknownType {
                name: other.to_string(),
            }),
        }
    }
}

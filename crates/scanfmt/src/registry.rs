//! Type grammar registry.
//!
//! Maps every [`TypeTag`] to the regex fragment a placeholder of that type
//! matches in the input, and to the coercion that turns the captured text
//! into a typed [`Value`]. The table is a compile-time constant: it is
//! read-only for the lifetime of the process and safe for unbounded
//! concurrent reads.
//!
//! Registration is closed. Supporting a new type means extending
//! [`TypeTag`] and this table together, which keeps pattern synthesis
//! total over the tag set and the supported types statically enumerable.

use rust_decimal::Decimal;

use crate::types::{TypeTag, Value};

/// One row of the type grammar table.
pub struct GrammarEntry {
    /// The tag this entry is registered under.
    pub tag: TypeTag,
    /// Regex fragment substituted for the placeholder. Alternation is
    /// confined to the capturing group that wraps every token, and no
    /// fragment nests quantifiers.
    pub pattern: &'static str,
    /// Coercion from captured text to a typed value. `None` means the
    /// text is not representable in the type (e.g. range overflow).
    pub parse: fn(&str) -> Option<Value>,
}

static ENTRIES: [GrammarEntry; 14] = [
    GrammarEntry {
        tag: TypeTag::String,
        pattern: r"\S+",
        parse: |text| Some(Value::String(text.to_owned())),
    },
    GrammarEntry {
        tag: TypeTag::Int16,
        pattern: r"-?[0-9]+",
        parse: |text| text.parse().ok().map(Value::Int16),
    },
    GrammarEntry {
        tag: TypeTag::UInt16,
        pattern: r"[0-9]+",
        parse: |text| text.parse().ok().map(Value::UInt16),
    },
    GrammarEntry {
        tag: TypeTag::Int32,
        pattern: r"-?[0-9]+",
        parse: |text| text.parse().ok().map(Value::Int32),
    },
    GrammarEntry {
        tag: TypeTag::UInt32,
        pattern: r"[0-9]+",
        parse: |text| text.parse().ok().map(Value::UInt32),
    },
    GrammarEntry {
        tag: TypeTag::Int64,
        pattern: r"-?[0-9]+",
        parse: |text| text.parse().ok().map(Value::Int64),
    },
    GrammarEntry {
        tag: TypeTag::UInt64,
        pattern: r"[0-9]+",
        parse: |text| text.parse().ok().map(Value::UInt64),
    },
    GrammarEntry {
        tag: TypeTag::Single,
        pattern: r"[-+]?[0-9]*\.?[0-9]+",
        parse: |text| text.parse().ok().map(Value::Single),
    },
    GrammarEntry {
        tag: TypeTag::Double,
        pattern: r"[-+]?[0-9]*\.?[0-9]+",
        parse: |text| text.parse().ok().map(Value::Double),
    },
    GrammarEntry {
        tag: TypeTag::Boolean,
        pattern: r"true|false",
        parse: |text| text.parse().ok().map(Value::Boolean),
    },
    GrammarEntry {
        tag: TypeTag::Byte,
        pattern: r"[0-9]{1,3}",
        parse: |text| text.parse().ok().map(Value::Byte),
    },
    GrammarEntry {
        tag: TypeTag::SByte,
        pattern: r"-?[0-9]{1,3}",
        parse: |text| text.parse().ok().map(Value::SByte),
    },
    GrammarEntry {
        tag: TypeTag::Char,
        pattern: r"\S",
        parse: parse_char,
    },
    GrammarEntry {
        tag: TypeTag::Decimal,
        pattern: r"[-+]?[0-9]*\.?[0-9]+",
        parse: |text| text.parse::<Decimal>().ok().map(Value::Decimal),
    },
];

fn parse_char(text: &str) -> Option<Value> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Value::Char(c)),
        _ => None,
    }
}

/// Looks up the grammar entry for a tag.
///
/// Total over [`TypeTag`]: unknown type names are rejected earlier, when
/// template text is parsed into a tag.
#[must_use]
pub fn lookup(tag: TypeTag) -> &'static GrammarEntry {
    let entry = &ENTRIES[tag as usize];
    debug_assert_eq!(entry.tag, tag);
    entry
}

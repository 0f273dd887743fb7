//! Scan engine.
//!
//! Matches a compiled pattern against exactly one input string (first
//! match only), then coerces each captured substring into a typed value
//! via the grammar table. Templates are recompiled on every call; there
//! is no pattern cache, hidden or otherwise.

use tracing::trace;

use crate::error::{Result, ScanError};
use crate::registry;
use crate::template::{CompiledPattern, Placeholder};
use crate::types::{TypeTag, Value};

/// Extracts one value per `{TypeName}` placeholder, in declaration order.
///
/// Literal template tokens must appear in the input; whitespace between
/// tokens matches one-or-more whitespace characters, so the input's exact
/// spacing does not matter.
///
/// # Errors
///
/// * [`ScanError::Template`]: malformed template, unknown type name, or
///   `{n}` placeholders in a typed template.
/// * [`ScanError::NoMatch`]: the synthesized pattern does not match.
/// * [`ScanError::Coercion`]: a captured substring is not representable
///   in its declared type.
///
/// # Examples
///
/// ```
/// use scanfmt::{scan_typed, Value};
///
/// let values = scan_typed("foo 32767 foo", "foo {Int16} foo").unwrap();
/// assert_eq!(values, vec![Value::Int16(32767)]);
/// ```
pub fn scan_typed(input: &str, template: &str) -> Result<Vec<Value>> {
    let compiled = CompiledPattern::compile_typed(template)?;
    trace!(pattern = compiled.pattern(), "compiled typed template");

    let caps = compiled.captures(input).ok_or(ScanError::NoMatch)?;

    let mut values = Vec::with_capacity(compiled.groups().len());
    for group in compiled.groups() {
        let matched = caps.get(group.group_index).ok_or(ScanError::NoMatch)?;
        values.push(coerce(group.tag, matched.as_str())?);
    }
    Ok(values)
}

/// Scans the input and overwrites each referenced slot in place.
///
/// A `{n}` placeholder matches, and is coerced with, the grammar of
/// `slots[n]`'s runtime type; the template itself never names a type.
/// Slots the template does not reference are left untouched, and on any
/// failure no slot is written at all. Duplicate references are allowed;
/// the last write wins.
///
/// # Errors
///
/// * [`ScanError::Template`]: malformed template or `{TypeName}`
///   placeholders in an indexed template.
/// * [`ScanError::IndexOutOfRange`]: a placeholder references a slot
///   beyond `slots`, or the match is missing a required group.
/// * [`ScanError::NoMatch`]: the synthesized pattern does not match.
/// * [`ScanError::Coercion`]: captured text is not representable in the
///   slot's type.
///
/// # Examples
///
/// ```
/// use scanfmt::{scan_indexed, Value};
///
/// let mut slots = [Value::String(String::new())];
/// scan_indexed("foo bar foo", "foo {0} foo", &mut slots).unwrap();
/// assert_eq!(slots[0], Value::String("bar".into()));
/// ```
pub fn scan_indexed(input: &str, template: &str, slots: &mut [Value]) -> Result<()> {
    let slot_tags: Vec<TypeTag> = slots.iter().map(Value::tag).collect();
    let compiled = CompiledPattern::compile_indexed(template, &slot_tags)?;
    trace!(pattern = compiled.pattern(), "compiled indexed template");

    let caps = compiled.captures(input).ok_or(ScanError::NoMatch)?;

    // Coerce every capture before touching the slots, so a failure half
    // way through cannot leave the caller's storage partially written.
    let mut writes = Vec::with_capacity(compiled.groups().len());
    for group in compiled.groups() {
        if let Placeholder::Index(index) = group.placeholder {
            let matched = caps
                .get(group.group_index)
                .ok_or(ScanError::IndexOutOfRange {
                    index,
                    slots: slots.len(),
                })?;
            writes.push((index, coerce(group.tag, matched.as_str())?));
        }
    }

    for (index, value) in writes {
        slots[index] = value;
    }
    Ok(())
}

fn coerce(tag: TypeTag, text: &str) -> Result<Value> {
    (registry::lookup(tag).parse)(text).ok_or_else(|| ScanError::Coercion {
        tag,
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn scans_a_string_between_literals() {
        let values = scan_typed("foo bar foo", "foo {String} foo").unwrap();
        assert_eq!(values, vec![Value::String("bar".into())]);
    }

    #[test]
    fn scans_int16_and_decimal_literals() {
        let values = scan_typed("foo 32767 foo", "foo {Int16} foo").unwrap();
        assert_eq!(values, vec![Value::Int16(32767)]);

        let values = scan_typed("foo -8.99999 foo", "foo {Decimal} foo").unwrap();
        assert_eq!(
            values,
            vec![Value::Decimal("-8.99999".parse().unwrap())]
        );
    }

    #[test]
    fn extracts_multiple_values_in_declaration_order() {
        let values = scan_typed(
            "id 42 rate -8.9 ok true",
            "id {Int32} rate {Double} ok {Boolean}",
        )
        .unwrap();

        assert_eq!(
            values,
            vec![
                Value::Int32(42),
                Value::Double(-8.9),
                Value::Boolean(true),
            ]
        );
    }

    #[test]
    fn round_trips_every_tag_through_a_minimal_template() {
        let cases = [
            (Value::String("bar".into()), "bar"),
            (Value::Int16(i16::MAX), "32767"),
            (Value::UInt16(u16::MAX), "65535"),
            (Value::Int32(i32::MAX), "2147483647"),
            (Value::UInt32(u32::MAX), "4294967295"),
            (Value::Int64(i64::MAX), "9223372036854775807"),
            (Value::UInt64(u64::MAX), "18446744073709551615"),
            (Value::Single(-8.9), "-8.9"),
            (Value::Double(-8.9), "-8.9"),
            (Value::Boolean(true), "true"),
            (Value::Byte(u8::MAX), "255"),
            (Value::SByte(i8::MAX), "127"),
            (Value::Char('H'), "H"),
            (Value::Decimal("-8.99999".parse().unwrap()), "-8.99999"),
        ];

        for (expected, text) in cases {
            let template = format!("foo {{{}}} foo", expected.tag());
            let input = format!("foo {text} foo");
            let values = scan_typed(&input, &template).unwrap();
            assert_eq!(values, vec![expected], "round trip failed for {input:?}");
        }
    }

    #[test]
    fn numeric_minimums_round_trip_exactly() {
        let cases = [
            (Value::Int16(i16::MIN), i16::MIN.to_string()),
            (Value::Int32(i32::MIN), i32::MIN.to_string()),
            (Value::Int64(i64::MIN), i64::MIN.to_string()),
            (Value::SByte(i8::MIN), i8::MIN.to_string()),
            (Value::Decimal(Decimal::MIN), Decimal::MIN.to_string()),
            (Value::Decimal(Decimal::MAX), Decimal::MAX.to_string()),
        ];

        for (expected, text) in cases {
            let template = format!("{{{}}}", expected.tag());
            let values = scan_typed(&text, &template).unwrap();
            assert_eq!(values, vec![expected]);
        }
    }

    #[test]
    fn no_match_is_reported() {
        let err = scan_typed("abc", "foo {Int32} foo").unwrap_err();
        assert!(matches!(err, ScanError::NoMatch));
    }

    #[test]
    fn unknown_type_is_a_template_error() {
        let err = scan_typed("x", "{Frobnicate}").unwrap_err();
        assert!(matches!(err, ScanError::Template(_)));
    }

    #[test]
    fn coercion_failure_carries_tag_and_text() {
        // Byte's sub-pattern admits up to three digits; 999 overflows u8.
        let err = scan_typed("foo 999 foo", "foo {Byte} foo").unwrap_err();
        assert!(matches!(
            err,
            ScanError::Coercion { tag: TypeTag::Byte, text } if text == "999"
        ));
    }

    #[test]
    fn whitespace_between_tokens_is_insensitive() {
        let values = scan_typed("foo \t  42   foo", "foo {Int32} foo").unwrap();
        assert_eq!(values, vec![Value::Int32(42)]);
    }

    #[test]
    fn first_match_only() {
        let values = scan_typed("a 1 b a 2 b", "a {Int32} b").unwrap();
        assert_eq!(values, vec![Value::Int32(1)]);
    }

    #[test]
    fn indexed_scan_overwrites_the_referenced_slot() {
        let mut slots = [Value::String(String::new())];
        scan_indexed("foo bar foo", "foo {0} foo", &mut slots).unwrap();
        assert_eq!(slots[0], Value::String("bar".into()));
    }

    #[test]
    fn indexed_scan_resolves_grammar_from_slot_types() {
        let mut slots = [Value::Int16(0), Value::String(String::new())];
        scan_indexed("12 foo", "{0} {1}", &mut slots).unwrap();

        assert_eq!(slots[0], Value::Int16(12));
        assert_eq!(slots[1], Value::String("foo".into()));
    }

    #[test]
    fn indexed_scan_fills_every_registered_type() {
        let cases = [
            (TypeTag::String, "bar", Value::String("bar".into())),
            (TypeTag::Int16, "32767", Value::Int16(i16::MAX)),
            (TypeTag::UInt16, "65535", Value::UInt16(u16::MAX)),
            (TypeTag::Int32, "2147483647", Value::Int32(i32::MAX)),
            (TypeTag::UInt32, "4294967295", Value::UInt32(u32::MAX)),
            (
                TypeTag::Int64,
                "9223372036854775807",
                Value::Int64(i64::MAX),
            ),
            (
                TypeTag::UInt64,
                "18446744073709551615",
                Value::UInt64(u64::MAX),
            ),
            (TypeTag::Single, "-8.9", Value::Single(-8.9)),
            (TypeTag::Double, "-8.9", Value::Double(-8.9)),
            (TypeTag::Boolean, "true", Value::Boolean(true)),
            (TypeTag::Byte, "255", Value::Byte(u8::MAX)),
            (TypeTag::SByte, "127", Value::SByte(i8::MAX)),
            (TypeTag::Char, "H", Value::Char('H')),
            (
                TypeTag::Decimal,
                "-8.99999",
                Value::Decimal("-8.99999".parse().unwrap()),
            ),
        ];

        for (tag, text, expected) in cases {
            let mut slots = [tag.zero_value()];
            let input = format!("foo {text} foo");
            scan_indexed(&input, "foo {0} foo", &mut slots).unwrap();
            assert_eq!(slots[0], expected, "indexed scan failed for {tag}");
        }
    }

    #[test]
    fn out_of_range_slot_index_is_rejected() {
        let mut slots = [Value::String(String::new())];
        let err = scan_indexed("a b", "{0} {5}", &mut slots).unwrap_err();
        assert!(matches!(
            err,
            ScanError::IndexOutOfRange { index: 5, slots: 1 }
        ));
    }

    #[test]
    fn unreferenced_slots_are_left_untouched() {
        let mut slots = [Value::Int32(0), Value::Int32(-1)];
        scan_indexed("7", "{0}", &mut slots).unwrap();

        assert_eq!(slots[0], Value::Int32(7));
        assert_eq!(slots[1], Value::Int32(-1));
    }

    #[test]
    fn duplicate_index_last_write_wins() {
        let mut slots = [Value::Int32(0)];
        scan_indexed("1 2", "{0} {0}", &mut slots).unwrap();
        assert_eq!(slots[0], Value::Int32(2));
    }

    #[test]
    fn indexed_coercion_failure_writes_no_slot() {
        // {1} coerces fine but {0} overflows its Byte slot; neither slot
        // may be written.
        let mut slots = [Value::Byte(0), Value::String("seed".into())];
        let err = scan_indexed("word 999", "{1} {0}", &mut slots).unwrap_err();

        assert!(matches!(err, ScanError::Coercion { .. }));
        assert_eq!(slots[0], Value::Byte(0));
        assert_eq!(slots[1], Value::String("seed".into()));
    }

    #[test]
    fn indexed_no_match_leaves_slots_unchanged() {
        let mut slots = [Value::Int32(99)];
        let err = scan_indexed("abc", "foo {0} foo", &mut slots).unwrap_err();

        assert!(matches!(err, ScanError::NoMatch));
        assert_eq!(slots[0], Value::Int32(99));
    }
}

use thiserror::Error;

use crate::types::TypeTag;

/// Errors produced while turning a format template into a match pattern.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A token contains `{` but is not a well-formed `{content}` placeholder.
    #[error("malformed placeholder token {token:?}")]
    Malformed {
        /// The offending template token.
        token: String,
    },

    /// A type-declared placeholder names a tag absent from the grammar table.
    #[error("unknown type name {name:?}")]
    UnknownType {
        /// The name written between the braces.
        name: String,
    },

    /// An index placeholder appeared where `{TypeName}` placeholders are
    /// required. Also rejects templates mixing the two syntaxes.
    #[error("expected {{TypeName}} placeholders, found index placeholder {{{index}}}")]
    ExpectedTyped {
        /// The slot index the placeholder referenced.
        index: usize,
    },

    /// A type placeholder appeared where `{n}` placeholders are required.
    #[error("expected {{n}} placeholders, found type placeholder {{{name}}}")]
    ExpectedIndexed {
        /// The tag the placeholder named.
        name: TypeTag,
    },

    /// The synthesized pattern failed to compile (should not happen with
    /// the fixed grammar table).
    #[error("pattern synthesis error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors surfaced by the scanning operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The format template could not be compiled.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The compiled pattern does not match the input at all.
    #[error("input does not match the template pattern")]
    NoMatch,

    /// An index placeholder references a slot beyond the supplied slots, or
    /// the match produced fewer groups than the placeholders require.
    #[error("placeholder {{{index}}} is out of range for {slots} output slot(s)")]
    IndexOutOfRange {
        /// The slot index the placeholder referenced.
        index: usize,
        /// How many output slots the caller supplied.
        slots: usize,
    },

    /// A captured substring could not be parsed into the declared type.
    #[error("cannot coerce {text:?} into {tag}")]
    Coercion {
        /// The type the substring was declared as.
        tag: TypeTag,
        /// The captured substring.
        text: String,
    },
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

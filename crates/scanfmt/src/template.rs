//! Pattern compiler.
//!
//! Turns a raw format template into a [`CompiledPattern`]: one synthesized
//! regex plus an ordered list of capture-group descriptors. The template
//! grammar is deliberately small: whitespace-separated tokens, where each
//! token is either literal text or a single `{TypeName}` / `{n}`
//! placeholder.
//!
//! Synthesis wraps every token in a capturing group and joins tokens with
//! a one-or-more-whitespace matcher, so the compiled pattern is
//! insensitive to the exact spacing between tokens in the input. Literal
//! tokens are regex-escaped; placeholder tokens are replaced by the
//! grammar table's sub-pattern for their resolved tag.

use std::str::FromStr;

use regex::{Captures, Regex};

use crate::error::{ScanError, TemplateError};
use crate::registry;
use crate::types::TypeTag;

/// What a placeholder token declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{TypeName}`: the value type is written in the template.
    Type(TypeTag),
    /// `{n}`: the value type comes from the n-th caller-supplied slot.
    Index(usize),
}

/// One placeholder's position in the synthesized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureGroup {
    /// 1-based group number in the synthesized regex. Literal tokens are
    /// wrapped in groups too, so this is not the placeholder's ordinal
    /// among placeholders.
    pub group_index: usize,
    /// What the placeholder declared.
    pub placeholder: Placeholder,
    /// The grammar tag the placeholder resolved to.
    pub tag: TypeTag,
}

/// A compiled matcher: the synthesized pattern and its placeholder groups
/// in left-to-right order.
///
/// Immutable once built and owned by the call that compiled it; compiled
/// patterns are never cached or shared across calls.
#[derive(Debug)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
    groups: Vec<CaptureGroup>,
}

impl CompiledPattern {
    /// Compiles a template whose placeholders declare types inline
    /// (`{TypeName}`).
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for malformed placeholder tokens,
    /// unknown type names, or `{n}` placeholders.
    pub fn compile_typed(template: &str) -> Result<Self, TemplateError> {
        Self::compile(template, |placeholder| match placeholder {
            Placeholder::Type(tag) => Ok(tag),
            Placeholder::Index(index) => Err(TemplateError::ExpectedTyped { index }),
        })
    }

    /// Compiles a template whose placeholders reference output slots
    /// (`{n}`). Each placeholder's sub-pattern is resolved from the
    /// runtime type of the referenced slot, not from the template text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::IndexOutOfRange`] when a placeholder
    /// references a slot beyond `slot_tags`, and [`ScanError::Template`]
    /// for malformed tokens or `{TypeName}` placeholders.
    pub fn compile_indexed(template: &str, slot_tags: &[TypeTag]) -> Result<Self, ScanError> {
        Self::compile(template, |placeholder| match placeholder {
            Placeholder::Index(index) => {
                slot_tags
                    .get(index)
                    .copied()
                    .ok_or(ScanError::IndexOutOfRange {
                        index,
                        slots: slot_tags.len(),
                    })
            }
            Placeholder::Type(tag) => {
                Err(ScanError::Template(TemplateError::ExpectedIndexed {
                    name: tag,
                }))
            }
        })
    }

    fn compile<E, F>(template: &str, mut resolve: F) -> Result<Self, E>
    where
        E: From<TemplateError>,
        F: FnMut(Placeholder) -> Result<TypeTag, E>,
    {
        let mut pattern = String::new();
        let mut groups = Vec::new();

        for (position, token) in template.split_whitespace().enumerate() {
            if position > 0 {
                pattern.push_str(r"\s+");
            }
            pattern.push('(');
            match parse_token(token).map_err(E::from)? {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Placeholder(placeholder) => {
                    let tag = resolve(placeholder)?;
                    pattern.push_str(registry::lookup(tag).pattern);
                    groups.push(CaptureGroup {
                        group_index: position + 1,
                        placeholder,
                        tag,
                    });
                }
            }
            pattern.push(')');
        }

        let regex = Regex::new(&pattern).map_err(|e| E::from(TemplateError::Pattern(e)))?;
        Ok(Self {
            pattern,
            regex,
            groups,
        })
    }

    /// The synthesized regex pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholder groups in left-to-right order.
    #[must_use]
    pub fn groups(&self) -> &[CaptureGroup] {
        &self.groups
    }

    /// Runs the pattern against the input. First match only; the engine
    /// never scans for further matches.
    #[must_use]
    pub fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(input)
    }
}

enum Token<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

fn parse_token(token: &str) -> Result<Token<'_>, TemplateError> {
    if !token.contains('{') {
        return Ok(Token::Literal(token));
    }

    let malformed = || TemplateError::Malformed {
        token: token.to_owned(),
    };

    let content = token
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(malformed)?;
    if content.is_empty() || content.contains(['{', '}']) {
        return Err(malformed());
    }

    if content.bytes().all(|b| b.is_ascii_digit()) {
        let index = content.parse().map_err(|_| malformed())?;
        Ok(Token::Placeholder(Placeholder::Index(index)))
    } else {
        let tag = TypeTag::from_str(content)?;
        Ok(Token::Placeholder(Placeholder::Type(tag)))
    }
}

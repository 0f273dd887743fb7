//! # Scanfmt
//!
//! Scanf-style text extraction: a format template mixing literal text,
//! whitespace, and typed placeholders is compiled into a matcher, applied
//! once to an input string, and yields strongly-typed values in
//! declaration order.
//!
//! Two placeholder syntaxes exist, one per scanning mode:
//!
//! * `{TypeName}`: the type is declared in the template; [`scan_typed`]
//!   returns the extracted [`Value`]s in order.
//! * `{n}`: the placeholder references the n-th caller-supplied output
//!   slot, and the slot's own runtime type drives matching and coercion;
//!   [`scan_indexed`] overwrites the slots in place, and [`scan_tuple`] /
//!   [`scan_one`] wrap that in typed tuple projection.
//!
//! ## Quick Start
//!
//! ```rust
//! use scanfmt::{scan_typed, scan_tuple, Value};
//!
//! let values = scan_typed("foo bar foo", "foo {String} foo").unwrap();
//! assert_eq!(values, vec![Value::String("bar".into())]);
//!
//! let (id, word): (i32, String) = scan_tuple("12 foo", "{0} {1}").unwrap();
//! assert_eq!(id, 12);
//! assert_eq!(word, "foo");
//! ```
//!
//! Templates are recompiled on every call; the engine keeps no state
//! beyond the process-wide, read-only type grammar table, so every
//! operation is re-entrant and thread-safe.
pub mod error;
pub mod registry;
pub mod scan;
pub mod template;
pub mod types;

// Re-export primary API
pub use error::{Result, ScanError, TemplateError};
pub use registry::GrammarEntry;
pub use scan::{ScanTuple, Scannable, scan_indexed, scan_one, scan_tuple, scan_typed};
pub use template::{CaptureGroup, CompiledPattern, Placeholder};
pub use types::{TypeTag, Value};

//! Structured renderers for the horn binding generator.
//!
//! Rendering happens through two layers:
//!
//! - [`ColumnWriter`] wraps any `io::Write` and tracks the current
//!   horizontal column, which is what makes nested, syntax-significant
//!   indentation deterministic and byte-for-byte reproducible.
//! - [`PrintNode`] is a small tree of printable shapes (literal, clause,
//!   conditional) rendered against a column offset.
//!
//! On top of those sit the two surface syntaxes: the logic-clause rendering
//! of dispatch trees ([`logic`]), the host-language wrapper / registration
//! rendering ([`host`]), and the four enum render strategies ([`enums`]).
//! The [`artifacts`] module assembles whole output files from these pieces.

pub mod artifacts;
pub mod enums;
pub mod host;
pub mod logic;

mod node;
mod writer;

pub use node::PrintNode;
pub use writer::ColumnWriter;

//! Parser for the declaration catalogue.
//!
//! The input is line-oriented text. Blank lines and `//` comment lines are
//! skipped; every other line must have the shape
//!
//! ```text
//! RETTYPE NAME(ARG, ARG, ...);
//! ```
//!
//! where each `ARG` is a type descriptor, optionally prefixed by `const`
//! and/or `unsigned`, optionally suffixed by `&`, and optionally carrying a
//! trailing `=DEFAULT`. Commas inside balanced `<...>` or `(...)` groups do
//! not split arguments.
//!
//! Parsing is strict: one malformed line aborts the whole run, since the
//! downstream clustering needs a complete, consistent catalogue.

mod decl;
mod error;
mod loader;
mod typespec;

pub use decl::parse_decl;
pub use error::ParseError;
pub use loader::parse_decls;
pub use typespec::parse_typespec;

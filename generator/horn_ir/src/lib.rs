//! Data model for the horn binding generator.
//!
//! Everything downstream of parsing works over the types in this crate:
//!
//! ```text
//! declarations → Signature → CallForm → Group → DecisionNode → rendering
//! ```
//!
//! - [`TypeSpec`] models one type descriptor (qualifiers + base + default).
//! - [`Signature`] is one parsed declaration line.
//! - [`CallForm`] is a concrete, default-free, fixed-arity variant of a
//!   signature, carrying its generated API identifier.
//! - [`Group`] collects the call-forms sharing a name and arity.
//! - [`DecisionNode`] is the per-group runtime type-dispatch tree.
//! - [`EnumDescriptor`] is one entry of the external enum registry.
//! - [`Profile`] is the catalogue of target-library naming rules.
//!
//! This crate holds plain data only; no parsing, no transformation, no I/O.

mod callform;
mod dtree;
mod enums;
mod profile;
mod signature;
mod typespec;

pub use callform::CallForm;
pub use dtree::{DecisionNode, Group};
pub use enums::EnumDescriptor;
pub use profile::Profile;
pub use signature::Signature;
pub use typespec::TypeSpec;

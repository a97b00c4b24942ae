//! Expansion and tree-construction errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Two call-forms in one group share a full argument base-type
    /// sequence. Rejected at build time: silent shadowing would hide a
    /// duplicate declaration in the catalogue.
    #[error("duplicate call-form in group {group}/{arity}: `{api}` shares its argument types with an earlier form")]
    DuplicateForm {
        group: String,
        arity: usize,
        api: String,
    },
}

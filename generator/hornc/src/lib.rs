//! Command-line driver for the horn binding generator.
//!
//! Wires the pipeline together: load the declaration catalogue, expand and
//! cluster it, build the dispatch trees, and write the four generated
//! artifacts. The binary (`horn`) lives in `main.rs`; everything testable
//! is in this library.

pub mod commands;
pub mod registry;

mod error;

pub use error::CliError;

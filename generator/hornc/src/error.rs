//! Top-level CLI errors.

use std::path::PathBuf;

use horn_expand::ExpandError;
use horn_parse::ParseError;
use thiserror::Error;

/// Everything that can abort one generator invocation. Generation-time
/// failures are fatal: no partial output is considered valid.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid enum registry `{path}`: {source}")]
    Registry {
        path: PathBuf,
        source: serde_json::Error,
    },
}

//! Parse error types.

use thiserror::Error;

/// A malformed declaration. Fatal to the run: declarations are not
/// independently recoverable, so no partial catalogue is produced.
///
/// The offending text is retained verbatim for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not have the `RETTYPE NAME(ARGS);` shape.
    #[error("malformed declaration: `{text}`")]
    MalformedDeclaration { text: String },

    /// A type descriptor reduced to nothing after qualifier stripping.
    #[error("empty type descriptor: `{text}`")]
    EmptyType { text: String },

    /// An error located at a 1-based line of the catalogue file.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Wrap this error with the 1-based line it occurred on.
    pub fn at_line(self, line: usize) -> Self {
        ParseError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

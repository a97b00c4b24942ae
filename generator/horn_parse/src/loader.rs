//! Catalogue-file loading.

use horn_ir::Signature;
use tracing::debug;

use crate::decl::parse_decl;
use crate::ParseError;

/// Parse a whole declaration catalogue.
///
/// Blank lines are ignored, as are comment lines whose first non-whitespace
/// characters are `//`. Every other line must parse as a declaration; the
/// first failure aborts with the 1-based line number attached.
pub fn parse_decls(source: &str) -> Result<Vec<Signature>, ParseError> {
    let mut decls = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let sig = parse_decl(line).map_err(|e| e.at_line(idx + 1))?;
        decls.push(sig);
    }
    debug!(count = decls.len(), "parsed declaration catalogue");
    Ok(decls)
}

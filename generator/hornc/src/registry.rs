//! Enum registry loading.
//!
//! The registry is an externally supplied JSON array, ordered, one entry
//! per enumerated type:
//!
//! ```json
//! [ { "name": "IntConLevel", "symbols": ["ICL_VAL", "ICL_BND"] } ]
//! ```
//!
//! Entry order and symbol order are preserved; the profile's exclusion set
//! removes specific type names from consideration entirely.

use std::fs;
use std::path::Path;

use horn_ir::{EnumDescriptor, Profile};
use serde::Deserialize;
use tracing::debug;

use crate::CliError;

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    name: String,
    symbols: Vec<String>,
}

/// Load and filter the enum registry.
pub fn load_registry(path: &Path, profile: &Profile) -> Result<Vec<EnumDescriptor>, CliError> {
    let text = fs::read_to_string(path)?;
    let entries: Vec<RegistryEntry> =
        serde_json::from_str(&text).map_err(|source| CliError::Registry {
            path: path.to_path_buf(),
            source,
        })?;
    let descs: Vec<EnumDescriptor> = entries
        .into_iter()
        .filter(|e| !profile.is_enum_excluded(&e.name))
        .map(|e| EnumDescriptor {
            name: e.name,
            symbols: e.symbols,
        })
        .collect();
    debug!(count = descs.len(), "loaded enum registry");
    Ok(descs)
}

//! Type descriptors with qualifier modelling.

use std::fmt;

/// One parsed type descriptor: qualifiers, base name, optional default text.
///
/// Qualifiers and the default are independent and combine freely. The base
/// name is stored verbatim; unknown names are legal and act as opaque
/// identifiers matched by name during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    pub is_const: bool,
    pub is_unsigned: bool,
    pub is_reference: bool,
    /// Base type name, stored verbatim (may itself contain `<...>`).
    pub base: String,
    /// Default-value text, verbatim, when the argument was declared
    /// `TYPE=DEFAULT`.
    pub default: Option<String>,
}

impl TypeSpec {
    /// A bare type with no qualifiers and no default.
    pub fn plain(base: impl Into<String>) -> Self {
        TypeSpec {
            is_const: false,
            is_unsigned: false,
            is_reference: false,
            base: base.into(),
            default: None,
        }
    }

    /// Drop the compile-time qualifiers, keeping base name and default.
    ///
    /// Dispatch matches by base name only; const/unsigned/reference are
    /// concerns of the original API surface, not of runtime dispatch.
    pub fn strip_qualifiers(&mut self) {
        self.is_const = false;
        self.is_unsigned = false;
        self.is_reference = false;
    }
}

impl fmt::Display for TypeSpec {
    /// Renders in the reverse of parse order: `const `, `unsigned `, base,
    /// `&`, `=default`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            f.write_str("const ")?;
        }
        if self.is_unsigned {
            f.write_str("unsigned ")?;
        }
        f.write_str(&self.base)?;
        if self.is_reference {
            f.write_str("&")?;
        }
        if let Some(default) = &self.default {
            write!(f, "={default}")?;
        }
        Ok(())
    }
}

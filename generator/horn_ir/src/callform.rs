//! Concrete call-forms produced by default expansion.

use std::fmt;

use crate::TypeSpec;

/// One fully concrete, default-free, arity-fixed variant of a declared
/// signature.
///
/// Created only by the expander; never mutated afterwards. The `api`
/// identifier is `"<name>_<n>"` with `n` drawn from a counter local to one
/// expander invocation, assigned in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallForm {
    pub ret: TypeSpec,
    pub name: String,
    pub args: Vec<TypeSpec>,
    pub api: String,
}

impl CallForm {
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The argument base-type sequence this form dispatches on.
    pub fn base_types(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.base.as_str())
    }
}

impl fmt::Display for CallForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.ret, self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ") -> {};", self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_api() {
        let form = CallForm {
            ret: TypeSpec::plain("void"),
            name: "dom".to_string(),
            args: vec![TypeSpec::plain("Space"), TypeSpec::plain("IntVar")],
            api: "dom_3".to_string(),
        };
        assert_eq!(form.to_string(), "void dom(Space, IntVar) -> dom_3;");
    }
}

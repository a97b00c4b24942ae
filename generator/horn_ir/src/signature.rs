//! Parsed declaration lines.

use std::fmt;

use crate::TypeSpec;

/// One declaration from the catalogue: `RETTYPE NAME(ARGS);`.
///
/// Parsed once from one input line and immutable thereafter; the expander
/// clones signatures when it needs to transform them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub ret: TypeSpec,
    pub name: String,
    pub args: Vec<TypeSpec>,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.ret, self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_joins_arguments() {
        let sig = Signature {
            ret: TypeSpec::plain("void"),
            name: "dom".to_string(),
            args: vec![TypeSpec::plain("Space"), TypeSpec::plain("IntVar")],
        };
        assert_eq!(sig.to_string(), "void dom(Space, IntVar);");
    }

    #[test]
    fn display_empty_arguments() {
        let sig = Signature {
            ret: TypeSpec::plain("void"),
            name: "nop".to_string(),
            args: Vec::new(),
        };
        assert_eq!(sig.to_string(), "void nop();");
    }
}

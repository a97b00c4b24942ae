//! Declaration-line parsing.

use horn_ir::Signature;

use crate::typespec::parse_typespec;
use crate::ParseError;

/// Parse one non-empty, non-comment declaration line:
/// `RETTYPE NAME(ARGS);`.
///
/// `NAME` is the trailing identifier before the first `(`; everything in
/// front of it is the return type. The argument list is split on top-level
/// commas only: commas inside balanced `<...>` or `(...)` groups belong to
/// one argument.
pub fn parse_decl(line: &str) -> Result<Signature, ParseError> {
    let text = line.trim();
    let malformed = || ParseError::MalformedDeclaration {
        text: text.to_string(),
    };

    let body = text.strip_suffix(");").ok_or_else(malformed)?;
    let open = body.find('(').ok_or_else(malformed)?;
    let head = &body[..open];
    let args_text = &body[open + 1..];

    let name_start = head
        .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .map_or(0, |i| i + 1);
    let name = &head[name_start..];
    let ret_text = head[..name_start].trim();
    if name.is_empty() || ret_text.is_empty() {
        return Err(malformed());
    }

    let ret = parse_typespec(ret_text)?;
    let args = split_args(args_text)
        .into_iter()
        .map(parse_typespec)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Signature {
        ret,
        name: name.to_string(),
        args,
    })
}

/// Split an argument list on top-level commas, honouring balanced `<...>`
/// and `(...)` groups.
fn split_args(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut angle = 0usize;
    let mut paren = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' => angle += 1,
            '>' => angle = angle.saturating_sub(1),
            '(' => paren += 1,
            ')' => paren = paren.saturating_sub(1),
            ',' if angle == 0 && paren == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_declaration() {
        let sig = parse_decl("void dom(Space, IntVar, int);").unwrap();
        assert_eq!(sig.ret.base, "void");
        assert_eq!(sig.name, "dom");
        let bases: Vec<_> = sig.args.iter().map(|a| a.base.as_str()).collect();
        assert_eq!(bases, vec!["Space", "IntVar", "int"]);
    }

    #[test]
    fn no_arguments() {
        let sig = parse_decl("void nop();").unwrap();
        assert_eq!(sig.name, "nop");
        assert!(sig.args.is_empty());
    }

    #[test]
    fn template_commas_do_not_split() {
        let sig = parse_decl("void branch(Home, TieBreakVarBranch<IntVarBranch,SetVarBranch>, IntVar);").unwrap();
        assert_eq!(sig.arity(), 3);
        assert_eq!(sig.args[1].base, "TieBreakVarBranch<IntVarBranch,SetVarBranch>");
    }

    #[test]
    fn parenthesized_commas_do_not_split() {
        let sig = parse_decl("void f(Home, Foo=bar(1,2), int);").unwrap();
        assert_eq!(sig.arity(), 3);
        assert_eq!(sig.args[1].base, "Foo");
        assert_eq!(sig.args[1].default.as_deref(), Some("bar(1,2)"));
    }

    #[test]
    fn defaults_are_recorded_per_argument() {
        let sig = parse_decl("void foo(IntVar, BoolVar=0);").unwrap();
        assert_eq!(sig.args[0].default, None);
        assert_eq!(sig.args[1].default.as_deref(), Some("0"));
    }

    #[test]
    fn qualified_return_type() {
        let sig = parse_decl("const IntArgs& row(int);").unwrap();
        assert!(sig.ret.is_const);
        assert!(sig.ret.is_reference);
        assert_eq!(sig.ret.base, "IntArgs");
    }

    #[test]
    fn missing_semicolon_is_malformed() {
        let err = parse_decl("void dom(Space)").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDeclaration {
                text: "void dom(Space)".to_string()
            }
        );
    }

    #[test]
    fn missing_return_type_is_malformed() {
        assert!(parse_decl("dom(Space);").is_err());
    }

    #[test]
    fn missing_parentheses_is_malformed() {
        assert!(parse_decl("void dom;").is_err());
    }

    #[test]
    fn error_retains_line_text() {
        let err = parse_decl("  garbage  ").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDeclaration {
                text: "garbage".to_string()
            }
        );
    }
}

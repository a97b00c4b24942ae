//! Type-descriptor parsing.

use horn_ir::TypeSpec;

use crate::ParseError;

/// Parse one trimmed type descriptor.
///
/// Strips, in this fixed order against the residual text, each attempted
/// once:
///
/// 1. a trailing `=DEFAULT` (split on the last `=`, both sides non-empty),
/// 2. a leading `const` token,
/// 3. a leading `unsigned` token,
/// 4. a trailing `&` reference marker.
///
/// Whatever remains is the base type name, stored verbatim. Unknown base
/// names are legal; no semantic validation happens here.
pub fn parse_typespec(text: &str) -> Result<TypeSpec, ParseError> {
    let trimmed = text.trim();
    let mut rest = trimmed;

    let mut default = None;
    if let Some(eq) = rest.rfind('=') {
        let lhs = rest[..eq].trim();
        let rhs = rest[eq + 1..].trim();
        // An `=` with an empty side is not a default assignment; it stays
        // part of the base name.
        if !lhs.is_empty() && !rhs.is_empty() {
            default = Some(rhs.to_string());
            rest = lhs;
        }
    }

    let is_const = strip_leading_keyword(&mut rest, "const");
    let is_unsigned = strip_leading_keyword(&mut rest, "unsigned");

    let is_reference = match rest.strip_suffix('&') {
        Some(stripped) => {
            rest = stripped.trim_end();
            true
        }
        None => false,
    };

    if rest.is_empty() {
        return Err(ParseError::EmptyType {
            text: trimmed.to_string(),
        });
    }

    Ok(TypeSpec {
        is_const,
        is_unsigned,
        is_reference,
        base: rest.to_string(),
        default,
    })
}

/// Strip `keyword` from the front of `rest` when it ends at a word
/// boundary. `constX` is a base name, not a qualified `X`.
fn strip_leading_keyword(rest: &mut &str, keyword: &str) -> bool {
    if let Some(tail) = rest.strip_prefix(keyword) {
        let at_boundary = tail
            .chars()
            .next()
            .is_some_and(|c| !c.is_alphanumeric() && c != '_');
        if at_boundary {
            *rest = tail.trim_start();
            return true;
        }
    }
    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_base_name() {
        let spec = parse_typespec("IntVar").unwrap();
        assert_eq!(spec, TypeSpec::plain("IntVar"));
    }

    #[test]
    fn all_qualifiers_and_default() {
        let spec = parse_typespec("const unsigned IntArgs&=ICL_DEF").unwrap();
        assert!(spec.is_const);
        assert!(spec.is_unsigned);
        assert!(spec.is_reference);
        assert_eq!(spec.base, "IntArgs");
        assert_eq!(spec.default.as_deref(), Some("ICL_DEF"));
    }

    #[test]
    fn default_splits_on_last_equals() {
        let spec = parse_typespec("IntVar=x=y").unwrap();
        assert_eq!(spec.base, "IntVar=x");
        assert_eq!(spec.default.as_deref(), Some("y"));
    }

    #[test]
    fn keyword_prefix_of_identifier_is_not_a_qualifier() {
        let spec = parse_typespec("constX").unwrap();
        assert!(!spec.is_const);
        assert_eq!(spec.base, "constX");

        let spec = parse_typespec("unsignedness").unwrap();
        assert!(!spec.is_unsigned);
        assert_eq!(spec.base, "unsignedness");
    }

    #[test]
    fn template_base_is_kept_verbatim() {
        let spec = parse_typespec("TieBreakVarBranch<IntVarBranch>").unwrap();
        assert_eq!(spec.base, "TieBreakVarBranch<IntVarBranch>");
    }

    #[test]
    fn reference_without_base_is_rejected() {
        let err = parse_typespec("const&").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyType {
                text: "const&".to_string()
            }
        );
    }

    #[test]
    fn display_round_trips_parse() {
        for text in ["const IntArgs&", "unsigned int=0", "IntVar"] {
            let spec = parse_typespec(text).unwrap();
            assert_eq!(spec.to_string(), text);
        }
    }
}

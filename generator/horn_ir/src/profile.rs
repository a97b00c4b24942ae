//! Target-library naming rules.

/// The fixed naming rules for one target library, made explicit data.
///
/// The default profile carries the catalogue the generator ships with:
/// which base types are unsupported, which are renamed before expansion,
/// how the handle type is matched at dispatch time, and which argument
/// types need the handle as an extra construction parameter on the host
/// side.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Base types that are categorically unsupported. A signature requiring
    /// one without a default is dropped whole; a defaulted occurrence is
    /// removed from the argument list.
    pub drop_types: Vec<String>,
    /// Base-type renames applied before filtering and expansion.
    pub renames: Vec<(String, String)>,
    /// The host-environment handle type normally used for the first
    /// argument.
    pub handle_type: String,
    /// Broadened predicate name used when dispatching on `handle_type`.
    /// Covers a known alternate wrapper form; a fixed naming rule, not a
    /// general aliasing mechanism.
    pub handle_check: String,
    /// Argument types whose host-side extraction takes the handle as an
    /// extra construction parameter.
    pub handle_bound_types: Vec<String>,
    /// Enum registry entries excluded from generation entirely.
    pub enum_exclusions: Vec<String>,
    /// Prefix for every generated symbol (wrapper functions, atoms,
    /// conversion functions).
    pub symbol_prefix: String,
    /// Functor of the argument-type error thrown by generated dispatch
    /// clauses.
    pub error_functor: String,
}

impl Profile {
    pub fn is_dropped(&self, base: &str) -> bool {
        self.drop_types.iter().any(|t| t == base)
    }

    pub fn rename_of(&self, base: &str) -> Option<&str> {
        self.renames
            .iter()
            .find(|(from, _)| from == base)
            .map(|(_, to)| to.as_str())
    }

    pub fn is_handle_bound(&self, base: &str) -> bool {
        self.handle_bound_types.iter().any(|t| t == base)
    }

    pub fn is_enum_excluded(&self, name: &str) -> bool {
        self.enum_exclusions.iter().any(|t| t == name)
    }

    /// Dispatch-check name for a declared base type: the broadened handle
    /// predicate for the handle type, the type itself otherwise.
    pub fn check_name<'a>(&'a self, base: &'a str) -> &'a str {
        if base == self.handle_type {
            &self.handle_check
        } else {
            base
        }
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            drop_types: owned(&[
                "DFA",
                "TupleSet",
                "VarBranchOptions",
                "ValBranchOptions",
                "TieBreakVarBranch<IntVarBranch>",
                "TieBreakVarBranchOptions",
                "TieBreakVarBranch<SetVarBranch>",
            ]),
            renames: vec![
                ("Home".to_string(), "Space".to_string()),
                ("IntSharedArray".to_string(), "IntArgs".to_string()),
            ],
            handle_type: "Space".to_string(),
            handle_check: "Space_or_Clause".to_string(),
            handle_bound_types: owned(&[
                "IntVar",
                "BoolVar",
                "SetVar",
                "IntVarArgs",
                "BoolVarArgs",
                "SetVarArgs",
            ]),
            enum_exclusions: owned(&[
                "ScriptMode",
                "ViewSelStatus",
                "ExecStatus",
                "ActorProperty",
                "SpaceStatus",
            ]),
            symbol_prefix: "glue_".to_string(),
            error_functor: "glue_argument_error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_profile_renames_handle() {
        let profile = Profile::default();
        assert_eq!(profile.rename_of("Home"), Some("Space"));
        assert_eq!(profile.rename_of("IntSharedArray"), Some("IntArgs"));
        assert_eq!(profile.rename_of("IntVar"), None);
    }

    #[test]
    fn check_name_broadens_only_the_handle() {
        let profile = Profile::default();
        assert_eq!(profile.check_name("Space"), "Space_or_Clause");
        assert_eq!(profile.check_name("IntVar"), "IntVar");
    }

    #[test]
    fn drop_list_matches_whole_names() {
        let profile = Profile::default();
        assert!(profile.is_dropped("TupleSet"));
        assert!(!profile.is_dropped("TupleSetArgs"));
    }
}

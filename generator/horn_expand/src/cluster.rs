//! Clustering call-forms into dispatch groups.

use horn_ir::{CallForm, Group};
use rustc_hash::FxHashMap;

/// Group call-forms by (name, arity).
///
/// Groups come out in first-seen key order and keep the expander's relative
/// order within each group; the hash map is used for lookup only, never for
/// iteration, so output order is deterministic.
pub fn cluster(forms: Vec<CallForm>) -> Vec<Group> {
    let mut index: FxHashMap<(String, usize), usize> = FxHashMap::default();
    let mut groups: Vec<Group> = Vec::new();
    for form in forms {
        let key = (form.name.clone(), form.arity());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                name: form.name.clone(),
                arity: form.arity(),
                forms: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].forms.push(form);
    }
    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use horn_ir::Profile;
    use horn_parse::parse_decls;
    use pretty_assertions::assert_eq;

    fn groups_of(source: &str) -> Vec<Group> {
        let sigs = parse_decls(source).unwrap();
        cluster(crate::expand(&sigs, &Profile::default()))
    }

    #[test]
    fn same_name_different_arity_is_a_different_group() {
        let groups = groups_of("void p(IntVar, int=0);");
        let keys: Vec<_> = groups.iter().map(|g| (g.name.clone(), g.arity)).collect();
        assert_eq!(keys, vec![("p".to_string(), 1), ("p".to_string(), 2)]);
    }

    #[test]
    fn groups_keep_expander_order_within_a_key() {
        let groups = groups_of("void p(IntVar);\nvoid q(BoolVar);\nvoid p(SetVar);\n");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "p");
        let apis: Vec<_> = groups[0].forms.iter().map(|f| f.api.clone()).collect();
        assert_eq!(apis, vec!["p_1", "p_3"]);
        assert_eq!(groups[1].name, "q");
    }
}

//! Discrimination-tree construction.

use horn_ir::{CallForm, DecisionNode, Group};
use rustc_hash::FxHashMap;

use crate::ExpandError;

/// Build the discrimination tree for one group.
///
/// At depth `i` the call-forms in scope are partitioned by the base type of
/// their argument at index `i`; each partition becomes one branch edge, in
/// first-seen order, and recursion continues at `i + 1`. A single remaining
/// call-form at depth equal to the arity becomes a leaf. Two call-forms
/// with identical base-type sequences cannot be told apart at any depth and
/// are rejected.
pub fn build_dtree(group: &Group) -> Result<DecisionNode, ExpandError> {
    let forms: Vec<&CallForm> = group.forms.iter().collect();
    build_node(group, 0, &forms)
}

fn build_node(
    group: &Group,
    index: usize,
    forms: &[&CallForm],
) -> Result<DecisionNode, ExpandError> {
    if forms.len() == 1 && forms[0].arity() == index {
        return Ok(DecisionNode::Leaf((*forms[0]).clone()));
    }
    if index >= group.arity {
        // All argument positions are spent and more than one form remains.
        let shadowed = forms.last().map_or_else(String::new, |f| f.api.clone());
        return Err(ExpandError::DuplicateForm {
            group: group.name.clone(),
            arity: group.arity,
            api: shadowed,
        });
    }

    let mut order: Vec<&str> = Vec::new();
    let mut partitions: FxHashMap<&str, Vec<&CallForm>> = FxHashMap::default();
    for &form in forms {
        let base = form.args[index].base.as_str();
        if !partitions.contains_key(base) {
            order.push(base);
        }
        partitions.entry(base).or_default().push(form);
    }

    let mut edges = Vec::with_capacity(order.len());
    for base in order {
        let sub = build_node(group, index + 1, &partitions[base])?;
        edges.push((base.to_string(), sub));
    }
    Ok(DecisionNode::Branch { index, edges })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use horn_ir::Profile;
    use horn_parse::parse_decls;
    use pretty_assertions::assert_eq;

    fn group_of(source: &str) -> Group {
        let sigs = parse_decls(source).unwrap();
        let mut groups = crate::cluster(crate::expand(&sigs, &Profile::default()));
        assert_eq!(groups.len(), 1, "test source must form one group");
        groups.remove(0)
    }

    /// Collect every root-to-leaf path as (type sequence, api).
    fn paths(node: &DecisionNode) -> Vec<(Vec<String>, String)> {
        fn walk(node: &DecisionNode, prefix: &[String], out: &mut Vec<(Vec<String>, String)>) {
            match node {
                DecisionNode::Leaf(form) => out.push((prefix.to_vec(), form.api.clone())),
                DecisionNode::Branch { edges, .. } => {
                    for (base, sub) in edges {
                        let mut next = prefix.to_vec();
                        next.push(base.clone());
                        walk(sub, &next, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(node, &[], &mut out);
        out
    }

    #[test]
    fn two_unary_forms_share_one_branch() {
        let group = group_of("void p(IntVar);\nvoid p(SetVar);\n");
        let tree = build_dtree(&group).unwrap();
        let DecisionNode::Branch { index, edges } = &tree else {
            panic!("expected a branch at the root");
        };
        assert_eq!(*index, 0);
        let types: Vec<_> = edges.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(types, vec!["IntVar", "SetVar"]);
        assert!(matches!(&edges[0].1, DecisionNode::Leaf(f) if f.api == "p_1"));
        assert!(matches!(&edges[1].1, DecisionNode::Leaf(f) if f.api == "p_2"));
    }

    #[test]
    fn every_form_has_exactly_one_path_matching_its_types() {
        let group = group_of(
            "void p(Home, IntVar, IntVar);\nvoid p(Home, IntVar, BoolVar);\nvoid p(Home, SetVar, IntVar);\n",
        );
        let tree = build_dtree(&group).unwrap();
        let all_paths = paths(&tree);
        assert_eq!(all_paths.len(), group.forms.len());
        for form in &group.forms {
            let types: Vec<String> = form.base_types().map(str::to_string).collect();
            let matching: Vec<_> = all_paths
                .iter()
                .filter(|(path, _)| *path == types)
                .collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].1, form.api);
        }
    }

    #[test]
    fn branch_index_equals_depth_and_leaves_sit_at_arity() {
        fn check(node: &DecisionNode, depth: usize, arity: usize) {
            match node {
                DecisionNode::Leaf(form) => {
                    assert_eq!(depth, arity);
                    assert_eq!(form.arity(), arity);
                }
                DecisionNode::Branch { index, edges } => {
                    assert_eq!(*index, depth);
                    for (_, sub) in edges {
                        check(sub, depth + 1, arity);
                    }
                }
            }
        }
        // Defaults split this source into an arity-2 and an arity-3 group.
        let sigs =
            parse_decls("void p(Home, IntVar, int=0);\nvoid p(Home, BoolVar, int=0);\n").unwrap();
        let groups = crate::cluster(crate::expand(&sigs, &Profile::default()));
        assert_eq!(groups.len(), 2);
        for g in &groups {
            let tree = build_dtree(g).unwrap();
            check(&tree, 0, g.arity);
        }
    }

    #[test]
    fn duplicate_type_sequences_are_rejected() {
        let group = group_of("void p(IntVar, BoolVar);\nvoid p(IntVar, BoolVar);\n");
        let err = build_dtree(&group).unwrap_err();
        assert_eq!(
            err,
            ExpandError::DuplicateForm {
                group: "p".to_string(),
                arity: 2,
                api: "p_2".to_string(),
            }
        );
    }
}

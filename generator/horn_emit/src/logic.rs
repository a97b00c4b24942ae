//! Logic-clause surface: one dispatch clause per group.

use horn_ir::{DecisionNode, Group, Profile};

use crate::PrintNode;

/// Build the dispatch clause for one group.
///
/// The head is `name(X0,...,Xn-1)` over the user-side variables; the body
/// walks the discrimination tree, testing `is_<type>(Xi,Yi)` for each edge
/// in order (binding the library-side `Yi` from the user-side `Xi`) and
/// falling through to the argument-type error when no edge matches. The
/// handle type is tested with the profile's broadened predicate.
pub fn dispatch_clause(group: &Group, tree: &DecisionNode, profile: &Profile) -> PrintNode {
    let user: Vec<String> = (0..group.arity).map(|i| format!("X{i}")).collect();
    let lib: Vec<String> = (0..group.arity).map(|i| format!("Y{i}")).collect();
    let head = format!("{}({})", group.name, user.join(","));
    let body = body_node(tree, group, profile, &user, &lib);
    PrintNode::Clause {
        head,
        body: Box::new(body),
    }
}

fn body_node(
    node: &DecisionNode,
    group: &Group,
    profile: &Profile,
    user: &[String],
    lib: &[String],
) -> PrintNode {
    match node {
        DecisionNode::Leaf(form) => PrintNode::literal(format!(
            "{}{}({})",
            profile.symbol_prefix,
            form.api,
            lib.join(",")
        )),
        DecisionNode::Branch { index, edges } => {
            edge_node(group, profile, user, lib, *index, edges, 0)
        }
    }
}

fn edge_node(
    group: &Group,
    profile: &Profile,
    user: &[String],
    lib: &[String],
    index: usize,
    edges: &[(String, DecisionNode)],
    k: usize,
) -> PrintNode {
    if k == edges.len() {
        // No edge matched: a runtime argument-type error naming the group,
        // the full user argument list, and the failing 1-based position.
        return PrintNode::literal(format!(
            "throw({}({}({}),arg={}))",
            profile.error_functor,
            group.name,
            user.join(","),
            index + 1
        ));
    }
    let (base, sub) = &edges[k];
    let cond = PrintNode::literal(format!(
        "is_{}({},{})",
        profile.check_name(base),
        user[index],
        lib[index]
    ));
    PrintNode::If {
        cond: Box::new(cond),
        then_branch: Box::new(body_node(sub, group, profile, user, lib)),
        else_branch: Box::new(edge_node(group, profile, user, lib, index, edges, k + 1)),
    }
}

//! Dispatch groups and discrimination trees.

use crate::CallForm;

/// The call-forms sharing one (name, arity) key, dispatched together.
///
/// Built once by clustering and read-only afterwards. Within a group the
/// call-forms keep the relative order the expander produced them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub arity: usize,
    pub forms: Vec<CallForm>,
}

/// One node of a per-group runtime type-dispatch tree.
///
/// A `Branch` tests the base type of the argument at `index`; its edges are
/// tried in order, and a tuple matching no edge is a runtime argument-type
/// error (the fallback is implicit). `index` equals the node's depth and is
/// strictly increasing along any root-to-leaf path; a `Leaf` sits at depth
/// equal to its group's arity and names exactly one call-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionNode {
    Leaf(CallForm),
    Branch {
        index: usize,
        /// `(declared base type, subtree)` in first-seen partition order.
        edges: Vec<(String, DecisionNode)>,
    },
}

impl DecisionNode {
    /// All call-forms reachable from this node, in edge order.
    pub fn leaves(&self) -> Vec<&CallForm> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a CallForm>) {
        match self {
            DecisionNode::Leaf(form) => out.push(form),
            DecisionNode::Branch { edges, .. } => {
                for (_, sub) in edges {
                    sub.collect_leaves(out);
                }
            }
        }
    }
}

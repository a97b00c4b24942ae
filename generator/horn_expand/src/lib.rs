//! The middle end of the horn pipeline.
//!
//! Transforms parsed signatures into dispatchable groups:
//!
//! 1. **Expansion** (`expand`): apply the profile's renames, drop
//!    unsupported signatures, strip qualifiers, flatten trailing default
//!    arguments into fixed-arity call-forms, and number them.
//! 2. **Clustering** (`cluster`): group call-forms by (name, arity).
//! 3. **Tree construction** (`dtree`): build one discrimination tree per
//!    group, branching on argument base types position by position.
//!
//! Everything here is a pure transform over `horn_ir` values; no I/O.

mod cluster;
mod dtree;
mod error;
mod expand;

pub use cluster::cluster;
pub use dtree::build_dtree;
pub use error::ExpandError;
pub use expand::expand;

use horn_ir::{DecisionNode, Group, Profile, Signature};

/// One dispatch group together with its discrimination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDispatch {
    pub group: Group,
    pub tree: DecisionNode,
}

/// Run the whole middle end: expansion, clustering, tree construction.
///
/// Group order is the first-seen order of (name, arity) keys over the
/// expanded call-forms, which makes the output deterministic for a given
/// catalogue.
pub fn lower(signatures: &[Signature], profile: &Profile) -> Result<Vec<GroupDispatch>, ExpandError> {
    let forms = expand(signatures, profile);
    cluster(forms)
        .into_iter()
        .map(|group| {
            let tree = build_dtree(&group)?;
            Ok(GroupDispatch { group, tree })
        })
        .collect()
}

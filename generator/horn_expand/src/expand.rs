//! Default-argument expansion.

use horn_ir::{CallForm, Profile, Signature};
use tracing::debug;

/// Expand signatures into the final set of concrete, default-free
/// call-forms.
///
/// Three passes:
///
/// 1. Normalization: apply the profile's base-type renames; drop any
///    signature requiring a drop-listed type without a default (a silent
///    filtering outcome, not an error); remove drop-listed-but-defaulted
///    arguments entirely; strip qualifiers from what survives.
/// 2. Flattening: while any working signature still has a defaulted
///    argument, replace it by the variant without that argument (and
///    everything after it — the source API keeps defaults contiguous and
///    trailing, so truncation is safe) and the variant with the argument
///    made mandatory. A signature with k trailing defaults yields exactly
///    k+1 call-forms, of arities n-k..=n.
/// 3. Numbering: assign `"<name>_<n>"` identifiers from a counter local to
///    this invocation, starting at 1, in production order.
pub fn expand(signatures: &[Signature], profile: &Profile) -> Vec<CallForm> {
    let mut work: Vec<Signature> = signatures
        .iter()
        .filter_map(|sig| normalize(sig, profile))
        .collect();

    let mut again = true;
    while again {
        again = false;
        let mut next = Vec::with_capacity(work.len());
        for sig in work {
            match first_defaulted(&sig) {
                None => next.push(sig),
                Some(i) => {
                    again = true;
                    // Without the defaulted argument, and therefore without
                    // the arguments that follow it.
                    let mut shorter = sig.clone();
                    shorter.args.truncate(i);
                    next.push(shorter);
                    // With the argument, no longer defaulted.
                    let mut longer = sig;
                    longer.args[i].default = None;
                    next.push(longer);
                }
            }
        }
        work = next;
    }

    let mut forms = Vec::with_capacity(work.len());
    for (n, sig) in work.into_iter().enumerate() {
        let api = format!("{}_{}", sig.name, n + 1);
        forms.push(CallForm {
            ret: sig.ret,
            name: sig.name,
            args: sig.args,
            api,
        });
    }
    forms
}

fn normalize(sig: &Signature, profile: &Profile) -> Option<Signature> {
    let mut sig = sig.clone();
    for arg in &mut sig.args {
        if let Some(renamed) = profile.rename_of(&arg.base) {
            arg.base = renamed.to_string();
        }
    }
    let unusable = sig
        .args
        .iter()
        .any(|a| profile.is_dropped(&a.base) && a.default.is_none());
    if unusable {
        debug!(name = %sig.name, "dropping signature requiring an unsupported type");
        return None;
    }
    // A drop-listed type with a default is treated as always omitted.
    sig.args.retain(|a| !profile.is_dropped(&a.base));
    for arg in &mut sig.args {
        arg.strip_qualifiers();
    }
    Some(sig)
}

fn first_defaulted(sig: &Signature) -> Option<usize> {
    sig.args.iter().position(|a| a.default.is_some())
}

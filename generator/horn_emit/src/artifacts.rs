//! Whole-artifact assembly.
//!
//! Four output files make up one generation run: the logic-surface dispatch
//! file, the host-surface wrapper implementations, the host-surface
//! registrations, and the forward declarations for the enum conversion
//! functions. Each function here writes one of them, in full, to a
//! column-tracking writer.

use std::io::{self, Write};

use horn_ir::{DecisionNode, EnumDescriptor, Group, Profile};

use crate::{enums, host, logic, ColumnWriter};

/// One group paired with its discrimination tree, borrowed from the caller.
pub type Dispatch<'a> = (&'a Group, &'a DecisionNode);

fn preamble<W: Write>(
    out: &mut ColumnWriter<W>,
    leader: &str,
    notice: Option<&str>,
) -> io::Result<()> {
    out.writeln(&format!("{leader} generated by horn; do not edit."))?;
    if let Some(text) = notice {
        out.write(text)?;
        if out.column() > 0 {
            out.newline()?;
        }
    }
    out.newline()
}

/// The logic-clause artifact: enum predicates, then one dispatch clause per
/// group.
pub fn write_logic<W: Write>(
    out: &mut ColumnWriter<W>,
    dispatches: &[Dispatch<'_>],
    enum_descs: &[EnumDescriptor],
    profile: &Profile,
    notice: Option<&str>,
) -> io::Result<()> {
    preamble(out, "%%", notice)?;
    for desc in enum_descs {
        enums::render_clauses(desc, out)?;
    }
    for &(group, tree) in dispatches {
        logic::dispatch_clause(group, tree, profile).render(out, 0)?;
    }
    Ok(())
}

/// The host implementation artifact: enum atoms and conversion functions,
/// then one wrapper per leaf call-form.
pub fn write_impl<W: Write>(
    out: &mut ColumnWriter<W>,
    dispatches: &[Dispatch<'_>],
    enum_descs: &[EnumDescriptor],
    profile: &Profile,
    notice: Option<&str>,
) -> io::Result<()> {
    preamble(out, "//", notice)?;
    for desc in enum_descs {
        enums::render_atoms(desc, profile, out)?;
    }
    for desc in enum_descs {
        enums::render_from_term(desc, profile, out)?;
    }
    for &(group, tree) in dispatches {
        for spec in host::wrapper_specs(group, tree) {
            host::render_impl(&spec, profile, out)?;
        }
    }
    Ok(())
}

/// The host initialization artifact: enum atom registration, then one
/// predicate registration per wrapper.
pub fn write_init<W: Write>(
    out: &mut ColumnWriter<W>,
    dispatches: &[Dispatch<'_>],
    enum_descs: &[EnumDescriptor],
    profile: &Profile,
    notice: Option<&str>,
) -> io::Result<()> {
    preamble(out, "//", notice)?;
    for desc in enum_descs {
        enums::render_init(desc, profile, out)?;
    }
    for &(group, tree) in dispatches {
        for spec in host::wrapper_specs(group, tree) {
            host::render_init(&spec, profile, out)?;
        }
    }
    Ok(())
}

/// The forward-declaration artifact for the enum conversion functions.
pub fn write_forward<W: Write>(
    out: &mut ColumnWriter<W>,
    enum_descs: &[EnumDescriptor],
    profile: &Profile,
    notice: Option<&str>,
) -> io::Result<()> {
    preamble(out, "//", notice)?;
    for desc in enum_descs {
        enums::render_from_term_forward(desc, profile, out)?;
    }
    Ok(())
}

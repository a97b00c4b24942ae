//! Enum rendering strategies.
//!
//! One enum descriptor feeds four independent render modes, selected
//! explicitly by the caller: atom definitions, the from-term conversion
//! function, runtime initialization, and the logic-surface membership
//! predicates. A forward-declaration mode completes the host side.

use std::io::{self, Write};

use horn_ir::{EnumDescriptor, Profile};

use crate::ColumnWriter;

/// One static host term per symbol.
pub fn render_atoms<W: Write>(
    desc: &EnumDescriptor,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    for symbol in &desc.symbols {
        out.writeln(&format!("static HostTerm {p}{symbol};"))?;
    }
    out.newline()
}

/// The conversion function mapping each symbol's term back to its host
/// value.
pub fn render_from_term<W: Write>(
    desc: &EnumDescriptor,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    let ty = &desc.name;
    out.writeln(&format!("static {ty} {p}{ty}_from_term(HostTerm x)"))?;
    out.writeln("{")?;
    for symbol in &desc.symbols {
        out.writeln(&format!("  if (x == {p}{symbol}) return {symbol};"))?;
    }
    out.writeln(&format!("  host_fatal(\"unexpected {ty} value\");"))?;
    out.writeln("}")?;
    out.newline()
}

/// Forward declaration of the conversion function.
pub fn render_from_term_forward<W: Write>(
    desc: &EnumDescriptor,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    let ty = &desc.name;
    out.writeln(&format!("static {ty} {p}{ty}_from_term(HostTerm);"))
}

/// One initialization statement per symbol, registering its atom with the
/// host runtime and holding it for the process lifetime.
pub fn render_init<W: Write>(
    desc: &EnumDescriptor,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    for symbol in &desc.symbols {
        out.writeln(&format!("{{ HostAtom a = host_lookup_atom(\"{symbol}\");"))?;
        out.writeln(&format!("  {p}{symbol} = host_atom_term(a);"))?;
        out.writeln("  host_hold_atom(a); }")?;
    }
    out.newline()
}

/// Logic-surface predicates: per-symbol is-a and unify facts, plus the
/// generic membership and binding rules for the type.
pub fn render_clauses<W: Write>(
    desc: &EnumDescriptor,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let ty = &desc.name;
    for symbol in &desc.symbols {
        out.writeln(&format!("is_{ty}_('{symbol}')."))?;
    }
    out.newline()?;
    for symbol in &desc.symbols {
        out.writeln(&format!("is_{ty}_('{symbol}','{symbol}')."))?;
    }
    out.newline()?;
    out.writeln(&format!("is_{ty}(X,Y) :- nonvar(X), is_{ty}_(X,Y)."))?;
    out.writeln(&format!("is_{ty}(X) :- is_{ty}(X,_)."))?;
    out.newline()
}

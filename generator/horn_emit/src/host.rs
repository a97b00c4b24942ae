//! Host-language surface: one wrapper function per leaf call-form.

use std::io::{self, Write};

use horn_ir::{DecisionNode, Group, Profile};

use crate::ColumnWriter;

/// What the host surface needs to know about one leaf call-form: the
/// library function to call, the argument base types along the tree path,
/// and the generated API identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperSpec {
    pub name: String,
    pub argtypes: Vec<String>,
    pub api: String,
}

/// Collect wrapper specs for every leaf of a group's tree, in edge order.
pub fn wrapper_specs(group: &Group, tree: &DecisionNode) -> Vec<WrapperSpec> {
    tree.leaves()
        .into_iter()
        .map(|form| WrapperSpec {
            name: group.name.clone(),
            argtypes: form.base_types().map(str::to_string).collect(),
            api: form.api.clone(),
        })
        .collect()
}

/// Render the wrapper implementation for one leaf call-form.
///
/// Arguments are unpacked positionally from the host argument slots. The
/// handle type binds a pointer that is dereferenced at the call; types the
/// profile marks handle-bound take that pointer as an extra construction
/// parameter.
pub fn render_impl<W: Write>(
    spec: &WrapperSpec,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    out.writeln(&format!("static int {}{}(void)", p, spec.api))?;
    out.writeln("{")?;
    let mut args = Vec::with_capacity(spec.argtypes.len());
    for (i, base) in spec.argtypes.iter().enumerate() {
        let slot = format!("HOST_ARG{}", i + 1);
        if base == &profile.handle_type {
            out.writeln(&format!(
                "  {base}* space = {p}{base}_from_term({slot});"
            ))?;
            args.push("*space".to_string());
        } else {
            let extra = if profile.is_handle_bound(base) {
                "space,"
            } else {
                ""
            };
            let var = format!("X{}", i + 1);
            out.writeln(&format!(
                "  {base} {var} = {p}{base}_from_term({extra}{slot});"
            ))?;
            args.push(var);
        }
    }
    out.writeln(&format!("  {}({});", spec.name, args.join(",")))?;
    out.writeln("  return TRUE;")?;
    out.writeln("}")?;
    out.newline()
}

/// Render the registration of one wrapper with the host runtime, under its
/// API identifier and fixed arity.
pub fn render_init<W: Write>(
    spec: &WrapperSpec,
    profile: &Profile,
    out: &mut ColumnWriter<W>,
) -> io::Result<()> {
    let p = &profile.symbol_prefix;
    out.writeln(&format!(
        "host_register(\"{}{}\", {}{}, {});",
        p,
        spec.api,
        p,
        spec.api,
        spec.argtypes.len()
    ))
}

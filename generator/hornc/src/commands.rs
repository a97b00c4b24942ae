//! CLI subcommand implementations.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use horn_emit::artifacts::{self, Dispatch};
use horn_emit::ColumnWriter;
use horn_expand::{expand, lower, GroupDispatch};
use horn_ir::{Profile, Signature};
use horn_parse::parse_decls;
use tracing::info;

use crate::registry::load_registry;
use crate::CliError;

/// Options for `horn gen`.
#[derive(Debug, Default)]
pub struct GenOptions {
    /// Declaration catalogue to read.
    pub decls: PathBuf,
    /// Optional enum registry JSON.
    pub enums: Option<PathBuf>,
    /// Directory the four artifacts are written into.
    pub out: PathBuf,
    /// Optional notice file prepended to every artifact.
    pub notice: Option<PathBuf>,
}

fn load_signatures(path: &Path) -> Result<Vec<Signature>, CliError> {
    let source = fs::read_to_string(path)?;
    Ok(parse_decls(&source)?)
}

/// `horn gen`: run the whole pipeline and write the artifacts.
pub fn run_gen(opts: &GenOptions) -> Result<(), CliError> {
    let profile = Profile::default();
    let signatures = load_signatures(&opts.decls)?;
    let dispatches = lower(&signatures, &profile)?;
    let enum_descs = match &opts.enums {
        Some(path) => load_registry(path, &profile)?,
        None => Vec::new(),
    };
    let notice = match &opts.notice {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };
    let notice = notice.as_deref();

    fs::create_dir_all(&opts.out)?;
    let borrowed: Vec<Dispatch<'_>> = dispatches.iter().map(|gd| (&gd.group, &gd.tree)).collect();

    write_artifact(&opts.out.join("dispatch.pl"), |out| {
        artifacts::write_logic(out, &borrowed, &enum_descs, &profile, notice)
    })?;
    write_artifact(&opts.out.join("wrappers_impl.cc"), |out| {
        artifacts::write_impl(out, &borrowed, &enum_descs, &profile, notice)
    })?;
    write_artifact(&opts.out.join("wrappers_init.cc"), |out| {
        artifacts::write_init(out, &borrowed, &enum_descs, &profile, notice)
    })?;
    write_artifact(&opts.out.join("forward_decls.cc"), |out| {
        artifacts::write_forward(out, &enum_descs, &profile, notice)
    })?;

    info!(
        groups = dispatches.len(),
        enums = enum_descs.len(),
        out = %opts.out.display(),
        "generation complete"
    );
    Ok(())
}

fn write_artifact<F>(path: &Path, write: F) -> Result<(), CliError>
where
    F: FnOnce(&mut ColumnWriter<BufWriter<File>>) -> std::io::Result<()>,
{
    let file = File::create(path)?;
    let mut out = ColumnWriter::new(BufWriter::new(file));
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

/// `horn preds`: print the expanded call-forms, one per line.
pub fn run_preds(path: &Path) -> Result<(), CliError> {
    let signatures = load_signatures(path)?;
    for form in expand(&signatures, &Profile::default()) {
        println!("{form}");
    }
    Ok(())
}

/// `horn check`: parse and lower without writing anything.
pub fn run_check(path: &Path) -> Result<(), CliError> {
    let signatures = load_signatures(path)?;
    let dispatches: Vec<GroupDispatch> = lower(&signatures, &Profile::default())?;
    println!(
        "ok: {} declarations, {} dispatch groups",
        signatures.len(),
        dispatches.len()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn gen_writes_all_four_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let decls = dir.path().join("catalogue.hh");
        let mut file = File::create(&decls).unwrap();
        writeln!(file, "void foo(IntVar, BoolVar=0);").unwrap();
        drop(file);

        let out = dir.path().join("generated");
        let opts = GenOptions {
            decls,
            enums: None,
            out: out.clone(),
            notice: None,
        };
        run_gen(&opts).unwrap();

        let dispatch = fs::read_to_string(out.join("dispatch.pl")).unwrap();
        assert!(dispatch.contains("foo(X0,X1) :-"));
        assert!(dispatch.contains("glue_foo_2(Y0,Y1)"));

        let impls = fs::read_to_string(out.join("wrappers_impl.cc")).unwrap();
        assert!(impls.contains("static int glue_foo_1(void)"));

        let init = fs::read_to_string(out.join("wrappers_init.cc")).unwrap();
        assert!(init.contains("host_register(\"glue_foo_2\", glue_foo_2, 2);"));

        let forward = fs::read_to_string(out.join("forward_decls.cc")).unwrap();
        assert_eq!(forward, "// generated by horn; do not edit.\n\n");
    }

    #[test]
    fn gen_is_deterministic_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let decls = dir.path().join("catalogue.hh");
        fs::write(&decls, "void p(IntVar);\nvoid p(SetVar);\n").unwrap();

        let mut texts = Vec::new();
        for name in ["a", "b"] {
            let out = dir.path().join(name);
            run_gen(&GenOptions {
                decls: decls.clone(),
                enums: None,
                out: out.clone(),
                notice: None,
            })
            .unwrap();
            texts.push(fs::read_to_string(out.join("dispatch.pl")).unwrap());
        }
        assert_eq!(texts[0], texts[1]);
    }

    #[test]
    fn check_rejects_malformed_catalogues() {
        let dir = tempfile::tempdir().unwrap();
        let decls = dir.path().join("catalogue.hh");
        fs::write(&decls, "void ok(IntVar);\nnot a declaration\n").unwrap();
        let err = run_check(&decls).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }
}

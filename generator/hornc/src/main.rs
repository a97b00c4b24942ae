//! horn CLI
//!
//! Offline binding generator: reads a catalogue of native-library
//! signatures and emits logic-language dispatch clauses plus host-language
//! glue.

use std::path::PathBuf;
use std::process::ExitCode;

use hornc::commands::{run_check, run_gen, run_preds, GenOptions};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: horn gen <catalogue> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --out <dir>       Output directory (default: generated)");
                eprintln!("  --enums <file>    Enum registry JSON");
                eprintln!("  --notice <file>   Notice text prepended to every artifact");
                return ExitCode::FAILURE;
            }
            let mut opts = GenOptions {
                decls: PathBuf::from(&args[2]),
                out: PathBuf::from("generated"),
                ..GenOptions::default()
            };
            // Flags with values need lookahead.
            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "--out" if i + 1 < args.len() => {
                        opts.out = PathBuf::from(&args[i + 1]);
                        i += 2;
                    }
                    "--enums" if i + 1 < args.len() => {
                        opts.enums = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    "--notice" if i + 1 < args.len() => {
                        opts.notice = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    }
                    other => {
                        eprintln!("error: unknown option `{other}`");
                        return ExitCode::FAILURE;
                    }
                }
            }
            run_gen(&opts)
        }
        "preds" => {
            if args.len() != 3 {
                eprintln!("Usage: horn preds <catalogue>");
                return ExitCode::FAILURE;
            }
            run_preds(&PathBuf::from(&args[2]))
        }
        "check" => {
            if args.len() != 3 {
                eprintln!("Usage: horn check <catalogue>");
                return ExitCode::FAILURE;
            }
            run_check(&PathBuf::from(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("horn - offline binding generator");
    eprintln!();
    eprintln!("Usage: horn <command> [arguments]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  gen <catalogue> [options]   Generate all artifacts");
    eprintln!("  preds <catalogue>           Print the expanded call-forms");
    eprintln!("  check <catalogue>           Parse and build without writing");
    eprintln!("  help                        Show this message");
}

//! Theorem statement conversion CLI
//!
//! Loads a theorem file, converts its statement commands, and writes the
//! produced theorem statements as JSON to stdout. Failed statements are
//! reported on stderr and skipped; only load errors change the exit code.

use clap::Parser;
use geothm_core::convert::Converter;
use geothm_core::loader::theorem_json::load_theorem;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "geothm-convert")]
#[command(about = "Convert construction statement commands into theorem statements")]
struct Args {
    /// Input theorem file (JSON)
    theorem: PathBuf,

    /// Pretty-print the statement JSON
    #[arg(long)]
    pretty: bool,

    /// Print the construction steps before converting
    #[arg(long)]
    steps: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let theorem = match load_theorem(&args.theorem) {
        Ok(theorem) => theorem,
        Err(err) => {
            error!("failed to load {}: {}", args.theorem.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(name) = theorem.protocol.theorem_name() {
        eprintln!("theorem: {}", name);
    }
    if args.steps {
        for step in theorem.protocol.steps() {
            eprintln!("  {}", step);
        }
    }

    let converter = Converter::new(&theorem.protocol, &theorem.auxiliaries);
    let statements = converter.convert_batch(&theorem.commands);
    eprintln!(
        "converted {} of {} statements",
        statements.len(),
        theorem.commands.len()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&statements)
    } else {
        serde_json::to_string(&statements)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize statements: {}", err);
            ExitCode::FAILURE
        }
    }
}

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_stdin::FileOrStdin;

/// Compiles a tiny line-oriented BASIC dialect to JavaScript.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Source file, or `-` to read from stdin
    input: FileOrStdin,

    /// Write the generated JavaScript here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let source = cli.input.contents()?;

    let compiled = tbjs::compile(&source)?;
    for warning in &compiled.warnings {
        eprintln!("warning: {}", warning);
    }

    match cli.output {
        Some(path) => fs::write(&path, &compiled.code)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", compiled.code),
    }

    Ok(())
}

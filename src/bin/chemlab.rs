//! ChemLab - name molecular formulas from the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chemlab::*;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

const WELCOME: &str =
    "Welcome to ChemLab! Enter a molecular formula (e.g., C3H8) to get the IUPAC name.";

/// Translate molecular formulas into IUPAC names.
#[derive(Parser, Debug)]
#[command(name = "chemlab")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Reject formulas containing lowercase letters instead of upper-casing them.
    #[arg(long)]
    strict_case: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Name each formula given on the command line.
    Name {
        #[arg(required = true)]
        formulas: Vec<String>,
    },
    /// Read formulas from stdin, one per line, until `quit` or end of input.
    Repl,
    /// Name every formula in a csv file.
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Zero-based column holding the formula.
        #[arg(short, long, default_value_t = 0)]
        column: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Name { formulas } => {
            for formula in formulas {
                println!("{}", respond(&formula, args.strict_case));
            }
        }
        Command::Repl => repl(args.strict_case)?,
        Command::Batch {
            input,
            output,
            column,
        } => {
            let summary = name_csv_file(&input, &output, column, args.strict_case)
                .with_context(|| format!("Failed to name formulas in {}", input.display()))?;
            info!(
                "Wrote {} names to {} ({} records skipped)",
                summary.named,
                output.display(),
                summary.skipped
            );
        }
    }
    Ok(())
}

/// The reply for one line of user input.
fn respond(text: &str, strict_case: bool) -> String {
    let normalized = if strict_case {
        normalize_strict(text)
    } else {
        normalize(text)
    };
    match normalized {
        Ok(formula) => {
            let iupac = name(&classify(&formula));
            debug!(%formula, %iupac, "named");
            reply_text(&iupac)
        }
        Err(e) => {
            warn!("Rejected input {:?}: {}", text, e);
            e.to_string()
        }
    }
}

fn repl(strict_case: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", WELCOME);

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if trimmed.is_empty() {
            warn!("Skipping blank line");
            continue;
        }
        writeln!(stdout, "{}", respond(trimmed, strict_case))?;
        stdout.flush()?;
    }

    info!("Goodbye");
    Ok(())
}

//! Tabson CLI - Markdown pipe-table to JSON converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::process;
#[cfg(feature = "cli")]
use tabson::{convert_file, ConvertError, ConvertResult};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "md2j")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Tabson - Markdown pipe-table to JSON converter", long_about = None)]
struct Cli {
    /// Input Markdown file containing a single pipe-table
    input: String,

    /// Output JSON file (created or truncated)
    output: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(_) => {
            // Wrong argument count: usage on stdout, exit 1, no file access.
            println!("Usage: md2j <input.md> <output.json>");
            process::exit(1);
        }
    };

    match convert_file(&cli.input, &cli.output) {
        Ok(()) => {
            println!(
                "Conversion successful. JSON data has been written to {}",
                cli.output
            );
        }
        Err(ConvertError::FormatError { .. }) => {
            println!("Error: Input is not a valid markdown table.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

/// Parse argv, serving clap's built-in help and version directly.
#[cfg(feature = "cli")]
fn parse_args() -> ConvertResult<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            _ => Err(ConvertError::usage(
                "expected exactly two arguments: an input file and an output file",
            )),
        },
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabson --features cli");
    eprintln!("  md2j <input.md> <output.json>");
}

//! Scanfmt CLI
//!
//! Applies a scanf-style format template to input text and prints the
//! extracted values as JSON, one array per input. Input comes from the
//! command line or, when omitted, from stdin (one input per line).

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use scanfmt::{CompiledPattern, scan_typed};
use tracing::debug;

/// CLI arguments
#[derive(Parser)]
#[command(name = "scanfmt")]
#[command(about = "Extract typed values from text with a scanf-style template")]
#[command(version)]
struct Cli {
    /// Format template, e.g. "foo {Int32} bar"
    template: String,

    /// Input text; when omitted, each non-empty stdin line is scanned
    input: Option<String>,

    /// Print the synthesized regex pattern and exit
    #[arg(long)]
    show_pattern: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.show_pattern {
        let compiled = CompiledPattern::compile_typed(&cli.template)?;
        println!("{}", compiled.pattern());
        return Ok(());
    }

    match cli.input {
        Some(input) => {
            let values = scan_typed(&input, &cli.template)?;
            println!("{}", serde_json::to_string(&values)?);
        }
        None => {
            debug!("no input argument, scanning stdin lines");
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                scan_line(line, &cli.template)?;
            }
        }
    }

    Ok(())
}

/// Scans one stdin line. Scan failures are reported as a JSON object on
/// the line's output slot rather than aborting the stream.
fn scan_line(input: &str, template: &str) -> Result<()> {
    match scan_typed(input, template) {
        Ok(values) => println!("{}", serde_json::to_string(&values)?),
        Err(err) => println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "input": input,
                "error": err.to_string(),
            }))?
        ),
    }
    Ok(())
}

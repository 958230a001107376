//! Translate transliterated text with a `#=BIT` rules table.
//!
//! Usage:
//!   cargo run -p bitrans -- --rules curr-eva.bit --input folio.txt
//!   cargo run -p bitrans -- --rules curr-eva.bit --direction reverse
//!   cargo run -p bitrans -- --rules curr-eva.bit --export-table compiled.bit

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libvoynich_core::{table_file, Config, Direction, Translator};

#[derive(clap::Parser, Debug)]
#[command(name = "bitrans")]
#[command(about = "Bidirectional transliteration driven by a #=BIT rules table")]
struct Args {
    /// Path to the rules table
    #[arg(short, long)]
    rules: PathBuf,

    /// Translation direction: forward (key -> value) or reverse
    #[arg(short, long, default_value = "forward")]
    direction: String,

    /// Input file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Placeholder character standing in for separators during matching
    #[arg(long, default_value_t = '#')]
    separator: char,

    /// Report characters that pass through untranslated
    #[arg(long)]
    strict: bool,

    /// Write the compiled table back out and exit
    #[arg(long)]
    export_table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    let direction: Direction = args.direction.parse()?;
    let pairs = table_file::load_rules(&args.rules)?;
    let config = Config {
        direction,
        separator_placeholder: args.separator,
        strict: args.strict,
        ..Config::default()
    };
    let translator = Translator::with_config(&pairs, &config);

    if let Some(path) = args.export_table {
        translator.save_table(&path)?;
        println!("Wrote compiled table to {}", path.display());
        return Ok(());
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            buffer
        }
    };

    let translated = translator.translate(&text);

    match &args.output {
        Some(path) => {
            let mut content = translated;
            content.push('\n');
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
        }
        None => println!("{translated}"),
    }

    Ok(())
}

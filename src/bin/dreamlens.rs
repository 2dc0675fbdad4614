//! dreamlens CLI - interpret dreams and analyze a dream journal
//!
//! Thin wrapper over the dream-insight library. All output is JSON on
//! stdout; logs go to stderr (set `RUST_LOG=dream_insight=debug` to see them).

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dream_insight::{
    CorpusAnalyzer, DreamInterpreter, DreamRecord, EngineConfig, Lexicon, SymbolDictionary,
};

/// Interpret dreams and find patterns across your dream journal.
#[derive(Parser, Debug)]
#[command(name = "dreamlens")]
#[command(version = dream_insight::VERSION)]
#[command(about = "Interpret dreams and find patterns across your dream journal")]
#[command(after_help = "EXAMPLES:
  # Interpret a dream with the starter symbol dictionary
  dreamlens interpret \"I was swimming in deep waters and felt peaceful\"

  # Use your own dictionary and read the dream from stdin
  cat dream.txt | dreamlens interpret --symbols my_symbols.json

  # Analyze a journal of stored interpretations
  dreamlens analyze journal.json --pretty
")]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Lexicon file with themes and tone words (JSON)
    #[arg(long = "lexicon", value_name = "FILE", global = true)]
    lexicon: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long = "pretty", global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a single dream
    Interpret {
        /// Dream text (reads stdin when omitted)
        text: Option<String>,

        /// Symbol dictionary file: JSON array of {"key", "meaning"}
        #[arg(short = 's', long = "symbols", value_name = "FILE")]
        symbols: Option<PathBuf>,
    },
    /// Analyze a journal: JSON array of {"date", "interpretation"}
    Analyze {
        /// Journal file
        journal: PathBuf,
    },
    /// List the symbol dictionary in ranking order
    Symbols {
        /// Symbol dictionary file (defaults to the starter dictionary)
        #[arg(short = 's', long = "symbols", value_name = "FILE")]
        symbols: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::from_file(path)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?,
        None => Lexicon::builtin(),
    };

    match &cli.command {
        Command::Interpret { text, symbols } => {
            let dictionary = load_dictionary(symbols.as_deref())?;
            let text = match text {
                Some(text) => text.clone(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read dream text from stdin")?;
                    buf
                }
            };

            let interpreter = DreamInterpreter::new(&lexicon, &config);
            let interpretation = interpreter.interpret(&text, &dictionary)?;
            print_json(&interpretation, cli.pretty)
        }
        Command::Analyze { journal } => {
            let content = std::fs::read_to_string(journal)
                .with_context(|| format!("failed to read journal {}", journal.display()))?;
            let records: Vec<DreamRecord> = serde_json::from_str(&content)
                .with_context(|| format!("invalid journal {}", journal.display()))?;

            let analyzer = CorpusAnalyzer::new(&lexicon, &config);
            print_json(&analyzer.analyze(&records), cli.pretty)
        }
        Command::Symbols { symbols } => {
            let dictionary = load_dictionary(symbols.as_deref())?;
            print_json(&dictionary, cli.pretty)
        }
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<SymbolDictionary> {
    match path {
        Some(path) => SymbolDictionary::from_file(path)
            .with_context(|| format!("failed to load symbols {}", path.display())),
        None => Ok(SymbolDictionary::starter()),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

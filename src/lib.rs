//! dream-insight - Dream interpretation and journal pattern analysis
//!
//! This library turns free-form dream descriptions into structured
//! interpretations and finds patterns across a journal of them. It is
//! designed to be consumed by:
//! - The CLI binary (src/bin/dreamlens.rs)
//! - A journaling web service that stores interpretations and dates
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** / **core/**: Pure logic, no I/O beyond explicit loaders
//! - **bin/dreamlens.rs**: Thin wrapper that calls the library
//!
//! The engine is deterministic and stateless. Lexicons
//! (`dream_lexicon::Lexicon`) and limits (`EngineConfig`) are passed in
//! explicitly; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use dream_insight::{build_interpretation, Symbol, SymbolDictionary};
//!
//! let dictionary = SymbolDictionary::new(vec![Symbol::new("water", "emotion")]);
//! let interp = build_interpretation("I was swimming in deep waters and felt peaceful", &dictionary)
//!     .unwrap();
//!
//! assert_eq!(interp.symbols[0].symbol, "Water");
//! assert!(interp.main_themes.contains(&"emotions".to_string()));
//! ```

pub mod core;

pub use crate::core::{
    analyze_corpus, build_interpretation, AggregatePatterns, CorpusAnalyzer, DreamError,
    DreamInterpreter, DreamRecord, EngineConfig, Interpretation, Result, SymbolMatch, Tone,
    TrendDirection, TrendPoint,
};
pub use dream_lexicon::{Lexicon, Symbol, SymbolDictionary};

/// Library version, kept in sync with Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the dream-insight library
pub fn version() -> &'static str {
    VERSION
}

//! dream-lexicon: the read-only vocabulary behind dream interpretation
//!
//! This crate supplies the data the interpretation engine consumes but never
//! modifies:
//!
//! - **Symbol dictionaries**: user-curated `key -> meaning` entries, kept in
//!   alphabetical key order
//! - **Theme maps**: fixed, ordered `theme -> keywords` tables
//! - **Tone lexicons**: positive and negative sentiment word lists
//!
//! Everything is a plain value. Built-in defaults come from constant tables;
//! custom vocabularies load from JSON.
//!
//! # Example
//!
//! ```rust
//! use dream_lexicon::{Lexicon, Symbol, SymbolDictionary};
//!
//! let lexicon = Lexicon::builtin();
//! let dictionary = SymbolDictionary::new(vec![Symbol::new("water", "emotion")]);
//!
//! assert_eq!(lexicon.default_theme, "introspection");
//! assert_eq!(dictionary.get("Water").unwrap().meaning, "emotion");
//! ```

pub mod builtin;
pub mod error;
pub mod lexicon;
pub mod symbol;

pub use error::{LexiconError, Result};
pub use lexicon::{Lexicon, ThemeEntry, ThemeMap, ToneLexicon};
pub use symbol::{Symbol, SymbolDictionary};

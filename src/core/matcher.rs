//! Whole-word matching and the Symbol Matcher
//!
//! Every lexical lookup in the engine goes through `WordPattern`: a key
//! matches only as a complete word, case-insensitively, optionally followed
//! by one of the simple inflection suffixes `s`, `es`, `ed` or `ing`.
//! `"water"` matches "Waters" but not "waterfall"; `"car"` never matches
//! inside "scary".
//!
//! Matching a whole dictionary against one text goes through a `WordIndex`
//! instead: the text is split into words once and single-word keys become
//! set lookups, so dictionary size does not multiply regex compilation.

use std::collections::HashSet;

use dream_lexicon::SymbolDictionary;
use lazy_static::lazy_static;
use regex::Regex;

use super::models::SymbolMatch;

/// Suffixes tolerated after a key.
pub const INFLECTION_SUFFIXES: &[&str] = &["s", "es", "ed", "ing"];

lazy_static! {
    /// Maximal runs of word characters, the units `\b` delimits.
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// True when `key` is a single run of word characters.
fn is_plain_word(key: &str) -> bool {
    WORD.find(key).map_or(false, |m| m.start() == 0 && m.end() == key.len())
}

fn starts_with_word(key: &str) -> bool {
    WORD.find(key).map_or(false, |m| m.start() == 0)
}

fn ends_with_word(key: &str) -> bool {
    WORD.find_iter(key).last().map_or(false, |m| m.end() == key.len())
}

/// A compiled whole-word pattern for one lexicon key
#[derive(Debug, Clone)]
pub struct WordPattern {
    key: String,
    regex: Regex,
}

impl WordPattern {
    /// Compile a pattern for `key`.
    ///
    /// Whitespace inside multi-word keys matches any run of whitespace.
    pub fn new(key: &str) -> Result<Self, regex::Error> {
        let key = key.trim().to_lowercase();
        let body = key
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        // Anchors and suffixes only make sense next to word characters
        let lead = if starts_with_word(&key) { r"\b" } else { "" };
        let tail = if ends_with_word(&key) {
            format!(r"(?:{})?\b", INFLECTION_SUFFIXES.join("|"))
        } else {
            String::new()
        };
        let pattern = format!(r"(?i){}{}{}", lead, body, tail);

        Ok(Self {
            regex: Regex::new(&pattern)?,
            key,
        })
    }

    /// Compile patterns for a list of words, skipping any that fail.
    pub fn compile_all<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<WordPattern> {
        words
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .filter_map(|w| match WordPattern::new(w) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(word = w, error = %e, "skipping lexicon word");
                    None
                }
            })
            .collect()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// Lower-cased words of one text
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: HashSet<String>,
}

impl WordIndex {
    pub fn new(text: &str) -> Self {
        Self {
            words: WORD
                .find_iter(text)
                .map(|m| m.as_str().to_lowercase())
                .collect(),
        }
    }

    /// True when the single-word, lower-case `key` occurs bare or inflected.
    pub fn contains(&self, key: &str) -> bool {
        self.words.contains(key)
            || INFLECTION_SUFFIXES
                .iter()
                .any(|suffix| self.words.contains(&format!("{}{}", key, suffix)))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Finds dictionary symbols mentioned in a text
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    max_symbols: usize,
}

impl Default for SymbolMatcher {
    fn default() -> Self {
        Self::new(super::models::MAX_SYMBOLS)
    }
}

impl SymbolMatcher {
    pub fn new(max_symbols: usize) -> Self {
        Self { max_symbols }
    }

    /// Symbols whose key occurs in `text`, in dictionary order, capped.
    pub fn find(&self, text: &str, dictionary: &SymbolDictionary) -> Vec<SymbolMatch> {
        let index = WordIndex::new(text);
        let mut matches = Vec::new();
        for symbol in dictionary {
            if matches.len() >= self.max_symbols {
                break;
            }
            let found = if is_plain_word(&symbol.key) {
                index.contains(&symbol.key)
            } else {
                match WordPattern::new(&symbol.key) {
                    Ok(pattern) => pattern.is_match(text),
                    Err(e) => {
                        tracing::warn!(key = %symbol.key, error = %e, "skipping dictionary symbol");
                        continue;
                    }
                }
            };
            if found {
                matches.push(SymbolMatch {
                    symbol: symbol.display_name(),
                    meaning: symbol.meaning.clone(),
                });
            }
        }
        matches
    }
}

//! Symbol dictionary
//!
//! A user-curated mapping from lowercase dream symbols to their meanings.
//! The dictionary owns its ordering: entries are kept sorted by key, and
//! that order is the ranking every consumer of the dictionary relies on.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Lowercase token the symbol is matched by
    pub key: String,
    /// Interpretation attached to the symbol
    pub meaning: String,
}

impl Symbol {
    pub fn new(key: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meaning: meaning.into(),
        }
    }

    /// Key with its first character upper-cased (`water` -> `Water`).
    pub fn display_name(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered, de-duplicated collection of symbols.
///
/// Keys are trimmed and lower-cased on construction, blank keys are dropped,
/// and the first entry wins when a key repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolDictionary {
    entries: Vec<Symbol>,
}

impl SymbolDictionary {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut by_key: BTreeMap<String, String> = BTreeMap::new();
        for symbol in symbols {
            let key = symbol.key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            by_key.entry(key).or_insert(symbol.meaning);
        }

        Self {
            entries: by_key
                .into_iter()
                .map(|(key, meaning)| Symbol { key, meaning })
                .collect(),
        }
    }

    /// Parse a JSON array of `{ "key", "meaning" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let symbols: Vec<Symbol> = serde_json::from_str(json)?;
        Ok(Self::new(symbols))
    }

    /// Load a dictionary from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The small general-purpose dictionary shipped with the engine.
    pub fn starter() -> Self {
        Self::new(
            crate::builtin::STARTER_SYMBOLS
                .iter()
                .map(|(key, meaning)| Symbol::new(*key, *meaning)),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a symbol by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&Symbol> {
        let key = key.trim().to_lowercase();
        self.entries
            .binary_search_by(|s| s.key.as_str().cmp(key.as_str()))
            .ok()
            .map(|idx| &self.entries[idx])
    }
}

impl From<Vec<Symbol>> for SymbolDictionary {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl From<SymbolDictionary> for Vec<Symbol> {
    fn from(dictionary: SymbolDictionary) -> Self {
        dictionary.entries
    }
}

impl FromIterator<Symbol> for SymbolDictionary {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SymbolDictionary {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_entries_sorted_by_key() {
        let dict = SymbolDictionary::new(vec![
            Symbol::new("snake", "hidden fears"),
            Symbol::new("house", "the self"),
            Symbol::new("water", "emotion"),
        ]);
        let keys: Vec<&str> = dict.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["house", "snake", "water"]);
    }

    #[test]
    fn test_keys_normalized_and_deduplicated() {
        let dict = SymbolDictionary::new(vec![
            Symbol::new("  Water ", "emotion"),
            Symbol::new("water", "something else"),
            Symbol::new("   ", "blank"),
        ]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("WATER").map(|s| s.meaning.as_str()), Some("emotion"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Symbol::new("water", "emotion").display_name(), "Water");
        assert_eq!(Symbol::new("", "nothing").display_name(), "");
    }

    #[test]
    fn test_from_json_str() {
        let dict = SymbolDictionary::from_json_str(
            r#"[{"key": "moon", "meaning": "intuition"}, {"key": "fire", "meaning": "passion"}]"#,
        )
        .unwrap();
        assert_eq!(dict.as_slice()[0].key, "fire");
        assert!(dict.get("moon").is_some());
    }

    #[test]
    fn test_serde_goes_through_normalization() {
        let dict: SymbolDictionary =
            serde_json::from_str(r#"[{"key": "Snake", "meaning": "change"}]"#).unwrap();
        assert_eq!(dict.as_slice()[0].key, "snake");

        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"[{"key":"snake","meaning":"change"}]"#);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"key": "door", "meaning": "opportunity"}}]"#).unwrap();
        let dict = SymbolDictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_starter_dictionary_is_sorted() {
        let dict = SymbolDictionary::starter();
        assert!(!dict.is_empty());
        assert!(dict.as_slice().windows(2).all(|w| w[0].key < w[1].key));
        assert!(dict.get("water").is_some());
    }
}

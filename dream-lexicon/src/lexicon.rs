//! Theme map, tone word lists and the `Lexicon` bundle
//!
//! A `Lexicon` is engine configuration rather than user data: it is built
//! once, passed by reference into the engine, and never mutated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::{LexiconError, Result};

/// One theme label and the keywords that indicate it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Ordered mapping from theme label to keywords.
///
/// Iteration order is the order entries were supplied in; labels and
/// keywords are lower-cased and de-duplicated while preserving that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ThemeEntry>", into = "Vec<ThemeEntry>")]
pub struct ThemeMap {
    entries: Vec<ThemeEntry>,
}

impl ThemeMap {
    pub fn new(entries: impl IntoIterator<Item = ThemeEntry>) -> Self {
        let mut merged: Vec<ThemeEntry> = Vec::new();
        for entry in entries {
            let label = entry.label.trim().to_lowercase();
            if label.is_empty() {
                continue;
            }
            let idx = match merged.iter().position(|e| e.label == label) {
                Some(idx) => idx,
                None => {
                    merged.push(ThemeEntry { label, keywords: Vec::new() });
                    merged.len() - 1
                }
            };
            for keyword in entry.keywords {
                let keyword = keyword.trim().to_lowercase();
                if !keyword.is_empty() && !merged[idx].keywords.contains(&keyword) {
                    merged[idx].keywords.push(keyword);
                }
            }
        }
        Self { entries: merged }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThemeEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn keywords(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ThemeEntry>> for ThemeMap {
    fn from(entries: Vec<ThemeEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<ThemeMap> for Vec<ThemeEntry> {
    fn from(map: ThemeMap) -> Self {
        map.entries
    }
}

/// Positive and negative sentiment word lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneLexicon {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Everything the engine needs besides the user's symbol dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub themes: ThemeMap,
    #[serde(default = "default_theme")]
    pub default_theme: String,
    #[serde(default)]
    pub tone: ToneLexicon,
}

fn default_theme() -> String {
    builtin::DEFAULT_THEME.to_string()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The lexicon shipped with the engine.
    pub fn builtin() -> Self {
        let themes = ThemeMap::new(builtin::THEMES.iter().map(|(label, keywords)| ThemeEntry {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }));

        Self {
            themes,
            default_theme: default_theme(),
            tone: ToneLexicon {
                positive: builtin::POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
                negative: builtin::NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.themes.is_empty() {
            return Err(LexiconError::EmptyThemeMap);
        }
        if self.default_theme.trim().is_empty() {
            return Err(LexiconError::EmptyDefaultTheme);
        }
        Ok(())
    }
}

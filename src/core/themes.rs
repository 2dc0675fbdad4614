//! Theme Classifier
//!
//! Maps keyword hits to theme labels. Keyword patterns are compiled once
//! when the classifier is built; classification itself is read-only.

use dream_lexicon::Lexicon;

use super::matcher::WordPattern;
use super::models::MAX_THEMES;

#[derive(Debug, Clone)]
struct CompiledTheme {
    label: String,
    keywords: Vec<WordPattern>,
}

/// Assigns theme labels to a text using the lexicon's theme map
#[derive(Debug, Clone)]
pub struct ThemeClassifier {
    themes: Vec<CompiledTheme>,
    default_theme: String,
    max_themes: usize,
}

impl ThemeClassifier {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self::with_limit(lexicon, MAX_THEMES)
    }

    pub fn with_limit(lexicon: &Lexicon, max_themes: usize) -> Self {
        let themes = lexicon
            .themes
            .iter()
            .map(|entry| CompiledTheme {
                label: entry.label.clone(),
                keywords: WordPattern::compile_all(entry.keywords.iter().map(String::as_str)),
            })
            .collect();

        Self {
            themes,
            default_theme: lexicon.default_theme.clone(),
            max_themes,
        }
    }

    /// Labels with at least one keyword hit, in theme-map order.
    ///
    /// Never empty: falls back to the lexicon's default theme.
    pub fn classify(&self, text: &str) -> Vec<String> {
        let mut labels: Vec<String> = self
            .themes
            .iter()
            .filter(|theme| theme.keywords.iter().any(|k| k.is_match(text)))
            .map(|theme| theme.label.clone())
            .take(self.max_themes)
            .collect();

        if labels.is_empty() {
            labels.push(self.default_theme.clone());
        }
        labels
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }
}

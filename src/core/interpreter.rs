//! Interpretation Builder
//!
//! Orchestrates matching, theme classification, tone scoring and narrative
//! composition into one `Interpretation`. The only rejected input is empty
//! text; everything else produces a complete record.

use dream_lexicon::{Lexicon, SymbolDictionary};
use lazy_static::lazy_static;

use super::error::{DreamError, Result};
use super::matcher::SymbolMatcher;
use super::models::{EngineConfig, Interpretation};
use super::narrative::NarrativeComposer;
use super::themes::ThemeClassifier;
use super::tone::ToneScorer;

lazy_static! {
    /// Built-in lexicon and default limits, compiled once for `build_interpretation`.
    static ref DEFAULT_INTERPRETER: DreamInterpreter = DreamInterpreter::default();
}

/// Interprets dream texts against a fixed lexicon
#[derive(Debug, Clone)]
pub struct DreamInterpreter {
    matcher: SymbolMatcher,
    classifier: ThemeClassifier,
    scorer: ToneScorer,
    composer: NarrativeComposer,
}

impl Default for DreamInterpreter {
    fn default() -> Self {
        Self::new(&Lexicon::builtin(), &EngineConfig::default())
    }
}

impl DreamInterpreter {
    pub fn new(lexicon: &Lexicon, config: &EngineConfig) -> Self {
        Self {
            matcher: SymbolMatcher::new(config.max_symbols),
            classifier: ThemeClassifier::with_limit(lexicon, config.max_themes),
            scorer: ToneScorer::new(lexicon),
            composer: NarrativeComposer::new(),
        }
    }

    /// Replace the narrative composer (e.g. with a custom guidance table).
    pub fn with_composer(mut self, composer: NarrativeComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Build the interpretation of `text` using `dictionary`.
    ///
    /// # Errors
    ///
    /// Returns `DreamError::EmptyText` if `text` is empty or whitespace-only.
    pub fn interpret(&self, text: &str, dictionary: &SymbolDictionary) -> Result<Interpretation> {
        if text.trim().is_empty() {
            return Err(DreamError::EmptyText);
        }

        let symbols = self.matcher.find(text, dictionary);
        let main_themes = self.classifier.classify(text);
        let tone = self.scorer.read(text);
        let narrative = self.composer.compose(&symbols, &main_themes);

        tracing::debug!(
            symbols = symbols.len(),
            themes = ?main_themes,
            tone = %tone.tone,
            positive = tone.positive,
            negative = tone.negative,
            sentiment = tone.sentiment(),
            "interpreted dream"
        );

        Ok(Interpretation {
            main_themes,
            emotional_tone: tone.tone.template().to_string(),
            symbols,
            personal_insight: narrative.personal_insight,
            guidance: narrative.guidance,
        })
    }
}

/// Interpret `text` with the built-in lexicon and default limits.
pub fn build_interpretation(text: &str, dictionary: &SymbolDictionary) -> Result<Interpretation> {
    DEFAULT_INTERPRETER.interpret(text, dictionary)
}

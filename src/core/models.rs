//! Core data structures for dream-insight
//!
//! Records produced by the engine (`Interpretation`, `AggregatePatterns`),
//! records it consumes (`DreamRecord`) and the tunable `EngineConfig`.
//! Field names serialize in camelCase to match the journal's stored JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DreamError, Result};

// =============================================================================
// Policy Constants
// =============================================================================

/// Maximum number of symbols kept per interpretation.
pub const MAX_SYMBOLS: usize = 8;

/// Maximum number of themes kept per interpretation.
pub const MAX_THEMES: usize = 4;

/// Share of dreams a symbol must appear in to count as recurring (patterns view).
pub const RECURRENCE_THRESHOLD: f64 = 0.2;

/// Share of dreams the top symbol needs before an insight sentence names it.
pub const SYMBOL_INSIGHT_SHARE: f64 = 0.3;

/// Share of dreams the top theme needs before an insight sentence names it.
pub const THEME_INSIGHT_SHARE: f64 = 0.4;

/// Corpus size below which narrative insights are withheld.
pub const MIN_DREAMS_FOR_INSIGHTS: usize = 3;

/// Corpus size below which symbol-theme correlations are skipped.
pub const MIN_DREAMS_FOR_CORRELATIONS: usize = 3;

/// Maximum number of correlation sentences.
pub const MAX_CORRELATIONS: usize = 5;

// =============================================================================
// Interpretation
// =============================================================================

/// A dictionary symbol found in a dream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Display form of the symbol key (`Water`)
    pub symbol: String,
    pub meaning: String,
}

/// Structured reading of a single dream text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    /// Matched theme labels in theme-map order, never empty
    pub main_themes: Vec<String>,
    /// One of the fixed tone template sentences
    pub emotional_tone: String,
    /// Matched symbols in dictionary order
    #[serde(default)]
    pub symbols: Vec<SymbolMatch>,
    pub personal_insight: String,
    pub guidance: String,
}

/// A stored interpretation together with the date of its dream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamRecord {
    pub date: DateTime<Utc>,
    pub interpretation: Interpretation,
}

impl DreamRecord {
    pub fn new(date: DateTime<Utc>, interpretation: Interpretation) -> Self {
        Self { date, interpretation }
    }
}

// =============================================================================
// Aggregate Patterns
// =============================================================================

/// Sentiment of one dream on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    /// Sentiment in [-1, 1]
    pub score: f64,
}

/// Overall movement of the sentiment trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Steady,
    /// Too few points to tell
    #[default]
    Insufficient,
}

impl TrendDirection {
    /// Sentence describing a clear change, if there is one.
    pub fn summary(&self) -> Option<&'static str> {
        match self {
            Self::Improving => {
                Some("Your recent dreams carry a brighter emotional tone than earlier ones.")
            }
            Self::Declining => {
                Some("Your recent dreams carry a heavier emotional tone than earlier ones.")
            }
            Self::Steady | Self::Insufficient => None,
        }
    }
}

/// Patterns computed across a collection of interpretations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatePatterns {
    /// Number of dreams the aggregates were computed from
    pub total_dreams: usize,
    /// Symbols at or above the recurrence threshold
    pub recurring_symbols: BTreeMap<String, usize>,
    /// Every symbol with its dream count
    pub symbol_frequency: BTreeMap<String, usize>,
    pub theme_frequency: BTreeMap<String, usize>,
    pub insights: Vec<String>,
    pub correlations: Vec<String>,
    /// Oldest first
    pub sentiment_trend: Vec<TrendPoint>,
    pub trend_direction: TrendDirection,
    /// Sentence for an improving or declining trend, kept apart from `insights`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_summary: Option<String>,
    /// Placeholder shown when the collection is too small for insights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl AggregatePatterns {
    /// Aggregates for a collection too small to analyze.
    pub fn empty(total_dreams: usize, notice: impl Into<String>) -> Self {
        Self {
            total_dreams,
            notice: Some(notice.into()),
            ..Default::default()
        }
    }
}

// =============================================================================
// Engine Configuration
// =============================================================================

/// Tunable limits and thresholds, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_max_symbols")]
    pub max_symbols: usize,
    #[serde(default = "default_max_themes")]
    pub max_themes: usize,
    #[serde(default = "default_recurrence_threshold")]
    pub recurrence_threshold: f64,
    #[serde(default = "default_symbol_insight_share")]
    pub symbol_insight_share: f64,
    #[serde(default = "default_theme_insight_share")]
    pub theme_insight_share: f64,
    #[serde(default = "default_min_dreams_for_insights")]
    pub min_dreams_for_insights: usize,
    #[serde(default = "default_min_dreams_for_correlations")]
    pub min_dreams_for_correlations: usize,
    #[serde(default = "default_max_correlations")]
    pub max_correlations: usize,
}

fn default_max_symbols() -> usize {
    MAX_SYMBOLS
}

fn default_max_themes() -> usize {
    MAX_THEMES
}

fn default_recurrence_threshold() -> f64 {
    RECURRENCE_THRESHOLD
}

fn default_symbol_insight_share() -> f64 {
    SYMBOL_INSIGHT_SHARE
}

fn default_theme_insight_share() -> f64 {
    THEME_INSIGHT_SHARE
}

fn default_min_dreams_for_insights() -> usize {
    MIN_DREAMS_FOR_INSIGHTS
}

fn default_min_dreams_for_correlations() -> usize {
    MIN_DREAMS_FOR_CORRELATIONS
}

fn default_max_correlations() -> usize {
    MAX_CORRELATIONS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_symbols: MAX_SYMBOLS,
            max_themes: MAX_THEMES,
            recurrence_threshold: RECURRENCE_THRESHOLD,
            symbol_insight_share: SYMBOL_INSIGHT_SHARE,
            theme_insight_share: THEME_INSIGHT_SHARE,
            min_dreams_for_insights: MIN_DREAMS_FOR_INSIGHTS,
            min_dreams_for_correlations: MIN_DREAMS_FOR_CORRELATIONS,
            max_correlations: MAX_CORRELATIONS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let shares = [
            ("recurrence_threshold", self.recurrence_threshold),
            ("symbol_insight_share", self.symbol_insight_share),
            ("theme_insight_share", self.theme_insight_share),
        ];
        for (name, value) in shares {
            if !(value > 0.0 && value <= 1.0) {
                return Err(DreamError::invalid_config(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.max_symbols == 0 || self.max_themes == 0 {
            return Err(DreamError::invalid_config(
                "max_symbols and max_themes must be at least 1",
            ));
        }

        Ok(())
    }
}

//! Corpus Pattern Analyzer
//!
//! Aggregates a collection of stored interpretations into frequency tables,
//! recurring symbols, narrative insights, symbol-theme correlations and a
//! sentiment timeline. Every call recomputes from the full collection.
//!
//! # Degradation
//!
//! Analysis never fails. Small collections produce empty aggregates:
//!
//! | dreams | frequencies / recurring / trend | insights | correlations |
//! |--------|--------------------------------|----------|--------------|
//! | 0–1    | empty                          | empty    | empty        |
//! | 2      | computed                       | empty    | empty        |
//! | 3+     | computed                       | computed | computed     |
//!
//! Whenever insights are withheld, `notice` carries a placeholder asking
//! for more dreams.
//!
//! # Two threshold policies
//!
//! `recurrence_threshold` (0.2) decides which symbols are listed as
//! recurring. `symbol_insight_share` (0.3) and `theme_insight_share` (0.4)
//! decide whether a narrative sentence is written about the top symbol and
//! theme. They answer different questions and are tuned separately.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use dream_lexicon::Lexicon;
use lazy_static::lazy_static;

use super::models::{
    AggregatePatterns, DreamRecord, EngineConfig, Interpretation, TrendDirection, TrendPoint,
};
use super::tone::ToneScorer;

/// Placeholder shown while the journal is too small for insights.
pub const MORE_DREAMS_NOTICE: &str =
    "Record at least three dreams to start seeing patterns across your journal.";

/// Fewer dreams than this and nothing is aggregated.
const MIN_DREAMS_FOR_AGGREGATES: usize = 2;

/// Minimum trend points before a direction is reported.
const MIN_POINTS_FOR_DIRECTION: usize = 4;

/// Mean-score shift between halves that counts as a change in direction.
const TREND_SHIFT: f64 = 0.25;

lazy_static! {
    /// Built-in lexicon and default limits, compiled once for `analyze_corpus`.
    static ref DEFAULT_ANALYZER: CorpusAnalyzer = CorpusAnalyzer::default();
}

/// Computes `AggregatePatterns` over dream collections
#[derive(Debug, Clone)]
pub struct CorpusAnalyzer {
    scorer: ToneScorer,
    config: EngineConfig,
}

impl Default for CorpusAnalyzer {
    fn default() -> Self {
        Self::new(&Lexicon::builtin(), &EngineConfig::default())
    }
}

impl CorpusAnalyzer {
    pub fn new(lexicon: &Lexicon, config: &EngineConfig) -> Self {
        Self {
            scorer: ToneScorer::new(lexicon),
            config: config.clone(),
        }
    }

    /// Analyze dated interpretations, in any order.
    pub fn analyze(&self, records: &[DreamRecord]) -> AggregatePatterns {
        let total = records.len();
        if total < MIN_DREAMS_FOR_AGGREGATES {
            return AggregatePatterns::empty(total, MORE_DREAMS_NOTICE);
        }

        let mut symbol_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut theme_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut symbol_themes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for record in records {
            let interp = &record.interpretation;
            let symbols: BTreeSet<String> =
                interp.symbols.iter().map(|s| s.symbol.to_lowercase()).collect();
            let themes: BTreeSet<String> =
                interp.main_themes.iter().map(|t| t.to_lowercase()).collect();

            for symbol in &symbols {
                *symbol_freq.entry(symbol.clone()).or_default() += 1;
                symbol_themes
                    .entry(symbol.clone())
                    .or_default()
                    .extend(themes.iter().cloned());
            }
            for theme in &themes {
                *theme_freq.entry(theme.clone()).or_default() += 1;
            }
        }

        let recurring_symbols = recurring(&symbol_freq, total, self.config.recurrence_threshold);
        let sentiment_trend = self.sentiment_trend(records);
        let trend_direction = trend_direction(&sentiment_trend);

        let (insights, notice) = if total >= self.config.min_dreams_for_insights {
            (self.insights(&symbol_freq, &theme_freq, total), None)
        } else {
            (Vec::new(), Some(MORE_DREAMS_NOTICE.to_string()))
        };

        let correlations = if total >= self.config.min_dreams_for_correlations {
            correlations(&symbol_themes, self.config.max_correlations)
        } else {
            Vec::new()
        };

        tracing::debug!(
            dreams = total,
            symbols = symbol_freq.len(),
            recurring = recurring_symbols.len(),
            themes = theme_freq.len(),
            correlations = correlations.len(),
            "analyzed dream corpus"
        );

        AggregatePatterns {
            total_dreams: total,
            recurring_symbols,
            symbol_frequency: symbol_freq,
            theme_frequency: theme_freq,
            insights,
            correlations,
            sentiment_trend,
            trend_direction,
            trend_summary: trend_direction.summary().map(str::to_string),
            notice,
        }
    }

    /// Per-dream sentiment, oldest first.
    ///
    /// Scores the stored emotional-tone sentence, not the original dream text.
    pub fn sentiment_trend(&self, records: &[DreamRecord]) -> Vec<TrendPoint> {
        let mut trend: Vec<TrendPoint> = records
            .iter()
            .map(|r| TrendPoint {
                date: r.date,
                score: self.scorer.sentiment(&r.interpretation.emotional_tone),
            })
            .collect();
        trend.sort_by_key(|p| p.date);
        trend
    }

    fn insights(
        &self,
        symbol_freq: &BTreeMap<String, usize>,
        theme_freq: &BTreeMap<String, usize>,
        total: usize,
    ) -> Vec<String> {
        let mut insights = Vec::new();

        if let Some((symbol, count)) = most_frequent(symbol_freq) {
            let share = count as f64 / total as f64;
            if share >= self.config.symbol_insight_share {
                insights.push(format!(
                    "The symbol \"{}\" appears in {}% of your dreams, suggesting a recurring theme worth exploring.",
                    symbol,
                    (share * 100.0).round() as u32
                ));
            }
        }

        if let Some((theme, count)) = most_frequent(theme_freq) {
            if count as f64 / total as f64 >= self.config.theme_insight_share {
                insights.push(format!(
                    "Your dreams frequently explore the theme of \"{}\".",
                    theme
                ));
            }
        }

        insights
    }
}

/// Analyze with the built-in lexicon, pairing interpretations with dates.
///
/// Extra entries on either side are ignored (and logged) when the slices
/// differ in length.
pub fn analyze_corpus(
    interpretations: &[Interpretation],
    dates: &[DateTime<Utc>],
) -> AggregatePatterns {
    if interpretations.len() != dates.len() {
        tracing::warn!(
            interpretations = interpretations.len(),
            dates = dates.len(),
            "interpretation and date counts differ; ignoring unpaired entries"
        );
    }

    let records: Vec<DreamRecord> = interpretations
        .iter()
        .zip(dates)
        .map(|(interp, date)| DreamRecord::new(*date, interp.clone()))
        .collect();

    DEFAULT_ANALYZER.analyze(&records)
}

/// Entries whose share of `total` meets `threshold`.
pub fn recurring(
    freq: &BTreeMap<String, usize>,
    total: usize,
    threshold: f64,
) -> BTreeMap<String, usize> {
    if total == 0 {
        return BTreeMap::new();
    }
    freq.iter()
        .filter(|&(_, &count)| count as f64 / total as f64 >= threshold)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}

/// Highest count; ties go to the alphabetically first key.
fn most_frequent(freq: &BTreeMap<String, usize>) -> Option<(&str, usize)> {
    freq.iter().fold(None, |best, (key, &count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((key.as_str(), count)),
    })
}

/// One sentence per symbol seen alongside two or more distinct themes.
///
/// Symbols are visited in alphabetical order, not first-seen order, and the
/// two themes named are the alphabetically first of that symbol's themes.
/// Both come from the `BTreeMap`/`BTreeSet` keys, so output does not depend
/// on the order dreams were recorded in.
fn correlations(symbol_themes: &BTreeMap<String, BTreeSet<String>>, limit: usize) -> Vec<String> {
    symbol_themes
        .iter()
        .filter(|(_, themes)| themes.len() >= 2)
        .map(|(symbol, themes)| {
            let named: Vec<&str> = themes.iter().take(2).map(String::as_str).collect();
            format!(
                "\"{}\" often appears alongside themes of {}.",
                symbol,
                named.join(" and ")
            )
        })
        .take(limit)
        .collect()
}

/// Compare the later half of the trend with the earlier half.
fn trend_direction(trend: &[TrendPoint]) -> TrendDirection {
    if trend.len() < MIN_POINTS_FOR_DIRECTION {
        return TrendDirection::Insufficient;
    }

    let mid = trend.len() / 2;
    let mean = |points: &[TrendPoint]| -> f64 {
        points.iter().map(|p| p.score).sum::<f64>() / points.len() as f64
    };
    let shift = mean(&trend[mid..]) - mean(&trend[..mid]);

    if shift > TREND_SHIFT {
        TrendDirection::Improving
    } else if shift < -TREND_SHIFT {
        TrendDirection::Declining
    } else {
        TrendDirection::Steady
    }
}

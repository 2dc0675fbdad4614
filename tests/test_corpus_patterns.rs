//! Corpus Pattern Analyzer Integration Tests
//!
//! Build journals of interpretations and verify recurrence thresholds,
//! correlations, insights and graceful degradation on small collections.

use chrono::{DateTime, Duration, TimeZone, Utc};
use dream_insight::core::{CorpusAnalyzer, MORE_DREAMS_NOTICE};
use dream_insight::{
    analyze_corpus, build_interpretation, DreamRecord, EngineConfig, Interpretation, Lexicon,
    SymbolDictionary, SymbolMatch, Tone, TrendDirection,
};

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap() + Duration::days(n)
}

fn interpretation(symbols: &[&str], themes: &[&str]) -> Interpretation {
    Interpretation {
        main_themes: themes.iter().map(|t| t.to_string()).collect(),
        emotional_tone: Tone::Contemplative.template().to_string(),
        symbols: symbols
            .iter()
            .map(|s| SymbolMatch {
                symbol: s.to_string(),
                meaning: "meaning".to_string(),
            })
            .collect(),
        personal_insight: String::new(),
        guidance: String::new(),
    }
}

/// `total` dreams, the first `with_symbol` of which contain `symbol`
fn journal(total: usize, symbol: &str, with_symbol: usize) -> Vec<DreamRecord> {
    (0..total)
        .map(|i| {
            let symbols: Vec<&str> = if i < with_symbol { vec![symbol] } else { vec![] };
            DreamRecord::new(day(i as i64), interpretation(&symbols, &["home"]))
        })
        .collect()
}

// =============================================================================
// Degradation
// =============================================================================

#[test]
fn test_empty_collection() {
    let patterns = analyze_corpus(&[], &[]);

    assert_eq!(patterns.total_dreams, 0);
    assert!(patterns.recurring_symbols.is_empty());
    assert!(patterns.theme_frequency.is_empty());
    assert!(patterns.insights.is_empty());
    assert!(patterns.correlations.is_empty());
    assert!(patterns.sentiment_trend.is_empty());
    assert_eq!(patterns.notice.as_deref(), Some(MORE_DREAMS_NOTICE));
}

#[test]
fn test_single_dream_collection() {
    let interp = interpretation(&["Snake"], &["transformation"]);
    let patterns = analyze_corpus(&[interp], &[day(0)]);

    assert!(patterns.recurring_symbols.is_empty());
    assert!(patterns.theme_frequency.is_empty());
    assert!(patterns.sentiment_trend.is_empty());
}

#[test]
fn test_two_dreams_withhold_insights() {
    let records = journal(2, "Snake", 2);
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(patterns.recurring_symbols.get("snake"), Some(&2));
    assert!(patterns.insights.is_empty());
    assert!(patterns.correlations.is_empty());
    assert_eq!(patterns.notice.as_deref(), Some(MORE_DREAMS_NOTICE));
}

// =============================================================================
// Recurrence threshold
// =============================================================================

#[test]
fn test_recurrence_threshold_boundary() {
    let analyzer = CorpusAnalyzer::default();
    for total in [5usize, 7, 10, 13, 15, 20, 23] {
        let needed = (0.2 * total as f64).ceil() as usize;

        let at = analyzer.analyze(&journal(total, "Snake", needed));
        assert!(
            at.recurring_symbols.contains_key("snake"),
            "{} of {} should recur",
            needed,
            total
        );

        let below = analyzer.analyze(&journal(total, "Snake", needed - 1));
        assert!(
            !below.recurring_symbols.contains_key("snake"),
            "{} of {} should not recur",
            needed - 1,
            total
        );
    }
}

#[test]
fn test_snake_two_of_five_vs_two_of_twenty() {
    let analyzer = CorpusAnalyzer::default();

    let five = analyzer.analyze(&journal(5, "Snake", 2));
    assert_eq!(five.recurring_symbols.get("snake"), Some(&2));

    let twenty = analyzer.analyze(&journal(20, "Snake", 2));
    assert!(!twenty.recurring_symbols.contains_key("snake"));
    assert_eq!(twenty.symbol_frequency.get("snake"), Some(&2));
}

#[test]
fn test_configured_recurrence_threshold() {
    let config = EngineConfig {
        recurrence_threshold: 0.5,
        ..EngineConfig::default()
    };
    let analyzer = CorpusAnalyzer::new(&Lexicon::builtin(), &config);
    let patterns = analyzer.analyze(&journal(5, "Snake", 2));
    assert!(!patterns.recurring_symbols.contains_key("snake"));
}

#[test]
fn test_counts_never_exceed_corpus_size() {
    let dict = SymbolDictionary::starter();
    let texts = [
        "water water water and more waters",
        "a snake in the water",
        "the house by the water felt safe",
        "I fell from a bridge into the ocean",
    ];
    let records: Vec<DreamRecord> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| DreamRecord::new(day(i as i64), build_interpretation(t, &dict).unwrap()))
        .collect();
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(patterns.symbol_frequency.get("water"), Some(&3));
    for count in patterns
        .symbol_frequency
        .values()
        .chain(patterns.theme_frequency.values())
    {
        assert!(*count <= records.len());
    }
    for (symbol, count) in &patterns.recurring_symbols {
        assert!(*count as f64 / records.len() as f64 >= 0.2, "{} below threshold", symbol);
    }
}

// =============================================================================
// Correlations
// =============================================================================

#[test]
fn test_correlation_two_themes_yields_one_sentence() {
    let records = vec![
        DreamRecord::new(day(0), interpretation(&["Snake"], &["transformation"])),
        DreamRecord::new(day(1), interpretation(&["Snake"], &["anxiety"])),
        DreamRecord::new(day(2), interpretation(&["Door"], &["journey"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(patterns.correlations.len(), 1);
    assert!(patterns.correlations[0].contains("\"snake\""));
    assert!(patterns.correlations[0].contains("anxiety"));
    assert!(patterns.correlations[0].contains("transformation"));
}

#[test]
fn test_correlation_single_theme_yields_none() {
    let records = vec![
        DreamRecord::new(day(0), interpretation(&["Snake"], &["transformation"])),
        DreamRecord::new(day(1), interpretation(&["Snake"], &["transformation"])),
        DreamRecord::new(day(2), interpretation(&["Snake"], &["transformation"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);
    assert!(patterns.correlations.is_empty());
}

#[test]
fn test_correlation_names_at_most_two_themes() {
    let records = vec![
        DreamRecord::new(day(0), interpretation(&["Moon"], &["spirituality", "home", "freedom"])),
        DreamRecord::new(day(1), interpretation(&["Moon"], &["journey"])),
        DreamRecord::new(day(2), interpretation(&[], &["home"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(
        patterns.correlations,
        vec!["\"moon\" often appears alongside themes of freedom and home."]
    );
}

#[test]
fn test_correlations_capped_at_five() {
    let symbols = ["A", "B", "C", "D", "E", "F", "G"];
    let records = vec![
        DreamRecord::new(day(0), interpretation(&symbols, &["home"])),
        DreamRecord::new(day(1), interpretation(&symbols, &["journey"])),
        DreamRecord::new(day(2), interpretation(&symbols, &["freedom"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(patterns.correlations.len(), 5);
    assert!(patterns.correlations[0].starts_with("\"a\""));
    assert!(patterns.correlations[4].starts_with("\"e\""));
}

// =============================================================================
// Insights and trend
// =============================================================================

#[test]
fn test_insights_symbol_and_theme() {
    let records = vec![
        DreamRecord::new(day(0), interpretation(&["Water"], &["emotions"])),
        DreamRecord::new(day(1), interpretation(&["Water"], &["emotions"])),
        DreamRecord::new(day(2), interpretation(&["Fire"], &["emotions"])),
        DreamRecord::new(day(3), interpretation(&[], &["journey"])),
        DreamRecord::new(day(4), interpretation(&[], &["home"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);

    assert_eq!(patterns.insights.len(), 2);
    assert!(patterns.insights[0].contains("\"water\""));
    assert!(patterns.insights[0].contains("40%"));
    assert!(patterns.insights[1].contains("\"emotions\""));
    assert!(patterns.notice.is_none());
}

#[test]
fn test_insight_shares_below_thresholds() {
    // top symbol 1/4 = 0.25 < 0.3, top theme 1/4 = 0.25 < 0.4
    let records = vec![
        DreamRecord::new(day(0), interpretation(&["Water"], &["emotions"])),
        DreamRecord::new(day(1), interpretation(&[], &["journey"])),
        DreamRecord::new(day(2), interpretation(&[], &["home"])),
        DreamRecord::new(day(3), interpretation(&[], &["freedom"])),
    ];
    let patterns = CorpusAnalyzer::default().analyze(&records);
    assert!(patterns.insights.is_empty());
    assert!(patterns.notice.is_none());
}

#[test]
fn test_sentiment_trend_from_tone_text() {
    let dict = SymbolDictionary::starter();
    let dreams = [
        (day(3), "happy and calm and free"),
        (day(0), "a monster chased me, I was scared and afraid"),
        (day(2), "happy then sad"),
        (day(1), "I was afraid of the dark and in pain"),
    ];
    let interpretations: Vec<Interpretation> = dreams
        .iter()
        .map(|(_, text)| build_interpretation(text, &dict).unwrap())
        .collect();
    let dates: Vec<DateTime<Utc>> = dreams.iter().map(|(date, _)| *date).collect();

    let patterns = analyze_corpus(&interpretations, &dates);
    let trend: Vec<(DateTime<Utc>, f64)> =
        patterns.sentiment_trend.iter().map(|p| (p.date, p.score)).collect();

    assert_eq!(
        trend,
        vec![(day(0), -1.0), (day(1), -1.0), (day(2), 0.0), (day(3), 1.0)]
    );
    assert_eq!(patterns.trend_direction, TrendDirection::Improving);
    assert!(patterns.trend_summary.as_deref().unwrap().contains("brighter"));
    assert!(patterns.insights.iter().all(|i| !i.contains("brighter")));
}

#[test]
fn test_analysis_is_recomputed_from_input() {
    let analyzer = CorpusAnalyzer::default();
    let records = journal(6, "Key", 3);

    let full = analyzer.analyze(&records);
    let partial = analyzer.analyze(&records[3..]);
    assert_eq!(full, analyzer.analyze(&records));
    assert_eq!(full.symbol_frequency.get("key"), Some(&3));
    assert!(partial.symbol_frequency.get("key").is_none());
}

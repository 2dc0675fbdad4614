//! Core module for the dream interpretation engine
//!
//! # Architecture
//!
//! - `matcher`: whole-word `WordPattern` and the `SymbolMatcher`
//! - `themes`: `ThemeClassifier`
//! - `tone`: `ToneScorer`, `Tone` templates and sentiment scores
//! - `narrative`: `NarrativeComposer` and the guidance rule table
//! - `interpreter`: `DreamInterpreter`, the per-text orchestrator
//! - `patterns`: `CorpusAnalyzer`, aggregation across many interpretations
//! - `models`: records and `EngineConfig`
//! - `error`: error types using thiserror

pub mod error;
pub mod interpreter;
pub mod matcher;
pub mod models;
pub mod narrative;
pub mod patterns;
pub mod themes;
pub mod tone;

// Re-export commonly used types
pub use error::{DreamError, Result};
pub use interpreter::{build_interpretation, DreamInterpreter};
pub use matcher::{SymbolMatcher, WordPattern};
pub use models::{
    AggregatePatterns, DreamRecord, EngineConfig, Interpretation, SymbolMatch, TrendDirection,
    TrendPoint,
};
pub use narrative::{GuidanceRule, Narrative, NarrativeComposer, GUIDANCE_RULES};
pub use patterns::{analyze_corpus, CorpusAnalyzer, MORE_DREAMS_NOTICE};
pub use themes::ThemeClassifier;
pub use tone::{Tone, ToneReading, ToneScorer};

//! Tone Scorer
//!
//! Two independent readings of the same word counts:
//!
//! - a qualitative `Tone`, chosen by ratio rules and rendered as one of four
//!   fixed template sentences
//! - a numeric sentiment score in [-1, 1]
//!
//! The corpus trend applies the numeric score to a dream's stored tone
//! sentence, so the templates are worded to score -1 (anxious), +1
//! (uplifting) and 0 (blended, contemplative) under the built-in lexicon.

use dream_lexicon::Lexicon;

use super::matcher::WordPattern;

/// Negative words must outnumber positive ones by this factor for `Anxious`.
pub const ANXIOUS_RATIO: f64 = 1.5;

/// Positive words must outnumber negative ones by this factor for `Uplifting`.
pub const UPLIFTING_RATIO: f64 = 1.2;

/// Qualitative emotional tone of a dream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Anxious,
    Uplifting,
    Blended,
    Contemplative,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Anxious, Tone::Uplifting, Tone::Blended, Tone::Contemplative];

    /// Apply the selection rules; the first rule that holds wins.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        let (pos, neg) = (positive as f64, negative as f64);
        if neg > pos * ANXIOUS_RATIO {
            Tone::Anxious
        } else if pos > neg * UPLIFTING_RATIO {
            Tone::Uplifting
        } else if positive > 0 && negative > 0 {
            Tone::Blended
        } else {
            Tone::Contemplative
        }
    }

    /// Sentence stored as the interpretation's emotional tone.
    pub fn template(&self) -> &'static str {
        match self {
            Tone::Anxious => {
                "This dream carries tension and fear, pointing to worries that want your attention."
            }
            Tone::Uplifting => {
                "This dream feels uplifting and expansive, full of hope and openness to growth."
            }
            Tone::Blended => {
                "This dream blends hope and fear, a duality of light and dark moving through you."
            }
            Tone::Contemplative => {
                "This dream has a contemplative, quiet tone that invites reflection."
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Anxious => "anxious",
            Tone::Uplifting => "uplifting",
            Tone::Blended => "blended",
            Tone::Contemplative => "contemplative",
        }
    }

    /// Recover the tone from a stored template sentence.
    pub fn from_template(sentence: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.template() == sentence)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw counts behind a tone decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneReading {
    pub tone: Tone,
    pub positive: usize,
    pub negative: usize,
}

impl ToneReading {
    pub fn sentiment(&self) -> f64 {
        sentiment_from_counts(self.positive, self.negative)
    }
}

/// `(pos - neg) / (pos + neg)`, or 0 when nothing matched.
pub fn sentiment_from_counts(positive: usize, negative: usize) -> f64 {
    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / total as f64
}

/// Counts sentiment words in text
#[derive(Debug, Clone)]
pub struct ToneScorer {
    positive: Vec<WordPattern>,
    negative: Vec<WordPattern>,
}

impl ToneScorer {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            positive: WordPattern::compile_all(lexicon.tone.positive.iter().map(String::as_str)),
            negative: WordPattern::compile_all(lexicon.tone.negative.iter().map(String::as_str)),
        }
    }

    /// `(positive, negative)` occurrence counts.
    pub fn counts(&self, text: &str) -> (usize, usize) {
        let count = |patterns: &[WordPattern]| -> usize {
            patterns.iter().map(|p| p.count(text)).sum()
        };
        (count(&self.positive), count(&self.negative))
    }

    pub fn read(&self, text: &str) -> ToneReading {
        let (positive, negative) = self.counts(text);
        ToneReading {
            tone: Tone::from_counts(positive, negative),
            positive,
            negative,
        }
    }

    pub fn tone(&self, text: &str) -> Tone {
        self.read(text).tone
    }

    /// Numeric sentiment of `text` in [-1, 1].
    pub fn sentiment(&self, text: &str) -> f64 {
        self.read(text).sentiment()
    }
}

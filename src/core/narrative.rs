//! Narrative Composer
//!
//! Turns matched symbols and themes into the two free-text fields of an
//! interpretation. Tone is deliberately not an input here.
//!
//! # Guidance addenda
//!
//! Extra guidance is driven by `GUIDANCE_RULES`, an ordered table of
//! `(theme, addendum)` pairs. Rules are evaluated in table order, so the
//! addenda always appear in the same priority order regardless of where the
//! themes appeared in the dream.

use super::models::SymbolMatch;

/// Extra guidance appended when a theme is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceRule {
    pub theme: &'static str,
    pub addendum: &'static str,
}

impl GuidanceRule {
    pub fn applies(&self, themes: &[String]) -> bool {
        themes.iter().any(|t| t.eq_ignore_ascii_case(self.theme))
    }
}

/// Guidance addenda in priority order.
pub const GUIDANCE_RULES: &[GuidanceRule] = &[
    GuidanceRule {
        theme: "anxiety",
        addendum: "Try a grounding practice before sleep, such as slow breathing or writing down what weighs on you.",
    },
    GuidanceRule {
        theme: "transformation",
        addendum: "Change is already under way; meet it with curiosity instead of resistance.",
    },
    GuidanceRule {
        theme: "relationships",
        addendum: "Consider reaching out to someone this dream brought to mind.",
    },
];

const GENERIC_INSIGHT: &str = "This dream invites you to look inward. Its images may be giving shape to feelings you have not yet put into words.";

const GENERIC_GUIDANCE: &str =
    "Keep recording your dreams; recurring images tend to reveal their meaning over time.";

/// The composed narrative fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub personal_insight: String,
    pub guidance: String,
}

/// Builds insight and guidance text
#[derive(Debug, Clone, Copy)]
pub struct NarrativeComposer {
    rules: &'static [GuidanceRule],
}

impl Default for NarrativeComposer {
    fn default() -> Self {
        Self { rules: GUIDANCE_RULES }
    }
}

impl NarrativeComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom rule table instead of `GUIDANCE_RULES`.
    pub fn with_rules(rules: &'static [GuidanceRule]) -> Self {
        Self { rules }
    }

    pub fn compose(&self, symbols: &[SymbolMatch], themes: &[String]) -> Narrative {
        Narrative {
            personal_insight: self.personal_insight(symbols),
            guidance: self.guidance(symbols, themes),
        }
    }

    /// Insight built around the top-ranked symbol, if any.
    pub fn personal_insight(&self, symbols: &[SymbolMatch]) -> String {
        match symbols.first() {
            Some(top) => format!(
                "The appearance of {} points to {}. Consider where this is showing up in your waking life.",
                top.symbol, top.meaning
            ),
            None => GENERIC_INSIGHT.to_string(),
        }
    }

    pub fn guidance(&self, symbols: &[SymbolMatch], themes: &[String]) -> String {
        let mut parts = vec![match symbols.first() {
            Some(top) => format!(
                "Reflect on what {} means to you personally, and notice where {} appears in your days.",
                top.symbol.to_lowercase(),
                top.meaning
            ),
            None => GENERIC_GUIDANCE.to_string(),
        }];

        parts.extend(
            self.rules
                .iter()
                .filter(|rule| rule.applies(themes))
                .map(|rule| rule.addendum.to_string()),
        );

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str, meaning: &str) -> SymbolMatch {
        SymbolMatch {
            symbol: name.to_string(),
            meaning: meaning.to_string(),
        }
    }

    fn themes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_insight_names_top_symbol() {
        let composer = NarrativeComposer::new();
        let insight = composer.personal_insight(&[
            symbol("House", "the self"),
            symbol("Water", "emotion"),
        ]);
        assert!(insight.contains("House"));
        assert!(insight.contains("the self"));
        assert!(!insight.contains("Water"));
    }

    #[test]
    fn test_generic_insight_without_symbols() {
        let composer = NarrativeComposer::new();
        assert_eq!(composer.personal_insight(&[]), GENERIC_INSIGHT);
    }

    #[test]
    fn test_guidance_without_special_themes() {
        let composer = NarrativeComposer::new();
        assert_eq!(composer.guidance(&[], &themes(&["home"])), GENERIC_GUIDANCE);

        let guidance = composer.guidance(&[symbol("Water", "emotion")], &themes(&["emotions"]));
        assert!(guidance.starts_with("Reflect on what water means"));
    }

    #[test]
    fn test_guidance_addenda_follow_rule_priority() {
        let composer = NarrativeComposer::new();
        let guidance = composer.guidance(&[], &themes(&["transformation", "home", "anxiety"]));

        let anxiety = guidance.find(GUIDANCE_RULES[0].addendum).unwrap();
        let change = guidance.find(GUIDANCE_RULES[1].addendum).unwrap();
        assert!(guidance.starts_with(GENERIC_GUIDANCE));
        assert!(anxiety < change);
        assert!(!guidance.contains(GUIDANCE_RULES[2].addendum));
    }

    #[test]
    fn test_guidance_addendum_at_most_once() {
        let composer = NarrativeComposer::new();
        let guidance = composer.guidance(&[], &themes(&["anxiety", "Anxiety"]));
        assert_eq!(guidance.matches(GUIDANCE_RULES[0].addendum).count(), 1);
    }

    #[test]
    fn test_custom_rule_table() {
        const RULES: &[GuidanceRule] = &[GuidanceRule {
            theme: "home",
            addendum: "Spend time somewhere that feels safe.",
        }];
        let composer = NarrativeComposer::with_rules(RULES);
        let narrative = composer.compose(&[], &themes(&["home", "anxiety"]));
        assert!(narrative.guidance.ends_with("Spend time somewhere that feels safe."));
        assert!(!narrative.guidance.contains("grounding"));
    }
}

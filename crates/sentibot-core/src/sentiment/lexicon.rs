//! Rule-based valence lexicon backend.
//!
//! Conversational English words carry a hand-tuned valence on a -4.0..=4.0
//! scale. A text is scored by walking its tokens, applying negation and
//! intensifier handling, and normalizing the valence sum into (-1, 1) so
//! that long, strongly polar texts saturate toward the bounds instead of
//! growing without limit.

use super::backend::{RawScore, ScoringBackend};
use std::collections::HashMap;

/// Normalization constant: compound = s / sqrt(s^2 + ALPHA).
const ALPHA: f64 = 15.0;

/// Valence entries for everyday conversational vocabulary, -4.0..=4.0.
const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("love", 3.2),
    ("loved", 2.9),
    ("adore", 3.0),
    ("great", 3.1),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("excellent", 2.7),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("perfect", 2.7),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("delighted", 2.9),
    ("happy", 2.7),
    ("glad", 2.0),
    ("pleased", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("good", 1.9),
    ("nice", 1.8),
    ("helpful", 1.7),
    ("friendly", 2.2),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("appreciate", 1.7),
    ("satisfied", 1.6),
    ("impressive", 2.3),
    ("impressed", 2.1),
    ("like", 1.5),
    ("better", 1.9),
    ("easy", 1.4),
    ("smooth", 1.3),
    ("cool", 1.3),
    ("recommend", 1.6),
    ("fine", 0.8),
    // Negative
    ("hate", -2.7),
    ("hated", -2.6),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("bad", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("sad", -2.1),
    ("angry", -2.3),
    ("furious", -2.7),
    ("annoyed", -1.8),
    ("annoying", -1.8),
    ("frustrated", -2.1),
    ("frustrating", -1.9),
    ("disappointed", -2.2),
    ("disappointing", -2.2),
    ("upset", -1.9),
    ("unhappy", -1.8),
    ("useless", -1.8),
    ("broken", -1.6),
    ("problem", -1.4),
    ("problems", -1.7),
    ("issue", -1.1),
    ("fail", -2.0),
    ("failed", -2.2),
    ("failure", -2.1),
    ("crash", -1.9),
    ("crashed", -1.9),
    ("wrong", -1.6),
    ("confusing", -1.3),
    ("confused", -1.2),
    ("poor", -1.9),
    ("stupid", -2.2),
    ("waste", -1.8),
    ("sucks", -1.5),
    ("slow", -0.9),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot",
    "cant", "can't", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt",
    "won't", "wont", "wouldn't", "wouldnt", "shouldn't", "shouldnt",
    "couldn't", "couldnt", "isn't", "isnt", "aren't", "arent", "wasn't",
    "wasnt", "weren't", "werent", "hardly", "barely", "scarcely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 2.0),
    ("incredibly", 1.9),
    ("absolutely", 1.8),
    ("totally", 1.6),
    ("so", 1.3),
    ("pretty", 1.3),
    ("quite", 1.2),
    ("somewhat", 0.7),
    ("kinda", 0.7),
    ("slightly", 0.5),
];

/// Conversational sentiment lexicon.
///
/// Word-to-valence mappings plus negation and intensifier vocabularies.
pub struct ChatLexicon {
    valences: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for ChatLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLexicon {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Get the valence for a (lowercased) word.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Check if a word is a negation.
    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    /// Get the intensity multiplier for a word.
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }
}

/// The rule-based scoring backend built on [`ChatLexicon`].
pub struct LexiconBackend {
    lexicon: ChatLexicon,
}

impl Default for LexiconBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBackend {
    pub fn new() -> Self {
        Self {
            lexicon: ChatLexicon::new(),
        }
    }
}

/// Lowercases a raw token and strips surrounding punctuation, keeping
/// inner apostrophes so contractions like "don't" survive.
fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

impl ScoringBackend for LexiconBackend {
    fn score(&self, text: &str) -> Option<RawScore> {
        let mut valence_sum = 0.0;
        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neutral_count = 0usize;

        let mut negate_next = false;
        let mut intensity = 1.0;

        for raw in text.split_whitespace() {
            let token = normalize_token(raw);
            if token.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(&token) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.lexicon.intensifier(&token) {
                intensity = mult;
                continue;
            }

            if let Some(mut valence) = self.lexicon.valence(&token) {
                if negate_next {
                    valence = -valence;
                    negate_next = false;
                }
                valence *= intensity;
                intensity = 1.0;

                valence_sum += valence;
                if valence > 0.0 {
                    pos_mass += valence;
                } else {
                    neg_mass += valence.abs();
                }
            } else {
                // Unknown word: modifiers do not carry across it.
                negate_next = false;
                intensity = 1.0;
                neutral_count += 1;
            }
        }

        let compound =
            (valence_sum / (valence_sum * valence_sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

        let total_mass = pos_mass + neg_mass + neutral_count as f64;
        let (positive, negative, neutral) = if total_mass > 0.0 {
            (
                pos_mass / total_mass,
                neg_mass / total_mass,
                neutral_count as f64 / total_mass,
            )
        } else {
            (0.0, 0.0, 1.0)
        };

        Some(
            RawScore::new(compound)
                .with_detail("positive", positive)
                .with_detail("negative", negative)
                .with_detail("neutral", neutral),
        )
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        LexiconBackend::new().score(text).unwrap().compound
    }

    #[test]
    fn test_positive_phrase_scores_positive() {
        assert!(compound("I am so happy with this, it works great") > 0.3);
    }

    #[test]
    fn test_negative_phrase_scores_negative() {
        assert!(compound("this is terrible and I hate it") < -0.3);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let raw = LexiconBackend::new().score("the cat sat on the mat").unwrap();
        assert_eq!(raw.compound, 0.0);
        assert_eq!(raw.detail["neutral"], 1.0);
    }

    #[test]
    fn test_negation_flips_valence() {
        let plain = compound("I am happy");
        let negated = compound("I am not happy");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_intensifier_raises_magnitude() {
        assert!(compound("extremely happy") > compound("happy"));
        assert!(compound("slightly happy") < compound("happy"));
    }

    #[test]
    fn test_punctuation_does_not_block_matches() {
        assert!(compound("Great!!!") > 0.3);
    }

    #[test]
    fn test_long_polar_text_saturates() {
        let text = vec!["awesome"; 100].join(" ");
        let score = compound(&text);
        assert!(score > 0.99);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_detail_proportions_sum_to_one() {
        let raw = LexiconBackend::new()
            .score("great service but a terrible wait today")
            .unwrap();
        let sum: f64 = raw.detail.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(raw.detail["positive"] > 0.0);
        assert!(raw.detail["negative"] > 0.0);
    }
}

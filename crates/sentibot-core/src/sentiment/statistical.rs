//! Statistical scoring backend.
//!
//! Pattern-style polarity averaging: each known word carries a polarity and
//! a subjectivity in -1.0..=1.0, and a text's polarity is the arithmetic
//! mean of its matched word polarities. A negation multiplies the following
//! hit by -0.5 (a negated word is weakly opposite, not fully inverted).

use super::backend::{RawScore, ScoringBackend};
use std::collections::HashMap;

/// (word, polarity, subjectivity)
const ENTRIES: &[(&str, f64, f64)] = &[
    ("love", 0.8, 0.9),
    ("great", 0.8, 0.75),
    ("awesome", 0.9, 0.9),
    ("amazing", 0.85, 0.9),
    ("excellent", 0.9, 0.8),
    ("wonderful", 0.8, 0.85),
    ("fantastic", 0.8, 0.9),
    ("perfect", 0.9, 0.9),
    ("best", 0.9, 0.6),
    ("happy", 0.8, 0.95),
    ("glad", 0.6, 0.9),
    ("good", 0.7, 0.6),
    ("nice", 0.6, 0.9),
    ("helpful", 0.55, 0.5),
    ("fun", 0.65, 0.8),
    ("enjoy", 0.5, 0.6),
    ("like", 0.4, 0.5),
    ("fine", 0.3, 0.4),
    ("easy", 0.45, 0.7),
    ("better", 0.5, 0.5),
    ("hate", -0.8, 0.9),
    ("terrible", -0.9, 0.9),
    ("awful", -0.85, 0.9),
    ("horrible", -0.9, 0.9),
    ("bad", -0.7, 0.65),
    ("worst", -0.9, 0.6),
    ("worse", -0.6, 0.5),
    ("sad", -0.6, 0.95),
    ("angry", -0.7, 0.9),
    ("annoying", -0.6, 0.8),
    ("frustrated", -0.65, 0.85),
    ("frustrating", -0.6, 0.8),
    ("disappointed", -0.7, 0.8),
    ("disappointing", -0.65, 0.75),
    ("upset", -0.6, 0.85),
    ("unhappy", -0.7, 0.9),
    ("useless", -0.6, 0.7),
    ("broken", -0.5, 0.4),
    ("wrong", -0.5, 0.5),
    ("poor", -0.6, 0.6),
    ("stupid", -0.75, 0.9),
    ("slow", -0.3, 0.4),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "cant", "don't", "dont",
    "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't",
    "wasnt", "won't", "wont",
];

/// Backend averaging per-word polarity and subjectivity.
pub struct StatisticalBackend {
    entries: HashMap<&'static str, (f64, f64)>,
}

impl Default for StatisticalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticalBackend {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
        }
    }
}

impl ScoringBackend for StatisticalBackend {
    fn score(&self, text: &str) -> Option<RawScore> {
        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        let mut negate_next = false;

        for raw in text.split_whitespace() {
            let token: String = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if token.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&token.as_str()) {
                negate_next = true;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.entries.get(token.as_str()) {
                let polarity = if negate_next { polarity * -0.5 } else { polarity };
                negate_next = false;
                polarities.push(polarity);
                subjectivities.push(subjectivity);
            } else {
                negate_next = false;
            }
        }

        let polarity = if polarities.is_empty() {
            0.0
        } else {
            polarities.iter().sum::<f64>() / polarities.len() as f64
        };
        let subjectivity = if subjectivities.is_empty() {
            0.0
        } else {
            subjectivities.iter().sum::<f64>() / subjectivities.len() as f64
        };

        Some(
            RawScore::new(polarity.clamp(-1.0, 1.0))
                .with_detail("polarity", polarity)
                .with_detail("subjectivity", subjectivity),
        )
    }

    fn name(&self) -> &'static str {
        "statistical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages_matched_polarities() {
        let raw = StatisticalBackend::new()
            .score("good but slow")
            .unwrap();
        // mean of 0.7 and -0.3
        assert!((raw.compound - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_negation_dampens_and_flips() {
        let raw = StatisticalBackend::new().score("not good").unwrap();
        assert!((raw.compound - (-0.35)).abs() < 1e-9);
    }

    #[test]
    fn test_detail_keys() {
        let raw = StatisticalBackend::new().score("happy").unwrap();
        assert!(raw.detail.contains_key("polarity"));
        assert!(raw.detail.contains_key("subjectivity"));
        assert!(raw.detail["subjectivity"] > 0.9);
    }

    #[test]
    fn test_unmatched_text_is_zero() {
        let raw = StatisticalBackend::new().score("42 + 17 = 59").unwrap();
        assert_eq!(raw.compound, 0.0);
        assert_eq!(raw.detail["subjectivity"], 0.0);
    }
}

//! Per-answer scoring rules.
//!
//! Every recorded answer is converted to a 1-5 score at the moment it is
//! recorded. Which rule applies to a choice question is configuration
//! carried by the bank's [`ScoringTable`], not behavior inferred from id
//! naming conventions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::{Answer, Question, QuestionBank};

/// Lowest possible per-answer score.
pub const MIN_SCORE: u8 = 1;
/// Highest possible per-answer score.
pub const MAX_SCORE: u8 = 5;

/// How a choice question's option index maps to a 1-5 score.
///
/// Likert questions ignore the rule and pass the rating through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ScoringRule {
    /// One registered correct option scores 5, every other option scores 1.
    Keyed { correct_index: u32 },
    /// Option index 0 scores highest: `5 - index`, clamped to 1..=5.
    /// Used for self-rated proficiency tiers listed best-first.
    InverseIndex,
    /// Later options score higher: `index + 1`, clamped to 1..=5.
    /// The fallback for ids with no table entry.
    IndexOrder,
}

/// Scoring rules keyed by question id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringTable {
    #[serde(default)]
    rules: HashMap<String, ScoringRule>,
}

impl ScoringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule for a question id.
    pub fn insert(&mut self, question_id: impl Into<String>, rule: ScoringRule) {
        self.rules.insert(question_id.into(), rule);
    }

    /// The rule for a question id; ids absent from the table fall back to
    /// [`ScoringRule::IndexOrder`].
    pub fn rule_for(&self, question_id: &str) -> ScoringRule {
        self.rules
            .get(question_id)
            .copied()
            .unwrap_or(ScoringRule::IndexOrder)
    }

    /// Iterate over all registered (id, rule) entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ScoringRule)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), *rule))
    }
}

/// Score a raw answer value against a question.
///
/// Likert ratings pass through; choice questions apply `rule`. All paths
/// clamp into 1..=5 so out-of-domain values degrade to the nearest bound
/// instead of escaping the scale.
pub fn score_value(question: &Question, rule: ScoringRule, value: u32) -> u8 {
    if question.is_choice() {
        match rule {
            ScoringRule::Keyed { correct_index } => {
                if value == correct_index {
                    MAX_SCORE
                } else {
                    MIN_SCORE
                }
            }
            ScoringRule::InverseIndex => clamp_score(5 - i64::from(value)),
            ScoringRule::IndexOrder => clamp_score(i64::from(value) + 1),
        }
    } else {
        clamp_score(i64::from(value))
    }
}

/// Build a scored [`Answer`] for a `(question id, raw value)` pair.
///
/// This is the entry point for answers arriving from outside the
/// navigator, e.g. a batch answer file.
pub fn score_response(
    bank: &QuestionBank,
    question_id: &str,
    value: u32,
) -> Result<Answer, AssessmentError> {
    let question = bank
        .question(question_id)
        .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;
    let rule = bank.scoring.rule_for(question_id);
    Ok(Answer {
        question_id: question_id.to_string(),
        value,
        score: score_value(question, rule, value),
    })
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8
}

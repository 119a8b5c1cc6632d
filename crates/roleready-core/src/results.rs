//! Assessment results and the scoring pipeline.
//!
//! [`score_assessment`] is a pure function from the full answer list to an
//! immutable [`AssessmentResults`] value: per-category aggregation,
//! per-dimension aggregation, an overall-confidence blend, and four
//! rule-based generators for derived guidance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::{Answer, Category, QuestionBank, WiscarDimension};
use crate::scoring::MAX_SCORE;

/// Overall confidence at or above this yields a YES recommendation.
pub const YES_THRESHOLD: u8 = 75;
/// Overall confidence at or above this (but below YES) yields MAYBE.
pub const MAYBE_THRESHOLD: u8 = 60;
/// Component scores below this register a skill gap.
const GAP_THRESHOLD: u8 = 70;
/// WISCAR dimension scores at or above this unlock bonus career matches.
const BONUS_THRESHOLD: u8 = 80;

/// The aptitude verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Derive the recommendation from an overall confidence percentage.
    pub fn for_confidence(overall_confidence: u8) -> Self {
        if overall_confidence >= YES_THRESHOLD {
            Recommendation::Yes
        } else if overall_confidence >= MAYBE_THRESHOLD {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    /// One-line verdict for presentation.
    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Yes => "Strong fit - ready to pursue this career",
            Recommendation::Maybe => "Potential fit - some development needed",
            Recommendation::No => "Consider alternative paths",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "YES"),
            Recommendation::Maybe => write!(f, "MAYBE"),
            Recommendation::No => write!(f, "NO"),
        }
    }
}

/// Recommended skill-development tier, derived solely from overall
/// confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningPath {
    #[serde(rename = "Intermediate to Advanced")]
    IntermediateToAdvanced,
    #[serde(rename = "Beginner to Intermediate")]
    BeginnerToIntermediate,
    #[serde(rename = "Foundational Level")]
    Foundational,
}

impl LearningPath {
    pub fn for_confidence(overall_confidence: u8) -> Self {
        if overall_confidence >= YES_THRESHOLD {
            LearningPath::IntermediateToAdvanced
        } else if overall_confidence >= MAYBE_THRESHOLD {
            LearningPath::BeginnerToIntermediate
        } else {
            LearningPath::Foundational
        }
    }
}

impl fmt::Display for LearningPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningPath::IntermediateToAdvanced => write!(f, "Intermediate to Advanced"),
            LearningPath::BeginnerToIntermediate => write!(f, "Beginner to Intermediate"),
            LearningPath::Foundational => write!(f, "Foundational Level"),
        }
    }
}

/// Per-dimension WISCAR percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_fit: u8,
}

impl WiscarScores {
    /// Score for one dimension.
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldFit => self.real_world_fit,
        }
    }

    /// Mean of the six dimension scores.
    pub fn average(&self) -> f64 {
        WiscarDimension::ALL
            .iter()
            .map(|d| f64::from(self.get(*d)))
            .sum::<f64>()
            / WiscarDimension::ALL.len() as f64
    }

    /// All `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, u8)> + '_ {
        WiscarDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// The complete, immutable outcome of one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResults {
    /// Psychometric fit percentage (0-100).
    pub psych_fit_score: u8,
    /// Technical knowledge percentage (0-100).
    pub tech_score: u8,
    /// WISCAR dimension percentages.
    pub wiscar: WiscarScores,
    /// Blended overall confidence percentage (0-100).
    pub overall_confidence: u8,
    /// The verdict.
    pub recommendation: Recommendation,
    /// Areas for improvement; may be empty.
    pub skill_gaps: Vec<String>,
    /// Recommended next steps; never empty.
    pub next_steps: Vec<String>,
    /// Matching career titles; never empty.
    pub career_matches: Vec<String>,
    /// Recommended skill-development tier.
    pub learning_path: LearningPath,
}

/// Score a full answer list against a question bank.
///
/// Deterministic and re-entrant; the only failure modes are precondition
/// violations (an empty answer list or an answer for a question the bank
/// does not contain).
pub fn score_assessment(
    bank: &QuestionBank,
    answers: &[Answer],
) -> Result<AssessmentResults, AssessmentError> {
    if answers.is_empty() {
        return Err(AssessmentError::EmptyAnswerSet);
    }

    let mut psych_scores = Vec::new();
    let mut tech_scores = Vec::new();
    let mut wiscar_scores: Vec<(WiscarDimension, u8)> = Vec::new();

    for answer in answers {
        let question = bank
            .question(&answer.question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(answer.question_id.clone()))?;

        match question.category {
            Category::Psychometric => psych_scores.push(answer.score),
            Category::Technical => tech_scores.push(answer.score),
            Category::Wiscar => {
                if let Some(dimension) = question.wiscar_dimension {
                    wiscar_scores.push((dimension, answer.score));
                }
            }
        }
    }

    let psych_fit_score = mean_percentage(&psych_scores);
    let tech_score = correct_percentage(&tech_scores);

    let dimension_score = |dimension: WiscarDimension| -> u8 {
        let scores: Vec<u8> = wiscar_scores
            .iter()
            .filter(|(d, _)| *d == dimension)
            .map(|(_, s)| *s)
            .collect();
        mean_percentage(&scores)
    };

    let wiscar = WiscarScores {
        will: dimension_score(WiscarDimension::Will),
        interest: dimension_score(WiscarDimension::Interest),
        skill: dimension_score(WiscarDimension::Skill),
        cognitive: dimension_score(WiscarDimension::Cognitive),
        ability_to_learn: dimension_score(WiscarDimension::AbilityToLearn),
        real_world_fit: dimension_score(WiscarDimension::RealWorldFit),
    };

    let overall = (f64::from(psych_fit_score) + f64::from(tech_score) + wiscar.average()) / 3.0;
    let overall_confidence = overall.round() as u8;

    let recommendation = Recommendation::for_confidence(overall_confidence);
    let skill_gaps = generate_skill_gaps(tech_score, &wiscar);
    let next_steps = generate_next_steps(recommendation);
    let career_matches = generate_career_matches(overall_confidence, &wiscar);
    let learning_path = LearningPath::for_confidence(overall_confidence);

    Ok(AssessmentResults {
        psych_fit_score,
        tech_score,
        wiscar,
        overall_confidence,
        recommendation,
        skill_gaps,
        next_steps,
        career_matches,
        learning_path,
    })
}

/// round(100 * mean(scores) / 5); 0 when no scores exist.
fn mean_percentage(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    let ratio = f64::from(sum) / (scores.len() as f64 * f64::from(MAX_SCORE));
    (ratio * 100.0).round() as u8
}

/// round(100 * |score = 5| / n); 0 when no scores exist.
fn correct_percentage(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let correct = scores.iter().filter(|s| **s == MAX_SCORE).count();
    (correct as f64 / scores.len() as f64 * 100.0).round() as u8
}

fn generate_skill_gaps(tech_score: u8, wiscar: &WiscarScores) -> Vec<String> {
    let mut gaps = Vec::new();

    if tech_score < GAP_THRESHOLD {
        gaps.push("Technical knowledge of social media tools and metrics".to_string());
    }
    if wiscar.skill < GAP_THRESHOLD {
        gaps.push("Hands-on experience with professional social media tools".to_string());
    }
    if wiscar.cognitive < GAP_THRESHOLD {
        gaps.push("Analytical thinking and data interpretation".to_string());
    }
    if wiscar.real_world_fit < GAP_THRESHOLD {
        gaps.push("Multi-tasking and project management skills".to_string());
    }

    gaps
}

fn generate_next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps: &[&str] = match recommendation {
        Recommendation::Yes => &[
            "Enroll in advanced social media management courses",
            "Start building a professional portfolio",
            "Network with industry professionals",
            "Consider internships or freelance projects",
        ],
        Recommendation::Maybe => &[
            "Take foundational social media marketing courses",
            "Practice with personal projects or volunteer work",
            "Focus on improving identified skill gaps",
            "Retake assessment in 3-6 months",
        ],
        Recommendation::No => &[
            "Explore related fields like content writing or customer service",
            "Develop basic digital literacy skills",
            "Consider other career paths that match your interests",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

fn generate_career_matches(overall_confidence: u8, wiscar: &WiscarScores) -> Vec<String> {
    let mut matches = Vec::new();

    if overall_confidence >= YES_THRESHOLD {
        matches.push("Social Media Manager".to_string());
        matches.push("Content Strategist".to_string());
        if wiscar.cognitive >= BONUS_THRESHOLD {
            matches.push("Social Media Analyst".to_string());
        }
        if wiscar.will >= BONUS_THRESHOLD {
            matches.push("Community Manager".to_string());
        }
    } else if overall_confidence >= MAYBE_THRESHOLD {
        matches.push("Social Media Assistant".to_string());
        matches.push("Content Creator".to_string());
        matches.push("Community Moderator".to_string());
    } else {
        matches.push("Customer Service Representative".to_string());
        matches.push("Content Writer".to_string());
        matches.push("Digital Marketing Assistant".to_string());
    }

    matches
}

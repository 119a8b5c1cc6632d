//! Core data model types for roleready.
//!
//! These are the fundamental types the entire roleready system uses to
//! represent questions, question banks, and recorded answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::scoring::ScoringTable;

/// A single question presented to the candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier. The prefix encodes the category
    /// (`psych_*`, `tech_*`, `wiscar_*`).
    pub id: String,
    /// The question text shown to the candidate.
    pub text: String,
    /// How the question is answered.
    pub kind: QuestionKind,
    /// Which assessment section the question belongs to.
    pub category: Category,
    /// Ordered answer options for choice questions. The option index is
    /// the answer's value domain.
    #[serde(default)]
    pub options: Vec<String>,
    /// Anchor labels for the 1-5 Likert scale.
    #[serde(default)]
    pub likert_labels: Option<LikertLabels>,
    /// Narrative context for scenario questions.
    #[serde(default)]
    pub scenario: Option<String>,
    /// WISCAR dimension this question measures. Required when
    /// `category` is `Wiscar`, absent otherwise.
    #[serde(default)]
    pub wiscar_dimension: Option<WiscarDimension>,
}

impl Question {
    /// Returns `true` if the question is answered by picking an option
    /// index rather than a Likert rating.
    pub fn is_choice(&self) -> bool {
        matches!(
            self.kind,
            QuestionKind::MultipleChoice | QuestionKind::Scenario
        )
    }
}

/// Anchor text for the two ends of a Likert scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikertLabels {
    /// Label for rating 1.
    pub min: String,
    /// Label for rating 5.
    pub max: String,
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Answered on a fixed 1-5 agreement scale.
    Likert,
    /// Answered by picking one of the listed options.
    MultipleChoice,
    /// A multiple-choice question framed with narrative context.
    Scenario,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Likert => write!(f, "likert"),
            QuestionKind::MultipleChoice => write!(f, "multiple-choice"),
            QuestionKind::Scenario => write!(f, "scenario"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likert" => Ok(QuestionKind::Likert),
            "multiple-choice" | "multiple_choice" => Ok(QuestionKind::MultipleChoice),
            "scenario" => Ok(QuestionKind::Scenario),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Assessment section a question belongs to. Section order is fixed:
/// psychometric, then technical, then WISCAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    /// All categories in section order.
    pub const ALL: [Category; 3] = [Category::Psychometric, Category::Technical, Category::Wiscar];

    /// The question-id prefix that encodes this category.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::Psychometric => "psych_",
            Category::Technical => "tech_",
            Category::Wiscar => "wiscar_",
        }
    }

    /// Human-readable section title.
    pub fn section_name(&self) -> &'static str {
        match self {
            Category::Psychometric => "Personality & Motivation",
            Category::Technical => "Technical Knowledge",
            Category::Wiscar => "WISCAR Framework",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Wiscar => write!(f, "wiscar"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "technical" => Ok(Category::Technical),
            "wiscar" => Ok(Category::Wiscar),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// The six dimensions of the WISCAR readiness framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldFit,
}

impl WiscarDimension {
    /// All dimensions in canonical order.
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::AbilityToLearn,
        WiscarDimension::RealWorldFit,
    ];

    /// Human-readable label for presentation.
    pub fn label(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Skill",
            WiscarDimension::Cognitive => "Cognitive",
            WiscarDimension::AbilityToLearn => "Learning",
            WiscarDimension::RealWorldFit => "Real-World Fit",
        }
    }
}

impl fmt::Display for WiscarDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiscarDimension::Will => write!(f, "will"),
            WiscarDimension::Interest => write!(f, "interest"),
            WiscarDimension::Skill => write!(f, "skill"),
            WiscarDimension::Cognitive => write!(f, "cognitive"),
            WiscarDimension::AbilityToLearn => write!(f, "ability_to_learn"),
            WiscarDimension::RealWorldFit => write!(f, "real_world_fit"),
        }
    }
}

impl FromStr for WiscarDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "will" => Ok(WiscarDimension::Will),
            "interest" => Ok(WiscarDimension::Interest),
            "skill" => Ok(WiscarDimension::Skill),
            "cognitive" => Ok(WiscarDimension::Cognitive),
            "ability_to_learn" => Ok(WiscarDimension::AbilityToLearn),
            "real_world_fit" => Ok(WiscarDimension::RealWorldFit),
            other => Err(format!("unknown WISCAR dimension: {other}")),
        }
    }
}

/// A complete question bank for one career role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The career role this bank assesses readiness for.
    pub role: String,
    /// Description of the bank.
    #[serde(default)]
    pub description: String,
    /// The questions, in source order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Per-question scoring rules.
    #[serde(default)]
    pub scoring: ScoringTable,
}

impl QuestionBank {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A recorded answer to one question.
///
/// `value` is a 1-5 rating for Likert questions or a zero-based option
/// index for choice questions. `score` is derived from the bank's scoring
/// rules and always falls in 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Id of the question this answers.
    pub question_id: String,
    /// Raw value as selected by the candidate.
    pub value: u32,
    /// Derived 1-5 score.
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_display_and_parse() {
        assert_eq!(QuestionKind::Likert.to_string(), "likert");
        assert_eq!(QuestionKind::MultipleChoice.to_string(), "multiple-choice");
        assert_eq!(
            "multiple-choice".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            "Scenario".parse::<QuestionKind>().unwrap(),
            QuestionKind::Scenario
        );
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn category_prefix_matches_order() {
        assert_eq!(Category::ALL[0], Category::Psychometric);
        assert_eq!(Category::Psychometric.id_prefix(), "psych_");
        assert_eq!(Category::Technical.id_prefix(), "tech_");
        assert_eq!(Category::Wiscar.id_prefix(), "wiscar_");
        assert_eq!("wiscar".parse::<Category>().unwrap(), Category::Wiscar);
        assert!("behavioral".parse::<Category>().is_err());
    }

    #[test]
    fn wiscar_dimension_parse() {
        assert_eq!(
            "ability_to_learn".parse::<WiscarDimension>().unwrap(),
            WiscarDimension::AbilityToLearn
        );
        assert_eq!(
            "real_world_fit".parse::<WiscarDimension>().unwrap(),
            WiscarDimension::RealWorldFit
        );
        assert!("luck".parse::<WiscarDimension>().is_err());
        assert_eq!(WiscarDimension::ALL.len(), 6);
    }

    #[test]
    fn question_serde_roundtrip() {
        let question = Question {
            id: "tech_1".into(),
            text: "What does CTR stand for?".into(),
            kind: QuestionKind::MultipleChoice,
            category: Category::Technical,
            options: vec!["Click-Through Rate".into(), "Customer Transaction Rate".into()],
            likert_labels: None,
            scenario: None,
            wiscar_dimension: None,
        };
        let json = serde_json::to_string(&question).unwrap();
        let deserialized: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "tech_1");
        assert_eq!(deserialized.kind, QuestionKind::MultipleChoice);
        assert!(deserialized.is_choice());
    }

    #[test]
    fn wiscar_dimension_serde_uses_snake_case() {
        let json = serde_json::to_string(&WiscarDimension::AbilityToLearn).unwrap();
        assert_eq!(json, "\"ability_to_learn\"");
        let parsed: WiscarDimension = serde_json::from_str("\"real_world_fit\"").unwrap();
        assert_eq!(parsed, WiscarDimension::RealWorldFit);
    }
}

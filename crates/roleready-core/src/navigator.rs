//! Question-flow state machine.
//!
//! The navigator owns traversal state over the bank's fixed, ordered,
//! three-section question set: it advances and retreats one question at a
//! time and records answers as the candidate progresses. When traversal
//! reaches the terminal state the accumulated answers are handed to the
//! scorer and the results stored.
//!
//! The navigator does not gate forward navigation on the current question
//! being answered; that policy belongs to the presentation layer driving
//! it (see [`Navigator::current_answer`]).

use crate::error::AssessmentError;
use crate::model::{Answer, Category, Question, QuestionBank};
use crate::results::{score_assessment, AssessmentResults};
use crate::scoring::score_value;

/// Where the candidate currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Zero-based (section, question) indices.
    InProgress { section: usize, question: usize },
    /// All sections finished; results are available.
    Complete,
}

/// Presentation-layer snapshot of traversal progress.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Zero-based index of the current section.
    pub section_index: usize,
    /// Total number of sections.
    pub section_count: usize,
    /// Title of the current section.
    pub section_name: &'static str,
    /// Zero-based index of the current question within its section.
    pub question_index: usize,
    /// Number of questions in the current section.
    pub section_len: usize,
    /// Questions answered so far across all sections.
    pub answered: usize,
    /// Total questions in the bank.
    pub total: usize,
}

/// One section: a category's questions in bank source order.
#[derive(Debug, Clone)]
struct Section {
    category: Category,
    /// Indices into the bank's question list.
    question_indices: Vec<usize>,
}

/// The question-flow state machine for one assessment session.
#[derive(Debug)]
pub struct Navigator<'bank> {
    bank: &'bank QuestionBank,
    sections: Vec<Section>,
    position: Position,
    answers: Vec<Answer>,
    results: Option<AssessmentResults>,
}

impl<'bank> Navigator<'bank> {
    /// Start a new session at the first question of the first section.
    ///
    /// Section groupings are derived once from the bank and immutable for
    /// the session. Categories with no questions are skipped; a bank with
    /// no questions at all starts in the terminal state with no results.
    pub fn new(bank: &'bank QuestionBank) -> Self {
        let sections: Vec<Section> = Category::ALL
            .iter()
            .map(|category| Section {
                category: *category,
                question_indices: bank
                    .questions
                    .iter()
                    .enumerate()
                    .filter(|(_, q)| q.category == *category)
                    .map(|(i, _)| i)
                    .collect(),
            })
            .filter(|s| !s.question_indices.is_empty())
            .collect();

        let position = if sections.is_empty() {
            Position::Complete
        } else {
            Position::InProgress {
                section: 0,
                question: 0,
            }
        };

        Self {
            bank,
            sections,
            position,
            answers: Vec::new(),
            results: None,
        }
    }

    /// Current position in the traversal.
    pub fn position(&self) -> Position {
        self.position
    }

    /// `true` once the terminal state has been reached.
    pub fn is_complete(&self) -> bool {
        self.position == Position::Complete
    }

    /// `true` while `advance()` is a defined transition.
    pub fn can_advance(&self) -> bool {
        !self.is_complete()
    }

    /// The question at the current position; `None` when complete.
    pub fn current_question(&self) -> Option<&Question> {
        let Position::InProgress { section, question } = self.position else {
            return None;
        };
        let index = *self.sections.get(section)?.question_indices.get(question)?;
        self.bank.questions.get(index)
    }

    /// The live answer for the current question, if one was recorded.
    ///
    /// Presentation layers use this to block forward navigation on
    /// unanswered questions.
    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.answers.iter().find(|a| a.question_id == question.id)
    }

    /// All recorded answers, in recording order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Number of questions with a live answer.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Total number of questions across all sections.
    pub fn total_questions(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.question_indices.len())
            .sum()
    }

    /// The final results; `Some` only after completion.
    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    /// Progress snapshot for rendering; `None` when complete.
    pub fn progress(&self) -> Option<Progress> {
        let Position::InProgress { section, question } = self.position else {
            return None;
        };
        let current = self.sections.get(section)?;
        Some(Progress {
            section_index: section,
            section_count: self.sections.len(),
            section_name: current.category.section_name(),
            question_index: question,
            section_len: current.question_indices.len(),
            answered: self.answers.len(),
            total: self.total_questions(),
        })
    }

    /// Record an answer for the current question, replacing any earlier
    /// answer for the same question id.
    ///
    /// Recording never advances the position; advancing is a separate,
    /// caller-triggered transition.
    pub fn record_answer(&mut self, value: u32) -> Result<(), AssessmentError> {
        let question = self.current_question().ok_or(
            AssessmentError::InvalidTransition("cannot record an answer after completion"),
        )?;

        let rule = self.bank.scoring.rule_for(&question.id);
        let answer = Answer {
            question_id: question.id.clone(),
            value,
            score: score_value(question, rule, value),
        };

        // At most one live answer per question id
        self.answers.retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
        Ok(())
    }

    /// Move to the next question, the next section, or the terminal state.
    ///
    /// Reaching the terminal state invokes the scorer on the full answer
    /// list and stores the results. Advancing from the terminal state is
    /// an `InvalidTransition`; callers gate on [`Navigator::can_advance`].
    pub fn advance(&mut self) -> Result<(), AssessmentError> {
        let Position::InProgress { section, question } = self.position else {
            return Err(AssessmentError::InvalidTransition(
                "cannot advance past the terminal state",
            ));
        };

        let section_len = self.sections[section].question_indices.len();
        if question + 1 < section_len {
            self.position = Position::InProgress {
                section,
                question: question + 1,
            };
        } else if section + 1 < self.sections.len() {
            self.position = Position::InProgress {
                section: section + 1,
                question: 0,
            };
        } else {
            // Score first so a failure leaves the state unchanged
            let results = score_assessment(self.bank, &self.answers)?;
            tracing::debug!(
                overall = results.overall_confidence,
                recommendation = %results.recommendation,
                "assessment complete"
            );
            self.results = Some(results);
            self.position = Position::Complete;
        }
        Ok(())
    }

    /// Move back one question, or to the end of the previous section.
    ///
    /// Retreating from the first question of the first section is a
    /// no-op, as is retreating from the terminal state.
    pub fn retreat(&mut self) {
        let Position::InProgress { section, question } = self.position else {
            return;
        };

        if question > 0 {
            self.position = Position::InProgress {
                section,
                question: question - 1,
            };
        } else if section > 0 {
            let previous = section - 1;
            self.position = Position::InProgress {
                section: previous,
                question: self.sections[previous].question_indices.len() - 1,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionKind, WiscarDimension};
    use crate::results::Recommendation;
    use crate::scoring::{ScoringRule, ScoringTable};

    fn question(
        id: &str,
        kind: QuestionKind,
        category: Category,
        dimension: Option<WiscarDimension>,
    ) -> Question {
        Question {
            id: id.into(),
            text: format!("question {id}"),
            kind,
            category,
            options: if kind == QuestionKind::Likert {
                vec![]
            } else {
                vec!["a".into(), "b".into(), "c".into(), "d".into()]
            },
            likert_labels: None,
            scenario: None,
            wiscar_dimension: dimension,
        }
    }

    /// Two questions per section.
    fn small_bank() -> QuestionBank {
        let mut scoring = ScoringTable::new();
        scoring.insert("tech_1", ScoringRule::Keyed { correct_index: 0 });
        scoring.insert("tech_2", ScoringRule::Keyed { correct_index: 2 });

        QuestionBank {
            id: "small".into(),
            name: "Small Bank".into(),
            role: "Role".into(),
            description: String::new(),
            questions: vec![
                question("psych_1", QuestionKind::Likert, Category::Psychometric, None),
                question("psych_2", QuestionKind::Likert, Category::Psychometric, None),
                question(
                    "tech_1",
                    QuestionKind::MultipleChoice,
                    Category::Technical,
                    None,
                ),
                question(
                    "tech_2",
                    QuestionKind::MultipleChoice,
                    Category::Technical,
                    None,
                ),
                question(
                    "wiscar_will_1",
                    QuestionKind::Likert,
                    Category::Wiscar,
                    Some(WiscarDimension::Will),
                ),
                question(
                    "wiscar_interest_1",
                    QuestionKind::Likert,
                    Category::Wiscar,
                    Some(WiscarDimension::Interest),
                ),
            ],
            scoring,
        }
    }

    #[test]
    fn traversal_visits_every_question_once_in_order() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        let total = nav.total_questions();
        assert_eq!(total, 6);

        let mut visited = Vec::new();
        for _ in 0..total {
            assert!(!nav.is_complete());
            visited.push(nav.current_question().unwrap().id.clone());
            nav.record_answer(3).unwrap();
            nav.advance().unwrap();
        }

        assert!(nav.is_complete());
        assert_eq!(
            visited,
            vec![
                "psych_1",
                "psych_2",
                "tech_1",
                "tech_2",
                "wiscar_will_1",
                "wiscar_interest_1"
            ]
        );
    }

    #[test]
    fn advance_crosses_section_boundary() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        assert_eq!(
            nav.position(),
            Position::InProgress {
                section: 0,
                question: 0
            }
        );

        nav.advance().unwrap();
        nav.advance().unwrap();
        assert_eq!(
            nav.position(),
            Position::InProgress {
                section: 1,
                question: 0
            }
        );
        assert_eq!(nav.current_question().unwrap().id, "tech_1");
    }

    #[test]
    fn retreat_then_advance_restores_position() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        for _ in 0..3 {
            nav.advance().unwrap();
        }
        let original = nav.position();

        nav.retreat();
        assert_ne!(nav.position(), original);
        nav.advance().unwrap();
        assert_eq!(nav.position(), original);
    }

    #[test]
    fn retreat_crosses_section_boundary_to_last_question() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        nav.advance().unwrap();
        nav.advance().unwrap();
        assert_eq!(nav.current_question().unwrap().id, "tech_1");

        nav.retreat();
        assert_eq!(nav.current_question().unwrap().id, "psych_2");
    }

    #[test]
    fn retreat_at_origin_is_a_noop() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        nav.retreat();
        assert_eq!(
            nav.position(),
            Position::InProgress {
                section: 0,
                question: 0
            }
        );
    }

    #[test]
    fn recording_twice_replaces_the_answer() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);

        nav.record_answer(2).unwrap();
        nav.record_answer(4).unwrap();

        assert_eq!(nav.answered_count(), 1);
        let answer = nav.current_answer().unwrap();
        assert_eq!(answer.value, 4);
        assert_eq!(answer.score, 4);
    }

    #[test]
    fn revisiting_a_question_shows_its_live_answer() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);

        nav.record_answer(5).unwrap();
        nav.advance().unwrap();
        assert!(nav.current_answer().is_none());

        nav.retreat();
        assert_eq!(nav.current_answer().unwrap().value, 5);
    }

    #[test]
    fn completion_invokes_the_scorer() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        let total = nav.total_questions();

        for _ in 0..total {
            let q = nav.current_question().unwrap();
            let value = if q.is_choice() {
                match bank.scoring.rule_for(&q.id) {
                    ScoringRule::Keyed { correct_index } => correct_index,
                    _ => 0,
                }
            } else {
                5
            };
            nav.record_answer(value).unwrap();
            nav.advance().unwrap();
        }

        let results = nav.results().unwrap();
        assert_eq!(results.psych_fit_score, 100);
        assert_eq!(results.tech_score, 100);
        assert_eq!(results.recommendation, Recommendation::Yes);
    }

    #[test]
    fn advance_from_terminal_state_is_rejected() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        for _ in 0..nav.total_questions() {
            nav.record_answer(3).unwrap();
            nav.advance().unwrap();
        }

        assert!(!nav.can_advance());
        let err = nav.advance().unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidTransition(_)));

        let err = nav.record_answer(3).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidTransition(_)));
    }

    #[test]
    fn final_advance_without_answers_fails_and_stays_in_progress() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);
        for _ in 0..nav.total_questions() - 1 {
            nav.advance().unwrap();
        }

        let err = nav.advance().unwrap_err();
        assert!(matches!(err, AssessmentError::EmptyAnswerSet));
        assert!(!nav.is_complete());
        assert!(nav.results().is_none());
    }

    #[test]
    fn progress_snapshot_tracks_traversal() {
        let bank = small_bank();
        let mut nav = Navigator::new(&bank);

        let p = nav.progress().unwrap();
        assert_eq!(p.section_index, 0);
        assert_eq!(p.section_count, 3);
        assert_eq!(p.section_name, "Personality & Motivation");
        assert_eq!(p.total, 6);
        assert_eq!(p.answered, 0);

        nav.record_answer(3).unwrap();
        nav.advance().unwrap();
        nav.advance().unwrap();

        let p = nav.progress().unwrap();
        assert_eq!(p.section_index, 1);
        assert_eq!(p.section_name, "Technical Knowledge");
        assert_eq!(p.answered, 1);
    }

    #[test]
    fn empty_bank_starts_complete_without_results() {
        let bank = QuestionBank {
            id: "empty".into(),
            name: "Empty".into(),
            role: "Role".into(),
            description: String::new(),
            questions: vec![],
            scoring: ScoringTable::new(),
        };
        let nav = Navigator::new(&bank);
        assert!(nav.is_complete());
        assert!(nav.results().is_none());
    }
}

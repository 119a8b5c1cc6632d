//! The `roleready take` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use roleready_core::bank::{load_bank, validate_bank};
use roleready_core::model::Question;
use roleready_core::navigator::Navigator;
use roleready_core::report::AssessmentReport;

pub fn execute(bank_path: PathBuf, output: PathBuf, format: String) -> Result<()> {
    let bank = load_bank(&bank_path)?;

    let warnings = validate_bank(&bank);
    if !warnings.is_empty() {
        eprintln!(
            "Warning: bank has {} validation warning(s); run `roleready validate` for details.",
            warnings.len()
        );
    }

    println!("{} — {}", bank.name, bank.role);
    if !bank.description.is_empty() {
        println!("{}", bank.description);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut nav = Navigator::new(&bank);
    let mut last_section = usize::MAX;

    while !nav.is_complete() {
        let Some(progress) = nav.progress() else {
            break;
        };

        if progress.section_index != last_section {
            println!(
                "\n=== {} (section {}/{}) ===",
                progress.section_name,
                progress.section_index + 1,
                progress.section_count
            );
            last_section = progress.section_index;
        }

        let question = nav
            .current_question()
            .cloned()
            .context("no current question while in progress")?;

        print_question(&question, progress.question_index + 1, progress.section_len);

        // Reprompt until a valid answer (or a back command) arrives
        loop {
            print!("> ");
            io::stdout().flush()?;

            let line = lines
                .next()
                .context("input ended before the assessment was finished")??;
            let input = line.trim();

            if input.eq_ignore_ascii_case("b") || input.eq_ignore_ascii_case("back") {
                nav.retreat();
                break;
            }

            match parse_answer(&question, input) {
                Some(value) => {
                    nav.record_answer(value)?;
                    nav.advance()?;
                    break;
                }
                None => {
                    println!("{}", answer_hint(&question));
                }
            }
        }
    }

    let results = nav
        .results()
        .cloned()
        .context("assessment finished without results")?;
    let report = AssessmentReport::new(&bank, nav.answers().to_vec(), results);

    super::print_summary(&report);
    super::save_report(&report, &output, &format)?;

    Ok(())
}

fn print_question(question: &Question, number: usize, section_len: usize) {
    println!("\n[{number}/{section_len}] {}", question.text);

    if let Some(scenario) = &question.scenario {
        println!("  Scenario: {scenario}");
    }

    if question.is_choice() {
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
    } else if let Some(labels) = &question.likert_labels {
        println!("  1 = {}, 5 = {}", labels.min, labels.max);
    }
    println!("  (enter 'b' to go back)");
}

/// Parse a 1-based console answer into the raw value domain: the Likert
/// rating itself, or a zero-based option index for choice questions.
fn parse_answer(question: &Question, input: &str) -> Option<u32> {
    let n: u32 = input.parse().ok()?;

    if question.is_choice() {
        if n >= 1 && (n as usize) <= question.options.len() {
            Some(n - 1)
        } else {
            None
        }
    } else if (1..=5).contains(&n) {
        Some(n)
    } else {
        None
    }
}

fn answer_hint(question: &Question) -> String {
    if question.is_choice() {
        format!("Please enter a number from 1 to {}.", question.options.len())
    } else {
        "Please enter a rating from 1 to 5.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleready_core::model::{Category, QuestionKind};

    fn likert_question() -> Question {
        Question {
            id: "psych_1".into(),
            text: "A statement.".into(),
            kind: QuestionKind::Likert,
            category: Category::Psychometric,
            options: vec![],
            likert_labels: None,
            scenario: None,
            wiscar_dimension: None,
        }
    }

    fn choice_question() -> Question {
        Question {
            id: "tech_1".into(),
            text: "Pick one.".into(),
            kind: QuestionKind::MultipleChoice,
            category: Category::Technical,
            options: vec!["a".into(), "b".into(), "c".into()],
            likert_labels: None,
            scenario: None,
            wiscar_dimension: None,
        }
    }

    #[test]
    fn likert_input_passes_the_rating_through() {
        let q = likert_question();
        assert_eq!(parse_answer(&q, "1"), Some(1));
        assert_eq!(parse_answer(&q, "5"), Some(5));
        assert_eq!(parse_answer(&q, "0"), None);
        assert_eq!(parse_answer(&q, "6"), None);
        assert_eq!(parse_answer(&q, "x"), None);
    }

    #[test]
    fn choice_input_converts_to_zero_based_index() {
        let q = choice_question();
        assert_eq!(parse_answer(&q, "1"), Some(0));
        assert_eq!(parse_answer(&q, "3"), Some(2));
        assert_eq!(parse_answer(&q, "4"), None);
        assert_eq!(parse_answer(&q, "0"), None);
    }
}

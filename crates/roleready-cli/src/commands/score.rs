//! The `roleready score` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use roleready_core::bank::load_bank;
use roleready_core::report::AssessmentReport;
use roleready_core::results::score_assessment;
use roleready_core::scoring::score_response;

pub fn execute(
    bank_path: PathBuf,
    answers_path: PathBuf,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let bank = load_bank(&bank_path)?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    // BTreeMap keeps the scored answer order deterministic
    let raw: BTreeMap<String, u32> =
        serde_json::from_str(&content).context("failed to parse answers JSON")?;

    anyhow::ensure!(!raw.is_empty(), "answers file contains no answers");

    let answers = raw
        .iter()
        .map(|(id, value)| score_response(&bank, id, *value))
        .collect::<Result<Vec<_>, _>>()?;

    let answered = answers.len();
    let total = bank.questions.len();
    if answered < total {
        eprintln!("Note: {answered}/{total} questions answered; unanswered questions are skipped.");
    }

    let results = score_assessment(&bank, &answers)?;
    let report = AssessmentReport::new(&bank, answers, results);

    super::print_summary(&report);
    super::save_report(&report, &output, &format)?;

    Ok(())
}

//! TOML question-bank parser.
//!
//! Loads question banks from TOML files and directories, and validates
//! them. The scoring table rides along in the same file so a bank and its
//! correct-answer configuration are always shipped together.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, LikertLabels, Question, QuestionBank, QuestionKind};
use crate::scoring::{ScoringRule, ScoringTable};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    scoring: TomlScoring,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    role: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    kind: String,
    category: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    likert_labels: Option<TomlLikertLabels>,
    #[serde(default)]
    scenario: Option<String>,
    #[serde(default)]
    wiscar_dimension: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlLikertLabels {
    min: String,
    max: String,
}

#[derive(Debug, Default, Deserialize)]
struct TomlScoring {
    /// Question id -> correct option index.
    #[serde(default)]
    keyed: HashMap<String, u32>,
    /// Question ids scored best-option-first.
    #[serde(default)]
    inverse: Vec<String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    load_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn load_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
            let category: Category = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
            let wiscar_dimension = q
                .wiscar_dimension
                .map(|d| {
                    d.parse()
                        .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))
                })
                .transpose()?;

            if category == Category::Wiscar && wiscar_dimension.is_none() {
                anyhow::bail!(
                    "question '{}' has category 'wiscar' but no wiscar_dimension",
                    q.id
                );
            }

            Ok(Question {
                id: q.id,
                text: q.text,
                kind,
                category,
                options: q.options,
                likert_labels: q.likert_labels.map(|l| LikertLabels {
                    min: l.min,
                    max: l.max,
                }),
                scenario: q.scenario,
                wiscar_dimension,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scoring = ScoringTable::new();
    for (id, correct_index) in parsed.scoring.keyed {
        scoring.insert(id, ScoringRule::Keyed { correct_index });
    }
    for id in parsed.scoring.inverse {
        scoring.insert(id, ScoringRule::InverseIndex);
    }

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        role: parsed.bank.role,
        description: parsed.bank.description,
        questions,
        scoring,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match load_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question ids
    let mut seen_ids = std::collections::HashSet::new();
    for question in &bank.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question id: {}", question.id),
            });
        }
    }

    for question in &bank.questions {
        // Id prefix must encode the category
        if !question.id.starts_with(question.category.id_prefix()) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "id does not start with '{}' expected for category '{}'",
                    question.category.id_prefix(),
                    question.category
                ),
            });
        }

        if question.category != Category::Wiscar && question.wiscar_dimension.is_some() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "wiscar_dimension set on a non-wiscar question".into(),
            });
        }

        if question.is_choice() && question.options.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "choice question has no options".into(),
            });
        }

        if question.kind == QuestionKind::Likert && !question.options.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "likert question lists options, which are ignored".into(),
            });
        }

        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }
    }

    // Scoring table entries must reference known questions and stay in range
    for (id, rule) in bank.scoring.entries() {
        let Some(question) = bank.question(id) else {
            warnings.push(ValidationWarning {
                question_id: Some(id.to_string()),
                message: "scoring entry references unknown question id".into(),
            });
            continue;
        };

        match rule {
            ScoringRule::Keyed { correct_index } => {
                if correct_index as usize >= question.options.len() {
                    warnings.push(ValidationWarning {
                        question_id: Some(id.to_string()),
                        message: format!(
                            "correct_index {} out of range for {} option(s)",
                            correct_index,
                            question.options.len()
                        ),
                    });
                }
            }
            ScoringRule::InverseIndex => {
                // 5 - index bottoms out at 1 from the fifth option onward
                if question.options.len() > 5 {
                    warnings.push(ValidationWarning {
                        question_id: Some(id.to_string()),
                        message: format!(
                            "inverse-scored question has {} options; options past the fifth all score 1",
                            question.options.len()
                        ),
                    });
                }
            }
            ScoringRule::IndexOrder => {}
        }
    }

    warnings
}

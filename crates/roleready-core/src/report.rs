//! Assessment report types with JSON persistence and retake comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Answer, QuestionBank};
use crate::results::{AssessmentResults, Recommendation};

/// A complete record of one finished assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the bank that was taken.
    pub bank: BankSummary,
    /// The recorded answers.
    pub answers: Vec<Answer>,
    /// The scored outcome.
    pub results: AssessmentResults,
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub role: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Build a report for a finished assessment.
    pub fn new(bank: &QuestionBank, answers: Vec<Answer>, results: AssessmentResults) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                role: bank.role.clone(),
                question_count: bank.questions.len(),
            },
            answers,
            results,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against an earlier one from the same bank.
    ///
    /// Deltas are in percentage points; changes within `threshold` points
    /// count as unchanged.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u8) -> RetakeReport {
        let tracked = |r: &AssessmentReport| -> Vec<(String, u8)> {
            let mut scores = vec![
                ("Personality Fit".to_string(), r.results.psych_fit_score),
                ("Technical Knowledge".to_string(), r.results.tech_score),
                ("Overall Confidence".to_string(), r.results.overall_confidence),
            ];
            for (dimension, score) in r.results.wiscar.iter() {
                scores.push((format!("WISCAR: {}", dimension.label()), score));
            }
            scores
        };

        let baseline_scores = tracked(baseline);
        let current_scores = tracked(self);

        let mut improvements = Vec::new();
        let mut declines = Vec::new();
        let mut unchanged = 0usize;

        for ((label, current), (_, base)) in current_scores.into_iter().zip(baseline_scores) {
            let delta = i16::from(current) - i16::from(base);
            if delta > i16::from(threshold) {
                improvements.push(ScoreDelta {
                    dimension: label,
                    baseline: base,
                    current,
                    delta,
                });
            } else if delta < -i16::from(threshold) {
                declines.push(ScoreDelta {
                    dimension: label,
                    baseline: base,
                    current,
                    delta,
                });
            } else {
                unchanged += 1;
            }
        }

        RetakeReport {
            baseline_recommendation: baseline.results.recommendation,
            current_recommendation: self.results.recommendation,
            improvements,
            declines,
            unchanged,
        }
    }
}

/// Result of comparing two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetakeReport {
    /// Verdict of the earlier attempt.
    pub baseline_recommendation: Recommendation,
    /// Verdict of the current attempt.
    pub current_recommendation: Recommendation,
    /// Dimensions where the score went up.
    pub improvements: Vec<ScoreDelta>,
    /// Dimensions where the score went down.
    pub declines: Vec<ScoreDelta>,
    /// Dimensions with no significant change.
    pub unchanged: usize,
}

/// A tracked dimension's change between two attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub dimension: String,
    pub baseline: u8,
    pub current: u8,
    /// Percentage-point change, current minus baseline.
    pub delta: i16,
}

impl RetakeReport {
    /// Format the retake comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} improved, {} declined, {} unchanged (verdict {} -> {})\n\n",
            self.improvements.len(),
            self.declines.len(),
            self.unchanged,
            self.baseline_recommendation,
            self.current_recommendation
        ));

        if !self.improvements.is_empty() {
            md.push_str("### Improvements\n\n");
            md.push_str("| Dimension | Baseline | Current | Delta |\n");
            md.push_str("|-----------|----------|---------|-------|\n");
            for d in &self.improvements {
                md.push_str(&format!(
                    "| {} | {}% | {}% | +{} |\n",
                    d.dimension, d.baseline, d.current, d.delta
                ));
            }
            md.push('\n');
        }

        if !self.declines.is_empty() {
            md.push_str("### Declines\n\n");
            md.push_str("| Dimension | Baseline | Current | Delta |\n");
            md.push_str("|-----------|----------|---------|-------|\n");
            for d in &self.declines {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {} |\n",
                    d.dimension, d.baseline, d.current, d.delta
                ));
            }
        }

        md
    }

    /// Returns `true` if any tracked dimension declined.
    pub fn has_declines(&self) -> bool {
        !self.declines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{LearningPath, WiscarScores};

    fn make_results(psych: u8, tech: u8, wiscar_all: u8) -> AssessmentResults {
        let wiscar = WiscarScores {
            will: wiscar_all,
            interest: wiscar_all,
            skill: wiscar_all,
            cognitive: wiscar_all,
            ability_to_learn: wiscar_all,
            real_world_fit: wiscar_all,
        };
        let overall = ((f64::from(psych) + f64::from(tech) + wiscar.average()) / 3.0).round() as u8;
        AssessmentResults {
            psych_fit_score: psych,
            tech_score: tech,
            wiscar,
            overall_confidence: overall,
            recommendation: Recommendation::for_confidence(overall),
            skill_gaps: vec![],
            next_steps: vec!["step".into()],
            career_matches: vec!["match".into()],
            learning_path: LearningPath::for_confidence(overall),
        }
    }

    fn make_report(results: AssessmentResults) -> AssessmentReport {
        AssessmentReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: "test".into(),
                name: "Test".into(),
                role: "Role".into(),
                question_count: 18,
            },
            answers: vec![],
            results,
        }
    }

    #[test]
    fn compare_identical_reports() {
        let baseline = make_report(make_results(80, 80, 80));
        let current = make_report(make_results(80, 80, 80));

        let retake = current.compare(&baseline, 5);
        assert!(retake.improvements.is_empty());
        assert!(retake.declines.is_empty());
        assert_eq!(retake.unchanged, 9);
    }

    #[test]
    fn compare_detects_improvement_and_decline() {
        let baseline = make_report(make_results(40, 80, 60));
        let current = make_report(make_results(80, 40, 60));

        let retake = current.compare(&baseline, 5);
        assert!(retake
            .improvements
            .iter()
            .any(|d| d.dimension == "Personality Fit" && d.delta == 40));
        assert!(retake
            .declines
            .iter()
            .any(|d| d.dimension == "Technical Knowledge" && d.delta == -40));
        assert!(retake.has_declines());
    }

    #[test]
    fn compare_respects_threshold() {
        let baseline = make_report(make_results(70, 70, 70));
        let current = make_report(make_results(74, 70, 70));

        // A 4-point change is within a 5-point threshold
        let retake = current.compare(&baseline, 5);
        assert!(retake.improvements.is_empty());

        let retake = current.compare(&baseline, 3);
        assert_eq!(retake.improvements.len(), 1);
    }

    #[test]
    fn markdown_output_lists_deltas() {
        let baseline = make_report(make_results(80, 80, 80));
        let current = make_report(make_results(40, 80, 80));

        let md = current.compare(&baseline, 5).to_markdown();
        assert!(md.contains("Declines"));
        assert!(md.contains("Personality Fit"));
        assert!(md.contains("-40"));
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(make_results(85, 90, 80));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(loaded.bank.id, "test");
        assert_eq!(loaded.results.psych_fit_score, 85);
        assert_eq!(loaded.results.recommendation, Recommendation::Yes);
    }
}

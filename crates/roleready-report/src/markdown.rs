//! Markdown report generator.

use std::path::Path;

use anyhow::{Context, Result};

use roleready_core::report::AssessmentReport;

/// Render an assessment report as markdown.
pub fn render_markdown(report: &AssessmentReport) -> String {
    let results = &report.results;
    let mut md = String::new();

    md.push_str(&format!("# Assessment Results — {}\n\n", report.bank.role));
    md.push_str(&format!(
        "Bank: **{}** | {} questions | {}\n\n",
        report.bank.name,
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&format!(
        "## Verdict: {} — Overall Confidence {}%\n\n{}\n\n",
        results.recommendation,
        results.overall_confidence,
        results.recommendation.headline()
    ));

    md.push_str("## Scores\n\n");
    md.push_str("| Component | Score |\n");
    md.push_str("|-----------|-------|\n");
    md.push_str(&format!("| Personality Fit | {}% |\n", results.psych_fit_score));
    md.push_str(&format!("| Technical Knowledge | {}% |\n", results.tech_score));
    md.push_str(&format!(
        "| Overall Confidence | {}% |\n\n",
        results.overall_confidence
    ));

    md.push_str("## WISCAR Framework Analysis\n\n");
    md.push_str("| Dimension | Score |\n");
    md.push_str("|-----------|-------|\n");
    for (dimension, score) in results.wiscar.iter() {
        md.push_str(&format!("| {} | {}% |\n", dimension.label(), score));
    }
    md.push('\n');

    md.push_str("## Recommended Careers\n\n");
    for career in &results.career_matches {
        md.push_str(&format!("- {career}\n"));
    }
    md.push('\n');

    md.push_str(&format!("## Learning Path\n\n{}\n\n", results.learning_path));

    if !results.skill_gaps.is_empty() {
        md.push_str("## Areas for Improvement\n\n");
        for gap in &results.skill_gaps {
            md.push_str(&format!("- {gap}\n"));
        }
        md.push('\n');
    }

    md.push_str("## Recommended Next Steps\n\n");
    for (i, step) in results.next_steps.iter().enumerate() {
        md.push_str(&format!("{}. {step}\n", i + 1));
    }

    md
}

/// Render and write a markdown report to a file.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let md = render_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write markdown report to {}", path.display()))?;
    Ok(())
}

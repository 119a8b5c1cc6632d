pub mod compare;
pub mod init;
pub mod score;
pub mod take;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use roleready_core::report::AssessmentReport;
use roleready_report::html::write_html_report;
use roleready_report::markdown::write_markdown_report;

/// Print the results summary table shared by `take` and `score`.
pub(crate) fn print_summary(report: &AssessmentReport) {
    let results = &report.results;

    let mut table = Table::new();
    table.set_header(vec!["Component", "Score"]);
    table.add_row(vec![
        Cell::new("Personality Fit"),
        Cell::new(format!("{}%", results.psych_fit_score)),
    ]);
    table.add_row(vec![
        Cell::new("Technical Knowledge"),
        Cell::new(format!("{}%", results.tech_score)),
    ]);
    for (dimension, score) in results.wiscar.iter() {
        table.add_row(vec![
            Cell::new(format!("WISCAR: {}", dimension.label())),
            Cell::new(format!("{score}%")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall Confidence"),
        Cell::new(format!("{}%", results.overall_confidence)),
    ]);

    println!("\n{table}");
    println!(
        "\nRecommendation: {} - {}",
        results.recommendation,
        results.recommendation.headline()
    );
    println!("Learning path: {}", results.learning_path);

    println!("\nCareer matches:");
    for career in &results.career_matches {
        println!("  - {career}");
    }

    if !results.skill_gaps.is_empty() {
        println!("\nAreas for improvement:");
        for gap in &results.skill_gaps {
            println!("  - {gap}");
        }
    }

    println!("\nNext steps:");
    for (i, step) in results.next_steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
}

/// Write the report in the requested format(s) under `output`.
pub(crate) fn save_report(report: &AssessmentReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("report-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

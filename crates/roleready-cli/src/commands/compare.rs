//! The `roleready compare` command.

use std::path::PathBuf;

use anyhow::Result;

use roleready_core::report::AssessmentReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u8,
    fail_on_decline: bool,
    format: String,
) -> Result<()> {
    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    if baseline.bank.id != current.bank.id {
        eprintln!(
            "Warning: comparing reports from different banks ('{}' vs '{}')",
            baseline.bank.id, current.bank.id
        );
    }

    let retake = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", retake.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&retake)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} improved, {} declined, {} unchanged",
                retake.improvements.len(),
                retake.declines.len(),
                retake.unchanged
            );
            println!(
                "Verdict: {} -> {}",
                retake.baseline_recommendation, retake.current_recommendation
            );

            if !retake.improvements.is_empty() {
                println!("\nImprovements:");
                for d in &retake.improvements {
                    println!(
                        "  {} {}% -> {}% (+{})",
                        d.dimension, d.baseline, d.current, d.delta
                    );
                }
            }

            if !retake.declines.is_empty() {
                println!("\nDeclines:");
                for d in &retake.declines {
                    println!(
                        "  {} {}% -> {}% ({})",
                        d.dimension, d.baseline, d.current, d.delta
                    );
                }
            }
        }
    }

    if fail_on_decline && retake.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}

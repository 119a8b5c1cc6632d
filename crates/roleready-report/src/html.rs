//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};

use roleready_core::report::AssessmentReport;
use roleready_core::results::Recommendation;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn score_bar(label: &str, score: u8) -> String {
    format!(
        "<div class=\"score\"><span class=\"label\">{}</span>\
         <span class=\"pct\">{}%</span>\
         <div class=\"track\"><div class=\"fill\" style=\"width:{}%\"></div></div></div>\n",
        html_escape(label),
        score,
        score
    )
}

/// Generate an HTML report.
pub fn render_html(report: &AssessmentReport) -> String {
    let results = &report.results;
    let verdict_class = match results.recommendation {
        Recommendation::Yes => "yes",
        Recommendation::Maybe => "maybe",
        Recommendation::No => "no",
    };

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Assessment results — {}</title>\n",
        html_escape(&report.bank.role)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Your Assessment Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Role: <strong>{}</strong> | {} questions | {}</p>\n",
        html_escape(&report.bank.role),
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Verdict
    html.push_str("<section class=\"verdict\">\n");
    html.push_str(&format!(
        "<div class=\"badge {}\">{}</div>\n",
        verdict_class, results.recommendation
    ));
    html.push_str(&format!(
        "<h2>Overall Confidence: {}%</h2>\n<p>{}</p>\n",
        results.overall_confidence,
        html_escape(results.recommendation.headline())
    ));
    html.push_str("</section>\n");

    // Score breakdown
    html.push_str("<section class=\"scores\">\n<h2>Scores</h2>\n");
    html.push_str(&score_bar("Personality Fit", results.psych_fit_score));
    html.push_str(&score_bar("Technical Knowledge", results.tech_score));
    html.push_str(&score_bar("Overall Confidence", results.overall_confidence));
    html.push_str("</section>\n");

    // WISCAR
    html.push_str("<section class=\"wiscar\">\n<h2>WISCAR Framework Analysis</h2>\n");
    for (dimension, score) in results.wiscar.iter() {
        html.push_str(&score_bar(dimension.label(), score));
    }
    html.push_str("</section>\n");

    // Careers and learning path
    html.push_str("<section class=\"careers\">\n<h2>Recommended Careers</h2>\n<ul>\n");
    for career in &results.career_matches {
        html.push_str(&format!("<li>{}</li>\n", html_escape(career)));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<h2>Learning Path</h2>\n<p class=\"path\">{}</p>\n",
        results.learning_path
    ));
    html.push_str("</section>\n");

    // Gaps and next steps
    if !results.skill_gaps.is_empty() {
        html.push_str("<section class=\"gaps\">\n<h2>Areas for Improvement</h2>\n<ul>\n");
        for gap in &results.skill_gaps {
            html.push_str(&format!("<li>{}</li>\n", html_escape(gap)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("<section class=\"steps\">\n<h2>Recommended Next Steps</h2>\n<ol>\n");
    for step in &results.next_steps {
        html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
    }
    html.push_str("</ol>\n</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Render and write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = render_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; max-width: 860px;
       margin: 0 auto; padding: 2rem; color: #1a1a2e; background: #f7f7fb; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #666; }
section { background: #fff; border-radius: 8px; padding: 1.25rem 1.5rem; margin: 1rem 0;
          box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.badge { display: inline-block; padding: 0.3rem 1.2rem; border-radius: 999px;
         font-weight: 700; color: #fff; }
.badge.yes { background: #1d9a6c; }
.badge.maybe { background: #d9a514; }
.badge.no { background: #c0392b; }
.score { display: grid; grid-template-columns: 12rem 3.5rem 1fr; align-items: center;
         gap: 0.75rem; margin: 0.4rem 0; }
.score .label { font-weight: 500; }
.score .pct { text-align: right; font-variant-numeric: tabular-nums; }
.track { background: #e8e8f0; border-radius: 999px; height: 0.5rem; overflow: hidden; }
.fill { background: linear-gradient(90deg, #5b6cff, #9a5bff); height: 100%; }
.path { font-size: 1.1rem; font-weight: 600; color: #5b6cff; }
pre { overflow-x: auto; background: #f1f1f6; padding: 1rem; border-radius: 6px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use roleready_core::model::QuestionBank;
    use roleready_core::results::{AssessmentResults, LearningPath, WiscarScores};
    use roleready_core::scoring::ScoringTable;

    fn sample_report(recommendation: Recommendation) -> AssessmentReport {
        let bank = QuestionBank {
            id: "smm".into(),
            name: "Social Media Manager Readiness".into(),
            role: "Social Media <Manager>".into(),
            description: String::new(),
            questions: vec![],
            scoring: ScoringTable::new(),
        };
        let results = AssessmentResults {
            psych_fit_score: 76,
            tech_score: 60,
            wiscar: WiscarScores {
                will: 80,
                interest: 90,
                skill: 60,
                cognitive: 70,
                ability_to_learn: 85,
                real_world_fit: 75,
            },
            overall_confidence: 71,
            recommendation,
            skill_gaps: vec!["Technical knowledge of social media tools and metrics".into()],
            next_steps: vec!["Take foundational social media marketing courses".into()],
            career_matches: vec!["Content Creator".into()],
            learning_path: LearningPath::BeginnerToIntermediate,
        };
        AssessmentReport::new(&bank, vec![], results)
    }

    #[test]
    fn html_escapes_role_and_contains_scores() {
        let html = render_html(&sample_report(Recommendation::Maybe));
        assert!(html.contains("Social Media &lt;Manager&gt;"));
        assert!(!html.contains("Social Media <Manager>"));
        assert!(html.contains("Overall Confidence: 71%"));
        assert!(html.contains("badge maybe"));
        assert!(html.contains("Beginner to Intermediate"));
    }

    #[test]
    fn html_escape_all_specials() {
        assert_eq!(
            html_escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn write_html_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        write_html_report(&sample_report(Recommendation::Yes), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("WISCAR Framework Analysis"));
    }
}

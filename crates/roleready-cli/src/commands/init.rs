//! The `roleready init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("banks")?;
    let starter_path = std::path::Path::new("banks/starter.toml");
    if starter_path.exists() {
        println!("banks/starter.toml already exists, skipping.");
    } else {
        std::fs::write(starter_path, STARTER_BANK)?;
        println!("Created banks/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit banks/starter.toml with your role's questions");
    println!("  2. Run: roleready validate --bank banks/starter.toml");
    println!("  3. Run: roleready take --bank banks/starter.toml");

    Ok(())
}

const STARTER_BANK: &str = r#"[bank]
id = "starter"
name = "Starter Assessment"
role = "Example Role"
description = "A minimal bank to copy from. One question per section."

[[questions]]
id = "psych_1"
text = "I enjoy the day-to-day work this role involves."
kind = "likert"
category = "psychometric"
likert_labels = { min = "Strongly Disagree", max = "Strongly Agree" }

[[questions]]
id = "tech_1"
text = "Which option is the correct one?"
kind = "multiple-choice"
category = "technical"
options = [
    "The correct answer",
    "A wrong answer",
    "Another wrong answer",
]

[[questions]]
id = "wiscar_will_1"
text = "I keep working on projects even when motivation dips."
kind = "likert"
category = "wiscar"
wiscar_dimension = "will"
likert_labels = { min = "Strongly Disagree", max = "Strongly Agree" }

[[questions]]
id = "wiscar_skill_1"
text = "How would you rate your current proficiency?"
kind = "multiple-choice"
category = "wiscar"
wiscar_dimension = "skill"
options = [
    "Expert",
    "Intermediate",
    "Beginner",
    "Novice",
]

[scoring]
keyed = { tech_1 = 0 }
inverse = ["wiscar_skill_1"]
"#;

//! roleready CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "roleready", version, about = "Career readiness assessment engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an assessment interactively
    Take {
        /// Path to a .toml question bank
        #[arg(long)]
        bank: PathBuf,

        /// Output directory for the report
        #[arg(long, default_value = "./roleready-results")]
        output: PathBuf,

        /// Report format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Score a pre-recorded answer file
    Score {
        /// Path to a .toml question bank
        #[arg(long)]
        bank: PathBuf,

        /// JSON file mapping question ids to raw answer values
        #[arg(long)]
        answers: PathBuf,

        /// Output directory for the report
        #[arg(long, default_value = "./roleready-results")]
        output: PathBuf,

        /// Report format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Compare two assessment reports from the same bank
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Percentage-point change below which a score counts as unchanged
        #[arg(long, default_value = "5")]
        threshold: u8,

        /// Exit code 1 if any tracked score declined
        #[arg(long)]
        fail_on_decline: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roleready=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            bank,
            output,
            format,
        } => commands::take::execute(bank, output, format),
        Commands::Score {
            bank,
            answers,
            output,
            format,
        } => commands::score::execute(bank, answers, output, format),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_decline, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

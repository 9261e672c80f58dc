//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rulelint",
    version,
    about = "Lint AI assistant rules and skill files",
    long_about = "rulelint — a small, fast CLI that audits .builderrules, .builder/rules/*.mdc, agents.md, and SKILL.md files for size, frontmatter, glob scope, naming, and duplication problems.\n\nConfiguration precedence: CLI > rulelint.toml > defaults.",
    after_help = "Examples:\n  rulelint lint\n  rulelint lint --output json --fail-on high\n  rulelint review --out REVIEW.md\n  rulelint ls",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current rulelint version.")]
    Version,
    /// Lint rules and skill files
    #[command(
        about = "Run lint checks",
        long_about = "Discover rules and skill files under the repository root and report findings. Exits 1 when a finding reaches the --fail-on severity.",
        after_help = "Examples:\n  rulelint lint\n  rulelint lint --repo-root ../app --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Fail on: critical|high|medium|low|never (default: critical)")]
        fail_on: Option<String>,
    },
    /// Write a Markdown review document
    #[command(
        about = "Render Markdown review",
        long_about = "Analyze the repository and render a review with summary counts, per-file sections, global issues, and an action plan.",
        after_help = "Examples:\n  rulelint review\n  rulelint review --out docs/rules-review.md"
    )]
    Review {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Write the review to this file instead of stdout")]
        out: Option<String>,
    },
    /// List discovered files
    #[command(
        about = "List discovered files",
        long_about = "Print every discovered rules or skill file with its kind and size."
    )]
    Ls {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List catalog rules
    #[command(
        about = "List rules",
        long_about = "Print every check with its id, default severity, and summary."
    )]
    Rules {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

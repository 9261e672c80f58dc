//! rulelint core library.
//!
//! Static analysis for AI coding-assistant configuration files:
//! `.builderrules`, `.builder/rules/*.mdc`, `agents.md`, and `SKILL.md`.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discovery`: Glob-based file discovery producing sources.
//! - `frontmatter`: Frontmatter/body splitting.
//! - `models`: Documents, findings, and reports.
//! - `checks`: The rule catalog.
//! - `lint`: The analyzer (`analyze`, `run_lint`).
//! - `review`: Markdown review rendering (`render`).
//! - `output`: Human/JSON printers.
//! - `utils`: Terminal helpers and logging setup.
pub mod checks;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod frontmatter;
pub mod lint;
pub mod models;
pub mod output;
pub mod review;
pub mod utils;

pub use lint::analyze;
pub use review::render;

//! Error taxonomy for rulelint.
//!
//! None of these abort a run. Core errors are turned into findings whose
//! message is the error's `Display`; configuration errors are printed as
//! notes and the run continues with defaults.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    /// Frontmatter opened with `---` on the first line but never closed.
    #[error("Frontmatter block opened with '---' but never closed; treating file as having no frontmatter")]
    MalformedFrontmatter,

    /// Discovery produced no rules or skill files.
    #[error("No rules files found (.builderrules, .builder/rules/*.mdc, agents.md, SKILL.md)")]
    EmptyInput,

    /// A discovered file could not be read.
    #[error("Could not read '{path}': {reason}")]
    UnreadableFile { path: String, reason: String },

    /// A config file exists but could not be loaded.
    #[error("Invalid config '{path}': {reason}")]
    Config { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LintError>;

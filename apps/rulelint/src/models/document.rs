//! Parsed rules/skill file.

use crate::frontmatter::{self, FrontmatterState};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Kind of configuration file, decided by its filename.
pub enum DocKind {
    RootRules,
    NestedRules,
    McdRule,
    AgentsFile,
    Skill,
}

impl DocKind {
    /// Classify a `/`-separated path. Typos that the wrong-filename check
    /// reports (`.builderrule`, `AGENTS.md`, `.md` under `.builder/rules/`)
    /// classify as the kind they were meant to be.
    pub fn classify(path: &str) -> Option<DocKind> {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty() && *p != ".").collect();
        let name = *parts.last()?;
        let lower = name.to_ascii_lowercase();

        if lower == "skill.md" {
            return Some(DocKind::Skill);
        }
        if name == ".builderrules" || name == ".builderrule" {
            return Some(if parts.len() == 1 {
                DocKind::RootRules
            } else {
                DocKind::NestedRules
            });
        }
        if lower.ends_with(".mdc") {
            return Some(DocKind::McdRule);
        }
        if lower == "agents.md" {
            return Some(DocKind::AgentsFile);
        }
        if lower.ends_with(".md") && in_rules_dir(&parts) {
            return Some(DocKind::McdRule);
        }
        None
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocKind::RootRules => "root rules",
            DocKind::NestedRules => "nested rules",
            DocKind::McdRule => "mdc rule",
            DocKind::AgentsFile => "agents",
            DocKind::Skill => "skill",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// True when the parent directories end in `.builder/rules` or sit below it.
pub(crate) fn in_rules_dir(parts: &[&str]) -> bool {
    let dirs = &parts[..parts.len().saturating_sub(1)];
    dirs.windows(2).any(|w| w[0] == ".builder" && w[1] == "rules")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One parsed file. Immutable after construction; size metrics always
/// derive from `raw_text`.
pub struct Document {
    path: String,
    kind: DocKind,
    #[serde(skip)]
    raw_text: String,
    frontmatter: FrontmatterState,
    #[serde(skip)]
    body: String,
    line_count: usize,
    char_count: usize,
}

impl Document {
    pub fn new(path: impl Into<String>, kind: DocKind, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let parsed = frontmatter::parse(&raw_text);
        Document {
            path: path.into(),
            kind,
            line_count: raw_text.lines().count(),
            char_count: raw_text.chars().count(),
            frontmatter: parsed.frontmatter,
            body: parsed.body,
            raw_text,
        }
    }

    /// Classify by filename and build. `None` for unrecognized names.
    pub fn from_path(path: impl Into<String>, raw_text: impl Into<String>) -> Option<Self> {
        let path = path.into();
        let kind = DocKind::classify(&path)?;
        Some(Document::new(path, kind, raw_text))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> DocKind {
        self.kind
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn frontmatter(&self) -> &FrontmatterState {
        &self.frontmatter
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

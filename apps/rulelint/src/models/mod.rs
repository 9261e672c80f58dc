//! Shared data models for analysis results.

pub mod document;

pub use document::{DocKind, Document};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Finding severity. Declaration order is rank order: `Critical` sorts first.
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "error" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" | "warning" | "warn" => Ok(Severity::Medium),
            "low" | "info" => Ok(Severity::Low),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single issue produced by one catalog rule.
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    /// Empty for repository-global findings.
    pub file_path: String,
    /// Paths a global finding refers to collectively.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
}

impl Finding {
    pub fn new(
        rule_id: &str,
        severity: Severity,
        file_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            severity,
            message: message.into(),
            file_path: file_path.into(),
            related: Vec::new(),
        }
    }

    pub fn global(rule_id: &str, severity: Severity, message: impl Into<String>) -> Self {
        Finding::new(rule_id, severity, String::new(), message)
    }

    pub fn with_related(mut self, related: Vec<String>) -> Self {
        self.related = related;
        self
    }

    pub fn is_global(&self) -> bool {
        self.file_path.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub files: usize,
}

impl Summary {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of one analysis run.
pub struct Report {
    documents: Vec<Document>,
    findings: Vec<Finding>,
}

impl Report {
    /// Findings must already be in report order; the analyzer sorts them.
    pub(crate) fn new(documents: Vec<Document>, findings: Vec<Finding>) -> Self {
        Report {
            documents,
            findings,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn findings_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.file_path == path)
    }

    pub fn global_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_global())
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary {
            files: self.documents.len(),
            ..Summary::default()
        };
        for f in &self.findings {
            match f.severity {
                Severity::Critical => s.critical += 1,
                Severity::High => s.high += 1,
                Severity::Medium => s.medium += 1,
                Severity::Low => s.low += 1,
            }
        }
        s
    }

    /// True when any finding is at least as severe as `threshold`.
    pub fn has_at_least(&self, threshold: Severity) -> bool {
        self.findings.iter().any(|f| f.severity <= threshold)
    }
}

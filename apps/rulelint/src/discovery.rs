//! File discovery for rules and skill files.
//!
//! Walks the repository root once with `walkdir`, pruning excluded
//! directories before descending into them, and reads each candidate. Paths
//! are returned relative to the root, `/`-separated, de-duplicated and sorted
//! so discovery order is stable across runs.

use crate::error::LintError;
use crate::models::document::in_rules_dir;
use glob::Pattern;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One discovered input: a path and its text or the read error.
pub struct Source {
    pub path: String,
    pub text: Result<String, LintError>,
}

impl Source {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            path: path.into(),
            text: Ok(text.into()),
        }
    }

    pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Source {
            text: Err(LintError::UnreadableFile {
                path: path.clone(),
                reason: reason.into(),
            }),
            path,
        }
    }
}

/// Directory-name matchers built from `[discovery].exclude`. Entries are
/// glob patterns (`build*`); ones that fail to compile match literally.
struct Excludes(Vec<(String, Option<Pattern>)>);

impl Excludes {
    fn new(entries: &[String]) -> Self {
        Excludes(
            entries
                .iter()
                .map(|e| (e.clone(), Pattern::new(e).ok()))
                .collect(),
        )
    }

    fn matches(&self, name: &str) -> bool {
        self.0.iter().any(|(raw, pat)| match pat {
            Some(p) => p.matches(name),
            None => raw == name,
        })
    }
}

fn should_walk(entry: &DirEntry, excludes: &Excludes) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    !excludes.matches(&entry.file_name().to_string_lossy())
}

/// Filenames discovery picks up. Kind assignment happens later in
/// `DocKind::classify`.
fn is_candidate(rel: &Path) -> bool {
    let path = display_path(rel);
    let parts: Vec<&str> = path.split('/').collect();
    let Some(name) = parts.last() else {
        return false;
    };
    let lower = name.to_ascii_lowercase();
    matches!(*name, ".builderrules" | ".builderrule")
        || lower == "agents.md"
        || lower == "skill.md"
        || (in_rules_dir(&parts) && (lower.ends_with(".mdc") || lower.ends_with(".md")))
}

/// Find candidate files under `root`, relative and sorted.
pub fn discover(root: &Path, excludes: &[String]) -> Vec<PathBuf> {
    let excludes = Excludes::new(excludes);
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| should_walk(e, &excludes));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unwalkable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let rel = pathdiff::diff_paths(&path, root).unwrap_or(path);
        if is_candidate(&rel) {
            found.insert(rel);
        }
    }
    debug!(root = %root.display(), count = found.len(), "discovery finished");
    found.into_iter().collect()
}

/// `/`-separated form of a relative path.
pub fn display_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(n) => Some(n.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Discover and read every candidate file. Read failures become unreadable
/// sources instead of aborting.
pub fn collect_sources(root: &Path, excludes: &[String]) -> Vec<Source> {
    discover(root, excludes)
        .par_iter()
        .map(|rel| {
            let path = display_path(rel);
            match fs::read_to_string(root.join(rel)) {
                Ok(text) => Source::new(path, text),
                Err(e) => {
                    debug!(path = %path, error = %e, "read failed");
                    Source::unreadable(path, e.to_string())
                }
            }
        })
        .collect()
}

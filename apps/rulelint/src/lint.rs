//! Analyzer: sources -> documents -> checks -> sorted `Report`.
//!
//! Per-file construction and checks run on the rayon pool and are collected
//! in input order. Global checks run after that join, since they need the
//! complete document set. Nothing here touches the filesystem; `run_lint`
//! wires discovery in front of `analyze` for the CLI.

use crate::checks::{self, ids};
use crate::config::{Effective, Settings};
use crate::discovery::{self, Source};
use crate::error::LintError;
use crate::models::{Document, Finding, Report, Severity};
use rayon::prelude::*;
use std::fs;
use tracing::debug;

/// Analyze already-read sources. Never fails; every problem is a finding.
pub fn analyze(sources: &[Source], settings: &Settings) -> Report {
    let per_file: Vec<(Option<Document>, Vec<Finding>)> = sources
        .par_iter()
        .map(|src| analyze_source(src, settings))
        .collect();

    let mut documents: Vec<Document> = Vec::with_capacity(per_file.len());
    let mut findings: Vec<Finding> = Vec::new();
    for (doc, mut found) in per_file {
        if let Some(d) = doc {
            documents.push(d);
        }
        findings.append(&mut found);
    }

    if documents.is_empty() {
        findings.push(Finding::global(
            ids::NO_RULES_FILES,
            Severity::Low,
            LintError::EmptyInput.to_string(),
        ));
    }
    findings.extend(checks::run_global_checks(&documents, &settings.thresholds));

    let findings = apply_overrides(findings, settings);
    let findings = sort_findings(findings, sources);
    debug!(
        documents = documents.len(),
        findings = findings.len(),
        "analysis finished"
    );
    Report::new(documents, findings)
}

fn analyze_source(src: &Source, settings: &Settings) -> (Option<Document>, Vec<Finding>) {
    let text = match &src.text {
        Ok(t) => t,
        Err(e) => {
            return (
                None,
                vec![Finding::new(
                    ids::UNREADABLE_FILE,
                    Severity::High,
                    src.path.as_str(),
                    e.to_string(),
                )],
            )
        }
    };
    match Document::from_path(src.path.as_str(), text.as_str()) {
        Some(doc) => {
            let found = checks::run_file_checks(&doc, &settings.thresholds);
            (Some(doc), found)
        }
        None => (
            None,
            vec![Finding::new(
                ids::UNRECOGNIZED_FILE,
                Severity::Low,
                src.path.as_str(),
                "Not a recognized rules or skill filename; skipped.",
            )],
        ),
    }
}

/// Drop disabled rules and apply `[rules.<id>].level` replacements.
fn apply_overrides(findings: Vec<Finding>, settings: &Settings) -> Vec<Finding> {
    if settings.overrides.is_empty() {
        return findings;
    }
    findings
        .into_iter()
        .filter_map(|mut f| match settings.overrides.get(&f.rule_id) {
            Some(ov) if ov.enabled == Some(false) => None,
            Some(ov) => {
                if let Some(level) = ov.level {
                    f.severity = level;
                }
                Some(f)
            }
            None => Some(f),
        })
        .collect()
}

/// Stable order: source discovery order (global findings last), severity
/// rank, catalog declaration order, emission order.
fn sort_findings(mut findings: Vec<Finding>, sources: &[Source]) -> Vec<Finding> {
    let group = |f: &Finding| -> usize {
        if f.is_global() {
            return usize::MAX;
        }
        sources
            .iter()
            .position(|s| s.path == f.file_path)
            .unwrap_or(sources.len())
    };
    findings.sort_by_cached_key(|f| (group(f), f.severity, checks::catalog_rank(&f.rule_id)));
    findings
}

/// Discover files under the effective root and analyze them.
pub fn run_lint(eff: &Effective) -> Report {
    let root = fs::canonicalize(&eff.repo_root).unwrap_or_else(|_| eff.repo_root.clone());
    let sources = discovery::collect_sources(&root, &eff.excludes);
    debug!(root = %root.display(), sources = sources.len(), "discovered sources");
    analyze(&sources, &eff.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleOverride;
    use crate::models::DocKind;

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("Rule number {}\n", i)).collect()
    }

    fn ids_of(report: &Report) -> Vec<&str> {
        report.findings().iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn test_oversized_root_rules_only() {
        let sources = vec![Source::new(".builderrules", lines(250))];
        let report = analyze(&sources, &Settings::default());
        assert_eq!(ids_of(&report), vec![ids::OVERSIZED_FILE]);
        assert_eq!(report.findings()[0].severity, Severity::Critical);
        assert_eq!(report.documents()[0].kind(), DocKind::RootRules);
        assert_eq!(report.documents()[0].line_count(), 250);
    }

    #[test]
    fn test_mdc_without_frontmatter() {
        let sources = vec![Source::new(
            ".builder/rules/test.mdc",
            "# Test rule\nUse snake_case for files.\n",
        )];
        let report = analyze(&sources, &Settings::default());
        assert_eq!(
            ids_of(&report),
            vec![
                ids::MISSING_FRONTMATTER,
                ids::MISSING_DESCRIPTION,
                ids::NO_CODE_EXAMPLES
            ]
        );
    }

    #[test]
    fn test_empty_input_is_advisory() {
        let report = analyze(&[], &Settings::default());
        assert!(report.documents().is_empty());
        assert_eq!(report.findings().len(), 1);
        let f = &report.findings()[0];
        assert_eq!(f.rule_id, ids::NO_RULES_FILES);
        assert!(f.is_global());
        assert!(f.message.starts_with("No rules files found"));
    }

    #[test]
    fn test_six_always_apply_files_one_global_finding() {
        let sources: Vec<Source> = (0..6)
            .map(|i| {
                Source::new(
                    format!(".builder/rules/r{}.mdc", i),
                    format!(
                        "---\ndescription: rule {}\nalwaysApply: true\n---\n```ts\nconst x{} = {};\n```\n",
                        i, i, i
                    ),
                )
            })
            .collect();
        let report = analyze(&sources, &Settings::default());
        let always: Vec<&Finding> = report
            .findings()
            .iter()
            .filter(|f| f.rule_id == ids::ALWAYS_APPLY_OVERUSE)
            .collect();
        assert_eq!(always.len(), 1);
        assert_eq!(always[0].severity, Severity::Critical);
        assert!(always[0].file_path.is_empty());
        assert_eq!(report.findings().len(), 1);
    }

    #[test]
    fn test_inline_yaml_comments_do_not_hide_flags() {
        let sources: Vec<Source> = (0..6)
            .map(|i| {
                Source::new(
                    format!(".builder/rules/r{}.mdc", i),
                    format!(
                        "---\ndescription: rule {}\nalwaysApply: true # load everywhere\nglobs: \"**/*\" # all\n---\n```ts\nconst x{} = {};\n```\n",
                        i, i, i
                    ),
                )
            })
            .collect();
        let report = analyze(&sources, &Settings::default());
        let count = |id: &str| report.findings().iter().filter(|f| f.rule_id == id).count();
        assert_eq!(count(ids::ALWAYS_APPLY_OVERUSE), 1);
        assert_eq!(count(ids::OVERBROAD_GLOB), 6);
        assert_eq!(report.findings().len(), 7);
    }

    #[test]
    fn test_duplicate_block_scenario() {
        let block = "## Naming Conventions\n- camelCase for variables\n- PascalCase for types\n- kebab-case for files\n- UPPER_CASE for constants\n- no abbreviations\n";
        let sources = vec![
            Source::new(".builderrules", format!("# Root\n{}", block)),
            Source::new("apps/web/.builderrules", format!("# Web\n{}", block)),
        ];
        let report = analyze(&sources, &Settings::default());
        assert_eq!(ids_of(&report), vec![ids::DUPLICATE_CONTENT]);
        let f = &report.findings()[0];
        assert_eq!(f.severity, Severity::Medium);
        assert_eq!(
            f.related,
            vec![".builderrules".to_string(), "apps/web/.builderrules".to_string()]
        );
    }

    #[test]
    fn test_unreadable_and_unrecognized_do_not_abort() {
        let sources = vec![
            Source::unreadable(".builderrules", "permission denied"),
            Source::new("notes.txt", "hello"),
            Source::new("agents.md", "Use pnpm.\n"),
        ];
        let report = analyze(&sources, &Settings::default());
        assert_eq!(
            ids_of(&report),
            vec![ids::UNREADABLE_FILE, ids::UNRECOGNIZED_FILE]
        );
        assert!(report.findings()[0].message.contains("permission denied"));
        assert_eq!(report.documents().len(), 1);
    }

    #[test]
    fn test_no_documents_reports_no_rules_files() {
        let sources = vec![
            Source::unreadable(".builderrules", "permission denied"),
            Source::new("notes.txt", "hello"),
        ];
        let report = analyze(&sources, &Settings::default());
        assert!(report.documents().is_empty());
        assert_eq!(
            ids_of(&report),
            vec![ids::UNREADABLE_FILE, ids::UNRECOGNIZED_FILE, ids::NO_RULES_FILES]
        );
        assert!(report.findings()[2].is_global());
    }

    #[test]
    fn test_sorted_by_file_then_severity_then_catalog() {
        let sources = vec![
            Source::new("a/SKILL.md", "Be consistent.\n"),
            Source::new("AGENTS.md", "Follow best practices.\n"),
        ];
        let report = analyze(&sources, &Settings::default());
        let order: Vec<(&str, &str)> = report
            .findings()
            .iter()
            .map(|f| (f.file_path.as_str(), f.rule_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a/SKILL.md", ids::VAGUE_CONTENT),
                ("a/SKILL.md", ids::NO_CODE_EXAMPLES),
                ("AGENTS.md", ids::WRONG_FILENAME),
                ("AGENTS.md", ids::VAGUE_CONTENT),
            ]
        );
    }

    #[test]
    fn test_overrides_disable_and_relevel() {
        let mut settings = Settings::default();
        settings.overrides.insert(
            ids::NO_CODE_EXAMPLES.to_string(),
            RuleOverride {
                enabled: Some(false),
                level: None,
            },
        );
        settings.overrides.insert(
            ids::MISSING_FRONTMATTER.to_string(),
            RuleOverride {
                enabled: None,
                level: Some(Severity::Low),
            },
        );
        let sources = vec![Source::new(".builder/rules/x.mdc", "plain\n")];
        let report = analyze(&sources, &settings);
        assert_eq!(
            ids_of(&report),
            vec![ids::MISSING_DESCRIPTION, ids::MISSING_FRONTMATTER]
        );
        assert_eq!(report.findings()[1].severity, Severity::Low);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let sources = vec![
            Source::new(".builderrules", lines(180)),
            Source::new(".builder/rules/a.mdc", "---\nglobs: **/*\n---\nWrite clean code.\n"),
            Source::new("pkg/.builderrule", lines(10)),
        ];
        let a = analyze(&sources, &Settings::default());
        let b = analyze(&sources, &Settings::default());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_run_lint_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join(".builder/rules")).unwrap();
        std::fs::write(root.join(".builderrules"), lines(250)).unwrap();
        std::fs::write(
            root.join(".builder/rules/api.mdc"),
            "---\ndescription: API\nglobs: src/api/**\n---\n```ts\nexport {}\n```\n",
        )
        .unwrap();
        let (eff, err) = crate::config::resolve_effective(root.to_str(), None, None);
        assert!(err.is_none());
        let report = run_lint(&eff);
        assert_eq!(report.documents().len(), 2);
        assert_eq!(ids_of(&report), vec![ids::OVERSIZED_FILE]);
        assert_eq!(report.findings()[0].file_path, ".builderrules");
    }
}

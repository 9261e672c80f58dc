//! Markdown review document.
//!
//! Layout: summary counts, per-file sections, global issues, and a
//! prioritized action plan. A report without findings renders the positive
//! template, and a report without documents renders the empty template.

use crate::models::{Document, Finding, Report, Severity};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Standard,
    Positive,
    Empty,
}

impl RenderMode {
    /// Mode implied by the report contents.
    pub fn select(report: &Report) -> RenderMode {
        if report.documents().is_empty() {
            RenderMode::Empty
        } else if report.findings().is_empty() {
            RenderMode::Positive
        } else {
            RenderMode::Standard
        }
    }
}

/// Render `report` as Markdown using `mode`.
pub fn render(report: &Report, mode: RenderMode) -> String {
    let mut out = String::new();
    match mode {
        RenderMode::Standard => render_standard(report, &mut out),
        RenderMode::Positive => render_positive(report, &mut out),
        RenderMode::Empty => render_empty(report, &mut out),
    }
    out
}

fn line(out: &mut String, text: impl Display) {
    out.push_str(&text.to_string());
    out.push('\n');
}

fn heading(s: Severity) -> &'static str {
    match s {
        Severity::Critical => "🔴 Critical",
        Severity::High => "🟠 High",
        Severity::Medium => "🟡 Medium",
        Severity::Low => "🔵 Low",
    }
}

fn plan_title(s: Severity) -> &'static str {
    match s {
        Severity::Critical => "Fix immediately",
        Severity::High => "Fix soon",
        Severity::Medium => "Improve",
        Severity::Low => "Nice to have",
    }
}

fn doc_line(d: &Document) -> String {
    format!(
        "`{}` ({}, {} lines, {} chars)",
        d.path(),
        d.kind(),
        d.line_count(),
        d.char_count()
    )
}

fn finding_line(f: &Finding) -> String {
    format!("- **{}** `{}`: {}", f.severity.title(), f.rule_id, f.message)
}

fn render_standard(report: &Report, out: &mut String) {
    let s = report.summary();
    line(out, "# AI Rules Review\n");
    line(out, format_args!("**Files analyzed:** {}  ", s.files));
    line(out, format_args!("**Issues found:** {}\n", s.total()));

    line(out, "## Summary\n");
    line(out, "| Severity | Count |");
    line(out, "|---|---|");
    for sev in Severity::ALL {
        line(out, format_args!("| {} | {} |", heading(sev), s.count(sev)));
    }
    out.push('\n');

    line(out, "## Files\n");
    // Files first in discovery order, then paths that never became documents.
    let mut paths: Vec<&str> = report.documents().iter().map(|d| d.path()).collect();
    for f in report.findings() {
        if !f.is_global() && !paths.contains(&f.file_path.as_str()) {
            paths.push(f.file_path.as_str());
        }
    }
    for path in paths {
        let doc = report.documents().iter().find(|d| d.path() == path);
        let title = doc.map(doc_line).unwrap_or_else(|| format!("`{}`", path));
        line(out, format_args!("### {}\n", title));
        let mut any = false;
        for f in report.findings_for(path) {
            line(out, finding_line(f));
            any = true;
        }
        if !any {
            line(out, "- ✅ No issues");
        }
        out.push('\n');
    }

    let globals: Vec<&Finding> = report.global_findings().collect();
    if !globals.is_empty() {
        line(out, "## Global Issues\n");
        for f in globals {
            line(out, finding_line(f));
            for p in &f.related {
                line(out, format_args!("  - `{}`", p));
            }
        }
        out.push('\n');
    }

    line(out, "## Action Plan\n");
    let mut step = 0;
    for sev in Severity::ALL {
        let items: Vec<&Finding> = report
            .findings()
            .iter()
            .filter(|f| f.severity == sev)
            .collect();
        if items.is_empty() {
            continue;
        }
        step += 1;
        line(out, format_args!("### {}. {} ({})\n", step, plan_title(sev), sev.title()));
        for f in items {
            let target = if f.is_global() {
                "repository".to_string()
            } else {
                format!("`{}`", f.file_path)
            };
            line(out, format_args!("- [ ] {}: {}", target, f.message));
        }
        out.push('\n');
    }
}

fn render_positive(report: &Report, out: &mut String) {
    line(out, "# AI Rules Review\n");
    line(
        out,
        format_args!(
            "✅ **No issues found.** All {} files pass every check.\n",
            report.documents().len()
        ),
    );
    line(out, "## Files Reviewed\n");
    line(out, "| File | Kind | Lines | Chars |");
    line(out, "|---|---|---|---|");
    for d in report.documents() {
        line(
            out,
            format_args!(
                "| `{}` | {} | {} | {} |",
                d.path(),
                d.kind(),
                d.line_count(),
                d.char_count()
            ),
        );
    }
    out.push('\n');
    line(out, "## What Is Working Well\n");
    line(out, "- Files stay within size limits");
    line(out, "- Rule files declare frontmatter with descriptions");
    line(out, "- Globs are scoped and alwaysApply is used sparingly");
    line(out, "- Content is specific and shows code examples");
}

fn render_empty(report: &Report, out: &mut String) {
    line(out, "# AI Rules Review\n");
    line(out, "No rules or skill files were found in this repository.\n");
    line(out, "## Where To Start\n");
    line(out, "- `.builderrules` at the repository root for project-wide rules");
    line(out, "- `.builder/rules/*.mdc` for scoped rules with `globs`");
    line(out, "- `agents.md` for agent instructions");
    line(out, "- `skills/<name>/SKILL.md` for reusable skills");
    let notes: Vec<&Finding> = report
        .findings()
        .iter()
        .filter(|f| f.rule_id != crate::checks::ids::NO_RULES_FILES)
        .collect();
    if !notes.is_empty() {
        line(out, "\n## Notes\n");
        for f in notes {
            let target = if f.is_global() { "repository" } else { f.file_path.as_str() };
            line(out, format_args!("- `{}`: {}", target, f.message));
        }
    }
}

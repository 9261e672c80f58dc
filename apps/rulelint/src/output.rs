//! Output rendering for lint, ls, and rules commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::checks::{Eval, CATALOG};
use crate::models::{Report, Severity};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("⟦{}⟧", sev.as_str());
    if !color {
        return tag;
    }
    match sev {
        Severity::Critical => tag.red().bold().to_string(),
        Severity::High => tag.magenta().bold().to_string(),
        Severity::Medium => tag.yellow().bold().to_string(),
        Severity::Low => tag.blue().bold().to_string(),
    }
}

fn severity_icon(sev: Severity, color: bool) -> String {
    let icon = match sev {
        Severity::Critical => "✖",
        Severity::High => "✖",
        Severity::Medium => "▲",
        Severity::Low => "◆",
    };
    if !color {
        return icon.to_string();
    }
    match sev {
        Severity::Critical => icon.red().to_string(),
        Severity::High => icon.magenta().to_string(),
        Severity::Medium => icon.yellow().to_string(),
        Severity::Low => icon.blue().to_string(),
    }
}

/// Print lint results in the requested format.
pub fn print_lint(res: &Report, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_lint_json(res))),
        _ => {
            let color = utils::use_colors(output);
            for is in res.findings() {
                let target = if is.is_global() {
                    "(repository)".to_string()
                } else {
                    is.file_path.clone()
                };
                let file = if color {
                    target.bold().to_string()
                } else {
                    target
                };
                println!(
                    "{} {} {} ❲{}❳ — {}",
                    severity_icon(is.severity, color),
                    severity_tag(is.severity, color),
                    file,
                    is.rule_id,
                    is.message
                );
                for p in &is.related {
                    println!("    ↳ {}", p);
                }
            }
            let s = res.summary();
            let summary = format!(
                "— Summary — critical={} high={} medium={} low={} files={}",
                s.critical, s.high, s.medium, s.low, s.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print discovered documents with kind and size.
pub fn print_documents(res: &Report, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_documents_json(res))),
        _ => {
            let color = utils::use_colors(output);
            for d in res.documents() {
                let kind = format!("[{}]", d.kind());
                let kind = if color { kind.cyan().to_string() } else { kind };
                println!(
                    "{} {} ({} lines, {} chars)",
                    kind,
                    d.path(),
                    d.line_count(),
                    d.char_count()
                );
            }
        }
    }
}

/// Print the rule catalog.
pub fn print_rules(output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_rules_json())),
        _ => {
            let color = utils::use_colors(output);
            for r in CATALOG {
                let id = if color {
                    r.id.bold().to_string()
                } else {
                    r.id.to_string()
                };
                println!(
                    "{} {} — {}",
                    severity_tag(r.severity, color),
                    id,
                    r.summary
                );
            }
        }
    }
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &Report) -> JsonVal {
    json!({
        "findings": res.findings(),
        "summary": res.summary(),
    })
}

/// Compose document listing JSON (pure).
pub fn compose_documents_json(res: &Report) -> JsonVal {
    json!({ "documents": res.documents() })
}

/// Compose catalog JSON (pure).
pub fn compose_rules_json() -> JsonVal {
    let items: Vec<_> = CATALOG
        .iter()
        .map(|r| {
            let scope = match r.eval {
                Eval::PerFile(_) => "file",
                Eval::Global(_) => "global",
                Eval::Analyzer => "analyzer",
            };
            json!({
                "id": r.id,
                "severity": r.severity,
                "scope": scope,
                "summary": r.summary,
            })
        })
        .collect();
    json!({ "rules": items })
}

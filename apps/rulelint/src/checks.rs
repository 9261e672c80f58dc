//! Rule catalog.
//!
//! Each entry is data (id, default severity, summary) plus a pure evaluation
//! function. Per-file rules see one `Document`; global rules see the whole
//! document set and run only after every document exists. Declaration order
//! is the tie-breaker when findings are sorted.

use crate::config::Thresholds;
use crate::error::LintError;
use crate::models::document::in_rules_dir;
use crate::models::{DocKind, Document, Finding, Severity};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::OnceLock;

pub mod ids {
    pub const OVERSIZED_FILE: &str = "oversized-file";
    pub const SIZE_WARNING: &str = "size-warning";
    pub const MALFORMED_FRONTMATTER: &str = "malformed-frontmatter";
    pub const MISSING_FRONTMATTER: &str = "missing-frontmatter";
    pub const MISSING_DESCRIPTION: &str = "missing-description";
    pub const OVERBROAD_GLOB: &str = "overbroad-glob";
    pub const WRONG_FILENAME: &str = "wrong-filename";
    pub const ALWAYS_APPLY_OVERUSE: &str = "always-apply-overuse";
    pub const VAGUE_CONTENT: &str = "vague-content";
    pub const NO_CODE_EXAMPLES: &str = "no-code-examples";
    pub const DUPLICATE_CONTENT: &str = "duplicate-content";
    // Emitted by the analyzer rather than an evaluation function.
    pub const UNREADABLE_FILE: &str = "unreadable-file";
    pub const UNRECOGNIZED_FILE: &str = "unrecognized-file";
    pub const NO_RULES_FILES: &str = "no-rules-files";
}

pub type FileCheck = fn(&Document, &Thresholds) -> Vec<Finding>;
pub type GlobalCheck = fn(&[Document], &Thresholds) -> Vec<Finding>;

#[derive(Clone, Copy)]
pub enum Eval {
    PerFile(FileCheck),
    Global(GlobalCheck),
    /// Produced by the analyzer itself; listed for ordering and docs.
    Analyzer,
}

#[derive(Clone, Copy)]
/// One catalog entry.
pub struct Rule {
    pub id: &'static str,
    pub severity: Severity,
    pub summary: &'static str,
    pub eval: Eval,
}

pub static CATALOG: &[Rule] = &[
    Rule {
        id: ids::UNREADABLE_FILE,
        severity: Severity::High,
        summary: "A discovered file could not be read",
        eval: Eval::Analyzer,
    },
    Rule {
        id: ids::OVERSIZED_FILE,
        severity: Severity::Critical,
        summary: "File exceeds the line or character limit",
        eval: Eval::PerFile(oversized_file),
    },
    Rule {
        id: ids::SIZE_WARNING,
        severity: Severity::Medium,
        summary: "File is approaching the line or character limit",
        eval: Eval::PerFile(size_warning),
    },
    Rule {
        id: ids::MALFORMED_FRONTMATTER,
        severity: Severity::High,
        summary: "Frontmatter opened but never closed",
        eval: Eval::PerFile(malformed_frontmatter),
    },
    Rule {
        id: ids::MISSING_FRONTMATTER,
        severity: Severity::High,
        summary: ".mdc rule has no frontmatter",
        eval: Eval::PerFile(missing_frontmatter),
    },
    Rule {
        id: ids::MISSING_DESCRIPTION,
        severity: Severity::High,
        summary: "Frontmatter lacks a description",
        eval: Eval::PerFile(missing_description),
    },
    Rule {
        id: ids::OVERBROAD_GLOB,
        severity: Severity::Medium,
        summary: "Glob matches the whole tree",
        eval: Eval::PerFile(overbroad_glob),
    },
    Rule {
        id: ids::WRONG_FILENAME,
        severity: Severity::Critical,
        summary: "Filename is a known typo and will not be loaded",
        eval: Eval::PerFile(wrong_filename),
    },
    Rule {
        id: ids::ALWAYS_APPLY_OVERUSE,
        severity: Severity::Critical,
        summary: "Too many files set alwaysApply: true",
        eval: Eval::Global(always_apply_overuse),
    },
    Rule {
        id: ids::VAGUE_CONTENT,
        severity: Severity::High,
        summary: "Body contains generic advice",
        eval: Eval::PerFile(vague_content),
    },
    Rule {
        id: ids::NO_CODE_EXAMPLES,
        severity: Severity::Low,
        summary: "Rule or skill has no fenced code examples",
        eval: Eval::PerFile(no_code_examples),
    },
    Rule {
        id: ids::DUPLICATE_CONTENT,
        severity: Severity::Medium,
        summary: "Two files share a block of identical lines",
        eval: Eval::Global(duplicate_content),
    },
    Rule {
        id: ids::UNRECOGNIZED_FILE,
        severity: Severity::Low,
        summary: "Input filename is not a known rules or skill file",
        eval: Eval::Analyzer,
    },
    Rule {
        id: ids::NO_RULES_FILES,
        severity: Severity::Low,
        summary: "No rules files were found",
        eval: Eval::Analyzer,
    },
];

pub fn lookup(id: &str) -> Option<&'static Rule> {
    CATALOG.iter().find(|r| r.id == id)
}

/// Declaration index of a rule id; unknown ids sort last.
pub fn catalog_rank(id: &str) -> usize {
    CATALOG
        .iter()
        .position(|r| r.id == id)
        .unwrap_or(CATALOG.len())
}

fn default_severity(id: &str) -> Severity {
    lookup(id).map(|r| r.severity).unwrap_or(Severity::Low)
}

fn finding(id: &str, doc: &Document, message: impl Into<String>) -> Finding {
    Finding::new(id, default_severity(id), doc.path(), message)
}

/// Run every per-file rule against `doc`, in catalog order.
pub fn run_file_checks(doc: &Document, t: &Thresholds) -> Vec<Finding> {
    CATALOG
        .iter()
        .filter_map(|r| match r.eval {
            Eval::PerFile(f) => Some(f(doc, t)),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Run every global rule against the complete document set.
pub fn run_global_checks(docs: &[Document], t: &Thresholds) -> Vec<Finding> {
    CATALOG
        .iter()
        .filter_map(|r| match r.eval {
            Eval::Global(f) => Some(f(docs, t)),
            _ => None,
        })
        .flatten()
        .collect()
}

fn is_oversized(doc: &Document, t: &Thresholds) -> bool {
    doc.line_count() > t.max_lines || doc.char_count() > t.max_chars
}

pub fn oversized_file(doc: &Document, t: &Thresholds) -> Vec<Finding> {
    if !is_oversized(doc, t) {
        return Vec::new();
    }
    vec![finding(
        ids::OVERSIZED_FILE,
        doc,
        format!(
            "File has {} lines and {} characters (limits: {} lines, {} characters). Split it into focused files.",
            doc.line_count(),
            doc.char_count(),
            t.max_lines,
            t.max_chars
        ),
    )]
}

pub fn size_warning(doc: &Document, t: &Thresholds) -> Vec<Finding> {
    if is_oversized(doc, t) {
        return Vec::new();
    }
    let lines = doc.line_count() >= t.warn_lines;
    let chars = doc.char_count() >= t.warn_chars;
    if !lines && !chars {
        return Vec::new();
    }
    vec![finding(
        ids::SIZE_WARNING,
        doc,
        format!(
            "File has {} lines and {} characters, close to the limits of {} lines and {} characters.",
            doc.line_count(),
            doc.char_count(),
            t.max_lines,
            t.max_chars
        ),
    )]
}

pub fn malformed_frontmatter(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    use crate::frontmatter::FrontmatterState;
    if *doc.frontmatter() != FrontmatterState::Unclosed {
        return Vec::new();
    }
    vec![finding(
        ids::MALFORMED_FRONTMATTER,
        doc,
        LintError::MalformedFrontmatter.to_string(),
    )]
}

pub fn missing_frontmatter(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    if doc.kind() != DocKind::McdRule || doc.frontmatter().is_present() {
        return Vec::new();
    }
    vec![finding(
        ids::MISSING_FRONTMATTER,
        doc,
        "Rule file has no frontmatter; add a '---' block with description, globs, and alwaysApply.",
    )]
}

pub fn missing_description(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    let fm = doc.frontmatter();
    let missing = if fm.is_present() {
        fm.get("description")
            .map(|v| v.items().is_empty())
            .unwrap_or(true)
    } else {
        doc.kind() == DocKind::McdRule
    };
    if !missing {
        return Vec::new();
    }
    vec![finding(
        ids::MISSING_DESCRIPTION,
        doc,
        "No 'description' in frontmatter; the assistant cannot tell when this file applies.",
    )]
}

fn catch_all_glob() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\./)?\*\*/\*(\.[A-Za-z0-9]+)?$").expect("catch-all glob regex is valid")
    })
}

pub fn overbroad_glob(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    let Some(globs) = doc.frontmatter().get("globs") else {
        return Vec::new();
    };
    globs
        .items()
        .into_iter()
        .filter(|g| catch_all_glob().is_match(g.trim()))
        .map(|g| {
            finding(
                ids::OVERBROAD_GLOB,
                doc,
                format!(
                    "Glob '{}' matches the whole tree; scope it to the directories this rule is about.",
                    g
                ),
            )
        })
        .collect()
}

pub fn wrong_filename(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    let name = doc.file_name();
    let message = if name == ".builderrule" {
        Some("'.builderrule' is missing the trailing 's'; rename to '.builderrules'.".to_string())
    } else if name.eq_ignore_ascii_case("agents.md") && name != "agents.md" {
        Some(format!("'{}' must be named 'agents.md' (lowercase).", name))
    } else if is_md_in_rules_dir(doc) {
        let stem = &name[..name.len() - ".md".len()];
        Some(format!(
            "'{}' uses '.md' inside a rules directory; rename to '{}.mdc'.",
            name, stem
        ))
    } else {
        None
    };
    message
        .map(|m| vec![finding(ids::WRONG_FILENAME, doc, m)])
        .unwrap_or_default()
}

fn is_md_in_rules_dir(doc: &Document) -> bool {
    let name = doc.file_name();
    if doc.kind() == DocKind::Skill || !name.to_ascii_lowercase().ends_with(".md") {
        return false;
    }
    let parts: Vec<&str> = doc.path().split('/').collect();
    in_rules_dir(&parts)
}

pub fn always_apply_overuse(docs: &[Document], t: &Thresholds) -> Vec<Finding> {
    let flagged: Vec<String> = docs
        .iter()
        .filter(|d| {
            d.frontmatter()
                .get("alwaysApply")
                .map(|v| v.is_true())
                .unwrap_or(false)
        })
        .map(|d| d.path().to_string())
        .collect();
    if flagged.len() <= t.max_always_apply {
        return Vec::new();
    }
    vec![Finding::global(
        ids::ALWAYS_APPLY_OVERUSE,
        default_severity(ids::ALWAYS_APPLY_OVERUSE),
        format!(
            "{} files set alwaysApply: true (limit {}); every request loads all of them.",
            flagged.len(),
            t.max_always_apply
        ),
    )
    .with_related(flagged)]
}

/// Case-insensitive literal matchers for the denylist.
fn phrase_matchers(phrases: &[String]) -> Vec<(String, Regex)> {
    phrases
        .iter()
        .filter(|p| !p.trim().is_empty())
        .filter_map(|p| {
            RegexBuilder::new(&regex::escape(p.trim()))
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (p.trim().to_string(), re))
        })
        .collect()
}

pub fn vague_content(doc: &Document, t: &Thresholds) -> Vec<Finding> {
    phrase_matchers(&t.vague_phrases)
        .into_iter()
        .filter(|(_, re)| re.is_match(doc.body()))
        .map(|(phrase, _)| {
            finding(
                ids::VAGUE_CONTENT,
                doc,
                format!(
                    "Generic instruction \"{}\"; replace it with a concrete, checkable rule.",
                    phrase
                ),
            )
        })
        .collect()
}

/// Number of fenced code blocks (``` or ~~~) in `body`.
pub fn count_code_blocks(body: &str) -> usize {
    let mut open: Option<&str> = None;
    let mut count = 0;
    for line in body.lines() {
        let l = line.trim_start();
        match open {
            None => {
                if l.starts_with("```") {
                    open = Some("```");
                    count += 1;
                } else if l.starts_with("~~~") {
                    open = Some("~~~");
                    count += 1;
                }
            }
            Some(fence) => {
                if l.starts_with(fence) {
                    open = None;
                }
            }
        }
    }
    count
}

pub fn no_code_examples(doc: &Document, _t: &Thresholds) -> Vec<Finding> {
    if !matches!(doc.kind(), DocKind::McdRule | DocKind::Skill) {
        return Vec::new();
    }
    if count_code_blocks(doc.body()) > 0 {
        return Vec::new();
    }
    vec![finding(
        ids::NO_CODE_EXAMPLES,
        doc,
        "No fenced code examples; show the expected pattern with a short snippet.",
    )]
}

fn significant_lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Longest run of identical lines shared by `a` and `b`, if at least `min`.
/// Returns (run length, start index in `a`).
fn shared_run<'a>(a: &[&'a str], b: &[&'a str], min: usize) -> Option<(usize, usize)> {
    if min == 0 || a.len() < min || b.len() < min {
        return None;
    }
    // Compare interned ids instead of strings in the inner loop.
    let mut interned: HashMap<&'a str, usize> = HashMap::new();
    let mut id_of = |l: &'a str| -> usize {
        let next = interned.len();
        *interned.entry(l).or_insert(next)
    };
    let a_ids: Vec<usize> = a.iter().map(|l| id_of(*l)).collect();
    let b_ids: Vec<usize> = b.iter().map(|l| id_of(*l)).collect();

    // Longest common substring over line ids, two rolling rows.
    let mut prev = vec![0usize; b_ids.len() + 1];
    let mut cur = vec![0usize; b_ids.len() + 1];
    let mut best = (0usize, 0usize);
    for (i, x) in a_ids.iter().enumerate() {
        for (j, y) in b_ids.iter().enumerate() {
            cur[j + 1] = if x == y { prev[j] + 1 } else { 0 };
            if cur[j + 1] > best.0 {
                best = (cur[j + 1], i + 1 - cur[j + 1]);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    (best.0 >= min).then_some(best)
}

pub fn duplicate_content(docs: &[Document], t: &Thresholds) -> Vec<Finding> {
    let lines: Vec<Vec<&str>> = docs.iter().map(|d| significant_lines(d.body())).collect();
    let mut out = Vec::new();
    for i in 0..docs.len() {
        for j in (i + 1)..docs.len() {
            if let Some((len, start)) = shared_run(&lines[i], &lines[j], t.min_duplicate_lines) {
                out.push(
                    Finding::global(
                        ids::DUPLICATE_CONTENT,
                        default_severity(ids::DUPLICATE_CONTENT),
                        format!(
                            "'{}' and '{}' share {} identical lines starting with \"{}\"; keep the block in one place.",
                            docs[i].path(),
                            docs[j].path(),
                            len,
                            lines[i][start]
                        ),
                    )
                    .with_related(vec![docs[i].path().to_string(), docs[j].path().to_string()]),
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> Thresholds {
        Thresholds::default()
    }

    fn doc(path: &str, text: &str) -> Document {
        Document::from_path(path, text).unwrap()
    }

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("line {}\n", i)).collect()
    }

    fn ids_of(found: &[Finding]) -> Vec<&str> {
        found.iter().map(|f| f.rule_id.as_str()).collect()
    }

    #[test]
    fn test_small_files_have_no_size_findings() {
        for n in [0, 1, 149] {
            let d = doc(".builderrules", &lines(n));
            assert!(d.char_count() < 5000);
            assert!(oversized_file(&d, &t()).is_empty());
            assert!(size_warning(&d, &t()).is_empty());
        }
        let d = doc(".builderrules", &"x".repeat(4999));
        assert!(size_warning(&d, &t()).is_empty());
    }

    #[test]
    fn test_size_boundaries_are_exclusive() {
        let d150 = doc(".builderrules", &lines(150));
        assert_eq!(size_warning(&d150, &t()).len(), 1);
        assert!(oversized_file(&d150, &t()).is_empty());

        let d200 = doc(".builderrules", &lines(200));
        assert_eq!(size_warning(&d200, &t()).len(), 1);
        assert!(oversized_file(&d200, &t()).is_empty());

        let d201 = doc(".builderrules", &lines(201));
        let crit = oversized_file(&d201, &t());
        assert_eq!(crit.len(), 1);
        assert_eq!(crit[0].severity, Severity::Critical);
        assert!(size_warning(&d201, &t()).is_empty());
    }

    #[test]
    fn test_char_limits() {
        let warn = doc(".builderrules", &"x".repeat(5000));
        assert_eq!(size_warning(&warn, &t()).len(), 1);
        let at_limit = doc(".builderrules", &"x".repeat(6000));
        assert!(oversized_file(&at_limit, &t()).is_empty());
        let over = doc(".builderrules", &"x".repeat(6001));
        assert_eq!(oversized_file(&over, &t()).len(), 1);
        assert!(size_warning(&over, &t()).is_empty());
    }

    #[test]
    fn test_mdc_without_frontmatter_reports_both() {
        let d = doc(".builder/rules/test.mdc", "# Test\nUse snake_case.\n");
        let found = run_file_checks(&d, &t());
        let ids = ids_of(&found);
        assert!(ids.contains(&ids::MISSING_FRONTMATTER));
        assert!(ids.contains(&ids::MISSING_DESCRIPTION));
        assert!(found
            .iter()
            .filter(|f| f.rule_id != ids::NO_CODE_EXAMPLES)
            .all(|f| f.severity == Severity::High));
    }

    #[test]
    fn test_root_rules_need_no_frontmatter() {
        let d = doc(".builderrules", "Use tabs.\n");
        assert!(missing_frontmatter(&d, &t()).is_empty());
        assert!(missing_description(&d, &t()).is_empty());
    }

    #[test]
    fn test_description_required_when_frontmatter_present() {
        let d = doc("skills/x/SKILL.md", "---\nname: x\n---\nbody\n");
        assert_eq!(ids_of(&missing_description(&d, &t())), vec![ids::MISSING_DESCRIPTION]);
        let ok = doc("skills/x/SKILL.md", "---\nname: x\ndescription: Deploys\n---\n");
        assert!(missing_description(&ok, &t()).is_empty());
        let empty = doc(".builder/rules/a.mdc", "---\ndescription: \"\"\n---\n");
        assert_eq!(missing_description(&empty, &t()).len(), 1);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let d = doc(".builder/rules/a.mdc", "---\ndescription: x\n");
        let found = run_file_checks(&d, &t());
        let ids = ids_of(&found);
        assert!(ids.contains(&ids::MALFORMED_FRONTMATTER));
        assert!(ids.contains(&ids::MISSING_FRONTMATTER));
    }

    #[test]
    fn test_overbroad_globs() {
        let d = doc(
            ".builder/rules/a.mdc",
            "---\ndescription: d\nglobs:\n  - \"**/*\"\n  - \"**/*.ts\"\n  - src/api/**/*.ts\n---\n",
        );
        let found = overbroad_glob(&d, &t());
        assert_eq!(found.len(), 2);
        assert!(found[0].message.contains("'**/*'"));
        assert!(found[1].message.contains("'**/*.ts'"));

        let scalar = doc(".builder/rules/b.mdc", "---\nglobs: src/**/*.ts, **/*.tsx\n---\n");
        assert_eq!(overbroad_glob(&scalar, &t()).len(), 1);
    }

    #[test]
    fn test_wrong_filenames() {
        for path in [
            ".builderrule",
            "AGENTS.md",
            "pkg/Agents.md",
            ".builder/rules/api.md",
            ".builder/rules/api.MD",
        ] {
            let found = wrong_filename(&doc(path, "x"), &t());
            assert_eq!(found.len(), 1, "{}", path);
            assert_eq!(found[0].severity, Severity::Critical);
        }
        for path in [".builderrules", "agents.md", ".builder/rules/api.mdc", "SKILL.md"] {
            assert!(wrong_filename(&doc(path, "x"), &t()).is_empty(), "{}", path);
        }
    }

    #[test]
    fn test_always_apply_overuse_threshold() {
        let mk = |n: usize, flag: &str| {
            (0..n)
                .map(|i| {
                    doc(
                        &format!(".builder/rules/r{}.mdc", i),
                        &format!("---\ndescription: d\nalwaysApply: {}\n---\n", flag),
                    )
                })
                .collect::<Vec<_>>()
        };
        assert!(always_apply_overuse(&mk(5, "true"), &t()).is_empty());
        let found = always_apply_overuse(&mk(6, "true"), &t());
        assert_eq!(found.len(), 1);
        assert!(found[0].is_global());
        assert_eq!(found[0].severity, Severity::Critical);
        assert_eq!(found[0].related.len(), 6);
        assert!(always_apply_overuse(&mk(8, "false"), &t()).is_empty());
    }

    #[test]
    fn test_vague_content_is_case_insensitive() {
        let d = doc(
            ".builderrules",
            "Always Write Clean Code.\nFollow best practices and be consistent.\n",
        );
        let found = vague_content(&d, &t());
        assert_eq!(found.len(), 3);
        let clean = doc(".builderrules", "Use `Result` for fallible functions.\n");
        assert!(vague_content(&clean, &t()).is_empty());
    }

    #[test]
    fn test_code_examples() {
        assert_eq!(count_code_blocks("```ts\nlet a;\n```\n~~~\nb\n~~~\n"), 2);
        assert_eq!(count_code_blocks("```\n~~~\n```\n"), 1);
        let none = doc("skills/a/SKILL.md", "---\ndescription: d\n---\nNo code.\n");
        assert_eq!(ids_of(&no_code_examples(&none, &t())), vec![ids::NO_CODE_EXAMPLES]);
        let agents = doc("agents.md", "No code.\n");
        assert!(no_code_examples(&agents, &t()).is_empty());
    }

    #[test]
    fn test_duplicate_block_across_files() {
        let block = "## Naming Conventions\n- camelCase for variables\n- PascalCase for types\n- kebab-case for files\n- UPPER_CASE for constants\n- no abbreviations\n";
        let a = doc(".builderrules", &format!("# Root\n\n{}", block));
        let b = doc(
            "packages/web/.builderrules",
            &format!("# Web\nOther text\n{}\nTrailing\n", block),
        );
        let found = duplicate_content(&[a, b], &t());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Medium);
        assert!(found[0].message.contains(".builderrules"));
        assert!(found[0].message.contains("packages/web/.builderrules"));
        assert!(found[0].message.contains("share 6 identical lines"));
        assert_eq!(found[0].related.len(), 2);
    }

    #[test]
    fn test_short_overlap_is_not_duplicate() {
        let a = doc(".builderrules", "a\nb\nc\nd\nx\n");
        let b = doc("pkg/.builderrules", "a\nb\nc\nd\ny\n");
        assert!(duplicate_content(&[a, b], &t()).is_empty());
    }

    #[test]
    fn test_uppercase_md_in_rules_dir_is_renamed() {
        let found = wrong_filename(&doc(".builder/rules/Api.MD", "x"), &t());
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("rename to 'Api.mdc'"));
    }

    #[test]
    fn test_repetitive_bodies_stay_fast() {
        let body = "- item\n".repeat(3000);
        let a = doc("a/.builderrules", &body);
        let b = doc("b/.builderrules", &body);
        let started = std::time::Instant::now();
        let found = duplicate_content(&[a, b], &t());
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("share 3000 identical lines"));
        assert!(found[0].message.contains("\"- item\""));
    }

    #[test]
    fn test_longest_run_is_reported() {
        let a = ["x", "a", "b", "c", "d", "e", "y", "a", "b", "c", "d", "e", "f"];
        let b = ["a", "b", "c", "d", "e", "f", "z"];
        assert_eq!(shared_run(&a, &b, 5), Some((6, 7)));
        assert_eq!(shared_run(&a, &b, 7), None);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for r in CATALOG {
            assert!(seen.insert(r.id), "duplicate id {}", r.id);
        }
        assert!(catalog_rank(ids::OVERSIZED_FILE) < catalog_rank(ids::SIZE_WARNING));
        assert_eq!(catalog_rank("nope"), CATALOG.len());
    }
}

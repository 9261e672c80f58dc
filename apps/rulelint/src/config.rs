//! Configuration discovery and effective settings resolution.
//!
//! rulelint reads `rulelint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `fail_on`: `critical`
//! - `thresholds`: 200/6000 hard limits, 150/5000 warnings, 5 `alwaysApply`
//!   files, 5 shared lines for duplicates
//! - `discovery.exclude`: common vendored/build directories
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::LintError;
use crate::models::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["rulelint.toml", "rulelint.yaml", "rulelint.yml"];

pub const DEFAULT_VAGUE_PHRASES: [&str; 3] =
    ["write clean code", "follow best practices", "be consistent"];

pub const DEFAULT_EXCLUDES: [&str; 7] = [
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    "vendor",
    ".next",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Numeric limits and phrase lists used by the rule catalog.
pub struct Thresholds {
    pub max_lines: usize,
    pub max_chars: usize,
    pub warn_lines: usize,
    pub warn_chars: usize,
    pub max_always_apply: usize,
    pub min_duplicate_lines: usize,
    pub vague_phrases: Vec<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            max_lines: 200,
            max_chars: 6000,
            warn_lines: 150,
            warn_chars: 5000,
            max_always_apply: 5,
            min_duplicate_lines: 5,
            vague_phrases: DEFAULT_VAGUE_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[thresholds]` section; every field optional.
pub struct ThresholdsCfg {
    pub max_lines: Option<usize>,
    pub max_chars: Option<usize>,
    pub warn_lines: Option<usize>,
    pub warn_chars: Option<usize>,
    pub max_always_apply: Option<usize>,
    pub min_duplicate_lines: Option<usize>,
    pub vague_phrases: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[discovery]` section.
pub struct DiscoveryCfg {
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// `[rules.<id>]` override: disable a rule or replace its severity.
pub struct RuleOverride {
    pub enabled: Option<bool>,
    pub level: Option<Severity>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rulelint.toml|yaml`.
pub struct RulelintConfig {
    pub output: Option<String>,
    pub fail_on: Option<String>,
    pub thresholds: Option<ThresholdsCfg>,
    pub discovery: Option<DiscoveryCfg>,
    #[serde(default)]
    pub rules: Option<HashMap<String, RuleOverride>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Everything `analyze` needs besides the sources.
pub struct Settings {
    pub thresholds: Thresholds,
    pub overrides: HashMap<String, RuleOverride>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    /// `None` means never fail.
    pub fail_on: Option<Severity>,
    pub excludes: Vec<String>,
    pub settings: Settings,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `rulelint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RulelintConfig` from `rulelint.toml` or `rulelint.yaml|yml`.
///
/// `Ok(None)` when no config file exists.
pub fn load_config(root: &Path) -> Result<Option<RulelintConfig>, LintError> {
    let toml_path = root.join("rulelint.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        return toml::from_str(&s)
            .map(Some)
            .map_err(|e| config_error(&toml_path, e));
    }
    for yml in ["rulelint.yaml", "rulelint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            return serde_yaml::from_str(&s)
                .map(Some)
                .map_err(|e| config_error(&p, e));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, LintError> {
    fs::read_to_string(path).map_err(|e| config_error(path, e))
}

fn config_error(path: &Path, e: impl std::fmt::Display) -> LintError {
    LintError::Config {
        path: path.to_string_lossy().to_string(),
        reason: e.to_string(),
    }
}

/// Parse a `fail_on` token. `never` disables failing.
pub fn parse_fail_on(s: &str) -> Result<Option<Severity>, String> {
    if s.trim().eq_ignore_ascii_case("never") {
        return Ok(None);
    }
    s.parse::<Severity>().map(Some)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// The second value is a config loading error, if any; the caller reports it
/// and the defaults stay in force.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_fail_on: Option<&str>,
) -> (Effective, Option<LintError>) {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (cfg, err) = match load_config(&repo_root) {
        Ok(c) => (c.unwrap_or_default(), None),
        Err(e) => (RulelintConfig::default(), Some(e)),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let fail_on = cli_fail_on
        .map(|s| s.to_string())
        .or(cfg.fail_on)
        .and_then(|s| parse_fail_on(&s).ok())
        .unwrap_or(Some(Severity::Critical));

    let excludes = cfg
        .discovery
        .and_then(|d| d.exclude)
        .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect());

    let defaults = Thresholds::default();
    let t = cfg.thresholds.unwrap_or_default();
    let thresholds = Thresholds {
        max_lines: t.max_lines.unwrap_or(defaults.max_lines),
        max_chars: t.max_chars.unwrap_or(defaults.max_chars),
        warn_lines: t.warn_lines.unwrap_or(defaults.warn_lines),
        warn_chars: t.warn_chars.unwrap_or(defaults.warn_chars),
        max_always_apply: t.max_always_apply.unwrap_or(defaults.max_always_apply),
        min_duplicate_lines: t.min_duplicate_lines.unwrap_or(defaults.min_duplicate_lines),
        vague_phrases: t.vague_phrases.unwrap_or(defaults.vague_phrases),
    };

    (
        Effective {
            repo_root,
            output,
            fail_on,
            excludes,
            settings: Settings {
                thresholds,
                overrides: cfg.rules.unwrap_or_default(),
            },
        },
        err,
    )
}

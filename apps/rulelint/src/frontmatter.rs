//! Frontmatter extraction for rules and skill files.
//!
//! A block opens when the first line, trimmed, is `---` and closes at the next
//! line that is exactly `---` (trailing whitespace and `\r` ignored). The
//! block is read with `serde_yaml` and flattened into scalars and string
//! lists. Blocks YAML rejects (duplicate keys, unquoted `**/*` globs, stray
//! colons) go through a line-based reader instead, so a file never fails to
//! parse and the last duplicate key wins.

use serde::Serialize;
use serde_yaml::Value as Yaml;
use std::collections::BTreeMap;
use tracing::debug;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// A frontmatter value: plain scalar or an ordered list of strings.
pub enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FrontmatterValue::Scalar(s) => Some(s.as_str()),
            FrontmatterValue::List(_) => None,
        }
    }

    /// Entries of the value. Scalars are split on commas, which is how
    /// `globs: src/**/*.ts, lib/**` is written in many rule files.
    pub fn items(&self) -> Vec<String> {
        match self {
            FrontmatterValue::List(items) => items.clone(),
            FrontmatterValue::Scalar(s) => s
                .split(',')
                .map(|p| unquote(p.trim()).to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// True when the value is a scalar `true` (any case).
    pub fn is_true(&self) -> bool {
        self.as_scalar()
            .map(|s| s.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

pub type Frontmatter = BTreeMap<String, FrontmatterValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "fields", rename_all = "lowercase")]
/// Explicit frontmatter state of a document.
pub enum FrontmatterState {
    /// The file does not start with a delimiter line.
    Missing,
    /// Opened on line 1 but never closed. Treated as no frontmatter.
    Unclosed,
    Present(Frontmatter),
}

impl FrontmatterState {
    pub fn fields(&self) -> Option<&Frontmatter> {
        match self {
            FrontmatterState::Present(fm) => Some(fm),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FrontmatterState::Present(_))
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.fields().and_then(|fm| fm.get(key))
    }
}

/// Result of splitting a text into frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub frontmatter: FrontmatterState,
    pub body: String,
}

/// Split `text` into its frontmatter state and body. Never fails.
pub fn parse(text: &str) -> Parsed {
    let mut lines = text.split_inclusive('\n');
    let first = match lines.next() {
        Some(l) => l,
        None => return missing(text),
    };
    if first.trim() != DELIMITER {
        return missing(text);
    }

    let mut offset = first.len();
    let mut block: Vec<&str> = Vec::new();
    for line in lines {
        let end = offset + line.len();
        if strip_eol(line).trim_end() == DELIMITER {
            return Parsed {
                frontmatter: FrontmatterState::Present(parse_block(&block)),
                body: text[end..].to_string(),
            };
        }
        block.push(strip_eol(line));
        offset = end;
    }

    Parsed {
        frontmatter: FrontmatterState::Unclosed,
        body: text.to_string(),
    }
}

fn missing(text: &str) -> Parsed {
    Parsed {
        frontmatter: FrontmatterState::Missing,
        body: text.to_string(),
    }
}

fn strip_eol(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_block(lines: &[&str]) -> Frontmatter {
    let joined = lines.join("\n");
    match serde_yaml::from_str::<Yaml>(&joined) {
        Ok(Yaml::Mapping(map)) => map
            .into_iter()
            .filter_map(|(k, v)| Some((yaml_key(k)?, yaml_value(v))))
            .collect(),
        Ok(Yaml::Null) => Frontmatter::new(),
        Ok(_) => parse_lines(lines),
        Err(e) => {
            debug!(error = %e, "frontmatter is not strict YAML; using line reader");
            parse_lines(lines)
        }
    }
}

fn yaml_key(k: Yaml) -> Option<String> {
    match k {
        Yaml::String(s) => Some(s),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn yaml_scalar(v: Yaml) -> String {
    match v {
        Yaml::Null => String::new(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::String(s) => s,
        Yaml::Tagged(t) => yaml_scalar(t.value),
        // nested mappings are not modelled; keep their YAML text
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn yaml_value(v: Yaml) -> FrontmatterValue {
    match v {
        Yaml::Sequence(items) => FrontmatterValue::List(
            items
                .into_iter()
                .map(yaml_scalar)
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        other => FrontmatterValue::Scalar(yaml_scalar(other)),
    }
}

/// Lenient reader for blocks YAML rejects. Last occurrence of a key wins.
fn parse_lines(lines: &[&str]) -> Frontmatter {
    let mut out = Frontmatter::new();
    // Key whose value was empty and may be followed by `- item` lines.
    let mut pending: Option<(String, Vec<String>)> = None;

    for raw in lines {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(item) = trimmed.strip_prefix("- ").or_else(|| {
            if trimmed == "-" {
                Some("")
            } else {
                None
            }
        }) {
            if let Some((_, items)) = pending.as_mut() {
                items.push(unquote(strip_comment(item)).to_string());
            }
            continue;
        }
        let indented = raw.starts_with(' ') || raw.starts_with('\t');
        if indented {
            // nested mappings are not modelled
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        flush(&mut out, pending.take());
        let key = key.trim().to_string();
        if key.is_empty() {
            continue;
        }
        let value = strip_comment(value);
        if value.is_empty() {
            pending = Some((key, Vec::new()));
        } else if let Some(list) = parse_flow_list(value) {
            out.insert(key, FrontmatterValue::List(list));
        } else {
            out.insert(key, FrontmatterValue::Scalar(unquote(value).to_string()));
        }
    }
    flush(&mut out, pending.take());
    out
}

fn flush(out: &mut Frontmatter, pending: Option<(String, Vec<String>)>) {
    if let Some((key, items)) = pending {
        let value = if items.is_empty() {
            FrontmatterValue::Scalar(String::new())
        } else {
            FrontmatterValue::List(items)
        };
        out.insert(key, value);
    }
}

/// Drop a trailing ` # comment` that sits outside quotes, then trim.
fn strip_comment(value: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev_space = true;
    for (i, c) in value.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' && prev_space => return value[..i].trim(),
            None => {}
        }
        prev_space = c.is_whitespace();
    }
    value.trim()
}

/// `[a, "b"]` -> `["a", "b"]`
fn parse_flow_list(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    Some(
        inner
            .split(',')
            .map(|s| unquote(s.trim()).to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

//! Front-matter parsing and body extraction
//!
//! Posts carry their metadata either in a `---` delimited block or as a run
//! of `key: value` / `**Key:** value` lines at the top of the document. Both
//! forms are handled here so every caller sees the same [`Metadata`] shape.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// The bold-markdown metadata form: `**Key:** value`
    static ref BOLD_KEY: Regex = Regex::new(r"^\*\*(.*?):\*\*(.*)$").unwrap();
}

/// Keys the body extractor recognizes when a document has no delimited block.
const KNOWN_KEYS: [&str; 3] = ["title", "date", "tags"];

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

/// Parsed front-matter of a post, keyed by lower-cased field name
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    fields: HashMap<String, Value>,
}

impl Metadata {
    /// Parse front-matter from raw post text.
    ///
    /// Tries the delimited `---` block first; if the document has none, falls
    /// back to scanning metadata-looking lines at the top. Malformed input is
    /// never an error, it just yields fewer fields.
    pub fn parse(raw: &str) -> Self {
        if let Some((block, _)) = split_delimited(raw) {
            Self::parse_block(block)
        } else {
            Self::parse_implicit(raw)
        }
    }

    /// Parse the inside of a delimited block, one `key: value` per line.
    fn parse_block(block: &str) -> Self {
        let mut fields = HashMap::new();
        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Lines without a colon are ignored; no nesting is recognized.
            if let Some(idx) = line.find(':') {
                let key = line[..idx].trim().to_lowercase();
                fields.insert(key, coerce_value(&line[idx + 1..]));
            }
        }
        Self { fields }
    }

    /// Scan leading metadata-looking lines of an undelimited document.
    fn parse_implicit(raw: &str) -> Self {
        let mut fields = HashMap::new();
        for line in raw.lines() {
            let line = line.trim();
            // Scanning ends at the first blank line or the first line that
            // cannot be metadata.
            if line.is_empty() || (!line.contains(':') && !line.starts_with("**")) {
                break;
            }
            if let Some(caps) = BOLD_KEY.captures(line) {
                let key = caps[1].trim().to_lowercase();
                fields.insert(key, coerce_value(&caps[2]));
                continue;
            }
            if let Some(idx) = line.find(':') {
                let key = line[..idx].trim().to_lowercase();
                fields.insert(key, coerce_value(&line[idx + 1..]));
            }
        }
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Scalar value of a field, if present and scalar.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(Value::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.scalar("title")
    }

    /// The raw publish date string, under either accepted key.
    pub fn date(&self) -> Option<&str> {
        self.scalar("date").or_else(|| self.scalar("publishedat"))
    }

    /// Post tags: list values as-is, scalar values split on `,` and trimmed.
    pub fn tags(&self) -> Vec<String> {
        match self.fields.get("tags") {
            Some(Value::List(items)) => items.clone(),
            Some(Value::Scalar(s)) if !s.trim().is_empty() => {
                s.split(',').map(|t| t.trim().to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Media filenames from the first populated of `img`, `imgs`, `images`.
    ///
    /// An empty scalar under one key falls through to the next, an empty list
    /// does not. A bare scalar filename is promoted to a one-element list.
    pub fn media(&self) -> Vec<String> {
        for key in ["img", "imgs", "images"] {
            match self.fields.get(key) {
                Some(Value::List(items)) => return items.clone(),
                Some(Value::Scalar(s)) if !s.trim().is_empty() => {
                    return vec![s.trim().to_string()];
                }
                _ => {}
            }
        }
        Vec::new()
    }
}

/// Return the body of a post with its metadata stripped.
///
/// A delimited block is removed including both fence lines. Otherwise leading
/// lines are skipped while they classify as metadata (bold-header lines and
/// the known keys); the body starts at the first non-blank line that has no
/// colon and no bold sigil.
pub fn extract_body(raw: &str) -> String {
    if let Some((_, body)) = split_delimited(raw) {
        return body.trim().to_string();
    }

    let lines: Vec<&str> = raw.lines().collect();
    let mut start = 0;
    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if starts_body(line) {
            start = i;
            break;
        }
        if line.is_empty() || is_bold_meta(line) || is_known_key_meta(line) {
            start = i + 1;
        }
        // A colon line with an unrecognized key neither starts the body nor
        // advances the skip point; scanning continues.
    }

    lines[start.min(lines.len())..].join("\n").trim().to_string()
}

/// Split a document with a leading `---` fence into (block, body).
fn split_delimited(raw: &str) -> Option<(&str, &str)> {
    let first_nl = raw.find('\n')?;
    if raw[..first_nl].trim_end() != "---" {
        return None;
    }
    let after = &raw[first_nl + 1..];
    let mut pos = 0;
    for line in after.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&after[..pos], &after[pos + line.len()..]));
        }
        pos += line.len();
    }
    None
}

/// `**Key:** value` line
fn is_bold_meta(line: &str) -> bool {
    line.starts_with("**") && BOLD_KEY.is_match(line)
}

/// `key: value` line where `key` is one of the known metadata keys
fn is_known_key_meta(line: &str) -> bool {
    match line.find(':') {
        Some(idx) => KNOWN_KEYS.contains(&line[..idx].trim().to_lowercase().as_str()),
        None => false,
    }
}

/// First line of the body proper: non-blank, no colon, no bold sigil.
///
/// The implicit parser scan and the extractor both build on this predicate so
/// the two cannot disagree on where metadata ends.
fn starts_body(line: &str) -> bool {
    !line.is_empty() && !line.contains(':') && !line.starts_with("**")
}

/// Coerce a raw extracted value into a scalar or a list.
fn coerce_value(raw: &str) -> Value {
    let mut s = raw.trim();

    // One matching pair of surrounding quotes is stripped.
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s = &s[1..s.len() - 1];
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if inner.trim().is_empty() {
            return Value::List(Vec::new());
        }
        let items = inner
            .split(',')
            .map(|item| item.trim().replace(['"', '\''], ""))
            .collect();
        return Value::List(items);
    }

    Value::Scalar(s.trim().to_string())
}

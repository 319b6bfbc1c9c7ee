//! Pack configuration (`cfg`) file parsing.
//!
//! Every pack root and category directory may carry a file named `cfg`:
//! plain text, one `key=value` per line. `#`-prefixed lines are comments,
//! blank lines are ignored, and a line without `=` is skipped silently.
//! The value is everything after the *first* `=`; both sides are trimmed.
//! There is no quoting, escaping, or line continuation.
//!
//! ```text
//! # 01.tiles/cfg
//! name=Tiles
//! z-index=10
//! max=6V.png:2;7R.png
//! pairs=door-open.png:door-closed.png
//! ```
//!
//! Two values embed their own mini-grammar and get dedicated parsers here:
//!
//! - `max` — `;`-separated entries, each `name` or `name:count`. A count
//!   that fails to parse leaves the cap unset rather than erroring.
//! - `pairs` — `;`-separated `a:b` entries. Each written pair registers
//!   both directions, so lookups are symmetric by construction.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A parsed `cfg` file: flat string key → string value mapping.
#[derive(Debug, Clone, Default)]
pub struct Cfg {
    values: HashMap<String, String>,
}

/// A cfg value that should have been an integer but wasn't.
///
/// Raised for `align` and `z-index`; `max` counts deliberately degrade
/// to "unset" instead (see [`parse_max`]).
#[derive(Debug, Error)]
#[error("cfg key '{key}' has non-numeric value '{value}'")]
pub struct BadNumber {
    pub key: String,
    pub value: String,
}

impl Cfg {
    /// Parse cfg text. Never fails: malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { values }
    }

    /// Read and parse a cfg file.
    ///
    /// I/O failure is returned so the caller can decide whether it is a
    /// soft error (missing file → defaults) or worth a warning.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// String value with a fallback default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Integer value with a fallback default when the key is absent.
    ///
    /// A present-but-malformed value is an error: the caller owns the
    /// decision to drop the category or pack it belongs to.
    pub fn int_or(&self, key: &str, default: i64) -> Result<i64, BadNumber> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| BadNumber {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Parse a `max` string like `"6V.png:2;7R.png"`.
///
/// Returns asset name → optional cap. An entry without `:` (or with an
/// unparseable count) maps to `None` — the asset is listed but uncapped.
pub fn parse_max(raw: &str) -> HashMap<String, Option<u32>> {
    let mut caps = HashMap::new();
    for entry in raw.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once(':') {
            Some((name, count)) => {
                caps.insert(name.trim().to_string(), count.trim().parse().ok());
            }
            None => {
                caps.insert(entry.to_string(), None);
            }
        }
    }
    caps
}

/// Parse a `pairs` string like `"door-open.png:door-closed.png"`.
///
/// Each `a:b` entry registers both `a→b` and `b→a`, so one written pair
/// always yields two directed lookups. Entries without `:` are skipped.
pub fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for entry in raw.split(';') {
        if let Some((a, b)) = entry.split_once(':') {
            let (a, b) = (a.trim(), b.trim());
            if a.is_empty() || b.is_empty() {
                continue;
            }
            pairs.insert(a.to_string(), b.to_string());
            pairs.insert(b.to_string(), a.to_string());
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_lines_parsed_and_trimmed() {
        let cfg = Cfg::parse("name = Zombicide Base \n align=25\n");
        assert_eq!(cfg.get("name"), Some("Zombicide Base"));
        assert_eq!(cfg.get("align"), Some("25"));
    }

    #[test]
    fn comments_and_blanks_skipped() {
        let cfg = Cfg::parse("# a comment\n\nname=Tiles\n");
        assert_eq!(cfg.get("name"), Some("Tiles"));
        assert!(cfg.get("# a comment").is_none());
    }

    #[test]
    fn value_split_on_first_equals_only() {
        let cfg = Cfg::parse("formula=a=b=c\n");
        assert_eq!(cfg.get("formula"), Some("a=b=c"));
    }

    #[test]
    fn lines_without_equals_skipped() {
        let cfg = Cfg::parse("just some words\nname=ok\n");
        assert_eq!(cfg.get("name"), Some("ok"));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(Cfg::load(Path::new("/nonexistent/cfg")).is_err());
    }

    #[test]
    fn int_or_returns_default_when_absent() {
        let cfg = Cfg::parse("name=x\n");
        assert_eq!(cfg.int_or("align", 25).unwrap(), 25);
    }

    #[test]
    fn int_or_parses_present_value() {
        let cfg = Cfg::parse("z-index=12\n");
        assert_eq!(cfg.int_or("z-index", 0).unwrap(), 12);
    }

    #[test]
    fn int_or_rejects_garbage() {
        let cfg = Cfg::parse("align=wide\n");
        let err = cfg.int_or("align", 25).unwrap_err();
        assert_eq!(err.key, "align");
        assert_eq!(err.value, "wide");
    }

    #[test]
    fn max_mixed_entries() {
        let caps = parse_max("x.png:3;y.png");
        assert_eq!(caps["x.png"], Some(3));
        assert_eq!(caps["y.png"], None);
    }

    #[test]
    fn max_bad_count_degrades_to_unset() {
        let caps = parse_max("x.png:abc");
        assert_eq!(caps["x.png"], None);
    }

    #[test]
    fn max_empty_string_yields_empty_map() {
        assert!(parse_max("").is_empty());
    }

    #[test]
    fn pairs_registers_both_directions() {
        let pairs = parse_pairs("a.png:b.png");
        assert_eq!(pairs["a.png"], "b.png");
        assert_eq!(pairs["b.png"], "a.png");
    }

    #[test]
    fn pairs_multiple_entries() {
        let pairs = parse_pairs("a:b;c:d");
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs["d"], "c");
    }

    #[test]
    fn pairs_entry_without_colon_skipped() {
        assert!(parse_pairs("lonely.png").is_empty());
    }
}

//! Chord-name normalization
//!
//! An ordered list of regex replacement rules applied to chord text before
//! it reaches the interval detector. Rules come from JSON of the form
//! `[{ "pattern": "...", "replacement": "...", "flags": "i" }]`; every rule
//! replaces all of its matches. Supported flags: `i` (ignore case) and `m`
//! (multi-line). `g` is accepted and implied.
//!
//! In replacements `$N` refers to a single-digit capture group, so `$12`
//! is group 1 followed by a literal `2`. Any other `$` is literal.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{MontunoError, Result};

const BUILTIN_RULES: &str = include_str!("../../data/chord_replacements.json");

/// One replacement rule as written in the rules file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

/// Compiled, ordered rule set
#[derive(Debug, Clone)]
pub struct ChordNormalizer {
    rules: Vec<CompiledRule>,
}

impl ChordNormalizer {
    /// Compile rules in order; the first bad pattern aborts
    pub fn from_rules(rules: &[ReplacementRule]) -> Result<Self> {
        let compiled = rules.iter().map(compile_rule).collect::<Result<Vec<_>>>()?;
        log::debug!("compiled {} chord replacement rules", compiled.len());
        Ok(Self { rules: compiled })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<ReplacementRule> =
            serde_json::from_str(json).map_err(|e| MontunoError::RuleSource(e.to_string()))?;
        Self::from_rules(&rules)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| MontunoError::RuleSource(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// The rule set shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_RULES)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order
    pub fn normalize(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, rule| {
            rule.regex.replace_all(&acc, rule.replacement.as_str()).into_owned()
        })
    }
}

fn compile_rule(rule: &ReplacementRule) -> Result<CompiledRule> {
    let flags = rule.flags.as_deref().unwrap_or("");
    let mut builder = RegexBuilder::new(&rule.pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            'g' => {}
            other => log::warn!("ignoring unknown flag '{}' on rule '{}'", other, rule.pattern),
        }
    }
    let regex = builder.build().map_err(|e| MontunoError::InvalidRule {
        pattern: rule.pattern.clone(),
        reason: e.to_string(),
    })?;
    Ok(CompiledRule {
        regex,
        replacement: expand_group_refs(&rule.replacement),
    })
}

/// Rewrite `$N` references into the braced form the regex crate expects
fn expand_group_refs(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                out.push(*d);
                out.push('}');
                chars.next();
            }
            _ => out.push_str("$$"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rule(pattern: &str, replacement: &str, flags: Option<&str>) -> ReplacementRule {
        ReplacementRule {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            flags: flags.map(str::to_string),
        }
    }

    #[test]
    fn test_builtin_rules() {
        let normalizer = ChordNormalizer::builtin().unwrap();
        assert!(!normalizer.is_empty());
        assert_eq!(normalizer.normalize("Cmaj7"), "C∆");
        assert_eq!(normalizer.normalize("CMAJ7"), "C∆");
        assert_eq!(normalizer.normalize("Bm7b5"), "Bm7(b5)");
        assert_eq!(normalizer.normalize("Amin7"), "Am7");
        assert_eq!(normalizer.normalize("Eb-7"), "Ebm7");
        assert_eq!(normalizer.normalize("Bo7"), "Bº7");
        assert_eq!(normalizer.normalize(" G 7 "), "G7");
        assert_eq!(normalizer.normalize("F#m9"), "F#m9");
    }

    #[test]
    fn test_group_reference_is_single_digit() {
        assert_eq!(expand_group_refs("$12"), "${1}2");
        assert_eq!(expand_group_refs("a$b"), "a$$b");
        let normalizer = ChordNormalizer::from_rules(&[rule("([A-G])x", "$19", None)]).unwrap();
        assert_eq!(normalizer.normalize("Cx"), "C9");
    }

    #[test]
    fn test_rules_apply_in_order() {
        let normalizer =
            ChordNormalizer::from_rules(&[rule("a", "b", None), rule("b", "c", Some("g"))]).unwrap();
        assert_eq!(normalizer.normalize("aab"), "ccc");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ChordNormalizer::from_rules(&[rule("(", "", None)]).unwrap_err();
        assert!(matches!(err, MontunoError::InvalidRule { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_malformed_json() {
        let err = ChordNormalizer::from_json("{ not rules").unwrap_err();
        assert!(matches!(err, MontunoError::RuleSource(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"pattern": "dom", "replacement": ""}}]"#).unwrap();
        let normalizer = ChordNormalizer::from_path(file.path()).unwrap();
        assert_eq!(normalizer.len(), 1);
        assert_eq!(normalizer.normalize("Gdom7"), "G7");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChordNormalizer::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MontunoError::RuleSource(_)));
    }
}

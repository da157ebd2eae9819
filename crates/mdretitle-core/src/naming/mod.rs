//! Filename derivation from document titles.
//!
//! A title is cleaned (`sanitize_title`), then directory-scoped word
//! substitutions apply, then the case policy, then brand terms get their
//! canonical spelling. The rules are plain data so they can live in config.

mod case;
mod sanitize;

pub use case::sentence_case;
pub use sanitize::{sanitize_title, NAME_MAX};

use anyhow::{bail, Context, Result};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Replace a standalone word (case-insensitive) with another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSubstitution {
    pub word: String,
    pub replacement: String,
}

/// Rules for documents below a directory with a given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRule {
    /// Directory name (case-insensitive) anywhere above the document.
    pub segment: String,
    /// Keep the title's casing instead of applying sentence case.
    #[serde(default)]
    pub preserve_case: bool,
    #[serde(default)]
    pub substitutions: Vec<WordSubstitution>,
}

/// Naming rules, `[naming]` in config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Terms forced to this exact spelling wherever they appear (case-insensitive match).
    pub brand_terms: Vec<String>,
    pub segment_rules: Vec<SegmentRule>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            brand_terms: vec!["Flow Builder".to_string()],
            segment_rules: vec![SegmentRule {
                segment: "connectors".to_string(),
                preserve_case: true,
                substitutions: vec![WordSubstitution {
                    word: "connector".to_string(),
                    replacement: "component".to_string(),
                }],
            }],
        }
    }
}

struct CompiledSegmentRule {
    segment: String,
    preserve_case: bool,
    substitutions: Vec<(Regex, String)>,
}

impl CompiledSegmentRule {
    /// True if one of the directories above the file is this rule's segment.
    fn applies_to(&self, rel_path: &Path) -> bool {
        let Some(parent) = rel_path.parent() else {
            return false;
        };
        parent.components().any(|c| match c {
            Component::Normal(name) => name.to_string_lossy().to_lowercase() == self.segment,
            _ => false,
        })
    }
}

/// Compiled naming rules.
pub struct FileNamer {
    segment_rules: Vec<CompiledSegmentRule>,
    brand_terms: Vec<(Regex, String)>,
}

impl FileNamer {
    /// Compile `rules`. Fails if a replacement or brand term could not appear in a filename.
    pub fn new(rules: &NamingRules) -> Result<Self> {
        let mut segment_rules = Vec::with_capacity(rules.segment_rules.len());
        for rule in &rules.segment_rules {
            if rule.segment.trim().is_empty() {
                bail!("naming rule with empty segment");
            }
            let substitutions = rule
                .substitutions
                .iter()
                .map(|s| compile_term(&s.word, &s.replacement))
                .collect::<Result<Vec<_>>>()?;
            segment_rules.push(CompiledSegmentRule {
                segment: rule.segment.to_lowercase(),
                preserve_case: rule.preserve_case,
                substitutions,
            });
        }

        let brand_terms = rules
            .brand_terms
            .iter()
            .map(|term| compile_term(term, term))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            segment_rules,
            brand_terms,
        })
    }

    /// Filename stem for `title`, for a document at `rel_path` (relative to the docs root).
    pub fn stem(&self, title: &str, rel_path: &Path) -> String {
        let mut name = sanitize_title(title);

        let mut preserve_case = false;
        for rule in self.segment_rules.iter().filter(|r| r.applies_to(rel_path)) {
            preserve_case |= rule.preserve_case;
            for (pattern, replacement) in &rule.substitutions {
                name = pattern
                    .replace_all(&name, NoExpand(replacement))
                    .into_owned();
            }
        }

        if !preserve_case {
            name = sentence_case(&name);
        }

        for (pattern, term) in &self.brand_terms {
            name = pattern.replace_all(&name, NoExpand(term)).into_owned();
        }

        name
    }

    /// Full filename (`stem.extension`), capped at `NAME_MAX` bytes.
    /// `None` when nothing usable is left of the title.
    pub fn file_name(&self, title: &str, rel_path: &Path, extension: &str) -> Option<String> {
        let suffix = if extension.is_empty() {
            String::new()
        } else {
            format!(".{extension}")
        };
        let stem = self.stem(title, rel_path);
        let max_stem = NAME_MAX.saturating_sub(suffix.len());
        let stem = sanitize::truncate_bytes(&stem, max_stem).trim_end();
        if stem.is_empty() {
            return None;
        }
        Some(format!("{stem}{suffix}"))
    }
}

/// Whole-word, case-insensitive pattern for `word`, paired with its replacement.
fn compile_term(word: &str, replacement: &str) -> Result<(Regex, String)> {
    if word.trim().is_empty() {
        bail!("naming rule with empty word");
    }
    if sanitize::has_disallowed(replacement) {
        bail!("replacement {replacement:?} contains characters not allowed in filenames");
    }
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
        .with_context(|| format!("invalid naming term {word:?}"))?;
    Ok((pattern, replacement.to_string()))
}

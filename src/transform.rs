//! Per-line token substitution applied to template content.

use crate::error::{Result, SyncError};
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Replaces literal tokens in a line, e.g. a template package name with the
/// real one.
///
/// All tokens are matched in one left-to-right pass, so replacement text is
/// never rewritten by another rule. Where tokens overlap at one position the
/// longest wins, so `@tpl/app-core` is not clobbered by a shorter `@tpl/app`
/// rule.
#[derive(Debug, Clone, Default)]
pub struct TokenReplacer {
    pattern: Option<Regex>,
    values: BTreeMap<String, String>,
}

impl TokenReplacer {
    /// Build a replacer from a token -> replacement map. Empty tokens are ignored.
    pub fn new(replacements: &BTreeMap<String, String>) -> Result<Self> {
        let values: BTreeMap<String, String> = replacements
            .iter()
            .filter(|(token, _)| !token.is_empty())
            .map(|(token, value)| (token.clone(), value.clone()))
            .collect();
        if values.is_empty() {
            return Ok(Self::default());
        }

        let mut tokens: Vec<&str> = values.keys().map(String::as_str).collect();
        // Alternation is leftmost-first; stable sort keeps map order among equal lengths.
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = tokens
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&alternation).map_err(|e| {
            SyncError::UserError(format!("failed to compile replacement tokens: {}", e))
        })?;

        Ok(Self {
            pattern: Some(pattern),
            values,
        })
    }

    /// Whether no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply every rule to one line.
    pub fn apply(&self, line: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return line.to_string();
        };

        pattern
            .replace_all(line, |caps: &Captures| {
                self.values.get(&caps[0]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}

//! Config loading, validation, and utility operations.

use super::model::{Config, SyncEntry};
use crate::error::{Result, SyncError};
use crate::transform::TokenReplacer;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SyncError::UserError)` - Missing file, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SyncError::UserError(format!(
                "failed to read config file '{}': {}\n\
                 Fix: create it or pass --config <path>.",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SyncError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SyncError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every entry has a non-empty `template`, `target` and `workflow`
    /// - `workflow` contains no whitespace (markers separate ids by spaces)
    /// - `template` and `target` differ
    /// - replacement tokens are non-empty
    pub fn validate(&self) -> Result<()> {
        for (idx, entry) in self.entries.iter().enumerate() {
            validate_entry(idx, entry)?;
        }

        if self.replacements.keys().any(|token| token.is_empty()) {
            return Err(SyncError::UserError(
                "config validation failed: replacement tokens must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Line transform built from `replacements`.
    pub fn replacer(&self) -> Result<TokenReplacer> {
        TokenReplacer::new(&self.replacements)
    }
}

fn validate_entry(idx: usize, entry: &SyncEntry) -> Result<()> {
    let fail = |msg: &str| {
        Err(SyncError::UserError(format!(
            "config validation failed: entries[{}] {}",
            idx, msg
        )))
    };

    if entry.template.trim().is_empty() {
        return fail("has an empty template path");
    }
    if entry.target.trim().is_empty() {
        return fail("has an empty target path");
    }
    if entry.workflow.is_empty() {
        return fail("has an empty workflow id");
    }
    if entry.workflow.chars().any(char::is_whitespace) {
        return fail(&format!(
            "workflow id '{}' must not contain whitespace",
            entry.workflow
        ));
    }
    if entry.template == entry.target {
        return fail(&format!(
            "uses '{}' as both template and target",
            entry.template
        ));
    }

    Ok(())
}

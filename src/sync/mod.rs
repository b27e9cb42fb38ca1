//! Per-entry driver tying the engine to the filesystem.
//!
//! For each manifest entry:
//! - target missing: specialize the template and write it
//! - target present: optionally validate, then merge the template into it
//!
//! Targets are only written when their content changes. An existing target
//! keeps its line separators and final newline; a new one takes the template's.

use crate::config::{Config, SyncEntry};
use crate::error::{Result, SyncError};
use crate::fs::{TextFile, atomic_write_file, join_lines, read_text, read_text_if_exists};
use crate::marker::is_marker_line;
use crate::merge::merge_areas_with_outcome;
use crate::specialize::specialize;
use crate::transform::TokenReplacer;
use crate::validate::{ConsistencyReport, check_consistency, validate_consistency};
use std::path::{Path, PathBuf};


/// Options for [`sync_entry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compute the result but do not write it.
    pub dry_run: bool,
}

/// What happened to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Target did not exist and was rendered from the template.
    Created,
    /// Target existed and its content changed.
    Updated,
    /// Target existed and already matched.
    Unchanged,
}

impl SyncStatus {
    /// Short label for command output.
    pub fn label(self) -> &'static str {
        match self {
            SyncStatus::Created => "created",
            SyncStatus::Updated => "updated",
            SyncStatus::Unchanged => "unchanged",
        }
    }
}

/// Result of syncing one entry.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Resolved target path.
    pub target: PathBuf,
    /// What happened.
    pub status: SyncStatus,
    /// Template areas that could not be located in the target.
    pub skipped_areas: Vec<String>,
}

/// Result of checking one entry.
#[derive(Debug, Clone)]
pub enum CheckStatus {
    /// Target matches the template structure.
    Consistent,
    /// Target has not been generated yet; nothing to compare.
    NotGenerated,
    /// Target drifted from the template.
    Inconsistent(ConsistencyReport),
}

/// Sync one manifest entry. Paths are resolved against `base_dir`.
///
/// # Returns
///
/// * `Ok(SyncOutcome)` - The target was created, updated, or left unchanged
/// * `Err(SyncError::UserError)` - The template does not exist
/// * `Err(SyncError::ValidationError)` - The target drifted from the template
/// * `Err(SyncError::IoError)` - Reading or writing failed
pub fn sync_entry(
    base_dir: &Path,
    entry: &SyncEntry,
    config: &Config,
    options: SyncOptions,
) -> Result<SyncOutcome> {
    let template_path = base_dir.join(&entry.template);
    let target_path = base_dir.join(&entry.target);
    let template = read_template(&template_path, entry)?;
    let replacer = config.replacer()?;

    let (lines, layout, status, skipped_areas) = match read_text_if_exists(&target_path)? {
        None => (
            render_new(&template.lines, entry, &replacer),
            template.layout,
            SyncStatus::Created,
            Vec::new(),
        ),
        Some(existing) => {
            if config.validate_before_merge {
                validate_consistency(
                    &template.lines,
                    &existing.lines,
                    &entry.template,
                    &entry.target,
                )?;
            }
            let outcome = merge_areas_with_outcome(
                &existing.lines,
                &template.lines,
                &entry.workflow,
                |line| replacer.apply(line),
                &entry.flags,
            );
            let status = if outcome.lines == existing.lines {
                SyncStatus::Unchanged
            } else {
                SyncStatus::Updated
            };
            (outcome.lines, existing.layout, status, outcome.skipped)
        }
    };

    if status != SyncStatus::Unchanged && !options.dry_run {
        atomic_write_file(&target_path, &join_lines(&lines, layout))?;
    }

    tracing::info!(
        file = %entry.target,
        workflow = %entry.workflow,
        status = status.label(),
        dry_run = options.dry_run,
        "synced entry"
    );

    Ok(SyncOutcome {
        target: target_path,
        status,
        skipped_areas,
    })
}

/// Compare one entry's target against its template without writing anything.
pub fn check_entry(base_dir: &Path, entry: &SyncEntry) -> Result<CheckStatus> {
    let template = read_template(&base_dir.join(&entry.template), entry)?;

    let Some(existing) = read_text_if_exists(base_dir.join(&entry.target))? else {
        return Ok(CheckStatus::NotGenerated);
    };

    let report = check_consistency(
        &template.lines,
        &existing.lines,
        &entry.template,
        &entry.target,
    );
    if report.passed {
        Ok(CheckStatus::Consistent)
    } else {
        Ok(CheckStatus::Inconsistent(report))
    }
}

/// Initial content for a target: specialized template, transformed outside markers.
///
/// Marker lines are left untransformed so later merges can find them by the
/// template's literal text.
fn render_new(template: &[String], entry: &SyncEntry, replacer: &TokenReplacer) -> Vec<String> {
    specialize(template, &entry.workflow, &entry.flags)
        .into_iter()
        .map(|line| {
            if is_marker_line(&line) {
                line
            } else {
                replacer.apply(&line)
            }
        })
        .collect()
}

fn read_template(path: &Path, entry: &SyncEntry) -> Result<TextFile> {
    if !path.exists() {
        return Err(SyncError::UserError(format!(
            "template '{}' for target '{}' does not exist",
            entry.template, entry.target
        )));
    }
    read_text(path)
}

//! `areasync sync`

use crate::cli::SyncArgs;
use crate::config::{Config, SyncEntry};
use crate::error::{Result, SyncError};
use crate::sync::{SyncOptions, SyncOutcome, SyncStatus, sync_entry};

use super::manifest_dir;

pub fn cmd_sync(args: SyncArgs) -> Result<()> {
    let results = run_sync(&args)?;
    let total = results.len();
    let mut changed = 0;
    let mut failures = Vec::new();

    for (entry, result) in results {
        match result {
            Ok(outcome) => {
                if outcome.status != SyncStatus::Unchanged {
                    changed += 1;
                }
                println!("{:<9} {}", outcome.status.label(), entry.target);
                if !outcome.skipped_areas.is_empty() {
                    println!("          skipped: {}", outcome.skipped_areas.join(", "));
                }
            }
            Err(err) => {
                println!("FAILED    {}", entry.target);
                println!();
                println!("{}", err);
                println!();
                failures.push(err);
            }
        }
    }

    println!();
    if args.dry_run {
        println!("{} of {} file(s) would change (dry run).", changed, total);
    } else {
        println!("{} of {} file(s) changed.", changed, total);
    }
    if !failures.is_empty() {
        println!("{} of {} file(s) failed.", failures.len(), total);
    }

    match combine_failures(failures) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Sync the selected entries in manifest order.
///
/// A failing entry does not stop the others; its error is returned in its
/// slot. Only manifest problems abort the whole run.
pub(super) fn run_sync(args: &SyncArgs) -> Result<Vec<(SyncEntry, Result<SyncOutcome>)>> {
    let config = Config::load(&args.config)?;
    let base_dir = manifest_dir(&args.config);
    let options = SyncOptions {
        dry_run: args.dry_run,
    };

    let selected: Vec<&SyncEntry> = match &args.only {
        Some(target) => config.entries.iter().filter(|e| &e.target == target).collect(),
        None => config.entries.iter().collect(),
    };

    if let Some(target) = &args.only
        && selected.is_empty()
    {
        return Err(SyncError::UserError(format!(
            "no manifest entry has target '{}'",
            target
        )));
    }

    let mut results = Vec::with_capacity(selected.len());
    for entry in selected {
        let result = sync_entry(&base_dir, entry, &config, options);
        if let Err(err) = &result {
            tracing::warn!(file = %entry.target, error = %err, "entry failed, continuing");
        }
        results.push((entry.clone(), result));
    }

    Ok(results)
}

/// Collapse per-entry failures into the error the run exits with.
///
/// Drift alone yields `OutOfSync(n)`. Any other error (missing template, I/O)
/// takes precedence, first one wins.
pub(super) fn combine_failures(failures: Vec<SyncError>) -> Option<SyncError> {
    if failures.is_empty() {
        return None;
    }

    let is_drift = |err: &SyncError| matches!(err, SyncError::ValidationError(_));
    let drifted = failures.iter().filter(|err| is_drift(*err)).count();

    Some(
        failures
            .into_iter()
            .find(|err| !is_drift(err))
            .unwrap_or(SyncError::OutOfSync(drifted)),
    )
}

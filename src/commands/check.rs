//! `areasync check`

use crate::cli::CheckArgs;
use crate::config::{Config, SyncEntry};
use crate::error::{Result, SyncError};
use crate::sync::{CheckStatus, check_entry};

use super::manifest_dir;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let results = run_check(&args)?;
    let mut drifted = 0;

    for (entry, status) in &results {
        match status {
            CheckStatus::Consistent => println!("ok        {}", entry.target),
            CheckStatus::NotGenerated => println!("missing   {} (not generated yet)", entry.target),
            CheckStatus::Inconsistent(report) => {
                drifted += 1;
                println!("DRIFTED   {}", entry.target);
                println!();
                print!("{}", report.format_error());
                println!();
            }
        }
    }

    if drifted > 0 {
        return Err(SyncError::OutOfSync(drifted));
    }

    println!();
    println!("All {} target(s) consistent.", results.len());
    Ok(())
}

/// Check every entry; template and I/O errors abort, drift does not.
pub(super) fn run_check(args: &CheckArgs) -> Result<Vec<(SyncEntry, CheckStatus)>> {
    let config = Config::load(&args.config)?;
    let base_dir = manifest_dir(&args.config);

    config
        .entries
        .iter()
        .map(|entry| -> Result<(SyncEntry, CheckStatus)> {
            Ok((entry.clone(), check_entry(&base_dir, entry)?))
        })
        .collect()
}

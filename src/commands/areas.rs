//! `areasync areas`

use crate::area::{Area, extract_areas};
use crate::cli::AreasArgs;
use crate::error::{Result, SyncError};
use crate::fs::read_lines;
use serde::Serialize;

/// One row of `areas` output.
#[derive(Debug, Serialize)]
pub(super) struct AreaSummary {
    pub name: String,
    pub line: usize,
    pub workflows: Vec<String>,
    pub once: bool,
    pub sorted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub body_lines: usize,
    pub terminated: bool,
}

impl From<&Area> for AreaSummary {
    fn from(area: &Area) -> Self {
        Self {
            name: area.header.name.clone(),
            line: area.line_number,
            workflows: area.header.workflows.clone(),
            once: area.header.once,
            sorted: area.header.sorted,
            flag: area.header.flag.clone(),
            body_lines: area.body.len(),
            terminated: area.is_terminated(),
        }
    }
}

pub fn cmd_areas(args: AreasArgs) -> Result<()> {
    let summaries = summarize(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| {
            SyncError::UserError(format!("failed to serialize areas to JSON: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No workflow areas in {}.", args.file.display());
        return Ok(());
    }

    for s in &summaries {
        println!("{}", format_row(s));
    }
    Ok(())
}

pub(super) fn summarize(args: &AreasArgs) -> Result<Vec<AreaSummary>> {
    let lines = read_lines(&args.file)?;
    Ok(extract_areas(&lines).iter().map(AreaSummary::from).collect())
}

pub(super) fn format_row(s: &AreaSummary) -> String {
    let mut row = format!("{:>5}  {} FOR {}", s.line, s.name, s.workflows.join(" "));
    if s.once {
        row.push_str(" [once]");
    }
    if s.sorted {
        row.push_str(" [sorted]");
    }
    if let Some(flag) = &s.flag {
        row.push_str(&format!(" [if {}]", flag));
    }
    if !s.terminated {
        row.push_str(" (unterminated)");
    }
    row
}

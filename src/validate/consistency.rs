//! Cross-file structural check between a template and its generated file.

use crate::area::{Area, AreaKey, extract_areas};
use crate::error::{Result, SyncError};
use crate::marker::AreaHeader;
use std::collections::BTreeMap;

use super::types::{ConsistencyReport, ConsistencyViolation, ViolationKind};

/// Compare the areas of a template (`source`) and a generated file (`target`).
///
/// Collects every violation:
/// 1. Unterminated areas in either file.
/// 2. Duplicate identity keys within one file.
/// 3. Keys only in the template, except once-areas (they are removed from the
///    generated file when first resolved).
/// 4. Keys only in the generated file.
/// 5. Header disagreement for keys present in both.
pub fn check_consistency(
    source: &[String],
    target: &[String],
    source_path: &str,
    target_path: &str,
) -> ConsistencyReport {
    let source_areas = extract_areas(source);
    let target_areas = extract_areas(target);
    let mut violations = Vec::new();

    for (areas, path) in [(&source_areas, source_path), (&target_areas, target_path)] {
        for area in areas.iter().filter(|a| !a.is_terminated()) {
            violations.push(ConsistencyViolation::new(
                ViolationKind::Unterminated,
                area.name(),
                path,
                area.line_number,
            ));
        }
    }

    let source_index = index_areas(&source_areas, source_path, &mut violations);
    let target_index = index_areas(&target_areas, target_path, &mut violations);

    let mut only_in_source: Vec<&Area> = source_index
        .iter()
        .filter(|(key, area)| !target_index.contains_key(*key) && !area.header.once)
        .map(|(_, area)| *area)
        .collect();
    only_in_source.sort_by_key(|a| a.line_number);
    for area in only_in_source {
        violations.push(ConsistencyViolation::new(
            ViolationKind::MissingInTarget,
            area.name(),
            source_path,
            area.line_number,
        ));
    }

    let mut only_in_target: Vec<&Area> = target_index
        .iter()
        .filter(|(key, _)| !source_index.contains_key(*key))
        .map(|(_, area)| *area)
        .collect();
    only_in_target.sort_by_key(|a| a.line_number);
    for area in only_in_target {
        violations.push(ConsistencyViolation::new(
            ViolationKind::UnexpectedInTarget,
            area.name(),
            target_path,
            area.line_number,
        ));
    }

    for (key, source_area) in &source_index {
        if let Some(target_area) = target_index.get(key)
            && let Some(detail) = header_difference(&source_area.header, &target_area.header)
        {
            violations.push(
                ConsistencyViolation::new(
                    ViolationKind::Mismatch,
                    source_area.name(),
                    target_path,
                    target_area.line_number,
                )
                .with_detail(detail),
            );
        }
    }

    if violations.is_empty() {
        ConsistencyReport::pass(source_path, target_path)
    } else {
        ConsistencyReport::fail(source_path, target_path, violations)
    }
}

/// Fail if the template and generated file are structurally inconsistent.
///
/// # Returns
///
/// * `Ok(())` - The files agree
/// * `Err(SyncError::ValidationError)` - The full report of every violation
///
/// # Example
///
/// ```
/// use areasync::validate::validate_consistency;
///
/// let template: Vec<String> = vec![
///     "// BEGIN ONCE WORKFLOW AREA setup FOR web".into(),
///     "init();".into(),
///     "// END WORKFLOW AREA".into(),
/// ];
/// let generated: Vec<String> = vec!["init();".into()];
///
/// // Once-areas may be gone from the generated file.
/// assert!(validate_consistency(&template, &generated, "tpl.ts", "gen.ts").is_ok());
/// ```
pub fn validate_consistency(
    source: &[String],
    target: &[String],
    source_path: &str,
    target_path: &str,
) -> Result<()> {
    let report = check_consistency(source, target, source_path, target_path);
    if report.passed {
        Ok(())
    } else {
        Err(SyncError::ValidationError(report))
    }
}

/// Build a key -> area map, recording a violation for every repeated key.
fn index_areas<'a>(
    areas: &'a [Area],
    path: &str,
    violations: &mut Vec<ConsistencyViolation>,
) -> BTreeMap<AreaKey, &'a Area> {
    let mut index = BTreeMap::new();

    for area in areas {
        let key = area.key();
        if index.contains_key(&key) {
            violations.push(ConsistencyViolation::new(
                ViolationKind::Duplicate,
                area.name(),
                path,
                area.line_number,
            ));
            continue;
        }
        index.insert(key, area);
    }

    index
}

/// Field-by-field self-check for areas that matched by key.
pub(super) fn header_difference(source: &AreaHeader, target: &AreaHeader) -> Option<String> {
    if source.name != target.name {
        return Some(format!("name '{}' vs '{}'", source.name, target.name));
    }
    if source.sorted != target.sorted {
        return Some(format!("SORTED {} vs {}", source.sorted, target.sorted));
    }
    if source.once != target.once {
        return Some(format!("ONCE {} vs {}", source.once, target.once));
    }
    if source.flag != target.flag {
        return Some(format!(
            "IF {} vs {}",
            source.flag.as_deref().unwrap_or("-"),
            target.flag.as_deref().unwrap_or("-")
        ));
    }
    if source.sorted_workflows() != target.sorted_workflows() {
        return Some(format!(
            "workflows '{}' vs '{}'",
            source.workflows.join(" "),
            target.workflows.join(" ")
        ));
    }
    None
}

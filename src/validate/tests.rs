//! Tests for consistency validation.

use crate::error::SyncError;
use crate::marker::parse_area_start;
use crate::test_support::lines;

use super::consistency::{check_consistency, header_difference, validate_consistency};
use super::types::{ConsistencyReport, ConsistencyViolation, ViolationKind};

const TPL: &str = "templates/routes.ts";
const GEN: &str = "apps/web/routes.ts";

fn kinds(source: &[String], target: &[String]) -> Vec<ViolationKind> {
    check_consistency(source, target, TPL, GEN)
        .violations
        .into_iter()
        .map(|v| v.kind)
        .collect()
}

// =========================================================================
// Passing cases
// =========================================================================

#[test]
fn test_identical_structure_passes() {
    let source = lines(&[
        "// BEGIN WORKFLOW AREA imports FOR web",
        "import a;",
        "// END WORKFLOW AREA",
    ]);
    let target = lines(&[
        "header",
        "// BEGIN WORKFLOW AREA imports FOR web",
        "import a;",
        "import custom;",
        "// END WORKFLOW AREA",
        "footer",
    ]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert!(report.passed);
    assert!(report.violations.is_empty());
    assert!(report.format_error().is_empty());
    assert!(validate_consistency(&source, &target, TPL, GEN).is_ok());
}

#[test]
fn test_workflow_order_does_not_matter() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web api", "// END WORKFLOW AREA"]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR api web", "// END WORKFLOW AREA"]);

    assert!(validate_consistency(&source, &target, TPL, GEN).is_ok());
}

#[test]
fn test_once_area_missing_from_target_is_tolerated() {
    let source = lines(&[
        "// BEGIN ONCE WORKFLOW AREA setup FOR web IF upload",
        "multipart();",
        "// ELSE",
        "json();",
        "// END WORKFLOW AREA",
    ]);
    let target = lines(&["multipart();"]);

    assert!(validate_consistency(&source, &target, TPL, GEN).is_ok());
}

#[test]
fn test_empty_files_pass() {
    assert!(validate_consistency(&[], &[], TPL, GEN).is_ok());
}

// =========================================================================
// Failing cases
// =========================================================================

#[test]
fn test_unterminated_in_source() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "x"]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert!(!report.passed);
    assert_eq!(report.violations[0].kind, ViolationKind::Unterminated);
    assert_eq!(report.violations[0].file_path, TPL);
    assert_eq!(report.violations[0].line_number, 1);
}

#[test]
fn test_unterminated_in_target() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR web"]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::Unterminated);
    assert_eq!(report.violations[0].file_path, GEN);
}

#[test]
fn test_nested_begin_is_rejected() {
    let source = lines(&[
        "// BEGIN WORKFLOW AREA outer FOR web",
        "// BEGIN WORKFLOW AREA inner FOR web",
        "// END WORKFLOW AREA",
    ]);

    let found = kinds(&source, &source);

    assert!(found.contains(&ViolationKind::Unterminated));
}

#[test]
fn test_duplicate_key_in_one_file() {
    let source = lines(&[
        "// BEGIN WORKFLOW AREA a FOR web",
        "// END WORKFLOW AREA",
        "// BEGIN WORKFLOW AREA a FOR web",
        "// END WORKFLOW AREA",
    ]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::Duplicate);
    assert_eq!(report.violations[0].line_number, 3);
}

#[test]
fn test_duplicate_detected_across_workflow_order() {
    let target = lines(&[
        "// BEGIN WORKFLOW AREA a FOR web api",
        "// END WORKFLOW AREA",
        "// BEGIN WORKFLOW AREA a FOR api web",
        "// END WORKFLOW AREA",
    ]);
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web api", "// END WORKFLOW AREA"]);

    assert_eq!(kinds(&source, &target), vec![ViolationKind::Duplicate]);
}

#[test]
fn test_missing_in_target() {
    let source = lines(&[
        "// BEGIN WORKFLOW AREA a FOR web",
        "// END WORKFLOW AREA",
        "// BEGIN WORKFLOW AREA b FOR web",
        "// END WORKFLOW AREA",
    ]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::MissingInTarget);
    assert_eq!(report.violations[0].area, "b");
    assert_eq!(report.violations[0].line_number, 3);
}

#[test]
fn test_unexpected_in_target() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);
    let target = lines(&[
        "// BEGIN WORKFLOW AREA a FOR web",
        "// END WORKFLOW AREA",
        "// BEGIN ONCE WORKFLOW AREA extra FOR web",
        "// END WORKFLOW AREA",
    ]);

    let report = check_consistency(&source, &target, TPL, GEN);

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::UnexpectedInTarget);
    assert_eq!(report.violations[0].file_path, GEN);
}

#[test]
fn test_changed_header_shows_as_missing_and_unexpected() {
    let source = lines(&["// BEGIN SORTED WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);
    let target = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);

    assert_eq!(
        kinds(&source, &target),
        vec![ViolationKind::MissingInTarget, ViolationKind::UnexpectedInTarget]
    );
}

#[test]
fn test_changed_comment_prefix_is_a_different_area() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);
    let target = lines(&["# BEGIN WORKFLOW AREA a FOR web", "# END WORKFLOW AREA"]);

    assert_eq!(
        kinds(&source, &target),
        vec![ViolationKind::MissingInTarget, ViolationKind::UnexpectedInTarget]
    );
}

#[test]
fn test_validate_returns_validation_error() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "// END WORKFLOW AREA"]);

    let err = validate_consistency(&source, &[], TPL, GEN).unwrap_err();

    match err {
        SyncError::ValidationError(report) => {
            assert_eq!(report.source_path, TPL);
            assert_eq!(report.target_path, GEN);
            assert_eq!(report.violations.len(), 1);
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_format_error_names_area_and_both_paths() {
    let source = lines(&["// BEGIN WORKFLOW AREA routes FOR web", "// END WORKFLOW AREA"]);

    let msg = check_consistency(&source, &[], TPL, GEN).format_error();

    assert!(msg.contains("routes"));
    assert!(msg.contains(TPL));
    assert!(msg.contains(GEN));
    assert!(msg.contains("templates/routes.ts:1"));
}

#[test]
fn test_repeated_checks_give_same_result() {
    let source = lines(&["// BEGIN WORKFLOW AREA a FOR web", "x"]);

    let first = kinds(&source, &[]);
    let second = kinds(&source, &[]);

    assert_eq!(first, second);
}

// =========================================================================
// Header self-check
// =========================================================================

fn diff(source: &str, target: &str) -> Option<String> {
    header_difference(
        &parse_area_start(source).unwrap(),
        &parse_area_start(target).unwrap(),
    )
}

#[test]
fn test_header_difference_ignores_workflow_order() {
    assert_eq!(
        diff(
            "// BEGIN SORTED WORKFLOW AREA a FOR w1 w2 IF f",
            "# BEGIN SORTED WORKFLOW AREA a FOR w2 w1 IF f"
        ),
        None
    );
}

#[test]
fn test_header_difference_names_first_mismatched_field() {
    let cases = [
        (
            "// BEGIN WORKFLOW AREA a FOR w1",
            "// BEGIN WORKFLOW AREA b FOR w1",
            "name 'a' vs 'b'",
        ),
        (
            "// BEGIN SORTED WORKFLOW AREA a FOR w1",
            "// BEGIN WORKFLOW AREA a FOR w1",
            "SORTED true vs false",
        ),
        (
            "// BEGIN WORKFLOW AREA a FOR w1",
            "// BEGIN ONCE WORKFLOW AREA a FOR w1",
            "ONCE false vs true",
        ),
        (
            "// BEGIN WORKFLOW AREA a FOR w1 IF f",
            "// BEGIN WORKFLOW AREA a FOR w1",
            "IF f vs -",
        ),
        (
            "// BEGIN WORKFLOW AREA a FOR w1 w2",
            "// BEGIN WORKFLOW AREA a FOR w2",
            "workflows 'w1 w2' vs 'w2'",
        ),
    ];

    for (source, target, expected) in cases {
        assert_eq!(diff(source, target).as_deref(), Some(expected), "{}", source);
    }
}

#[test]
fn test_mismatch_violation_message() {
    let detail = diff(
        "// BEGIN SORTED WORKFLOW AREA deps FOR w1",
        "// BEGIN WORKFLOW AREA deps FOR w1",
    )
    .unwrap();
    let report = ConsistencyReport::fail(
        TPL,
        GEN,
        vec![ConsistencyViolation::new(ViolationKind::Mismatch, "deps", GEN, 4).with_detail(detail)],
    );

    assert!(report.format_error().contains(
        "apps/web/routes.ts:4  area 'deps' differs between template and generated file: SORTED true vs false"
    ));
}

//! Core types for consistency results and violations.

use std::fmt;

/// Kind of structural mismatch between a template and its generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// BEGIN marker without a matching END.
    Unterminated,
    /// Two areas in one file share an identity key.
    Duplicate,
    /// Area declared by the template is absent from the generated file.
    MissingInTarget,
    /// Area in the generated file is not declared by the template.
    UnexpectedInTarget,
    /// Areas share a key but their headers disagree.
    Mismatch,
}

/// A single consistency violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyViolation {
    /// What went wrong.
    pub kind: ViolationKind,
    /// Name of the offending area.
    pub area: String,
    /// File in which the offending area was found.
    pub file_path: String,
    /// Line number of the area's BEGIN marker (1-based).
    pub line_number: usize,
    /// Extra context for `Mismatch` violations.
    pub detail: Option<String>,
}

impl ConsistencyViolation {
    /// Create a new violation.
    pub fn new(
        kind: ViolationKind,
        area: impl Into<String>,
        file_path: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            kind,
            area: area.into(),
            file_path: file_path.into(),
            line_number,
            detail: None,
        }
    }

    /// Attach extra context.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn message(&self) -> String {
        match self.kind {
            ViolationKind::Unterminated => {
                format!("area '{}' has a BEGIN marker without a matching END", self.area)
            }
            ViolationKind::Duplicate => {
                format!("area '{}' is declared more than once", self.area)
            }
            ViolationKind::MissingInTarget => format!(
                "area '{}' is declared by the template but missing from the generated file",
                self.area
            ),
            ViolationKind::UnexpectedInTarget => format!(
                "area '{}' is in the generated file but not declared by the template",
                self.area
            ),
            ViolationKind::Mismatch => format!(
                "area '{}' differs between template and generated file: {}",
                self.area,
                self.detail.as_deref().unwrap_or("header mismatch")
            ),
        }
    }
}

/// Result of comparing the areas of a template and a generated file.
#[derive(Debug, Clone)]
pub struct ConsistencyReport {
    /// Whether the two files are consistent.
    pub passed: bool,
    /// Template path, as given by the caller.
    pub source_path: String,
    /// Generated file path, as given by the caller.
    pub target_path: String,
    /// Violations in discovery order (empty if passed).
    pub violations: Vec<ConsistencyViolation>,
}

impl ConsistencyReport {
    /// Create a passing report.
    pub fn pass(source_path: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            passed: true,
            source_path: source_path.into(),
            target_path: target_path.into(),
            violations: Vec::new(),
        }
    }

    /// Create a failing report with violations.
    pub fn fail(
        source_path: impl Into<String>,
        target_path: impl Into<String>,
        violations: Vec<ConsistencyViolation>,
    ) -> Self {
        Self {
            passed: false,
            source_path: source_path.into(),
            target_path: target_path.into(),
            violations,
        }
    }

    /// Format the report as a user-friendly error message.
    ///
    /// ```text
    /// workflow areas of 'apps/web/routes.ts' do not match template 'templates/routes.ts'
    ///
    /// templates/routes.ts:12  area 'upload' is declared by the template but missing from the generated file
    /// ```
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = format!(
            "workflow areas of '{}' do not match template '{}'\n\n",
            self.target_path, self.source_path
        );

        for violation in &self.violations {
            msg.push_str(&format!(
                "{}:{}  {}\n",
                violation.file_path,
                violation.line_number,
                violation.message()
            ));
        }

        msg
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_error().trim_end())
    }
}

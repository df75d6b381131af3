use serde::Serialize;

use crate::form::error::FieldShapeError;
use crate::form::validate::{ValidationIssue, has_errors};
use crate::page::host::MountOutcome;
use crate::render::table::{OmitReason, RowOutcome};

// ============================================================================
// Render report — what a single render did with each field
// ============================================================================

/// One line per descriptor, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSummary {
    pub position: usize,
    pub name: String,
    pub shape: String,

    /// Byte length of the row markup, `None` when the field produced no row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub omitted: Option<OmitReason>,
}

/// Aggregated result of rendering a form.
///
/// Built from the row outcomes via `from_rows()`, then enriched with loader
/// and validation findings. Consumed by the console reporter.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_title: Option<String>,

    /// Descriptors seen by the renderer
    pub total: usize,

    /// Descriptors that produced a row
    pub rendered: usize,

    /// Descriptors that produced nothing
    pub omitted: usize,

    pub rows: Vec<RowSummary>,

    /// Entries of the form file that were dropped before rendering
    pub skipped: Vec<String>,

    pub issues: Vec<ValidationIssue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<MountOutcome>,
}

impl RenderReport {
    pub fn from_rows(form_title: Option<&str>, rows: &[RowOutcome]) -> Self {
        let summaries: Vec<RowSummary> = rows
            .iter()
            .enumerate()
            .map(|(position, row)| RowSummary {
                position,
                name: row.name().to_string(),
                shape: row.shape().to_string(),
                bytes: row.fragment().map(str::len),
                omitted: match row {
                    RowOutcome::Omitted { reason, .. } => Some(*reason),
                    RowOutcome::Rendered { .. } => None,
                },
            })
            .collect();

        let rendered = summaries.iter().filter(|r| r.omitted.is_none()).count();
        Self {
            form_title: form_title.map(str::to_string),
            total: summaries.len(),
            rendered,
            omitted: summaries.len() - rendered,
            rows: summaries,
            skipped: vec![],
            issues: vec![],
            mount: None,
        }
    }

    pub fn with_skipped(mut self, skipped: &[FieldShapeError]) -> Self {
        self.skipped = skipped.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_issues(mut self, issues: Vec<ValidationIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_mount(mut self, outcome: MountOutcome) -> Self {
        self.mount = Some(outcome);
        self
    }

    /// Skipped entries and error-level issues both make a form definition bad.
    pub fn has_errors(&self) -> bool {
        !self.skipped.is_empty() || has_errors(&self.issues)
    }
}

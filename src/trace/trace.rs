use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    page::host::MountOutcome,
    render::table::{OmitReason, RowOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStage {
    Field,
    Table,
    Mount,
}

/// One line of the render trace.
#[derive(Debug, Serialize)]
pub struct RenderEvent {
    pub timestamp_ms: u128,
    pub stage: RenderStage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    pub outcome: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl RenderEvent {
    pub fn now(stage: RenderStage, outcome: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            stage,
            position: None,
            field: None,
            shape: None,
            outcome: outcome.to_string(),
            bytes: None,
            container: None,
            fingerprint: None,
        }
    }

    /// Event for one descriptor of the form.
    pub fn for_row(position: usize, row: &RowOutcome) -> Self {
        let (outcome, bytes) = match row {
            RowOutcome::Rendered { fragment, .. } => ("rendered".to_string(), Some(fragment.len())),
            RowOutcome::Omitted { reason, .. } => (format!("omitted:{}", omit_label(*reason)), None),
        };
        let mut event = Self::now(RenderStage::Field, outcome);
        event.position = Some(position);
        event.field = Some(row.name().to_string());
        event.shape = Some(row.shape().to_string());
        event.bytes = bytes;
        event
    }

    /// Event for the assembled table.
    pub fn for_table(markup: &str, rows: usize) -> Self {
        Self::now(RenderStage::Table, format!("{} rows", rows)).with_markup(markup)
    }

    pub fn for_mount(container: &str, outcome: MountOutcome, markup: &str) -> Self {
        let label = match outcome {
            MountOutcome::Mounted => "mounted",
            MountOutcome::ContainerMissing => "container_missing",
        };
        let mut event = Self::now(RenderStage::Mount, label);
        event.container = Some(container.to_string());
        if outcome == MountOutcome::Mounted {
            event = event.with_markup(markup);
        }
        event
    }

    pub fn with_markup(mut self, markup: &str) -> Self {
        self.bytes = Some(markup.len());
        self.fingerprint = Some(markup_fingerprint(markup));
        self
    }
}

fn omit_label(reason: OmitReason) -> &'static str {
    match reason {
        OmitReason::EmptyOptions => "empty_options",
    }
}

/// SHA-1 hex digest of the markup, so two traced runs can be compared
/// without storing the markup itself.
pub fn markup_fingerprint(markup: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(markup.as_bytes());
    format!("{:x}", hasher.finalize())
}

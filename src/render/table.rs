use serde::Serialize;

use crate::form::field_model::FieldDescriptor;
use crate::render::fragment::render_field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OmitReason {
    /// Choice or select field with an empty option list
    EmptyOptions,
}

/// What became of one descriptor during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Rendered {
        name: String,
        shape: String,
        fragment: String,
    },
    Omitted {
        name: String,
        shape: String,
        reason: OmitReason,
    },
}

impl RowOutcome {
    pub fn name(&self) -> &str {
        match self {
            RowOutcome::Rendered { name, .. } | RowOutcome::Omitted { name, .. } => name,
        }
    }

    pub fn shape(&self) -> &str {
        match self {
            RowOutcome::Rendered { shape, .. } | RowOutcome::Omitted { shape, .. } => shape,
        }
    }

    pub fn fragment(&self) -> Option<&str> {
        match self {
            RowOutcome::Rendered { fragment, .. } => Some(fragment),
            RowOutcome::Omitted { .. } => None,
        }
    }
}

/// Render every descriptor, in order, keeping a record of omitted fields.
pub fn render_rows(fields: &[FieldDescriptor]) -> Vec<RowOutcome> {
    fields
        .iter()
        .map(|field| {
            let name = field.name().to_string();
            let shape = field.shape();
            match render_field(field) {
                Some(fragment) => RowOutcome::Rendered {
                    name,
                    shape,
                    fragment,
                },
                None => RowOutcome::Omitted {
                    name,
                    shape,
                    reason: OmitReason::EmptyOptions,
                },
            }
        })
        .collect()
}

/// Join the rendered rows of `outcomes` into a single `<table>`.
pub fn assemble_table(outcomes: &[RowOutcome]) -> String {
    let body: String = outcomes.iter().filter_map(RowOutcome::fragment).collect();
    format!("<table>{}</table>", body)
}

/// Render the whole descriptor list as one `<table>`. Fields that render to
/// nothing leave no trace in the output.
pub fn render_table(fields: &[FieldDescriptor]) -> String {
    assemble_table(&render_rows(fields))
}

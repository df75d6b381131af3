use tracing::{debug, info};

use crate::{
    form::field_model::Form,
    page::host::{HostPage, MountOutcome, mount},
    render::table::{RowOutcome, assemble_table, render_rows},
    trace::{logger::TraceLogger, trace::RenderEvent},
};

pub mod cli;
pub mod form;
pub mod page;
pub mod render;
pub mod report;
pub mod trace;

/// Markup for a whole form together with what happened to each field.
#[derive(Debug, Clone)]
pub struct TableRender {
    pub markup: String,
    pub rows: Vec<RowOutcome>,
}

impl TableRender {
    pub fn rendered_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.fragment().is_some()).count()
    }
}

/// Result of rendering a form into a host page.
#[derive(Debug, Clone)]
pub struct RenderRun {
    pub table: TableRender,
    pub mount: MountOutcome,
}

/// Render `form` into a table, recording one trace event per field and one
/// for the assembled table.
pub fn render_traced(form: &Form, tracer: &TraceLogger) -> TableRender {
    let rows = render_rows(&form.fields);

    for (position, row) in rows.iter().enumerate() {
        if let RowOutcome::Omitted { name, reason, .. } = row {
            debug!(field = name.as_str(), ?reason, "field produced no row");
        }
        tracer.log(&RenderEvent::for_row(position, row));
    }

    let table = TableRender {
        markup: assemble_table(&rows),
        rows,
    };
    tracer.log(&RenderEvent::for_table(&table.markup, table.rendered_rows()));
    info!(
        fields = form.len(),
        rows = table.rendered_rows(),
        bytes = table.markup.len(),
        "form table rendered"
    );

    table
}

/// Entry point: render `form` and place the table inside `container_id`.
///
/// A page without that container is left untouched.
pub fn render_form<H: HostPage + ?Sized>(
    form: &Form,
    host: &mut H,
    container_id: &str,
    tracer: &TraceLogger,
) -> RenderRun {
    let table = render_traced(form, tracer);
    let outcome = mount(host, container_id, &table.markup);
    tracer.log(&RenderEvent::for_mount(container_id, outcome, &table.markup));

    RenderRun {
        table,
        mount: outcome,
    }
}

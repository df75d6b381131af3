use std::path::Path;

use tracing::{info, warn};

use crate::form::catalog::contact_form;
use crate::form::error::FormError;
use crate::form::loader::{LoadedForm, load_form};
use crate::form::validate::validate;
use crate::page::host::MountOutcome;
use crate::page::html_page::HtmlPage;
use crate::render::table::render_rows;
use crate::report::console::format_console_report;
use crate::report::report_model::RenderReport;
use crate::trace::logger::TraceLogger;
use crate::{render_form, render_traced};

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(
    form_path: Option<&str>,
    output: Option<&str>,
    tracer: &TraceLogger,
) -> Result<(), FormError> {
    let loaded = load_form_or_default(form_path)?;
    let table = render_traced(&loaded.form, tracer);
    write_output(output, &table.markup)
}

// ============================================================================
// mount subcommand
// ============================================================================

/// Render the form into `container` of the page at `page_path`.
///
/// When the container does not exist the page is written out unchanged.
pub fn cmd_mount(
    page_path: &str,
    container: &str,
    form_path: Option<&str>,
    output: Option<&str>,
    tracer: &TraceLogger,
) -> Result<MountOutcome, FormError> {
    let html = std::fs::read_to_string(page_path).map_err(|source| FormError::Read {
        path: page_path.into(),
        source,
    })?;
    let loaded = load_form_or_default(form_path)?;

    let mut page = HtmlPage::new(html);
    let run = render_form(&loaded.form, &mut page, container, tracer);
    if run.mount == MountOutcome::ContainerMissing {
        warn!("page '{}' has no element with id '{}'", page_path, container);
    }

    write_output(output, &page.into_html())?;
    Ok(run.mount)
}

// ============================================================================
// check subcommand
// ============================================================================

/// Validate and dry-render a form. Returns whether the definition is clean.
pub fn cmd_check(form_path: Option<&str>) -> Result<bool, FormError> {
    let loaded = load_form_or_default(form_path)?;
    let report = check_form(&loaded);
    print!("{}", format_console_report(&report));
    Ok(!report.has_errors())
}

/// Build the report `check` prints for an already loaded form.
pub fn check_form(loaded: &LoadedForm) -> RenderReport {
    let rows = render_rows(&loaded.form.fields);
    RenderReport::from_rows(loaded.form.title.as_deref(), &rows)
        .with_skipped(&loaded.skipped)
        .with_issues(validate(&loaded.form))
}

// ============================================================================
// Helpers
// ============================================================================

/// Load the form at `path`, or the built-in contact form when no path is given.
pub fn load_form_or_default(path: Option<&str>) -> Result<LoadedForm, FormError> {
    match path {
        Some(p) => {
            info!("loading form definition from {}", p);
            load_form(Path::new(p))
        }
        None => Ok(LoadedForm {
            form: contact_form(),
            skipped: vec![],
        }),
    }
}

pub fn build_tracer(path: Option<&str>) -> TraceLogger {
    match path {
        Some(p) => TraceLogger::new(p),
        None => TraceLogger::disabled(),
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), FormError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| FormError::Write {
            path: path.into(),
            source,
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

use crate::form::validate::Severity;
use crate::page::host::MountOutcome;
use crate::report::report_model::RenderReport;
use crate::render::table::OmitReason;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a render report for terminal output.
///
/// Produces output like:
/// ```text
/// === Form: お問い合わせ ===
///
/// ✓  1 name           input:text      (121 bytes)
/// –  7 inquiry_kind   select          omitted: no options
///
///     [ERROR] field name 'tel' is used more than once
///
/// === Rows: 7 rendered, 1 omitted (8 fields) ===
/// ```
pub fn format_console_report(report: &RenderReport) -> String {
    let mut out = String::new();

    let title = report.form_title.as_deref().unwrap_or("(untitled)");
    out.push_str(&format!("=== Form: {} ===\n\n", title));

    for row in &report.rows {
        match row.omitted {
            None => out.push_str(&format!(
                "\u{2713} {:>2} {:<16} {:<16}({} bytes)\n",
                row.position + 1,
                row.name,
                row.shape,
                row.bytes.unwrap_or_default()
            )),
            Some(reason) => out.push_str(&format!(
                "\u{2013} {:>2} {:<16} {:<16}omitted: {}\n",
                row.position + 1,
                row.name,
                row.shape,
                describe_omission(reason)
            )),
        }
    }

    if !report.skipped.is_empty() || !report.issues.is_empty() {
        out.push('\n');
    }

    for skipped in &report.skipped {
        out.push_str(&format!("    [SKIPPED] {}\n", skipped));
    }

    for issue in &report.issues {
        let level = match issue.severity() {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        out.push_str(&format!("    [{}] {}\n", level, issue));
    }

    if let Some(outcome) = report.mount {
        let text = match outcome {
            MountOutcome::Mounted => "mounted",
            MountOutcome::ContainerMissing => "container not found, page unchanged",
        };
        out.push_str(&format!("\nMount: {}\n", text));
    }

    out.push_str(&format!(
        "\n=== Rows: {} rendered, {} omitted ({} fields) ===\n",
        report.rendered, report.omitted, report.total
    ));

    out
}

fn describe_omission(reason: OmitReason) -> &'static str {
    match reason {
        OmitReason::EmptyOptions => "no options",
    }
}

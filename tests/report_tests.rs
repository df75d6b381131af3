use contact_form::form::catalog::contact_form;
use contact_form::form::error::FieldShapeError;
use contact_form::form::field_model::{ChoiceKind, FieldDescriptor, TextInputType};
use contact_form::form::validate::ValidationIssue;
use contact_form::page::host::MountOutcome;
use contact_form::render::table::{OmitReason, render_rows};
use contact_form::report::console::format_console_report;
use contact_form::report::report_model::RenderReport;

// ============================================================================
// Helper builders
// ============================================================================

fn partly_empty_report() -> RenderReport {
    let fields = vec![
        FieldDescriptor::text(TextInputType::Email, "email", "Email", "you@example.com"),
        FieldDescriptor::choice(ChoiceKind::Radio, "reply", "Reply", &[]),
        FieldDescriptor::textarea("detail", "Detail", ""),
    ];
    RenderReport::from_rows(Some("Support"), &render_rows(&fields))
}

// ============================================================================
// Report counts
// ============================================================================

#[test]
fn report_from_rows_counts() {
    let report = partly_empty_report();
    assert_eq!(report.total, 3);
    assert_eq!(report.rendered, 2);
    assert_eq!(report.omitted, 1);
    assert_eq!(report.rows[1].omitted, Some(OmitReason::EmptyOptions));
    assert_eq!(report.rows[1].bytes, None);
    assert!(report.rows[0].bytes.unwrap() > 0);
}

#[test]
fn warnings_alone_are_not_errors() {
    let report = partly_empty_report().with_issues(vec![ValidationIssue::EmptyOptions {
        field: "reply".into(),
    }]);
    assert!(!report.has_errors());
}

#[test]
fn error_level_issues_are_errors() {
    let report = partly_empty_report().with_issues(vec![ValidationIssue::DuplicateName {
        name: "email".into(),
    }]);
    assert!(report.has_errors());
}

#[test]
fn skipped_entries_are_errors() {
    let report = partly_empty_report().with_skipped(&[FieldShapeError::UnknownTag {
        name: "submit".into(),
        tag: "button".into(),
    }]);
    assert!(report.has_errors());
    assert_eq!(report.skipped, vec!["field 'submit': unknown tag 'button'".to_string()]);
}

// ============================================================================
// Console output
// ============================================================================

#[test]
fn console_lists_every_field_in_order() {
    let text = format_console_report(&partly_empty_report());
    let email = text.find("email").unwrap();
    let reply = text.find("reply").unwrap();
    let detail = text.find("detail").unwrap();
    assert!(email < reply && reply < detail);
    assert!(text.contains("omitted: no options"));
    assert!(text.ends_with("=== Rows: 2 rendered, 1 omitted (3 fields) ===\n"));
}

#[test]
fn console_shows_mount_outcome() {
    let report = partly_empty_report().with_mount(MountOutcome::ContainerMissing);
    let text = format_console_report(&report);
    assert!(text.contains("Mount: container not found, page unchanged"));
}

#[test]
fn console_untitled_form() {
    let report = RenderReport::from_rows(None, &[]);
    let text = format_console_report(&report);
    assert!(text.starts_with("=== Form: (untitled) ===\n"));
    assert!(text.contains("0 rendered, 0 omitted (0 fields)"));
}

#[test]
fn report_serializes_to_json() {
    let form = contact_form();
    let report = RenderReport::from_rows(form.title.as_deref(), &render_rows(&form.fields))
        .with_mount(MountOutcome::Mounted);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rendered"], 8);
    assert_eq!(json["mount"], "mounted");
    assert_eq!(json["rows"][6]["shape"], "select");
}

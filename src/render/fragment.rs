use crate::form::field_model::{ChoiceKind, ChoiceOption, FieldDescriptor, SelectOption, TextInputType};
use crate::render::escape::escape_html;

// ============================================================================
// Field -> table row
// ============================================================================

/// Render one descriptor as a `<tr>` with one `<th>` (label) and one `<td>`.
///
/// Returns `None` for choice and select fields without options; those fields
/// produce no row at all.
pub fn render_field(field: &FieldDescriptor) -> Option<String> {
    match field {
        FieldDescriptor::Text {
            input_type,
            name,
            label,
            placeholder,
        } => Some(text_row(*input_type, name, label, placeholder)),
        FieldDescriptor::Choice {
            kind,
            name,
            label,
            options,
        } => choice_row(*kind, name, label, options),
        FieldDescriptor::Select {
            name,
            label,
            options,
        } => select_row(name, label, options),
        FieldDescriptor::TextArea {
            name,
            label,
            placeholder,
        } => Some(textarea_row(name, label, placeholder)),
    }
}

fn row(label: &str, cell: &str) -> String {
    format!("<tr><th>{}</th><td>{}</td></tr>", escape_html(label), cell)
}

fn text_row(input_type: TextInputType, name: &str, label: &str, placeholder: &str) -> String {
    let input = format!(
        r#"<input type="{}" name="{}" placeholder="{}" />"#,
        input_type.as_str(),
        escape_html(name),
        escape_html(placeholder),
    );
    row(label, &input)
}

fn choice_row(kind: ChoiceKind, name: &str, label: &str, options: &[ChoiceOption]) -> Option<String> {
    if options.is_empty() {
        return None;
    }

    let name = escape_html(name);
    let controls: String = options
        .iter()
        .map(|opt| {
            let id = format!("{}-{}", name, opt.value);
            format!(
                r#"<input type="{kind}" id="{id}" name="{name}" value="{value}"><label for="{id}">{caption}</label>"#,
                kind = kind.as_str(),
                id = id,
                name = name,
                value = opt.value,
                caption = escape_html(&opt.label),
            )
        })
        .collect();

    Some(row(label, &controls))
}

fn select_row(name: &str, label: &str, options: &[SelectOption]) -> Option<String> {
    if options.is_empty() {
        return None;
    }

    let entries: String = options
        .iter()
        .map(|opt| format!(r#"<option value="{}">{}</option>"#, opt.value, escape_html(&opt.text)))
        .collect();

    let select = format!(r#"<select name="{}">{}</select>"#, escape_html(name), entries);
    Some(row(label, &select))
}

fn textarea_row(name: &str, label: &str, placeholder: &str) -> String {
    let textarea = format!(
        r#"<textarea name="{}" placeholder="{}"></textarea>"#,
        escape_html(name),
        escape_html(placeholder),
    );
    row(label, &textarea)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_row() {
        let field = FieldDescriptor::text(TextInputType::Tel, "tel", "Phone", "080-1234-5678");
        assert_eq!(
            render_field(&field).unwrap(),
            r#"<tr><th>Phone</th><td><input type="tel" name="tel" placeholder="080-1234-5678" /></td></tr>"#
        );
    }

    #[test]
    fn radio_field_row_pairs_inputs_and_labels() {
        let field = FieldDescriptor::choice(ChoiceKind::Radio, "contact", "Reply by", &[("Mail", 0), ("Phone", 1)]);
        assert_eq!(
            render_field(&field).unwrap(),
            concat!(
                r#"<tr><th>Reply by</th><td>"#,
                r#"<input type="radio" id="contact-0" name="contact" value="0"><label for="contact-0">Mail</label>"#,
                r#"<input type="radio" id="contact-1" name="contact" value="1"><label for="contact-1">Phone</label>"#,
                r#"</td></tr>"#
            )
        );
    }

    #[test]
    fn checkbox_field_uses_checkbox_type() {
        let field = FieldDescriptor::choice(ChoiceKind::Checkbox, "time", "Time", &[("AM", 0)]);
        let html = render_field(&field).unwrap();
        assert!(html.contains(r#"<input type="checkbox" id="time-0" name="time" value="0">"#));
    }

    #[test]
    fn negative_option_values_keep_their_sign_in_ids() {
        let field = FieldDescriptor::choice(ChoiceKind::Radio, "offset", "Offset", &[("minus one", -1)]);
        assert!(render_field(&field).unwrap().contains(r#"id="offset--1""#));
    }

    #[test]
    fn select_field_row() {
        let field = FieldDescriptor::select("kind", "Kind", &[("Returns", 0), ("Other", 2)]);
        assert_eq!(
            render_field(&field).unwrap(),
            r#"<tr><th>Kind</th><td><select name="kind"><option value="0">Returns</option><option value="2">Other</option></select></td></tr>"#
        );
    }

    #[test]
    fn textarea_field_row() {
        let field = FieldDescriptor::textarea("detail", "Detail", "Tell us more");
        assert_eq!(
            render_field(&field).unwrap(),
            r#"<tr><th>Detail</th><td><textarea name="detail" placeholder="Tell us more"></textarea></td></tr>"#
        );
    }

    #[test]
    fn empty_options_render_nothing() {
        assert_eq!(render_field(&FieldDescriptor::select("kind", "Kind", &[])), None);
        assert_eq!(
            render_field(&FieldDescriptor::choice(ChoiceKind::Checkbox, "time", "Time", &[])),
            None
        );
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let field = FieldDescriptor::text(TextInputType::Text, "q", "<b>Query</b>", r#"say "hi""#);
        let html = render_field(&field).unwrap();
        assert!(html.contains("<th>&lt;b&gt;Query&lt;/b&gt;</th>"));
        assert!(html.contains(r#"placeholder="say &quot;hi&quot;""#));
    }

    #[test]
    fn choice_captions_and_names_are_escaped() {
        let field = FieldDescriptor::choice(ChoiceKind::Radio, r#"a"b"#, "Pick", &[("<i>yes</i>", 1)]);
        let html = render_field(&field).unwrap();
        assert!(html.contains(r#"id="a&quot;b-1" name="a&quot;b" value="1""#));
        assert!(html.contains(r#"<label for="a&quot;b-1">&lt;i&gt;yes&lt;/i&gt;</label>"#));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn select_option_text_and_name_are_escaped() {
        let field = FieldDescriptor::select("k<ind", "Kind", &[(r#"Fish & "Chips""#, 0)]);
        let html = render_field(&field).unwrap();
        assert!(html.contains(r#"<select name="k&lt;ind">"#));
        assert!(html.contains(r#"<option value="0">Fish &amp; &quot;Chips&quot;</option>"#));
    }

    #[test]
    fn text_and_textarea_names_are_escaped() {
        let text = FieldDescriptor::text(TextInputType::Email, "e'mail", "Email", "");
        assert!(render_field(&text).unwrap().contains(r#"name="e&#39;mail""#));

        let area = FieldDescriptor::textarea(r#"x"><script>"#, "Detail", "");
        let html = render_field(&area).unwrap();
        assert!(html.contains(r#"name="x&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<script>"));
    }
}

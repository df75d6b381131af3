use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::form::field_model::{FieldDescriptor, Form};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Two fields share a name; submitted values cannot be told apart
    DuplicateName { name: String },

    /// Two options in one field share a value; their control ids collide
    DuplicateOptionValue { field: String, value: i64 },

    /// Field at this position has an empty name
    EmptyName { index: usize },

    /// Choice/select field without options; it renders no row
    EmptyOptions { field: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::EmptyOptions { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateName { name } => {
                write!(f, "field name '{}' is used more than once", name)
            }
            ValidationIssue::DuplicateOptionValue { field, value } => {
                write!(f, "field '{}' has option value {} more than once", field, value)
            }
            ValidationIssue::EmptyName { index } => {
                write!(f, "field #{} has an empty name", index + 1)
            }
            ValidationIssue::EmptyOptions { field } => {
                write!(f, "field '{}' has no options and will not be rendered", field)
            }
        }
    }
}

/// Check the naming invariants of a form. Issues are reported in field order.
pub fn validate(form: &Form) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut reported_names: HashSet<&str> = HashSet::new();

    for (index, field) in form.fields.iter().enumerate() {
        let name = field.name();

        if name.is_empty() {
            issues.push(ValidationIssue::EmptyName { index });
        } else if !seen_names.insert(name) && reported_names.insert(name) {
            issues.push(ValidationIssue::DuplicateName {
                name: name.to_string(),
            });
        }

        if field.option_count() == Some(0) {
            issues.push(ValidationIssue::EmptyOptions {
                field: name.to_string(),
            });
        }

        for value in duplicate_option_values(field) {
            issues.push(ValidationIssue::DuplicateOptionValue {
                field: name.to_string(),
                value,
            });
        }
    }

    issues
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity() == Severity::Error)
}

fn duplicate_option_values(field: &FieldDescriptor) -> Vec<i64> {
    let values: Vec<i64> = match field {
        FieldDescriptor::Choice { options, .. } => options.iter().map(|o| o.value).collect(),
        FieldDescriptor::Select { options, .. } => options.iter().map(|o| o.value).collect(),
        FieldDescriptor::Text { .. } | FieldDescriptor::TextArea { .. } => return vec![],
    };

    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for value in values {
        if !seen.insert(value) && !dupes.contains(&value) {
            dupes.push(value);
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field_model::{ChoiceKind, TextInputType};

    #[test]
    fn duplicate_names_reported_once() {
        let form = Form::new(vec![
            FieldDescriptor::text(TextInputType::Text, "name", "A", ""),
            FieldDescriptor::textarea("name", "B", ""),
            FieldDescriptor::text(TextInputType::Tel, "name", "C", ""),
        ]);
        assert_eq!(
            validate(&form),
            vec![ValidationIssue::DuplicateName { name: "name".into() }]
        );
    }

    #[test]
    fn duplicate_option_values_within_a_field() {
        let form = Form::new(vec![FieldDescriptor::choice(
            ChoiceKind::Radio,
            "contact",
            "Contact",
            &[("mail", 0), ("phone", 0), ("either", 2)],
        )]);
        let issues = validate(&form);
        assert_eq!(
            issues,
            vec![ValidationIssue::DuplicateOptionValue {
                field: "contact".into(),
                value: 0
            }]
        );
        assert!(has_errors(&issues));
    }

    #[test]
    fn same_option_value_in_different_fields_is_fine() {
        let form = Form::new(vec![
            FieldDescriptor::choice(ChoiceKind::Radio, "a", "A", &[("x", 0)]),
            FieldDescriptor::select("b", "B", &[("y", 0)]),
        ]);
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn empty_options_is_only_a_warning() {
        let form = Form::new(vec![FieldDescriptor::select("kind", "Kind", &[])]);
        let issues = validate(&form);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Warning);
        assert!(!has_errors(&issues));
    }

    #[test]
    fn empty_name_is_reported_by_position() {
        let form = Form::new(vec![FieldDescriptor::textarea("", "Detail", "")]);
        assert_eq!(validate(&form), vec![ValidationIssue::EmptyName { index: 0 }]);
        assert_eq!(validate(&form)[0].to_string(), "field #1 has an empty name");
    }
}

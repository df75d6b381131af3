use serde::{Deserialize, Serialize};

use crate::form::error::FieldShapeError;

// ============================================================================
// Field variants
// ============================================================================

/// Free-text input subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    Text,
    Tel,
    Email,
}

impl TextInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Tel => "tel",
            TextInputType::Email => "email",
        }
    }
}

/// Multi-control input subtypes. Radio is single-choice, checkbox multi-choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    Radio,
    Checkbox,
}

impl ChoiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceKind::Radio => "radio",
            ChoiceKind::Checkbox => "checkbox",
        }
    }
}

/// One selectable control of a radio or checkbox group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: i64,
}

/// One entry of a select dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: i64,
}

/// A single form control description.
///
/// The five renderable shapes are exactly: text/tel/email input, radio group,
/// checkbox group, select, textarea. Anything else cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub enum FieldDescriptor {
    Text {
        input_type: TextInputType,
        name: String,
        label: String,
        placeholder: String,
    },
    Choice {
        kind: ChoiceKind,
        name: String,
        label: String,
        options: Vec<ChoiceOption>,
    },
    Select {
        name: String,
        label: String,
        options: Vec<SelectOption>,
    },
    TextArea {
        name: String,
        label: String,
        placeholder: String,
    },
}

impl FieldDescriptor {
    pub fn text(input_type: TextInputType, name: &str, label: &str, placeholder: &str) -> Self {
        FieldDescriptor::Text {
            input_type,
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn choice(kind: ChoiceKind, name: &str, label: &str, options: &[(&str, i64)]) -> Self {
        FieldDescriptor::Choice {
            kind,
            name: name.to_string(),
            label: label.to_string(),
            options: options
                .iter()
                .map(|(label, value)| ChoiceOption {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn select(name: &str, label: &str, options: &[(&str, i64)]) -> Self {
        FieldDescriptor::Select {
            name: name.to_string(),
            label: label.to_string(),
            options: options
                .iter()
                .map(|(text, value)| SelectOption {
                    text: text.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn textarea(name: &str, label: &str, placeholder: &str) -> Self {
        FieldDescriptor::TextArea {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldDescriptor::Text { name, .. }
            | FieldDescriptor::Choice { name, .. }
            | FieldDescriptor::Select { name, .. }
            | FieldDescriptor::TextArea { name, .. } => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldDescriptor::Text { label, .. }
            | FieldDescriptor::Choice { label, .. }
            | FieldDescriptor::Select { label, .. }
            | FieldDescriptor::TextArea { label, .. } => label,
        }
    }

    /// Short shape name used in logs and reports, e.g. `input:email` or `select`.
    pub fn shape(&self) -> String {
        match self {
            FieldDescriptor::Text { input_type, .. } => format!("input:{}", input_type.as_str()),
            FieldDescriptor::Choice { kind, .. } => format!("input:{}", kind.as_str()),
            FieldDescriptor::Select { .. } => "select".to_string(),
            FieldDescriptor::TextArea { .. } => "textarea".to_string(),
        }
    }

    /// Number of options for choice and select fields. `None` for single controls.
    pub fn option_count(&self) -> Option<usize> {
        match self {
            FieldDescriptor::Choice { options, .. } => Some(options.len()),
            FieldDescriptor::Select { options, .. } => Some(options.len()),
            FieldDescriptor::Text { .. } | FieldDescriptor::TextArea { .. } => None,
        }
    }
}

/// An ordered list of field descriptors. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl Form {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: None,
            fields,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// Loosely typed descriptor as it appears in YAML/JSON form files.
///
/// `tag` is the hosting element (`input`, `select`, `textarea`) and `type`
/// the input subtype. `tagName` is accepted as an alias for `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    #[serde(alias = "tagName")]
    pub tag: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    pub name: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ChoiceOption>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

/// A form file after each entry has been decoded on its own. Entries that
/// could not be decoded at all keep their error in place.
#[derive(Debug, Clone)]
pub struct RawForm {
    pub title: Option<String>,
    pub fields: Vec<Result<RawField, FieldShapeError>>,
}

impl TryFrom<RawField> for FieldDescriptor {
    type Error = FieldShapeError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let placeholder = raw.placeholder.unwrap_or_default();

        match raw.tag.as_str() {
            "input" => {
                let input_type = raw.input_type.ok_or_else(|| FieldShapeError::MissingInputType {
                    name: raw.name.clone(),
                })?;
                let text_type = match input_type.as_str() {
                    "text" => Some(TextInputType::Text),
                    "tel" => Some(TextInputType::Tel),
                    "email" => Some(TextInputType::Email),
                    _ => None,
                };
                if let Some(input_type) = text_type {
                    return Ok(FieldDescriptor::Text {
                        input_type,
                        name: raw.name,
                        label: raw.label,
                        placeholder,
                    });
                }
                let kind = match input_type.as_str() {
                    "radio" => ChoiceKind::Radio,
                    "checkbox" => ChoiceKind::Checkbox,
                    _ => {
                        return Err(FieldShapeError::UnknownInputType {
                            name: raw.name,
                            input_type,
                        });
                    }
                };
                Ok(FieldDescriptor::Choice {
                    kind,
                    name: raw.name,
                    label: raw.label,
                    options: raw.values,
                })
            }
            "select" => Ok(FieldDescriptor::Select {
                name: raw.name,
                label: raw.label,
                options: raw.options,
            }),
            "textarea" => Ok(FieldDescriptor::TextArea {
                name: raw.name,
                label: raw.label,
                placeholder,
            }),
            _ => Err(FieldShapeError::UnknownTag {
                name: raw.name,
                tag: raw.tag,
            }),
        }
    }
}

impl From<FieldDescriptor> for RawField {
    fn from(field: FieldDescriptor) -> Self {
        match field {
            FieldDescriptor::Text {
                input_type,
                name,
                label,
                placeholder,
            } => RawField {
                tag: "input".to_string(),
                input_type: Some(input_type.as_str().to_string()),
                name,
                label,
                placeholder: Some(placeholder),
                values: vec![],
                options: vec![],
            },
            FieldDescriptor::Choice {
                kind,
                name,
                label,
                options,
            } => RawField {
                tag: "input".to_string(),
                input_type: Some(kind.as_str().to_string()),
                name,
                label,
                placeholder: None,
                values: options,
                options: vec![],
            },
            FieldDescriptor::Select {
                name,
                label,
                options,
            } => RawField {
                tag: "select".to_string(),
                input_type: None,
                name,
                label,
                placeholder: None,
                values: vec![],
                options,
            },
            FieldDescriptor::TextArea {
                name,
                label,
                placeholder,
            } => RawField {
                tag: "textarea".to_string(),
                input_type: None,
                name,
                label,
                placeholder: Some(placeholder),
                values: vec![],
                options: vec![],
            },
        }
    }
}

impl RawForm {
    /// Convert every entry, keeping the ones that map onto a known shape.
    ///
    /// Malformed entries and entries outside the closed set are returned
    /// alongside the form rather than failing the whole conversion.
    pub fn into_form(self) -> (Form, Vec<FieldShapeError>) {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut skipped = Vec::new();

        for entry in self.fields {
            match entry.and_then(FieldDescriptor::try_from) {
                Ok(field) => fields.push(field),
                Err(e) => skipped.push(e),
            }
        }

        (
            Form {
                title: self.title,
                fields,
            },
            skipped,
        )
    }
}

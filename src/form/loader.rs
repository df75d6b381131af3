use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::form::error::{FieldShapeError, FormError};
use crate::form::field_model::{Form, RawField, RawForm};

/// Encoding of a form definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Yaml,
    Json,
}

impl FormFormat {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FormFormat::Json,
            _ => FormFormat::Yaml,
        }
    }
}

/// Form file with every entry still undecoded, so one bad entry cannot reject
/// the whole file.
#[derive(Debug, Deserialize)]
struct FormDocument<V> {
    #[serde(default)]
    title: Option<String>,
    #[serde(default = "Vec::new")]
    fields: Vec<V>,
}

/// A decoded form plus the entries that were dropped because they are
/// malformed or their shape is not one of the renderable ones.
#[derive(Debug, Clone)]
pub struct LoadedForm {
    pub form: Form,
    pub skipped: Vec<FieldShapeError>,
}

pub fn parse_form(content: &str, format: FormFormat) -> Result<LoadedForm, FormError> {
    let raw = match format {
        FormFormat::Yaml => {
            let doc: FormDocument<serde_yaml::Value> = serde_yaml::from_str(content)?;
            decode_entries(doc, |v| v.get("name").and_then(|n| n.as_str()).map(str::to_string), |v| {
                serde_yaml::from_value::<RawField>(v)
            })
        }
        FormFormat::Json => {
            let doc: FormDocument<serde_json::Value> = serde_json::from_str(content)?;
            decode_entries(doc, |v| v.get("name").and_then(|n| n.as_str()).map(str::to_string), |v| {
                serde_json::from_value::<RawField>(v)
            })
        }
    };

    let (form, skipped) = raw.into_form();
    for e in &skipped {
        warn!(field = e.field_name(), "skipping field: {}", e);
    }
    debug!(fields = form.len(), skipped = skipped.len(), "form definition parsed");

    Ok(LoadedForm { form, skipped })
}

fn decode_entries<V, E: fmt::Display>(
    doc: FormDocument<V>,
    entry_name: impl Fn(&V) -> Option<String>,
    decode: impl Fn(V) -> Result<RawField, E>,
) -> RawForm {
    let fields = doc
        .fields
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let name = entry_name(&value).unwrap_or_else(|| format!("#{}", index + 1));
            decode(value).map_err(|e| FieldShapeError::Malformed {
                name,
                reason: e.to_string(),
            })
        })
        .collect();

    RawForm {
        title: doc.title,
        fields,
    }
}

pub fn load_form(path: &Path) -> Result<LoadedForm, FormError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_form(&content, FormFormat::from_path(path))
}

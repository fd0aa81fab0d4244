use crate::domain::ports::{SchemaDescriptor, Snapshot};
use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// Picks the format from a file extension (`.json` / `.toml`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ModelError::ConfigError {
                message: format!("Can't detect snapshot format of {}", path.display()),
            })?;
        extension.to_ascii_lowercase().parse()
    }

    pub fn extension(self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Toml => "toml",
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(SnapshotFormat::Json),
            "toml" => Ok(SnapshotFormat::Toml),
            other => Err(ModelError::ConfigError {
                message: format!("Unsupported snapshot format: {}. Valid formats: json, toml", other),
            }),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

pub fn serialize<T: Snapshot>(model: &T, format: SnapshotFormat) -> Result<String> {
    let payload = match format {
        SnapshotFormat::Json => serde_json::to_string_pretty(model)?,
        SnapshotFormat::Toml => toml::to_string(model)?,
    };
    tracing::trace!(model = T::SCHEMA.model, %format, bytes = payload.len(), "serialized snapshot");
    Ok(payload)
}

/// Restores a model: parse, reject unknown fields, decode, then re-run the
/// model's own validation.
pub fn deserialize<T: Snapshot>(payload: &str, format: SnapshotFormat) -> Result<T> {
    let value: Value = match format {
        SnapshotFormat::Json => serde_json::from_str(payload)?,
        SnapshotFormat::Toml => toml::from_str(payload)?,
    };

    let fields = value.as_object().ok_or_else(|| {
        ModelError::validation(
            T::SCHEMA.model,
            type_name(&value),
            "Snapshot data must be an object",
        )
    })?;
    check_fields(T::SCHEMA, fields)?;

    let model: T = serde_json::from_value(value)?;
    model.validate()?;
    tracing::trace!(model = T::SCHEMA.model, %format, "restored snapshot");
    Ok(model)
}

pub fn to_json<T: Snapshot>(model: &T) -> Result<String> {
    serialize(model, SnapshotFormat::Json)
}

pub fn from_json<T: Snapshot>(payload: &str) -> Result<T> {
    deserialize(payload, SnapshotFormat::Json)
}

fn check_fields(schema: &SchemaDescriptor, fields: &Map<String, Value>) -> Result<()> {
    for (name, value) in fields {
        let Some(field) = schema.field(name) else {
            tracing::debug!(model = schema.model, field = %name, "unknown snapshot field");
            return Err(ModelError::SchemaError {
                model: schema.model.to_string(),
                field: name.clone(),
                allowed: schema.field_names(),
            });
        };

        if let (Some(nested), Some(inner)) = (field.nested, value.as_object()) {
            check_fields(nested, inner)?;
        }
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

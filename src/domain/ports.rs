use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Explicit list of the serialized field names of one model.
///
/// Restoring a snapshot checks every key against this list; a field with a
/// `nested` schema is checked recursively when it holds an object.
#[derive(Debug)]
pub struct SchemaDescriptor {
    pub model: &'static str,
    pub fields: &'static [FieldDescriptor],
}

#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub nested: Option<&'static SchemaDescriptor>,
}

impl FieldDescriptor {
    pub const fn plain(name: &'static str) -> Self {
        Self { name, nested: None }
    }

    pub const fn nested(name: &'static str, schema: &'static SchemaDescriptor) -> Self {
        Self {
            name,
            nested: Some(schema),
        }
    }
}

impl SchemaDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.name.to_string()).collect()
    }
}

pub trait Schema {
    const SCHEMA: &'static SchemaDescriptor;
}

/// Anything the snapshot codec can write and restore.
pub trait Snapshot: Serialize + DeserializeOwned + Schema + Validate {}

impl<T> Snapshot for T where T: Serialize + DeserializeOwned + Schema + Validate {}

use crate::domain::ports::{FieldDescriptor, Schema, SchemaDescriptor};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// App Store genre, e.g. `6014` / "Games".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

pub const GENRE_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    model: "Genre",
    fields: &[FieldDescriptor::plain("id"), FieldDescriptor::plain("name")],
};

impl Genre {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    pub fn set_id(&mut self, id: u64) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Schema for Genre {
    const SCHEMA: &'static SchemaDescriptor = &GENRE_SCHEMA;
}

impl Validate for Genre {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

pub mod codec;

pub use crate::domain::ports::{Schema, SchemaDescriptor, Snapshot};
pub use codec::{deserialize, from_json, serialize, to_json, SnapshotFormat};

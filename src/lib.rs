pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalSnapshots, CliConfig};
pub use crate::core::{deserialize, from_json, serialize, to_json, SnapshotFormat};
pub use crate::domain::genre::Genre;
pub use crate::domain::model::{Model, ModelBase};
pub use crate::domain::platform::{IosType, Platform};
pub use crate::domain::software::Software;
pub use crate::domain::store::AppStore;
pub use crate::utils::error::{ModelError, Result};

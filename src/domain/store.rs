use crate::utils::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const STORE_BASE_URL: &str = "https://apps.apple.com/";

/// The App Store storefront a model was fetched from, keyed by its ISO
/// country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppStore {
    country: String,
}

impl AppStore {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }

    pub fn us() -> Self {
        Self::new("US")
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Canonical store page of a track in this storefront.
    pub fn app_url(&self, track_id: u64) -> Result<Url> {
        let base = Url::parse(STORE_BASE_URL).map_err(|e| ModelError::ConfigError {
            message: format!("Invalid store base URL: {}", e),
        })?;
        let path = format!("{}/app/id{}", self.country.to_lowercase(), track_id);
        base.join(&path)
            .map_err(|e| ModelError::validation("appStore", &self.country, e.to_string()))
    }
}

impl fmt::Display for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.country)
    }
}

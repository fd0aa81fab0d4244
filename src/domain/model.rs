use crate::domain::store::AppStore;
use serde::{Deserialize, Serialize};

/// Identity fields shared by every App Store model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store: Option<AppStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<u64>,
}

impl ModelBase {
    pub const FIELD_NAMES: [&'static str; 4] = ["trackId", "appStore", "artistName", "artistId"];
}

/// Accessors every model gets for free once it exposes its [`ModelBase`].
pub trait Model {
    fn base(&self) -> &ModelBase;
    fn base_mut(&mut self) -> &mut ModelBase;

    fn set_track_id(&mut self, track_id: u64) -> &mut Self {
        self.base_mut().track_id = Some(track_id);
        self
    }

    fn track_id(&self) -> Option<u64> {
        self.base().track_id
    }

    fn set_app_store(&mut self, app_store: AppStore) -> &mut Self {
        self.base_mut().app_store = Some(app_store);
        self
    }

    fn app_store(&self) -> Option<&AppStore> {
        self.base().app_store.as_ref()
    }

    fn set_artist_name(&mut self, artist_name: impl Into<String>) -> &mut Self {
        self.base_mut().artist_name = Some(artist_name.into());
        self
    }

    fn artist_name(&self) -> Option<&str> {
        self.base().artist_name.as_deref()
    }

    fn set_artist_id(&mut self, artist_id: u64) -> &mut Self {
        self.base_mut().artist_id = Some(artist_id);
        self
    }

    fn artist_id(&self) -> Option<u64> {
        self.base().artist_id
    }
}

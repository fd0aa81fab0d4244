use crate::domain::genre::{Genre, GENRE_SCHEMA};
use crate::domain::model::{Model, ModelBase};
use crate::domain::platform::{classify_ios_type, IosType, Platform};
use crate::domain::ports::{FieldDescriptor, Schema, SchemaDescriptor};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_non_negative, validate_rating, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

/// An App Store software listing (iOS or Mac app).
///
/// Built empty and populated one field at a time. Setters that carry a
/// constraint return `Result` and leave the stored value untouched when the
/// input is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Software {
    #[serde(flatten)]
    base: ModelBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_name: Option<String>,
    game_center: bool,
    supported_devices: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_view_url: Option<String>,
    screenshots_phone: Vec<String>,
    screenshots_tablet: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seller_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_size: Option<u64>,
    user_rating_count: i64,
    average_user_rating: f64,
    user_rating_count_current: i64,
    average_user_rating_current: f64,
    #[serde(rename = "languagesISO2A")]
    languages_iso2a: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_genre: Option<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artwork_url60: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artwork_url100: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artwork_url512: Option<String>,
}

pub const SOFTWARE_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    model: "Software",
    fields: &[
        FieldDescriptor::plain(ModelBase::FIELD_NAMES[0]),
        FieldDescriptor::plain(ModelBase::FIELD_NAMES[1]),
        FieldDescriptor::plain(ModelBase::FIELD_NAMES[2]),
        FieldDescriptor::plain(ModelBase::FIELD_NAMES[3]),
        FieldDescriptor::plain("platform"),
        FieldDescriptor::plain("trackName"),
        FieldDescriptor::plain("gameCenter"),
        FieldDescriptor::plain("supportedDevices"),
        FieldDescriptor::plain("trackViewUrl"),
        FieldDescriptor::plain("screenshotsPhone"),
        FieldDescriptor::plain("screenshotsTablet"),
        FieldDescriptor::plain("price"),
        FieldDescriptor::plain("currency"),
        FieldDescriptor::plain("version"),
        FieldDescriptor::plain("bundleId"),
        FieldDescriptor::plain("description"),
        FieldDescriptor::plain("sellerName"),
        FieldDescriptor::plain("sellerUrl"),
        FieldDescriptor::plain("releaseDate"),
        FieldDescriptor::plain("releaseNotes"),
        FieldDescriptor::plain("fileSize"),
        FieldDescriptor::plain("userRatingCount"),
        FieldDescriptor::plain("averageUserRating"),
        FieldDescriptor::plain("userRatingCountCurrent"),
        FieldDescriptor::plain("averageUserRatingCurrent"),
        FieldDescriptor::plain("languagesISO2A"),
        FieldDescriptor::nested("primaryGenre", &GENRE_SCHEMA),
        FieldDescriptor::plain("artworkUrl60"),
        FieldDescriptor::plain("artworkUrl100"),
        FieldDescriptor::plain("artworkUrl512"),
    ],
};

impl Software {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_platform(&mut self, platform: Platform) -> &mut Self {
        self.platform = Some(platform);
        self
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Derives phone / tablet / universal from the current devices and
    /// screenshots. Only defined for iOS software.
    pub fn classify_ios_type(&self) -> Result<IosType> {
        classify_ios_type(
            self.platform,
            &self.supported_devices,
            &self.screenshots_phone,
            &self.screenshots_tablet,
        )
    }

    pub fn set_track_name(&mut self, track_name: impl Into<String>) -> &mut Self {
        self.track_name = Some(track_name.into());
        self
    }

    pub fn track_name(&self) -> Option<&str> {
        self.track_name.as_deref()
    }

    pub fn set_game_center(&mut self, game_center: bool) -> &mut Self {
        self.game_center = game_center;
        self
    }

    pub fn game_center(&self) -> bool {
        self.game_center
    }

    pub fn set_supported_devices<I, S>(&mut self, devices: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_devices = devices.into_iter().map(Into::into).collect();
        self
    }

    pub fn supported_devices(&self) -> &BTreeSet<String> {
        &self.supported_devices
    }

    pub fn set_track_view_url(&mut self, track_view_url: impl Into<String>) -> &mut Self {
        self.track_view_url = Some(track_view_url.into());
        self
    }

    pub fn track_view_url(&self) -> Option<&str> {
        self.track_view_url.as_deref()
    }

    /// Store page of this listing: the stored track view URL if any,
    /// otherwise the URL derived from the origin store and track id.
    pub fn store_url(&self) -> Result<Option<Url>> {
        if let Some(raw) = &self.track_view_url {
            let url = Url::parse(raw)
                .map_err(|e| ModelError::validation("trackViewUrl", raw, e.to_string()))?;
            return Ok(Some(url));
        }

        match (self.app_store(), self.track_id()) {
            (Some(store), Some(track_id)) => store.app_url(track_id).map(Some),
            _ => Ok(None),
        }
    }

    pub fn set_screenshots_phone<I, S>(&mut self, urls: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.screenshots_phone = urls.into_iter().map(Into::into).collect();
        self
    }

    pub fn screenshots_phone(&self) -> &[String] {
        &self.screenshots_phone
    }

    pub fn set_screenshots_tablet<I, S>(&mut self, urls: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.screenshots_tablet = urls.into_iter().map(Into::into).collect();
        self
    }

    pub fn screenshots_tablet(&self) -> &[String] {
        &self.screenshots_tablet
    }

    /// Rejects NaN and infinities.
    pub fn set_price(&mut self, price: f64) -> Result<&mut Self> {
        self.price = Some(checked_price(price)?);
        Ok(self)
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_bundle_id(&mut self, bundle_id: impl Into<String>) -> &mut Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }

    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_seller_name(&mut self, seller_name: impl Into<String>) -> &mut Self {
        self.seller_name = Some(seller_name.into());
        self
    }

    pub fn seller_name(&self) -> Option<&str> {
        self.seller_name.as_deref()
    }

    pub fn set_seller_url(&mut self, seller_url: impl Into<String>) -> &mut Self {
        self.seller_url = Some(seller_url.into());
        self
    }

    pub fn seller_url(&self) -> Option<&str> {
        self.seller_url.as_deref()
    }

    pub fn set_release_date(&mut self, release_date: DateTime<Utc>) -> &mut Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn release_date(&self) -> Option<DateTime<Utc>> {
        self.release_date
    }

    pub fn set_release_notes(&mut self, release_notes: impl Into<String>) -> &mut Self {
        self.release_notes = Some(release_notes.into());
        self
    }

    pub fn release_notes(&self) -> Option<&str> {
        self.release_notes.as_deref()
    }

    pub fn set_file_size(&mut self, file_size: u64) -> &mut Self {
        self.file_size = Some(file_size);
        self
    }

    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    pub fn set_user_rating_count(&mut self, count: i64) -> Result<&mut Self> {
        checked_count("userRatingCount", count)?;
        self.user_rating_count = count;
        Ok(self)
    }

    pub fn user_rating_count(&self) -> u64 {
        self.user_rating_count.unsigned_abs()
    }

    pub fn set_average_user_rating(&mut self, rating: f64) -> Result<&mut Self> {
        self.average_user_rating = checked_rating("averageUserRating", rating)?;
        Ok(self)
    }

    pub fn average_user_rating(&self) -> f64 {
        self.average_user_rating
    }

    pub fn set_user_rating_count_current(&mut self, count: i64) -> Result<&mut Self> {
        checked_count("userRatingCountCurrent", count)?;
        self.user_rating_count_current = count;
        Ok(self)
    }

    pub fn user_rating_count_current(&self) -> u64 {
        self.user_rating_count_current.unsigned_abs()
    }

    pub fn set_average_user_rating_current(&mut self, rating: f64) -> Result<&mut Self> {
        self.average_user_rating_current = checked_rating("averageUserRatingCurrent", rating)?;
        Ok(self)
    }

    pub fn average_user_rating_current(&self) -> f64 {
        self.average_user_rating_current
    }

    pub fn set_languages_iso2a<I, S>(&mut self, languages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages_iso2a = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn languages_iso2a(&self) -> &[String] {
        &self.languages_iso2a
    }

    pub fn set_primary_genre(&mut self, genre: Genre) -> &mut Self {
        self.primary_genre = Some(genre);
        self
    }

    pub fn primary_genre(&self) -> Option<&Genre> {
        self.primary_genre.as_ref()
    }

    pub fn set_artwork_url60(&mut self, url: impl Into<String>) -> &mut Self {
        self.artwork_url60 = Some(url.into());
        self
    }

    pub fn artwork_url60(&self) -> Option<&str> {
        self.artwork_url60.as_deref()
    }

    pub fn set_artwork_url100(&mut self, url: impl Into<String>) -> &mut Self {
        self.artwork_url100 = Some(url.into());
        self
    }

    pub fn artwork_url100(&self) -> Option<&str> {
        self.artwork_url100.as_deref()
    }

    pub fn set_artwork_url512(&mut self, url: impl Into<String>) -> &mut Self {
        self.artwork_url512 = Some(url.into());
        self
    }

    pub fn artwork_url512(&self) -> Option<&str> {
        self.artwork_url512.as_deref()
    }
}

fn checked_count(field: &str, count: i64) -> Result<u64> {
    validate_non_negative(field, count).inspect_err(|e| {
        tracing::debug!(field, count, error = %e, "rejected rating count");
    })
}

fn checked_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        tracing::debug!(price, "rejected non-finite price");
        return Err(ModelError::validation("price", price, "Price must be a finite number"));
    }
    Ok(price)
}

fn checked_rating(field: &str, rating: f64) -> Result<f64> {
    validate_rating(field, rating).inspect_err(|e| {
        tracing::debug!(field, rating, error = %e, "rejected average rating");
    })
}

impl Model for Software {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }
}

impl Schema for Software {
    const SCHEMA: &'static SchemaDescriptor = &SOFTWARE_SCHEMA;
}

impl Validate for Software {
    fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            checked_price(price)?;
        }
        validate_non_negative("userRatingCount", self.user_rating_count)?;
        validate_non_negative("userRatingCountCurrent", self.user_rating_count_current)?;
        validate_rating("averageUserRating", self.average_user_rating)?;
        validate_rating("averageUserRatingCurrent", self.average_user_rating_current)?;
        if let Some(genre) = &self.primary_genre {
            genre.validate()?;
        }
        Ok(())
    }
}

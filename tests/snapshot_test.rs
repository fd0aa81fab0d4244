use anyhow::Result;
use apple_model::{
    deserialize, from_json, serialize, to_json, AppStore, Genre, LocalSnapshots, Model, ModelError,
    Platform, Software, SnapshotFormat,
};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn sample_software() -> Result<Software> {
    let mut software = Software::new();
    software
        .set_track_id(284882215)
        .set_artist_id(284882218)
        .set_artist_name("Meta Platforms, Inc.")
        .set_app_store(AppStore::us());
    software
        .set_platform(Platform::Ios)
        .set_track_name("Facebook")
        .set_game_center(true)
        .set_supported_devices(["iPhone5s-iPhone5s", "iPadAir-iPadAir"])
        .set_track_view_url("https://apps.apple.com/us/app/facebook/id284882215")
        .set_screenshots_phone(["https://example.com/p1.jpg", "https://example.com/p2.jpg"])
        .set_screenshots_tablet(["https://example.com/t1.jpg"])
        .set_currency("USD")
        .set_version("452.0")
        .set_bundle_id("com.facebook.Facebook")
        .set_description("Where real people propel your curiosity.")
        .set_seller_name("Meta Platforms, Inc.")
        .set_seller_url("https://www.facebook.com")
        .set_release_date(Utc.with_ymd_and_hms(2019, 2, 5, 8, 0, 0).unwrap())
        .set_release_notes("Bug fixes.")
        .set_file_size(301_562_880)
        .set_languages_iso2a(["EN", "RU"])
        .set_primary_genre(Genre::new(6005, "Social Networking"))
        .set_artwork_url60("https://example.com/60.png")
        .set_artwork_url100("https://example.com/100.png")
        .set_artwork_url512("https://example.com/512.png");
    software
        .set_price(1.99)?
        .set_user_rating_count(1_000_000)?
        .set_average_user_rating(4.5)?
        .set_user_rating_count_current(1200)?
        .set_average_user_rating_current(3.0)?;
    Ok(software)
}

#[test]
fn test_json_round_trip() -> Result<()> {
    let software = sample_software()?;
    let payload = to_json(&software)?;
    let restored: Software = from_json(&payload)?;
    assert_eq!(restored, software);
    Ok(())
}

#[test]
fn test_toml_round_trip() -> Result<()> {
    let software = sample_software()?;
    let payload = serialize(&software, SnapshotFormat::Toml)?;
    let restored: Software = deserialize(&payload, SnapshotFormat::Toml)?;
    assert_eq!(restored, software);
    Ok(())
}

#[test]
fn test_empty_model_round_trip() -> Result<()> {
    let software = Software::new();
    for format in [SnapshotFormat::Json, SnapshotFormat::Toml] {
        let restored: Software = deserialize(&serialize(&software, format)?, format)?;
        assert_eq!(restored, software);
    }

    let mut genre = Genre::default();
    genre.set_name("Games");
    let restored: Genre = from_json(&to_json(&genre)?)?;
    assert_eq!(restored, genre);
    Ok(())
}

#[test]
fn test_field_names_follow_upstream_shape() -> Result<()> {
    let payload = to_json(&sample_software()?)?;
    let value: serde_json::Value = serde_json::from_str(&payload)?;
    assert_eq!(value["trackId"], 284882215);
    assert_eq!(value["platform"], "ios");
    assert_eq!(value["averageUserRating"], 4.5);
    assert_eq!(value["languagesISO2A"][1], "RU");
    assert_eq!(value["primaryGenre"]["name"], "Social Networking");
    assert_eq!(value["appStore"], "US");
    Ok(())
}

#[test]
fn test_unknown_field_is_a_schema_error() {
    let err = from_json::<Software>(r#"{"trackName": "App", "screenshotUrls": []}"#).unwrap_err();
    match err {
        ModelError::SchemaError { model, field, allowed } => {
            assert_eq!(model, "Software");
            assert_eq!(field, "screenshotUrls");
            assert!(allowed.contains(&"screenshotsPhone".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_nested_genre_field() {
    let payload = r#"
trackName = "App"

[primaryGenre]
id = 6014
parent = 36
"#;
    let err = deserialize::<Software>(payload, SnapshotFormat::Toml).unwrap_err();
    assert!(matches!(err, ModelError::SchemaError { ref model, .. } if model == "Genre"));
}

#[test]
fn test_restore_revalidates_ratings() {
    let err = from_json::<Software>(r#"{"averageUserRating": 2.33}"#).unwrap_err();
    assert!(matches!(err, ModelError::ValidationError { .. }));

    let err = from_json::<Software>(r#"{"averageUserRatingCurrent": 6.0}"#).unwrap_err();
    assert!(matches!(err, ModelError::ValidationError { .. }));
}

#[test]
fn test_price_survives_round_trip() -> Result<()> {
    let mut software = Software::new();
    assert!(software.set_price(f64::INFINITY).is_err());
    assert!(software.set_price(f64::NAN).is_err());
    software.set_price(0.99)?;

    for format in [SnapshotFormat::Json, SnapshotFormat::Toml] {
        let restored: Software = deserialize(&serialize(&software, format)?, format)?;
        assert_eq!(restored.price(), Some(0.99));
        assert_eq!(restored, software);
    }
    Ok(())
}

#[test]
fn test_restore_rejects_negative_counts() {
    for payload in [r#"{"userRatingCount": -1}"#, r#"{"userRatingCountCurrent": -5}"#] {
        let err = from_json::<Software>(payload).unwrap_err();
        assert!(
            matches!(err, ModelError::ValidationError { .. }),
            "{payload}: {err}"
        );
    }

    let restored: Software = from_json(r#"{"userRatingCount": 42}"#).unwrap();
    assert_eq!(restored.user_rating_count(), 42);
}

#[test]
fn test_restore_rejects_loose_platform() {
    for payload in [r#"{"platform": "1"}"#, r#"{"platform": 1}"#, r#"{"platform": "IOS"}"#] {
        assert!(from_json::<Software>(payload).is_err(), "{payload} accepted");
    }
    let restored: Software = from_json(r#"{"platform": "mac"}"#).unwrap();
    assert_eq!(restored.platform(), Some(Platform::Mac));
}

#[test]
fn test_local_snapshots() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let snapshots = LocalSnapshots::new(temp_dir.path());
    let software = sample_software()?;

    for format in [SnapshotFormat::Json, SnapshotFormat::Toml] {
        let file = format!("nested/facebook.{}", format.extension());
        let written = snapshots.save(&file, &software, format)?;
        assert!(written.exists());

        let restored: Software = snapshots.load(&file, SnapshotFormat::from_path(&file)?)?;
        assert_eq!(restored, software);
    }

    let missing = snapshots.load::<Software>("missing.json", SnapshotFormat::Json);
    assert!(matches!(missing, Err(ModelError::IoError(_))));
    Ok(())
}

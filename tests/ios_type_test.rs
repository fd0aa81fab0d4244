use apple_model::{IosType, ModelError, Platform, Software};

fn ios_software(phone: &[&str], tablet: &[&str]) -> Software {
    let mut model = Software::new();
    model
        .set_platform(Platform::Ios)
        .set_screenshots_phone(phone.iter().copied())
        .set_screenshots_tablet(tablet.iter().copied());
    model
}

#[test]
fn test_ios_type_from_screenshots() {
    let cases: [(&[&str], &[&str], IosType); 3] = [
        (&["s1"], &[], IosType::Iphone),
        (&[], &["c1"], IosType::Ipad),
        (&["s1"], &["s2"], IosType::Universal),
    ];

    for (phone, tablet, expected) in cases {
        let model = ios_software(phone, tablet);
        assert_eq!(
            model.classify_ios_type().unwrap(),
            expected,
            "phone={phone:?} tablet={tablet:?}"
        );
    }
}

#[test]
fn test_no_signal_is_a_validation_error() {
    let model = ios_software(&[], &[]);
    assert!(matches!(
        model.classify_ios_type(),
        Err(ModelError::ValidationError { .. })
    ));
}

#[test]
fn test_all_sentinel_is_universal() {
    let mut model = ios_software(&[], &[]);
    model.set_supported_devices(["all"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Universal);

    model.set_screenshots_tablet(["c1"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Universal);
}

#[test]
fn test_mac_software_has_no_ios_type() {
    let mut model = ios_software(&["s1"], &["s2"]);
    model.set_supported_devices(["all"]);
    model.set_platform(Platform::Mac);
    assert!(matches!(
        model.classify_ios_type(),
        Err(ModelError::StateError { .. })
    ));

    let unset = Software::new();
    assert!(matches!(
        unset.classify_ios_type(),
        Err(ModelError::StateError { .. })
    ));
}

#[test]
fn test_classification_follows_latest_fields() {
    let mut model = Software::new();

    model.set_platform(Platform::Mac);
    assert!(model.classify_ios_type().is_err());

    model.set_platform(Platform::Ios);
    model.set_supported_devices(["iphone", "ipad", "....", "all"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Universal);

    model.set_supported_devices(["1", "2", "3"]);
    model.set_screenshots_phone(["s1", "s2", "s3"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Iphone);

    model.set_screenshots_phone(Vec::<String>::new());
    model.set_screenshots_tablet(["s1", "s2", "s3"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Ipad);

    model.set_screenshots_phone(["s1", "s2", "s3"]);
    assert_eq!(model.classify_ios_type().unwrap(), IosType::Universal);

    // Devices present but uninformative, no screenshots.
    model.set_screenshots_phone(Vec::<String>::new());
    model.set_screenshots_tablet(Vec::<String>::new());
    assert!(matches!(
        model.classify_ios_type(),
        Err(ModelError::StateError { .. })
    ));

    model.set_supported_devices(Vec::<String>::new());
    assert!(matches!(
        model.classify_ios_type(),
        Err(ModelError::ValidationError { .. })
    ));
}

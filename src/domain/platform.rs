use crate::utils::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Supported-devices entry that marks an app as running on every device.
pub const ALL_DEVICES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios = 1,
    Mac = 2,
}

impl Platform {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Mac => "mac",
        }
    }
}

impl TryFrom<i64> for Platform {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Platform::Ios),
            2 => Ok(Platform::Mac),
            _ => Err(ModelError::validation(
                "platform",
                code,
                "Undefined software platform",
            )),
        }
    }
}

/// Parses the platform name only; numeric strings such as `"1"` are rejected.
impl FromStr for Platform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ios" => Ok(Platform::Ios),
            "mac" => Ok(Platform::Mac),
            _ => Err(ModelError::validation(
                "platform",
                s,
                "Undefined software platform",
            )),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse device class of an iOS app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IosType {
    Iphone = 1,
    Ipad = 2,
    Universal = 3,
}

impl IosType {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl fmt::Display for IosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IosType::Iphone => write!(f, "iPhone"),
            IosType::Ipad => write!(f, "iPad"),
            IosType::Universal => write!(f, "Universal"),
        }
    }
}

/// Derives the iOS type from the platform, supported devices and the two
/// screenshot lists.
///
/// The checks run in a fixed order: platform, presence of any signal, the
/// `"all"` device sentinel, then the screenshot lists.
pub fn classify_ios_type(
    platform: Option<Platform>,
    supported_devices: &BTreeSet<String>,
    screenshots_phone: &[String],
    screenshots_tablet: &[String],
) -> Result<IosType> {
    if platform != Some(Platform::Ios) {
        tracing::debug!(?platform, "iOS type requested for non-iOS software");
        return Err(ModelError::state(match platform {
            Some(other) => format!("Can't get iOS type of {} software", other),
            None => "Can't get iOS type: platform is not set".to_string(),
        }));
    }

    let has_phone = !screenshots_phone.is_empty();
    let has_tablet = !screenshots_tablet.is_empty();

    if supported_devices.is_empty() && !has_phone && !has_tablet {
        tracing::debug!("iOS type requested without devices or screenshots");
        return Err(ModelError::validation(
            "supportedDevices",
            "[]",
            "Undefined supported devices and screenshots",
        ));
    }

    let ios_type = if supported_devices.contains(ALL_DEVICES) {
        IosType::Universal
    } else {
        match (has_phone, has_tablet) {
            (true, true) => IosType::Universal,
            (true, false) => IosType::Iphone,
            (false, true) => IosType::Ipad,
            (false, false) => {
                tracing::debug!(
                    devices = supported_devices.len(),
                    "supported devices carry no usable signal"
                );
                return Err(ModelError::state("Can't get iOS type. Undefined screenshots"));
            }
        }
    };

    tracing::trace!(%ios_type, "classified iOS software");
    Ok(ios_type)
}

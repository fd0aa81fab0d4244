use crate::utils::error::{ModelError, Result};

/// Step every average rating must be a multiple of.
pub const RATING_STEP: f64 = 0.5;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::validation(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(ModelError::validation(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        ModelError::validation(field_name, value, "Value can't be less than 0")
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelError::validation(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Checks an average user rating: inside `[0, 5]` and, unless zero, an exact
/// multiple of 0.5. NaN never passes.
pub fn validate_rating(field_name: &str, value: f64) -> Result<f64> {
    validate_range(field_name, value, MIN_RATING, MAX_RATING)?;

    if value != 0.0 && value % RATING_STEP != 0.0 {
        return Err(ModelError::validation(
            field_name,
            value,
            format!("Rating must be divisible by {}", RATING_STEP),
        ));
    }

    Ok(value)
}

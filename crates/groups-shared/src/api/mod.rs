mod groups;
mod response;
mod users;

pub use groups::*;
pub use response::*;
pub use users::*;

use serde::{de::Error as _, Deserialize, Deserializer};
use validator::ValidationError;

/// Rejects values that are empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("This field is required.".into());
        return Err(error);
    }
    Ok(())
}

/// Binds a string with surrounding whitespace removed, so length rules apply
/// to what gets stored.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// Binds a number, refusing `NaN` and the infinities.
pub(crate) fn finite<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(D::Error::custom(format!("{value} is not a finite number")));
    }
    Ok(value)
}

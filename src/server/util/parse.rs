use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum value read back from a text column.
///
/// Stored values are written by the application itself, so a value that doesn't parse
/// indicates corrupted data rather than bad input.
///
/// # Arguments
/// - `column` - Table and column the value came from, used in the error
/// - `value` - The stored String to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - Unknown stored value
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, AppError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(InternalError::InvalidStoredValue { column, value }.into()),
    }
}

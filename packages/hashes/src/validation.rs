//! Digest-size validation for algorithms with a caller-chosen output length

use crate::{HashError, Result};
use serde_json::Value;

const PARAM: &str = "digest_size";

/// Check that an untyped `digest_size` is an integer and at least one
///
/// Floats (even integral ones), booleans and strings are type errors; zero,
/// negative integers and integers wider than `usize` are value errors.
///
/// # Errors
///
/// Returns `HashError::InvalidType` for a non-integer and
/// `HashError::InvalidValue` for an integer below one or above `usize::MAX`.
pub fn digest_size_from_value(value: &Value) -> Result<usize> {
    let Value::Number(number) = value else {
        return Err(reject_type(value));
    };
    if let Some(size) = number.as_u64() {
        let size = usize::try_from(size).map_err(|_| {
            tracing::debug!(digest_size = size, "digest size exceeds usize");
            HashError::invalid_value("digest_size is too large")
        })?;
        return positive(size);
    }
    if number.as_i64().is_some() {
        // Only negative integers fail `as_u64` while passing `as_i64`
        return positive(0);
    }
    Err(reject_type(value))
}

/// Reject a zero digest size
///
/// # Errors
///
/// Returns `HashError::InvalidValue` when `size` is zero.
pub fn positive(size: usize) -> Result<usize> {
    if size == 0 {
        tracing::debug!(digest_size = size, "digest size rejected");
        return Err(HashError::invalid_value(
            "digest_size must be a positive integer",
        ));
    }
    Ok(size)
}

/// Reject any positive digest size other than the one the algorithm permits
///
/// # Errors
///
/// Returns `HashError::InvalidValue` when `size` is zero or differs from
/// `required`.
pub fn pinned(size: usize, required: usize) -> Result<usize> {
    let size = positive(size)?;
    if size != required {
        tracing::debug!(digest_size = size, required, "digest size rejected");
        return Err(HashError::invalid_value(format!(
            "Digest size must be {required}"
        )));
    }
    Ok(size)
}

fn reject_type(value: &Value) -> HashError {
    tracing::debug!(%value, "digest size is not an integer");
    HashError::InvalidType { param: PARAM }
}

//! Field-level normalisation shared by the generator input schemas.

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationReason};

/// Minimum length, in characters, of every input field after trimming.
pub const MIN_FIELD_LENGTH: usize = 2;

/// Borrows the raw payload as a JSON object.
pub(crate) fn object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object()
        .ok_or_else(|| ValidationError::new("input", ValidationReason::NotAnObject))
}

/// Reads, trims and length-checks one required text field.
///
/// The length check runs on the trimmed value, so normalising an already
/// normalised input is a no-op.
pub(crate) fn text_field(fields: &Map<String, Value>, name: &str) -> Result<String, ValidationError> {
    let value = fields
        .get(name)
        .ok_or_else(|| ValidationError::new(name, ValidationReason::Missing))?;
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::new(name, ValidationReason::NotAString))?
        .trim();
    if text.chars().count() < MIN_FIELD_LENGTH {
        return Err(ValidationError::new(
            name,
            ValidationReason::TooShort {
                min: MIN_FIELD_LENGTH,
            },
        ));
    }
    Ok(text.to_owned())
}

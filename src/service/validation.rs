//! Request validation against the column limits of the schema.

use crate::error::AppError;
use crate::models::{MovieInput, MoviePatch};

/// Text columns are VARCHAR(255).
pub const MAX_TEXT_LEN: usize = 255;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full body (POST, PUT, seed rows).
    pub fn validate(input: &MovieInput) -> Result<(), AppError> {
        check_text("title", input.title.as_deref())?;
        check_text("description", input.description.as_deref())?;
        check_text("trailer", input.trailer.as_deref())?;
        Ok(())
    }

    /// Validate only the fields present in a PATCH body.
    pub fn validate_partial(patch: &MoviePatch) -> Result<(), AppError> {
        check_text("title", patch.title.as_ref().and_then(|v| v.as_deref()))?;
        check_text("description", patch.description.as_ref().and_then(|v| v.as_deref()))?;
        check_text("trailer", patch.trailer.as_ref().and_then(|v| v.as_deref()))?;
        Ok(())
    }

    /// Validate a director or genre name.
    pub fn validate_name(name: Option<&str>) -> Result<(), AppError> {
        check_text("name", name)
    }
}

fn check_text(col: &str, value: Option<&str>) -> Result<(), AppError> {
    if let Some(s) = value {
        if s.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, MAX_TEXT_LEN
            )));
        }
    }
    Ok(())
}

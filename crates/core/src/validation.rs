//! Request DTO validation.
//!
//! The rules themselves are declared on the DTOs with `validator` derives;
//! [`DtoValidator`] runs them and folds the result into the domain error
//! taxonomy. One validator is built at startup and shared by every layer
//! that needs to validate payloads.

use validator::Validate;

use crate::error::CoreError;

/// Runs the declared validation rules of a DTO.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtoValidator;

impl DtoValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `dto`, reporting the first offending field as
    /// [`CoreError::IsRequired`].
    ///
    /// Fields are reported in name order so the error is deterministic when
    /// several fail at once.
    pub fn validate<T: Validate>(&self, dto: &T) -> Result<(), CoreError> {
        let Err(errors) = dto.validate() else {
            return Ok(());
        };

        let field = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .min()
            .unwrap_or_else(|| "payload".to_string());

        Err(CoreError::IsRequired(field))
    }
}

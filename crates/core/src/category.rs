//! The `Category` entity and its request-shaped DTO.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{CategoryId, Timestamp};

/// A named, optionally described classifier.
///
/// Owned by the repository; everything above it works on transient copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Always stored in normalized form (see [`normalize_name`]).
    pub name: String,
    pub description: Option<String>,
    pub is_validated: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Request payload for creating or replacing a category.
///
/// Carries only client-supplied fields; IDs and timestamps belong to the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryDto {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    /// Return a copy whose name is in normalized form.
    pub fn normalized(&self) -> Self {
        Self {
            name: normalize_name(&self.name),
            description: self.description.clone(),
        }
    }
}

/// Canonical form of a category name: surrounding whitespace trimmed,
/// lower-cased. Used as the lookup and uniqueness key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_name("  Action Movies \t"), "action movies");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_name("Sci  Fi"), "sci  fi");
    }

    #[test]
    fn normalized_dto_keeps_description() {
        let dto = CategoryDto::new(" Drama ", Some("Tears".into()));
        let normalized = dto.normalized();

        assert_eq!(normalized.name, "drama");
        assert_eq!(normalized.description.as_deref(), Some("Tears"));
    }

    #[test]
    fn blank_name_fails_validation() {
        let dto = CategoryDto::new("   ", None);
        let errors = dto.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn non_blank_name_passes_validation() {
        assert!(CategoryDto::new("comedy", None).validate().is_ok());
    }

    #[test]
    fn dto_description_is_optional_on_the_wire() {
        let dto: CategoryDto = serde_json::from_str(r#"{"name":"Action"}"#).unwrap();
        assert_eq!(dto, CategoryDto::new("Action", None));
    }
}

//! Write-path category operations.

use std::sync::Arc;

use crate::category::CategoryDto;
use crate::error::CoreError;
use crate::repository::CategoryWriter;
use crate::validation::DtoValidator;

use super::translate;

#[derive(Clone)]
pub struct Modifying {
    repo: Arc<dyn CategoryWriter>,
    validator: DtoValidator,
}

impl Modifying {
    pub fn new(repo: Arc<dyn CategoryWriter>, validator: DtoValidator) -> Self {
        Self { repo, validator }
    }

    /// Normalize and validate `dto`, then insert it.
    ///
    /// Returns the normalized DTO that was stored.
    pub async fn add_category(&self, dto: &CategoryDto) -> Result<CategoryDto, CoreError> {
        let dto = dto.normalized();
        self.validator.validate(&dto)?;

        self.repo
            .add_category(&dto)
            .await
            .map_err(|err| translate(err, &dto.name))?;
        Ok(dto)
    }

    /// Replace the category located by `name` with `dto`.
    ///
    /// Not-found errors name the located category; uniqueness errors name the
    /// new one.
    pub async fn update_category(
        &self,
        name: &str,
        dto: &CategoryDto,
    ) -> Result<CategoryDto, CoreError> {
        let name = require_name(name)?;
        let dto = dto.normalized();
        self.validator.validate(&dto)?;

        self.repo
            .update_category(name, &dto)
            .await
            .map_err(|err| match translate(err, name) {
                CoreError::AlreadyExists(_) => CoreError::AlreadyExists(dto.name.clone()),
                other => other,
            })?;
        Ok(dto)
    }

    /// Delete the category located by `name`.
    pub async fn remove_category(&self, name: &str) -> Result<(), CoreError> {
        let name = require_name(name)?;

        self.repo
            .remove_category(name)
            .await
            .map_err(|err| translate(err, name))
    }
}

fn require_name(name: &str) -> Result<&str, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::is_required("name"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::repository::{CategoryReader, InMemoryCategoryRepo};

    fn services() -> (Arc<InMemoryCategoryRepo>, Modifying) {
        let repo = Arc::new(InMemoryCategoryRepo::new());
        let modifying = Modifying::new(repo.clone(), DtoValidator::new());
        (repo, modifying)
    }

    #[tokio::test]
    async fn add_stores_normalized_name() {
        let (repo, modifying) = services();

        let stored = modifying
            .add_category(&CategoryDto::new("  Action ", Some("kicks".into())))
            .await
            .unwrap();

        assert_eq!(stored, CategoryDto::new("action", Some("kicks".into())));
        assert_eq!(repo.fetch_category("action").await.unwrap().name, "action");
    }

    #[tokio::test]
    async fn add_and_update_reject_blank_names_alike() {
        let (_, modifying) = services();
        modifying
            .add_category(&CategoryDto::new("target", None))
            .await
            .unwrap();

        for blank in ["", "   ", "\t\n"] {
            let dto = CategoryDto::new(blank, None);
            let added = modifying.add_category(&dto).await;
            let updated = modifying.update_category("target", &dto).await;

            assert_eq!(added, Err(CoreError::is_required("name")));
            assert_eq!(updated, Err(CoreError::is_required("name")));
        }
    }

    #[tokio::test]
    async fn duplicate_add_is_already_exists() {
        let (_, modifying) = services();
        modifying
            .add_category(&CategoryDto::new("Drama", None))
            .await
            .unwrap();

        let result = modifying.add_category(&CategoryDto::new("drama", None)).await;

        assert_eq!(result, Err(CoreError::AlreadyExists("drama".into())));
    }

    #[tokio::test]
    async fn update_with_blank_path_name_is_required() {
        let (_, modifying) = services();

        let result = modifying
            .update_category("  ", &CategoryDto::new("anything", None))
            .await;

        assert_eq!(result, Err(CoreError::is_required("name")));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let (_, modifying) = services();

        let result = modifying
            .update_category("nope", &CategoryDto::new("anything", None))
            .await;

        assert_eq!(result, Err(CoreError::NotFound("nope".into())));
    }

    #[tokio::test]
    async fn update_onto_existing_name_is_already_exists() {
        let (_, modifying) = services();
        for name in ["action", "comedy"] {
            modifying
                .add_category(&CategoryDto::new(name, None))
                .await
                .unwrap();
        }

        let result = modifying
            .update_category("action", &CategoryDto::new(" Comedy", None))
            .await;

        assert_eq!(result, Err(CoreError::AlreadyExists("comedy".into())));
    }

    #[tokio::test]
    async fn update_renames() {
        let (repo, modifying) = services();
        modifying
            .add_category(&CategoryDto::new("action", None))
            .await
            .unwrap();

        let stored = modifying
            .update_category("Action", &CategoryDto::new("Action Movies", Some("updated".into())))
            .await
            .unwrap();

        assert_eq!(stored.name, "action movies");
        assert_matches!(
            repo.fetch_category("action").await,
            Err(crate::repository::RepositoryError::NoRows)
        );
        assert!(repo.fetch_category("action movies").await.is_ok());
    }

    #[tokio::test]
    async fn remove_twice_is_not_found_the_second_time() {
        let (_, modifying) = services();
        modifying
            .add_category(&CategoryDto::new("folk", None))
            .await
            .unwrap();

        assert_eq!(modifying.remove_category("folk").await, Ok(()));
        assert_eq!(
            modifying.remove_category("folk").await,
            Err(CoreError::NotFound("folk".into()))
        );
    }

    #[tokio::test]
    async fn remove_blank_name_is_required() {
        let (_, modifying) = services();

        assert_eq!(
            modifying.remove_category(" ").await,
            Err(CoreError::is_required("name"))
        );
    }
}

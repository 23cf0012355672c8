//! In-memory category storage.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::Mutex;

use crate::category::{normalize_name, Category, CategoryDto};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};
use crate::types::{new_category_id, CategoryId};

/// In-memory category storage for testing and development.
///
/// Entries are keyed by ID and kept in insertion order. A single mutex
/// serializes every operation, reads included.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepo {
    categories: Mutex<IndexMap<CategoryId, Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position_by_name(categories: &IndexMap<CategoryId, Category>, name: &str) -> Option<usize> {
    categories.values().position(|category| category.name == name)
}

#[async_trait]
impl CategoryReader for InMemoryCategoryRepo {
    async fn get_categories(&self, limit: u32) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.lock().await;
        Ok(categories
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_category(&self, name: &str) -> Result<Category, RepositoryError> {
        let name = normalize_name(name);
        let categories = self.categories.lock().await;
        position_by_name(&categories, &name)
            .and_then(|index| categories.get_index(index))
            .map(|(_, category)| category.clone())
            .ok_or(RepositoryError::NoRows)
    }
}

#[async_trait]
impl CategoryWriter for InMemoryCategoryRepo {
    async fn add_category(&self, dto: &CategoryDto) -> Result<(), RepositoryError> {
        let name = normalize_name(&dto.name);
        let mut categories = self.categories.lock().await;

        if position_by_name(&categories, &name).is_some() {
            return Err(RepositoryError::UniqueViolation);
        }

        let now = Utc::now();
        let id = new_category_id();
        categories.insert(
            id,
            Category {
                id,
                name,
                description: dto.description.clone(),
                is_validated: false,
                created_at: Some(now),
                updated_at: Some(now),
            },
        );
        Ok(())
    }

    async fn update_category(
        &self,
        name: &str,
        dto: &CategoryDto,
    ) -> Result<(), RepositoryError> {
        let name = normalize_name(name);
        let new_name = normalize_name(&dto.name);
        let mut categories = self.categories.lock().await;

        let index = position_by_name(&categories, &name).ok_or(RepositoryError::NoRows)?;
        if let Some(other) = position_by_name(&categories, &new_name) {
            if other != index {
                return Err(RepositoryError::UniqueViolation);
            }
        }

        let (_, category) = categories
            .get_index_mut(index)
            .ok_or(RepositoryError::NoRows)?;
        category.name = new_name;
        category.description = dto.description.clone();
        category.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn remove_category(&self, name: &str) -> Result<(), RepositoryError> {
        let name = normalize_name(name);
        let mut categories = self.categories.lock().await;

        let index = position_by_name(&categories, &name).ok_or(RepositoryError::NoRows)?;
        categories.shift_remove_index(index);
        Ok(())
    }
}

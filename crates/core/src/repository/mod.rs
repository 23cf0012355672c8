//! Repository capability traits.
//!
//! Storage backends implement [`CategoryReader`] and [`CategoryWriter`];
//! every type implementing both is a [`CategoryRepository`]. Services hold
//! a handle to only the half they use. Implementations normalize every name
//! they receive with [`normalize_name`](crate::category::normalize_name).

pub mod memory;

use async_trait::async_trait;

use crate::category::{Category, CategoryDto};

pub use memory::InMemoryCategoryRepo;

/// Errors raised by a repository implementation.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No row matched the given name.
    #[error("no matching category")]
    NoRows,

    /// The write would give two categories the same name.
    #[error("category name violates uniqueness")]
    UniqueViolation,

    /// Transport or storage failure, passed through unchanged.
    #[error(transparent)]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Read-side capabilities.
#[async_trait]
pub trait CategoryReader: Send + Sync {
    /// Up to `limit` categories in insertion order.
    async fn get_categories(&self, limit: u32) -> Result<Vec<Category>, RepositoryError>;

    /// The category whose normalized name equals the normalized `name`.
    async fn fetch_category(&self, name: &str) -> Result<Category, RepositoryError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Write-side capabilities.
#[async_trait]
pub trait CategoryWriter: Send + Sync {
    /// Insert a new category with a fresh ID and timestamps.
    async fn add_category(&self, dto: &CategoryDto) -> Result<(), RepositoryError>;

    /// Replace name and description of the category located by `name`.
    async fn update_category(&self, name: &str, dto: &CategoryDto)
        -> Result<(), RepositoryError>;

    /// Delete the category located by `name`.
    async fn remove_category(&self, name: &str) -> Result<(), RepositoryError>;
}

/// The full capability set: anything that can both read and write.
pub trait CategoryRepository: CategoryReader + CategoryWriter {}

impl<T: CategoryReader + CategoryWriter + ?Sized> CategoryRepository for T {}

//! Read-only category queries.

use std::sync::Arc;

use crate::category::Category;
use crate::error::CoreError;
use crate::repository::CategoryReader;

use super::translate;

/// Largest number of categories a single listing returns (`i8::MAX`).
pub const MAX_LIST_LIMIT: i64 = i8::MAX as i64;

#[derive(Clone)]
pub struct Listing {
    repo: Arc<dyn CategoryReader>,
}

impl Listing {
    pub fn new(repo: Arc<dyn CategoryReader>) -> Self {
        Self { repo }
    }

    /// Up to `limit` categories in insertion order.
    ///
    /// A negative limit is [`CoreError::InvalidInput`]; zero returns an
    /// empty list without touching the repository.
    pub async fn get_categories(&self, limit: i64) -> Result<Vec<Category>, CoreError> {
        if limit < 0 {
            return Err(CoreError::InvalidInput(format!(
                "limit must not be negative, got {limit}"
            )));
        }
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit = u32::try_from(limit).unwrap_or(u32::MAX);
        self.repo
            .get_categories(limit)
            .await
            .map_err(|err| translate(err, "categories"))
    }

    /// The category named `name` (any spelling).
    pub async fn fetch_category(&self, name: &str) -> Result<Category, CoreError> {
        let name = name.trim();
        self.repo
            .fetch_category(name)
            .await
            .map_err(|err| translate(err, name))
    }

    /// Whether the backing store answers.
    pub async fn ping(&self) -> Result<(), CoreError> {
        self.repo
            .ping()
            .await
            .map_err(|err| CoreError::Internal(err.to_string()))
    }
}

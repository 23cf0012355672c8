//! Row model for the `categories` table.

use catalog_core::category::Category;
use catalog_core::types::{CategoryId, Timestamp};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_validated: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            is_validated: row.is_validated,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

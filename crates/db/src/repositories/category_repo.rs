//! Repository for the `categories` table.

use async_trait::async_trait;
use catalog_core::category::{normalize_name, Category, CategoryDto};
use catalog_core::repository::{CategoryReader, CategoryWriter, RepositoryError};
use catalog_core::types::new_category_id;
use chrono::Utc;
use sqlx::postgres::PgQueryResult;
use sqlx::PgPool;

use crate::models::category::CategoryRow;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, description, is_validated, created_at, updated_at";

/// Unique constraint on `categories.name`.
const NAME_CONSTRAINT: &str = "uq_categories_name";

/// Category storage backed by PostgreSQL.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct PgCategoryRepo {
    pool: PgPool,
}

impl PgCategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error onto the repository taxonomy.
///
/// - `RowNotFound` becomes [`RepositoryError::NoRows`].
/// - A violation of [`NAME_CONSTRAINT`] becomes
///   [`RepositoryError::UniqueViolation`].
/// - Everything else, other unique constraints included, is passed through
///   as storage failure.
fn classify(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NoRows,
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation() && db_err.constraint() == Some(NAME_CONSTRAINT) =>
        {
            RepositoryError::UniqueViolation
        }
        other => RepositoryError::storage(other),
    }
}

/// Zero affected rows means the `WHERE name = ...` matched nothing.
fn require_row(result: PgQueryResult) -> Result<(), RepositoryError> {
    if result.rows_affected() == 0 {
        return Err(RepositoryError::NoRows);
    }
    Ok(())
}

#[async_trait]
impl CategoryReader for PgCategoryRepo {
    async fn get_categories(&self, limit: u32) -> Result<Vec<Category>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id LIMIT $1");
        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn fetch_category(&self, name: &str) -> Result<Category, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(normalize_name(name))
            .fetch_one(&self.pool)
            .await
            .map(Category::from)
            .map_err(classify)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await.map_err(classify)
    }
}

#[async_trait]
impl CategoryWriter for PgCategoryRepo {
    async fn add_category(&self, dto: &CategoryDto) -> Result<(), RepositoryError> {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO categories (id, name, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4)",
        )
        .bind(new_category_id())
        .bind(normalize_name(&dto.name))
        .bind(dto.description.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(classify)?;
        Ok(())
    }

    async fn update_category(
        &self,
        name: &str,
        dto: &CategoryDto,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE categories SET name = $2, description = $3, updated_at = $4 \
             WHERE name = $1",
        )
        .bind(normalize_name(name))
        .bind(normalize_name(&dto.name))
        .bind(dto.description.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(classify)?;
        require_row(result)
    }

    async fn remove_category(&self, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(normalize_name(name))
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        require_row(result)
    }
}

//! Integration tests for the PostgreSQL category repository.
//!
//! These need a live database (`DATABASE_URL`), so they are ignored by
//! default. Run with `cargo test -p catalog-db -- --ignored`.

use assert_matches::assert_matches;
use catalog_core::category::CategoryDto;
use catalog_core::repository::{CategoryReader, CategoryWriter, RepositoryError};
use catalog_db::PgCategoryRepo;
use sqlx::PgPool;

fn dto(name: &str, description: Option<&str>) -> CategoryDto {
    CategoryDto::new(name, description.map(str::to_string))
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn add_then_fetch_normalizes_name(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);

    repo.add_category(&dto("  Action ", Some("kicks"))).await.unwrap();
    let category = repo.fetch_category("ACTION").await.unwrap();

    assert_eq!(category.name, "action");
    assert_eq!(category.description.as_deref(), Some("kicks"));
    assert!(!category.is_validated);
    assert!(category.created_at.is_some());
    assert_eq!(category.created_at, category.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_name_is_unique_violation(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);
    repo.add_category(&dto("Drama", None)).await.unwrap();

    let result = repo.add_category(&dto("drama", None)).await;

    assert_matches!(result, Err(RepositoryError::UniqueViolation));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn fetch_missing_is_no_rows(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);

    assert_matches!(
        repo.fetch_category("unknown").await,
        Err(RepositoryError::NoRows)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_is_limited_and_in_insertion_order(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);
    for name in ["zeta", "alpha", "mid"] {
        repo.add_category(&dto(name, None)).await.unwrap();
    }

    let names: Vec<_> = repo
        .get_categories(2)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, ["zeta", "alpha"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_renames_and_touches_updated_at(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);
    repo.add_category(&dto("action", None)).await.unwrap();
    let before = repo.fetch_category("action").await.unwrap();

    repo.update_category("Action", &dto("Action Movies", Some("updated")))
        .await
        .unwrap();

    let after = repo.fetch_category("action movies").await.unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
    assert_matches!(
        repo.fetch_category("action").await,
        Err(RepositoryError::NoRows)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_onto_existing_name_is_unique_violation(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);
    repo.add_category(&dto("rock", None)).await.unwrap();
    repo.add_category(&dto("pop", None)).await.unwrap();

    assert_matches!(
        repo.update_category("rock", &dto("POP", None)).await,
        Err(RepositoryError::UniqueViolation)
    );
    assert_matches!(
        repo.update_category("missing", &dto("new", None)).await,
        Err(RepositoryError::NoRows)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn remove_twice_is_no_rows_second_time(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);
    repo.add_category(&dto("folk", None)).await.unwrap();

    assert!(repo.remove_category("Folk").await.is_ok());
    assert_matches!(
        repo.remove_category("folk").await,
        Err(RepositoryError::NoRows)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn ping_succeeds_on_live_pool(pool: PgPool) {
    let repo = PgCategoryRepo::new(pool);

    assert!(repo.ping().await.is_ok());
}

//! Repository layer.
//!
//! Each repository wraps a `PgPool` and implements the capability traits
//! from `catalog_core::repository`.

pub mod category_repo;

pub use category_repo::PgCategoryRepo;

//! Database row structs.
//!
//! Rows are converted into the domain types from `catalog_core` before they
//! leave this crate.

pub mod category;

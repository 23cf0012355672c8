//! Domain layer for the category catalog.
//!
//! Holds the [`Category`](category::Category) entity and its request DTO,
//! the error taxonomy shared by every transport, the repository capability
//! traits (plus an in-memory implementation) and the two use-case services
//! that sit between transports and storage.

pub mod category;
pub mod error;
pub mod repository;
pub mod services;
pub mod types;
pub mod validation;

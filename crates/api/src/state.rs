use std::sync::Arc;

use catalog_core::repository::CategoryRepository;
use catalog_core::services::{Listing, Modifying};
use catalog_core::validation::DtoValidator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable and read-only once built.
#[derive(Clone)]
pub struct AppState {
    /// Read-side category service.
    pub listing: Listing,
    /// Write-side category service.
    pub modifying: Modifying,
    /// Validator used to fast-fail request DTOs during decoding.
    pub validator: DtoValidator,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire both services to the same repository.
    pub fn new<R>(repo: Arc<R>, config: ServerConfig) -> Self
    where
        R: CategoryRepository + 'static,
    {
        let validator = DtoValidator::new();

        Self {
            listing: Listing::new(repo.clone()),
            modifying: Modifying::new(repo, validator),
            validator,
            config: Arc::new(config),
        }
    }
}

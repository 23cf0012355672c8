//! Handlers for category CRUD.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::category::CategoryDto;
use catalog_core::services::MAX_LIST_LIMIT;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery, ValidJson};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /categories
///
/// List up to `limit` categories (default and ceiling: 127).
pub async fn list_categories(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(MAX_LIST_LIMIT).min(MAX_LIST_LIMIT);
    let categories = state.listing.get_categories(limit).await?;

    Ok(Json(categories))
}

/// GET /categories/{name}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let category = state.listing.fetch_category(&name).await?;

    Ok(Json(category))
}

/// POST /categories
///
/// Create a category. Echoes the stored (normalized) DTO with 201.
pub async fn create_category(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CategoryDto>,
) -> AppResult<impl IntoResponse> {
    let stored = state.modifying.add_category(&input).await?;

    tracing::info!(name = %stored.name, "Category created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /categories/{name}
///
/// Replace the category located by `name`. Echoes the stored DTO.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
    ValidJson(input): ValidJson<CategoryDto>,
) -> AppResult<impl IntoResponse> {
    let stored = state.modifying.update_category(&name, &input).await?;

    tracing::info!(from = %name, to = %stored.name, "Category updated");

    Ok(Json(stored))
}

/// DELETE /categories/{name}
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    state.modifying.remove_category(&name).await?;

    tracing::info!(name = %name, "Category removed");

    Ok(StatusCode::OK)
}

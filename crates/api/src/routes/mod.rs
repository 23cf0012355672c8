pub mod categories;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                          welcome (liveness)
/// /health                    service + storage health
///
/// /categories                list, create
/// /categories/{name}         get, replace, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
}

//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /categories` (`?limit=`).
///
/// The handler defaults and clamps the limit; the listing service rejects
/// negative values.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// Category primary keys are time-ordered UUIDs (v7).
pub type CategoryId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh category ID.
///
/// UUID v7 embeds the creation time, so ordering by ID follows insertion
/// order.
pub fn new_category_id() -> CategoryId {
    uuid::Uuid::now_v7()
}

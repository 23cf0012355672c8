/// Domain-level errors returned by the category services.
///
/// Transports decide how each variant is presented; the messages produced by
/// `Display` are safe to show to clients for every variant except
/// [`CoreError::Internal`], whose cause is meant for logs only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The input violates a syntactic constraint (e.g. a negative limit).
    #[error("{0}")]
    InvalidInput(String),

    /// A required value is absent or blank. Carries the field name.
    #[error("{} is required", capitalize(.0))]
    IsRequired(String),

    /// The lookup target does not exist. Carries the requested name.
    #[error("{0}: not found")]
    NotFound(String),

    /// The operation would create a second category with the same name.
    #[error("{0}: already exists")]
    AlreadyExists(String),

    /// Anything else. Carries the underlying cause.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::IsRequired`].
    pub fn is_required(field: impl Into<String>) -> Self {
        Self::IsRequired(field.into())
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

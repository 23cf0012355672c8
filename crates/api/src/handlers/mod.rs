//! Request handlers.
//!
//! Handlers decode and bind request parts, call a category service, and
//! render the result. Errors flow back through [`AppError`](crate::error::AppError).

pub mod categories;
pub mod fallback;
pub mod health;

//! HTTP middleware.
//!
//! - [`content_type::require_json`] -- rejects `POST`/`PUT` bodies not declared as JSON.
//! - [`panic::handle_panic`] -- renders a caught panic as a generic 500.
//! - [`timeout::render_timeout`] -- renders a deadline overrun as a JSON 408.

pub mod content_type;
pub mod panic;
pub mod timeout;

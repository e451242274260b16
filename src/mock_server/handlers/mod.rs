//! HTTP request handlers for the mock server.
//!
//! Each handler decodes the request, runs the capability check, makes
//! exactly one logic call and wraps the outcome. Failures bubble up as
//! [`LogicError`](super::error::LogicError), whose `IntoResponse` impl
//! owns the status mapping.

pub mod index_sets;
pub mod inputs;
pub mod roles;
pub mod streams;
pub mod users;

pub use index_sets::*;
pub use inputs::*;
pub use roles::*;
pub use streams::*;
pub use users::*;

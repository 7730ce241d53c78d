//! Freelancehunt API integration.
//!
//! - `client` - async HTTP client, one accessor per endpoint
//! - `models` - typed records and query builders
//! - `pacer` - minimum spacing between outbound requests
//! - `error` - API error taxonomy

mod client;
pub mod error;
pub mod models;
pub mod pacer;

#[cfg(test)]
pub mod testing;

pub use client::FreelancehuntClient;
pub use error::{ApiError, ApiResult};
pub use pacer::RequestPacer;

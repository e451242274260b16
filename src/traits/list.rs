//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::GraylogClient;
use crate::error::Result;

/// List all entities of a kind.
///
/// The Graylog API returns list endpoints as a single envelope
/// (`{"streams": [...], "total": N}` and friends) rather than pages, so
/// this trait yields the full collection in one call.
#[async_trait]
pub trait List: Sized {
    /// List all entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &GraylogClient) -> Result<Vec<Self>>;
}

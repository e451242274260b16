//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::GraylogClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier (an object id, a username, a role name).
///
/// # Example
///
/// ```ignore
/// use graylogapi::{GraylogClient, Stream, Get};
///
/// let client = GraylogClient::from_env()?;
/// let stream = Stream::get(&client, "5d84c1a92ab79c000d35d6ca".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the entity is not found, or
    /// the request fails.
    async fn get(client: &GraylogClient, id: Self::Id) -> Result<Self>;
}

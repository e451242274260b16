//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::GraylogClient;
use crate::error::Result;

/// Delete an entity by ID.
#[async_trait]
pub trait Delete: Sized {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the entity is not found, or
    /// the request fails.
    async fn delete(client: &GraylogClient, id: Self::Id) -> Result<()>;
}

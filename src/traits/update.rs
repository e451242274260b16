//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::GraylogClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Updates are full replacements: the body is the complete record, not a
/// partial patch. The identifier in the path wins over whatever the body
/// carries; the server never changes an entity's id on update.
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// What the update endpoint returns.
    type Output;

    /// Update the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the entity is not found, or
    /// the request fails.
    async fn update(client: &GraylogClient, id: Self::Id, entity: &Self) -> Result<Self::Output>;
}

//! Create trait for registering new entities.

use async_trait::async_trait;

use crate::client::GraylogClient;
use crate::error::Result;

/// Create a new entity.
///
/// The input is the entity record itself; server-assigned fields (id,
/// creation timestamp) may be left unset and are filled in by the server.
///
/// # Example
///
/// ```ignore
/// use graylogapi::{GraylogClient, Stream, Create};
///
/// let created = Stream::create(&client, &stream).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// What the create endpoint returns: the created record for most
    /// kinds, `()` for endpoints that answer with an empty body.
    type Output;

    /// Create the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, a reference does
    /// not resolve, or the request fails.
    async fn create(client: &GraylogClient, entity: &Self) -> Result<Self::Output>;
}

//! Role model and trait implementations.
//!
//! Roles are addressed by name, not by a server-generated id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::GraylogClient;
use crate::error::{GraylogError, Result};
use crate::traits::{Create, Delete, Get, List, Update};

/// A Graylog role: a named bundle of permissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    /// The role name; unique, immutable, used as the identifier.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Granted permissions. Must not be empty.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Whether the role is built in and cannot be modified.
    #[serde(default)]
    pub read_only: bool,
}

/// API response wrapper for listing roles.
#[derive(Debug, Deserialize)]
struct RoleListResponse {
    roles: Vec<Role>,
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
}

#[async_trait]
impl Get for Role {
    type Id = String; // role name

    #[tracing::instrument(skip(client))]
    async fn get(client: &GraylogClient, name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(GraylogError::InvalidArgument("role name is empty".to_string()));
        }
        let response = client
            .get(&format!("roles/{}", urlencoding::encode(&name)))
            .await?;
        let role: Role = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(role)
    }
}

#[async_trait]
impl List for Role {
    #[tracing::instrument(skip(client))]
    async fn list(client: &GraylogClient) -> Result<Vec<Self>> {
        let response = client.get("roles").await?;
        let data: RoleListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.roles)
    }
}

#[async_trait]
impl Create for Role {
    type Output = Role;

    #[tracing::instrument(skip(client, role))]
    async fn create(client: &GraylogClient, role: &Self) -> Result<Role> {
        let response = client.post("roles", role).await?;
        let created: Role = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(created)
    }
}

#[async_trait]
impl Update for Role {
    type Id = String; // role name
    type Output = Role;

    #[tracing::instrument(skip(client, role))]
    async fn update(client: &GraylogClient, name: String, role: &Self) -> Result<Role> {
        if name.is_empty() {
            return Err(GraylogError::InvalidArgument("role name is empty".to_string()));
        }
        let response = client
            .put(&format!("roles/{}", urlencoding::encode(&name)), role)
            .await?;
        let updated: Role = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(updated)
    }
}

#[async_trait]
impl Delete for Role {
    type Id = String; // role name

    #[tracing::instrument(skip(client))]
    async fn delete(client: &GraylogClient, name: String) -> Result<()> {
        if name.is_empty() {
            return Err(GraylogError::InvalidArgument("role name is empty".to_string()));
        }
        client
            .delete(&format!("roles/{}", urlencoding::encode(&name)))
            .await?;
        Ok(())
    }
}

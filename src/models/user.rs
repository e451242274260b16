//! User model and trait implementations.
//!
//! Users are addressed by username, not by a server-generated id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::GraylogClient;
use crate::error::{GraylogError, Result};
use crate::traits::{Create, Delete, Get, List, Update};

/// A Graylog user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// The account name; unique, immutable, used as the identifier.
    #[serde(default)]
    pub username: String,

    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Write-only: accepted on create/update, never present in responses.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    /// Direct permission grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    /// Names of roles the user belongs to. Each must exist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Preferred timezone, e.g. "UTC".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Session timeout in milliseconds.
    #[serde(default)]
    pub session_timeout_ms: u64,

    /// Whether the account comes from an external authenticator.
    #[serde(default)]
    pub external: bool,

    /// Whether the account is read-only (e.g. the built-in admin).
    #[serde(default)]
    pub read_only: bool,

    /// Whether the user has an active session.
    #[serde(default)]
    pub session_active: bool,

    /// Last recorded activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,

    /// Address of the user's last client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,

    /// UI preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,

    /// Page shown after login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startpage: Option<Startpage>,
}

/// UI preferences of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, rename = "updateUnfocussed")]
    pub update_unfocussed: bool,
    #[serde(default, rename = "enableSmartSearch")]
    pub enable_smart_search: bool,
}

/// A user's start page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Startpage {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// API response wrapper for listing users.
#[derive(Debug, Deserialize)]
struct UserListResponse {
    users: Vec<User>,
}

#[async_trait]
impl Get for User {
    type Id = String; // username

    #[tracing::instrument(skip(client))]
    async fn get(client: &GraylogClient, username: String) -> Result<Self> {
        if username.is_empty() {
            return Err(GraylogError::InvalidArgument("username is empty".to_string()));
        }
        let response = client
            .get(&format!("users/{}", urlencoding::encode(&username)))
            .await?;
        let user: User = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(user)
    }
}

#[async_trait]
impl List for User {
    #[tracing::instrument(skip(client))]
    async fn list(client: &GraylogClient) -> Result<Vec<Self>> {
        let response = client.get("users").await?;
        let data: UserListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.users)
    }
}

#[async_trait]
impl Create for User {
    /// The create endpoint answers 201 with an empty body.
    type Output = ();

    #[tracing::instrument(skip(client, user))]
    async fn create(client: &GraylogClient, user: &Self) -> Result<()> {
        client.post("users", user).await?;
        Ok(())
    }
}

#[async_trait]
impl Update for User {
    type Id = String; // username
    /// The update endpoint answers 204 with an empty body.
    type Output = ();

    #[tracing::instrument(skip(client, user))]
    async fn update(client: &GraylogClient, username: String, user: &Self) -> Result<()> {
        if username.is_empty() {
            return Err(GraylogError::InvalidArgument("username is empty".to_string()));
        }
        client
            .put(&format!("users/{}", urlencoding::encode(&username)), user)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Delete for User {
    type Id = String; // username

    #[tracing::instrument(skip(client))]
    async fn delete(client: &GraylogClient, username: String) -> Result<()> {
        if username.is_empty() {
            return Err(GraylogError::InvalidArgument("username is empty".to_string()));
        }
        client
            .delete(&format!("users/{}", urlencoding::encode(&username)))
            .await?;
        Ok(())
    }
}

//! Stream model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::GraylogClient;
use crate::error::{GraylogError, Result};
use crate::traits::{Create, Delete, Get, List, Update};

/// A Graylog stream.
///
/// Streams route incoming messages into categories in real time based on
/// their rules. Every stream writes into exactly one index set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stream {
    /// Server-assigned object id. Leave empty on create.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The stream title.
    #[serde(default)]
    pub title: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the index set this stream writes to.
    #[serde(default)]
    pub index_set_id: String,

    /// Whether the stream is paused. Toggled only by the pause/resume
    /// endpoints, never by a general update.
    #[serde(default)]
    pub disabled: bool,

    /// Matching rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<StreamRule>,

    /// How rules combine: "AND" or "OR".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_type: Option<String>,

    /// Whether matching messages are removed from the default stream.
    #[serde(default)]
    pub remove_matches_from_default_stream: bool,

    /// When the stream was created (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Who created the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<String>,
}

/// A single stream matching rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamRule {
    /// Server-assigned rule id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Message field the rule inspects.
    #[serde(default)]
    pub field: String,

    /// Rule type (1 = exact match, 2 = regex, ...).
    #[serde(default, rename = "type")]
    pub rule_type: u32,

    /// Value the field is compared against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the rule is negated.
    #[serde(default)]
    pub inverted: bool,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Stream {
    /// Whether the stream is currently enabled.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// List only the enabled streams.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let enabled = Stream::enabled(&client).await?;
    /// for s in &enabled {
    ///     println!("{}: {}", s.id, s.title);
    /// }
    /// ```
    pub async fn enabled(client: &GraylogClient) -> Result<Vec<Stream>> {
        let response = client.get("streams/enabled").await?;
        let data: StreamListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.streams)
    }

    /// Pause the stream: sets `disabled = true`.
    pub async fn pause(client: &GraylogClient, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("stream id is empty".to_string()));
        }
        client
            .post_empty(&format!("streams/{}/pause", urlencoding::encode(id)))
            .await?;
        Ok(())
    }

    /// Resume the stream: sets `disabled = false`.
    pub async fn resume(client: &GraylogClient, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("stream id is empty".to_string()));
        }
        client
            .post_empty(&format!("streams/{}/resume", urlencoding::encode(id)))
            .await?;
        Ok(())
    }
}

/// API response wrapper for listing streams.
#[derive(Debug, Deserialize)]
struct StreamListResponse {
    streams: Vec<Stream>,
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
}

#[async_trait]
impl Get for Stream {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GraylogClient, id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("stream id is empty".to_string()));
        }
        let response = client
            .get(&format!("streams/{}", urlencoding::encode(&id)))
            .await?;
        let stream: Stream = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(stream)
    }
}

#[async_trait]
impl List for Stream {
    #[tracing::instrument(skip(client))]
    async fn list(client: &GraylogClient) -> Result<Vec<Self>> {
        let response = client.get("streams").await?;
        let data: StreamListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.streams)
    }
}

#[async_trait]
impl Create for Stream {
    type Output = Stream;

    #[tracing::instrument(skip(client, stream))]
    async fn create(client: &GraylogClient, stream: &Self) -> Result<Stream> {
        let response = client.post("streams", stream).await?;
        let created: Stream = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(created)
    }
}

#[async_trait]
impl Update for Stream {
    type Id = String;
    type Output = Stream;

    #[tracing::instrument(skip(client, stream))]
    async fn update(client: &GraylogClient, id: String, stream: &Self) -> Result<Stream> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("stream id is empty".to_string()));
        }
        let response = client
            .put(&format!("streams/{}", urlencoding::encode(&id)), stream)
            .await?;
        let updated: Stream = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(updated)
    }
}

#[async_trait]
impl Delete for Stream {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &GraylogClient, id: String) -> Result<()> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("stream id is empty".to_string()));
        }
        client
            .delete(&format!("streams/{}", urlencoding::encode(&id)))
            .await?;
        Ok(())
    }
}

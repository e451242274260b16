//! Input model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::GraylogClient;
use crate::error::{GraylogError, Result};
use crate::traits::{Create, Delete, Get, List, Update};

/// A Graylog input.
///
/// Inputs are the ingestion endpoints (syslog, GELF, beats, ...) that
/// feed messages into the system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Input {
    /// Server-assigned object id. Leave empty on create.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The input title.
    #[serde(default)]
    pub title: String,

    /// Input type, e.g. `org.graylog2.inputs.syslog.udp.SyslogUDPInput`.
    #[serde(default, rename = "type")]
    pub input_type: String,

    /// Whether the input runs on every node.
    #[serde(default)]
    pub global: bool,

    /// Node the input is pinned to, when not global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    /// Listener configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<InputAttributes>,

    /// When the input was created (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Who created the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<String>,
}

/// Listener configuration for an input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputAttributes {
    /// Address the listener binds to.
    #[serde(default)]
    pub bind_address: String,

    /// Port the listener binds to.
    #[serde(default)]
    pub port: u16,

    /// Receive buffer size in bytes.
    #[serde(default)]
    pub recv_buffer_size: u32,
}

/// API response wrapper for listing inputs.
#[derive(Debug, Deserialize)]
struct InputListResponse {
    inputs: Vec<Input>,
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
}

#[async_trait]
impl Get for Input {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GraylogClient, id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("input id is empty".to_string()));
        }
        let response = client
            .get(&format!("system/inputs/{}", urlencoding::encode(&id)))
            .await?;
        let input: Input = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(input)
    }
}

#[async_trait]
impl List for Input {
    #[tracing::instrument(skip(client))]
    async fn list(client: &GraylogClient) -> Result<Vec<Self>> {
        let response = client.get("system/inputs").await?;
        let data: InputListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.inputs)
    }
}

#[async_trait]
impl Create for Input {
    type Output = Input;

    #[tracing::instrument(skip(client, input))]
    async fn create(client: &GraylogClient, input: &Self) -> Result<Input> {
        let response = client.post("system/inputs", input).await?;
        let created: Input = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(created)
    }
}

#[async_trait]
impl Update for Input {
    type Id = String;
    type Output = Input;

    #[tracing::instrument(skip(client, input))]
    async fn update(client: &GraylogClient, id: String, input: &Self) -> Result<Input> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("input id is empty".to_string()));
        }
        let response = client
            .put(&format!("system/inputs/{}", urlencoding::encode(&id)), input)
            .await?;
        let updated: Input = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(updated)
    }
}

#[async_trait]
impl Delete for Input {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &GraylogClient, id: String) -> Result<()> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("input id is empty".to_string()));
        }
        client
            .delete(&format!("system/inputs/{}", urlencoding::encode(&id)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_wire_name() {
        let input = Input {
            title: "Syslog".to_string(),
            input_type: "org.graylog2.inputs.syslog.udp.SyslogUDPInput".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "org.graylog2.inputs.syslog.udp.SyslogUDPInput");
        assert!(json.get("input_type").is_none());
        assert!(json.get("node").is_none());
    }
}

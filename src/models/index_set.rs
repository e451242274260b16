//! Index set model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::GraylogClient;
use crate::error::{GraylogError, Result};
use crate::traits::{Create, Delete, Get, List, Update};

/// A Graylog index set.
///
/// Index sets configure how messages are stored: sharding, replication,
/// rotation and retention. Exactly one index set is the default target
/// for streams that don't pick one themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSet {
    /// Server-assigned object id. Leave empty on create.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The index set title.
    #[serde(default)]
    pub title: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Prefix of the backing indices. Unique across index sets.
    #[serde(default)]
    pub index_prefix: String,

    /// Number of shards per index.
    #[serde(default)]
    pub shards: u32,

    /// Number of replicas per index.
    #[serde(default)]
    pub replicas: u32,

    /// Fully-qualified class name of the rotation strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_strategy_class: Option<String>,

    /// Rotation strategy configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_strategy: Option<RotationStrategy>,

    /// Fully-qualified class name of the retention strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_strategy_class: Option<String>,

    /// Retention strategy configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_strategy: Option<RetentionStrategy>,

    /// Analyzer applied to indexed messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_analyzer: Option<String>,

    /// Segment target for index optimization.
    #[serde(default)]
    pub index_optimization_max_num_segments: u32,

    /// Whether index optimization is disabled.
    #[serde(default)]
    pub index_optimization_disabled: bool,

    /// Whether the index set accepts writes. A non-writable index set
    /// cannot become the default.
    #[serde(default)]
    pub writable: bool,

    /// Whether this is the default index set. Mutated only through the
    /// set-default endpoint.
    #[serde(default)]
    pub default: bool,

    /// When the index set was created (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Index rotation strategy configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotationStrategy {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,
    #[serde(default)]
    pub max_docs_per_index: u64,
}

/// Index retention strategy configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetentionStrategy {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,
    #[serde(default)]
    pub max_number_of_indices: u64,
}

/// Aggregate statistics for one index set, or for all of them.
///
/// Computed by the server on demand; an empty deployment reports zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSetStats {
    #[serde(default)]
    pub indices: u64,
    #[serde(default)]
    pub documents: u64,
    #[serde(default)]
    pub size: u64,
}

impl IndexSet {
    /// Make this index set the default.
    ///
    /// Returns the updated record. The previous default is cleared by the
    /// server in the same operation.
    pub async fn set_default(client: &GraylogClient, id: &str) -> Result<IndexSet> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("index set id is empty".to_string()));
        }
        let response = client
            .put_empty(&format!(
                "system/indices/index_sets/{}/default",
                urlencoding::encode(id)
            ))
            .await?;
        let updated: IndexSet = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(updated)
    }

    /// Fetch statistics for one index set.
    pub async fn stats(client: &GraylogClient, id: &str) -> Result<IndexSetStats> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("index set id is empty".to_string()));
        }
        let response = client
            .get(&format!(
                "system/indices/index_sets/{}/stats",
                urlencoding::encode(id)
            ))
            .await?;
        let stats: IndexSetStats = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(stats)
    }

    /// Fetch statistics aggregated over all index sets.
    pub async fn total_stats(client: &GraylogClient) -> Result<IndexSetStats> {
        let response = client.get("system/indices/index_sets/stats").await?;
        let stats: IndexSetStats = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(stats)
    }

    /// List a window of index sets.
    ///
    /// `skip` and `limit` window the result the way the real endpoint
    /// does; `limit = 0` means no limit.
    pub async fn list_range(
        client: &GraylogClient,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<IndexSet>> {
        #[derive(Serialize)]
        struct RangeQuery {
            skip: u64,
            limit: u64,
        }

        let response = client
            .get_with_query("system/indices/index_sets", &RangeQuery { skip, limit })
            .await?;
        let data: IndexSetListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.index_sets)
    }
}

/// API response wrapper for listing index sets.
#[derive(Debug, Deserialize)]
struct IndexSetListResponse {
    index_sets: Vec<IndexSet>,
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
    #[serde(default)]
    #[allow(dead_code)]
    stats: Option<IndexSetStats>,
}

#[async_trait]
impl Get for IndexSet {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GraylogClient, id: String) -> Result<Self> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("index set id is empty".to_string()));
        }
        let response = client
            .get(&format!(
                "system/indices/index_sets/{}",
                urlencoding::encode(&id)
            ))
            .await?;
        let index_set: IndexSet = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(index_set)
    }
}

#[async_trait]
impl List for IndexSet {
    #[tracing::instrument(skip(client))]
    async fn list(client: &GraylogClient) -> Result<Vec<Self>> {
        let response = client.get("system/indices/index_sets").await?;
        let data: IndexSetListResponse = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(data.index_sets)
    }
}

#[async_trait]
impl Create for IndexSet {
    type Output = IndexSet;

    #[tracing::instrument(skip(client, index_set))]
    async fn create(client: &GraylogClient, index_set: &Self) -> Result<IndexSet> {
        let response = client.post("system/indices/index_sets", index_set).await?;
        let created: IndexSet = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(created)
    }
}

#[async_trait]
impl Update for IndexSet {
    type Id = String;
    type Output = IndexSet;

    #[tracing::instrument(skip(client, index_set))]
    async fn update(client: &GraylogClient, id: String, index_set: &Self) -> Result<IndexSet> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("index set id is empty".to_string()));
        }
        let response = client
            .put(
                &format!("system/indices/index_sets/{}", urlencoding::encode(&id)),
                index_set,
            )
            .await?;
        let updated: IndexSet = response.json().await.map_err(GraylogError::HttpError)?;
        Ok(updated)
    }
}

#[async_trait]
impl Delete for IndexSet {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &GraylogClient, id: String) -> Result<()> {
        if id.is_empty() {
            return Err(GraylogError::InvalidArgument("index set id is empty".to_string()));
        }
        client
            .delete(&format!(
                "system/indices/index_sets/{}",
                urlencoding::encode(&id)
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_wire_names() {
        let strategy = RotationStrategy {
            strategy_type: Some("MessageCountRotationStrategyConfig".to_string()),
            max_docs_per_index: 20_000_000,
        };
        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["type"], "MessageCountRotationStrategyConfig");
        assert_eq!(json["max_docs_per_index"], 20_000_000u64);
    }

    #[test]
    fn test_stats_default_is_zeroed() {
        let stats = IndexSetStats::default();
        assert_eq!(stats.indices, 0);
        assert_eq!(stats.documents, 0);
        assert_eq!(stats.size, 0);
    }

    #[test]
    fn test_serialize_omits_unset_id() {
        let index_set = IndexSet {
            title: "Default".to_string(),
            index_prefix: "graylog".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&index_set).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("rotation_strategy").is_none());
    }
}

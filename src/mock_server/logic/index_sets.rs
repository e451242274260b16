//! Index set business rules.

use chrono::Utc;

use super::Logic;
use crate::mock_server::error::{LogicError, LogicResult};
use crate::{IndexSet, IndexSetStats};

impl Logic {
    /// Create an index set.
    ///
    /// The `default` flag is forced off: only
    /// [`set_default_index_set`](Self::set_default_index_set) moves it,
    /// which keeps "at most one default" true under any call sequence.
    pub async fn create_index_set(&self, mut index_set: IndexSet) -> LogicResult<IndexSet> {
        self.validate_index_set(&index_set, None).await?;
        if index_set.id.is_empty() {
            index_set.id = Self::new_object_id();
        } else if self.store().index_sets.has(&index_set.id).await {
            return Err(LogicError::Conflict(format!(
                "index set <{}> already exists",
                index_set.id
            )));
        }
        if index_set.creation_date.is_none() {
            index_set.creation_date = Some(Utc::now());
        }
        index_set.default = false;
        self.store().index_sets.add(index_set.clone()).await?;
        Ok(index_set)
    }

    /// A copy of the index set with the given id.
    pub async fn index_set(&self, id: &str) -> LogicResult<IndexSet> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("index set id is empty".to_string()));
        }
        self.store()
            .index_sets
            .get(id)
            .await
            .ok_or_else(|| LogicError::not_found("index set", id))
    }

    /// Replace the index set with the given id.
    ///
    /// The stored id, creation date and `default` flag survive the
    /// replacement; the set-default endpoint is the flag's only mutator.
    pub async fn update_index_set(&self, id: &str, mut index_set: IndexSet) -> LogicResult<IndexSet> {
        let current = self.index_set(id).await?;
        self.validate_index_set(&index_set, Some(current.id.as_str()))
            .await?;
        index_set.id = current.id;
        index_set.creation_date = current.creation_date;
        index_set.default = current.default;
        self.store().index_sets.update(index_set.clone()).await?;
        Ok(index_set)
    }

    /// Delete the index set with the given id.
    ///
    /// Refused while the index set is the default or any stream still
    /// writes to it; deletion never orphans a stream's reference.
    pub async fn delete_index_set(&self, id: &str) -> LogicResult<()> {
        let current = self.index_set(id).await?;
        if current.default {
            return Err(LogicError::Conflict(
                "the default index set cannot be deleted".to_string(),
            ));
        }
        let referencing = self
            .store()
            .streams
            .list_filtered(|s| s.index_set_id == id)
            .await;
        if !referencing.is_empty() {
            return Err(LogicError::Conflict(format!(
                "index set <{}> is still used by {} stream(s)",
                id,
                referencing.len()
            )));
        }
        self.store()
            .index_sets
            .delete(id)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("index set", id))
    }

    /// All index sets, with a total.
    pub async fn index_sets(&self) -> LogicResult<(Vec<IndexSet>, u64)> {
        let index_sets = self.store().index_sets.list().await;
        let total = index_sets.len() as u64;
        Ok((index_sets, total))
    }

    /// Make the index set with the given id the default.
    ///
    /// Flips the flag across all index sets under a single write lock,
    /// so readers always observe exactly one default. A failed call
    /// leaves the previous default in place.
    pub async fn set_default_index_set(&self, id: &str) -> LogicResult<IndexSet> {
        let current = self.index_set(id).await?;
        if !current.writable {
            return Err(LogicError::Conflict(format!(
                "non-writable index set <{}> cannot be the default",
                id
            )));
        }
        self.store()
            .index_sets
            .modify_all(|is| is.default = is.id == id)
            .await;
        self.index_set(id).await
    }

    /// Statistics for one index set.
    ///
    /// The mock has no backing indices, so the numbers are a
    /// deterministic zeroed stub; the shape and the not-found contract
    /// match the real endpoint.
    pub async fn index_set_stats(&self, id: &str) -> LogicResult<IndexSetStats> {
        self.index_set(id).await?;
        Ok(IndexSetStats::default())
    }

    /// Statistics aggregated over all index sets.
    ///
    /// Computed from current store contents on every call; an empty
    /// store yields a zeroed aggregate, never an error.
    pub async fn total_index_set_stats(&self) -> LogicResult<IndexSetStats> {
        let (index_sets, _) = self.index_sets().await?;
        let mut total = IndexSetStats::default();
        for index_set in &index_sets {
            let stats = self.index_set_stats(&index_set.id).await?;
            total.indices += stats.indices;
            total.documents += stats.documents;
            total.size += stats.size;
        }
        Ok(total)
    }

    /// Field-level checks shared by create and update. `own_id` excludes
    /// the record itself from the prefix-uniqueness scan on update.
    async fn validate_index_set(
        &self,
        index_set: &IndexSet,
        own_id: Option<&str>,
    ) -> LogicResult<()> {
        if index_set.title.is_empty() {
            return Err(LogicError::Validation("title is required".to_string()));
        }
        if index_set.index_prefix.is_empty() {
            return Err(LogicError::Validation("index_prefix is required".to_string()));
        }
        if index_set.rotation_strategy_class.is_none() || index_set.rotation_strategy.is_none() {
            return Err(LogicError::Validation(
                "rotation strategy is required".to_string(),
            ));
        }
        if index_set.retention_strategy_class.is_none() || index_set.retention_strategy.is_none() {
            return Err(LogicError::Validation(
                "retention strategy is required".to_string(),
            ));
        }
        let prefix = index_set.index_prefix.clone();
        let clashing = self
            .store()
            .index_sets
            .list_filtered(|other| {
                other.index_prefix == prefix && Some(other.id.as_str()) != own_id
            })
            .await;
        if !clashing.is_empty() {
            return Err(LogicError::Conflict(format!(
                "index prefix <{}> is already in use",
                index_set.index_prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_logic;
    use super::*;
    use crate::{RetentionStrategy, RotationStrategy, Stream};

    fn index_set(title: &str, prefix: &str) -> IndexSet {
        IndexSet {
            title: title.to_string(),
            index_prefix: prefix.to_string(),
            shards: 4,
            replicas: 0,
            rotation_strategy_class: Some(
                "org.graylog2.indexer.rotation.strategies.MessageCountRotationStrategy".to_string(),
            ),
            rotation_strategy: Some(RotationStrategy {
                strategy_type: Some("MessageCountRotationStrategyConfig".to_string()),
                max_docs_per_index: 20_000_000,
            }),
            retention_strategy_class: Some(
                "org.graylog2.indexer.retention.strategies.DeletionRetentionStrategy".to_string(),
            ),
            retention_strategy: Some(RetentionStrategy {
                strategy_type: Some("DeletionRetentionStrategyConfig".to_string()),
                max_number_of_indices: 20,
            }),
            writable: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_requires_strategies() {
        let logic = test_logic();

        let mut incomplete = index_set("No rotation", "a");
        incomplete.rotation_strategy = None;
        assert!(matches!(
            logic.create_index_set(incomplete).await.unwrap_err(),
            LogicError::Validation(_)
        ));

        let mut incomplete = index_set("No retention", "b");
        incomplete.retention_strategy_class = None;
        assert!(matches!(
            logic.create_index_set(incomplete).await.unwrap_err(),
            LogicError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_prefix() {
        let logic = test_logic();
        logic
            .create_index_set(index_set("First", "graylog"))
            .await
            .unwrap();

        let err = logic
            .create_index_set(index_set("Second", "graylog"))
            .await
            .unwrap_err();
        assert!(matches!(err, LogicError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_own_prefix_without_conflict() {
        let logic = test_logic();
        let created = logic
            .create_index_set(index_set("Original", "graylog"))
            .await
            .unwrap();

        let renamed = logic
            .update_index_set(&created.id, index_set("Renamed", "graylog"))
            .await
            .unwrap();
        assert_eq!(renamed.title, "Renamed");
        assert_eq!(renamed.id, created.id);
    }

    #[tokio::test]
    async fn test_set_default_moves_the_flag_atomically() {
        let logic = test_logic();
        let first = logic
            .create_index_set(index_set("First", "one"))
            .await
            .unwrap();
        let second = logic
            .create_index_set(index_set("Second", "two"))
            .await
            .unwrap();

        let updated = logic.set_default_index_set(&first.id).await.unwrap();
        assert!(updated.default);

        logic.set_default_index_set(&second.id).await.unwrap();
        let (all, _) = logic.index_sets().await.unwrap();
        let defaults: Vec<_> = all.iter().filter(|is| is.default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, second.id);
    }

    #[tokio::test]
    async fn test_set_default_unknown_id_keeps_existing_default() {
        let logic = test_logic();
        let first = logic
            .create_index_set(index_set("First", "one"))
            .await
            .unwrap();
        logic.set_default_index_set(&first.id).await.unwrap();

        let err = logic.set_default_index_set("ghost").await.unwrap_err();
        assert!(matches!(err, LogicError::NotFound { .. }));
        assert!(logic.index_set(&first.id).await.unwrap().default);
    }

    #[tokio::test]
    async fn test_set_default_rejects_unwritable_target() {
        let logic = test_logic();
        let first = logic
            .create_index_set(index_set("First", "one"))
            .await
            .unwrap();
        logic.set_default_index_set(&first.id).await.unwrap();

        let mut frozen = index_set("Frozen", "two");
        frozen.writable = false;
        let frozen = logic.create_index_set(frozen).await.unwrap();

        let err = logic.set_default_index_set(&frozen.id).await.unwrap_err();
        assert!(matches!(err, LogicError::Conflict(_)));
        assert!(logic.index_set(&first.id).await.unwrap().default);
    }

    #[tokio::test]
    async fn test_update_preserves_default_flag() {
        let logic = test_logic();
        let created = logic
            .create_index_set(index_set("Default", "graylog"))
            .await
            .unwrap();
        logic.set_default_index_set(&created.id).await.unwrap();

        let mut replacement = index_set("Still default", "graylog");
        replacement.default = false;
        let updated = logic
            .update_index_set(&created.id, replacement)
            .await
            .unwrap();
        assert!(updated.default);
    }

    #[tokio::test]
    async fn test_delete_rejects_default_index_set() {
        let logic = test_logic();
        let created = logic
            .create_index_set(index_set("Default", "graylog"))
            .await
            .unwrap();
        logic.set_default_index_set(&created.id).await.unwrap();

        let err = logic.delete_index_set(&created.id).await.unwrap_err();
        assert!(matches!(err, LogicError::Conflict(_)));
        assert!(logic.index_set(&created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_rejects_referenced_index_set() {
        let logic = test_logic();
        let created = logic
            .create_index_set(index_set("In use", "graylog"))
            .await
            .unwrap();
        logic
            .create_stream(Stream {
                title: "writer".to_string(),
                index_set_id: created.id.clone(),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = logic.delete_index_set(&created.id).await.unwrap_err();
        assert!(matches!(err, LogicError::Conflict(_)));

        // Unreferenced afterwards: delete succeeds.
        let (streams, _) = logic.streams().await.unwrap();
        logic.delete_stream(&streams[0].id).await.unwrap();
        logic.delete_index_set(&created.id).await.unwrap();
        assert!(logic.index_set(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_stats_contract() {
        let logic = test_logic();
        assert!(matches!(
            logic.index_set_stats("ghost").await.unwrap_err(),
            LogicError::NotFound { .. }
        ));

        // Empty store: the aggregate is zeroed, not an error.
        let total = logic.total_index_set_stats().await.unwrap();
        assert_eq!(total, IndexSetStats::default());

        let created = logic
            .create_index_set(index_set("Stats", "graylog"))
            .await
            .unwrap();
        let stats = logic.index_set_stats(&created.id).await.unwrap();
        assert_eq!(stats, IndexSetStats::default());
    }
}

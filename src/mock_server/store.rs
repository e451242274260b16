//! In-memory object store for the mock server.
//!
//! One [`Collection`] per resource kind, each guarded by its own
//! `RwLock`. The store knows nothing about business rules; it only keeps
//! records safely and hands out copies. Existence checks, validation and
//! cross-kind references all live in the logic layer.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{IndexSet, Input, Role, Stream, User};

/// A record that can live in a [`Collection`].
pub trait Keyed {
    /// The record's identifier within its kind.
    fn key(&self) -> &str;
}

impl Keyed for Stream {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for IndexSet {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Input {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.username
    }
}

impl Keyed for Role {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Structural store failure: a record without a key cannot be stored.
///
/// This is the only error the store itself produces. The empty string is
/// never a valid key.
#[derive(Debug, thiserror::Error)]
#[error("record key is empty")]
pub struct EmptyKey;

/// A concurrency-safe map of records of one kind.
///
/// Every operation takes the collection lock exactly once and releases
/// it on scope exit, so readers never observe a half-written record.
/// Returned records are clones; mutating them never touches store state.
#[derive(Debug, Default)]
pub struct Collection<T> {
    records: RwLock<HashMap<String, T>>,
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Whether a record with this id exists.
    pub async fn has(&self, id: &str) -> bool {
        self.records.read().await.contains_key(id)
    }

    /// A copy of the record, if present.
    pub async fn get(&self, id: &str) -> Option<T> {
        self.records.read().await.get(id).cloned()
    }

    /// Insert a record under its own key and return that key.
    pub async fn add(&self, record: T) -> Result<String, EmptyKey> {
        let key = record.key().to_string();
        if key.is_empty() {
            return Err(EmptyKey);
        }
        self.records.write().await.insert(key.clone(), record);
        Ok(key)
    }

    /// Unconditionally replace the record under its key.
    ///
    /// "Does it exist" is the logic layer's question, not the store's.
    pub async fn update(&self, record: T) -> Result<(), EmptyKey> {
        let key = record.key().to_string();
        if key.is_empty() {
            return Err(EmptyKey);
        }
        self.records.write().await.insert(key, record);
        Ok(())
    }

    /// Remove and return the record, if present.
    pub async fn delete(&self, id: &str) -> Option<T> {
        self.records.write().await.remove(id)
    }

    /// Copies of all records. Order is not significant.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    /// Copies of the records matching the predicate.
    pub async fn list_filtered(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .await
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Apply `f` to the record under `id` inside a single write lock and
    /// return a copy of the result. Read-modify-write without a gap.
    pub async fn modify(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.get_mut(id)?;
        f(record);
        Some(record.clone())
    }

    /// Apply `f` to every record inside a single write lock.
    ///
    /// Used for sweeps that must be atomic with respect to readers, such
    /// as moving a marker flag from one record to another.
    pub async fn modify_all(&self, mut f: impl FnMut(&mut T)) {
        let mut records = self.records.write().await;
        for record in records.values_mut() {
            f(record);
        }
    }
}

/// The mock server's complete object store: one collection per kind.
///
/// Created once per server process and injected into the logic layer;
/// there is no global instance.
#[derive(Debug, Default)]
pub struct ObjectStore {
    pub streams: Collection<Stream>,
    pub index_sets: Collection<IndexSet>,
    pub inputs: Collection<Input>,
    pub users: Collection<User>,
    pub roles: Collection<Role>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(id: &str, title: &str) -> Stream {
        Stream {
            id: id.to_string(),
            title: title.to_string(),
            index_set_id: "is".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_get_roundtrip() {
        let collection = Collection::new();
        let key = collection.add(stream("s1", "one")).await.unwrap();
        assert_eq!(key, "s1");
        assert!(collection.has("s1").await);

        let copy = collection.get("s1").await.unwrap();
        assert_eq!(copy.title, "one");
    }

    #[tokio::test]
    async fn test_add_rejects_empty_key() {
        let collection = Collection::new();
        assert!(collection.add(stream("", "nameless")).await.is_err());
        assert_eq!(collection.len().await, 0);
    }

    #[tokio::test]
    async fn test_returned_record_is_a_copy() {
        let collection = Collection::new();
        collection.add(stream("s1", "original")).await.unwrap();

        let mut copy = collection.get("s1").await.unwrap();
        copy.title = "mutated".to_string();

        assert_eq!(collection.get("s1").await.unwrap().title, "original");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let collection = Collection::new();
        collection.add(stream("s1", "one")).await.unwrap();
        assert!(collection.delete("s1").await.is_some());
        assert!(collection.get("s1").await.is_none());
        assert!(collection.delete("s1").await.is_none());
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let collection = Collection::new();
        collection.add(stream("a", "one")).await.unwrap();
        let mut paused = stream("b", "two");
        paused.disabled = true;
        collection.add(paused).await.unwrap();

        let enabled = collection.list_filtered(|s: &Stream| !s.disabled).await;
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].id, "a");
        assert_eq!(collection.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_modify_is_atomic_copy_out() {
        let collection = Collection::new();
        collection.add(stream("s1", "one")).await.unwrap();

        let updated = collection
            .modify("s1", |s| s.disabled = true)
            .await
            .unwrap();
        assert!(updated.disabled);
        assert!(collection.get("s1").await.unwrap().disabled);
        assert!(collection.modify("ghost", |_| {}).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_adds_lose_nothing() {
        use std::sync::Arc;

        let collection = Arc::new(Collection::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let collection = Arc::clone(&collection);
            handles.push(tokio::spawn(async move {
                collection
                    .add(stream(&format!("s{i}"), &format!("stream {i}")))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(collection.len().await, 64);
    }
}

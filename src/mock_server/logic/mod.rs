//! Business-rule layer of the mock server.
//!
//! Sits between the raw [`ObjectStore`](super::store::ObjectStore) and
//! the HTTP handlers. Each resource kind has its own module with an
//! `impl Logic` block; the store itself stays rule-free. All operations
//! validate before they mutate, so a failed call leaves the store
//! untouched.

mod index_sets;
mod inputs;
mod roles;
mod streams;
mod users;

use std::sync::Arc;

use uuid::Uuid;

use super::error::LogicResult;
use super::store::ObjectStore;

/// Business rules over an injected [`ObjectStore`].
///
/// Stateless apart from the store handle; safe to share and to call
/// concurrently.
#[derive(Debug, Clone)]
pub struct Logic {
    store: Arc<ObjectStore>,
}

impl Logic {
    pub fn new(store: Arc<ObjectStore>) -> Self {
        Self { store }
    }

    /// The underlying store. Exposed so tests can seed or inspect
    /// records directly.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// Capability check invoked by every handler before the logic call.
    ///
    /// Extension point for authorization rules; the mock permits
    /// everything.
    pub fn authorize(&self, _capability: &str) -> LogicResult<()> {
        Ok(())
    }

    /// Generate an identifier for a record created without one.
    pub(crate) fn new_object_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
pub(crate) fn test_logic() -> Logic {
    Logic::new(Arc::new(ObjectStore::new()))
}

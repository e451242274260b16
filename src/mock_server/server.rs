//! Mock Graylog API server.
//!
//! Provides an axum-based HTTP server that simulates the Graylog API.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::logic::Logic;
use super::store::ObjectStore;

/// A mock Graylog API server for testing.
///
/// The server runs in the background and can be used to test the
/// Graylog client against a realistic, stateful API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// The logic layer, sharing the store with the running server.
    logic: Arc<Logic>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns
    /// immediately. Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::start_on("127.0.0.1:0").await
    }

    /// Start a mock server with default fixtures on an explicit address.
    pub async fn start_on(addr: &str) -> Self {
        Self::bind(addr, Self::default_store().await).await
    }

    /// Start a mock server with an empty store.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_store(ObjectStore::new()).await
    }

    /// Start a mock server with a custom store, on a random port.
    pub async fn with_store(store: ObjectStore) -> Self {
        Self::bind("127.0.0.1:0", store).await
    }

    /// Start a mock server bound to an explicit address.
    pub async fn bind(addr: &str, store: ObjectStore) -> Self {
        let logic = Arc::new(Logic::new(Arc::new(store)));
        let app = Self::create_router(logic.clone());

        let listener = TcpListener::bind(addr)
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            logic,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `GraylogClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the server's logic layer.
    ///
    /// This allows seeding or inspecting mock data during a test,
    /// subject to the same rules requests go through.
    pub fn logic(&self) -> Arc<Logic> {
        self.logic.clone()
    }

    /// Get the server's backing store for direct seeding/inspection.
    pub fn store(&self) -> &ObjectStore {
        self.logic.store()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default store with common test fixtures.
    async fn default_store() -> ObjectStore {
        Self::store_from_scenario(Fixtures::default_scenario()).await
    }

    /// Create a store from a scenario.
    ///
    /// Seeds records directly, bypassing logic-layer rules, so scenarios
    /// may contain records (e.g. a default index set) that the public
    /// API only produces through stateful operations.
    async fn store_from_scenario(scenario: DefaultScenario) -> ObjectStore {
        let store = ObjectStore::new();

        for index_set in scenario.index_sets {
            store
                .index_sets
                .add(index_set)
                .await
                .expect("fixture index set has an id");
        }
        for stream in scenario.streams {
            store
                .streams
                .add(stream)
                .await
                .expect("fixture stream has an id");
        }
        for input in scenario.inputs {
            store
                .inputs
                .add(input)
                .await
                .expect("fixture input has an id");
        }
        for role in scenario.roles {
            store
                .roles
                .add(role)
                .await
                .expect("fixture role has a name");
        }
        for user in scenario.users {
            store
                .users
                .add(user)
                .await
                .expect("fixture user has a username");
        }

        store
    }

    /// Create the axum router with all routes.
    ///
    /// The full route table is built here, once, at startup.
    fn create_router(logic: Arc<Logic>) -> Router {
        Router::new()
            // Stream routes
            .route(
                "/streams",
                get(handlers::list_streams).post(handlers::create_stream),
            )
            .route("/streams/enabled", get(handlers::list_enabled_streams))
            .route(
                "/streams/:id",
                get(handlers::get_stream)
                    .put(handlers::update_stream)
                    .delete(handlers::delete_stream),
            )
            .route("/streams/:id/pause", post(handlers::pause_stream))
            .route("/streams/:id/resume", post(handlers::resume_stream))
            // Index set routes
            .route(
                "/system/indices/index_sets",
                get(handlers::list_index_sets).post(handlers::create_index_set),
            )
            .route(
                "/system/indices/index_sets/stats",
                get(handlers::get_total_index_set_stats),
            )
            .route(
                "/system/indices/index_sets/:id",
                get(handlers::get_index_set)
                    .put(handlers::update_index_set)
                    .delete(handlers::delete_index_set),
            )
            .route(
                "/system/indices/index_sets/:id/default",
                put(handlers::set_default_index_set),
            )
            .route(
                "/system/indices/index_sets/:id/stats",
                get(handlers::get_index_set_stats),
            )
            // Input routes
            .route(
                "/system/inputs",
                get(handlers::list_inputs).post(handlers::create_input),
            )
            .route(
                "/system/inputs/:id",
                get(handlers::get_input)
                    .put(handlers::update_input)
                    .delete(handlers::delete_input),
            )
            // User routes
            .route(
                "/users",
                get(handlers::list_users).post(handlers::create_user),
            )
            .route(
                "/users/:username",
                get(handlers::get_user)
                    .put(handlers::update_user)
                    .delete(handlers::delete_user),
            )
            // Role routes
            .route(
                "/roles",
                get(handlers::list_roles).post(handlers::create_role),
            )
            .route(
                "/roles/:name",
                get(handlers::get_role)
                    .put(handlers::update_role)
                    .delete(handlers::delete_role),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(logic)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

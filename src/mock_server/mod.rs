//! Mock Graylog API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Graylog API for integration and end-to-end testing. The server
//! maintains state across requests, enforcing the same validation
//! rules, cross-kind references and stateful side effects as the real
//! service, so workflows (create an index set, point a stream at it,
//! pause the stream, ...) behave realistically.
//!
//! Layering, top down: handlers decode requests and call the
//! [`logic::Logic`] layer, which enforces business rules over the
//! rule-free [`store::ObjectStore`]. Errors flow back as
//! [`error::LogicError`] values with a fixed status mapping.
//!
//! # Example
//!
//! ```ignore
//! use graylogapi::mock_server::MockServer;
//! use graylogapi::{GraylogClient, Stream, List};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GraylogClient::new("admin", "admin", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let streams = Stream::list(&client).await.unwrap();
//!     assert_eq!(streams[0].title, "All messages");
//!
//!     server.shutdown().await;
//! }
//! ```

mod error;
mod fixtures;
mod handlers;
mod logic;
mod server;
mod store;

pub use error::{LogicError, LogicResult};
pub use fixtures::Fixtures;
pub use logic::Logic;
pub use server::MockServer;
pub use store::{Collection, EmptyKey, Keyed, ObjectStore};

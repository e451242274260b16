//! Graylog API client library.
//!
//! A Rust library for interacting with the Graylog REST API using a
//! trait-based architecture where each operation (Get, List, Create,
//! Update, Delete) is defined as a trait that entity types implement.
//! The crate also ships an in-process mock server (feature
//! `mock-server`, enabled by default) that simulates the real service
//! closely enough to run full client workflows against it.
//!
//! # Quick Start
//!
//! ```no_run
//! use graylogapi::{GraylogClient, Stream, IndexSet, Get, List};
//!
//! #[tokio::main]
//! async fn main() -> graylogapi::Result<()> {
//!     // Create client from environment variables
//!     let client = GraylogClient::from_env()?;
//!
//!     // List all streams
//!     let streams = Stream::list(&client).await?;
//!     println!("Found {} streams", streams.len());
//!
//!     // Get one stream by id
//!     let stream = Stream::get(&client, streams[0].id.clone()).await?;
//!     println!("Stream: {}", stream.title);
//!
//!     // Aggregate index statistics
//!     let stats = IndexSet::total_stats(&client).await?;
//!     println!("{} documents in {} indices", stats.documents, stats.indices);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around five core traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch all entities of a kind
//! - [`Create`] - Register a new entity
//! - [`Update`] - Replace an existing entity
//! - [`Delete`] - Remove an entity
//!
//! Each entity type (like [`Stream`] or [`IndexSet`]) implements the
//! traits that are supported by its API endpoints; operations without a
//! CRUD shape (pausing a stream, electing the default index set) are
//! associated functions on the entity type.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `GRAYLOG_WEB_ENDPOINT_URI` (required) - Base URL, e.g. `http://localhost:9000/api`
//! - `GRAYLOG_AUTH_NAME` (required) - User name or access token
//! - `GRAYLOG_AUTH_PASSWORD` (required) - Password, or `"token"` when
//!   authenticating with an access token

mod client;
mod error;
mod models;
mod traits;

#[cfg(feature = "mock-server")]
pub mod mock_server;

// Re-export core types
pub use client::GraylogClient;
pub use error::{GraylogError, Result};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{
    // Index set types
    IndexSet,
    IndexSetStats,
    RetentionStrategy,
    RotationStrategy,
    // Input types
    Input,
    InputAttributes,
    // Role types
    Role,
    // Stream types
    Stream,
    StreamRule,
    // User types
    Preferences,
    Startpage,
    User,
};

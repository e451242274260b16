//! E2E tests using the mock Graylog server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "mock-server")]

use graylogapi::mock_server::{Fixtures, MockServer, ObjectStore};
use graylogapi::{
    Create, Delete, Get, GraylogClient, IndexSet, IndexSetStats, Input, InputAttributes, List,
    Role, Stream, Update, User,
};

fn index_set_input(title: &str, prefix: &str) -> IndexSet {
    // Empty id: the server assigns one on create.
    Fixtures::index_set("", title, prefix)
}

fn stream_input(title: &str, index_set_id: &str) -> Stream {
    Stream {
        title: title.to_string(),
        index_set_id: index_set_id.to_string(),
        ..Default::default()
    }
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Stream Workflow Tests
// =============================================================================

/// The full lifecycle: empty store, dangling reference rejected, index
/// set created, stream created against it, paused, resumed, deleted.
#[tokio::test]
async fn test_stream_lifecycle_workflow() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    // Empty store: no enabled streams.
    let enabled = Stream::enabled(&client).await.unwrap();
    assert!(enabled.is_empty());

    // Creating a stream against a missing index set is rejected.
    let err = Stream::create(&client, &stream_input("orphan", "missing"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));

    // Create the index set, then the stream.
    let index_set = IndexSet::create(&client, &index_set_input("Main", "main"))
        .await
        .unwrap();
    assert!(!index_set.id.is_empty());

    let stream = Stream::create(&client, &stream_input("App logs", &index_set.id))
        .await
        .unwrap();
    assert!(!stream.id.is_empty());
    assert!(stream.created_at.is_some());

    let enabled = Stream::enabled(&client).await.unwrap();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].id, stream.id);

    // Pause: gone from the enabled listing, still in the full one.
    Stream::pause(&client, &stream.id).await.unwrap();
    assert!(Stream::enabled(&client).await.unwrap().is_empty());
    assert_eq!(Stream::list(&client).await.unwrap().len(), 1);
    assert!(!Stream::get(&client, stream.id.clone()).await.unwrap().is_enabled());

    // Resume restores it.
    Stream::resume(&client, &stream.id).await.unwrap();
    assert_eq!(Stream::enabled(&client).await.unwrap().len(), 1);

    // Delete, then get fails with 404.
    Stream::delete(&client, stream.id.clone()).await.unwrap();
    let err = Stream::get(&client, stream.id.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_stream_workflow() {
    let server = MockServer::start().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let streams = Stream::list(&client).await.unwrap();
    let original = &streams[0];

    let mut changed = original.clone();
    changed.description = Some("changed!".to_string());
    changed.id = "some-other-id".to_string();

    let updated = Stream::update(&client, original.id.clone(), &changed)
        .await
        .unwrap();
    // The path id wins; the body cannot move the record.
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.description.as_deref(), Some("changed!"));

    let fetched = Stream::get(&client, original.id.clone()).await.unwrap();
    assert_eq!(fetched.description.as_deref(), Some("changed!"));

    // Unknown id fails with 404, empty id client-side.
    let err = Stream::update(&client, "h".to_string(), &changed)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(Stream::update(&client, String::new(), &changed).await.is_err());

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_cannot_toggle_disabled() {
    let server = MockServer::start().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let streams = Stream::list(&client).await.unwrap();
    let stream = &streams[0];
    Stream::pause(&client, &stream.id).await.unwrap();

    let mut resumed_by_update = stream.clone();
    resumed_by_update.disabled = false;
    let updated = Stream::update(&client, stream.id.clone(), &resumed_by_update)
        .await
        .unwrap();
    assert!(updated.disabled, "general update must not resume a stream");

    server.shutdown().await;
}

// =============================================================================
// Index Set Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_default_index_set_election() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let first = IndexSet::create(&client, &index_set_input("First", "one"))
        .await
        .unwrap();
    let second = IndexSet::create(&client, &index_set_input("Second", "two"))
        .await
        .unwrap();
    // Creation never elects a default.
    assert!(!first.default && !second.default);

    let elected = IndexSet::set_default(&client, &first.id).await.unwrap();
    assert!(elected.default);

    // Electing the second demotes the first, atomically.
    IndexSet::set_default(&client, &second.id).await.unwrap();
    let all = IndexSet::list(&client).await.unwrap();
    let defaults: Vec<_> = all.iter().filter(|is| is.default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);

    // Unknown id: 404, existing default untouched.
    let err = IndexSet::set_default(&client, "ghost").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    let fetched = IndexSet::get(&client, second.id.clone()).await.unwrap();
    assert!(fetched.default);

    server.shutdown().await;
}

#[tokio::test]
async fn test_index_set_delete_guards() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let used = IndexSet::create(&client, &index_set_input("Used", "used"))
        .await
        .unwrap();
    let stream = Stream::create(&client, &stream_input("writer", &used.id))
        .await
        .unwrap();

    // Still referenced by a stream: 409.
    let err = IndexSet::delete(&client, used.id.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));

    // The default index set cannot be deleted either.
    IndexSet::set_default(&client, &used.id).await.unwrap();
    Stream::delete(&client, stream.id.clone()).await.unwrap();
    let err = IndexSet::delete(&client, used.id.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));

    // Demoted and unreferenced: delete goes through.
    let other = IndexSet::create(&client, &index_set_input("Other", "other"))
        .await
        .unwrap();
    IndexSet::set_default(&client, &other.id).await.unwrap();
    IndexSet::delete(&client, used.id.clone()).await.unwrap();
    let err = IndexSet::get(&client, used.id.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_duplicate_index_prefix_conflicts() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    IndexSet::create(&client, &index_set_input("First", "shared"))
        .await
        .unwrap();
    let err = IndexSet::create(&client, &index_set_input("Second", "shared"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(409));

    server.shutdown().await;
}

#[tokio::test]
async fn test_index_set_stats_views() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    // Empty store: zeroed aggregate, not an error.
    let total = IndexSet::total_stats(&client).await.unwrap();
    assert_eq!(total, IndexSetStats::default());

    let created = IndexSet::create(&client, &index_set_input("Stats", "stats"))
        .await
        .unwrap();
    let stats = IndexSet::stats(&client, &created.id).await.unwrap();
    assert_eq!(stats, IndexSetStats::default());

    let err = IndexSet::stats(&client, "ghost").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_index_set_list_windowing() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    for (title, prefix) in [("A", "a"), ("B", "b"), ("C", "c")] {
        IndexSet::create(&client, &index_set_input(title, prefix))
            .await
            .unwrap();
    }

    assert_eq!(IndexSet::list(&client).await.unwrap().len(), 3);
    assert_eq!(IndexSet::list_range(&client, 0, 2).await.unwrap().len(), 2);
    assert_eq!(IndexSet::list_range(&client, 2, 0).await.unwrap().len(), 1);

    server.shutdown().await;
}

// =============================================================================
// Input Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_input_crud_workflow() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let input = Input {
        title: "Syslog UDP".to_string(),
        input_type: "org.graylog2.inputs.syslog.udp.SyslogUDPInput".to_string(),
        global: true,
        attributes: Some(InputAttributes {
            bind_address: "0.0.0.0".to_string(),
            port: 1514,
            recv_buffer_size: 262_144,
        }),
        ..Default::default()
    };

    let created = Input::create(&client, &input).await.unwrap();
    assert!(!created.id.is_empty());

    let mut changed = created.clone();
    changed.title = "Syslog UDP (edge)".to_string();
    let updated = Input::update(&client, created.id.clone(), &changed)
        .await
        .unwrap();
    assert_eq!(updated.title, "Syslog UDP (edge)");
    assert_eq!(updated.id, created.id);

    assert_eq!(Input::list(&client).await.unwrap().len(), 1);

    Input::delete(&client, created.id.clone()).await.unwrap();
    let err = Input::get(&client, created.id.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    // Missing attributes: 400.
    let mut invalid = input.clone();
    invalid.attributes = None;
    let err = Input::create(&client, &invalid).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));

    server.shutdown().await;
}

// =============================================================================
// User & Role Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_user_role_workflow() {
    let server = MockServer::start_empty().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    // A user with an unknown role is rejected.
    let mut alice = User {
        username: "alice".to_string(),
        password: "hunter2".to_string(),
        roles: vec!["Operators".to_string()],
        ..Default::default()
    };
    let err = User::create(&client, &alice).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));

    // Create the role, then the user.
    let role = Role {
        name: "Operators".to_string(),
        permissions: vec!["streams:read".to_string()],
        ..Default::default()
    };
    Role::create(&client, &role).await.unwrap();
    User::create(&client, &alice).await.unwrap();

    // Responses never carry the password.
    let fetched = User::get(&client, "alice".to_string()).await.unwrap();
    assert!(fetched.password.is_empty());
    assert_eq!(fetched.roles, vec!["Operators".to_string()]);

    // Duplicates conflict.
    let err = User::create(&client, &alice).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    let err = Role::create(&client, &role).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));

    // Update goes through; username in the path wins.
    alice.full_name = Some("Alice Example".to_string());
    User::update(&client, "alice".to_string(), &alice).await.unwrap();
    let fetched = User::get(&client, "alice".to_string()).await.unwrap();
    assert_eq!(fetched.full_name.as_deref(), Some("Alice Example"));

    User::delete(&client, "alice".to_string()).await.unwrap();
    Role::delete(&client, "Operators".to_string()).await.unwrap();
    assert!(User::list(&client).await.unwrap().is_empty());
    assert!(Role::list(&client).await.unwrap().is_empty());

    server.shutdown().await;
}

// =============================================================================
// Seeding & Fixtures
// =============================================================================

#[tokio::test]
async fn test_custom_store_seeding() {
    let store = ObjectStore::new();
    store
        .index_sets
        .add(Fixtures::default_index_set("is1"))
        .await
        .unwrap();
    store
        .streams
        .add(Fixtures::stream("s1", "Seeded stream", "is1"))
        .await
        .unwrap();

    let server = MockServer::with_store(store).await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    let stream = Stream::get(&client, "s1".to_string()).await.unwrap();
    assert_eq!(stream.title, "Seeded stream");

    // The seeded default index set survives: exactly one default.
    let all = IndexSet::list(&client).await.unwrap();
    assert_eq!(all.iter().filter(|is| is.default).count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_default_fixtures_cover_all_kinds() {
    let server = MockServer::start().await;
    let client = GraylogClient::new("admin", "admin", server.url()).unwrap();

    assert_eq!(Stream::list(&client).await.unwrap().len(), 1);
    assert_eq!(IndexSet::list(&client).await.unwrap().len(), 1);
    assert_eq!(Input::list(&client).await.unwrap().len(), 1);
    assert_eq!(User::list(&client).await.unwrap().len(), 1);
    assert_eq!(Role::list(&client).await.unwrap().len(), 1);

    server.shutdown().await;
}

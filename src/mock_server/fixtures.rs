//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    IndexSet, Input, InputAttributes, RetentionStrategy, Role, RotationStrategy, Stream, User,
};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a minimal enabled stream writing to the given index set.
    pub fn stream(id: &str, title: &str, index_set_id: &str) -> Stream {
        Stream {
            id: id.to_string(),
            title: title.to_string(),
            index_set_id: index_set_id.to_string(),
            matching_type: Some("AND".to_string()),
            creator_user_id: Some("admin".to_string()),
            ..Default::default()
        }
    }

    /// Create a writable index set with the usual rotation/retention
    /// strategies filled in.
    pub fn index_set(id: &str, title: &str, prefix: &str) -> IndexSet {
        IndexSet {
            id: id.to_string(),
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
            index_analyzer: Some("standard".to_string()),
            index_optimization_max_num_segments: 1,
            writable: true,
            ..Default::default()
        }
    }

    /// The default index set: like [`index_set`](Self::index_set) but
    /// flagged as the default target.
    pub fn default_index_set(id: &str) -> IndexSet {
        let mut index_set = Self::index_set(id, "Default index set", "graylog");
        index_set.default = true;
        index_set
    }

    /// Create a syslog UDP input.
    pub fn syslog_input(id: &str, title: &str, port: u16) -> Input {
        Input {
            id: id.to_string(),
            title: title.to_string(),
            input_type: "org.graylog2.inputs.syslog.udp.SyslogUDPInput".to_string(),
            global: true,
            creator_user_id: Some("admin".to_string()),
            attributes: Some(InputAttributes {
                bind_address: "0.0.0.0".to_string(),
                port,
                recv_buffer_size: 262_144,
            }),
            ..Default::default()
        }
    }

    /// Create a role with the given permissions.
    pub fn role(name: &str, permissions: &[&str]) -> Role {
        Role {
            name: name.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Create a user belonging to the given roles.
    pub fn user(username: &str, roles: &[&str]) -> User {
        User {
            username: username.to_string(),
            email: Some(format!("{username}@example.com")),
            full_name: Some(username.to_string()),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            timezone: Some("UTC".to_string()),
            session_timeout_ms: 28_800_000,
            ..Default::default()
        }
    }

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related records.
pub struct DefaultScenario {
    pub index_sets: Vec<IndexSet>,
    pub streams: Vec<Stream>,
    pub inputs: Vec<Input>,
    pub roles: Vec<Role>,
    pub users: Vec<User>,
}

impl DefaultScenario {
    fn new() -> Self {
        let index_set_id = "5b3108e7c9e77c000001f333";

        let index_sets = vec![Fixtures::default_index_set(index_set_id)];

        let streams = vec![Fixtures::stream(
            "5b3108eac9e77c000001f334",
            "All messages",
            index_set_id,
        )];

        let inputs = vec![Fixtures::syslog_input(
            "5b3108f7c9e77c000001f335",
            "Syslog UDP",
            514,
        )];

        let roles = vec![Fixtures::role("Admin", &["*"])];

        let users = vec![Fixtures::user("admin", &["Admin"])];

        Self {
            index_sets,
            streams,
            inputs,
            roles,
            users,
        }
    }
}

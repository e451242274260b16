//! Input business rules.

use chrono::Utc;

use super::Logic;
use crate::mock_server::error::{LogicError, LogicResult};
use crate::Input;

impl Logic {
    /// Create an input.
    pub async fn create_input(&self, mut input: Input) -> LogicResult<Input> {
        Self::validate_input(&input)?;
        if input.id.is_empty() {
            input.id = Self::new_object_id();
        } else if self.store().inputs.has(&input.id).await {
            return Err(LogicError::Conflict(format!(
                "input <{}> already exists",
                input.id
            )));
        }
        if input.created_at.is_none() {
            input.created_at = Some(Utc::now());
        }
        self.store().inputs.add(input.clone()).await?;
        Ok(input)
    }

    /// A copy of the input with the given id.
    pub async fn input(&self, id: &str) -> LogicResult<Input> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("input id is empty".to_string()));
        }
        self.store()
            .inputs
            .get(id)
            .await
            .ok_or_else(|| LogicError::not_found("input", id))
    }

    /// Replace the input with the given id. The stored id and creation
    /// timestamp survive the replacement.
    pub async fn update_input(&self, id: &str, mut input: Input) -> LogicResult<Input> {
        let current = self.input(id).await?;
        Self::validate_input(&input)?;
        input.id = current.id;
        input.created_at = current.created_at;
        self.store().inputs.update(input.clone()).await?;
        Ok(input)
    }

    /// Delete the input with the given id.
    pub async fn delete_input(&self, id: &str) -> LogicResult<()> {
        if id.is_empty() {
            return Err(LogicError::InvalidArgument("input id is empty".to_string()));
        }
        self.store()
            .inputs
            .delete(id)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("input", id))
    }

    /// All inputs, with a total.
    pub async fn inputs(&self) -> LogicResult<(Vec<Input>, u64)> {
        let inputs = self.store().inputs.list().await;
        let total = inputs.len() as u64;
        Ok((inputs, total))
    }

    fn validate_input(input: &Input) -> LogicResult<()> {
        if input.title.is_empty() {
            return Err(LogicError::Validation("title is required".to_string()));
        }
        if input.input_type.is_empty() {
            return Err(LogicError::Validation("type is required".to_string()));
        }
        let attributes = input
            .attributes
            .as_ref()
            .ok_or_else(|| LogicError::Validation("attributes are required".to_string()))?;
        if attributes.bind_address.is_empty() {
            return Err(LogicError::Validation("bind_address is required".to_string()));
        }
        if attributes.port == 0 {
            return Err(LogicError::Validation("port is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_logic;
    use super::*;
    use crate::InputAttributes;

    fn input(title: &str) -> Input {
        Input {
            title: title.to_string(),
            input_type: "org.graylog2.inputs.syslog.udp.SyslogUDPInput".to_string(),
            attributes: Some(InputAttributes {
                bind_address: "0.0.0.0".to_string(),
                port: 514,
                recv_buffer_size: 262_144,
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_get_delete_roundtrip() {
        let logic = test_logic();
        let created = logic.create_input(input("Syslog UDP")).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = logic.input(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Syslog UDP");

        logic.delete_input(&created.id).await.unwrap();
        assert!(matches!(
            logic.input(&created.id).await.unwrap_err(),
            LogicError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_validates_attributes() {
        let logic = test_logic();

        let mut missing = input("No attributes");
        missing.attributes = None;
        assert!(matches!(
            logic.create_input(missing).await.unwrap_err(),
            LogicError::Validation(_)
        ));

        let mut unbound = input("No port");
        unbound.attributes.as_mut().unwrap().port = 0;
        assert!(matches!(
            logic.create_input(unbound).await.unwrap_err(),
            LogicError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let logic = test_logic();
        let created = logic.create_input(input("original")).await.unwrap();

        let mut replacement = input("renamed");
        replacement.id = "other".to_string();
        let updated = logic.update_input(&created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "renamed");
    }
}

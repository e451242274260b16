//! Role business rules.
//!
//! Roles are keyed by name.

use super::Logic;
use crate::mock_server::error::{LogicError, LogicResult};
use crate::Role;

impl Logic {
    /// Create a role. Names are unique; at least one permission is
    /// required.
    pub async fn create_role(&self, role: Role) -> LogicResult<Role> {
        Self::validate_role(&role)?;
        if self.store().roles.has(&role.name).await {
            return Err(LogicError::Conflict(format!(
                "role <{}> already exists",
                role.name
            )));
        }
        self.store().roles.add(role.clone()).await?;
        Ok(role)
    }

    /// A copy of the role with the given name.
    pub async fn role(&self, name: &str) -> LogicResult<Role> {
        if name.is_empty() {
            return Err(LogicError::InvalidArgument("role name is empty".to_string()));
        }
        self.store()
            .roles
            .get(name)
            .await
            .ok_or_else(|| LogicError::not_found("role", name))
    }

    /// Replace the role with the given name. The name is immutable.
    pub async fn update_role(&self, name: &str, mut role: Role) -> LogicResult<Role> {
        let current = self.role(name).await?;
        Self::validate_role(&role)?;
        role.name = current.name;
        self.store().roles.update(role.clone()).await?;
        Ok(role)
    }

    /// Delete the role with the given name.
    pub async fn delete_role(&self, name: &str) -> LogicResult<()> {
        if name.is_empty() {
            return Err(LogicError::InvalidArgument("role name is empty".to_string()));
        }
        self.store()
            .roles
            .delete(name)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("role", name))
    }

    /// All roles, with a total.
    pub async fn roles(&self) -> LogicResult<(Vec<Role>, u64)> {
        let roles = self.store().roles.list().await;
        let total = roles.len() as u64;
        Ok((roles, total))
    }

    fn validate_role(role: &Role) -> LogicResult<()> {
        if role.name.is_empty() {
            return Err(LogicError::Validation("name is required".to_string()));
        }
        if role.permissions.is_empty() {
            return Err(LogicError::Validation(
                "at least one permission is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_logic;
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            name: name.to_string(),
            permissions: vec!["streams:read".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_requires_permissions() {
        let logic = test_logic();
        let mut empty = role("Readers");
        empty.permissions.clear();
        assert!(matches!(
            logic.create_role(empty).await.unwrap_err(),
            LogicError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let logic = test_logic();
        logic.create_role(role("Readers")).await.unwrap();
        assert!(matches!(
            logic.create_role(role("Readers")).await.unwrap_err(),
            LogicError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_name() {
        let logic = test_logic();
        logic.create_role(role("Readers")).await.unwrap();

        let mut renamed = role("Writers");
        renamed.description = Some("updated".to_string());
        let updated = logic.update_role("Readers", renamed).await.unwrap();
        assert_eq!(updated.name, "Readers");
        assert_eq!(updated.description.as_deref(), Some("updated"));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let logic = test_logic();
        logic.create_role(role("Readers")).await.unwrap();
        logic.delete_role("Readers").await.unwrap();
        assert!(matches!(
            logic.role("Readers").await.unwrap_err(),
            LogicError::NotFound { .. }
        ));
    }
}

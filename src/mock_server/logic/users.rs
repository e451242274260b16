//! User business rules.
//!
//! Users are keyed by username. Responses never carry the stored
//! password.

use super::Logic;
use crate::mock_server::error::{LogicError, LogicResult};
use crate::User;

impl Logic {
    /// Create a user account.
    ///
    /// Usernames are unique; every listed role must exist.
    pub async fn create_user(&self, user: User) -> LogicResult<()> {
        if user.username.is_empty() {
            return Err(LogicError::Validation("username is required".to_string()));
        }
        self.validate_user_roles(&user).await?;
        if self.store().users.has(&user.username).await {
            return Err(LogicError::Conflict(format!(
                "user <{}> already exists",
                user.username
            )));
        }
        self.store().users.add(user).await?;
        Ok(())
    }

    /// A copy of the user, password scrubbed.
    pub async fn user(&self, username: &str) -> LogicResult<User> {
        if username.is_empty() {
            return Err(LogicError::InvalidArgument("username is empty".to_string()));
        }
        self.store()
            .users
            .get(username)
            .await
            .map(Self::scrub_password)
            .ok_or_else(|| LogicError::not_found("user", username))
    }

    /// Replace the user with the given username.
    ///
    /// The username itself is immutable; an empty password in the input
    /// keeps the stored one.
    pub async fn update_user(&self, username: &str, mut user: User) -> LogicResult<()> {
        if username.is_empty() {
            return Err(LogicError::InvalidArgument("username is empty".to_string()));
        }
        let current = self
            .store()
            .users
            .get(username)
            .await
            .ok_or_else(|| LogicError::not_found("user", username))?;
        self.validate_user_roles(&user).await?;
        user.username = current.username;
        if user.password.is_empty() {
            user.password = current.password;
        }
        self.store().users.update(user).await?;
        Ok(())
    }

    /// Delete the user with the given username.
    pub async fn delete_user(&self, username: &str) -> LogicResult<()> {
        if username.is_empty() {
            return Err(LogicError::InvalidArgument("username is empty".to_string()));
        }
        self.store()
            .users
            .delete(username)
            .await
            .map(|_| ())
            .ok_or_else(|| LogicError::not_found("user", username))
    }

    /// All users, passwords scrubbed.
    pub async fn users(&self) -> LogicResult<Vec<User>> {
        let users = self.store().users.list().await;
        Ok(users.into_iter().map(Self::scrub_password).collect())
    }

    async fn validate_user_roles(&self, user: &User) -> LogicResult<()> {
        for role in &user.roles {
            if !self.store().roles.has(role).await {
                return Err(LogicError::Reference(format!(
                    "role <{}> is not found",
                    role
                )));
            }
        }
        Ok(())
    }

    fn scrub_password(mut user: User) -> User {
        user.password = String::new();
        user
    }
}

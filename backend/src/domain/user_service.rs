use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::users::{LoginCommand, RegisterUserCommand};
use crate::domain::error::ServiceError;
use crate::domain::models::{NewUser, Role, User};
use crate::storage::UserStorage;

/// Service for registering users and resolving who is acting
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStorage>) -> Self {
        Self { users }
    }

    /// Register a new user
    pub fn register(&self, command: RegisterUserCommand) -> Result<User, ServiceError> {
        let username = command.username.trim().to_string();
        info!("Registering user: {}", username);

        if username.is_empty() {
            return Err(ServiceError::validation("Username cannot be empty"));
        }
        if username.contains(['\n', '\r']) {
            return Err(ServiceError::validation("Username cannot contain line breaks"));
        }
        if command.password.is_empty() {
            return Err(ServiceError::validation("Password cannot be empty"));
        }

        let registered = self.users.register_user(NewUser {
            username: username.clone(),
            password: command.password,
            role: command.role,
        })?;

        registered.ok_or_else(|| ServiceError::Conflict(format!("Username '{}' is already taken", username)))
    }

    /// Check credentials. Returns `None` when they do not match a user.
    pub fn login(&self, command: LoginCommand) -> Option<User> {
        let user = self
            .users
            .find_user_by_credentials(command.username.trim(), &command.password);

        match &user {
            Some(user) => info!("User {} logged in", user.id),
            None => warn!("Failed login for '{}'", command.username.trim()),
        }
        user
    }

    pub fn get_user(&self, user_id: i64) -> Option<User> {
        self.users.find_user(user_id)
    }

    /// Role of the named user, if the user exists
    pub fn user_role(&self, username: &str) -> Option<Role> {
        self.users.find_user_by_name(username.trim()).map(|user| user.role)
    }

    /// Resolve `actor_id` to an existing admin. An unreadable user table is
    /// a storage error rather than an unknown user.
    pub fn require_admin(&self, actor_id: i64) -> Result<User, ServiceError> {
        match self.users.try_find_user(actor_id)? {
            Some(user) if user.is_admin() => Ok(user),
            Some(user) => {
                warn!("User {} attempted an admin operation", user.id);
                Err(ServiceError::Forbidden(format!("User {} is not an admin", user.id)))
            }
            None => Err(ServiceError::Forbidden(format!("Unknown user {}", actor_id))),
        }
    }
}

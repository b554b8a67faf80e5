use tracing::{info, warn};

use super::connection::CsvConnection;
use super::table::{next_id, Table};
use crate::domain::models::{NewUser, User};
use crate::storage::{StoreError, UserStorage};

/// CSV-based user repository backed by `users.csv`
#[derive(Clone)]
pub struct UserRepository {
    connection: CsvConnection,
}

impl UserRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl UserStorage for UserRepository {
    fn load_users(&self) -> Vec<User> {
        let _guard = self.connection.lock(Table::Users);
        self.connection.read()
    }

    fn try_load_users(&self) -> Result<Vec<User>, StoreError> {
        let _guard = self.connection.lock(Table::Users);
        self.connection.try_read()
    }

    fn register_user(&self, user: NewUser) -> Result<Option<User>, StoreError> {
        let _guard = self.connection.lock(Table::Users);

        let mut users: Vec<User> = self.connection.read_for_update()?;
        if users.iter().any(|existing| existing.username == user.username) {
            warn!("Username '{}' is already registered", user.username);
            return Ok(None);
        }

        let registered = User {
            id: next_id(&users),
            username: user.username,
            password: user.password,
            role: user.role,
        };
        users.push(registered.clone());
        self.connection.write(&users)?;

        info!("Registered user {} as {}", registered.id, registered.role);
        Ok(Some(registered))
    }
}

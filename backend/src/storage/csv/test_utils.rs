//! Test utilities for the CSV store.
//!
//! `TestEnvironment` roots a connection in a temporary directory that is
//! removed when the environment is dropped, even if the test panics.

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::course_repository::CourseRepository;
use super::enrollment_repository::EnrollmentRepository;
use super::user_repository::UserRepository;
use crate::storage::StoreError;

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self, StoreError> {
        let temp_dir = TempDir::new().map_err(|e| StoreError::io(std::env::temp_dir(), e))?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn course_repository(&self) -> Arc<CourseRepository> {
        Arc::new(CourseRepository::new(self.connection.clone()))
    }

    pub fn user_repository(&self) -> Arc<UserRepository> {
        Arc::new(UserRepository::new(self.connection.clone()))
    }

    pub fn enrollment_repository(&self) -> Arc<EnrollmentRepository> {
        Arc::new(EnrollmentRepository::new(self.connection.clone()))
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("ELEARN_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

//! # Storage Traits
//!
//! Storage abstractions the domain layer depends on. The CSV repositories
//! implement them; tests may swap in other implementations.
//!
//! `load_*` methods never fail: a missing or unreadable table is an empty
//! table. Writes and the `try_*` methods surface the underlying
//! `StoreError`, and a write never rewrites a table it could not fully read.

use std::collections::HashMap;

use crate::domain::models::{Course, Enrollment, NewCourse, NewUser, User};
use crate::storage::StoreError;

pub trait CourseStorage: Send + Sync {
    /// All courses in table order
    fn load_courses(&self) -> Vec<Course>;

    /// Append a course with the next free id and return that id.
    /// Fields are stored as given.
    fn add_course(&self, course: NewCourse) -> Result<i64, StoreError>;

    /// Remove every row with `course_id`.
    /// Returns the number of rows removed.
    fn delete_course(&self, course_id: i64) -> Result<usize, StoreError>;
}

pub trait UserStorage: Send + Sync {
    fn load_users(&self) -> Vec<User>;

    fn try_load_users(&self) -> Result<Vec<User>, StoreError>;

    /// Append a user unless the username is taken.
    /// Returns `None` when a user with the same name already exists.
    fn register_user(&self, user: NewUser) -> Result<Option<User>, StoreError>;

    fn find_user(&self, user_id: i64) -> Option<User> {
        self.load_users().into_iter().find(|user| user.id == user_id)
    }

    /// Like [`find_user`](Self::find_user), but an unreadable table is an error
    fn try_find_user(&self, user_id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.try_load_users()?.into_iter().find(|user| user.id == user_id))
    }

    fn find_user_by_name(&self, username: &str) -> Option<User> {
        self.load_users().into_iter().find(|user| user.username == username)
    }

    /// Plaintext match on both username and password
    fn find_user_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.load_users()
            .into_iter()
            .find(|user| user.username == username && user.password == password)
    }
}

pub trait EnrollmentStorage: Send + Sync {
    fn load_enrollments(&self) -> Vec<Enrollment>;

    /// Append an enrollment with the next free id. Neither id is checked
    /// and duplicates are allowed.
    fn enroll_user(&self, user_id: i64, course_id: i64) -> Result<Enrollment, StoreError>;

    /// Number of enrollment rows per course id
    fn enrollment_counts(&self) -> HashMap<i64, u32> {
        let mut counts = HashMap::new();
        for enrollment in self.load_enrollments() {
            *counts.entry(enrollment.course_id).or_insert(0) += 1;
        }
        counts
    }
}

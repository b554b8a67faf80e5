//! Flat-file persistence: one CSV file per table under the data directory.

pub mod connection;
pub mod course_repository;
pub mod enrollment_repository;
pub mod table;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use course_repository::CourseRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use table::{CsvRecord, Table};
pub use user_repository::UserRepository;

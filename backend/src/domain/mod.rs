//! # Domain Module
//!
//! Business rules of the course catalog, independent of HTTP and of the
//! CSV layout.
//!
//! ## Module Organization
//!
//! - **catalog**: search, ordering, pagination and badges for course listings
//! - **course_service**: catalog queries and admin-gated course creation/deletion
//! - **enrollment_service**: enrolling users and joining them to their courses
//! - **user_service**: registration, login and role lookup
//! - **asset_service**: thumbnail and document uploads
//! - **commands**: command and query types the services accept and return
//! - **models**: the typed records produced by the storage layer
//!
//! ## Business Rules
//!
//! - Only existing admins may create or delete courses
//! - Courses need a non-empty title, description and instructor
//! - Usernames are unique
//! - Enrolling twice is allowed; the course is still listed once
//! - A failed upload never blocks course creation

pub mod asset_service;
pub mod catalog;
pub mod commands;
pub mod course_service;
pub mod enrollment_service;
pub mod error;
pub mod models;
pub mod user_service;

pub use asset_service::AssetService;
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use error::ServiceError;
pub use user_service::UserService;

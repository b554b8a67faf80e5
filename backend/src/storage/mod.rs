//! # Storage Module
//!
//! Persistence for the course catalog.
//!
//! - **csv**: the three flat tables (users, courses, enrollments), one CSV
//!   file each, rewritten in full on every change
//! - **object**: course asset uploads to S3-compatible storage with a
//!   local-disk fallback
//!
//! The domain layer only sees the traits in [`traits`], so the CSV
//! repositories can be replaced without touching the services.

pub mod csv;
pub mod error;
pub mod object;
pub mod traits;

pub use self::csv::{CourseRepository, CsvConnection, EnrollmentRepository, UserRepository};
pub use error::StoreError;
pub use object::{AssetStore, AssetUploader, StoredAsset, UploadError};
pub use traits::{CourseStorage, EnrollmentStorage, UserStorage};

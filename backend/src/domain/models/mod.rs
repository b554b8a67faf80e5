//! Domain models for the course catalog.
//!
//! These are the typed records the storage layer produces at its load
//! boundary. The REST layer maps them to the DTOs in the `shared` crate.

pub mod asset;
pub mod course;
pub mod enrollment;
pub mod user;

pub use asset::AssetKind;
pub use course::{Course, NewCourse};
pub use enrollment::Enrollment;
pub use user::{NewUser, Role, User};

/// Parse an identifier the way the flat files store them.
///
/// Accepts plain integers and integral floats (`"7"`, `" 7 "`, `"7.0"`),
/// since tables edited by spreadsheet tools tend to carry the latter.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}

//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! Handlers translate the JSON DTOs of the `shared` crate into domain
//! commands, call a service, and map the result (or the `ServiceError`)
//! back into a response. No business rules live here.

pub mod rest;

pub use rest::api_router;

//! # E-Learning Backend
//!
//! Course catalog backend over flat CSV tables, with course assets pushed
//! to S3-compatible object storage.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (services, catalog rules)
//!     ↓
//! Storage Layer (CSV tables, object storage)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AssetService, CourseService, EnrollmentService, UserService};
use crate::storage::{AssetUploader, CourseRepository, CsvConnection, EnrollmentRepository, UserRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub course_service: CourseService,
    pub enrollment_service: EnrollmentService,
    pub user_service: UserService,
    pub asset_service: AssetService,
}

impl AppState {
    /// Wire the services over one CSV connection
    pub fn new(connection: CsvConnection, uploader: AssetUploader) -> Self {
        let courses = Arc::new(CourseRepository::new(connection.clone()));
        let enrollments = Arc::new(EnrollmentRepository::new(connection.clone()));
        let users = Arc::new(UserRepository::new(connection));

        let user_service = UserService::new(users);
        let course_service = CourseService::new(courses.clone(), enrollments.clone(), user_service.clone());
        let enrollment_service = EnrollmentService::new(courses, enrollments);
        let asset_service = AssetService::new(uploader);

        Self {
            course_service,
            enrollment_service,
            user_service,
            asset_service,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up CSV store in {}", config.server.data_dir.display());
    let connection = CsvConnection::new(&config.server.data_dir).context("Failed to open data directory")?;
    connection.ensure_all().context("Failed to create CSV tables")?;

    info!("Setting up object storage");
    let uploader = AssetUploader::from_settings(
        config.object_storage.s3_settings(),
        &config.server.upload_dir,
        config.server.upload_timeout(),
    );

    Ok(AppState::new(connection, uploader))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .server
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.server.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::api_router())
        // Assets that fell back to local disk
        .nest_service("/uploads", ServeDir::new(&config.server.upload_dir))
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_config(temp_dir: &TempDir) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                data_dir: temp_dir.path().join("data"),
                upload_dir: temp_dir.path().join("uploads"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_backend_creates_tables() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = test_config(&temp_dir);

        initialize_backend(&config)?;

        for name in ["users.csv", "courses.csv", "enrollments.csv"] {
            assert!(config.server.data_dir.join(name).exists());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_router_serves_api_and_uploads() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = test_config(&temp_dir);
        let app = create_router(initialize_backend(&config)?, &config)?;

        fs::create_dir_all(&config.server.upload_dir)?;
        fs::write(config.server.upload_dir.join("cover.png"), b"png")?;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/courses").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/uploads/cover.png").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"png");
        Ok(())
    }

    #[test]
    fn test_invalid_cors_origin_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.server.cors_origin = "bad\norigin".to_string();

        let state = initialize_backend(&config).unwrap();
        assert!(create_router(state, &config).is_err());
    }
}

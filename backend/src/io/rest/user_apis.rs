//! # REST API for Users
//!
//! Registration, login, and role lookup. Passwords are never returned.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use crate::io::rest::error_response;
use crate::io::rest::mappers::UserMapper;
use crate::AppState;
use shared::{LoginRequest, RegisterUserRequest, UserRoleResponse};

/// Create a router for user related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/by-name/:username/role", get(user_role))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/register - username: {}", request.username);

    match state.user_service.register(UserMapper::to_register_command(request)) {
        Ok(user) => (
            StatusCode::CREATED,
            Json(UserMapper::to_user_response(user, "User registered successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to register user: {}", e);
            e.into_response()
        }
    }
}

/// Check credentials
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> impl IntoResponse {
    info!("POST /api/users/login - username: {}", request.username);

    match state.user_service.login(UserMapper::to_login_command(request)) {
        Some(user) => (
            StatusCode::OK,
            Json(UserMapper::to_user_response(user, "Logged in successfully")),
        )
            .into_response(),
        None => error_response(StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", "Invalid username or password"),
    }
}

/// Role of a user, `null` when the user does not exist
pub async fn user_role(State(state): State<AppState>, Path(username): Path<String>) -> impl IntoResponse {
    info!("GET /api/users/by-name/{}/role", username);

    let role = state.user_service.user_role(&username).map(UserMapper::role_to_dto);
    (StatusCode::OK, Json(UserRoleResponse { username, role }))
}

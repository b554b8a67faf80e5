//! # REST API for Courses
//!
//! Catalog listing, featured courses, and admin course creation/deletion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use tracing::{error, info};

use crate::domain::commands::courses::DeleteCourseCommand;
use crate::io::rest::mappers::CourseMapper;
use crate::AppState;
use shared::{CourseListRequest, CreateCourseRequest, DeleteCourseRequest};

/// Create a router for course related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/featured", get(featured_courses))
        .route("/courses/:course_id", delete(delete_course))
}

/// List one page of the catalog
pub async fn list_courses(
    State(state): State<AppState>,
    Query(request): Query<CourseListRequest>,
) -> impl IntoResponse {
    info!("GET /api/courses - request: {:?}", request);

    let query = CourseMapper::to_catalog_query(request);
    let page = state.course_service.list_courses(&query);
    (StatusCode::OK, Json(CourseMapper::to_list_response(page)))
}

/// Courses shown on the home page
pub async fn featured_courses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/courses/featured");

    let courses = state.course_service.featured_courses();
    (StatusCode::OK, Json(CourseMapper::to_featured_response(courses)))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> impl IntoResponse {
    info!("POST /api/courses - title: {}", request.title);

    let command = CourseMapper::to_create_command(request);
    match state.course_service.create_course(command) {
        Ok(result) => (StatusCode::CREATED, Json(CourseMapper::to_create_response(result))).into_response(),
        Err(e) => {
            error!("Failed to create course: {}", e);
            e.into_response()
        }
    }
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Query(request): Query<DeleteCourseRequest>,
) -> impl IntoResponse {
    info!("DELETE /api/courses/{} - actor: {}", course_id, request.actor_id);

    let command = DeleteCourseCommand {
        actor_id: request.actor_id,
        course_id,
    };
    match state.course_service.delete_course(command) {
        Ok(result) => (StatusCode::OK, Json(CourseMapper::to_delete_response(result))).into_response(),
        Err(e) => {
            error!("Failed to delete course {}: {}", course_id, e);
            e.into_response()
        }
    }
}

//! # REST API for Enrollments
//!
//! Enrolling users in courses and listing a user's courses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tracing::{error, info, warn};

use crate::io::rest::error_response;
use crate::io::rest::mappers::{CourseMapper, EnrollmentMapper};
use crate::AppState;
use shared::EnrollRequest;

/// Create a router for enrollment related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enrollments", post(enroll))
        .route("/users/:user_id/courses", get(my_courses))
}

/// Enroll a user in a course. Ids may be JSON numbers or numeric strings.
pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("POST /api/enrollments - unreadable body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.body_text());
        }
    };
    info!("POST /api/enrollments - request: {:?}", request);

    let Some((user_id, course_id)) = EnrollmentMapper::to_ids(&request) else {
        warn!("Malformed enrollment ids: {:?}", request);
        let response = EnrollmentMapper::to_response(false, "user_id and course_id must be integers");
        return (StatusCode::BAD_REQUEST, Json(response)).into_response();
    };

    if state.enrollment_service.enroll_user(user_id, course_id) {
        let response = EnrollmentMapper::to_response(true, "Enrolled successfully");
        (StatusCode::CREATED, Json(response)).into_response()
    } else {
        error!("Failed to enroll user {} in course {}", user_id, course_id);
        let response = EnrollmentMapper::to_response(false, "Enrollment could not be saved");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
    }
}

/// Courses a user is enrolled in. A malformed id yields an empty list.
pub async fn my_courses(State(state): State<AppState>, Path(user_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/users/{}/courses", user_id);

    let courses = state.enrollment_service.my_courses_by_raw_id(&user_id);
    (StatusCode::OK, Json(CourseMapper::to_my_courses_response(courses)))
}

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::catalog::{self, FEATURED_COUNT};
use crate::domain::commands::courses::{
    CatalogPage, CourseCatalogQuery, CreateCourseCommand, CreateCourseResult, DeleteCourseCommand,
    DeleteCourseResult,
};
use crate::domain::error::ServiceError;
use crate::domain::models::{Course, NewCourse};
use crate::domain::user_service::UserService;
use crate::storage::{CourseStorage, EnrollmentStorage};

/// Service for browsing and administering the course catalog
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseStorage>,
    enrollments: Arc<dyn EnrollmentStorage>,
    user_service: UserService,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseStorage>,
        enrollments: Arc<dyn EnrollmentStorage>,
        user_service: UserService,
    ) -> Self {
        Self {
            courses,
            enrollments,
            user_service,
        }
    }

    /// All courses in table order
    pub fn load_courses(&self) -> Vec<Course> {
        self.courses.load_courses()
    }

    pub fn get_course(&self, course_id: i64) -> Option<Course> {
        self.courses.load_courses().into_iter().find(|course| course.id == course_id)
    }

    /// One page of the catalog with badges
    pub fn list_courses(&self, query: &CourseCatalogQuery) -> CatalogPage {
        let courses = self.courses.load_courses();
        let counts = self.enrollments.enrollment_counts();

        let page = catalog::build_page(courses, &counts, query);
        info!(
            "Listed page {}/{} of catalog ({} matching courses)",
            page.page, page.total_pages, page.total_courses
        );
        page
    }

    /// The first courses in table order, for the home page
    pub fn featured_courses(&self) -> Vec<Course> {
        self.courses.load_courses().into_iter().take(FEATURED_COUNT).collect()
    }

    /// Create a course on behalf of an admin
    pub fn create_course(&self, command: CreateCourseCommand) -> Result<CreateCourseResult, ServiceError> {
        info!("Creating course '{}' for user {}", command.title, command.actor_id);

        self.user_service.require_admin(command.actor_id)?;

        let title = required_field("Title", &command.title)?;
        let description = required_field("Description", &command.description)?;
        let instructor = required_field("Instructor", &command.instructor)?;

        let course_id = self.courses.add_course(NewCourse {
            title,
            description,
            instructor,
            thumbnail: optional_field(command.thumbnail),
            asset_path: optional_field(command.asset_path),
        })?;

        info!("Created course {}", course_id);

        Ok(CreateCourseResult {
            course_id,
            success_message: "Course created successfully".to_string(),
        })
    }

    /// Delete every row of a course on behalf of an admin
    pub fn delete_course(&self, command: DeleteCourseCommand) -> Result<DeleteCourseResult, ServiceError> {
        info!("Deleting course {} for user {}", command.course_id, command.actor_id);

        self.user_service.require_admin(command.actor_id)?;

        let deleted_count = self.courses.delete_course(command.course_id)?;
        if deleted_count == 0 {
            warn!("Course {} not found", command.course_id);
            return Err(ServiceError::NotFound(format!("Course {} not found", command.course_id)));
        }

        Ok(DeleteCourseResult {
            deleted_count,
            success_message: "Course deleted successfully".to_string(),
        })
    }
}

fn required_field(name: &str, value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{} cannot be empty", name)));
    }
    Ok(trimmed.to_string())
}

fn optional_field(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

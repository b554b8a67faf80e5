use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user holds in the course catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can browse and enroll in courses
    #[default]
    Student,
    /// Can additionally create and delete courses
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A course as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor: String,
    /// Thumbnail path or URL, if one was uploaded
    pub thumbnail: Option<String>,
    /// Course document path or URL, if one was uploaded
    pub asset_path: Option<String>,
}

/// A course in a catalog listing, decorated with listing badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCard {
    pub course: Course,
    /// One of the first three courses of the current ordering
    pub is_new: bool,
    /// At least one enrollment exists for the course
    pub is_popular: bool,
    pub enrollment_count: u32,
}

/// Ordering applied to the course catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseSort {
    /// Highest course id first
    #[default]
    Newest,
    /// Title A to Z
    Title,
    /// Instructor A to Z, courses without an instructor last
    Instructor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseListRequest {
    /// Case-insensitive match against title or instructor
    pub search: Option<String>,
    pub sort: Option<CourseSort>,
    /// 1-based page number
    pub page: Option<u32>,
    /// One of 6, 9 or 12
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoursePagination {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_courses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseCard>,
    pub pagination: CoursePagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    /// Id of the admin creating the course
    pub actor_id: i64,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub thumbnail: Option<String>,
    pub asset_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    pub course_id: i64,
    pub success_message: String,
}

/// Query parameters of a course deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCourseRequest {
    pub actor_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCourseResponse {
    pub deleted_count: usize,
    pub success_message: String,
}

/// An identifier as clients send it: a JSON number or a numeric string.
/// The backend decides whether it is a valid id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    pub fn as_text(&self) -> String {
        match self {
            RawId::Number(number) => number.to_string(),
            RawId::Text(text) => text.clone(),
        }
    }
}

impl From<i64> for RawId {
    fn from(id: i64) -> Self {
        RawId::Number(id.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollRequest {
    #[serde(default)]
    pub user_id: Option<RawId>,
    #[serde(default)]
    pub course_id: Option<RawId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyCoursesResponse {
    pub courses: Vec<Course>,
}

/// A user as exposed over the API. Passwords never leave the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    /// Defaults to student
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRoleResponse {
    pub username: String,
    pub role: Option<Role>,
}

/// Kind of course asset being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "thumbnail")]
    Thumbnail,
    #[serde(rename = "pdf")]
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadAssetResponse {
    /// Public URL, or local path when the upload fell back to disk.
    /// `None` means no asset could be stored.
    pub location: Option<String>,
    pub stored_remotely: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

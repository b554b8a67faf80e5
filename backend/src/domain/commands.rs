//! Domain-level command and query types.
//!
//! Services take and return these; the REST layer maps the public DTOs in
//! the `shared` crate to and from them.

pub mod courses {
    use crate::domain::models::Course;

    /// Ordering of the course catalog
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum CourseOrder {
        #[default]
        Newest,
        Title,
        Instructor,
    }

    /// Query for one page of the catalog
    #[derive(Debug, Clone, Default)]
    pub struct CourseCatalogQuery {
        pub search: Option<String>,
        pub order: CourseOrder,
        pub page: Option<u32>,
        pub page_size: Option<u32>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CatalogEntry {
        pub course: Course,
        pub is_new: bool,
        pub enrollment_count: u32,
    }

    impl CatalogEntry {
        pub fn is_popular(&self) -> bool {
            self.enrollment_count > 0
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CatalogPage {
        pub entries: Vec<CatalogEntry>,
        pub page: u32,
        pub page_size: u32,
        pub total_pages: u32,
        pub total_courses: u32,
    }

    #[derive(Debug, Clone)]
    pub struct CreateCourseCommand {
        pub actor_id: i64,
        pub title: String,
        pub description: String,
        pub instructor: String,
        pub thumbnail: Option<String>,
        pub asset_path: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateCourseResult {
        pub course_id: i64,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteCourseCommand {
        pub actor_id: i64,
        pub course_id: i64,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteCourseResult {
        pub deleted_count: usize,
        pub success_message: String,
    }
}

pub mod users {
    use crate::domain::models::Role;

    #[derive(Debug, Clone)]
    pub struct RegisterUserCommand {
        pub username: String,
        pub password: String,
        pub role: Role,
    }

    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }
}

pub mod assets {
    use crate::domain::models::AssetKind;

    #[derive(Debug, Clone)]
    pub struct UploadAssetCommand {
        pub kind: AssetKind,
        pub file_name: String,
        pub bytes: Vec<u8>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UploadAssetResult {
        /// `None` when the asset could not be stored anywhere
        pub location: Option<String>,
        pub stored_remotely: bool,
    }
}

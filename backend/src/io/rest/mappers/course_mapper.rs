use crate::domain::commands::courses::{
    CatalogEntry, CatalogPage, CourseCatalogQuery, CourseOrder, CreateCourseCommand, CreateCourseResult,
    DeleteCourseResult,
};
use crate::domain::models::Course as DomainCourse;
use shared::{
    Course as SharedCourse, CourseCard, CourseListRequest, CourseListResponse, CoursePagination, CourseSort,
    CreateCourseRequest, CreateCourseResponse, DeleteCourseResponse, FeaturedCoursesResponse, MyCoursesResponse,
};

/// Mapper between shared course DTOs and domain course types.
pub struct CourseMapper;

impl CourseMapper {
    pub fn to_dto(domain: DomainCourse) -> SharedCourse {
        SharedCourse {
            thumbnail: domain.thumbnail().map(str::to_string),
            asset_path: domain.asset_path().map(str::to_string),
            id: domain.id,
            title: domain.title,
            description: domain.description,
            instructor: domain.instructor,
        }
    }

    pub fn to_order(sort: CourseSort) -> CourseOrder {
        match sort {
            CourseSort::Newest => CourseOrder::Newest,
            CourseSort::Title => CourseOrder::Title,
            CourseSort::Instructor => CourseOrder::Instructor,
        }
    }

    pub fn to_catalog_query(request: CourseListRequest) -> CourseCatalogQuery {
        CourseCatalogQuery {
            search: request.search.filter(|s| !s.trim().is_empty()),
            order: request.sort.map(Self::to_order).unwrap_or_default(),
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn to_card_dto(entry: CatalogEntry) -> CourseCard {
        CourseCard {
            is_popular: entry.is_popular(),
            is_new: entry.is_new,
            enrollment_count: entry.enrollment_count,
            course: Self::to_dto(entry.course),
        }
    }

    pub fn to_list_response(page: CatalogPage) -> CourseListResponse {
        CourseListResponse {
            pagination: CoursePagination {
                page: page.page,
                page_size: page.page_size,
                total_pages: page.total_pages,
                total_courses: page.total_courses,
            },
            courses: page.entries.into_iter().map(Self::to_card_dto).collect(),
        }
    }

    pub fn to_featured_response(courses: Vec<DomainCourse>) -> FeaturedCoursesResponse {
        FeaturedCoursesResponse {
            courses: courses.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_my_courses_response(courses: Vec<DomainCourse>) -> MyCoursesResponse {
        MyCoursesResponse {
            courses: courses.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_command(request: CreateCourseRequest) -> CreateCourseCommand {
        CreateCourseCommand {
            actor_id: request.actor_id,
            title: request.title,
            description: request.description,
            instructor: request.instructor,
            thumbnail: request.thumbnail,
            asset_path: request.asset_path,
        }
    }

    pub fn to_create_response(result: CreateCourseResult) -> CreateCourseResponse {
        CreateCourseResponse {
            course_id: result.course_id,
            success_message: result.success_message,
        }
    }

    pub fn to_delete_response(result: DeleteCourseResult) -> DeleteCourseResponse {
        DeleteCourseResponse {
            deleted_count: result.deleted_count,
            success_message: result.success_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_assets_become_none() {
        let course = DomainCourse {
            id: 3,
            title: "Rust".to_string(),
            description: "d".to_string(),
            instructor: "i".to_string(),
            thumbnail: "  ".to_string(),
            asset_path: "data/uploads/x.pdf".to_string(),
        };

        let dto = CourseMapper::to_dto(course);

        assert_eq!(dto.id, 3);
        assert_eq!(dto.thumbnail, None);
        assert_eq!(dto.asset_path.as_deref(), Some("data/uploads/x.pdf"));
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let query = CourseMapper::to_catalog_query(CourseListRequest {
            search: Some("   ".to_string()),
            sort: Some(CourseSort::Instructor),
            page: Some(2),
            page_size: None,
        });

        assert_eq!(query.search, None);
        assert_eq!(query.order, CourseOrder::Instructor);
        assert_eq!(query.page, Some(2));
    }
}

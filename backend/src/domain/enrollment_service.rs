use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::{parse_id, Course, Enrollment};
use crate::storage::{CourseStorage, EnrollmentStorage};

/// Service joining users to the courses they enrolled in
#[derive(Clone)]
pub struct EnrollmentService {
    courses: Arc<dyn CourseStorage>,
    enrollments: Arc<dyn EnrollmentStorage>,
}

impl EnrollmentService {
    pub fn new(courses: Arc<dyn CourseStorage>, enrollments: Arc<dyn EnrollmentStorage>) -> Self {
        Self { courses, enrollments }
    }

    /// Record an enrollment. Storage failures are logged and reported as `false`.
    pub fn enroll_user(&self, user_id: i64, course_id: i64) -> bool {
        match self.enrollments.enroll_user(user_id, course_id) {
            Ok(_) => true,
            Err(e) => {
                warn!("Failed to enroll user {} in course {}: {}", user_id, course_id, e);
                false
            }
        }
    }

    /// Courses `user_id` is enrolled in, in course table order
    pub fn my_courses_for_user(&self, user_id: i64) -> Vec<Course> {
        let courses = enrolled_courses(
            self.courses.load_courses(),
            &self.enrollments.load_enrollments(),
            user_id,
        );
        info!("User {} is enrolled in {} courses", user_id, courses.len());
        courses
    }

    /// Like [`Self::my_courses_for_user`] for an id taken from a URL or form.
    /// A malformed id yields no courses.
    pub fn my_courses_by_raw_id(&self, raw_user_id: &str) -> Vec<Course> {
        match parse_id(raw_user_id) {
            Some(user_id) => self.my_courses_for_user(user_id),
            None => {
                warn!("Malformed user id '{}'", raw_user_id);
                Vec::new()
            }
        }
    }
}

/// Join enrollments to courses. Each course appears once however many
/// times the user enrolled; enrollments pointing at missing courses are dropped.
pub fn enrolled_courses(courses: Vec<Course>, enrollments: &[Enrollment], user_id: i64) -> Vec<Course> {
    let course_ids: HashSet<i64> = enrollments
        .iter()
        .filter(|enrollment| enrollment.user_id == user_id)
        .map(|enrollment| enrollment.course_id)
        .collect();

    courses
        .into_iter()
        .filter(|course| course_ids.contains(&course.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewCourse;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::Table;
    use std::fs;

    fn setup_test() -> (TestEnvironment, EnrollmentService) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let courses = env.course_repository();
        for title in ["Rust", "Go", "Zig"] {
            courses
                .add_course(NewCourse {
                    title: title.to_string(),
                    ..Default::default()
                })
                .expect("Failed to add course");
        }
        let service = EnrollmentService::new(courses, env.enrollment_repository());
        (env, service)
    }

    fn titles(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_no_enrollments_is_empty() {
        let (_env, service) = setup_test();
        assert!(service.my_courses_for_user(1).is_empty());
    }

    #[test]
    fn test_enroll_then_list() {
        let (_env, service) = setup_test();

        assert!(service.enroll_user(1, 3));
        assert!(service.enroll_user(1, 1));
        assert!(service.enroll_user(2, 2));

        assert_eq!(titles(&service.my_courses_for_user(1)), vec!["Rust", "Zig"]);
        assert_eq!(titles(&service.my_courses_for_user(2)), vec!["Go"]);
    }

    #[test]
    fn test_repeated_enrollment_lists_course_once_and_keeps_rows() {
        let (env, service) = setup_test();

        for _ in 0..3 {
            assert!(service.enroll_user(1, 2));
            assert_eq!(titles(&service.my_courses_for_user(1)), vec!["Go"]);
        }

        assert_eq!(env.enrollment_repository().load_enrollments().len(), 3);
    }

    #[test]
    fn test_dangling_course_is_filtered_out() {
        let (_env, service) = setup_test();

        assert!(service.enroll_user(1, 99));
        assert!(service.enroll_user(1, 1));

        assert_eq!(titles(&service.my_courses_for_user(1)), vec!["Rust"]);
    }

    #[test]
    fn test_raw_id() {
        let (_env, service) = setup_test();
        service.enroll_user(4, 1);

        assert_eq!(service.my_courses_by_raw_id("4").len(), 1);
        assert_eq!(service.my_courses_by_raw_id("4.0").len(), 1);
        assert!(service.my_courses_by_raw_id("four").is_empty());
        assert!(service.my_courses_by_raw_id("").is_empty());
    }

    #[test]
    fn test_enroll_reports_storage_failure() {
        let (env, service) = setup_test();
        let path = env.connection.table_path(Table::Enrollments);
        fs::remove_file(&path).ok();
        // A directory where the table should be makes every write fail
        fs::create_dir_all(&path).unwrap();

        assert!(!service.enroll_user(1, 1));
    }
}

/// Join record linking a user to a course.
///
/// Neither reference is checked against its table, and the same pair may be
/// enrolled more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
}

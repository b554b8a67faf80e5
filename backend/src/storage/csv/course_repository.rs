use tracing::info;

use super::connection::CsvConnection;
use super::table::{next_id, Table};
use crate::domain::models::{Course, NewCourse};
use crate::storage::{CourseStorage, StoreError};

/// CSV-based course repository backed by `courses.csv`
#[derive(Clone)]
pub struct CourseRepository {
    connection: CsvConnection,
}

impl CourseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl CourseStorage for CourseRepository {
    fn load_courses(&self) -> Vec<Course> {
        let _guard = self.connection.lock(Table::Courses);
        self.connection.read()
    }

    fn add_course(&self, course: NewCourse) -> Result<i64, StoreError> {
        let _guard = self.connection.lock(Table::Courses);

        let mut courses: Vec<Course> = self.connection.read_for_update()?;
        let id = next_id(&courses);
        courses.push(course.with_id(id));
        self.connection.write(&courses)?;

        info!("Added course {} to {}", id, Table::Courses);
        Ok(id)
    }

    fn delete_course(&self, course_id: i64) -> Result<usize, StoreError> {
        let _guard = self.connection.lock(Table::Courses);

        let mut courses: Vec<Course> = self.connection.read_for_update()?;
        let before = courses.len();
        courses.retain(|course| course.id != course_id);
        let deleted = before - courses.len();

        if deleted > 0 {
            self.connection.write(&courses)?;
            info!("Deleted {} row(s) for course {}", deleted, course_id);
        }

        Ok(deleted)
    }
}

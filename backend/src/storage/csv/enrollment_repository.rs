use tracing::info;

use super::connection::CsvConnection;
use super::table::{next_id, Table};
use crate::domain::models::Enrollment;
use crate::storage::{EnrollmentStorage, StoreError};

/// CSV-based enrollment repository backed by `enrollments.csv`
#[derive(Clone)]
pub struct EnrollmentRepository {
    connection: CsvConnection,
}

impl EnrollmentRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl EnrollmentStorage for EnrollmentRepository {
    fn load_enrollments(&self) -> Vec<Enrollment> {
        let _guard = self.connection.lock(Table::Enrollments);
        self.connection.read()
    }

    fn enroll_user(&self, user_id: i64, course_id: i64) -> Result<Enrollment, StoreError> {
        let _guard = self.connection.lock(Table::Enrollments);

        let mut enrollments: Vec<Enrollment> = self.connection.read_for_update()?;
        let enrollment = Enrollment {
            id: next_id(&enrollments),
            user_id,
            course_id,
        };
        enrollments.push(enrollment);
        self.connection.write(&enrollments)?;

        info!(
            "Enrolled user {} in course {} (enrollment {})",
            user_id, course_id, enrollment.id
        );
        Ok(enrollment)
    }
}

use crate::domain::models::parse_id;
use shared::{EnrollRequest, EnrollResponse, RawId};

pub struct EnrollmentMapper;

impl EnrollmentMapper {
    /// `(user_id, course_id)`, or `None` when either is missing or malformed
    pub fn to_ids(request: &EnrollRequest) -> Option<(i64, i64)> {
        let user_id = Self::id_to_domain(request.user_id.as_ref()?)?;
        let course_id = Self::id_to_domain(request.course_id.as_ref()?)?;
        Some((user_id, course_id))
    }

    pub fn id_to_domain(id: &RawId) -> Option<i64> {
        parse_id(&id.as_text())
    }

    pub fn to_response(success: bool, message: &str) -> EnrollResponse {
        EnrollResponse {
            success,
            message: message.to_string(),
        }
    }
}

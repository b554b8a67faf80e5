pub mod asset_mapper;
pub mod course_mapper;
pub mod enrollment_mapper;
pub mod user_mapper;

pub use asset_mapper::AssetMapper;
pub use course_mapper::CourseMapper;
pub use enrollment_mapper::EnrollmentMapper;
pub use user_mapper::UserMapper;

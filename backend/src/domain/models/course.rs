/// A course row as stored in `courses.csv`.
///
/// `thumbnail` and `asset_path` are empty strings when no asset was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub thumbnail: String,
    pub asset_path: String,
}

impl Course {
    pub fn thumbnail(&self) -> Option<&str> {
        non_blank(&self.thumbnail)
    }

    pub fn asset_path(&self) -> Option<&str> {
        non_blank(&self.asset_path)
    }
}

/// Fields of a course that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub thumbnail: String,
    pub asset_path: String,
}

impl NewCourse {
    pub fn with_id(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            instructor: self.instructor,
            thumbnail: self.thumbnail,
            asset_path: self.asset_path,
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

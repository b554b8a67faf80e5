use csv::StringRecord;
use std::collections::HashMap;
use std::fmt;

use crate::domain::models::{parse_id, Course, Enrollment, Role, User};
use crate::storage::StoreError;

/// The three flat tables backing the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Courses,
    Enrollments,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Users, Table::Courses, Table::Enrollments];

    pub fn file_name(&self) -> &'static str {
        match self {
            Table::Users => "users.csv",
            Table::Courses => "courses.csv",
            Table::Enrollments => "enrollments.csv",
        }
    }

    /// Column names in file order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Users => &["id", "username", "password", "role"],
            Table::Courses => &[
                "id",
                "title",
                "description",
                "instructor",
                "thumbnail",
                "asset_path",
            ],
            Table::Enrollments => &["id", "user_id", "course_id"],
        }
    }

    pub fn header_line(&self) -> String {
        format!("{}\n", self.columns().join(","))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A typed row of one of the tables
pub trait CsvRecord: Sized {
    const TABLE: Table;

    fn id(&self) -> i64;

    /// Build a record from a row, filling missing columns with defaults
    fn from_row(row: &RowView<'_>) -> Result<Self, StoreError>;

    /// Field values in `TABLE.columns()` order
    fn to_row(&self) -> Vec<String>;
}

/// Maps header names to positions so rows are read by column name
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().trim_start_matches('\u{feff}').to_string(), index))
            .collect();
        Self { positions }
    }

    /// Expected columns absent from the file header
    pub fn missing_columns(&self, table: Table) -> Vec<&'static str> {
        table
            .columns()
            .iter()
            .copied()
            .filter(|column| !self.positions.contains_key(*column))
            .collect()
    }
}

/// Read-only view of one CSV row, addressed by column name
pub struct RowView<'a> {
    table: Table,
    index: &'a HeaderIndex,
    record: &'a StringRecord,
}

impl<'a> RowView<'a> {
    pub fn new(table: Table, index: &'a HeaderIndex, record: &'a StringRecord) -> Self {
        Self {
            table,
            index,
            record,
        }
    }

    /// Column text, or an empty string when the column or field is missing
    pub fn text(&self, column: &str) -> String {
        self.index
            .positions
            .get(column)
            .and_then(|position| self.record.get(*position))
            .unwrap_or("")
            .to_string()
    }

    pub fn int(&self, column: &'static str) -> Result<i64, StoreError> {
        let value = self.text(column);
        parse_id(&value).ok_or(StoreError::InvalidField {
            table: self.table,
            column,
            value,
        })
    }
}

/// Next identifier for a table: one past the largest id, or 1 when empty
pub fn next_id<R: CsvRecord>(rows: &[R]) -> i64 {
    rows.iter().map(CsvRecord::id).max().map_or(1, |max| max + 1)
}

impl CsvRecord for User {
    const TABLE: Table = Table::Users;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &RowView<'_>) -> Result<Self, StoreError> {
        Ok(User {
            id: row.int("id")?,
            username: row.text("username"),
            password: row.text("password"),
            role: Role::from_column(&row.text("role")),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.password.clone(),
            self.role.as_str().to_string(),
        ]
    }
}

impl CsvRecord for Course {
    const TABLE: Table = Table::Courses;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &RowView<'_>) -> Result<Self, StoreError> {
        Ok(Course {
            id: row.int("id")?,
            title: row.text("title"),
            description: row.text("description"),
            instructor: row.text("instructor"),
            thumbnail: row.text("thumbnail"),
            asset_path: row.text("asset_path"),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.instructor.clone(),
            self.thumbnail.clone(),
            self.asset_path.clone(),
        ]
    }
}

impl CsvRecord for Enrollment {
    const TABLE: Table = Table::Enrollments;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &RowView<'_>) -> Result<Self, StoreError> {
        Ok(Enrollment {
            id: row.int("id")?,
            user_id: row.int("user_id")?,
            course_id: row.int("course_id")?,
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user_id.to_string(),
            self.course_id.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_of<'a>(table: Table, index: &'a HeaderIndex, record: &'a StringRecord) -> RowView<'a> {
        RowView::new(table, index, record)
    }

    #[test]
    fn test_header_line_matches_columns() {
        assert_eq!(Table::Users.header_line(), "id,username,password,role\n");
        assert_eq!(
            Table::Courses.header_line(),
            "id,title,description,instructor,thumbnail,asset_path\n"
        );
        assert_eq!(Table::Enrollments.header_line(), "id,user_id,course_id\n");
    }

    #[test]
    fn test_row_view_reads_by_name_regardless_of_order() {
        let headers = StringRecord::from(vec!["course_id", "id", "user_id"]);
        let record = StringRecord::from(vec!["4", "1", "9"]);
        let index = HeaderIndex::new(&headers);

        let enrollment = Enrollment::from_row(&view_of(Table::Enrollments, &index, &record)).unwrap();
        assert_eq!(
            enrollment,
            Enrollment {
                id: 1,
                user_id: 9,
                course_id: 4
            }
        );
    }

    #[test]
    fn test_missing_columns_are_filled_with_defaults() {
        let headers = StringRecord::from(vec!["id", "title", "instructor"]);
        let record = StringRecord::from(vec!["3", "Rust 101", "Ferris"]);
        let index = HeaderIndex::new(&headers);

        assert_eq!(
            index.missing_columns(Table::Courses),
            vec!["description", "thumbnail", "asset_path"]
        );

        let course = Course::from_row(&view_of(Table::Courses, &index, &record)).unwrap();
        assert_eq!(course.id, 3);
        assert_eq!(course.title, "Rust 101");
        assert_eq!(course.description, "");
        assert_eq!(course.thumbnail(), None);
    }

    #[test]
    fn test_invalid_id_is_reported() {
        let headers = StringRecord::from(vec!["id", "user_id", "course_id"]);
        let record = StringRecord::from(vec!["x", "1", "2"]);
        let index = HeaderIndex::new(&headers);

        let result = Enrollment::from_row(&view_of(Table::Enrollments, &index, &record));
        assert!(matches!(
            result,
            Err(StoreError::InvalidField { column: "id", .. })
        ));
    }

    #[test]
    fn test_next_id() {
        let empty: Vec<Enrollment> = Vec::new();
        assert_eq!(next_id(&empty), 1);

        let rows = vec![
            Enrollment { id: 2, user_id: 1, course_id: 1 },
            Enrollment { id: 7, user_id: 1, course_id: 2 },
            Enrollment { id: 5, user_id: 2, course_id: 1 },
        ];
        assert_eq!(next_id(&rows), 8);
    }
}

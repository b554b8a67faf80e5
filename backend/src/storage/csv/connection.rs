use csv::{ReaderBuilder, Writer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::table::{CsvRecord, HeaderIndex, RowView, Table};
use crate::storage::StoreError;

/// CsvConnection owns the data directory and one lock per table.
///
/// Repositories hold the table lock for the whole of a read-modify-write so
/// a full rewrite never interleaves with another one inside this process.
/// I/O is blocking and runs on the calling thread, including async request
/// handlers. That assumes one server process with small tables and low
/// request rates; other processes writing the same files are not
/// coordinated with.
#[derive(Clone)]
pub struct CsvConnection {
    data_directory: PathBuf,
    locks: Arc<TableLocks>,
}

#[derive(Clone, Copy)]
enum InvalidRows {
    Skip,
    Reject,
}

#[derive(Default)]
struct TableLocks {
    users: Mutex<()>,
    courses: Mutex<()>,
    enrollments: Mutex<()>,
}

impl CsvConnection {
    /// Create a new CSV connection rooted at `data_directory`
    pub fn new<P: AsRef<Path>>(data_directory: P) -> Result<Self, StoreError> {
        let data_directory = data_directory.as_ref().to_path_buf();

        if !data_directory.exists() {
            fs::create_dir_all(&data_directory)
                .map_err(|e| StoreError::io(&data_directory, e))?;
            info!("Created data directory {}", data_directory.display());
        }

        Ok(Self {
            data_directory,
            locks: Arc::new(TableLocks::default()),
        })
    }

    pub fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    pub fn table_path(&self, table: Table) -> PathBuf {
        self.data_directory.join(table.file_name())
    }

    /// Acquire the lock guarding `table`
    pub fn lock(&self, table: Table) -> MutexGuard<'_, ()> {
        let mutex = match table {
            Table::Users => &self.locks.users,
            Table::Courses => &self.locks.courses,
            Table::Enrollments => &self.locks.enrollments,
        };
        // A panic mid-write leaves the file intact thanks to the temp-file rename
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create the table file with its header row if it does not exist
    pub fn ensure(&self, table: Table) -> Result<(), StoreError> {
        if !self.data_directory.exists() {
            fs::create_dir_all(&self.data_directory)
                .map_err(|e| StoreError::io(&self.data_directory, e))?;
        }

        let path = self.table_path(table);
        if !path.exists() {
            fs::write(&path, table.header_line()).map_err(|e| StoreError::io(&path, e))?;
            debug!("Created {} with header row", path.display());
        }

        Ok(())
    }

    pub fn ensure_all(&self) -> Result<(), StoreError> {
        for table in Table::ALL {
            self.ensure(table)?;
        }
        Ok(())
    }

    /// Read every row of the record's table.
    ///
    /// Columns missing from the header are filled with defaults; rows whose
    /// identifiers cannot be parsed are skipped. Any other failure is returned.
    pub fn try_read<R: CsvRecord>(&self) -> Result<Vec<R>, StoreError> {
        self.read_rows(InvalidRows::Skip)
    }

    /// Read every row ahead of a full rewrite.
    ///
    /// Same as [`try_read`](Self::try_read) except that a row which cannot be
    /// parsed is an error, since writing the table back without it would
    /// drop it and free its id for reuse.
    pub fn read_for_update<R: CsvRecord>(&self) -> Result<Vec<R>, StoreError> {
        self.read_rows(InvalidRows::Reject)
    }

    fn read_rows<R: CsvRecord>(&self, invalid_rows: InvalidRows) -> Result<Vec<R>, StoreError> {
        let table = R::TABLE;
        self.ensure(table)?;

        let path = self.table_path(table);
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|source| StoreError::Parse { table, source })?;

        let headers = reader
            .headers()
            .map_err(|source| StoreError::Parse { table, source })?
            .clone();
        let index = HeaderIndex::new(&headers);

        let missing = index.missing_columns(table);
        if !missing.is_empty() {
            debug!("{} is missing columns {:?}, filling defaults", table, missing);
        }

        let mut rows = Vec::new();
        for (line, result) in reader.records().enumerate() {
            let record = result.map_err(|source| StoreError::Parse { table, source })?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            match (R::from_row(&RowView::new(table, &index, &record)), invalid_rows) {
                (Ok(row), _) => rows.push(row),
                (Err(e), InvalidRows::Skip) => warn!("Skipping row {} of {}: {}", line + 1, table, e),
                (Err(e), InvalidRows::Reject) => {
                    error!("Refusing to rewrite {}: row {} is invalid: {}", table, line + 1, e);
                    return Err(e);
                }
            }
        }

        Ok(rows)
    }

    /// Read every row, treating a missing or corrupt table as empty
    pub fn read<R: CsvRecord>(&self) -> Vec<R> {
        match self.try_read() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Treating {} as empty: {}", R::TABLE, e);
                Vec::new()
            }
        }
    }

    /// Replace the table contents with `rows`.
    ///
    /// Rows go to a temp file in the same directory which is then renamed
    /// over the table, so readers see either the old or the new file.
    pub fn write<R: CsvRecord>(&self, rows: &[R]) -> Result<(), StoreError> {
        let table = R::TABLE;
        let path = self.table_path(table);
        let temp_path = self
            .data_directory
            .join(format!(".{}.tmp-{}", table.file_name(), Uuid::new_v4()));

        let result = Self::write_rows(&temp_path, table, rows)
            .and_then(|_| fs::rename(&temp_path, &path).map_err(|e| StoreError::io(&path, e)));

        if result.is_err() && temp_path.exists() {
            let _ = fs::remove_file(&temp_path);
        }

        if result.is_ok() {
            debug!("Wrote {} rows to {}", rows.len(), table);
        }
        result
    }

    fn write_rows<R: CsvRecord>(path: &Path, table: Table, rows: &[R]) -> Result<(), StoreError> {
        let parse_error = |source| StoreError::Parse { table, source };

        let mut writer = Writer::from_path(path).map_err(parse_error)?;
        writer.write_record(table.columns()).map_err(parse_error)?;
        for row in rows {
            writer.write_record(row.to_row()).map_err(parse_error)?;
        }
        writer.flush().map_err(|e| StoreError::io(path, e))?;

        Ok(())
    }
}

//! CSV writer for series files.

use serde::Serialize;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::generator::{ComponentRow, DailyRecord};
use crate::types::{Result, SeriesError};

const SERIES_HEADER: [&str; 2] = ["date", "volume"];

const COMPONENT_HEADER: [&str; 7] = [
    "date", "base", "trend", "yearly", "weekly", "noise", "volume",
];

/// Writes `records` as `date,volume` CSV to `writer`.
///
/// The header is always written, even for an empty slice.
///
/// ```
/// use chrono::NaiveDate;
/// use volume_core::prelude::*;
///
/// let records = vec![DailyRecord {
///     date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     volume: 80,
/// }];
/// let mut buffer = Vec::new();
/// write_records(&mut buffer, &records).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "date,volume\n2022-01-01,80\n");
/// ```
pub fn write_records<W: io::Write>(writer: W, records: &[DailyRecord]) -> Result<()> {
    write_rows(writer, &SERIES_HEADER, records)
}

/// Writes the component breakdown as CSV to `writer`.
pub fn write_components<W: io::Write>(writer: W, rows: &[ComponentRow]) -> Result<()> {
    write_rows(writer, &COMPONENT_HEADER, rows)
}

fn write_rows<W: io::Write, T: Serialize>(writer: W, header: &[&str], rows: &[T]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Record of a written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// File path
    pub path: PathBuf,
    /// Data rows, header excluded
    pub rows: usize,
    /// Size in bytes
    pub size: u64,
}

/// Writes series files to a fixed destination path.
///
/// Rows are first written to a temporary file next to the destination and
/// then renamed over it, so the destination either holds a complete file or
/// is left as it was. A new file gets the permissions a plain create would
/// give it (`0o666` less the umask on Unix); an existing file keeps its own.
#[derive(Debug, Clone)]
pub struct CsvSeriesWriter {
    path: PathBuf,
}

impl CsvSeriesWriter {
    /// Create a writer for `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the `date,volume` series file.
    ///
    /// # Errors
    ///
    /// `SeriesError::Io` if the destination directory cannot hold the file,
    /// `SeriesError::Csv` if serialisation fails.
    pub fn write(&self, records: &[DailyRecord]) -> Result<WrittenFile> {
        self.persist(records.len(), |file| write_records(file, records))
    }

    /// Write the component breakdown file.
    pub fn write_components(&self, rows: &[ComponentRow]) -> Result<WrittenFile> {
        self.persist(rows.len(), |file| write_components(file, rows))
    }

    fn persist<F>(&self, rows: usize, write: F) -> Result<WrittenFile>
    where
        F: FnOnce(&mut File) -> Result<()>,
    {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropped (and deleted) on every early return below
        let mut staged = stage_in(dir).map_err(|e| SeriesError::io(&self.path, e))?;
        if let Ok(existing) = fs::metadata(&self.path) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| SeriesError::io(&self.path, e))?;
        }
        write(staged.as_file_mut())?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| SeriesError::io(&self.path, e))?;
        staged
            .persist(&self.path)
            .map_err(|e| SeriesError::io(&self.path, e.error))?;

        let size = fs::metadata(&self.path)
            .map_err(|e| SeriesError::io(&self.path, e))?
            .len();

        info!(
            path = %self.path.display(),
            rows,
            size,
            "Series written to file"
        );

        Ok(WrittenFile {
            path: self.path.clone(),
            rows,
            size,
        })
    }
}

fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".volume").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the process umask on open
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

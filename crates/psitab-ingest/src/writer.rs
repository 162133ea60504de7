//! Tab-separated relation output
//!
//! The five relation tables are plain text files, one row per record,
//! fields tab-separated for bulk loading into a relational store. Every
//! row is prefixed with the batch-level source label and the file the
//! record came from. Absent and empty values are written as the bulk
//! copy null marker so column counts stay stable for naive
//! line-splitting consumers.

use crate::parser::{Record, Relation};
use psitab_common::Result;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Null marker understood by PostgreSQL COPY
const NULL_PLACEHOLDER: &str = "\\N";

/// Receiver of extracted records, appended in document order
pub trait RecordSink {
    fn append(&mut self, record: &Record) -> Result<()>;
}

/// In-memory sink, mainly for tests and embedding
impl RecordSink for Vec<Record> {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Append-only writer of the five relation files
pub struct TabWriter {
    source: String,
    file_label: String,
    files: HashMap<Relation, BufWriter<File>>,
    rows_written: u64,
}

impl TabWriter {
    /// Output path for one relation inside `directory`
    fn relation_path(directory: &Path, relation: Relation) -> PathBuf {
        directory.join(format!("{}.txt", relation.file_stem()))
    }

    /// Remove any previously written relation files.
    ///
    /// Must run before [`TabWriter::open`], which opens the files in
    /// append mode. Missing files and a missing directory are fine.
    pub fn reset_dir(directory: &Path) -> Result<()> {
        for relation in Relation::ALL {
            match std::fs::remove_file(Self::relation_path(directory, relation)) {
                Ok(()) => {},
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Create the output directory if needed and open all five relation
    /// files for appending
    pub fn open(directory: impl AsRef<Path>, source: impl Into<String>) -> Result<Self> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        let mut files = HashMap::new();
        for relation in Relation::ALL {
            let path = Self::relation_path(directory, relation);
            let handle = OpenOptions::new().append(true).create(true).open(&path)?;
            debug!(path = %path.display(), "Opened relation file");
            files.insert(relation, BufWriter::new(handle));
        }

        Ok(Self {
            source: source.into(),
            file_label: String::new(),
            files,
            rows_written: 0,
        })
    }

    /// Set the file label prefixed to every subsequent row
    pub fn begin_file(&mut self, label: impl Into<String>) {
        self.file_label = label.into();
    }

    /// Rows appended since the writer was opened
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    // Tabs and newlines would break the row structure
    fn sanitize(value: &str) -> String {
        value.replace(['\t', '\n', '\r'], " ")
    }

    fn render(field: Option<&str>) -> String {
        match field {
            Some(value) if !value.is_empty() => Self::sanitize(value),
            _ => NULL_PLACEHOLDER.to_string(),
        }
    }

    /// Append one record to its relation file
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let mut columns = Vec::with_capacity(3 + record.fields.len());
        columns.push(Self::render(Some(self.source.as_str())));
        columns.push(Self::render(Some(self.file_label.as_str())));
        columns.push(Self::render(Some(record.entry.as_str())));
        for field in &record.fields {
            columns.push(Self::render(field.as_deref()));
        }

        let file = self
            .files
            .get_mut(&record.relation)
            .ok_or_else(|| psitab_common::PsitabError::Config("writer not open".to_string()))?;
        writeln!(file, "{}", columns.join("\t"))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush and close all relation files
    pub fn close(mut self) -> Result<()> {
        for file in self.files.values_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

impl RecordSink for TabWriter {
    fn append(&mut self, record: &Record) -> Result<()> {
        TabWriter::append(self, record)
    }
}

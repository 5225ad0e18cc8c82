//! Delimited text output
//!
//! Each station becomes one line: thirteen fields, each followed by the field
//! delimiter. Sub-lists (location, tags) are joined with a comma, which the
//! configuration guarantees differs from the field delimiter. Missing fields
//! are written as empty strings.

use crate::crawler::StationRecord;
use crate::output::traits::{OutputError, OutputResult, RecordSink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator inside the location and tags fields
pub const LIST_SEPARATOR: &str = ",";

/// Formats a station as a single output line (without the newline)
///
/// Field order: name, email, location, likes, website, phone, facebook,
/// twitter, language, tags, additional info, source URL, description.
///
/// # Example
///
/// ```
/// use radio_harvest::crawler::StationRecord;
/// use radio_harvest::output::format_record;
///
/// let record = StationRecord {
///     name: Some("WXYZ".to_string()),
///     email: "studio@wxyz.example".to_string(),
///     tags: vec!["Rock".to_string(), "Pop".to_string()],
///     source_url: "https://radio.example.com/us/wxyz".to_string(),
///     ..StationRecord::default()
/// };
///
/// assert_eq!(
///     format_record(&record, '~'),
///     "WXYZ~studio@wxyz.example~~~~~~~~Rock,Pop~~https://radio.example.com/us/wxyz~~"
/// );
/// ```
pub fn format_record(record: &StationRecord, delimiter: char) -> String {
    let optional = |field: &Option<String>| field.clone().unwrap_or_default();

    let fields = [
        optional(&record.name),
        record.email.clone(),
        record.location.join(LIST_SEPARATOR),
        optional(&record.likes),
        optional(&record.website),
        optional(&record.phone),
        optional(&record.facebook),
        optional(&record.twitter),
        optional(&record.language),
        record.tags.join(LIST_SEPARATOR),
        optional(&record.additional_info),
        record.source_url.clone(),
        optional(&record.description),
    ];

    let mut line = String::new();
    for field in &fields {
        // A stray line break would split the record in two
        line.extend(field.chars().filter(|c| !matches!(c, '\r' | '\n')));
        line.push(delimiter);
    }
    line
}

/// Appends formatted records to a text file
pub struct DelimitedFileSink {
    file: File,
    path: PathBuf,
    delimiter: char,
}

impl DelimitedFileSink {
    /// Opens `path` for appending, creating it if absent
    pub fn open(path: &Path, delimiter: char) -> OutputResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| OutputError::Write(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            delimiter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for DelimitedFileSink {
    fn write_record(&mut self, record: &StationRecord) -> OutputResult<()> {
        let line = format_record(record, self.delimiter);
        writeln!(self.file, "{}", line)?;
        tracing::info!("✅ {}", line);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.file.flush()?;
        tracing::debug!("Closed {}", self.path.display());
        Ok(())
    }
}

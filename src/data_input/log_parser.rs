// src/data_input/log_parser.rs

use csv::{ReaderBuilder, Terminator, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::FIELD_DELIMITER;
use crate::error::{PlotterError, Result};

/// The raw text fields of one log line, before numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: u64, // 1-based source line.
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reads every line of the log as a comma-separated record.
///
/// There is no header row: the first line is data. Each line is a literal split
/// on commas (quotes are ordinary characters) with surrounding whitespace
/// stripped from every field; the record length is not checked here. An empty
/// line is a record with one empty field. The file handle lives only for the
/// duration of this call.
pub fn read_records(input_file_path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(input_file_path).map_err(|source| PlotterError::FileAccess {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    info!("Reading data rows from '{}'...", input_file_path.display());
    read_records_from(BufReader::new(file), input_file_path)
}

/// Same as [`read_records`] over an already opened source. `origin` only
/// names the source in errors.
pub fn read_records_from<R: Read>(mut source: R, origin: &Path) -> Result<Vec<RawRecord>> {
    let mut contents = Vec::new();
    source
        .read_to_end(&mut contents)
        .map_err(|source| PlotterError::FileAccess {
            path: origin.to_path_buf(),
            source,
        })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(None)
        .trim(Trim::All)
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(contents.as_slice());
    let mut rows = reader.records();

    // The csv reader yields one row per non-empty line and silently drops empty
    // ones, so empty lines are put back here with their own line number.
    let mut records = Vec::new();
    for (index, text) in source_lines(&contents).into_iter().enumerate() {
        let line = index as u64 + 1;
        if text.is_empty() {
            debug!("  line {}: empty", line);
            records.push(RawRecord::new(line, vec![String::new()]));
            continue;
        }
        let Some(result) = rows.next() else {
            break;
        };
        let record = result.map_err(|e| record_read_error(origin, line, e))?;
        debug!("  line {}: {} fields", line, record.len());
        records.push(RawRecord::new(
            line,
            record.iter().map(str::to_owned).collect(),
        ));
    }

    info!("Finished reading {} data rows.", records.len());
    Ok(records)
}

/// Splits the raw input on newlines. A single final newline ends the last
/// line rather than starting an empty one.
fn source_lines(contents: &[u8]) -> Vec<&[u8]> {
    if contents.is_empty() {
        return Vec::new();
    }
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    body.split(|&byte| byte == b'\n').collect()
}

fn record_read_error(origin: &Path, line: u64, err: csv::Error) -> PlotterError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PlotterError::FileAccess {
            path: origin.to_path_buf(),
            source,
        },
        csv::ErrorKind::Utf8 { err, .. } => PlotterError::MalformedRecord {
            line,
            field: err.field(),
            name: field_name(err.field()),
            value: String::new(),
            reason: "field is not valid UTF-8".to_string(),
        },
        _ => PlotterError::MalformedRecord {
            line,
            field: 0,
            name: field_name(0),
            value: String::new(),
            reason: message,
        },
    }
}

fn field_name(index: usize) -> &'static str {
    crate::constants::FIELD_NAMES
        .get(index)
        .copied()
        .unwrap_or("extra")
}

// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the plotter can hit. All of them end the run.
#[derive(Debug, Error)]
pub enum PlotterError {
    /// Invoked without the input file argument.
    #[error("Usage: pid_plotter.py <file.csv>")]
    Usage,

    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A field did not parse as its expected numeric type, or the record was too short.
    #[error("malformed record at line {line}, field {field} ({name}) = '{value}': {reason}")]
    MalformedRecord {
        line: u64,
        field: usize,
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The plotting backend failed (output file, encoder, fonts).
    #[error("rendering failed: {0}")]
    Render(String),
}

impl PlotterError {
    /// Process exit status for this error. Status 2 is left to clap for
    /// rejected flags.
    pub fn exit_code(&self) -> u8 {
        match self {
            PlotterError::Usage => 1,
            PlotterError::FileAccess { .. } => 3,
            PlotterError::MalformedRecord { .. } => 4,
            PlotterError::Render(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotterError>;

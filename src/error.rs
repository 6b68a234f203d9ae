use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Missing arguments: {usage}")]
    MissingArguments { usage: String },

    #[error("Output dir {0} doesn't exist")]
    OutputDirMissing(PathBuf),

    #[error("Cannot open file {path}: {source}")]
    OpenInput { path: PathBuf, source: csv::Error },

    #[error("Cannot create file {path}: {source}")]
    CreateOutput { path: PathBuf, source: csv::Error },

    #[error("Cannot read record: {0}")]
    Read(#[source] csv::Error),

    #[error("Malformed record on line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Cannot write to file: {0}")]
    Write(#[source] csv::Error),

    #[error("Cannot flush file: {0}")]
    Flush(#[source] io::Error),
}

impl ReportError {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ReportError::MissingArguments { .. } | ReportError::OutputDirMissing(_)
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration() {
            2
        } else {
            1
        }
    }
}

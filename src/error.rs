use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid storage path '{uri}': {reason}"))]
    InvalidPath { uri: String, reason: String },

    #[snafu(display("Local file not found: {}", path.display()))]
    LocalFileNotFound { path: PathBuf },

    #[snafu(display("Unsupported storage provider: {provider}"))]
    UnsupportedProvider { provider: String },

    #[snafu(display("CSV content has no header row"))]
    EmptyCsv,

    #[snafu(display("Row {row} has {found} field(s), expected {expected}"))]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[snafu(display("Failed to upload '{local_path}' to '{remote_path}': {source}"))]
    UploadFailed {
        local_path: String,
        remote_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to download '{remote_path}' to '{local_path}': {source}"))]
    DownloadFailed {
        remote_path: String,
        local_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to list '{path}': {source}"))]
    ListFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to read table from '{path}': {source}"))]
    ReadTableFailed { path: String, source: Box<Error> },

    #[snafu(display("Failed to write table to '{path}': {source}"))]
    WriteTableFailed { path: String, source: Box<Error> },

    #[snafu(display("Storage backend error: {source}"))]
    Backend { source: opendal::Error },

    #[snafu(display("CSV error: {source}"))]
    Parse { source: csv::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl Error {
    /// Follow the boxed sources of operation wrappers down to the error that
    /// actually caused the failure.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::UploadFailed { source, .. }
            | Error::DownloadFailed { source, .. }
            | Error::ListFailed { source, .. }
            | Error::ReadTableFailed { source, .. }
            | Error::WriteTableFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::Backend { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Parse { source: error }
    }
}

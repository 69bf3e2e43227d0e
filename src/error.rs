use thiserror::Error;

use std::path::PathBuf;

/// Errors that stop a report from being produced.
///
/// Problems with the data itself (short rows, non-numeric hours) are not
/// errors: they are absorbed while parsing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unknown report type: {0}")]
    UnknownReport(String),
}

#![doc = include_str!("../README.md")]
use anyhow::Result;
use tracing::debug;

use std::path::Path;

mod error;
mod record;
mod report;
mod table;
mod usd;

pub use error::Error;
pub use record::{FieldName, Record, Value};
pub use report::{
    generate_payout_report, select_report, Generator, PayoutReport, Registry, NO_DATA,
};
pub use table::{normalize_header, parse_table, read_table, to_records, RawTable};
pub use usd::Usd;

/// Checks that every path in `paths` names an existing file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] for the first path that isn't a file.
pub fn check_inputs<P: AsRef<Path>>(paths: &[P]) -> std::result::Result<(), Error> {
    match paths.iter().map(AsRef::as_ref).find(|p| !p.is_file()) {
        Some(missing) => Err(Error::FileNotFound(missing.to_path_buf())),
        None => Ok(()),
    }
}

/// Reads employee records from the CSV file at `path`.
///
/// # Errors
///
/// Returns any error from reading the file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let records = to_records(&read_table(path)?);
    debug!(path = %path.display(), records = records.len(), "read input file");
    Ok(records)
}

/// Reads employee records from each file in `paths`, in order, and returns
/// them all as a single list.
///
/// # Errors
///
/// Returns the first error from reading any of the files.
pub fn load_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_records(path)?);
    }
    Ok(records)
}

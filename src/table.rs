use anyhow::{Context, Result};

use std::{fs, path::Path};

use crate::record::{FieldName, Record, Value, HOURLY_RATE};

/// Header names treated as the hourly rate column.
const RATE_ALIASES: [&str; 3] = ["hourly_rate", "rate", "salary"];

const BOM: char = '\u{feff}';

/// Delimited text split into a header row and data rows.
///
/// Rows are kept exactly as split, whatever their width. Use [`to_records`]
/// to turn the table into [`Record`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Splits `raw` into a [`RawTable`].
///
/// The whole input is trimmed, then split into lines. The first line gives
/// the headers, and each following non-empty line gives one row. Fields are
/// split on every comma: there is no quoting, so a comma inside a field
/// shifts the remaining columns.
///
/// Empty input yields an empty table.
///
/// # Examples
///
/// ```
/// # use payout::parse_table;
/// let table = parse_table("id,name\n1,Ada\n\n2,Grace\n");
/// assert_eq!(table.headers, vec!["id", "name"]);
/// assert_eq!(table.rows.len(), 2);
/// ```
#[must_use]
pub fn parse_table(raw: &str) -> RawTable {
    let raw = raw.trim();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(raw.as_bytes());
    // The input is already valid UTF-8 and `flexible` allows any row width,
    // so the reader has nothing left to reject.
    let mut lines = rdr
        .records()
        .filter_map(|line| line.ok())
        .map(|line| line.iter().map(str::to_string).collect::<Vec<_>>());
    let Some(mut headers) = lines.next() else {
        return RawTable::default();
    };
    // csv drops a leading byte order mark; header names must stay as written.
    if raw.starts_with(BOM) {
        if let Some(first) = headers.first_mut() {
            if !first.starts_with(BOM) {
                first.insert(0, BOM);
            }
        }
    }
    RawTable {
        headers,
        rows: lines.collect(),
    }
}

/// Returns the canonical name for the column header `header`.
///
/// `hourly_rate`, `rate`, and `salary` all become `hourly_rate`. Any other
/// header is returned unchanged (no trimming, no case folding).
///
/// # Examples
///
/// ```
/// # use payout::normalize_header;
/// assert_eq!(normalize_header("salary").as_str(), "hourly_rate");
/// assert_eq!(normalize_header("Salary").as_str(), "Salary");
/// ```
#[must_use]
pub fn normalize_header(header: &str) -> FieldName {
    if RATE_ALIASES.contains(&header) {
        FieldName(HOURLY_RATE.to_string())
    } else {
        FieldName(header.to_string())
    }
}

/// Converts the rows of `table` into records.
///
/// A row whose width differs from the header row is skipped. Values in
/// numeric columns that don't parse as numbers are stored as zero. Neither
/// case is an error.
#[must_use]
pub fn to_records(table: &RawTable) -> Vec<Record> {
    if table.headers.is_empty() {
        return Vec::new();
    }
    let fields: Vec<FieldName> = table.headers.iter().map(|h| normalize_header(h)).collect();
    table
        .rows
        .iter()
        .filter(|row| row.len() == fields.len())
        .map(|row| {
            let mut record = Record::new();
            for (field, value) in fields.iter().zip(row) {
                let value = if field.is_numeric() {
                    Value::Number(parse_number(value))
                } else {
                    Value::Text(value.clone())
                };
                record.insert(field.clone(), value);
            }
            record
        })
        .collect()
}

/// Parses `s` as a number, or returns zero.
///
/// Surrounding whitespace is ignored, and single underscores between digits
/// are allowed as separators (`1_000`).
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    let parsed = if s.contains('_') {
        strip_digit_separators(s).and_then(|s| s.parse().ok())
    } else {
        s.parse().ok()
    };
    match parsed {
        Some(n) => n,
        None => 0.0,
    }
}

fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|c| c.is_ascii_digit())
                || !after.is_some_and(|c| c.is_ascii_digit())
            {
                return None;
            }
        }
    }
    Some(s.replace('_', ""))
}

/// Reads the file at `path` and splits it into a [`RawTable`].
///
/// # Errors
///
/// Returns any error from reading the file, including invalid UTF-8.
pub fn read_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("{}", path.display()))?;
    Ok(parse_table(&raw))
}

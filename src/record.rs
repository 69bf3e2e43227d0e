use std::{borrow::Borrow, collections::BTreeMap, fmt::Display};

/// Canonical name of the hours column.
pub const HOURS_WORKED: &str = "hours_worked";
/// Canonical name of the rate column, whatever it was called in the input.
pub const HOURLY_RATE: &str = "hourly_rate";
pub const NAME: &str = "name";
pub const DEPARTMENT: &str = "department";

/// Placeholder used when a record has no name or department.
pub const UNKNOWN: &str = "Unknown";

/// The canonical name of a column, after alias resolution.
///
/// Create one with [`crate::normalize_header`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldName(pub(crate) String);

impl FieldName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether values in this column are numbers rather than text.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.0 == HOURS_WORKED || self.0 == HOURLY_RATE
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

/// One employee, as read from one row of input.
///
/// Fields are keyed by their canonical [`FieldName`]. Numeric fields
/// (`hours_worked` and `hourly_rate`) hold [`Value::Number`]; everything else
/// is kept as text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<FieldName, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`, replacing any earlier value.
    pub fn insert(&mut self, field: FieldName, value: Value) {
        self.fields.insert(field, value);
    }

    /// Builder-style variant of [`Self::insert`], handy for constructing
    /// records by hand.
    ///
    /// ```
    /// # use payout::{normalize_header, Record, Value};
    /// let record = Record::new()
    ///     .with(normalize_header("name"), Value::Text("Ada".into()))
    ///     .with(normalize_header("rate"), Value::Number(50.0));
    /// assert_eq!(record.number("hourly_rate"), Some(50.0));
    /// ```
    #[must_use]
    pub fn with(mut self, field: FieldName, value: Value) -> Self {
        self.insert(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `field` as a number, if present and numeric.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Returns `field` as text, if present and textual.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Hours worked, or zero if the record has none.
    #[must_use]
    pub fn hours_worked(&self) -> f64 {
        self.number(HOURS_WORKED).unwrap_or(0.0)
    }

    /// Hourly rate, or zero if the record has none.
    #[must_use]
    pub fn hourly_rate(&self) -> f64 {
        self.number(HOURLY_RATE).unwrap_or(0.0)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.text(NAME).unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn department(&self) -> &str {
        self.text(DEPARTMENT).unwrap_or(UNKNOWN)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldName {
        FieldName(name.to_string())
    }

    #[test]
    fn is_numeric_fn_is_true_only_for_hours_and_rate() {
        assert!(field("hours_worked").is_numeric());
        assert!(field("hourly_rate").is_numeric());
        assert!(!field("name").is_numeric());
        assert!(!field("rate").is_numeric());
    }

    #[test]
    fn accessors_fall_back_to_defaults_for_missing_fields() {
        let record = Record::new();
        assert_eq!(record.name(), "Unknown");
        assert_eq!(record.department(), "Unknown");
        assert_eq!(record.hours_worked(), 0.0);
        assert_eq!(record.hourly_rate(), 0.0);
    }

    #[test]
    fn accessors_return_stored_values() {
        let record = Record::new()
            .with(field("name"), Value::Text("Ada".into()))
            .with(field("department"), Value::Text("R&D".into()))
            .with(field("hours_worked"), Value::Number(12.5))
            .with(field("hourly_rate"), Value::Number(80.0));
        assert_eq!(record.name(), "Ada");
        assert_eq!(record.department(), "R&D");
        assert_eq!(record.hours_worked(), 12.5);
        assert_eq!(record.hourly_rate(), 80.0);
    }

    #[test]
    fn empty_department_is_kept_rather_than_defaulted() {
        let record = Record::new().with(field("department"), Value::Text(String::new()));
        assert_eq!(record.department(), "");
    }

    #[test]
    fn insert_fn_replaces_earlier_value() {
        let mut record = Record::new();
        record.insert(field("hourly_rate"), Value::Number(10.0));
        record.insert(field("hourly_rate"), Value::Number(20.0));
        assert_eq!(record.hourly_rate(), 20.0);
        assert_eq!(record.fields().count(), 1);
    }
}

use std::{
    collections::BTreeMap,
    fmt::{Debug, Display},
};

use crate::{error::Error, record::Record, usd::Usd};

/// Text produced in place of a report when there are no records.
pub const NO_DATA: &str = "No data available for report.";

/// A function that renders a report from a set of records.
pub type Generator = fn(&[Record]) -> String;

/// Maps report type names to the functions that generate them.
///
/// [`Registry::default`] knows every built-in report type. New report types
/// can be added with [`Registry::register`].
///
/// # Examples
///
/// ```
/// # use payout::{Record, Registry};
/// fn headcount(records: &[Record]) -> String {
///     format!("{} employees", records.len())
/// }
///
/// let mut registry = Registry::default();
/// registry.register("headcount", headcount);
/// let generate = registry.get("headcount").unwrap();
/// assert_eq!(generate(&[]), "0 employees");
/// ```
#[derive(Clone)]
pub struct Registry {
    generators: BTreeMap<String, Generator>,
}

impl Registry {
    /// Creates a registry with no report types at all.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Registers `generator` under `name`, replacing any existing entry of
    /// that name.
    pub fn register(&mut self, name: impl Into<String>, generator: Generator) -> &mut Self {
        self.generators.insert(name.into(), generator);
        self
    }

    /// Returns the generator registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownReport`] if there is no such report type.
    pub fn get(&self, name: &str) -> Result<Generator, Error> {
        self.generators
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownReport(name.to_string()))
    }

    /// Returns the registered report type names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("payout", generate_payout_report);
        registry
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Looks up the built-in report type `name`.
///
/// # Errors
///
/// Returns [`Error::UnknownReport`] if `name` isn't a known report type.
pub fn select_report(name: &str) -> Result<Generator, Error> {
    Registry::default().get(name)
}

/// Renders the payout report for `records`.
///
/// See [`PayoutReport`] for the layout.
#[must_use]
pub fn generate_payout_report(records: &[Record]) -> String {
    PayoutReport::new(records).to_string()
}

#[derive(Debug, Default)]
struct Department<'a> {
    employees: Vec<&'a Record>,
    hours: f64,
    payout: Usd,
}

/// Hours and pay per employee, grouped by department.
///
/// Departments are listed in alphabetical order, and employees within a
/// department in the order they were read. Records with no department are
/// grouped under `Unknown`. Each department ends with a subtotal line, and the
/// report ends with the grand totals for hours and payout.
///
/// Hours, rates, and payouts are all displayed rounded to whole numbers.
///
/// To get the text of the report, use its [`Display`] implementation.
#[derive(Debug)]
pub struct PayoutReport<'a> {
    departments: BTreeMap<&'a str, Department<'a>>,
    total_hours: f64,
    total_payout: Usd,
}

impl<'a> PayoutReport<'a> {
    #[must_use]
    pub fn new(records: &'a [Record]) -> Self {
        let mut departments: BTreeMap<&str, Department> = BTreeMap::new();
        for record in records {
            let dept = departments.entry(record.department()).or_default();
            dept.employees.push(record);
            dept.hours += record.hours_worked();
            dept.payout += payout(record);
        }
        let mut total_hours = 0.0;
        let mut total_payout = Usd::default();
        for dept in departments.values() {
            total_hours += dept.hours;
            total_payout += dept.payout;
        }
        Self {
            departments,
            total_hours,
            total_payout,
        }
    }

    /// Returns department names in the order they appear in the report.
    pub fn departments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.departments.keys().copied()
    }

    /// Returns the total hours and payout for department `name`, if any.
    #[must_use]
    pub fn subtotal(&self, name: &str) -> Option<(f64, Usd)> {
        self.departments.get(name).map(|d| (d.hours, d.payout))
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    #[must_use]
    pub fn total_payout(&self) -> Usd {
        self.total_payout
    }
}

fn payout(record: &Record) -> Usd {
    Usd::from(record.hours_worked() * record.hourly_rate())
}

impl Display for PayoutReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.departments.is_empty() {
            return f.write_str(NO_DATA);
        }
        writeln!(
            f,
            "{:30} {:>8} {:>8} {:>10}",
            "name", "hours", "rate", "payout"
        )?;
        for (name, dept) in &self.departments {
            writeln!(f, "{name}")?;
            for employee in &dept.employees {
                writeln!(
                    f,
                    "-------------- {:20} {:8.0} {:8.0} {:9}",
                    employee.name(),
                    employee.hours_worked(),
                    employee.hourly_rate(),
                    payout(employee),
                )?;
            }
            writeln!(f, "{:45} {:8.0} {:8} {:8}", "", dept.hours, "", dept.payout)?;
        }
        writeln!(f)?;
        writeln!(f, "Total hours: {:.0}", self.total_hours)?;
        write!(f, "Total payout: {}", self.total_payout)
    }
}

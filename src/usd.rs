use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::AddAssign,
};

/// Represents an amount of money in USD currency.
///
/// The [`Display`] implementation rounds to whole dollars and prefixes a `$`.
/// A width given in the format string applies to the digits, not the `$`, so
/// `format!("{:6}", Usd::from(42.0))` gives `"$    42"`.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }
}

impl From<f64> for Usd {
    fn from(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(f, "${:width$.0}", self.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

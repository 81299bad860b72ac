//! Parsed carbon-emission values.

use std::cmp::Ordering;
use std::fmt;

/// A carbon-emission quantity as used for ranking.
///
/// Values that cannot be parsed to a finite number are held as `+inf` so
/// they sort after every valid value. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission(f64);

impl Emission {
    /// Sentinel for unparseable input.
    pub const UNRANKABLE: Emission = Emission(f64::INFINITY);

    /// Wrap an already-numeric value. Non-finite values become
    /// [`Emission::UNRANKABLE`].
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Emission(value)
        } else {
            Self::UNRANKABLE
        }
    }

    /// Parse the text-encoded emission carried by a user record.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// decimal number (empty, `"abc"`, `"NaN"`, `"inf"`, `"5kg"`) yields
    /// [`Emission::UNRANKABLE`].
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::UNRANKABLE)
    }

    /// The numeric value, `+inf` when unrankable.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the source text parsed to a finite number.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }

    /// Ascending order used for ranking. `-0.0` and `0.0` compare equal so
    /// that they fall back to input order.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "n/a")
        }
    }
}

impl serde::Serialize for Emission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_valid() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

//! Built-in functions
//!
//! Only two families exist: the range aggregates (SUM, AVERAGE, MIN, MAX) and
//! the single-cell SQRT. Names are matched case-insensitively.

pub mod math;
pub mod statistical;

use std::fmt;

/// Aggregate functions applied to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Sum,
    Average,
    Min,
    Max,
}

impl Aggregate {
    /// All aggregates, in lookup order
    pub const ALL: [Aggregate; 4] = [
        Aggregate::Sum,
        Aggregate::Average,
        Aggregate::Min,
        Aggregate::Max,
    ];

    /// Look up an aggregate by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(name))
    }

    /// Function name (uppercase)
    pub fn name(&self) -> &'static str {
        match self {
            Aggregate::Sum => "SUM",
            Aggregate::Average => "AVERAGE",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }

    /// Apply the aggregate to the numeric members of a range
    ///
    /// `None` means the aggregate is undefined for an empty input; SUM is
    /// always defined.
    pub fn apply(&self, numbers: &[f64]) -> Option<f64> {
        match self {
            Aggregate::Sum => Some(statistical::fn_sum(numbers)),
            Aggregate::Average => statistical::fn_average(numbers),
            Aggregate::Min => statistical::fn_min(numbers),
            Aggregate::Max => statistical::fn_max(numbers),
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the single-cell square root function
pub const SQRT: &str = "SQRT";

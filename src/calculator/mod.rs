//! Δ% calculation.
//!
//! The delta percent of two values is `(1 - smaller/larger) × 100`, where `smaller` and `larger`
//! are magnitudes: signs never take part in the comparison.

use std::fmt::{Display, Formatter};

/// Result of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta {
    /// Both values are zero (of any sign), there is no base to compare with.
    BothZero,
    Ratio(Ratio),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    /// Larger magnitude, the base of comparison.
    pub larger: f64,
    pub smaller: f64,
    /// How much smaller `smaller` is relative to `larger`, in percent.
    pub percent: f64,
}

impl Ratio {
    /// Share of the larger value that the smaller one makes up, in percent.
    pub fn complement(&self) -> f64 {
        100.0 - self.percent
    }
}

/// Compare two finite values.
pub fn calculate(val1: f64, val2: f64) -> Delta {
    if val1 == 0.0 && val2 == 0.0 {
        return Delta::BothZero;
    }

    let (larger, smaller) = if val1.abs() > val2.abs() {
        (val1.abs(), val2.abs())
    } else {
        (val2.abs(), val1.abs())
    };

    Delta::Ratio(Ratio {
        larger,
        smaller,
        percent: (1.0 - smaller / larger) * 100.0,
    })
}

impl Display for Delta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Delta::BothZero => f.write_str("Both values are zero"),
            Delta::Ratio(ratio) => ratio.fmt(f),
        }
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Larger value: {:.4}", self.larger)?;
        writeln!(f, "Smaller value: {:.4}", self.smaller)?;
        writeln!(f, "Δ% = {:.2}%", self.percent)?;
        writeln!(
            f,
            "The smaller value is {:.2}% of the larger value",
            self.complement()
        )?;
        writeln!(f)?;
        write!(
            f,
            "Formula: Δ% = (1 - {:.4}/{:.4}) × 100",
            self.smaller, self.larger
        )
    }
}

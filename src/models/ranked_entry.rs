use crate::types::Frequency;
use std::fmt;

/// One line of a top-K report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub label: String,
    pub count: Frequency,
    /// Share of all certified applications, in percent. Rendered with one decimal digit.
    pub percentage: f64,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{:.1}%", self.label, self.count, self.percentage)
    }
}

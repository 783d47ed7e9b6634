//! Read-only aggregation over a roster snapshot.
//!
//! Works on the record list exported by the repository and holds no
//! state of its own.

use crate::model::Record;

/// Aggregate figures for a set of records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total: usize,
    pub avg_age: f64,
    pub avg_salary: f64,
    pub men: usize,
    pub women: usize,
    /// Records with a blank gender field (legacy rows).
    pub unspecified: usize,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let total = records.len();
        let avg_age = records.iter().map(|r| r.age as f64).sum::<f64>() / total as f64;
        let avg_salary = records.iter().map(|r| r.salary).sum::<f64>() / total as f64;
        Self {
            total,
            avg_age,
            avg_salary,
            men: records.iter().filter(|r| r.gender == "M").count(),
            women: records.iter().filter(|r| r.gender == "F").count(),
            unspecified: records
                .iter()
                .filter(|r| r.gender.trim().is_empty())
                .count(),
        }
    }
}

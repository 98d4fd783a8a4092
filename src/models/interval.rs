use chrono::NaiveDate;
use serde::Serialize;

/// A closed date range covered by an approved leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveInterval {
    pub start: NaiveDate, // inclusive
    pub end: NaiveDate,   // inclusive
    pub kind: String,     // ⇔ leave_type ('VACATION', 'SICK', ...)
}

impl LeaveInterval {
    pub fn new(start: NaiveDate, end: NaiveDate, kind: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind: kind.into(),
        }
    }

    /// `end >= start`. A malformed interval never contains any date.
    pub fn is_well_formed(&self) -> bool {
        self.end >= self.start
    }

    /// Inclusive containment on both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True if at least one day of the interval falls in `[first, last]`.
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        self.is_well_formed() && self.start <= last && self.end >= first
    }

    /// Number of calendar days covered (0 for malformed bounds).
    pub fn len_days(&self) -> i64 {
        if self.is_well_formed() {
            (self.end - self.start).num_days() + 1
        } else {
            0
        }
    }
}

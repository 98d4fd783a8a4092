use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// The month currently displayed. `month` is 0-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Build a cursor from a year and an arbitrary month offset,
    /// carrying overflow into the year (`month = 12` → next January).
    ///
    /// Saturates at the ends of `i32` years: past December of `i32::MAX`
    /// stays there, before January of `i32::MIN` stays there.
    pub fn normalized(year: i32, month: i64) -> Self {
        let lowest = i32::MIN as i64 * 12;
        let highest = i32::MAX as i64 * 12 + 11;
        let total = (year as i64 * 12).saturating_add(month).clamp(lowest, highest);
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn from_date(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month0(),
        }
    }

    /// Parse `YYYY-MM` (1-based month, as typed by users).
    pub fn parse(s: &str) -> AppResult<Self> {
        let re = Regex::new(r"^(-?\d{1,6})-(\d{1,2})$")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let caps = re
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(s.to_string()));
        }

        Ok(Self {
            year,
            month: month - 1,
        })
    }

    /// Calendar month number, 1..=12.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.advance(1).first_day()?.pred_opt()
    }

    pub fn advance(self, delta: i32) -> Self {
        advance_month(self, delta)
    }

    pub fn previous(self) -> Self {
        advance_month(self, -1)
    }

    pub fn next(self) -> Self {
        advance_month(self, 1)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_number())
    }
}

/// Move the cursor by `delta` months, wrapping across year boundaries.
///
/// `advance_month(advance_month(c, a), b) == advance_month(c, a + b)` as long
/// as the year stays inside `i32`; beyond that the cursor saturates.
pub fn advance_month(cursor: MonthCursor, delta: i32) -> MonthCursor {
    MonthCursor::normalized(cursor.year, cursor.month as i64 + delta as i64)
}

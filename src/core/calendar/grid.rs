use super::cursor::MonthCursor;
use crate::models::day_cell::DayCell;
use crate::models::interval::LeaveInterval;
use chrono::{Datelike, NaiveDate};

/// Columns of the grid, Monday first.
pub const WEEK_LEN: usize = 7;

/// Number of padding cells before the 1st so that it lands in its weekday
/// column (Monday = 0 … Sunday = 6).
///
/// `month` is 0-based; values outside 0..=11 are carried into the year.
pub fn leading_blank_count(year: i32, month: u32) -> u32 {
    let cursor = MonthCursor::normalized(year, month as i64);
    match cursor.first_day() {
        // native index counts from Sunday = 0; shift so Monday = 0
        Some(first) => (first.weekday().num_days_from_sunday() + 6) % 7,
        None => 0,
    }
}

/// Length of the month, taken as the day before the 1st of the next month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = MonthCursor::normalized(year, month as i64 + 1);
    next.first_day()
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Label of the first interval containing `date`, in input order.
fn first_match(date: NaiveDate, intervals: &[LeaveInterval]) -> Option<&LeaveInterval> {
    intervals
        .iter()
        .filter(|iv| iv.is_well_formed())
        .find(|iv| iv.contains(date))
}

/// Build the day cells for `cursor`: leading blanks, then one cell per day.
///
/// Pure: same inputs, same output. `today` is taken once by the caller.
/// A month outside 0..=11 is carried into the year first.
pub fn build_grid(cursor: &MonthCursor, intervals: &[LeaveInterval], today: NaiveDate) -> Vec<DayCell> {
    let cursor = MonthCursor::normalized(cursor.year, cursor.month as i64);
    let blanks = leading_blank_count(cursor.year, cursor.month);
    let days = days_in_month(cursor.year, cursor.month);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| DayCell::blank()));

    let Some(first) = cursor.first_day() else {
        return cells;
    };

    for (offset, date) in first.iter_days().take(days as usize).enumerate() {
        let day = offset as u32 + 1;

        let is_today = today.year() == cursor.year
            && today.month0() == cursor.month
            && today.day() == day;

        let hit = first_match(date, intervals);

        cells.push(DayCell {
            day_number: day,
            is_current_month: true,
            is_today,
            has_event: hit.is_some(),
            event_label: hit.map(|iv| iv.kind.clone()).unwrap_or_default(),
        });
    }

    cells
}

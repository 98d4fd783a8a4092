use crate::core::calendar::{MonthCursor, WEEK_LEN, build_grid};
use crate::models::day_cell::DayCell;
use crate::models::interval::LeaveInterval;
use crate::models::leave::LeaveRecord;
use crate::source::admissible_intervals;
use chrono::NaiveDate;

/// Everything a view needs to draw one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub cursor: MonthCursor,
    pub today: NaiveDate,
    pub cells: Vec<DayCell>,
    /// Approved intervals touching this month, in source order (legend).
    pub visible: Vec<LeaveInterval>,
    pub skipped: usize,
}

impl MonthView {
    /// Cells in rows of seven; the last row may be shorter.
    pub fn weeks(&self) -> Vec<&[DayCell]> {
        self.cells.chunks(WEEK_LEN).collect()
    }

    pub fn event_days(&self) -> usize {
        self.cells.iter().filter(|c| c.has_event).count()
    }

    /// Real day cells paired with their date.
    pub fn dated_cells(&self) -> Vec<(NaiveDate, &DayCell)> {
        let Some(first) = self.cursor.first_day() else {
            return Vec::new();
        };
        self.cells
            .iter()
            .filter(|c| c.is_current_month)
            .zip(first.iter_days())
            .map(|(c, d)| (d, c))
            .collect()
    }
}

pub struct Core;

impl Core {
    pub fn build_month_view(
        cursor: MonthCursor,
        records: &[LeaveRecord],
        today: NaiveDate,
    ) -> MonthView {
        let admissible = admissible_intervals(records);
        let cells = build_grid(&cursor, &admissible.intervals, today);

        let visible = match (cursor.first_day(), cursor.last_day()) {
            (Some(first), Some(last)) => admissible
                .intervals
                .iter()
                .filter(|iv| iv.overlaps(first, last))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        MonthView {
            cursor,
            today,
            cells,
            visible,
            skipped: admissible.skipped,
        }
    }
}

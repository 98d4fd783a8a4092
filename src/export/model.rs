// src/export/model.rs

use crate::core::logic::MonthView;
use crate::utils::date::weekday_short;
use serde::Serialize;

/// One exported row per real day of the month.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub day: u32,
    pub weekday: String,
    pub is_today: bool,
    pub has_event: bool,
    pub event_label: String,
}

pub(crate) fn view_to_rows(view: &MonthView) -> Vec<DayExport> {
    view.dated_cells()
        .into_iter()
        .map(|(date, cell)| DayExport {
            date: date.format("%Y-%m-%d").to_string(),
            day: cell.day_number,
            weekday: weekday_short(date).to_string(),
            is_today: cell.is_today,
            has_event: cell.has_event,
            event_label: cell.event_label.clone(),
        })
        .collect()
}

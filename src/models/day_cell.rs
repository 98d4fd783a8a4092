use serde::Serialize;

/// One cell of the month grid.
///
/// Padding cells (`is_current_month == false`) carry `day_number == 0` and
/// never have events or the today flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub has_event: bool,
    pub event_label: String,
}

impl DayCell {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        !self.is_current_month
    }
}

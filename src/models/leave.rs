use super::interval::LeaveInterval;
use super::leave_status::LeaveStatus;
use crate::utils::date::parse_date;
use serde::{Deserialize, Serialize};

/// A leave request as returned by `GET /api/leaves/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: i64,
    #[serde(default)]
    pub employee: Option<i64>,
    #[serde(default)]
    pub employee_full_name: Option<String>,
    pub leave_type: String, // ⇔ leave.leave_type (VACATION / SICK / PERSONAL / OTHER)
    pub start_date: String, // ⇔ leave.start_date (TEXT "YYYY-MM-DD")
    pub end_date: String,   // ⇔ leave.end_date   (TEXT "YYYY-MM-DD")
    pub status: String,     // ⇔ leave.status     (PENDING / APPROVED / ...)
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub approved_by_username: Option<String>,
}

impl LeaveRecord {
    pub fn parsed_status(&self) -> Option<LeaveStatus> {
        LeaveStatus::from_code(&self.status)
    }

    pub fn is_admissible(&self) -> bool {
        self.parsed_status()
            .map(|s| s.is_admissible())
            .unwrap_or(false)
    }

    /// Interval for the calendar overlay.
    ///
    /// `None` when the record is not approved or when either date does not
    /// parse as `YYYY-MM-DD`.
    pub fn to_interval(&self) -> Option<LeaveInterval> {
        if !self.is_admissible() {
            return None;
        }
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        Some(LeaveInterval::new(start, end, self.leave_type.clone()))
    }

    pub fn employee_label(&self) -> String {
        match (&self.employee_full_name, self.employee) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => format!("#{id}"),
            _ => "-".to_string(),
        }
    }
}

use super::LeaveQuery;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveRecord;
use std::fs;
use std::path::PathBuf;

/// Leave records saved from `GET /api/leaves/` (a JSON array).
pub struct JsonLeaveSource {
    path: PathBuf,
}

impl JsonLeaveSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LeaveQuery for JsonLeaveSource {
    fn fetch_leaves(&mut self) -> AppResult<Vec<LeaveRecord>> {
        if !self.path.exists() {
            return Err(AppError::Source(format!(
                "leaves file not found: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path)?;
        let records: Vec<LeaveRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }
}

use super::LeaveQuery;
use super::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveRecord;
use rusqlite::Row;
use std::path::Path;

/// Table names of the backend (app `app_system`).
const LEAVE_TABLE: &str = "app_system_leave";
const EMPLOYEE_TABLE: &str = "app_system_employee";
/// Django's user table, holds the approver's username.
const USER_TABLE: &str = "auth_user";

/// Reads leaves straight from the backend's SQLite database.
pub struct SqliteLeaveSource {
    path: String,
}

impl SqliteLeaveSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

fn map_row(row: &Row) -> rusqlite::Result<LeaveRecord> {
    Ok(LeaveRecord {
        id: row.get("id")?,
        employee: row.get("employee_id")?,
        employee_full_name: row.get("employee_full_name")?,
        leave_type: row.get("leave_type")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        status: row.get("status")?,
        reason: row.get("reason")?,
        approved_by_username: row.get("approved_by_username")?,
    })
}

impl LeaveQuery for SqliteLeaveSource {
    fn fetch_leaves(&mut self) -> AppResult<Vec<LeaveRecord>> {
        if !Path::new(&self.path).exists() {
            return Err(AppError::Source(format!("database not found: {}", self.path)));
        }

        let pool = DbPool::open_read_only(&self.path)?;

        if !pool.table_exists(LEAVE_TABLE)? {
            return Err(AppError::Source(format!(
                "table '{LEAVE_TABLE}' not found in {}",
                self.path
            )));
        }

        // employee names and approvers are optional: older dumps only carry the leave table
        let (employee_col, employee_join) = if pool.table_exists(EMPLOYEE_TABLE)? {
            (
                "e.first_name || ' ' || e.last_name",
                format!("LEFT JOIN {EMPLOYEE_TABLE} e ON e.id = l.employee_id"),
            )
        } else {
            ("NULL", String::new())
        };

        let (approver_col, approver_join) = if pool.table_exists(USER_TABLE)? {
            (
                "u.username",
                format!("LEFT JOIN {USER_TABLE} u ON u.id = l.approved_by_id"),
            )
        } else {
            ("NULL", String::new())
        };

        let sql = format!(
            "SELECT l.id, l.employee_id, l.leave_type, l.start_date, l.end_date,
                    l.status, l.reason,
                    {employee_col} AS employee_full_name,
                    {approver_col} AS approved_by_username
             FROM {LEAVE_TABLE} l
             {employee_join}
             {approver_join}
             ORDER BY l.start_date DESC, l.id ASC"
        );

        let records = pool.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], map_row)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })?;

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("SQLite database {}", self.path)
    }
}

//! Leave query collaborators: where leave records come from.

pub mod json;
pub mod pool;
pub mod sqlite;

pub use json::JsonLeaveSource;
pub use sqlite::SqliteLeaveSource;

use crate::config::{Config, SourceKind};
use crate::errors::AppResult;
use crate::models::interval::LeaveInterval;
use crate::models::leave::LeaveRecord;
use crate::utils::path::expand_tilde;

/// Anything able to return the leave records visible to the current user.
pub trait LeaveQuery {
    fn fetch_leaves(&mut self) -> AppResult<Vec<LeaveRecord>>;

    /// Human readable origin, used in messages.
    fn describe(&self) -> String;
}

/// Pick the source configured in `cfg`.
pub fn open_source(cfg: &Config) -> Box<dyn LeaveQuery> {
    match cfg.source {
        SourceKind::Json => Box::new(JsonLeaveSource::new(expand_tilde(&cfg.leaves_file))),
        SourceKind::Sqlite => Box::new(SqliteLeaveSource::new(
            expand_tilde(&cfg.database).to_string_lossy().to_string(),
        )),
    }
}

/// Result of filtering raw records down to calendar intervals.
#[derive(Debug, Default, Clone)]
pub struct Admissible {
    pub intervals: Vec<LeaveInterval>,
    /// Approved records that could not be used (bad dates or end < start).
    pub skipped: usize,
}

/// Keep approved records only, preserving their order.
pub fn admissible_intervals(records: &[LeaveRecord]) -> Admissible {
    let mut out = Admissible::default();

    for rec in records.iter().filter(|r| r.is_admissible()) {
        match rec.to_interval() {
            Some(iv) if iv.is_well_formed() => out.intervals.push(iv),
            _ => out.skipped += 1,
        }
    }

    out
}

pub mod config;
pub mod export;
pub mod init;
pub mod leaves;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calendar::MonthCursor;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveRecord;
use crate::source::open_source;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// "today" for this invocation, read once.
pub(crate) fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    date::resolve_today(&cli.today).map_err(AppError::InvalidDate)
}

/// `--month YYYY-MM` or the month containing `today`.
pub(crate) fn resolve_cursor(month: &Option<String>, today: NaiveDate) -> AppResult<MonthCursor> {
    match month {
        Some(m) => MonthCursor::parse(m),
        None => Ok(MonthCursor::from_date(today)),
    }
}

pub(crate) fn fetch_records(cfg: &Config) -> AppResult<Vec<LeaveRecord>> {
    let mut source = open_source(cfg);
    source.fetch_leaves()
}

/// Like `fetch_records`, but a failing source only produces a warning and
/// an empty list so the calendar still renders.
pub(crate) fn fetch_records_or_empty(cfg: &Config) -> Vec<LeaveRecord> {
    let mut source = open_source(cfg);
    match source.fetch_leaves() {
        Ok(records) => records,
        Err(e) => {
            warning(format!(
                "Could not load leaves from {}: {e}",
                source.describe()
            ));
            Vec::new()
        }
    }
}

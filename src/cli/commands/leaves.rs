use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::MonthCursor;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveRecord;
use crate::models::leave_status::LeaveStatus;
use crate::utils::colors::{color_for_status, paint};
use crate::utils::date::parse_date;
use crate::utils::formatting::describe_leave_type;
use crate::utils::table::{Column, Table};

use super::fetch_records;

const REASON_W: usize = 32;

/// Handle the `leaves` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Leaves { status, month } = &cli.command {
        let wanted = match status {
            Some(s) => Some(
                LeaveStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
            ),
            None => None,
        };

        let window = match month {
            Some(m) => Some(MonthCursor::parse(m)?),
            None => None,
        };

        let records = fetch_records(cfg)?;
        let selected: Vec<&LeaveRecord> = records
            .iter()
            .filter(|r| wanted.is_none() || r.parsed_status() == wanted)
            .filter(|r| window.is_none_or(|w| touches_month(r, &w)))
            .collect();

        if selected.is_empty() {
            println!("No leaves found.");
            return Ok(());
        }

        print!("{}", render_table(&selected, cfg.color));
        println!(
            "\n{} leave(s), {} approved",
            selected.len(),
            selected.iter().filter(|r| r.is_admissible()).count()
        );
    }
    Ok(())
}

/// Records with unparseable dates are kept out of month filters.
fn touches_month(rec: &LeaveRecord, cursor: &MonthCursor) -> bool {
    let (Some(start), Some(end)) = (parse_date(&rec.start_date), parse_date(&rec.end_date)) else {
        return false;
    };
    let (Some(first), Some(last)) = (cursor.first_day(), cursor.last_day()) else {
        return false;
    };
    start <= last && end >= first
}

/// Backend code of a known status, the raw value otherwise.
fn status_code(rec: &LeaveRecord) -> String {
    rec.parsed_status()
        .map(|s| s.code().to_string())
        .unwrap_or_else(|| rec.status.clone())
}

fn render_table(records: &[&LeaveRecord], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("EMPLOYEE", 22),
        Column::new("TYPE", 15),
        Column::new("FROM", 10),
        Column::new("TO", 10),
        Column::new("STATUS", 9),
        Column::new("APPROVED BY", 12),
        Column::new("REASON", REASON_W),
    ]);

    for rec in records {
        let (type_label, _) = describe_leave_type(&rec.leave_type);
        let reason = rec.reason.clone().unwrap_or_default();
        let mut lines = textwrap::wrap(&reason, REASON_W).into_iter();

        table.add_row(vec![
            rec.id.to_string(),
            rec.employee_label(),
            type_label,
            rec.start_date.clone(),
            rec.end_date.clone(),
            paint(&status_code(rec), color_for_status(&rec.status), color),
            rec.approved_by_username.clone().unwrap_or_else(|| "-".into()),
            lines.next().map(|l| l.into_owned()).unwrap_or_default(),
        ]);

        // continuation lines of a long reason
        for line in lines {
            let mut row = vec![String::new(); 7];
            row.push(line.into_owned());
            table.add_row(row);
        }
    }

    table.render()
}

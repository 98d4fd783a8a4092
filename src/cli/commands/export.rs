use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::absolutize;

use super::{fetch_records, resolve_cursor, resolve_today};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = &cli.command
    {
        let today = resolve_today(cli)?;
        let cursor = resolve_cursor(month, today)?;

        // unlike `show`, an export with a broken source is an error
        let records = fetch_records(cfg)?;
        let view = Core::build_month_view(cursor, &records, today);

        info(format!(
            "Month {cursor}: {} day(s) with leave, format {}",
            view.event_days(),
            format.as_str()
        ));

        let out = absolutize(file)?;
        ExportLogic::export(&view, format, &out.to_string_lossy(), *force)?;
    }
    Ok(())
}

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::render::render_month;
use crate::errors::AppResult;
use crate::ui::messages::warning;

use super::{fetch_records_or_empty, resolve_cursor, resolve_today};

/// Handle the `show` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        prev,
        next,
        plain,
    } = &cli.command
    {
        let today = resolve_today(cli)?;
        let delta = *next as i64 - *prev as i64;
        let cursor = resolve_cursor(month, today)?
            .advance(delta.clamp(i32::MIN as i64, i32::MAX as i64) as i32);

        let records = fetch_records_or_empty(cfg);
        let view = Core::build_month_view(cursor, &records, today);

        if view.skipped > 0 {
            warning(format!(
                "{} approved leave(s) ignored: invalid or reversed dates",
                view.skipped
            ));
        }

        let color = cfg.color && !*plain;
        print!("{}", render_month(&view, cfg.locale, color));
    }
    Ok(())
}

//! Terminal rendering of a month view.

use crate::config::Locale;
use crate::core::calendar::WEEK_LEN;
use crate::core::logic::MonthView;
use crate::models::day_cell::DayCell;
use crate::utils::colors::{paint, visible_width};
use crate::utils::formatting::{describe_leave_type, month_name, pad_right, weekday_headers};
use ansi_term::{Colour, Style};

/// Terminal columns per day cell: `[15]*`
const CELL_W: usize = 5;

/// Plain cell text: brackets mark today, `*` marks a leave day.
fn cell_text(cell: &DayCell) -> String {
    if cell.is_blank() {
        return " ".repeat(CELL_W);
    }

    let (open, close) = if cell.is_today { ('[', ']') } else { (' ', ' ') };
    let mark = if cell.has_event { '*' } else { ' ' };
    format!("{open}{:>2}{close}{mark}", cell.day_number)
}

fn render_cell(cell: &DayCell, color: bool) -> String {
    let text = cell_text(cell);
    if !color || cell.is_blank() {
        return text;
    }

    if cell.is_today {
        let style = if cell.has_event {
            Style::new().bold().reverse().fg(Colour::Green)
        } else {
            Style::new().bold().reverse()
        };
        return style.paint(text).to_string();
    }

    if cell.has_event {
        let (_, ansi) = describe_leave_type(&cell.event_label);
        return paint(&text, ansi, true);
    }

    text
}

pub fn title(view: &MonthView, locale: Locale) -> String {
    format!(
        "{} {}",
        month_name(locale, view.cursor.month),
        view.cursor.year
    )
}

/// Render title, Mon..Sun header, the grid and a legend of visible leaves.
pub fn render_month(view: &MonthView, locale: Locale, color: bool) -> String {
    let grid_w = CELL_W * WEEK_LEN;
    let mut out = String::new();

    let heading = title(view, locale);
    let heading = if color {
        Style::new().bold().paint(heading).to_string()
    } else {
        heading
    };
    // center on the visible text, not on the escape codes
    let pad = grid_w.saturating_sub(visible_width(&heading)) / 2;
    out.push_str(&" ".repeat(pad));
    out.push_str(&heading);
    out.push('\n');

    let header: String = weekday_headers(locale)
        .iter()
        .map(|h| pad_right(&format!(" {h}"), CELL_W))
        .collect();
    out.push_str(header.trim_end());
    out.push('\n');

    for week in view.weeks() {
        let line: String = week.iter().map(|c| render_cell(c, color)).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if !view.visible.is_empty() {
        out.push('\n');
        for iv in &view.visible {
            let (label, ansi) = describe_leave_type(&iv.kind);
            out.push_str(&format!(
                "  {} {} .. {}  {} ({} d)\n",
                paint("*", ansi, color),
                iv.start,
                iv.end,
                label,
                iv.len_days()
            ));
        }
    }

    out
}

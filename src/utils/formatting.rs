//! Formatting utilities used for CLI and export outputs.

use crate::config::Locale;
use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (wide and accented chars measured properly).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Textual description and ANSI color for a leave type code.
pub fn describe_leave_type(code: &str) -> (String, &'static str) {
    match code.to_uppercase().as_str() {
        "VACATION" => ("Vacation".into(), "\x1b[32m"),
        "SICK" => ("Sick leave".into(), "\x1b[31m"),
        "PERSONAL" => ("Personal leave".into(), "\x1b[36m"),
        "OTHER" => ("Other".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[33m"),
    }
}

/// Weekday headers, always Monday first.
pub fn weekday_headers(locale: Locale) -> [&'static str; 7] {
    match locale {
        Locale::En => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        Locale::Cs => ["Po", "Út", "St", "Čt", "Pá", "So", "Ne"],
    }
}

/// Month name for a 0-based month index.
pub fn month_name(locale: Locale, month0: u32) -> &'static str {
    const EN: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    const CS: [&str; 12] = [
        "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září",
        "říjen", "listopad", "prosinec",
    ];

    let i = (month0 % 12) as usize;
    match locale {
        Locale::En => EN[i],
        Locale::Cs => CS[i],
    }
}

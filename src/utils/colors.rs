/// ANSI color helper utilities for terminal output.
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Width in terminal columns, ignoring ANSI sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Status color:
/// APPROVED → green
/// PENDING → yellow
/// REJECTED / CANCELLED → red
/// anything else → grey
pub fn color_for_status(status: &str) -> &'static str {
    match status.to_uppercase().as_str() {
        "APPROVED" => GREEN,
        "PENDING" => YELLOW,
        "REJECTED" | "CANCELLED" => RED,
        _ => GREY,
    }
}

pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

//! Month grid with the leave overlay.

pub mod cursor;
pub mod grid;

pub use cursor::{MonthCursor, advance_month};
pub use grid::{WEEK_LEN, build_grid, days_in_month, leading_blank_count};

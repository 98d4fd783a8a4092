pub mod day_cell;
pub mod interval;
pub mod leave;
pub mod leave_status;

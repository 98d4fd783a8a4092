pub mod calendar;
pub mod logic;
pub mod render;

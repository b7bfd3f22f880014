pub mod models;

pub use models::schedule_entry::{day_order, ScheduleEntry};

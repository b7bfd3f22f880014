pub mod schedule_entry;

pub use schedule_entry::*;

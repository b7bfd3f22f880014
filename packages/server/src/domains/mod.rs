// Business domains
pub mod import;
pub mod listings;
pub mod schedules;
pub mod schools;
pub mod styles;

pub mod records;
pub mod seed;

pub use records::{ScheduleRecord, SchoolRecord};
pub use seed::{import_file, import_records, ImportSummary};

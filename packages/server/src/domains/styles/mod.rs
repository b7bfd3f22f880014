pub mod models;

pub use models::school_style::SchoolStyle;
pub use models::style::Style;

pub mod school_style;
pub mod style;

pub use school_style::*;
pub use style::*;

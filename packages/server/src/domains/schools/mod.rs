pub mod models;

pub use models::school::{CityCoords, School, SchoolSource};

pub mod aggregator;
pub mod controller;
pub mod price;

pub use crate::domain::model::{Course, CourseAverages, CourseField, MenuCollection, MenuItem};
pub use crate::domain::ports::MenuSource;
pub use crate::utils::error::Result;

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::app::Session;
pub use crate::config::{CsvMenuFile, MenuConfig, TomlMenuFile};
pub use crate::core::aggregator::{compute_averages, filter_by_course, MenuAggregator};
pub use crate::core::controller::MenuController;
pub use crate::core::price::UnparsablePrice;
pub use crate::domain::model::{Course, CourseAverages, CourseField, MenuCollection, MenuItem};
pub use crate::domain::ports::{InMemorySource, MenuSource};
pub use crate::utils::error::{MenuError, Result};

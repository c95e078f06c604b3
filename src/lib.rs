pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::app::reports::PerformanceReport;
pub use crate::config::CliConfig;
pub use crate::core::{
    loader::DataLoader, registry::ReportRegistry, render::render_table, service::ReportService,
};
pub use crate::domain::model::{ReportRow, ReportTable, Row};
pub use crate::domain::ports::{Report, Storage};
pub use crate::utils::error::{ReportError, Result};

pub mod loader;
pub mod registry;
pub mod render;
pub mod service;

pub use crate::domain::model::{ReportRow, ReportTable, Row};
pub use crate::domain::ports::{Report, Storage};
pub use crate::utils::error::Result;

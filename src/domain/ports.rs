use crate::domain::model::{ReportRow, Row};
use std::path::Path;

/// A named, pure computation over loaded rows.
///
/// `run` must depend on nothing but its input: no I/O and no state carried
/// between calls.
pub trait Report: Send + Sync {
    fn name(&self) -> &str;
    fn headers(&self) -> Vec<String>;
    fn run(&self, rows: &[Row]) -> Vec<ReportRow>;
}

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

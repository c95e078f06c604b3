use crate::core::loader::DataLoader;
use crate::core::registry::ReportRegistry;
use crate::core::{ReportTable, Result, Storage};
use std::path::Path;

/// Load → resolve → run. Holds no state between calls.
pub struct ReportService<S: Storage> {
    loader: DataLoader<S>,
    registry: ReportRegistry,
}

impl<S: Storage> ReportService<S> {
    pub fn new(storage: S, registry: ReportRegistry) -> Self {
        Self {
            loader: DataLoader::new(storage),
            registry,
        }
    }

    pub fn storage(&self) -> &S {
        self.loader.storage()
    }

    pub fn build_report<P: AsRef<Path>>(
        &self,
        report_name: &str,
        files: &[P],
    ) -> Result<ReportTable> {
        let rows = self.loader.load(files)?;
        tracing::debug!("Loaded {} rows from {} file(s)", rows.len(), files.len());

        let report = self.registry.get(report_name)?;
        let headers = report.headers();
        let rows = report.run(&rows);
        tracing::info!("Report '{}' produced {} rows", report_name, rows.len());

        Ok(ReportTable { headers, rows })
    }
}

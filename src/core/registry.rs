use crate::core::Report;
use crate::utils::error::{ReportError, Result};
use std::collections::BTreeMap;

/// Name → report table. Filled once at startup, read-only afterwards.
#[derive(Default)]
pub struct ReportRegistry {
    reports: BTreeMap<String, Box<dyn Report>>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every report shipped with the binary.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for report in crate::app::reports::builtin_reports() {
            registry.register(report)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, report: Box<dyn Report>) -> Result<()> {
        let name = report.name().to_string();

        if name.trim().is_empty() {
            return Err(ReportError::DuplicateReportError {
                name,
                reason: "report name must not be empty".to_string(),
            });
        }

        if self.reports.contains_key(&name) {
            return Err(ReportError::DuplicateReportError {
                name,
                reason: "a report with this name is already registered".to_string(),
            });
        }

        tracing::debug!("Registered report '{}'", name);
        self.reports.insert(name, report);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Report> {
        self.reports
            .get(name)
            .map(|report| &**report)
            .ok_or_else(|| ReportError::ReportNotFoundError {
                name: name.to_string(),
            })
    }

    /// Registered names in alphabetical order.
    pub fn choices(&self) -> Vec<String> {
        self.reports.keys().cloned().collect()
    }
}

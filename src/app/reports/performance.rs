use crate::core::{Report, ReportRow, Row};
use indexmap::IndexMap;
use std::cmp::Ordering;

pub const POSITION: &str = "position";
pub const PERFORMANCE: &str = "performance";

/// Mean performance per position, best first.
///
/// Positions with equal means keep the order in which they first appear in
/// the input. Values are returned unrounded; the renderer owns formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceReport;

impl Report for PerformanceReport {
    fn name(&self) -> &str {
        "performance"
    }

    fn headers(&self) -> Vec<String> {
        vec![POSITION.to_string(), PERFORMANCE.to_string()]
    }

    fn run(&self, rows: &[Row]) -> Vec<ReportRow> {
        let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
        for row in rows {
            groups
                .entry(row.position.as_str())
                .or_default()
                .push(row.performance);
        }

        let mut means: Vec<(&str, f64)> = groups
            .into_iter()
            .map(|(position, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (position, mean)
            })
            .collect();

        // sort_by is stable, so ties stay in first-occurrence order.
        // Numeric comparison: -0.0 and 0.0 are a tie.
        means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        means
            .into_iter()
            .map(|(position, mean)| {
                ReportRow::new()
                    .with(POSITION, position)
                    .with(PERFORMANCE, mean)
            })
            .collect()
    }
}

pub mod performance;

use crate::core::Report;

pub use performance::PerformanceReport;

/// Reports compiled into the binary, in registration order.
pub fn builtin_reports() -> Vec<Box<dyn Report>> {
    vec![Box::new(PerformanceReport)]
}

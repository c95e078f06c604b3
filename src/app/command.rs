use crate::config::CliConfig;
use crate::core::render::render_table;
use crate::core::service::ReportService;
use crate::core::Storage;
use crate::utils::validation::{missing_files, Validate};
use std::io::Write;

/// Runs one report invocation and returns the process exit status.
///
/// The rendered table goes to `out`; every diagnostic goes to `err` as a
/// single line. Nothing is written to `out` unless the report succeeds.
pub fn run<S, O, E>(
    config: &CliConfig,
    service: &ReportService<S>,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<u8>
where
    S: Storage,
    O: Write,
    E: Write,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        writeln!(err, "Error: {}", e)?;
        return Ok(e.exit_code());
    }

    let missing = missing_files(service.storage(), &config.files);
    if !missing.is_empty() {
        let missing = missing
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::error!("Input files not found: {}", missing);
        writeln!(err, "Error: file(s) not found: {}", missing)?;
        return Ok(1);
    }

    let table = match service.build_report(&config.report, &config.files) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Report failed: {} (Category: {:?})", e, e.category());
            writeln!(err, "Error: {}", e)?;
            return Ok(e.exit_code());
        }
    };

    if table.rows.is_empty() {
        tracing::warn!("Report '{}' produced no rows", config.report);
        writeln!(err, "No data for report '{}'.", config.report)?;
        return Ok(1);
    }

    writeln!(out, "{}", render_table(&table.headers, &table.rows))?;
    Ok(0)
}

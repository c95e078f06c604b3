use anyhow::Context;
use csv_reports::app::command;
use csv_reports::utils::logger;
use csv_reports::{CliConfig, LocalStorage, ReportRegistry, ReportService};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let registry = ReportRegistry::builtin().context("failed to register built-in reports")?;
    let config = CliConfig::parse_with_choices(&registry.choices());

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting csv-reports");
    tracing::debug!("CLI config: {:?}", config);

    let service = ReportService::new(LocalStorage::new(), registry);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = command::run(&config, &service, &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write report output")?;

    Ok(ExitCode::from(code))
}

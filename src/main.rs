use fwlog::config::{self, Settings};
use fwlog::{logging, report, source, Error};
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = config::load_cli();
    logging::init_logging(cli.verbose);
    let settings = Settings::resolve(cli)?;

    let summary = match source::aggregate_file(&settings.log_path) {
        Ok(summary) => summary,
        Err(e @ Error::SourceNotFound { .. }) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if summary.suspicious_ports.is_flagged() {
        warn!(log = %settings.log_path.display(), "connections to watched ports found");
    }

    let text = report::render(&summary, chrono::Local::now().naive_local());
    if !settings.quiet {
        println!("{}", text);
    }

    match report::write_report(&settings.report_path, &text) {
        Ok(()) => println!("\nReport written to {}", settings.report_path.display()),
        Err(e) => {
            warn!("{}", e);
            println!("Could not write report: {}", e);
        }
    }

    if let Some(json_path) = &settings.json_path {
        match report::write_json(json_path, &summary) {
            Ok(()) => info!(path = %json_path.display(), "JSON summary written"),
            Err(e) => error!("Could not write JSON summary: {}", e),
        }
    }

    Ok(ExitCode::SUCCESS)
}

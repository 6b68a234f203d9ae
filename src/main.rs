use busfare::{cli::Args, config::Config, error::ReportError, generate_report};

use anyhow::{Context, Result};
use chrono::Local;
use log::{error, info, warn};
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{:#}", err);
        let code = err
            .downcast_ref::<ReportError>()
            .map(ReportError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}

fn run() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let args = Args::parse(&argv)?;
    let config = Config::from_env();

    let (output, summary) = generate_report(&config, &args, Local::now().date_naive())
        .with_context(|| format!("Cannot build report from {}", args.input.display()))?;

    if summary.unparsable_prices > 0 {
        warn!(
            "{} matching records had a price that could not be counted",
            summary.unparsable_prices
        );
    }
    info!(
        "Wrote {} of {} records to {}, {} prices counted",
        summary.records_written,
        summary.records_read,
        output.display(),
        summary.counted_prices
    );
    info!("Total expenses = {}", summary.formatted_total);

    Ok(())
}

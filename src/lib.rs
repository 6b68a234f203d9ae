pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;

use crate::cli::Args;
use crate::config::Config;
use crate::engine::{Engine, Summary};
use crate::error::ReportError;

use chrono::{Datelike, NaiveDate};
use csv::{Reader, ReaderBuilder, Writer, WriterBuilder};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b';';

pub fn output_file_name(date: NaiveDate) -> String {
    format!(
        "transportation-compensation-bus-{}-{}.csv",
        date.format("%B"),
        date.year()
    )
}

/// Every record must be as wide as the first one. The header is handed to the
/// engine as an ordinary record.
pub fn records_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(DELIMITER).has_headers(false).flexible(false);
    builder
}

/// The summary row may be wider than the header.
pub fn report_writer() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.delimiter(DELIMITER).has_headers(false).flexible(true);
    builder
}

pub fn open_records(path: &Path) -> Result<Reader<File>, ReportError> {
    records_reader()
        .from_path(path)
        .map_err(|source| ReportError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

pub fn create_report(path: &Path) -> Result<Writer<File>, ReportError> {
    report_writer()
        .from_path(path)
        .map_err(|source| ReportError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes the monthly report for `date` and returns where it went.
pub fn generate_report(
    config: &Config,
    args: &Args,
    date: NaiveDate,
) -> Result<(PathBuf, Summary), ReportError> {
    args.validate()?;

    let mut reader = open_records(&args.input)?;
    let output = args.output_dir.join(output_file_name(date));
    let mut writer = create_report(&output)?;

    info!(
        "Filtering {} on {} bus stops into {}",
        args.input.display(),
        config.stops.len(),
        output.display()
    );

    let summary = Engine::new(&config.stops).run(&mut reader, &mut writer)?;
    Ok((output, summary))
}

use crate::config::StopSet;
use crate::engine::accumulator::Accumulator;
use crate::engine::summary::SummaryRow;
use crate::error::ReportError;
use crate::record::ExpenseRecord;

use csv::{Reader, StringRecord, Writer};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::io::{Read, Write};

/// Outcome of a completed pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub records_read: usize,
    pub records_written: usize,
    pub counted_prices: usize,
    pub unparsable_prices: usize,
    pub total: Decimal,
    pub formatted_total: String,
}

pub struct Engine<'c> {
    stops: &'c StopSet,
    accumulator: Accumulator,
    records_read: usize,
    records_written: usize,
}

impl<'c> Engine<'c> {
    pub fn new(stops: &'c StopSet) -> Self {
        Self {
            stops,
            accumulator: Accumulator::new(),
            records_read: 0,
            records_written: 0,
        }
    }

    /// Streams every record from `reader` into `writer`, then appends the summary row.
    pub fn run<R: Read, W: Write>(
        mut self,
        reader: &mut Reader<R>,
        writer: &mut Writer<W>,
    ) -> Result<Summary, ReportError> {
        let mut record = StringRecord::new();

        while reader.read_record(&mut record).map_err(ReportError::Read)? {
            debug!(
                "Record {} {:?} has {} fields",
                self.records_read,
                record,
                record.len()
            );

            if self.records_read == 0 {
                self.write(writer, &record)?;
            } else if self.apply_record(&record)? {
                self.write(writer, &record)?;
            }
            self.records_read += 1;
        }

        self.finish(writer)
    }

    /// Evaluates one data row. Returns whether it belongs in the report.
    pub fn apply_record(&mut self, record: &StringRecord) -> Result<bool, ReportError> {
        let expense = ExpenseRecord::try_from(record)?;

        if !self.stops.is_match(expense.departure, expense.destination) || !expense.has_price() {
            return Ok(false);
        }

        if !self.accumulator.add(expense.price) {
            warn!(
                "Price {:?} on record {} is not a number or overflows the total, not counted",
                expense.price, self.records_read
            );
        }

        Ok(true)
    }

    pub fn total(&self) -> Decimal {
        self.accumulator.total
    }

    fn write<W: Write>(
        &mut self,
        writer: &mut Writer<W>,
        record: &StringRecord,
    ) -> Result<(), ReportError> {
        writer.write_record(record).map_err(ReportError::Write)?;
        self.records_written += 1;
        Ok(())
    }

    fn finish<W: Write>(self, writer: &mut Writer<W>) -> Result<Summary, ReportError> {
        let formatted_total = self.accumulator.formatted_total();

        writer
            .serialize(SummaryRow::new(formatted_total.clone()))
            .map_err(ReportError::Write)?;
        writer.flush().map_err(ReportError::Flush)?;

        Ok(Summary {
            records_read: self.records_read,
            records_written: self.records_written,
            counted_prices: self.accumulator.contributions,
            unparsable_prices: self.accumulator.unparsable,
            total: self.accumulator.total,
            formatted_total,
        })
    }
}

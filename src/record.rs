use crate::error::ReportError;

use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DEPARTURE: usize = 2;
pub const DESTINATION: usize = 4;
pub const PRICE: usize = 5;

/// Fewest fields a data row may have.
pub const MIN_FIELDS: usize = PRICE + 1;

/// Positional view over one trip row of the expenses export.
#[derive(Debug, PartialEq)]
pub struct ExpenseRecord<'r> {
    pub departure: &'r str,
    pub destination: &'r str,
    pub price: &'r str,
}

impl<'r> TryFrom<&'r StringRecord> for ExpenseRecord<'r> {
    type Error = ReportError;

    fn try_from(record: &'r StringRecord) -> Result<Self, Self::Error> {
        if record.len() < MIN_FIELDS {
            return Err(ReportError::MalformedRecord {
                line: record.position().map(|pos| pos.line()).unwrap_or(0),
                expected: MIN_FIELDS,
                found: record.len(),
            });
        }

        Ok(ExpenseRecord {
            departure: &record[DEPARTURE],
            destination: &record[DESTINATION],
            price: &record[PRICE],
        })
    }
}

impl ExpenseRecord<'_> {
    pub fn has_price(&self) -> bool {
        !self.price.is_empty()
    }
}

/// Parses a price as a plain or scientific-notation decimal.
///
/// Digit separators are rejected. Values outside the range of `Decimal`
/// (e.g. `1e30`) do not parse either and are left out of the total like any
/// other malformed price.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    if raw.contains('_') {
        return None;
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

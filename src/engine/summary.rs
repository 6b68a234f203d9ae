use crate::record::PRICE;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

pub const SUMMARY_LABEL: &str = "Total expenses:";
pub const SUMMARY_WIDTH: usize = 10;

/// Trailing row of the report: label in the first column, total under the price column.
#[derive(Debug, PartialEq)]
pub struct SummaryRow {
    pub total: String,
}

impl SummaryRow {
    pub fn new(total: String) -> Self {
        Self { total }
    }
}

impl Serialize for SummaryRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut row = serializer.serialize_tuple(SUMMARY_WIDTH)?;
        for column in 0..SUMMARY_WIDTH {
            match column {
                0 => row.serialize_element(SUMMARY_LABEL)?,
                PRICE => row.serialize_element(&self.total)?,
                _ => row.serialize_element("")?,
            }
        }
        row.end()
    }
}

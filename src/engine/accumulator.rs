use crate::record::parse_price;

use rust_decimal::{Decimal, RoundingStrategy};

pub const TOTAL_DECIMALS: u32 = 2;

/// Running sum of the prices of matching trips.
#[derive(Debug, Default, Clone)]
pub struct Accumulator {
    pub total: Decimal,
    pub contributions: usize,
    pub unparsable: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `raw` to the total. Returns `false` when the price does not parse
    /// or would overflow the total, in which case the total is left untouched.
    pub fn add(&mut self, raw: &str) -> bool {
        match parse_price(raw).and_then(|price| self.total.checked_add(price)) {
            Some(total) => {
                self.total = total;
                self.contributions += 1;
                true
            }
            None => {
                self.unparsable += 1;
                false
            }
        }
    }

    pub fn formatted_total(&self) -> String {
        format_amount(self.total)
    }
}

/// Two decimal places, half away from zero, no thousands separator.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(TOTAL_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", TOTAL_DECIMALS as usize, rounded)
}

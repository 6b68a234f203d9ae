use crate::config::StopSet;
use crate::engine::accumulator::{format_amount, Accumulator};
use crate::engine::engine::Engine;
use crate::engine::summary::SummaryRow;
use crate::error::ReportError;
use csv::{StringRecord, WriterBuilder};
use rust_decimal::Decimal;
use std::str::FromStr;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[cfg(test)]
mod accumulator_tests {
    use super::*;

    #[test]
    fn test_add_parsable_price() {
        let mut acc = Accumulator::new();

        assert!(acc.add("12.50"));
        assert_eq!(acc.total, Decimal::from_str("12.50").unwrap());
        assert_eq!(acc.contributions, 1);
        assert_eq!(acc.unparsable, 0);
    }

    #[test]
    fn test_add_unparsable_price_leaves_total() {
        let mut acc = Accumulator::new();
        acc.add("4.00");

        assert!(!acc.add("abc"));
        assert_eq!(acc.total, Decimal::from(4));
        assert_eq!(acc.contributions, 1);
        assert_eq!(acc.unparsable, 1);
    }

    #[test]
    fn test_add_overflowing_price_leaves_total() {
        let mut acc = Accumulator::new();

        assert!(acc.add("79228162514264337593543950335"));
        assert!(!acc.add("79228162514264337593543950335"));
        assert_eq!(acc.total, Decimal::MAX);
        assert_eq!(acc.contributions, 1);
        assert_eq!(acc.unparsable, 1);
        assert_eq!(acc.formatted_total(), "79228162514264337593543950335.00");
    }

    #[test]
    fn test_midpoint_rounds_up() {
        let mut acc = Accumulator::new();
        acc.add("10.00");
        acc.add("5.555");

        assert_eq!(acc.formatted_total(), "15.56");
    }

    #[test]
    fn test_empty_total_has_two_decimals() {
        assert_eq!(Accumulator::new().formatted_total(), "0.00");
    }
}

#[cfg(test)]
mod format_amount_tests {
    use super::*;

    #[test]
    fn test_pads_to_two_decimals() {
        assert_eq!(format_amount(Decimal::from(7)), "7.00");
        assert_eq!(format_amount(Decimal::from_str("7.5").unwrap()), "7.50");
    }

    #[test]
    fn test_no_thousands_separator() {
        assert_eq!(format_amount(Decimal::from_str("12345.678").unwrap()), "12345.68");
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(format_amount(Decimal::from_str("-1.005").unwrap()), "-1.01");
    }
}

#[cfg(test)]
mod apply_record_tests {
    use super::*;

    #[test]
    fn test_departure_match_contributes() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "Schiphol Airport", "x", "CityX", "12.50"]);

        assert!(engine.apply_record(&row).unwrap());
        assert_eq!(engine.total(), Decimal::from_str("12.50").unwrap());
    }

    #[test]
    fn test_destination_match_contributes() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "CityX", "x", "Schiphol, Schipholgebouw", "3"]);

        assert!(engine.apply_record(&row).unwrap());
        assert_eq!(engine.total(), Decimal::from(3));
    }

    #[test]
    fn test_no_match_is_dropped() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "CityX", "x", "CityY", "12.50"]);

        assert!(!engine.apply_record(&row).unwrap());
        assert_eq!(engine.total(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_price_is_dropped() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "Schiphol Airport", "x", "CityX", ""]);

        assert!(!engine.apply_record(&row).unwrap());
        assert_eq!(engine.total(), Decimal::ZERO);
    }

    #[test]
    fn test_unparsable_price_is_kept_but_not_counted() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "Schiphol Airport", "x", "CityX", "abc"]);

        assert!(engine.apply_record(&row).unwrap());
        assert_eq!(engine.total(), Decimal::ZERO);
    }

    #[test]
    fn test_short_row_is_fatal() {
        let stops = StopSet::default();
        let mut engine = Engine::new(&stops);

        let row = record(&["1", "2", "Schiphol Airport", "x", "CityX"]);

        assert!(matches!(
            engine.apply_record(&row),
            Err(ReportError::MalformedRecord { found: 5, .. })
        ));
    }
}

#[cfg(test)]
mod summary_row_tests {
    use super::*;

    #[test]
    fn test_summary_row_layout() {
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(SummaryRow::new("15.56".to_string())).unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let fields: Vec<&str> = output.trim_end().split(';').collect();

        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0], "Total expenses:");
        assert_eq!(fields[5], "15.56");
        assert!(fields
            .iter()
            .enumerate()
            .all(|(i, field)| i == 0 || i == 5 || field.is_empty()));
    }
}

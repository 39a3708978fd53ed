// src/data_input/transform.rs

use log::{debug, info};
use std::fmt::Display;
use std::str::FromStr;

use crate::constants::{
    FIELD_D, FIELD_I, FIELD_MEASUREMENT, FIELD_NAMES, FIELD_OUTPUT, FIELD_P, FIELD_SETPOINT,
    FIELD_TIME, RECORD_FIELD_COUNT,
};
use crate::data_input::log_data::{PidColumns, Sample};
use crate::data_input::log_parser::RawRecord;
use crate::error::{PlotterError, Result};

/// Converts raw records into the eight aligned numeric columns.
///
/// Aborts on the first record that does not convert; rows are never skipped.
/// An empty input gives empty columns.
pub fn transform(records: &[RawRecord]) -> Result<PidColumns> {
    let samples = records
        .iter()
        .map(parse_sample)
        .collect::<Result<Vec<Sample>>>()?;

    let columns = PidColumns::from_samples(&samples);
    match columns.time_span() {
        Some((first, last)) => info!(
            "Converted {} samples spanning {} ms to {} ms.",
            columns.len(),
            first,
            last
        ),
        None => info!("No samples to convert."),
    }
    Ok(columns)
}

/// Converts one record: field 0 as an integer, fields 1-6 as floats.
/// Fields past the seventh are ignored.
pub fn parse_sample(record: &RawRecord) -> Result<Sample> {
    if record.len() > RECORD_FIELD_COUNT {
        debug!(
            "  line {}: ignoring {} extra fields",
            record.line,
            record.len() - RECORD_FIELD_COUNT
        );
    }

    // Fields convert left to right; the first missing or bad one is reported.
    Ok(Sample::new(
        parse_field::<i64>(record, FIELD_TIME)?,
        parse_field::<f64>(record, FIELD_SETPOINT)?,
        parse_field::<f64>(record, FIELD_MEASUREMENT)?,
        parse_field::<f64>(record, FIELD_OUTPUT)?,
        parse_field::<f64>(record, FIELD_P)?,
        parse_field::<f64>(record, FIELD_I)?,
        parse_field::<f64>(record, FIELD_D)?,
    ))
}

fn parse_field<T>(record: &RawRecord, index: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let value = record
        .field(index)
        .ok_or_else(|| PlotterError::MalformedRecord {
            line: record.line,
            field: index,
            name: FIELD_NAMES[index],
            value: String::new(),
            reason: format!(
                "expected {} fields, found {}",
                RECORD_FIELD_COUNT,
                record.len()
            ),
        })?;
    value.parse::<T>().map_err(|e| PlotterError::MalformedRecord {
        line: record.line,
        field: index,
        name: FIELD_NAMES[index],
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: u64, text: &str) -> RawRecord {
        RawRecord::new(line, text.split(',').map(str::to_owned).collect())
    }

    #[test]
    fn test_single_record_columns() {
        let columns = transform(&[record(1, "0,1.0,0.5,2.0,0.1,0.2,0.3")]).unwrap();
        assert_eq!(columns.time.to_vec(), vec![0]);
        assert_eq!(columns.setpoint.to_vec(), vec![1.0]);
        assert_eq!(columns.measurement.to_vec(), vec![0.5]);
        assert_eq!(columns.error.to_vec(), vec![-0.5]);
        assert_eq!(columns.output.to_vec(), vec![2.0]);
        assert_eq!(columns.p.to_vec(), vec![0.1]);
        assert_eq!(columns.i.to_vec(), vec![0.2]);
        assert_eq!(columns.d.to_vec(), vec![0.3]);
    }

    #[test]
    fn test_empty_input_gives_empty_columns() {
        let columns = transform(&[]).unwrap();
        assert!(columns.is_empty());
        assert!(columns.setpoint.is_empty());
        assert!(columns.d.is_empty());
    }

    #[test]
    fn test_non_numeric_setpoint_is_malformed() {
        let err = transform(&[record(1, "0,abc,0.5,2.0,0.1,0.2,0.3")]).unwrap_err();
        match err {
            PlotterError::MalformedRecord {
                line,
                field,
                name,
                value,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(field, 1);
                assert_eq!(name, "setpoint");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fractional_time_is_malformed() {
        let err = parse_sample(&record(3, "1.5,1.0,0.5,2.0,0.1,0.2,0.3")).unwrap_err();
        assert!(matches!(
            err,
            PlotterError::MalformedRecord { line: 3, field: 0, .. }
        ));
    }

    #[test]
    fn test_short_record_is_malformed() {
        let err = parse_sample(&record(2, "0,1.0,0.5")).unwrap_err();
        assert!(matches!(
            err,
            PlotterError::MalformedRecord { line: 2, field: 3, name: "output", .. }
        ));
    }

    #[test]
    fn test_empty_line_fails_on_time() {
        let err = parse_sample(&RawRecord::new(4, vec![String::new()])).unwrap_err();
        match err {
            PlotterError::MalformedRecord {
                line,
                field,
                name,
                value,
                ..
            } => {
                assert_eq!(line, 4);
                assert_eq!(field, 0);
                assert_eq!(name, "time");
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_field_before_missing_ones_is_reported_first() {
        let err = parse_sample(&record(1, "0,x")).unwrap_err();
        assert!(matches!(
            err,
            PlotterError::MalformedRecord { field: 1, name: "setpoint", .. }
        ));
    }

    #[test]
    fn test_quoted_value_is_malformed() {
        let err = parse_sample(&record(1, "0,\"1.0\",0.5,2.0,0.1,0.2,0.3")).unwrap_err();
        assert!(matches!(
            err,
            PlotterError::MalformedRecord { field: 1, name: "setpoint", .. }
        ));
    }

    #[test]
    fn test_bad_row_aborts_whole_transform() {
        let records = [
            record(1, "0,1.0,0.5,2.0,0.1,0.2,0.3"),
            record(2, "60,1.0,oops,2.0,0.1,0.2,0.3"),
            record(3, "120,1.0,0.9,2.0,0.1,0.2,0.3"),
        ];
        let err = transform(&records).unwrap_err();
        assert!(matches!(
            err,
            PlotterError::MalformedRecord { line: 2, field: 2, .. }
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let sample = parse_sample(&record(1, "5,2.0,3.0,4.0,0.5,0.25,0.125,extra")).unwrap();
        assert_eq!(sample, Sample::new(5, 2.0, 3.0, 4.0, 0.5, 0.25, 0.125));
        assert_eq!(sample.error, 1.0);
    }

    #[test]
    fn test_negative_and_exponent_values() {
        let sample = parse_sample(&record(1, "-20,1e2,-3.5,0,0,0,-1E-3")).unwrap();
        assert_eq!(sample.time, -20);
        assert_eq!(sample.setpoint, 100.0);
        assert_eq!(sample.error, -103.5);
        assert_eq!(sample.d, -0.001);
    }
}

//! Fixed-column decoders for the two raw IERS products.
//!
//! `finals2000A.all` is a fixed-width format: one line per day, with the
//! Bulletin A value/error/flag triples in fixed column spans and the optional
//! Bulletin B revisions at the tail of the line. `Leap_Second.dat` is a
//! whitespace-separated table of (MJD, day, month, year, TAI-UTC) rows with
//! `#` comment lines.
//!
//! Parsers take the file content as a string; reading from disk is the
//! loader's job ([`crate::table::FileSource`]). A malformed line fails the
//! whole parse; a partially built table is never returned.

use crate::record::{FinalsRecord, LeapSecondRecord, ValueFlag};
use eop_core::{CalendarDate, EopError, EopResult};

const FINALS_SOURCE: &str = "finals2000A";
const LEAP_SECOND_SOURCE: &str = "Leap_Second";

/// Two-digit years in the finals format pivot at MJD 51544 (2000-01-01).
const MJD_Y2K_PIVOT: f64 = 51_544.0;

/// Parses the complete finals2000A content. Blank lines are skipped.
pub fn parse_finals(content: &str) -> EopResult<Vec<FinalsRecord>> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_finals_line(line, index + 1)?);
    }

    Ok(records)
}

/// Parses the complete Leap_Second.dat content. Blank and `#` comment lines
/// are skipped. Validates that TAI-UTC never decreases.
pub fn parse_leap_seconds(content: &str) -> EopResult<Vec<LeapSecondRecord>> {
    let mut records: Vec<LeapSecondRecord> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let record = parse_leap_second_line(trimmed, index + 1)?;

        if let Some(previous) = records.last() {
            if record.tai_utc < previous.tai_utc {
                return Err(EopError::parse_failure(
                    LEAP_SECOND_SOURCE,
                    index + 1,
                    format!(
                        "TAI-UTC decreased from {} to {}",
                        previous.tai_utc, record.tai_utc
                    ),
                ));
            }
        }

        records.push(record);
    }

    Ok(records)
}

fn parse_finals_line(line: &str, line_number: usize) -> EopResult<FinalsRecord> {
    let mjd = required_f64(line, line_number, 7, 8, "MJD")?;
    let yy = required_i32(line, line_number, 0, 2, "year")?;
    let month = required_i32(line, line_number, 2, 2, "month")? as u8;
    let day = required_i32(line, line_number, 4, 2, "day")? as u8;
    let year = if mjd < MJD_Y2K_PIVOT {
        1900 + yy
    } else {
        2000 + yy
    };

    Ok(FinalsRecord {
        mjd,
        date: CalendarDate::new(year, month, day),
        pm_flag: required_flag(line, line_number, 16, "polar motion flag")?,
        pm_x: required_f64(line, line_number, 18, 9, "PM-x")?,
        pm_x_error: required_f64(line, line_number, 27, 9, "PM-x error")?,
        pm_y: required_f64(line, line_number, 37, 9, "PM-y")?,
        pm_y_error: required_f64(line, line_number, 46, 9, "PM-y error")?,
        ut1_flag: required_flag(line, line_number, 57, "UT1 flag")?,
        ut1_utc: required_f64(line, line_number, 58, 10, "UT1-UTC")?,
        ut1_utc_error: required_f64(line, line_number, 68, 10, "UT1-UTC error")?,
        lod: optional_f64(line, line_number, 79, 7, "LOD")?,
        lod_error: optional_f64(line, line_number, 86, 7, "LOD error")?,
        nutation_flag: optional_flag(line, 95),
        dx: optional_f64(line, line_number, 97, 9, "dX")?,
        dx_error: optional_f64(line, line_number, 106, 9, "dX error")?,
        dy: optional_f64(line, line_number, 116, 9, "dY")?,
        dy_error: optional_f64(line, line_number, 125, 9, "dY error")?,
        bulletin_b_pm_x: optional_f64(line, line_number, 134, 10, "Bulletin B PM-x")?,
        bulletin_b_pm_y: optional_f64(line, line_number, 144, 10, "Bulletin B PM-y")?,
        bulletin_b_ut1_utc: optional_f64(line, line_number, 154, 11, "Bulletin B UT1-UTC")?,
        bulletin_b_dx: optional_f64(line, line_number, 165, 10, "Bulletin B dX")?,
        bulletin_b_dy: optional_f64(line, line_number, 175, 10, "Bulletin B dY")?,
    })
}

fn parse_leap_second_line(line: &str, line_number: usize) -> EopResult<LeapSecondRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return Err(EopError::parse_failure(
            LEAP_SECOND_SOURCE,
            line_number,
            format!("expected 5 fields, got {}", parts.len()),
        ));
    }

    let field = |index: usize, name: &str| -> EopResult<f64> {
        parts[index].parse::<f64>().map_err(|_| {
            EopError::parse_failure(
                LEAP_SECOND_SOURCE,
                line_number,
                format!("invalid {name}: '{}'", parts[index]),
            )
        })
    };

    let mjd = field(0, "MJD")?;
    let day = field(1, "day")? as u8;
    let month = field(2, "month")? as u8;
    let year = field(3, "year")? as i32;
    let tai_utc = parts[4].parse::<i32>().map_err(|_| {
        EopError::parse_failure(
            LEAP_SECOND_SOURCE,
            line_number,
            format!("invalid TAI-UTC: '{}'", parts[4]),
        )
    })?;

    Ok(LeapSecondRecord {
        mjd,
        date: CalendarDate::new(year, month, day),
        tai_utc,
    })
}

fn field_slice(line: &str, offset: usize, length: usize) -> Option<&str> {
    let end = (offset + length).min(line.len());
    if offset >= end {
        return None;
    }
    let raw = line.get(offset..end)?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn required_f64(
    line: &str,
    line_number: usize,
    offset: usize,
    length: usize,
    name: &str,
) -> EopResult<f64> {
    let raw = field_slice(line, offset, length).ok_or_else(|| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("missing {name}"))
    })?;
    raw.parse::<f64>().map_err(|_| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("invalid {name}: '{raw}'"))
    })
}

fn required_i32(
    line: &str,
    line_number: usize,
    offset: usize,
    length: usize,
    name: &str,
) -> EopResult<i32> {
    let raw = field_slice(line, offset, length).ok_or_else(|| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("missing {name}"))
    })?;
    raw.parse::<i32>().map_err(|_| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("invalid {name}: '{raw}'"))
    })
}

fn required_flag(line: &str, line_number: usize, offset: usize, name: &str) -> EopResult<ValueFlag> {
    let raw = field_slice(line, offset, 1).ok_or_else(|| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("missing {name}"))
    })?;
    ValueFlag::from_code(raw).ok_or_else(|| {
        EopError::parse_failure(FINALS_SOURCE, line_number, format!("invalid {name}: '{raw}'"))
    })
}

fn optional_f64(
    line: &str,
    line_number: usize,
    offset: usize,
    length: usize,
    name: &str,
) -> EopResult<Option<f64>> {
    match field_slice(line, offset, length) {
        None => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| {
            EopError::parse_failure(FINALS_SOURCE, line_number, format!("invalid {name}: '{raw}'"))
        }),
    }
}

fn optional_flag(line: &str, offset: usize) -> Option<ValueFlag> {
    field_slice(line, offset, 1).and_then(ValueFlag::from_code)
}

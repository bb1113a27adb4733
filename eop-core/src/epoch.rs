//! Time representations and Modified Julian Date conversion.
//!
//! Every query into the engine is an [`Epoch`]: a calendar instant, an
//! explicit Julian Date, or an explicit Modified Julian Date. [`Epoch::to_mjd`]
//! normalizes all three to the one canonical key used internally: an MJD
//! float with fractional days. The calendar algorithm follows the ERFA
//! `eraCal2jd` convention for the proleptic Gregorian calendar.

use crate::constants::{MJD_ZERO_POINT, SECONDS_PER_DAY};
use crate::errors::{EopError, EopResult};
use std::fmt;

/// A Gregorian calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One of the three accepted time representations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Epoch {
    /// A proleptic Gregorian calendar instant (UTC unless a scale is
    /// implied by the calling API).
    Calendar {
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    },
    /// An explicit Julian Date.
    JulianDate(f64),
    /// An explicit Modified Julian Date.
    ModifiedJulianDate(f64),
}

impl Epoch {
    /// Epoch at 0h of the given calendar day.
    pub fn calendar(year: i32, month: u8, day: u8) -> Self {
        Self::Calendar {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    /// Epoch at the given calendar instant.
    pub fn calendar_hms(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self::Calendar {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn jd(jd: f64) -> Self {
        Self::JulianDate(jd)
    }

    pub fn mjd(mjd: f64) -> Self {
        Self::ModifiedJulianDate(mjd)
    }

    /// Converts this epoch to a Modified Julian Date float.
    ///
    /// Fails with [`EopError::InvalidInput`] for non-finite values or
    /// calendar components that do not name a real instant.
    pub fn to_mjd(&self) -> EopResult<f64> {
        match *self {
            Self::ModifiedJulianDate(mjd) => require_finite(mjd, "MJD"),
            Self::JulianDate(jd) => Ok(require_finite(jd, "JD")? - MJD_ZERO_POINT),
            Self::Calendar {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => {
                validate_calendar(year, month, day, hour, minute, second)?;

                // ERFA eraCal2jd: MJD for 0h of the given day
                let my = (month as i32 - 14) / 12;
                let iypmy = year + my;
                let mjd = ((1461 * (iypmy + 4800)) / 4
                    + (367 * (month as i32 - 2 - 12 * my)) / 12
                    - (3 * ((iypmy + 4900) / 100)) / 4
                    + day as i32
                    - 2432076) as f64;

                let day_fraction =
                    (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY;

                Ok(mjd + day_fraction)
            }
        }
    }
}

/// Returns the calendar day covering the given MJD (floor to 0h).
pub fn calendar_from_mjd(mjd: f64) -> CalendarDate {
    // Julian Day Number of the covering day, then Fliegel-Van Flandern
    let jdn = (mjd.floor() + MJD_ZERO_POINT + 0.5) as i64;

    let mut l = jdn + 68569;
    let n = 4 * l / 146097;
    l -= (146097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1461001;
    l = l - 1461 * i / 4 + 31;
    let j = 80 * l / 2447;
    let day = l - 2447 * j / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    CalendarDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

fn require_finite(value: f64, label: &str) -> EopResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EopError::invalid_input(format!(
            "{label} must be finite, got {value}"
        )))
    }
}

fn validate_calendar(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
) -> EopResult<()> {
    if !(1..=12).contains(&month) {
        return Err(EopError::invalid_input(format!(
            "month must be 1-12, got {month}"
        )));
    }
    let max_day = days_in_month(year, month);
    if day == 0 || day > max_day {
        return Err(EopError::invalid_input(format!(
            "day must be 1-{max_day} for {year}-{month:02}, got {day}"
        )));
    }
    if hour >= 24 {
        return Err(EopError::invalid_input(format!(
            "hour must be 0-23, got {hour}"
        )));
    }
    if minute >= 60 {
        return Err(EopError::invalid_input(format!(
            "minute must be 0-59, got {minute}"
        )));
    }
    // Upper bound 61 admits a leap second (23:59:60)
    if !second.is_finite() || !(0.0..61.0).contains(&second) {
        return Err(EopError::invalid_input(format!(
            "second must be in [0, 61), got {second}"
        )));
    }
    Ok(())
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

//! Delta-T: the difference TT - UT1 in seconds.
//!
//! Two regimes, selected by the query MJD relative to 1972-01-01 (MJD
//! 41317). From 1972 onward both TAI-UTC and UT1-UTC are tabulated, so
//! Delta-T is measured directly:
//!
//! ```text
//! dT = (TAI - UTC) + (TT - TAI) - (UT1 - UTC)
//! ```
//!
//! Before 1972 (back to 1800) the engine evaluates the Espenak & Meeus
//! (2014) piecewise polynomials in decimal years. Queries before 1800 fail
//! as out of coverage.

use crate::config::EopConfig;
use crate::{leap_second, ut1};
use eop_core::constants::{DAYS_PER_JULIAN_YEAR, MJD_J2000, TT_TAI_SECONDS};
use eop_core::epoch::calendar_from_mjd;
use eop_core::math::horner;
use eop_core::{CalendarDate, Epoch, EopError, EopResult};
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// How a Delta-T value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaTSource {
    /// Derived from tabulated TAI-UTC and UT1-UTC (1972 onward).
    Measured,
    /// Polynomial fit to historical observations (1800-1972).
    Estimated,
}

/// Delta-T at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaTEntry {
    /// TT - UT1 in seconds.
    pub delta_t: f64,
    /// The query MJD.
    pub mjd: f64,
    pub source: DeltaTSource,
}

impl DeltaTEntry {
    pub fn measured(&self) -> bool {
        self.source == DeltaTSource::Measured
    }

    pub fn estimated(&self) -> bool {
        self.source == DeltaTSource::Estimated
    }

    /// The calendar day covering the query MJD.
    pub fn date(&self) -> CalendarDate {
        calendar_from_mjd(self.mjd)
    }
}

const EARLIEST_YEAR: f64 = 1800.0;
const PRE_1972_MJD: f64 = 41_317.0;
const YEAR_J2000: f64 = 2000.0;

struct Segment {
    upper_year: f64,
    epoch: f64,
    coefficients: &'static [f64],
}

/// Espenak & Meeus (2014) polynomial segments for 1800-1972, coefficients
/// from the constant term upward in t = y - epoch.
static POLYNOMIALS: [Segment; 6] = [
    Segment {
        upper_year: 1860.0,
        epoch: 1800.0,
        coefficients: &[
            13.72,
            -0.332447,
            0.0068612,
            0.0041116,
            -0.00037436,
            0.0000121272,
            -0.0000001699,
            0.000000000875,
        ],
    },
    Segment {
        upper_year: 1900.0,
        epoch: 1860.0,
        coefficients: &[
            7.62,
            0.5737,
            -0.251754,
            0.01680668,
            -0.0004473624,
            1.0 / 233_174.0,
        ],
    },
    Segment {
        upper_year: 1920.0,
        epoch: 1900.0,
        coefficients: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
    },
    Segment {
        upper_year: 1941.0,
        epoch: 1920.0,
        coefficients: &[21.20, 0.84493, -0.076100, 0.0020936],
    },
    Segment {
        upper_year: 1961.0,
        epoch: 1950.0,
        coefficients: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    },
    Segment {
        upper_year: 1986.0,
        epoch: 1975.0,
        coefficients: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    },
];

/// Whether the measured regime applies, requiring the observation tables.
pub(crate) fn needs_tables(query_mjd: f64) -> bool {
    query_mjd >= PRE_1972_MJD
}

/// The estimated (polynomial) regime, which touches no tables.
pub(crate) fn estimated_at(epoch: Epoch) -> EopResult<DeltaTEntry> {
    let query_mjd = epoch.to_mjd()?;
    let year = decimal_year(query_mjd);

    if year < EARLIEST_YEAR {
        return Err(EopError::out_of_coverage(
            query_mjd,
            format!(
                "Delta-T is only available from {} onward",
                EARLIEST_YEAR as i32
            ),
        ));
    }

    Ok(DeltaTEntry {
        delta_t: polynomial_delta_t(year),
        mjd: query_mjd,
        source: DeltaTSource::Estimated,
    })
}

pub(crate) fn at(
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
) -> EopResult<DeltaTEntry> {
    let query_mjd = epoch.to_mjd()?;

    if !needs_tables(query_mjd) {
        return estimated_at(Epoch::mjd(query_mjd));
    }

    let tai_utc = leap_second::offset_at(leap, query_mjd)? as f64;
    let ut1_utc = ut1::detailed_at(finals, leap, config, Epoch::mjd(query_mjd), None)?.ut1_utc;

    Ok(DeltaTEntry {
        delta_t: tai_utc + TT_TAI_SECONDS - ut1_utc,
        mjd: query_mjd,
        source: DeltaTSource::Measured,
    })
}

/// Selects the first segment whose upper year bound exceeds `year`, falling
/// back to the last segment, and evaluates it by Horner's method.
fn polynomial_delta_t(year: f64) -> f64 {
    let segment = POLYNOMIALS
        .iter()
        .find(|s| year < s.upper_year)
        .unwrap_or(&POLYNOMIALS[POLYNOMIALS.len() - 1]);

    horner(segment.coefficients, year - segment.epoch)
}

fn decimal_year(mjd: f64) -> f64 {
    YEAR_J2000 + (mjd - MJD_J2000) / DAYS_PER_JULIAN_YEAR
}

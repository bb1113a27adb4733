//! Bidirectional UTC <-> TAI conversion.
//!
//! UTC to TAI is direct: add the TAI-UTC offset in effect at the UTC
//! instant. TAI to UTC needs one correction step: the offset is tabulated
//! against UTC, so the initial lookup at the TAI instant can be off by one
//! second within a day of a leap-second boundary. Re-checking the offset at
//! the candidate UTC and recomputing once is guaranteed sufficient because
//! the offset only ever changes by exactly one second at a boundary.

use crate::leap_second;
use eop_core::constants::SECONDS_PER_DAY;
use eop_core::EopResult;
use eop_data::record::LeapSecondRecord;
use eop_data::table::ObservationTable;

/// Converts a UTC MJD to the corresponding TAI MJD.
pub(crate) fn utc_to_tai(
    leap: &ObservationTable<LeapSecondRecord>,
    utc_mjd: f64,
) -> EopResult<f64> {
    let tai_utc = leap_second::offset_at(leap, utc_mjd)? as f64;
    Ok(utc_mjd + tai_utc / SECONDS_PER_DAY)
}

/// Converts a TAI MJD to the corresponding UTC MJD.
pub(crate) fn tai_to_utc(
    leap: &ObservationTable<LeapSecondRecord>,
    tai_mjd: f64,
) -> EopResult<f64> {
    let initial_offset = leap_second::offset_at(leap, tai_mjd)?;
    let utc_mjd = tai_mjd - initial_offset as f64 / SECONDS_PER_DAY;

    let verified_offset = leap_second::offset_at(leap, utc_mjd)?;
    if verified_offset == initial_offset {
        return Ok(utc_mjd);
    }

    Ok(tai_mjd - verified_offset as f64 / SECONDS_PER_DAY)
}

//! Greenwich Mean Sidereal Time (IERS Conventions 2010, eq. 5.32).
//!
//! GMST is the Earth Rotation Angle plus a slow polynomial drift in Julian
//! centuries of TT, accounting for the accumulated precession of the
//! equinox. The polynomial coefficients are in arcseconds and the result is
//! normalized to [0, 2pi).

use crate::config::{EopConfig, Interpolation};
use crate::{era, leap_second};
use eop_core::angle::wrap_0_2pi;
use eop_core::constants::{
    ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, MJD_J2000, SECONDS_PER_DAY, TT_TAI_SECONDS,
};
use eop_core::math::horner;
use eop_core::{Epoch, EopResult};
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// IERS 2010 eq. 5.32 polynomial, arcseconds, constant term first.
const GMST_POLYNOMIAL_ARCSEC: [f64; 6] = [
    0.014506,
    4612.156534,
    1.3915817,
    -0.00000044,
    -0.000029956,
    -0.0000000368,
];

/// GMST in radians, normalized to [0, 2pi).
pub(crate) fn at(
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<f64> {
    let query_mjd = epoch.to_mjd()?;
    let era = era::at(finals, leap, config, Epoch::mjd(query_mjd), interpolation)?;

    let tai_utc = leap_second::offset_at(leap, query_mjd)? as f64;
    let tt_mjd = query_mjd + (tai_utc + TT_TAI_SECONDS) / SECONDS_PER_DAY;
    let t = (tt_mjd - MJD_J2000) / DAYS_PER_JULIAN_CENTURY;

    let polynomial_arcsec = horner(&GMST_POLYNOMIAL_ARCSEC, t);

    Ok(wrap_0_2pi(era + polynomial_arcsec * ARCSEC_TO_RAD))
}

//! Earth Rotation Angle (IERS Conventions 2010, eq. 5.15).
//!
//! ERA is a linear function of UT1, expressed in fractional turns and
//! normalized to [0, 2pi). The UT1 day fraction comes from the interpolated
//! UT1-UTC correction applied to the UTC query instant.

use crate::config::{EopConfig, Interpolation};
use crate::ut1;
use eop_core::angle::wrap_0_2pi;
use eop_core::constants::{MJD_J2000, SECONDS_PER_DAY, TWOPI};
use eop_core::math::fmod;
use eop_core::{Epoch, EopResult};
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// ERA at J2000.0 in fractional turns (IAU 2000 Resolution B1.8).
const ERA_AT_J2000: f64 = 0.779_057_273_264_0;

/// Ratio of universal to sidereal time (IAU 2000 Resolution B1.8).
#[allow(clippy::excessive_precision)]
const ERA_RATE: f64 = 1.002_737_811_911_354_48;

/// Earth Rotation Angle in radians, normalized to [0, 2pi).
pub(crate) fn at(
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<f64> {
    let query_mjd = epoch.to_mjd()?;
    let ut1_utc = ut1::detailed_at(finals, leap, config, Epoch::mjd(query_mjd), interpolation)?
        .ut1_utc;

    let du = query_mjd - MJD_J2000 + ut1_utc / SECONDS_PER_DAY;
    let turns = ERA_AT_J2000 + ERA_RATE * du;

    Ok(wrap_0_2pi(fmod(turns, 1.0) * TWOPI))
}

//! Polar-motion and terrestrial rotation matrices.
//!
//! The polar motion matrix W = R3(-s') * R2(xp) * R1(yp) rotates from the
//! terrestrial (ITRS) frame to the frame of the instantaneous rotation pole,
//! with the TIO locator s' approximated by its secular rate of -47
//! microarcseconds per Julian century. The combined terrestrial rotation is
//! R3(ERA) * W. Both are built with full trigonometry, with no small-angle
//! shortcuts, and are proper rotations (orthogonal, determinant +1) by
//! construction.

use crate::config::{EopConfig, Interpolation};
use crate::{era, polar_motion};
use eop_core::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, MJD_J2000};
use eop_core::{Epoch, EopResult, RotationMatrix3};
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// Secular rate of the TIO locator s', arcseconds per Julian century
/// (IERS Conventions 2010).
const S_PRIME_RATE_ARCSEC: f64 = -0.000_047;

/// Builds W from pole coordinates in radians at the given TT-adjacent MJD.
fn wobble_matrix(mjd: f64, xp_rad: f64, yp_rad: f64) -> RotationMatrix3 {
    let t = (mjd - MJD_J2000) / DAYS_PER_JULIAN_CENTURY;
    let s_prime = S_PRIME_RATE_ARCSEC * t * ARCSEC_TO_RAD;

    // W = R3(-s') * R2(xp) * R1(yp); in-place rotations compose left
    let mut w = RotationMatrix3::identity();
    w.rotate_x(yp_rad);
    w.rotate_y(xp_rad);
    w.rotate_z(-s_prime);
    w
}

/// The polar motion matrix W at the query instant.
pub(crate) fn polar_motion_matrix(
    finals: &ObservationTable<FinalsRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<RotationMatrix3> {
    let pm = polar_motion::at(finals, config, epoch, interpolation)?;

    Ok(wobble_matrix(
        pm.mjd,
        pm.x * ARCSEC_TO_RAD,
        pm.y * ARCSEC_TO_RAD,
    ))
}

/// The combined terrestrial rotation R3(ERA) * W at the query instant.
pub(crate) fn terrestrial_matrix(
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<RotationMatrix3> {
    let query_mjd = epoch.to_mjd()?;

    let era = era::at(finals, leap, config, Epoch::mjd(query_mjd), interpolation)?;
    let mut matrix = polar_motion_matrix(finals, config, Epoch::mjd(query_mjd), interpolation)?;
    matrix.rotate_z(era);

    Ok(matrix)
}

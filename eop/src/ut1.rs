//! UT1-UTC resolution with leap-second detrending.
//!
//! UT1-UTC cannot be interpolated directly: the tabulated values carry
//! deliberate one-second discontinuities wherever a leap second was
//! inserted, and a polynomial or linear fit across such a step would produce
//! a meaningless fractional jump. Instead, each window record's own TAI-UTC
//! is subtracted to obtain the smoothly varying UT1-TAI, that smooth series
//! is interpolated, and the TAI-UTC in effect at the query instant is added
//! back. The interpolated curve stays continuous even when the window
//! straddles a leap-second insertion, while the TAI-UTC lookup itself
//! remains a pure step function.

use crate::config::{EopConfig, Interpolation};
use crate::leap_second;
use crate::quality::DataQuality;
use crate::resolver::finals_window;
use eop_core::epoch::calendar_from_mjd;
use eop_core::{CalendarDate, Epoch, EopResult};
use eop_data::lookup;
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// Interpolated UT1-UTC at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ut1Entry {
    /// UT1-UTC in seconds.
    pub ut1_utc: f64,
    /// The query MJD.
    pub mjd: f64,
    pub quality: DataQuality,
}

impl Ut1Entry {
    pub fn observed(&self) -> bool {
        self.quality.is_observed()
    }

    pub fn predicted(&self) -> bool {
        self.quality.is_predicted()
    }

    /// The calendar day covering the query MJD.
    pub fn date(&self) -> CalendarDate {
        calendar_from_mjd(self.mjd)
    }
}

pub(crate) fn detailed_at(
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<Ut1Entry> {
    let window = finals_window(finals, config, epoch, interpolation)?;

    let tai_utc_at_query = leap_second::offset_at(leap, window.mjd)? as f64;
    let ut1_tai = window.interpolate(|r| {
        let tai_utc = leap_second::offset_at(leap, r.mjd)? as f64;
        Ok(r.best_ut1_utc() - tai_utc)
    })?;
    let quality = window.quality(|r| Some(r.ut1_flag));

    Ok(Ut1Entry {
        ut1_utc: ut1_tai + tai_utc_at_query,
        mjd: window.mjd,
        quality,
    })
}

pub(crate) fn between(
    finals: &ObservationTable<FinalsRecord>,
    start_mjd: f64,
    end_mjd: f64,
) -> Vec<Ut1Entry> {
    lookup::range(finals, start_mjd, end_mjd)
        .iter()
        .map(|r| Ut1Entry {
            ut1_utc: r.best_ut1_utc(),
            mjd: r.mjd,
            quality: DataQuality::from_flag(r.ut1_flag),
        })
        .collect()
}

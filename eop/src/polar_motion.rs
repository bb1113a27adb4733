//! Polar motion: the drift of Earth's rotation axis relative to its crust.
//!
//! Pole coordinates (x, y) are tabulated in arcseconds in the finals series
//! and interpolated directly; Bulletin B revisions are preferred over the
//! Bulletin A values when present.

use crate::config::{EopConfig, Interpolation};
use crate::quality::DataQuality;
use crate::resolver::finals_window;
use eop_core::epoch::calendar_from_mjd;
use eop_core::{CalendarDate, Epoch, EopResult};
use eop_data::lookup;
use eop_data::record::FinalsRecord;
use eop_data::table::ObservationTable;

/// Interpolated pole coordinates at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarMotionEntry {
    /// Pole x-coordinate in arcseconds.
    pub x: f64,
    /// Pole y-coordinate in arcseconds.
    pub y: f64,
    /// The query MJD.
    pub mjd: f64,
    pub quality: DataQuality,
}

impl PolarMotionEntry {
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

pub(crate) fn at(
    table: &ObservationTable<FinalsRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<PolarMotionEntry> {
    let window = finals_window(table, config, epoch, interpolation)?;

    let x = window.interpolate(|r| Ok(r.best_pm_x()))?;
    let y = window.interpolate(|r| Ok(r.best_pm_y()))?;
    let quality = window.quality(|r| Some(r.pm_flag));

    Ok(PolarMotionEntry {
        x,
        y,
        mjd: window.mjd,
        quality,
    })
}

pub(crate) fn between(
    table: &ObservationTable<FinalsRecord>,
    start_mjd: f64,
    end_mjd: f64,
) -> Vec<PolarMotionEntry> {
    lookup::range(table, start_mjd, end_mjd)
        .iter()
        .map(|r| PolarMotionEntry {
            x: r.best_pm_x(),
            y: r.best_pm_y(),
            mjd: r.mjd,
            quality: DataQuality::from_flag(r.pm_flag),
        })
        .collect()
}

//! Length-of-day excess: deviation of the actual day from 86400 SI seconds.
//!
//! LOD is absent from the tail of the finals series (the far prediction
//! horizon); a window touching such a record makes the query fail as
//! out of coverage rather than silently degrade.

use crate::config::{EopConfig, Interpolation};
use crate::quality::DataQuality;
use crate::resolver::finals_window;
use eop_core::epoch::calendar_from_mjd;
use eop_core::{CalendarDate, Epoch, EopError, EopResult};
use eop_data::lookup;
use eop_data::record::FinalsRecord;
use eop_data::table::ObservationTable;

/// Interpolated length-of-day excess at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthOfDayEntry {
    /// Excess length of day in seconds.
    pub length_of_day: f64,
    /// The query MJD.
    pub mjd: f64,
    pub quality: DataQuality,
}

impl LengthOfDayEntry {
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
    table: &ObservationTable<FinalsRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<LengthOfDayEntry> {
    let window = finals_window(table, config, epoch, interpolation)?;

    let length_of_day = window.interpolate(|r| {
        r.lod.ok_or_else(|| {
            EopError::out_of_coverage(
                r.mjd,
                format!("length of day is unavailable at MJD {}", r.mjd),
            )
        })
    })?;
    // LOD shares the UT1 flag: both derive from the same rotation series
    let quality = window.quality(|r| Some(r.ut1_flag));

    Ok(LengthOfDayEntry {
        length_of_day,
        mjd: window.mjd,
        quality,
    })
}

pub(crate) fn between(
    table: &ObservationTable<FinalsRecord>,
    start_mjd: f64,
    end_mjd: f64,
) -> Vec<LengthOfDayEntry> {
    lookup::range(table, start_mjd, end_mjd)
        .iter()
        .filter_map(|r| {
            r.lod.map(|length_of_day| LengthOfDayEntry {
                length_of_day,
                mjd: r.mjd,
                quality: DataQuality::from_flag(r.ut1_flag),
            })
        })
        .collect()
}

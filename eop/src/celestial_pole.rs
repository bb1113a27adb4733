//! Celestial pole offsets: dX/dY corrections to the modeled precession and
//! nutation of Earth's rotation axis, in milliarcseconds.

use crate::config::{EopConfig, Interpolation};
use crate::quality::DataQuality;
use crate::resolver::finals_window;
use eop_core::epoch::calendar_from_mjd;
use eop_core::{CalendarDate, Epoch, EopError, EopResult};
use eop_data::lookup;
use eop_data::record::FinalsRecord;
use eop_data::table::ObservationTable;

/// Interpolated celestial pole offsets at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelestialPoleEntry {
    /// dX correction in milliarcseconds.
    pub x: f64,
    /// dY correction in milliarcseconds.
    pub y: f64,
    /// The query MJD.
    pub mjd: f64,
    pub quality: DataQuality,
}

impl CelestialPoleEntry {
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

fn unavailable(mjd: f64) -> EopError {
    EopError::out_of_coverage(
        mjd,
        format!("celestial pole offsets are unavailable at MJD {mjd}"),
    )
}

pub(crate) fn at(
    table: &ObservationTable<FinalsRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<CelestialPoleEntry> {
    let window = finals_window(table, config, epoch, interpolation)?;

    let x = window.interpolate(|r| r.best_dx().ok_or_else(|| unavailable(r.mjd)))?;
    let y = window.interpolate(|r| r.best_dy().ok_or_else(|| unavailable(r.mjd)))?;
    let quality = window.quality(|r| r.nutation_flag);

    Ok(CelestialPoleEntry {
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
) -> Vec<CelestialPoleEntry> {
    lookup::range(table, start_mjd, end_mjd)
        .iter()
        .filter_map(|r| {
            let (x, y) = (r.best_dx()?, r.best_dy()?);
            Some(CelestialPoleEntry {
                x,
                y,
                mjd: r.mjd,
                // Records without a nutation flag count as observed
                quality: r
                    .nutation_flag
                    .map_or(DataQuality::Observed, DataQuality::from_flag),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eop_data::test_helpers::finals_table;
    use eop_data::ValueFlag;

    #[test]
    fn test_interpolates_offsets() {
        let table = finals_table(41684.0, 10, |b| {
            let mjd = b.mjd();
            b.pole_offsets(Some(0.1 * (mjd - 41684.0)), Some(-0.05 * (mjd - 41684.0)))
        });
        let entry = at(&table, &EopConfig::default(), Epoch::mjd(41686.5), None).unwrap();
        assert!((entry.x - 0.25).abs() < 1e-12);
        assert!((entry.y + 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_missing_offsets_fail() {
        let table = finals_table(41684.0, 10, |b| b.pole_offsets(None, None));
        let err = at(&table, &EopConfig::default(), Epoch::mjd(41686.5), None).unwrap_err();
        assert!(matches!(err, EopError::OutOfRange { .. }));
        assert!(err.to_string().contains("celestial pole"));
    }

    #[test]
    fn test_quality_from_nutation_flag() {
        let table = finals_table(41684.0, 10, |b| {
            b.nutation_flag(Some(ValueFlag::Predicted))
        });
        let entry = at(&table, &EopConfig::default(), Epoch::mjd(41686.5), None).unwrap();
        assert!(entry.predicted());

        // Absent flags count as observed
        let table = finals_table(41684.0, 10, |b| b.nutation_flag(None));
        let entry = at(&table, &EopConfig::default(), Epoch::mjd(41686.5), None).unwrap();
        assert!(entry.observed());
    }

    #[test]
    fn test_between_skips_incomplete_records() {
        let table = finals_table(41684.0, 10, |b| {
            if b.mjd() == 41686.0 {
                b.pole_offsets(None, Some(0.1))
            } else {
                b
            }
        });
        let entries = between(&table, 41685.0, 41687.0);
        assert_eq!(entries.len(), 2);
    }
}

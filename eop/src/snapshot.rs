//! A combined snapshot of all Earth orientation parameters at one instant.

use crate::config::{EopConfig, Interpolation};
use crate::quality::DataQuality;
use crate::{celestial_pole, length_of_day, polar_motion, ut1};
use eop_core::epoch::calendar_from_mjd;
use eop_core::{CalendarDate, Epoch, EopResult};
use eop_data::record::{FinalsRecord, LeapSecondRecord};
use eop_data::table::ObservationTable;

/// All interpolated parameters at a query instant.
///
/// Quality is the worst case across the contributing resolvers: predicted
/// if any sub-computation drew on predicted data, observed only if all were
/// fully observed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EopEntry {
    /// Pole x-coordinate in arcseconds.
    pub polar_motion_x: f64,
    /// Pole y-coordinate in arcseconds.
    pub polar_motion_y: f64,
    /// UT1-UTC in seconds.
    pub ut1_utc: f64,
    /// Excess length of day in seconds.
    pub length_of_day: f64,
    /// dX correction in milliarcseconds.
    pub celestial_pole_x: f64,
    /// dY correction in milliarcseconds.
    pub celestial_pole_y: f64,
    /// The query MJD.
    pub mjd: f64,
    pub quality: DataQuality,
}

impl EopEntry {
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
    finals: &ObservationTable<FinalsRecord>,
    leap: &ObservationTable<LeapSecondRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<EopEntry> {
    let query_mjd = epoch.to_mjd()?;
    let at_mjd = Epoch::mjd(query_mjd);

    let pm = polar_motion::at(finals, config, at_mjd, interpolation)?;
    let dut1 = ut1::detailed_at(finals, leap, config, at_mjd, interpolation)?;
    let lod = length_of_day::detailed_at(finals, config, at_mjd, interpolation)?;
    let pole = celestial_pole::at(finals, config, at_mjd, interpolation)?;

    let quality = pm
        .quality
        .worst(dut1.quality)
        .worst(lod.quality)
        .worst(pole.quality);

    Ok(EopEntry {
        polar_motion_x: pm.x,
        polar_motion_y: pm.y,
        ut1_utc: dut1.ut1_utc,
        length_of_day: lod.length_of_day,
        celestial_pole_x: pole.x,
        celestial_pole_y: pole.y,
        mjd: query_mjd,
        quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eop_data::test_helpers::{finals_table, leap_second_table};
    use eop_data::ValueFlag;

    fn leap() -> ObservationTable<LeapSecondRecord> {
        leap_second_table(&[(41317.0, 12)])
    }

    #[test]
    fn test_combines_all_parameters() {
        let finals = finals_table(41684.0, 10, |b| b.ut1_utc(0.8).pm(0.12, 0.3));
        let entry = at(
            &finals,
            &leap(),
            &EopConfig::default(),
            Epoch::mjd(41686.0),
            None,
        )
        .unwrap();

        assert!((entry.polar_motion_x - 0.12).abs() < 1e-10);
        assert!((entry.polar_motion_y - 0.3).abs() < 1e-10);
        assert!((entry.ut1_utc - 0.8).abs() < 1e-10);
        assert!((entry.length_of_day - 0.001).abs() < 1e-10);
        assert!((entry.celestial_pole_x - 0.2).abs() < 1e-10);
        assert!((entry.celestial_pole_y + 0.1).abs() < 1e-10);
        assert_eq!(entry.mjd, 41686.0);
        assert!(entry.observed());
    }

    #[test]
    fn test_quality_is_worst_case() {
        // Only the nutation flag is predicted; the composite must still be
        // predicted even though polar motion and UT1 are observed
        let finals = finals_table(41684.0, 10, |b| {
            b.nutation_flag(Some(ValueFlag::Predicted))
        });
        let entry = at(
            &finals,
            &leap(),
            &EopConfig::default(),
            Epoch::mjd(41686.5),
            None,
        )
        .unwrap();
        assert!(entry.predicted());
    }

    #[test]
    fn test_quality_observed_only_if_all_observed() {
        let finals = finals_table(41684.0, 10, |b| b);
        let entry = at(
            &finals,
            &leap(),
            &EopConfig::default(),
            Epoch::mjd(41686.5),
            None,
        )
        .unwrap();
        assert!(entry.observed());
    }

    #[test]
    fn test_failure_in_any_component_fails_snapshot() {
        let finals = finals_table(41684.0, 10, |b| b.pole_offsets(None, None));
        let result = at(
            &finals,
            &leap(),
            &EopConfig::default(),
            Epoch::mjd(41686.5),
            None,
        );
        assert!(result.is_err());
    }
}

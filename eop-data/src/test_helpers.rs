//! Builders for synthetic observation records, shared by tests across the
//! workspace.

use crate::record::{FinalsRecord, LeapSecondRecord, ValueFlag};
use crate::table::ObservationTable;
use eop_core::epoch::calendar_from_mjd;

/// Builds a [`FinalsRecord`] with plausible defaults: observed flags, smooth
/// parameter values, no Bulletin B overrides.
pub struct FinalsRecordBuilder {
    record: FinalsRecord,
}

impl FinalsRecordBuilder {
    pub fn new(mjd: f64) -> Self {
        Self {
            record: FinalsRecord {
                mjd,
                date: calendar_from_mjd(mjd),
                pm_flag: ValueFlag::Observed,
                pm_x: 0.1,
                pm_x_error: 0.0001,
                pm_y: 0.3,
                pm_y_error: 0.0001,
                ut1_flag: ValueFlag::Observed,
                ut1_utc: 0.5,
                ut1_utc_error: 0.00001,
                lod: Some(0.001),
                lod_error: Some(0.00001),
                nutation_flag: Some(ValueFlag::Observed),
                dx: Some(0.2),
                dx_error: Some(0.05),
                dy: Some(-0.1),
                dy_error: Some(0.05),
                bulletin_b_pm_x: None,
                bulletin_b_pm_y: None,
                bulletin_b_ut1_utc: None,
                bulletin_b_dx: None,
                bulletin_b_dy: None,
            },
        }
    }

    pub fn ut1_utc(mut self, value: f64) -> Self {
        self.record.ut1_utc = value;
        self
    }

    pub fn pm(mut self, x: f64, y: f64) -> Self {
        self.record.pm_x = x;
        self.record.pm_y = y;
        self
    }

    pub fn lod(mut self, value: Option<f64>) -> Self {
        self.record.lod = value;
        self
    }

    pub fn pole_offsets(mut self, dx: Option<f64>, dy: Option<f64>) -> Self {
        self.record.dx = dx;
        self.record.dy = dy;
        self
    }

    pub fn pm_flag(mut self, flag: ValueFlag) -> Self {
        self.record.pm_flag = flag;
        self
    }

    pub fn ut1_flag(mut self, flag: ValueFlag) -> Self {
        self.record.ut1_flag = flag;
        self
    }

    pub fn nutation_flag(mut self, flag: Option<ValueFlag>) -> Self {
        self.record.nutation_flag = flag;
        self
    }

    /// Marks every parameter group as predicted.
    pub fn predicted(mut self) -> Self {
        self.record.pm_flag = ValueFlag::Predicted;
        self.record.ut1_flag = ValueFlag::Predicted;
        self.record.nutation_flag = Some(ValueFlag::Predicted);
        self
    }

    pub fn bulletin_b_ut1_utc(mut self, value: Option<f64>) -> Self {
        self.record.bulletin_b_ut1_utc = value;
        self
    }

    pub fn bulletin_b_pm(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.record.bulletin_b_pm_x = x;
        self.record.bulletin_b_pm_y = y;
        self
    }

    pub fn mjd(&self) -> f64 {
        self.record.mjd
    }

    pub fn build(self) -> FinalsRecord {
        self.record
    }
}

pub fn leap_second_record(mjd: f64, tai_utc: i32) -> LeapSecondRecord {
    LeapSecondRecord {
        mjd,
        date: calendar_from_mjd(mjd),
        tai_utc,
    }
}

/// A finals table of `days` consecutive records starting at `start_mjd`,
/// with each record customized by `build`.
pub fn finals_table(
    start_mjd: f64,
    days: usize,
    build: impl Fn(FinalsRecordBuilder) -> FinalsRecordBuilder,
) -> ObservationTable<FinalsRecord> {
    let records = (0..days)
        .map(|i| build(FinalsRecordBuilder::new(start_mjd + i as f64)).build())
        .collect();
    ObservationTable::new(records).expect("synthetic finals table is sorted")
}

pub fn leap_second_table(entries: &[(f64, i32)]) -> ObservationTable<LeapSecondRecord> {
    let records = entries
        .iter()
        .map(|&(mjd, tai_utc)| leap_second_record(mjd, tai_utc))
        .collect();
    ObservationTable::new(records).expect("synthetic leap second table is sorted")
}

//! The query surface of the resolution engine.
//!
//! An [`EopService`] owns the lazily loaded observation tables and the
//! interpolation configuration. Every query family hangs off it with the
//! same shape: `family(epoch, interpolation_override)` for a point query
//! and `family_between(start, end)` for the inclusive record range. A
//! per-call override selects the method for that call only and never
//! mutates the service configuration.

use crate::config::{EopConfig, Interpolation};
use crate::{
    celestial_pole, delta_t, era, gmst, leap_second, length_of_day, polar_motion, rotation,
    snapshot, tai, ut1,
};
use crate::{
    CelestialPoleEntry, DeltaTEntry, EopEntry, LengthOfDayEntry, PolarMotionEntry, Ut1Entry,
};
use eop_core::{Epoch, EopResult, RotationMatrix3};
use eop_data::record::LeapSecondRecord;
use eop_data::table::{EopSource, FileSource, ObservationTable, TableStore};
use std::sync::Arc;

pub struct EopService {
    store: TableStore,
    config: EopConfig,
}

impl EopService {
    /// A service over the given source with the default configuration.
    pub fn new(source: impl EopSource + 'static) -> Self {
        Self {
            store: TableStore::new(source),
            config: EopConfig::default(),
        }
    }

    /// A service with an explicit configuration, validated up front.
    pub fn with_config(source: impl EopSource + 'static, config: EopConfig) -> EopResult<Self> {
        config.validate()?;
        Ok(Self {
            store: TableStore::new(source),
            config,
        })
    }

    /// A service reading the two IERS files from disk.
    pub fn from_files(
        finals_path: impl Into<std::path::PathBuf>,
        leap_second_path: impl Into<std::path::PathBuf>,
    ) -> Self {
        Self::new(FileSource::new(finals_path.into(), leap_second_path.into()))
    }

    pub fn config(&self) -> &EopConfig {
        &self.config
    }

    /// Replaces the configuration and invalidates the memoized tables, so
    /// the change takes effect deterministically with no stale state.
    pub fn set_config(&mut self, config: EopConfig) -> EopResult<()> {
        config.validate()?;
        self.config = config;
        self.store.invalidate();
        Ok(())
    }

    /// Drops the memoized tables; the next query reloads from the source.
    pub fn reload(&self) {
        self.store.invalidate();
    }

    // --- polar motion ---

    pub fn polar_motion(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<PolarMotionEntry> {
        let finals = self.store.finals()?;
        polar_motion::at(&finals, &self.config, epoch, interpolation)
    }

    pub fn polar_motion_between(
        &self,
        start: Epoch,
        end: Epoch,
    ) -> EopResult<Vec<PolarMotionEntry>> {
        let finals = self.store.finals()?;
        Ok(polar_motion::between(
            &finals,
            start.to_mjd()?,
            end.to_mjd()?,
        ))
    }

    // --- UT1 ---

    /// UT1-UTC in seconds.
    pub fn ut1(&self, epoch: Epoch, interpolation: Option<Interpolation>) -> EopResult<f64> {
        Ok(self.ut1_detailed(epoch, interpolation)?.ut1_utc)
    }

    pub fn ut1_detailed(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<Ut1Entry> {
        let finals = self.store.finals()?;
        let leap = self.store.leap_seconds()?;
        ut1::detailed_at(&finals, &leap, &self.config, epoch, interpolation)
    }

    pub fn ut1_between(&self, start: Epoch, end: Epoch) -> EopResult<Vec<Ut1Entry>> {
        let finals = self.store.finals()?;
        Ok(ut1::between(&finals, start.to_mjd()?, end.to_mjd()?))
    }

    // --- length of day ---

    /// Excess length of day in seconds.
    pub fn length_of_day(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<f64> {
        Ok(self
            .length_of_day_detailed(epoch, interpolation)?
            .length_of_day)
    }

    pub fn length_of_day_detailed(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<LengthOfDayEntry> {
        let finals = self.store.finals()?;
        length_of_day::detailed_at(&finals, &self.config, epoch, interpolation)
    }

    pub fn length_of_day_between(
        &self,
        start: Epoch,
        end: Epoch,
    ) -> EopResult<Vec<LengthOfDayEntry>> {
        let finals = self.store.finals()?;
        Ok(length_of_day::between(
            &finals,
            start.to_mjd()?,
            end.to_mjd()?,
        ))
    }

    // --- celestial pole offsets ---

    pub fn celestial_pole_offset(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<CelestialPoleEntry> {
        let finals = self.store.finals()?;
        celestial_pole::at(&finals, &self.config, epoch, interpolation)
    }

    pub fn celestial_pole_offset_between(
        &self,
        start: Epoch,
        end: Epoch,
    ) -> EopResult<Vec<CelestialPoleEntry>> {
        let finals = self.store.finals()?;
        Ok(celestial_pole::between(
            &finals,
            start.to_mjd()?,
            end.to_mjd()?,
        ))
    }

    // --- composite snapshot ---

    pub fn eop(&self, epoch: Epoch, interpolation: Option<Interpolation>) -> EopResult<EopEntry> {
        let finals = self.store.finals()?;
        let leap = self.store.leap_seconds()?;
        snapshot::at(&finals, &leap, &self.config, epoch, interpolation)
    }

    // --- leap seconds and time-scale conversion ---

    /// TAI-UTC in seconds at the given UTC instant.
    pub fn leap_second(&self, epoch: Epoch) -> EopResult<i32> {
        let leap = self.store.leap_seconds()?;
        leap_second::offset_at(&leap, epoch.to_mjd()?)
    }

    /// The full ordered leap-second table.
    pub fn leap_second_table(&self) -> EopResult<Arc<ObservationTable<LeapSecondRecord>>> {
        self.store.leap_seconds()
    }

    /// The first leap-second entry strictly after `after`, if any.
    pub fn next_leap_second(&self, after: Epoch) -> EopResult<Option<LeapSecondRecord>> {
        let leap = self.store.leap_seconds()?;
        Ok(leap_second::next_scheduled(&leap, after.to_mjd()?))
    }

    /// Converts a UTC instant to a TAI MJD.
    pub fn utc_to_tai(&self, epoch: Epoch) -> EopResult<f64> {
        let leap = self.store.leap_seconds()?;
        tai::utc_to_tai(&leap, epoch.to_mjd()?)
    }

    /// Converts a TAI instant to a UTC MJD.
    pub fn tai_to_utc(&self, epoch: Epoch) -> EopResult<f64> {
        let leap = self.store.leap_seconds()?;
        tai::tai_to_utc(&leap, epoch.to_mjd()?)
    }

    // --- derived angles and matrices ---

    /// TT - UT1 in seconds.
    pub fn delta_t(&self, epoch: Epoch) -> EopResult<DeltaTEntry> {
        // The estimated regime never touches the tables, so resolve the
        // regime before loading anything
        let query_mjd = epoch.to_mjd()?;
        if delta_t::needs_tables(query_mjd) {
            let finals = self.store.finals()?;
            let leap = self.store.leap_seconds()?;
            delta_t::at(&finals, &leap, &self.config, Epoch::mjd(query_mjd))
        } else {
            delta_t::estimated_at(Epoch::mjd(query_mjd))
        }
    }

    /// Earth Rotation Angle in radians, in [0, 2pi).
    pub fn earth_rotation_angle(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<f64> {
        let finals = self.store.finals()?;
        let leap = self.store.leap_seconds()?;
        era::at(&finals, &leap, &self.config, epoch, interpolation)
    }

    /// Greenwich Mean Sidereal Time in radians, in [0, 2pi).
    pub fn gmst(&self, epoch: Epoch, interpolation: Option<Interpolation>) -> EopResult<f64> {
        let finals = self.store.finals()?;
        let leap = self.store.leap_seconds()?;
        gmst::at(&finals, &leap, &self.config, epoch, interpolation)
    }

    /// The polar motion matrix W at the query instant.
    pub fn polar_motion_matrix(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<RotationMatrix3> {
        let finals = self.store.finals()?;
        rotation::polar_motion_matrix(&finals, &self.config, epoch, interpolation)
    }

    /// The combined terrestrial rotation R3(ERA) * W at the query instant.
    pub fn terrestrial_matrix(
        &self,
        epoch: Epoch,
        interpolation: Option<Interpolation>,
    ) -> EopResult<RotationMatrix3> {
        let finals = self.store.finals()?;
        let leap = self.store.leap_seconds()?;
        rotation::terrestrial_matrix(&finals, &leap, &self.config, epoch, interpolation)
    }
}

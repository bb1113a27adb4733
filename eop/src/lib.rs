//! Earth orientation parameter resolution.
//!
//! Answers "what were Earth's orientation parameters at an arbitrary
//! instant?": the offset between astronomical and atomic time scales, the
//! wobble of the rotation axis, the length-of-day excess and the celestial
//! pole corrections, together with the rotation angles and matrices built
//! from them.
//!
//! All queries go through an [`EopService`], which owns the lazily loaded
//! observation tables and the interpolation configuration:
//!
//! ```no_run
//! use eop::{Epoch, EopService, Interpolation};
//!
//! let service = EopService::from_files("finals2000A.all", "Leap_Second.dat");
//!
//! let pm = service.polar_motion(Epoch::calendar(2017, 6, 1), None)?;
//! println!("pole at ({:.6}\", {:.6}\") [{:?}]", pm.x, pm.y, pm.quality);
//!
//! // Per-call override never touches the service configuration
//! let dut1 = service.ut1(Epoch::mjd(57905.5), Some(Interpolation::Linear))?;
//! let matrix = service.terrestrial_matrix(Epoch::mjd(57905.5), None)?;
//! # Ok::<(), eop::EopError>(())
//! ```
//!
//! Every computation is a pure, bounded function over in-memory sorted
//! tables; the only side effect in the crate is the one-time table load.

pub mod celestial_pole;
pub mod config;
pub mod delta_t;
pub mod era;
pub mod gmst;
pub mod leap_second;
pub mod length_of_day;
pub mod polar_motion;
pub mod quality;
mod resolver;
pub mod rotation;
pub mod service;
pub mod snapshot;
pub mod tai;
pub mod ut1;

pub use celestial_pole::CelestialPoleEntry;
pub use config::{EopConfig, Interpolation};
pub use delta_t::{DeltaTEntry, DeltaTSource};
pub use length_of_day::LengthOfDayEntry;
pub use polar_motion::PolarMotionEntry;
pub use quality::DataQuality;
pub use service::EopService;
pub use snapshot::EopEntry;
pub use ut1::Ut1Entry;

pub use eop_core::{CalendarDate, Epoch, EopError, EopResult, RotationMatrix3};
pub use eop_data::{
    EopSource, FileSource, FinalsRecord, LeapSecondRecord, ObservationTable, ValueFlag,
};

//! IERS observation data for the Earth orientation engine.
//!
//! This crate is the loader seam described by the engine's data model: it
//! turns the two raw IERS products, the `finals2000A.all` combined series
//! and the `Leap_Second.dat` table, into typed, validated, MJD-sorted
//! [`ObservationTable`]s, and provides the binary-search lookup and the
//! interpolation primitives the resolvers run on. Nothing here performs
//! network I/O; a [`FileSource`] reads local files and any other
//! [`EopSource`] implementation can inject records directly.

pub mod interpolation;
pub mod lookup;
pub mod parser;
pub mod record;
pub mod table;
pub mod test_helpers;

pub use record::{FinalsRecord, LeapSecondRecord, ValueFlag};
pub use table::{EopSource, FileSource, HasMjd, ObservationTable, TableStore};

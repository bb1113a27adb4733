//! Step-function lookup over the leap-second table.
//!
//! TAI-UTC is a step function of UTC: it changes by exactly one second at a
//! leap-second boundary and is constant in between. A query returns the
//! offset of the latest record at or before the query MJD; present and
//! future queries both return the most recent known offset. Only queries
//! before the table's first entry fail.

use eop_core::{EopError, EopResult};
use eop_data::record::LeapSecondRecord;
use eop_data::table::ObservationTable;

/// TAI-UTC in seconds at the given UTC MJD.
pub(crate) fn offset_at(table: &ObservationTable<LeapSecondRecord>, mjd: f64) -> EopResult<i32> {
    let first = table.first_mjd();
    if mjd < first {
        return Err(EopError::out_of_range(mjd, first, table.last_mjd()));
    }

    let records = table.records();
    let index = records.partition_point(|r| r.mjd <= mjd);

    // index >= 1 because mjd >= first; index == len means the query is at or
    // past the last step, whose offset is still in effect
    Ok(records[index - 1].tai_utc)
}

/// The first entry strictly after `after_mjd`, if any is scheduled.
pub(crate) fn next_scheduled(
    table: &ObservationTable<LeapSecondRecord>,
    after_mjd: f64,
) -> Option<LeapSecondRecord> {
    table.records().iter().find(|r| r.mjd > after_mjd).copied()
}

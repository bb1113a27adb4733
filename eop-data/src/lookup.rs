//! Binary-search window, bracket and range extraction over sorted tables.
//!
//! All lookups share one pivot: the index of the first record with MJD
//! strictly greater than the query (`partition_point`). A bracket is always
//! the forward-looking pair around that pivot: on an exact grid hit it
//! returns (that record, the next one), never a degenerate pair. A window is
//! a contiguous span of `order` records centered on the query and shifted
//! inward near the table edges so it never runs off either end.

use crate::table::{HasMjd, ObservationTable};
use eop_core::{EopError, EopResult};

/// Fails with [`EopError::OutOfRange`] unless `first <= mjd <= last`.
pub fn validate_range<R: HasMjd>(table: &ObservationTable<R>, mjd: f64) -> EopResult<()> {
    let first = table.first_mjd();
    let last = table.last_mjd();

    if mjd < first || mjd > last {
        return Err(EopError::out_of_range(mjd, first, last));
    }

    Ok(())
}

/// Returns the two records bracketing `mjd` as a slice of exactly two.
///
/// The pair is (record at pivot - 1, record at pivot). Fails
/// [`EopError::OutOfRange`] when the query is outside the table or equals
/// the last record's MJD, which leaves no right neighbor.
pub fn bracket<R: HasMjd>(table: &ObservationTable<R>, mjd: f64) -> EopResult<&[R]> {
    validate_range(table, mjd)?;

    let records = table.records();
    let index = records.partition_point(|r| r.mjd() <= mjd);

    if index == 0 || index == records.len() {
        return Err(EopError::out_of_range(
            mjd,
            table.first_mjd(),
            table.last_mjd(),
        ));
    }

    Ok(&records[index - 1..=index])
}

/// Returns a contiguous span of `order` records centered on `mjd`.
///
/// Near either table edge the span is shifted inward rather than truncated,
/// so it always holds exactly `order` records and always contains the
/// bracketing pair. `order` must be even and at least 2, and cannot exceed
/// the table length.
pub fn window<R: HasMjd>(table: &ObservationTable<R>, mjd: f64, order: usize) -> EopResult<&[R]> {
    if order < 2 || order % 2 != 0 {
        return Err(EopError::configuration(format!(
            "interpolation order must be even and >= 2, got {order}"
        )));
    }
    if order > table.len() {
        return Err(EopError::configuration(format!(
            "interpolation order {order} exceeds table size {}",
            table.len()
        )));
    }

    validate_range(table, mjd)?;

    let records = table.records();
    let index = records.partition_point(|r| r.mjd() <= mjd);
    let center = index as isize - 1;

    let half = (order / 2) as isize;
    let start = (center - half + 1).clamp(0, (records.len() - order) as isize) as usize;

    Ok(&records[start..start + order])
}

/// Returns the records with `start_mjd <= mjd <= end_mjd`, possibly empty.
pub fn range<R: HasMjd>(table: &ObservationTable<R>, start_mjd: f64, end_mjd: f64) -> &[R] {
    let records = table.records();
    let first = records.partition_point(|r| r.mjd() < start_mjd);
    let last = records.partition_point(|r| r.mjd() <= end_mjd);
    &records[first.min(last)..last]
}

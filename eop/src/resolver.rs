//! The shared window-resolution pipeline.
//!
//! Every finals-series parameter query runs the same steps: normalize the
//! instant to an MJD, pick the interpolation method (per-call override, else
//! the service config), pull the matching window or bracket from the table,
//! interpolate the requested fields against the records' MJDs, and fold the
//! window's flags into a quality tag. The per-parameter modules supply only
//! a field-extraction closure and a flag selector, so the window, override
//! and quality logic exists exactly once.

use crate::config::{EopConfig, Interpolation};
use crate::quality::DataQuality;
use eop_core::{Epoch, EopResult};
use eop_data::record::{FinalsRecord, ValueFlag};
use eop_data::table::ObservationTable;
use eop_data::{interpolation, lookup};

/// A resolved interpolation window for one query.
#[derive(Debug)]
pub(crate) struct FinalsWindow<'a> {
    /// The normalized query MJD.
    pub mjd: f64,
    records: &'a [FinalsRecord],
    method: Interpolation,
}

/// Steps 1-3 of the pipeline: normalize, select method, build the window.
pub(crate) fn finals_window<'a>(
    table: &'a ObservationTable<FinalsRecord>,
    config: &EopConfig,
    epoch: Epoch,
    interpolation: Option<Interpolation>,
) -> EopResult<FinalsWindow<'a>> {
    let mjd = epoch.to_mjd()?;
    let method = interpolation.unwrap_or(config.interpolation);

    let records = match method {
        Interpolation::Lagrange => lookup::window(table, mjd, config.lagrange_order)?,
        Interpolation::Linear => lookup::bracket(table, mjd)?,
    };

    Ok(FinalsWindow {
        mjd,
        records,
        method,
    })
}

impl FinalsWindow<'_> {
    /// Interpolates one field of the window's records at the query MJD.
    pub fn interpolate(&self, extract: impl Fn(&FinalsRecord) -> EopResult<f64>) -> EopResult<f64> {
        let xs: Vec<f64> = self.records.iter().map(|r| r.mjd).collect();
        let mut ys = Vec::with_capacity(self.records.len());
        for record in self.records {
            ys.push(extract(record)?);
        }

        match self.method {
            Interpolation::Lagrange => interpolation::lagrange(&xs, &ys, self.mjd),
            Interpolation::Linear => interpolation::linear(&xs, &ys, self.mjd),
        }
    }

    /// Predicted if any window record's selected flag is predicted.
    pub fn quality(&self, flag: impl Fn(&FinalsRecord) -> Option<ValueFlag>) -> DataQuality {
        let any_predicted = self
            .records
            .iter()
            .any(|r| flag(r).is_some_and(ValueFlag::is_predicted));

        if any_predicted {
            DataQuality::Predicted
        } else {
            DataQuality::Observed
        }
    }
}

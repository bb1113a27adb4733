//! Typed records for the two IERS observation series.
//!
//! A [`FinalsRecord`] carries one day of the combined Bulletin A series:
//! value/error/flag triples for polar motion, UT1-UTC, length-of-day excess
//! and the celestial pole offsets, plus the optional higher-precision
//! Bulletin B revisions of the same parameters. A [`LeapSecondRecord`] is one
//! step of the cumulative TAI-UTC table. Records are immutable once parsed.

use eop_core::CalendarDate;

/// Whether a tabulated value came from measurement or forward extrapolation.
///
/// The raw files encode this as `I` (IERS-observed) or `P` (predicted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFlag {
    Observed,
    Predicted,
}

impl ValueFlag {
    /// Maps the raw file code to a flag, `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "I" => Some(Self::Observed),
            "P" => Some(Self::Predicted),
            _ => None,
        }
    }

    pub fn is_predicted(self) -> bool {
        self == Self::Predicted
    }
}

/// One day of the finals2000A combined series.
///
/// Bulletin B fields are later, higher-precision revisions of the same
/// parameters; the `best_*` accessors prefer them when present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalsRecord {
    pub mjd: f64,
    pub date: CalendarDate,

    pub pm_flag: ValueFlag,
    pub pm_x: f64,
    pub pm_x_error: f64,
    pub pm_y: f64,
    pub pm_y_error: f64,

    pub ut1_flag: ValueFlag,
    pub ut1_utc: f64,
    pub ut1_utc_error: f64,

    pub lod: Option<f64>,
    pub lod_error: Option<f64>,

    pub nutation_flag: Option<ValueFlag>,
    pub dx: Option<f64>,
    pub dx_error: Option<f64>,
    pub dy: Option<f64>,
    pub dy_error: Option<f64>,

    pub bulletin_b_pm_x: Option<f64>,
    pub bulletin_b_pm_y: Option<f64>,
    pub bulletin_b_ut1_utc: Option<f64>,
    pub bulletin_b_dx: Option<f64>,
    pub bulletin_b_dy: Option<f64>,
}

impl FinalsRecord {
    /// Pole x-coordinate in arcseconds, Bulletin B if available.
    pub fn best_pm_x(&self) -> f64 {
        self.bulletin_b_pm_x.unwrap_or(self.pm_x)
    }

    /// Pole y-coordinate in arcseconds, Bulletin B if available.
    pub fn best_pm_y(&self) -> f64 {
        self.bulletin_b_pm_y.unwrap_or(self.pm_y)
    }

    /// UT1-UTC in seconds, Bulletin B if available.
    pub fn best_ut1_utc(&self) -> f64 {
        self.bulletin_b_ut1_utc.unwrap_or(self.ut1_utc)
    }

    /// dX correction in milliarcseconds, Bulletin B if available.
    pub fn best_dx(&self) -> Option<f64> {
        self.bulletin_b_dx.or(self.dx)
    }

    /// dY correction in milliarcseconds, Bulletin B if available.
    pub fn best_dy(&self) -> Option<f64> {
        self.bulletin_b_dy.or(self.dy)
    }
}

/// One step of the cumulative TAI-UTC table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapSecondRecord {
    pub mjd: f64,
    pub date: CalendarDate,
    /// Cumulative TAI-UTC offset in effect from `mjd` onward, in seconds.
    pub tai_utc: i32,
}

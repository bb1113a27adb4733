//! Data quality of a query result.

use eop_data::ValueFlag;

/// Whether a result was computed entirely from observed data or drew on at
/// least one predicted value.
///
/// Quality is derived per query from the flags of the contributing window
/// records; it is never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataQuality {
    Observed,
    Predicted,
}

impl DataQuality {
    pub fn is_observed(self) -> bool {
        self == Self::Observed
    }

    pub fn is_predicted(self) -> bool {
        self == Self::Predicted
    }

    /// Worst-case combination: predicted wins.
    pub fn worst(self, other: Self) -> Self {
        if self.is_predicted() || other.is_predicted() {
            Self::Predicted
        } else {
            Self::Observed
        }
    }

    pub fn from_flag(flag: ValueFlag) -> Self {
        if flag.is_predicted() {
            Self::Predicted
        } else {
            Self::Observed
        }
    }
}

//! Interpolation configuration for the resolution engine.

use eop_core::{EopError, EopResult};

/// Interpolation method for finals-series lookups.
///
/// Lagrange interpolates over a window of [`EopConfig::lagrange_order`]
/// records; linear interpolates over the bracketing pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    Lagrange,
    Linear,
}

/// Service-wide defaults: interpolation method and Lagrange window size.
///
/// Held by an [`EopService`](crate::EopService) rather than process-global
/// state, so concurrent services (and tests) run isolated configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EopConfig {
    pub interpolation: Interpolation,
    /// Number of records in a Lagrange window; must be even and >= 2.
    pub lagrange_order: usize,
}

impl Default for EopConfig {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Lagrange,
            lagrange_order: 4,
        }
    }
}

impl EopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_lagrange_order(mut self, order: usize) -> Self {
        self.lagrange_order = order;
        self
    }

    /// Fails with [`EopError::Configuration`] unless the Lagrange order is
    /// even and at least 2.
    pub fn validate(&self) -> EopResult<()> {
        if self.lagrange_order < 2 || self.lagrange_order % 2 != 0 {
            return Err(EopError::configuration(format!(
                "lagrange order must be even and >= 2, got {}",
                self.lagrange_order
            )));
        }
        Ok(())
    }
}

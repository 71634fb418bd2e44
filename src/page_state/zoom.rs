// SPDX-License-Identifier: MPL-2.0
//! Zoom factor and its bounds.
//!
//! The zoom factor multiplies the base display height of a page. It always
//! lies inside a [`ZoomBounds`] pair, which itself always contains `1.0` so
//! that resetting the zoom can never leave the allowed range.

use crate::config::{DEFAULT_ZOOM_FACTOR, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN, ZOOM_CEILING, ZOOM_FLOOR};
use crate::error::{Error, Result};

/// Decimal places kept when storing a zoom factor. Repeated `+0.1`/`-0.1`
/// steps would otherwise drift away from the values shown to the user.
const ZOOM_PRECISION: f64 = 1_000_000.0;

/// Inclusive `[min, max]` range for the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl ZoomBounds {
    /// Validates a bounds pair.
    ///
    /// Both values must be finite, lie within `[ZOOM_FLOOR, ZOOM_CEILING]`, be
    /// ordered, and enclose the reset factor `1.0`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::Config(format!(
                "zoom bounds must be finite (got {min}..{max})"
            )));
        }
        if min < ZOOM_FLOOR || max > ZOOM_CEILING {
            return Err(Error::Config(format!(
                "zoom bounds {min}..{max} outside {ZOOM_FLOOR}..{ZOOM_CEILING}"
            )));
        }
        if min > DEFAULT_ZOOM_FACTOR || max < DEFAULT_ZOOM_FACTOR {
            return Err(Error::Config(format!(
                "zoom bounds {min}..{max} must contain {DEFAULT_ZOOM_FACTOR}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_ZOOM_MIN,
            max: DEFAULT_ZOOM_MAX,
        }
    }
}

/// Zoom factor, guaranteed to be within its [`ZoomBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor {
    value: f64,
    bounds: ZoomBounds,
}

impl ZoomFactor {
    /// Creates a zoom factor, clamping `value` into `bounds`.
    ///
    /// Non-finite input resets to `1.0`.
    #[must_use]
    pub fn new(value: f64, bounds: ZoomBounds) -> Self {
        let value = if value.is_finite() {
            value
        } else {
            DEFAULT_ZOOM_FACTOR
        };
        Self {
            value: round_factor(bounds.clamp(value)),
            bounds,
        }
    }

    /// The reset factor (`1.0`) within `bounds`.
    #[must_use]
    pub fn reset(bounds: ZoomBounds) -> Self {
        Self::new(DEFAULT_ZOOM_FACTOR, bounds)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn bounds(self) -> ZoomBounds {
        self.bounds
    }

    /// Zoom expressed as a whole percentage (e.g. `1.1` → `110`).
    #[must_use]
    pub fn percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.value * 100.0).round() as u32;
        percent
    }

    /// Returns the factor shifted by `delta`, saturating at the bounds.
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self::new(self.value + delta, self.bounds)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.value <= self.bounds.min
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.value >= self.bounds.max
    }
}

fn round_factor(value: f64) -> f64 {
    (value * ZOOM_PRECISION).round() / ZOOM_PRECISION
}

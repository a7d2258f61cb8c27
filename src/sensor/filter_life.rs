// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Filter life percentage calculation.

use crate::errors::ServiceError;
use log::warn;

/// Rated filter life in hours: 9 months.
pub const TOTAL_FILTER_LIFE: u32 = 6480;

/// Remaining filter life calculator for a given rated filter life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterLife {
    total_hours: u32,
}

impl Default for FilterLife {
    fn default() -> Self {
        Self {
            total_hours: TOTAL_FILTER_LIFE,
        }
    }
}

impl FilterLife {
    pub fn new(total_hours: u32) -> Result<Self, ServiceError> {
        if total_hours == 0 {
            return Err(ServiceError::ConfigError(
                "total filter life must be greater than 0".into(),
            ));
        }
        Ok(Self { total_hours })
    }

    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// Remaining filter life in percent for the elapsed filter `hours`.
    ///
    /// Returns `None` if hours are unknown or exceed the rated filter life. The latter is logged
    /// as a warning.
    pub fn percentage(&self, hours: Option<u32>) -> Option<u8> {
        let hours = hours?;
        if hours > self.total_hours {
            warn!(
                "Reported filter life '{hours}' is more than max value '{}'.",
                self.total_hours
            );
            return None;
        }

        let total = u64::from(self.total_hours);
        let remaining = total - u64::from(hours);
        // integer rounding, half away from zero
        let percent = (remaining * 200 + total) / (total * 2);
        Some(percent.min(100) as u8)
    }
}

/// Remaining filter life in percent, using the default [`TOTAL_FILTER_LIFE`].
pub fn get_filter_life_percentage(hours: Option<u32>) -> Option<u8> {
    FilterLife::default().percentage(hours)
}

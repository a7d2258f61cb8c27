// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Air quality value classification.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Category computed from the air quality value with [`AirQualityThresholds`], not the device
/// reported category code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AirQualityCategory {
    Good,
    Fair,
    Poor,
}

/// Lower bounds of the air quality categories. A higher air quality value is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityThresholds {
    /// Values from this bound on are `good`.
    pub good: u32,
    /// Values from this bound on, and below `good`, are `fair`. Anything below is `poor`.
    pub fair: u32,
}

impl Default for AirQualityThresholds {
    fn default() -> Self {
        Self { good: 70, fair: 40 }
    }
}

impl AirQualityThresholds {
    /// Thresholds are valid if `good` isn't below `fair`.
    pub fn is_valid(&self) -> bool {
        self.good >= self.fair
    }

    pub fn classify(&self, value: u32) -> AirQualityCategory {
        if value >= self.good {
            AirQualityCategory::Good
        } else if value >= self.fair {
            AirQualityCategory::Fair
        } else {
            AirQualityCategory::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(71, AirQualityCategory::Good)]
    #[case(70, AirQualityCategory::Good)]
    #[case(u32::MAX, AirQualityCategory::Good)]
    #[case(69, AirQualityCategory::Fair)]
    #[case(40, AirQualityCategory::Fair)]
    #[case(39, AirQualityCategory::Poor)]
    #[case(0, AirQualityCategory::Poor)]
    fn classify_with_default_thresholds(#[case] value: u32, #[case] expected: AirQualityCategory) {
        assert_eq!(expected, AirQualityThresholds::default().classify(value));
    }

    #[test]
    fn category_names() {
        assert_eq!("good", AirQualityCategory::Good.as_ref());
        assert_eq!("fair", AirQualityCategory::Fair.to_string());
        assert_eq!("poor", AirQualityCategory::Poor.as_ref());
    }

    #[test]
    fn equal_thresholds_skip_fair() {
        let thresholds = AirQualityThresholds { good: 50, fair: 50 };

        assert!(thresholds.is_valid());
        assert_eq!(AirQualityCategory::Good, thresholds.classify(50));
        assert_eq!(AirQualityCategory::Poor, thresholds.classify(49));
    }

    #[test]
    fn inverted_thresholds_are_invalid() {
        assert!(!AirQualityThresholds { good: 10, fair: 20 }.is_valid());
    }
}

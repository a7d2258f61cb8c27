// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

pub mod configuration;
pub mod device;
pub mod errors;
pub mod sensor;
pub mod startup;
pub mod telemetry;
pub mod util;

pub use startup::*;

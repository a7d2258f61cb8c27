// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Common utility functions.

mod text;

pub use text::slugify;

#[cfg(test)]
pub(crate) mod test_log;

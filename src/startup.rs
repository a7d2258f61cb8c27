// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

use const_format::formatcp;

/// Build information like timestamp, package name, etc.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Git information written by the build script.
pub mod git_info {
    include!(concat!(env!("OUT_DIR"), "/git_built.rs"));
}

/// Application version built from git version information.
pub const APP_VERSION: &str = formatcp!(
    "{}{}",
    match git_info::GIT_VERSION {
        Some(v) => v,
        None => formatcp!("{}-non-git", built_info::PKG_VERSION),
    },
    match git_info::GIT_DIRTY {
        Some(_) => "-dirty",
        None => "",
    }
);

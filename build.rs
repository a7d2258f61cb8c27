// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");

    // built only provides git information with the git2 feature, which we don't use
    let mut git_info = String::from("// Git information generated at build time\n");
    match git_output(&["describe", "--match", "v[0-9]*", "--tags", "HEAD"])
        .or_else(|| git_output(&["rev-parse", "--short", "HEAD"]))
    {
        Some(version) => git_info.push_str(&format!(
            "pub const GIT_VERSION: Option<&'static str> = Some(\"{}\");\n",
            version.trim_start_matches('v')
        )),
        None => git_info.push_str("pub const GIT_VERSION: Option<&'static str> = None;\n"),
    }
    let dirty = git_output(&["diff-index", "--name-only", "HEAD", "--"]).is_some();
    git_info.push_str(&format!(
        "pub const GIT_DIRTY: Option<bool> = {};\n",
        if dirty { "Some(true)" } else { "None" }
    ));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&out_dir).join("git_built.rs"), git_info)
        .expect("Failed to write git information");
}

/// Run a git command and return its trimmed stdout, or `None` on failure or empty output.
fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let out = String::from_utf8(output.stdout).ok()?;
    let out = out.trim();
    if out.is_empty() {
        None
    } else {
        Some(out.to_string())
    }
}

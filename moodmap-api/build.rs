//! Build identity for moodmap-api
//!
//! Sets GIT_HASH, BUILD_TIMESTAMP and BUILD_PROFILE for `env!` in the
//! startup log line and the /health response.

use std::env;
use std::process::Command;

use chrono::{SecondsFormat, Utc};

fn main() {
    // Pick up a new commit without a clean build
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");

    let identity = [
        ("GIT_HASH", short_commit().unwrap_or_else(|| "unknown".into())),
        ("BUILD_TIMESTAMP", Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        ("BUILD_PROFILE", env::var("PROFILE").unwrap_or_else(|_| "unknown".into())),
    ];
    for (key, value) in identity {
        println!("cargo:rustc-env={key}={value}");
    }
}

/// Short hash of HEAD, or `None` outside a git checkout
fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned()).filter(|h| !h.is_empty())
}

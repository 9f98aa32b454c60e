//! Bakes build metadata into the binary and the client bundle.
//!
//! `DASHBOARD_VERSION` and `DASHBOARD_GIT_SHA` are read with `env!` by the
//! server banner and the page footer. `DASHBOARD_API_BASE` and
//! `DASHBOARD_SESSION_TTL_MINUTES` are read with `option_env!` by
//! `ClientConfig`, so changing them must trigger a rebuild.

use std::env;
use std::process::Command;

const WATCHED: [&str; 5] = [
    "DASHBOARD_VERSION",
    "DASHBOARD_GIT_SHA",
    "GITHUB_SHA",
    "DASHBOARD_API_BASE",
    "DASHBOARD_SESSION_TTL_MINUTES",
];

fn main() {
    let version = env::var("DASHBOARD_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".to_string());

    let git_sha = env::var("DASHBOARD_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(short_sha))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=DASHBOARD_VERSION={version}");
    println!("cargo:rustc-env=DASHBOARD_GIT_SHA={git_sha}");
    for name in WATCHED {
        println!("cargo:rerun-if-env-changed={name}");
    }
}

fn short_sha(sha: String) -> String {
    sha.chars().take(7).collect()
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|s| !s.is_empty())
}

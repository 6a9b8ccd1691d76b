//! Bakes the commit hash and build timestamp into the binary.
//!
//! Stays dependency-free. Outside a git checkout (or without the date tool)
//! the values degrade to stable markers instead of failing the build.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "ASKLINE_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "ASKLINE_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    // Also watch the branch ref file, so a new commit on the same branch
    // invalidates the baked hash.
    if let Ok(head) = fs::read_to_string(".git/HEAD") {
        if let Some(reference) = head.trim().strip_prefix("ref: ") {
            println!("cargo:rerun-if-changed=.git/{reference}");
        }
    }

    bake(GIT_HASH_VAR, commit_hash());
    bake(TIMESTAMP_VAR, timestamp());
}

/// Emit one `rustc-env` value, letting an environment override (set by CI or
/// a release script) beat the locally derived one.
fn bake(name: &str, derived: String) {
    println!("cargo:rerun-if-env-changed={name}");
    let value = env::var(name).unwrap_or(derived);
    println!("cargo:rustc-env={name}={value}");
}

fn commit_hash() -> String {
    capture_stdout("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string())
}

fn timestamp() -> String {
    capture_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        format!("unix:{seconds}")
    })
}

fn capture_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

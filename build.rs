//! Captures git metadata for `ttyhop --version`.
//!
//! Every value is emitted even when git is unavailable (as an empty string),
//! so the crate always builds from a source tarball.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let commit = git(&["rev-parse", "HEAD"]).unwrap_or_default();
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_default();
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    let time = git(&["log", "-1", "--format=%ct"]).unwrap_or_default();
    let tag = git(&["describe", "--tags", "--abbrev=0"]).unwrap_or_default();

    println!("cargo:rustc-env=TTYHOP_GIT_COMMIT={commit}");
    println!("cargo:rustc-env=TTYHOP_GIT_BRANCH={branch}");
    println!("cargo:rustc-env=TTYHOP_GIT_DIRTY={dirty}");
    println!("cargo:rustc-env=TTYHOP_GIT_TIME={time}");
    println!("cargo:rustc-env=TTYHOP_GIT_TAG={tag}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

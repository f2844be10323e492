//! Build identification for the vos-enrich startup log
//!
//! Exposes `GIT_HASH` (short hash, `+dirty` when the tree has local changes),
//! `BUILD_TIMESTAMP` and `BUILD_PROFILE` to the binary via `env!`.

use std::process::Command;

/// Run git with `args`, returning trimmed stdout on success
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn main() {
    let git_hash = match git(&["rev-parse", "--short=8", "HEAD"]) {
        Some(hash) => match git(&["status", "--porcelain", "--untracked-files=no"]) {
            Some(changes) if !changes.is_empty() => format!("{}+dirty", hash),
            _ => hash,
        },
        None => "unknown".to_string(),
    };

    // Rebuild when HEAD moves to another commit or branch
    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={}", head);
    }
    if let Some(refs) = git(&["rev-parse", "--symbolic-full-name", "HEAD"]) {
        if let Some(ref_path) = git(&["rev-parse", "--git-path", &refs]) {
            println!("cargo:rerun-if-changed={}", ref_path);
        }
    }
    println!("cargo:rerun-if-changed=build.rs");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
}

use std::path::Path;
use std::process::Command;

fn main() {
    let hash = short_commit().unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=FREEDRAW_GIT_HASH={hash}");

    for watched in [".git/HEAD", ".git/refs"] {
        if Path::new(watched).exists() {
            println!("cargo:rerun-if-changed={watched}");
        }
    }
}

fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_owned();
    (!hash.is_empty()).then_some(hash)
}

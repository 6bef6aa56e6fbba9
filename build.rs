use std::path::Path;
use std::process::Command;

/// Embeds the short commit hash shown by `inkboard --version`.
fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_owned())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=INKBOARD_GIT_HASH={hash}");

    // HEAD moves on checkout; the ref it points at moves on commit.
    let head = Path::new(".git/HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        if let Ok(contents) = std::fs::read_to_string(head)
            && let Some(reference) = contents.strip_prefix("ref:")
        {
            println!("cargo:rerun-if-changed=.git/{}", reference.trim());
        }
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }
}

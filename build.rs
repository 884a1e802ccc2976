//! Build script: embeds the version shown by `depfilter --version`.

use std::env;
use std::process::Command;

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|version| !version.is_empty())
}

fn main() {
    if let Some(version) = env::var("DEPFILTER_VERSION").ok().or_else(git_describe) {
        println!("cargo:rustc-env=DEPFILTER_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=DEPFILTER_VERSION");
}

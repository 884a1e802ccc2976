// Shared helpers for integration tests.
//
// Runs the built `depfilter` binary with a given argument list and stdin,
// so each integration test can exercise the real command-line surface
// without repeating process boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Path to the binary under test.
pub const BIN: &str = env!("CARGO_BIN_EXE_depfilter");

/// Build a [`Command`] for the binary with a clean logging environment.
pub fn depfilter(args: &[&str]) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.args(args).env_remove("DEPFILTER_LOG");
    cmd
}

/// Run the binary with `args`, feeding `stdin` as standard input.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    run_with_bytes(args, stdin.as_bytes())
}

/// Run the binary with `args`, feeding raw `stdin` bytes as standard input.
pub fn run_with_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = depfilter(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn depfilter");
    let mut pipe = child.stdin.take().expect("child stdin");
    // The child may exit on a usage error before reading anything.
    if let Err(err) = pipe.write_all(stdin) {
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {err}");
    }
    drop(pipe);
    child.wait_with_output().expect("wait for depfilter")
}

/// Run the binary with `args`, redirecting standard input from `path`.
pub fn run_with_file(args: &[&str], path: &Path) -> Output {
    let file = std::fs::File::open(path).expect("open input file");
    depfilter(args)
        .stdin(Stdio::from(file))
        .output()
        .expect("run depfilter")
}

/// Standard output as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// Standard error as UTF-8 (lossy; may contain color codes).
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

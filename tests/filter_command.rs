#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `depfilter` binary.
//!
//! These tests drive the compiled binary through stdin/stdout, verifying
//! that:
//! - rules are filtered and formatted with continuation lines
//! - `-d` rewrites targets in both attached and separate forms
//! - unknown options and missing option values fail with non-zero status
//! - diagnostics never leak into standard output

mod common;

use std::io::Write as _;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// The reference rule keeps the source, drops the system header, and sorts
/// the remaining headers by depth then name.
#[test]
fn filters_reference_rule() {
    let output = common::run_with_stdin(&[], "a.o: a.c /usr/include/stdio.h b.h a/c.h a.h\n");
    assert!(output.status.success());
    assert_eq!(
        common::stdout(&output),
        "a.o: a.c \\\n  a.h \\\n  b.h \\\n  a/c.h\n\n"
    );
}

/// Empty input is not an error and produces no output.
#[test]
fn empty_input_produces_nothing() {
    let output = common::run_with_stdin(&[], "");
    assert!(output.status.success());
    assert_eq!(common::stdout(&output), "");
}

/// Lines without a `:` are dropped silently.
#[test]
fn noise_lines_are_dropped() {
    let output = common::run_with_stdin(&[], "\nnot a rule\nx.o: x.c\n\n");
    assert!(output.status.success());
    assert_eq!(common::stdout(&output), "x.o: x.c\n\n");
}

/// Paths that are not valid UTF-8 are written back byte for byte.
#[test]
fn non_utf8_paths_pass_through() {
    let output = common::run_with_bytes(&[], b"a.o: a.c caf\xe9.h /usr/x.h\n");
    assert!(output.status.success(), "stderr: {}", common::stderr(&output));
    assert_eq!(output.stdout, b"a.o: a.c \\\n  caf\xe9.h\n\n");
}

/// Filtering an already-filtered file changes nothing.
#[test]
fn output_is_a_fixed_point() {
    let first = common::run_with_stdin(&[], include_str!("fixtures/hbtest.d"));
    let once = common::stdout(&first);
    let second = common::run_with_stdin(&[], &once);
    assert_eq!(common::stdout(&second), once);
}

/// Snapshot of a realistic `gcc -MM` style file routed to a build directory.
#[test]
fn hbtest_fixture_with_destination() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(include_bytes!("fixtures/hbtest.d"))
        .expect("write fixture");

    let output = common::run_with_file(&["-d", "build"], file.path());
    assert!(output.status.success());
    let stdout = common::stdout(&output);
    assert!(stdout.ends_with("\n\n"));
    insta::assert_snapshot!("hbtest_filtered", stdout.trim_end());
}

// ---------------------------------------------------------------------------
// Destination option
// ---------------------------------------------------------------------------

/// `-d DIR` moves the target under DIR, keeping only its basename.
#[test]
fn dest_separate_value() {
    let output = common::run_with_stdin(&["-d", "build/out"], "/abs/path/foo.o: foo.c\n");
    assert!(output.status.success());
    assert_eq!(common::stdout(&output), "build/out/foo.o: foo.c\n\n");
}

/// `-dDIR` is accepted as well.
#[test]
fn dest_attached_value() {
    let output = common::run_with_stdin(&["-dbuild/out"], "/abs/path/foo.o: foo.c\n");
    assert!(output.status.success());
    assert_eq!(common::stdout(&output), "build/out/foo.o: foo.c\n\n");
}

/// `-d` with nothing after it is a fatal usage error.
#[test]
fn dest_without_value_fails() {
    let output = common::run_with_stdin(&["-d"], "a.o: a.c\n");
    assert!(!output.status.success());
    assert_eq!(common::stdout(&output), "");
}

/// An empty destination leaves targets unchanged.
#[test]
fn empty_dest_passes_target_through() {
    let output = common::run_with_stdin(&["-d", ""], "src/a.o: a.c\n");
    assert!(output.status.success(), "stderr: {}", common::stderr(&output));
    assert_eq!(common::stdout(&output), "src/a.o: a.c\n\n");
}

/// The token after `-d` is its value even when it starts with `-`.
#[test]
fn dest_value_may_start_with_hyphen() {
    let output = common::run_with_stdin(&["-d", "-out"], "src/a.o: a.c\n");
    assert!(output.status.success(), "stderr: {}", common::stderr(&output));
    assert_eq!(common::stdout(&output), "-out/a.o: a.c\n\n");
}

/// When `-d` is repeated, the last value is used.
#[test]
fn repeated_dest_last_wins() {
    let output = common::run_with_stdin(&["-d", "x", "-d", "y"], "src/a.o: a.c\n");
    assert!(output.status.success(), "stderr: {}", common::stderr(&output));
    assert_eq!(common::stdout(&output), "y/a.o: a.c\n\n");
}

// ---------------------------------------------------------------------------
// Option errors
// ---------------------------------------------------------------------------

/// Unknown options are reported on stderr and exit non-zero.
#[test]
fn unknown_option_fails() {
    let output = common::run_with_stdin(&["-x"], "a.o: a.c\n");
    assert!(!output.status.success());
    assert!(common::stderr(&output).contains("-x"));
    assert_eq!(common::stdout(&output), "");
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A quiet successful run writes nothing to stderr.
#[test]
fn quiet_run_has_empty_stderr() {
    let output = common::run_with_stdin(&[], "a.o: a.c\n");
    assert!(output.status.success());
    assert_eq!(common::stderr(&output), "");
}

/// Verbose diagnostics go to stderr and leave stdout untouched.
#[test]
fn verbose_logs_to_stderr_only() {
    let input = "a.o: a.c /usr/include/stdio.h a.h a.h\n";
    let quiet = common::run_with_stdin(&[], input);
    let verbose = common::run_with_stdin(&["-v"], input);
    assert!(verbose.status.success());
    assert_eq!(common::stdout(&verbose), common::stdout(&quiet));

    let stderr = common::stderr(&verbose);
    assert!(stderr.contains("1 rules"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("1 absolute paths dropped"));
    assert!(stderr.contains("1 duplicate headers collapsed"));
}

/// Input with text but no rules triggers a warning.
#[test]
fn warns_when_no_rules_found() {
    let output = common::run_with_stdin(&[], "this is not a dependency file\n");
    assert!(output.status.success());
    assert!(common::stderr(&output).contains("no dependency rules"));
}

/// `--version` prints the binary name.
#[test]
fn version_flag() {
    let output = common::depfilter(&["--version"]).output().expect("run depfilter");
    assert!(output.status.success());
    assert!(common::stdout(&output).starts_with("depfilter "));
}

//! End-to-end checks of the `bigip_cookie` binary: stdout, stderr and exit codes.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bigip_cookie"))
        .args(args)
        .env_remove("BIGIP_COOKIE_OVERFLOW")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bigip_cookie")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn encodes_endpoint() {
    let out = run(&["10.0.0.1:80"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "16777226.20480.0000\n");
}

#[test]
fn decodes_cookie() {
    let out = run(&["16777226.20480.0000"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "10.0.0.1:80\n");
}

#[test]
fn zero_endpoint_round_trips() {
    let out = run(&["0.0.0.0:0"]);
    assert_eq!(stdout(&out), "0.0.0000\n");
    let out = run(&["0.0.0000"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0.0.0.0:0\n");
}

#[test]
fn no_argument_prints_usage() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn unrecognized_argument_fails() {
    for arg in ["abc.def.0000", "hello", "1.2.3.4"] {
        let out = run(&[arg]);
        assert_eq!(out.status.code(), Some(1), "{arg}");
        assert!(out.stdout.is_empty(), "{arg}");
    }
}

#[test]
fn bad_suffix_fails() {
    let out = run(&["16777226.20480.1234"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Malformed cookie"));
}

#[test]
fn overflow_policy() {
    let out = run(&["256.0.0.1:80"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid address"));

    let out = run(&["--overflow", "wrap", "256.0.0.1:80"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "16777216.20480.0000\n");
}

#[test]
fn overflow_policy_from_env() {
    let out = Command::new(env!("CARGO_BIN_EXE_bigip_cookie"))
        .arg("1.2.3.4:65616")
        .env("BIGIP_COOKIE_OVERFLOW", "wrap")
        .output()
        .expect("failed to run bigip_cookie");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "67305985.20480.0000\n");
}

#[test]
fn named_cookie() {
    let out = run(&["--pool", "web", "10.0.0.1:80"]);
    assert_eq!(stdout(&out), "BIGipServerweb=16777226.20480.0000\n");

    let out = run(&["BIGipServerweb=16777226.20480.0000; path=/"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "10.0.0.1:80\n");
}

#[test]
fn json_output() {
    let out = run(&["--format", "json", "10.0.0.1:80"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("\"mode\":\"encode\""));
    assert!(text.contains("\"cookie\":\"16777226.20480.0000\""));
}

#[test]
fn unknown_flag_exits_one() {
    let out = run(&["--bogus", "10.0.0.1:80"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_succeeds() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("--overflow"));
}

#[test]
fn error_reason_shown_with_logging_off() {
    let out = Command::new(env!("CARGO_BIN_EXE_bigip_cookie"))
        .arg("300.0.0.1:80")
        .env_remove("BIGIP_COOKIE_OVERFLOW")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run bigip_cookie");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid address"), "{stderr}");
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn wrap_accepts_segments_wider_than_u64() {
    let out = run(&["--overflow", "wrap", "1.2.3.4:99999999999999999999999"]);
    assert!(out.status.success());
    // port 65535 byte-swaps to itself
    assert_eq!(stdout(&out), "67305985.65535.0000\n");
}

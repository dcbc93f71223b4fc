//! Behavioral specs for output formats.

use crate::prelude::*;

/// > JSON output carries the summary fields
#[test]
fn json_has_summary_fields() {
    let json = scan("offer you a free offer").json().passes();
    for key in ["timestamp", "algorithm", "score", "comparisons", "matches"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["algorithm"], "naive");
    assert_eq!(json["score"], 3.5);
    assert!(json.get("steps").is_none());
    assert!(json.get("auxiliary").is_none());
}

/// > Timestamps are RFC 3339 in UTC
#[test]
fn json_timestamp_is_utc() {
    let json = scan("free").json().passes();
    let ts = json["timestamp"].as_str().unwrap();
    assert!(ts.contains('T') && ts.ends_with('Z'), "{ts}");
}

/// > --tables adds the auxiliary tables to JSON
#[test]
fn json_tables() {
    let json = scan("ab").args(["-a", "rabin-karp", "--tables"]).json().passes();
    assert_eq!(json["auxiliary"]["kind"], "rolling_hashes");
    assert!(json["auxiliary"]["tables"].as_array().is_some());
}

/// > --compact prints single-line JSON
#[test]
fn compact_json() {
    let out = scan("free").args(["--compact"]).json().exits(0);
    assert_eq!(out.stdout().lines().count(), 1);
}

/// > Output is uncolored when stdout is not a terminal
#[test]
fn no_color_when_piped() {
    scan("free").passes().stdout_lacks("\x1b[");
}

/// > --color forces ANSI colors
#[test]
fn color_flag_forces_color() {
    scan("free")
        .args(["--color"])
        .passes()
        .stdout_has("\x1b[");
}

/// > --no-color wins over COLOR
#[test]
fn no_color_flag_wins() {
    scan("free")
        .args(["--no-color"])
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces ANSI colors
#[test]
fn env_color_forces_color() {
    scan("free")
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

/// > NO_COLOR disables colors even with COLOR set
#[test]
fn env_no_color_wins_over_color() {
    scan("free")
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

//! Behavioral specs for spamscan.toml.

use crate::prelude::*;

/// > [scan] algorithm sets the default algorithm
#[test]
fn config_sets_default_algorithm() {
    let temp = Project::empty();
    temp.config("[scan]\nalgorithm = \"rabin-karp\"\n");
    scan("free")
        .pwd(temp.path())
        .passes()
        .stdout_has(predicates::str::starts_with("rabin-karp: "));
}

/// > --algorithm overrides the configured default
#[test]
fn flag_overrides_config_algorithm() {
    let temp = Project::empty();
    temp.config("[scan]\nalgorithm = \"rabin-karp\"\n");
    scan("free")
        .pwd(temp.path())
        .args(["-a", "horspool"])
        .passes()
        .stdout_has(predicates::str::starts_with("horspool: "));
}

/// > stop_on_first_match = false reports every occurrence
#[test]
fn config_disables_stop_on_first_match() {
    let temp = Project::empty();
    temp.config("[scan]\nstop_on_first_match = false\n");
    let json = scan("win win").pwd(temp.path()).json().passes();
    assert_eq!(
        match_pairs(&json),
        vec![("win".to_string(), 0), ("win".to_string(), 4)]
    );
}

/// > [[patterns]] replaces the built-in set
#[test]
fn custom_patterns_replace_defaults() {
    let temp = Project::empty();
    temp.config(
        r#"
[[patterns]]
text = "act now"
weight = 3.0

[[patterns]]
text = "limited time"
weight = 1.25
"#,
    );
    let json = scan("Free gift! Act now, limited time only")
        .pwd(temp.path())
        .json()
        .passes();
    assert_eq!(
        match_pairs(&json),
        vec![("act now".to_string(), 11), ("limited time".to_string(), 20)]
    );
    assert_eq!(json["score"], 4.25);

    patterns()
        .pwd(temp.path())
        .passes()
        .stdout_eq("  3.00  act now\n  1.25  limited time\n");
}

/// > Reaching the threshold exits 1 and prints the verdict
#[test]
fn threshold_reached_exits_one() {
    let temp = Project::empty();
    temp.config("[scan]\nthreshold = 3.0\n");
    scan("offer you a free offer")
        .pwd(temp.path())
        .exits(1)
        .stdout_has("spam (score 3.50 >= 3.00)\n");
}

/// > Staying below the threshold exits 0
#[test]
fn threshold_not_reached_exits_zero() {
    let temp = Project::empty();
    temp.config("[scan]\nthreshold = 3.0\n");
    scan("a free lunch")
        .pwd(temp.path())
        .passes()
        .stdout_has("clean (score 2.00 < 3.00)\n");
}

/// > JSON reports the verdict when a threshold is configured
#[test]
fn threshold_in_json() {
    let temp = Project::empty();
    temp.config("[scan]\nthreshold = 1.0\n");
    let out = scan("free").pwd(temp.path()).json().exits(1);
    assert_eq!(out.json()["spam"], true);
}

/// > Config is discovered from a parent directory
#[test]
fn config_discovered_from_parent() {
    let temp = Project::empty();
    temp.config("[scan]\nalgorithm = \"kmp\"\n");
    temp.file("nested/deeper/keep", "");
    scan("free")
        .pwd(temp.path().join("nested/deeper"))
        .passes()
        .stdout_has(predicates::str::starts_with("kmp: "));
}

/// > -C <FILE> specifies the config file
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    let path = temp.file("custom.toml", "version = 1\n[scan]\nalgorithm = \"kmp\"\n");
    scan("free")
        .pwd(temp.path())
        .args(["-C", path.to_str().unwrap()])
        .passes()
        .stdout_has(predicates::str::starts_with("kmp: "));
}

/// > SPAMSCAN_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    let path = temp.file("custom.toml", "version = 1\n[scan]\nalgorithm = \"kmp\"\n");
    scan("free")
        .pwd(temp.path())
        .env("SPAMSCAN_CONFIG", path.to_str().unwrap())
        .passes()
        .stdout_has(predicates::str::starts_with("kmp: "));
}

/// > A missing explicit config file is a config error
#[test]
fn missing_explicit_config_fails() {
    scan("free")
        .args(["-C", "does-not-exist.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unknown keys are warnings (forward compatibility)
#[test]
fn unknown_config_key_warns() {
    let temp = Project::empty();
    temp.config("colour = \"always\"\n[scan]\nfast = true\n");
    scan("free")
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `colour` (ignored)")
        .stderr_has("unrecognized field `scan.fast` (ignored)");
}

/// > Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = Project::empty();
    temp.config("[scan]\nalgorithm = \"naive\"\n");
    scan("free").pwd(temp.path()).passes().stderr_lacks("warning");
}

/// > Unsupported versions are rejected
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    scan("free")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > Invalid pattern weights are config errors
#[test]
fn invalid_pattern_weight_fails() {
    let temp = Project::empty();
    temp.config("[[patterns]]\ntext = \"free\"\nweight = -1.0\n");
    scan("free")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("spamscan: config error: patterns[0]: invalid weight -1");
}

/// > Empty pattern text is a config error
#[test]
fn empty_pattern_text_fails() {
    let temp = Project::empty();
    temp.config("[[patterns]]\ntext = \"\"\nweight = 1.0\n");
    patterns()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("pattern text must not be empty");
}

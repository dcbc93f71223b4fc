//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing spamscan CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the spamscan binary
pub fn spamscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spamscan"));
    cmd.env_remove("SPAMSCAN_CONFIG")
        .env_remove("SPAMSCAN_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COLOR");
    cmd
}

/// Builder for `spamscan scan`
pub fn scan(text: &str) -> RunBuilder<Text> {
    RunBuilder::new("scan", Some(text))
}

/// Builder for `spamscan scan` reading stdin
pub fn scan_stdin(input: &str) -> RunBuilder<Text> {
    let mut builder = RunBuilder::new("scan", None);
    builder.stdin = Some(input.to_string());
    builder
}

/// Builder for `spamscan scan --file`
pub fn scan_file(path: &str) -> RunBuilder<Text> {
    RunBuilder::new("scan", None).args(["--file", path])
}

/// Builder for `spamscan compare`
pub fn compare(text: &str) -> RunBuilder<Text> {
    RunBuilder::new("compare", Some(text))
}

/// Builder for `spamscan patterns`
pub fn patterns() -> RunBuilder<Text> {
    RunBuilder::new("patterns", None)
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level command builder for fluent test assertions.
///
/// Runs inside an empty git-rooted temp project unless `pwd` says otherwise,
/// so no stray spamscan.toml is discovered.
pub struct RunBuilder<Mode = Text> {
    command: &'static str,
    text: Option<String>,
    stdin: Option<String>,
    project: Project,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl RunBuilder<Text> {
    fn new(command: &'static str, text: Option<&str>) -> Self {
        Self {
            command,
            text: text.map(str::to_string),
            stdin: None,
            project: Project::empty(),
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> RunBuilder<Json> {
        RunBuilder {
            command: self.command,
            text: self.text,
            stdin: self.stdin,
            project: self.project,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }
}

#[allow(dead_code)]
impl RunBuilder<Json> {
    /// Run, expect success, and parse stdout as JSON.
    pub fn passes(self) -> serde_json::Value {
        self.exits(0).json()
    }
}

#[allow(dead_code)]
impl<Mode: 'static> RunBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run and assert the exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = spamscan_cmd();
        cmd.arg(self.command);
        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);
        if let Some(text) = &self.text {
            cmd.arg("--").arg(text);
        }
        cmd.current_dir(self.dir.as_deref().unwrap_or(self.project.path()));
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut cmd = assert_cmd::Command::from_std(cmd);
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        let output = cmd.output().unwrap();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }

    /// Assert stdout equals expected
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Contains a `.git` directory so config discovery stops here.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[scan]\nthreshold = 2.0");
/// scan("free").pwd(temp.path()).exits(1);
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no config
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write spamscan.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("spamscan.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        full_path
    }
}

/// `(pattern, position)` pairs from a JSON document's `matches`.
pub fn match_pairs(json: &serde_json::Value) -> Vec<(String, u64)> {
    json["matches"]
        .as_array()
        .expect("matches should be an array")
        .iter()
        .map(|m| {
            (
                m["pattern"].as_str().unwrap().to_string(),
                m["position"].as_u64().unwrap(),
            )
        })
        .collect()
}

//! Configuration parsing and validation.
//!
//! Handles spamscan.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::discovery;
use crate::engine::{Algorithm, ScanPolicy};
use crate::error::{Error, Result};
use crate::pattern::{Pattern, PatternSet};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(default)]
    patterns: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Scan defaults.
    pub scan: ScanConfig,

    /// Effective pattern set (the built-in set unless `[[patterns]]` is given).
    pub patterns: PatternSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            scan: ScanConfig::default(),
            patterns: PatternSet::default(),
        }
    }
}

impl Config {
    /// Policy flags derived from `[scan]`.
    pub fn policy(&self) -> ScanPolicy {
        ScanPolicy {
            stop_on_first_match: self.scan.stop_on_first_match,
            use_all_patterns: self.scan.use_all_patterns,
        }
    }
}

/// `[scan]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanConfig {
    /// Algorithm used when `--algorithm` is not given.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Stop each pattern at its first occurrence (default: true).
    #[serde(default = "ScanConfig::default_true")]
    pub stop_on_first_match: bool,

    /// Scan every pattern instead of prefiltering (default: true).
    #[serde(default = "ScanConfig::default_true")]
    pub use_all_patterns: bool,

    /// Score at or above which a scan exits with code 1.
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            stop_on_first_match: true,
            use_all_patterns: true,
            threshold: None,
        }
    }
}

impl ScanConfig {
    fn default_true() -> bool {
        true
    }
}

/// One `[[patterns]]` entry.
#[derive(Debug, Deserialize)]
struct PatternEntry {
    text: String,
    weight: f64,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "scan", "patterns"];

/// Known `[scan]` keys.
const KNOWN_SCAN_KEYS: &[&str] = &[
    "algorithm",
    "stop_on_first_match",
    "use_all_patterns",
    "threshold",
];

/// Known `[[patterns]]` keys.
const KNOWN_PATTERN_KEYS: &[&str] = &["text", "weight"];

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Resolve and load the effective config.
///
/// Uses the explicit path when given, otherwise discovers spamscan.toml from
/// `cwd`; falls back to defaults when nothing is found.
pub fn load_effective(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse_collecting(content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config, returning the unknown keys instead of printing them.
fn parse_collecting(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade spamscan to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown_keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let scan = match flexible.scan {
        Some(toml::Value::Table(table)) => {
            for key in table.keys() {
                if !KNOWN_SCAN_KEYS.contains(&key.as_str()) {
                    unknown_keys.push(format!("scan.{}", key));
                }
            }
            toml::Value::Table(table)
                .try_into::<ScanConfig>()
                .map_err(|e| config_error(format!("scan: {}", e)))?
        }
        Some(_) => return Err(config_error("scan: expected a table".to_string())),
        None => ScanConfig::default(),
    };

    match scan.threshold {
        Some(threshold) if !threshold.is_finite() || threshold <= 0.0 => {
            return Err(config_error(format!(
                "scan.threshold must be positive and finite (got {})",
                threshold
            )));
        }
        _ => {}
    }

    let patterns = match flexible.patterns {
        Some(toml::Value::Array(entries)) => {
            let mut patterns = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                if let toml::Value::Table(table) = &entry {
                    for key in table.keys() {
                        if !KNOWN_PATTERN_KEYS.contains(&key.as_str()) {
                            unknown_keys.push(format!("patterns[{}].{}", index, key));
                        }
                    }
                }
                let entry: PatternEntry = entry
                    .try_into()
                    .map_err(|e| config_error(format!("patterns[{}]: {}", index, e)))?;
                let pattern = Pattern::new(&entry.text, entry.weight)
                    .map_err(|e| config_error(format!("patterns[{}]: {}", index, e)))?;
                patterns.push(pattern);
            }
            PatternSet::new(patterns)
        }
        Some(_) => {
            return Err(config_error(
                "patterns: expected an array of tables".to_string(),
            ));
        }
        None => PatternSet::default(),
    };

    tracing::debug!(
        "loaded {}: {} patterns, algorithm {}",
        path.display(),
        patterns.len(),
        scan.algorithm
    );

    let config = Config {
        version,
        scan,
        patterns,
    };
    Ok((config, unknown_keys))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "spamscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

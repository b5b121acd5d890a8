//! Configuration resolution for alert-gate.
//!
//! Thresholds and the report-only flag can come from CLI flags, the
//! `INPUT_*` environment variables of the CI action, or an optional
//! `alert-gate.config.yml` file, in that order of precedence. Everything is
//! resolved here, once, into an explicit [`GateConfig`] value; the decision
//! core never touches the environment.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::alert_policy::domain::{
    ThresholdTable, DEFAULT_CRITICAL_DAYS, DEFAULT_HIGH_DAYS, DEFAULT_LOW_DAYS,
    DEFAULT_MEDIUM_DAYS,
};
use crate::cli::Args;
use crate::shared::{GateError, Result};

const CONFIG_FILENAME: &str = "alert-gate.config.yml";

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub repo: Option<String>,
    pub token: Option<String>,
    pub thresholds: ThresholdTable,
    pub report_only: bool,
    pub pr_number: Option<u64>,
    pub revoke_token: bool,
}

impl GateConfig {
    /// Resolves the effective configuration from CLI arguments, environment
    /// variables and an optional config file in the working directory.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = discover_config(Path::new("."))?.unwrap_or_default();

        let thresholds = ThresholdTable::new(
            resolve_threshold(
                args.critical,
                "INPUT_CRITICAL_THRESHOLD",
                file.critical_threshold,
                DEFAULT_CRITICAL_DAYS,
            )?,
            resolve_threshold(
                args.high,
                "INPUT_HIGH_THRESHOLD",
                file.high_threshold,
                DEFAULT_HIGH_DAYS,
            )?,
            resolve_threshold(
                args.medium,
                "INPUT_MEDIUM_THRESHOLD",
                file.medium_threshold,
                DEFAULT_MEDIUM_DAYS,
            )?,
            resolve_threshold(
                args.low,
                "INPUT_LOW_THRESHOLD",
                file.low_threshold,
                DEFAULT_LOW_DAYS,
            )?,
        );

        let report_only = args.report_only
            || env_flag("INPUT_REPORT_MODE")
            || file.report_mode.unwrap_or(false);

        let repo = args
            .repo
            .clone()
            .or_else(|| non_empty_env("GITHUB_REPOSITORY"));
        let token = non_empty_env("GITHUB_TOKEN");
        let pr_number = detect_pr_number();

        Ok(Self {
            repo,
            token,
            thresholds,
            report_only,
            pr_number,
            revoke_token: args.revoke_token,
        })
    }
}

fn resolve_threshold(
    cli_value: Option<u32>,
    env_var: &str,
    file_value: Option<u32>,
    default: u32,
) -> Result<u32> {
    if let Some(days) = cli_value {
        return Ok(days);
    }
    if let Some(raw) = non_empty_env(env_var) {
        return parse_threshold(&raw, env_var);
    }
    Ok(file_value.unwrap_or(default))
}

/// Parses a raw threshold value into whole days.
///
/// Negative and non-numeric values are configuration errors; the run must
/// not proceed with a guessed threshold.
fn parse_threshold(raw: &str, var: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        GateError::Configuration {
            message: format!("{} must be a non-negative whole number of days, got '{}'", var, raw),
            hint: "Set the threshold to a whole number of days, e.g. 3".to_string(),
        }
        .into()
    })
}

/// True iff the variable is set to "true" (case-insensitive), matching the
/// action input convention.
fn env_flag(var: &str) -> bool {
    std::env::var(var)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Reads the pull request number from the CI event payload.
///
/// Only `pull_request` events carry one; any failure along the way (missing
/// path, unreadable file, unexpected JSON shape) simply yields "no PR" so a
/// push build never aborts over comment plumbing.
pub fn detect_pr_number() -> Option<u64> {
    if std::env::var("GITHUB_EVENT_NAME").ok()? != "pull_request" {
        return None;
    }
    let path = std::env::var("GITHUB_EVENT_PATH").ok()?;
    let content = std::fs::read_to_string(path).ok()?;
    pr_number_from_event(&content)
}

fn pr_number_from_event(content: &str) -> Option<u64> {
    let event: serde_json::Value = serde_json::from_str(content).ok()?;
    event.get("pull_request")?.get("number")?.as_u64()
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub critical_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub medium_threshold: Option<u32>,
    pub low_threshold: Option<u32>,
    pub report_mode: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| GateError::Configuration {
        message: format!("Failed to read config file {}: {}", path.display(), e),
        hint: "Check that the file exists and is readable".to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| GateError::Configuration {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
            hint: "Ensure the file contains valid YAML syntax".to_string(),
        })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_threshold_valid() {
        assert_eq!(parse_threshold("3", "INPUT_CRITICAL_THRESHOLD").unwrap(), 3);
        assert_eq!(parse_threshold(" 15 ", "INPUT_LOW_THRESHOLD").unwrap(), 15);
        assert_eq!(parse_threshold("0", "INPUT_LOW_THRESHOLD").unwrap(), 0);
    }

    #[test]
    fn test_parse_threshold_negative_rejected() {
        let result = parse_threshold("-1", "INPUT_CRITICAL_THRESHOLD");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("non-negative whole number"));
        assert!(err.contains("INPUT_CRITICAL_THRESHOLD"));
    }

    #[test]
    fn test_parse_threshold_non_numeric_rejected() {
        assert!(parse_threshold("soon", "INPUT_HIGH_THRESHOLD").is_err());
        assert!(parse_threshold("3.5", "INPUT_HIGH_THRESHOLD").is_err());
        assert!(parse_threshold("", "INPUT_HIGH_THRESHOLD").is_err());
    }

    #[test]
    fn test_pr_number_from_event_success() {
        let event = r#"{"pull_request": {"number": 123}}"#;
        assert_eq!(pr_number_from_event(event), Some(123));
    }

    #[test]
    fn test_pr_number_from_event_missing_keys() {
        assert_eq!(pr_number_from_event("{}"), None);
        assert_eq!(pr_number_from_event(r#"{"pull_request": {}}"#), None);
    }

    #[test]
    fn test_pr_number_from_event_invalid_json() {
        assert_eq!(pr_number_from_event("invalid json"), None);
    }

    #[test]
    fn test_pr_number_from_event_string_number() {
        // Numbers encoded as strings are malformed event data, not a PR
        let event = r#"{"pull_request": {"number": "123"}}"#;
        assert_eq!(pr_number_from_event(event), None);
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
critical_threshold: 1
high_threshold: 2
medium_threshold: 7
low_threshold: 15
report_mode: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.critical_threshold, Some(1));
        assert_eq!(config.high_threshold, Some(2));
        assert_eq!(config.medium_threshold, Some(7));
        assert_eq!(config.low_threshold, Some(15));
        assert_eq!(config.report_mode, Some(true));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "critical_threshold: 2\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().critical_threshold, Some(2));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_negative_threshold_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "critical_threshold: -3\n").unwrap();

        // u32 in the schema rejects negative values at parse time
        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "critical_threshold: 2\nunknown_field: true\n",
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("unknown_field"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.critical_threshold.is_none());
        assert!(config.report_mode.is_none());
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_resolve_threshold_precedence() {
        // CLI beats file beats default; env is unset for these variables
        assert_eq!(
            resolve_threshold(Some(9), "ALERT_GATE_TEST_UNSET_VAR", Some(4), 3).unwrap(),
            9
        );
        assert_eq!(
            resolve_threshold(None, "ALERT_GATE_TEST_UNSET_VAR", Some(4), 3).unwrap(),
            4
        );
        assert_eq!(
            resolve_threshold(None, "ALERT_GATE_TEST_UNSET_VAR", None, 3).unwrap(),
            3
        );
    }
}

//! Configuration management for the ls8 emulator.
//!
//! Configuration is loaded from multiple sources in priority order:
//! 1. Command-line flags (applied by the binary on top of `Config::load`)
//! 2. Environment variables (`LS8_TRACE`, `LS8_STEP_LIMIT`)
//! 3. Project-local config file (`./ls8.toml`)
//! 4. User config file (`~/.config/ls8/config.toml`)
//! 5. Built-in defaults
//!
//! # Config File Format
//!
//! ```toml
//! # ls8.toml
//!
//! # Print a TRACE line before every instruction
//! trace = true
//!
//! # Abort runs that have not halted after this many instructions
//! step_limit = 100000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ls8 configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Print a trace line before each instruction.
    pub trace: Option<bool>,

    /// Maximum instructions before a run is aborted.
    pub step_limit: Option<u64>,
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(user_config) = Self::user_config_path().and_then(|p| Self::load_from_file(&p)) {
            config.merge(user_config);
        }

        if let Some(local_config) = Self::load_from_file(Path::new("ls8.toml")) {
            config.merge(local_config);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        log::debug!("Loaded configuration: {:?}", config);
        config
    }

    pub fn trace(&self) -> bool {
        self.trace.unwrap_or(false)
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge another config into this one.
    /// Only overrides fields that are Some in the other config.
    pub fn merge(&mut self, other: Self) {
        if other.trace.is_some() {
            self.trace = other.trace;
        }
        if other.step_limit.is_some() {
            self.step_limit = other.step_limit;
        }
    }

    /// Apply overrides from an environment lookup (`std::env::var` in
    /// production). Unparseable values are logged and ignored.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LS8_TRACE") {
            match parse_flag(&v) {
                Some(on) => self.trace = Some(on),
                None => log::warn!("Ignoring LS8_TRACE={:?}: expected a boolean", v),
            }
        }
        if let Some(v) = lookup("LS8_STEP_LIMIT") {
            match v.trim().parse::<u64>() {
                Ok(limit) => {
                    log::info!("Using LS8_STEP_LIMIT from environment: {}", limit);
                    self.step_limit = Some(limit);
                }
                Err(e) => log::warn!("Ignoring LS8_STEP_LIMIT={:?}: {}", v, e),
            }
        }
    }

    /// Path of the user config file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ls8").join("config.toml"))
    }

    /// Generate a sample config file content.
    pub fn sample_config() -> String {
        r#"# ls8 configuration
# Place this file at ~/.config/ls8/config.toml or ./ls8.toml

# Print a TRACE line (PC, bytes at PC, registers) before each instruction
trace = false

# Abort a run that has not halted after this many instructions
# step_limit = 100000
"#
        .to_string()
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

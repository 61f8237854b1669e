//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tonal_domain::{SampleRange, Sampler, DEFAULT_SPACING};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default classification parameters
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Default spacing and range used when a command does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Interval between sample points
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    /// Valid range as `[min, max]`
    #[serde(default = "default_range")]
    pub range: [f64; 2],
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".tonal").join("config.toml"))
    }

    /// Resolve an optional override against the default path.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is unreadable
    /// or invalid. Used by `config` subcommands so a broken file can be repaired.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject sampler settings the classifier would not treat meaningfully.
    pub fn validate(&self) -> Result<()> {
        check_sampler(&self.sampler.to_sampler())
            .map_err(|e| CliError::Config(format!("Invalid [sampler] section: {}", e)))
    }

    /// Serialize to the TOML form written on disk.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl SamplerConfig {
    /// Domain sampler for these settings.
    pub fn to_sampler(&self) -> Sampler {
        Sampler::new(self.spacing, self.range)
    }
}

/// Check that spacing is positive and the range is ordered.
pub fn check_sampler(sampler: &Sampler) -> std::result::Result<(), String> {
    if sampler.spacing.is_nan() || sampler.spacing <= 0.0 {
        return Err(format!("spacing must be positive, got {}", sampler.spacing));
    }
    if !sampler.range.is_ordered() {
        return Err(format!(
            "range min must not exceed max, got [{}, {}]",
            sampler.range.min, sampler.range.max
        ));
    }
    Ok(())
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            range: default_range(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

fn default_range() -> [f64; 2] {
    let range = SampleRange::default();
    [range.min, range.max]
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tonal CLI - Classify points against a range and build natural color gradients.
#[derive(Debug, Parser)]
#[command(name = "tonal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TONAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (codes or hex values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify points against a range
    Classify(ClassifyArgs),

    /// Build a natural gradient around a color
    Gradient(GradientArgs),

    /// Show a color in RGB, HSL and Lab
    Convert(ConvertArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Points to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub points: Vec<f64>,

    /// Interval between sample points (defaults to config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub spacing: Option<f64>,

    /// Lower bound of the range (defaults to config)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper bound of the range (defaults to config)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Classify even if spacing is not positive or min exceeds max
    #[arg(long)]
    pub unchecked: bool,
}

/// Arguments for the gradient command.
#[derive(Debug, Parser)]
pub struct GradientArgs {
    /// Reference color (#rrggbb or #rgb; the # may be omitted)
    pub hex: String,

    /// Sample spacing used to place the reference color
    #[arg(short, long, allow_negative_numbers = true)]
    pub spacing: Option<f64>,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Color to convert (#rrggbb or #rgb; the # may be omitted)
    pub hex: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Update the default sampler
    SetSampler {
        /// Interval between sample points
        #[arg(short, long, allow_negative_numbers = true)]
        spacing: Option<f64>,
        /// Lower bound of the range
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Upper bound of the range
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
    },

    /// Update output settings
    SetOutput {
        /// Default output format
        #[arg(long = "output-format", value_enum)]
        format: Option<CliFormat>,
        /// Enable or disable colored output
        #[arg(long)]
        color: Option<bool>,
    },

    /// Write the default configuration
    Reset,

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

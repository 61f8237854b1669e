//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.format_config(config)?);
        }
        ConfigAction::SetSampler { spacing, min, max } => {
            set_sampler(config, spacing, min, max)?;
            config.save_to(path)?;
            println!("{}", formatter.success("Sampler updated"));
        }
        ConfigAction::SetOutput { format, color } => {
            if let Some(format) = format {
                config.settings.format = format.into();
            }
            if let Some(color) = color {
                config.settings.color = color;
            }
            config.save_to(path)?;
            println!("{}", formatter.success("Output settings updated"));
        }
        ConfigAction::Reset => {
            *config = Config::default();
            config.save_to(path)?;
            println!("{}", formatter.success("Configuration reset to defaults"));
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            if !path.exists() {
                println!("{}", formatter.info("File does not exist yet; defaults are in effect"));
            }
        }
    }

    Ok(())
}

/// Apply sampler changes, keeping the old values if the result is invalid.
fn set_sampler(
    config: &mut Config,
    spacing: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<()> {
    if spacing.is_none() && min.is_none() && max.is_none() {
        return Err(CliError::InvalidInput(
            "Nothing to set; pass --spacing, --min or --max".to_string(),
        ));
    }

    let mut updated = config.clone();
    if let Some(spacing) = spacing {
        updated.sampler.spacing = spacing;
    }
    if let Some(min) = min {
        updated.sampler.range[0] = min;
    }
    if let Some(max) = max {
        updated.sampler.range[1] = max;
    }
    updated.validate()?;

    *config = updated;
    Ok(())
}

//! Gradient command implementation.

use crate::cli::GradientArgs;
use crate::config::check_sampler;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tonal_domain::{natural_gradient_with, GradientParams};

/// Execute the gradient command.
pub fn execute_gradient(args: GradientArgs, formatter: &Formatter) -> Result<()> {
    let mut params = GradientParams::default();
    if let Some(spacing) = args.spacing {
        params.sampler = params.sampler.with_spacing(spacing);
        check_sampler(&params.sampler).map_err(CliError::InvalidInput)?;
    }

    let gradient = natural_gradient_with(&args.hex, &params)?;
    tracing::debug!(
        hex = %args.hex,
        state = %gradient.state,
        reference = gradient.reference_index(),
        "Generated gradient"
    );

    println!("{}", formatter.format_gradient(&gradient)?);

    Ok(())
}

//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::{check_sampler, Config};
use crate::error::{CliError, Result};
use crate::output::{ClassificationReport, Formatter};
use tonal_domain::{SampleRange, Sampler};

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let sampler = resolve_sampler(&args, config);

    if let Err(problem) = check_sampler(&sampler) {
        if !args.unchecked {
            return Err(CliError::InvalidInput(format!(
                "{} (pass --unchecked to classify anyway)",
                problem
            )));
        }
        tracing::warn!("Classifying with unchecked sampler: {}", problem);
        eprintln!("{}", formatter.warning(&format!("Result is unspecified: {}", problem)));
    }

    let reports: Vec<ClassificationReport> = args
        .points
        .iter()
        .map(|&point| {
            let report = ClassificationReport::new(point, &sampler);
            tracing::debug!(
                point,
                neighbors = ?report.neighbors,
                state = %report.state,
                "Classified point"
            );
            report
        })
        .collect();

    println!("{}", formatter.format_classifications(&reports, &sampler)?);

    Ok(())
}

/// Apply command-line overrides on top of the configured sampler.
pub fn resolve_sampler(args: &ClassifyArgs, config: &Config) -> Sampler {
    let base = config.sampler.to_sampler();

    let spacing = args.spacing.unwrap_or(base.spacing);
    let range = SampleRange::new(
        args.min.unwrap_or(base.range.min),
        args.max.unwrap_or(base.range.max),
    );

    tracing::debug!(spacing, min = range.min, max = range.max, "Resolved sampler");
    Sampler::new(spacing, range)
}

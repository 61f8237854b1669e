//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::Result;
use crate::output::Formatter;
use tonal_domain::{classify_default, Rgb};

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let rgb = Rgb::from_hex(&args.hex)?;
    let state = classify_default(rgb.to_hsl().l);

    println!("{}", formatter.format_conversion(&rgb, state)?);

    Ok(())
}

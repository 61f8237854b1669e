//! Tonal CLI - classify points against a range and build natural gradients.

use clap::Parser;
use tonal_cli::commands;
use tonal_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> tonal_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Load config. Config subcommands tolerate a broken file so it can be reset.
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = if matches!(cli.command, Command::Config(_)) {
        Config::load_or_default(&config_path)
    } else {
        Config::load_from(&config_path)?
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter)?,
        Command::Gradient(args) => commands::execute_gradient(args, &formatter)?,
        Command::Convert(args) => commands::execute_convert(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?
        }
    }

    Ok(())
}

mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::{Context, Result};
use cli::Cli;
use cli_modes::{CliModeResult, config_mode, resolve_selection, show_mode, submit_mode, use_color};
use rango_core::{
    Clock, Config, FixedClock, RangeFilter, SystemClock,
    parse_input::{ParseOptions, parse_date_input},
};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rango: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init(&config.logging)?;
    tracing::debug!(?config, "loaded config");

    let renderer = Renderer::new(RenderOptions {
        date_format: config.display_date_format.clone(),
        use_color: use_color(&cli),
        style: cli.style,
    });

    if let CliModeResult::Finish = config_mode(&cli, &renderer)? {
        return Ok(());
    }

    let format_strs: Vec<&str> = config
        .input_date_formats
        .iter()
        .map(AsRef::as_ref)
        .collect();
    let options = ParseOptions {
        formats: Some(&format_strs),
    };

    // Read the clock once; every range below is relative to this instant.
    let clock = match cli.on.as_deref() {
        Some(on) => {
            let date = parse_date_input(on, Some(options))
                .with_context(|| "reading --on")?
                .unwrap_or_else(|| SystemClock.today());
            FixedClock::on(date)
        }
        None => FixedClock::new(SystemClock.now()),
    };
    let filter = RangeFilter::new(clock);
    let selection = resolve_selection(&cli, filter.clock().today(), options)?;

    if let CliModeResult::Finish = submit_mode(&cli, &renderer, &config, &filter, selection)? {
        return Ok(());
    }
    show_mode(&cli, &renderer, &filter, selection)?;

    Ok(())
}

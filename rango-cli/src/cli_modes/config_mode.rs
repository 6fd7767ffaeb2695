use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use rango_core::Config;

pub fn config_mode(cli: &Cli, renderer: &Renderer) -> Result<CliModeResult> {
    if !cli.config_paths {
        return Ok(CliModeResult::NothingToDo);
    }
    let paths = Config::config_file_paths();
    if paths.is_empty() {
        renderer.print_info("No home directory found; only --config files can be used.");
    }
    for path in paths {
        let marker = if path.exists() { " (found)" } else { "" };
        println!("{}{marker}", path.display());
    }
    Ok(CliModeResult::Finish)
}

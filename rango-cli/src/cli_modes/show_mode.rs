use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use rango_core::{Clock, RangeFilter, parse_input::Selection};

pub fn show_mode<C: Clock>(
    cli: &Cli,
    renderer: &Renderer,
    filter: &RangeFilter<C>,
    selection: Selection,
) -> Result<CliModeResult> {
    if cli.submit {
        return Ok(CliModeResult::NothingToDo);
    }
    let range = match selection {
        Selection::Period(period) => filter.range(period)?,
        Selection::Custom(range) => range,
    };
    renderer.print_range(&selection.label(), &range);
    Ok(CliModeResult::Finish)
}

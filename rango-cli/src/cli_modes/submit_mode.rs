use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::{Context, Result};
use rango_core::{
    Clock, Config, DocumentBinding, FormDocument, RangeFilter, parse_input::Selection,
};

/// Record window timestamps, to the second.
const WINDOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn submit_mode<C: Clock>(
    cli: &Cli,
    renderer: &Renderer,
    config: &Config,
    filter: &RangeFilter<C>,
    selection: Selection,
) -> Result<CliModeResult> {
    if !cli.submit {
        return Ok(CliModeResult::NothingToDo);
    }

    let mut document = cli.fields.iter().fold(
        FormDocument::for_target(&config.target, config.action.clone()),
        |doc, (name, value)| doc.with_field(name, value),
    );
    let mut binding = DocumentBinding::new(&mut document, &config.target);

    let range = match selection {
        Selection::Period(period) => filter.filter(period, &mut binding),
        Selection::Custom(range) => filter.filter_custom(range, &mut binding).map_err(Into::into),
    }
    .with_context(|| format!("filling form '{}'", config.target.form_id))?;

    renderer.print_range(&selection.label(), &range);
    let (from, to) = range.bounds();
    renderer.print_info(&format!(
        "Records from {} to {}",
        from.format(WINDOW_FORMAT),
        to.format(WINDOW_FORMAT)
    ));
    for url in document.submissions() {
        renderer.print_info(&format!("Submitting {} to {}", range, config.action));
        renderer.print_url(url);
    }
    Ok(CliModeResult::Finish)
}

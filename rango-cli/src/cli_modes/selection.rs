use anyhow::Result;
use chrono::NaiveDate;
use rango_core::{
    Period,
    parse_input::{ParseOptions, Selection, parse_selection},
};

use crate::cli::Cli;

/// `--from/--to` win, with a missing `--to` meaning today; otherwise the
/// positional token is a period or a single date; with neither, the current
/// month.
pub fn resolve_selection(cli: &Cli, today: NaiveDate, options: ParseOptions) -> Result<Selection> {
    let selection = match (cli.from.as_deref(), cli.period.as_deref()) {
        (Some(from), _) => {
            let to = cli.to.as_deref().unwrap_or("today");
            parse_selection(from, Some(to), today, Some(options))?
        }
        (None, Some(token)) => parse_selection(token, None, today, Some(options))?,
        (None, None) => Selection::Period(Period::default()),
    };
    Ok(selection)
}

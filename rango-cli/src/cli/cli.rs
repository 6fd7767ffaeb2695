use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

use super::style::Style;

/// rango — date ranges for the prospects date filter
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("custom").args(["from", "to"]).multiple(true).conflicts_with("period")),
)]
pub struct Cli {
    /// Period to compute: today, week, month, quarter, year (or a synonym such as `semana`).
    /// A single date is also accepted. Defaults to the current month.
    pub period: Option<String>,

    /// Start of a custom range (e.g. `2024-03-01` or `01/03/2024`).
    #[arg(long)]
    pub from: Option<String>,
    /// End of a custom range: a date, or a period whose end closes the range
    /// (e.g. `--to month`). Defaults to today.
    #[arg(long, requires = "from")]
    pub to: Option<String>,
    /// Evaluate relative to this date instead of today (e.g. `--on 2024-03-15`).
    #[arg(long)]
    pub on: Option<String>,

    /// Write the range into the filter form and print the request it submits.
    #[arg(long)]
    pub submit: bool,
    /// Other inputs of the filter form, submitted alongside the dates (e.g. `--field estado=nuevo`).
    #[arg(long = "field", value_name = "NAME=VALUE", requires = "submit", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, env = "RANGO_CONFIG")]
    pub config: Option<PathBuf>,
    /// Prints the config file locations, in the order they are tried.
    #[arg(long)]
    pub config_paths: bool,

    /// Output style: "long" or "iso".
    #[arg(long, short, value_enum, env = "RANGO_STYLE", default_value_t = Style::Long)]
    pub style: Style,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn field_pairs_split_on_first_equals() {
        assert_eq!(
            parse_field("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert!(parse_field("=x").is_err());
        assert!(parse_field("novalue").is_err());
    }

    #[test]
    fn period_conflicts_with_custom_range() {
        let res = Cli::try_parse_from(["rango", "week", "--from", "2024-01-01"]);
        assert!(res.is_err());
    }

    #[test]
    fn to_requires_from() {
        assert!(Cli::try_parse_from(["rango", "--to", "2024-01-01"]).is_err());
        assert!(Cli::try_parse_from(["rango", "--from", "2024-01-01", "--to", "2024-01-31"]).is_ok());
    }
}

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Weekday names and a day count, for people.
    Long,
    /// `YYYY-MM-DD YYYY-MM-DD`, for scripts.
    Iso,
}

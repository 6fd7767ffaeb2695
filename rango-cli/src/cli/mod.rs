mod cli;
mod style;

pub use cli::Cli;
pub use style::Style;

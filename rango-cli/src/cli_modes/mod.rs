mod cli_mode;
mod config_mode;
mod selection;
mod show_mode;
mod submit_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use config_mode::config_mode;
pub use selection::resolve_selection;
pub use show_mode::show_mode;
pub use submit_mode::submit_mode;
pub use use_color::use_color;

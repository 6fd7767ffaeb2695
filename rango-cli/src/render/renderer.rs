use super::theme::OneDark;
use rango_core::{
    DateRange,
    render::{format_iso_line, format_long},
};
use termimad::{MadSkin, crossterm::style::Stylize};
use url::Url;

use crate::cli::Style;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub style: Style,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    /// Status lines are for people; scripts reading `--style iso` never see them.
    pub fn print_info(&self, message: &str) {
        if self.opts.style == Style::Iso {
            return;
        }
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_range(&self, label: &str, range: &DateRange) {
        match self.opts.style {
            Style::Iso => println!("{}", format_iso_line(range)),
            Style::Long => {
                let line = format_long(range, &self.opts.date_format);
                if self.opts.use_color {
                    self.print_md(&format!("## {label}\n**{line}**"));
                } else {
                    println!("{label}: {line}");
                }
            }
        }
    }

    pub fn print_url(&self, url: &Url) {
        if self.opts.use_color && self.opts.style == Style::Long {
            println!("{}", url.to_string().with(OneDark::CYAN));
        } else {
            println!("{url}");
        }
    }
}

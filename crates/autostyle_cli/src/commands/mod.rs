//! Command dispatch.

pub mod generate;
pub mod palette;
pub mod presets;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { theme, css_path } => generate::handle_generate(&theme, &css_path),
        Command::Print { theme } => generate::handle_print(&theme),
        Command::Palette { color } => palette::handle(&color),
        Command::Presets { action } => presets::handle(action),
    }
}

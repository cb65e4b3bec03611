mod cli;
mod tui;

pub(crate) use cli::{as_cli, cli_reset};
pub(crate) use tui::as_tui;

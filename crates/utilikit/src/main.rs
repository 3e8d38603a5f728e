#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod clipboard;
mod error;
mod prelude;
mod stats;
mod text;
mod units;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "A swiss-army CLI of small everyday utilities: unit conversion, text transforms, and quick statistics"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "UTILIKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Unit conversion across built-in and user-defined tables
    Units(crate::units::App),

    /// Text transforms (base64, newlines, indentation, splitting, truncation)
    Text(crate::text::App),

    /// Descriptive statistics over a list of numbers
    Stats(crate::stats::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Units(sub_app) => crate::units::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Stats(sub_app) => crate::stats::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

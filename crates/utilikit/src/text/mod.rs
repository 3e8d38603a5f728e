use std::io::Read;

use crate::prelude::{println, *};

pub mod base64;
pub mod indent;
pub mod newlines;
pub mod split;
pub mod truncate;

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Pure text transforms")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Base64 encode (or decode) text
    #[clap(name = "base64")]
    Base64(base64::Base64Options),

    /// Convert newline style (windows, unix, mac)
    #[clap(name = "newlines")]
    Newlines(newlines::NewlinesOptions),

    /// Convert leading indentation between tabs and spaces
    #[clap(name = "indent")]
    Indent(indent::IndentOptions),

    /// Split text on a literal separator
    #[clap(name = "split")]
    Split(split::SplitOptions),

    /// Truncate text by characters or UTF-8 bytes
    #[clap(name = "truncate")]
    Truncate(truncate::TruncateOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Base64(options) => base64::run(options, global),
        Commands::Newlines(options) => newlines::run(options, global),
        Commands::Indent(options) => indent::run(options, global),
        Commands::Split(options) => split::run(options, global),
        Commands::Truncate(options) => truncate::run(options, global),
    }
}

// Shared utility functions

/// Resolve the input text: the positional argument when present (and not
/// "-"), otherwise everything on stdin.
pub fn resolve_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

/// Print the transformed text and optionally copy it to the clipboard
pub fn emit(output: &str, copy: bool) {
    println!("{}", output);

    if copy {
        crate::clipboard::copy_or_warn(output);
    }
}

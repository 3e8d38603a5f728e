use crate::prelude::{println, *};
use serde::Serialize;
use utilikit_core::text::{convert_indentation, IndentDirection};

use super::{emit, resolve_input};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct IndentOptions {
    /// Text to transform (reads stdin when omitted or "-")
    text: Option<String>,

    /// Conversion direction: to-spaces or to-tabs
    #[arg(short, long)]
    direction: String,

    /// Spaces per tab
    #[arg(short, long, default_value = "4")]
    width: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct IndentOutput {
    pub direction: IndentDirection,
    pub width: usize,
    pub output: String,
}

pub fn run(options: IndentOptions, _global: crate::Global) -> Result<()> {
    let direction: IndentDirection = options.direction.parse().map_err(|e: String| eyre!(e))?;
    let input = resolve_input(options.text.clone())?;
    let output = indent_data(&input, direction, options.width);

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        emit(&output.output, options.copy);
    }

    Ok(())
}

pub fn indent_data(input: &str, direction: IndentDirection, width: usize) -> IndentOutput {
    IndentOutput {
        direction,
        width,
        output: convert_indentation(input, direction, width),
    }
}

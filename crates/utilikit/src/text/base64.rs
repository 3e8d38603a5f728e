use crate::prelude::{println, *};
use serde::Serialize;
use utilikit_core::encode::{from_base64, to_base64};

use super::{emit, resolve_input};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Base64Options {
    /// Text to transform (reads stdin when omitted or "-")
    text: Option<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct Base64Output {
    pub operation: String,
    pub input_length: usize,
    pub output: String,
}

pub fn run(options: Base64Options, _global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.clone())?;
    let output = base64_data(&input, options.decode);

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        emit(&output.output, options.copy);
    }

    Ok(())
}

/// Transform the input and describe the operation for structured output
pub fn base64_data(input: &str, decode: bool) -> Base64Output {
    let output = if decode {
        from_base64(input)
    } else {
        to_base64(input)
    };

    Base64Output {
        operation: if decode { "decode" } else { "encode" }.to_string(),
        input_length: input.chars().count(),
        output,
    }
}

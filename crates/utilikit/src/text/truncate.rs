use crate::prelude::{println, *};
use serde::Serialize;
use utilikit_core::text::{truncate_text, TruncateMode, DEFAULT_SUFFIX};

use super::{emit, resolve_input};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TruncateOptions {
    /// Text to truncate (reads stdin when omitted or "-")
    text: Option<String>,

    /// Maximum length to keep
    #[arg(short, long)]
    limit: usize,

    /// Limit interpretation: chars or bytes
    #[arg(short, long, default_value = "chars")]
    mode: String,

    /// Suffix appended when truncation occurs
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct TruncateOutput {
    pub mode: TruncateMode,
    pub limit: usize,
    pub truncated: bool,
    pub output: String,
}

pub fn run(options: TruncateOptions, _global: crate::Global) -> Result<()> {
    let mode: TruncateMode = options.mode.parse().map_err(|e: String| eyre!(e))?;
    let input = resolve_input(options.text.clone())?;
    let output = truncate_data(&input, options.limit, mode, &options.suffix);

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        emit(&output.output, options.copy);
    }

    Ok(())
}

pub fn truncate_data(input: &str, limit: usize, mode: TruncateMode, suffix: &str) -> TruncateOutput {
    let output = truncate_text(input, limit, mode, suffix);

    TruncateOutput {
        mode,
        limit,
        truncated: output != input,
        output,
    }
}

use crate::prelude::{println, *};
use serde::Serialize;
use utilikit_core::text::split_text;

use super::resolve_input;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SplitOptions {
    /// Text to split (reads stdin when omitted or "-")
    text: Option<String>,

    /// Literal separator; empty splits into individual characters
    #[arg(short, long, default_value = ",")]
    separator: String,

    /// Trim whitespace from each item
    #[arg(short, long)]
    trim: bool,

    /// Drop items that are empty (after trimming, when --trim is set)
    #[arg(short, long)]
    ignore_empty: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct SplitOutput {
    pub separator: String,
    pub item_count: usize,
    pub items: Vec<String>,
}

pub fn run(options: SplitOptions, _global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.clone())?;
    let output = split_data(
        &input,
        &options.separator,
        options.trim,
        options.ignore_empty,
    );

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        // One item per line keeps the output pipeable into other tools.
        let joined = output.items.join("\n");
        super::emit(&joined, options.copy);
    }

    Ok(())
}

pub fn split_data(input: &str, separator: &str, trim: bool, ignore_empty: bool) -> SplitOutput {
    let items = split_text(input, separator, trim, ignore_empty);

    SplitOutput {
        separator: separator.to_string(),
        item_count: items.len(),
        items,
    }
}

use crate::prelude::{println, *};
use serde::Serialize;
use utilikit_core::text::{convert_newlines, NewlineStyle};

use super::{emit, resolve_input};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct NewlinesOptions {
    /// Text to transform (reads stdin when omitted or "-")
    text: Option<String>,

    /// Target style: windows (crlf), unix (lf), or mac (cr)
    #[arg(short, long, default_value = "unix")]
    style: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct NewlinesOutput {
    pub style: NewlineStyle,
    pub line_count: usize,
    pub output: String,
}

pub fn run(options: NewlinesOptions, _global: crate::Global) -> Result<()> {
    let style: NewlineStyle = options.style.parse().map_err(|e: String| eyre!(e))?;
    let input = resolve_input(options.text.clone())?;
    let output = newlines_data(&input, style);

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        emit(&output.output, options.copy);
    }

    Ok(())
}

pub fn newlines_data(input: &str, style: NewlineStyle) -> NewlinesOutput {
    let output = convert_newlines(input, style);
    let line_count = output.split(style.sequence()).count();

    NewlinesOutput {
        style,
        line_count,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_data_unix() {
        let output = newlines_data("a\r\nb\rc", NewlineStyle::Unix);
        assert_eq!(output.output, "a\nb\nc");
        assert_eq!(output.line_count, 3);
    }

    #[test]
    fn test_newlines_data_windows() {
        let output = newlines_data("a\nb", NewlineStyle::Windows);
        assert_eq!(output.output, "a\r\nb");
    }
}

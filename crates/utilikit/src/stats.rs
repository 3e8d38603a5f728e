use std::io::{IsTerminal, Read};

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use utilikit_core::format::format_value;
use utilikit_core::stats::{summarize, StatsSummary};

#[derive(Debug, clap::Parser)]
#[command(name = "stats")]
#[command(about = "Descriptive statistics over a list of numbers")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Summarize a numeric sample
    #[clap(name = "summary")]
    Summary(SummaryOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SummaryOptions {
    /// Values to summarize (reads whitespace/comma separated stdin when empty)
    values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Summary(options) => summary(options, global),
    }
}

fn summary(options: SummaryOptions, _global: crate::Global) -> Result<()> {
    let values = resolve_values(&options.values)?;
    let summary = summarize(&values).map_err(|e| eyre!(e))?;

    if options.json {
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{}", json);
    } else {
        output_formatted(&summary);
    }

    Ok(())
}

/// Parse values from the arguments, or from stdin when none were given.
/// Both sources accept whitespace or comma separated numbers.
fn resolve_values(args: &[String]) -> Result<Vec<f64>> {
    let raw = if args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read values from stdin")?;
        buffer
    } else {
        args.join(" ")
    };

    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| eyre!("Invalid number: {token}"))
        })
        .collect()
}

fn output_formatted(summary: &StatsSummary) {
    let is_tty = std::io::stdout().is_terminal();

    if is_tty {
        eprintln!("{}", "SUMMARY".bright_cyan().bold());
        eprintln!();
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Count", summary.count]);
    table.add_row(prettytable::row!["Sum", format_value(summary.sum)]);
    table.add_row(prettytable::row!["Min", format_value(summary.min)]);
    table.add_row(prettytable::row!["Max", format_value(summary.max)]);
    table.add_row(prettytable::row!["Range", format_value(summary.range)]);
    table.add_row(prettytable::row!["Mean", format_value(summary.mean)]);
    table.add_row(prettytable::row!["Median", format_value(summary.median)]);
    table.add_row(prettytable::row!["Variance", format_value(summary.variance)]);
    table.add_row(prettytable::row!["Std Dev", format_value(summary.std_dev)]);

    if let Some(v) = summary.geometric_mean {
        table.add_row(prettytable::row!["Geometric Mean", format_value(v)]);
    }
    if let Some(v) = summary.harmonic_mean {
        table.add_row(prettytable::row!["Harmonic Mean", format_value(v)]);
    }
    if let Some(v) = summary.skewness {
        table.add_row(prettytable::row!["Skewness", format_value(v)]);
    }
    if let Some(v) = summary.kurtosis {
        table.add_row(prettytable::row!["Kurtosis", format_value(v)]);
    }

    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_values_from_args() {
        let args = vec!["1".to_string(), "2.5".to_string(), "3".to_string()];
        assert_eq!(resolve_values(&args).unwrap(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_resolve_values_comma_separated() {
        let args = vec!["1,2,3".to_string()];
        assert_eq!(resolve_values(&args).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_resolve_values_rejects_garbage() {
        let args = vec!["1".to_string(), "banana".to_string()];
        assert!(resolve_values(&args).is_err());
    }
}

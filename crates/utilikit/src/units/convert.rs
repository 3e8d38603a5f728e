use std::io::IsTerminal;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;
use utilikit_core::format::format_value;
use utilikit_core::units::{convert, parse_amount, parse_quantity, UnitTable};

use super::resolve_table;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Quantity to convert: "12.5 kg", "12.5kg", or a bare number
    quantity: String,

    /// Source unit (when not part of the quantity)
    unit: Option<String>,

    /// Table to convert in (searched across all tables when omitted)
    #[arg(short, long, env = "UTILIKIT_TABLE")]
    table: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the results to the system clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Serialize)]
pub struct ConvertedUnit {
    pub unit_id: String,
    pub label: String,
    pub symbol: String,
    pub value: f64,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub table_id: String,
    pub from_unit: String,
    pub input_value: f64,
    pub results: Vec<ConvertedUnit>,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    // Silent no-result policy: an unparseable amount is the normal state
    // while a user assembles a command, not an error. Explain on stderr,
    // print nothing on stdout, exit successfully.
    let Some((amount, unit_token)) = parse_input(&options.quantity, options.unit.as_deref())
    else {
        eprintln!("No result: could not read a number from '{}'.", options.quantity);
        return Ok(());
    };

    if unit_token.is_empty() {
        return Err(eyre!(
            "Missing source unit. Pass it with the quantity (\"12.5 kg\") or as a second argument."
        ));
    }

    let table = resolve_table(options.table.as_deref(), &unit_token)?;

    if global.verbose {
        println!("Table: {} ({})", table.label, table.id);
        println!();
    }

    let output = convert_data(amount, &unit_token, &table)?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output, &options)?;
    }

    Ok(())
}

/// Split the positional arguments into an amount and a unit token
fn parse_input(quantity: &str, unit: Option<&str>) -> Option<(f64, String)> {
    match unit {
        Some(unit) => parse_amount(quantity).map(|amount| (amount, unit.to_string())),
        None => parse_quantity(quantity),
    }
}

/// Convert and format a quantity in the given table
pub fn convert_data(amount: f64, from: &str, table: &UnitTable) -> Result<ConvertOutput> {
    let conversions = convert(amount, from, table).map_err(|e| eyre!("{e}"))?;

    let from_unit = table
        .find_unit(from)
        .ok_or_else(|| eyre!("Unknown unit: {from}"))?;

    Ok(ConvertOutput {
        table_id: table.id.clone(),
        from_unit: from_unit.id.clone(),
        input_value: amount,
        results: conversions
            .into_iter()
            .map(|c| ConvertedUnit {
                formatted: format_value(c.value),
                unit_id: c.unit_id,
                label: c.label,
                symbol: c.symbol,
                value: c.value,
            })
            .collect(),
    })
}

/// Clipboard payload: the source-unit row, "2.5 kg" style
fn source_line(output: &ConvertOutput) -> Option<String> {
    output
        .results
        .iter()
        .find(|r| r.unit_id == output.from_unit)
        .map(|r| f!("{} {}", r.formatted, r.symbol))
}

fn output_json(output: &ConvertOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ConvertOutput, options: &ConvertOptions) -> Result<()> {
    let is_tty = std::io::stdout().is_terminal();

    if is_tty {
        eprintln!(
            "{} {} {}",
            format_value(output.input_value).bright_white().bold(),
            output.from_unit.bright_white().bold(),
            format!("({})", output.table_id).bright_black()
        );
        eprintln!();
    }

    let mut table = new_table();
    for result in &output.results {
        let is_source = result.unit_id == output.from_unit;
        if is_tty && is_source {
            table.add_row(prettytable::row![
                result.label.bright_cyan().bold(),
                result.symbol.bright_cyan(),
                result.formatted.bright_cyan().bold()
            ]);
        } else {
            table.add_row(prettytable::row![
                result.label,
                result.symbol,
                result.formatted
            ]);
        }
    }
    table.printstd();

    if options.copy {
        if let Some(line) = source_line(output) {
            crate::clipboard::copy_or_warn(&line);
        }
    }

    Ok(())
}

use std::io::IsTerminal;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;
use utilikit_core::tables::builtin_tables;
use utilikit_core::units::UnitTable;

use super::{resolve_table, user_tables_dir};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TablesOptions {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Table id to show
    table: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub id: String,
    pub label: String,
    pub unit_count: usize,
    pub user_defined: bool,
}

#[derive(Debug, Serialize)]
pub struct TablesOutput {
    pub tables: Vec<TableInfo>,
}

pub fn run(options: TablesOptions, _global: crate::Global) -> Result<()> {
    let output = tables_data()?;

    if options.json {
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
        return Ok(());
    }

    let is_tty = std::io::stdout().is_terminal();

    let mut table = new_table();
    for info in &output.tables {
        let kind = if info.user_defined { "user" } else { "built-in" };
        if is_tty {
            table.add_row(prettytable::row![
                info.id.bright_cyan(),
                info.label,
                info.unit_count,
                kind.bright_black()
            ]);
        } else {
            table.add_row(prettytable::row![info.id, info.label, info.unit_count, kind]);
        }
    }
    table.printstd();

    Ok(())
}

pub fn tables_data() -> Result<TablesOutput> {
    let mut tables: Vec<TableInfo> = builtin_tables()
        .iter()
        .map(|t| TableInfo {
            id: t.id.clone(),
            label: t.label.clone(),
            unit_count: t.units().len(),
            user_defined: false,
        })
        .collect();

    let dir = user_tables_dir()?;
    for name in utilikit_core::store::list_tables(&dir).map_err(|e| eyre!("{e}"))? {
        match utilikit_core::store::load_table(&dir, &name) {
            Ok(t) => tables.push(TableInfo {
                id: t.id.clone(),
                label: t.label.clone(),
                unit_count: t.units().len(),
                user_defined: true,
            }),
            Err(e) => eprintln!("Warning: skipping table '{name}': {e}"),
        }
    }

    Ok(TablesOutput { tables })
}

pub fn run_show(options: ShowOptions, _global: crate::Global) -> Result<()> {
    let table = resolve_table(Some(options.table.as_str()), "")?;

    if options.json {
        let json = serde_json::to_string_pretty(&table)?;
        println!("{}", json);
        return Ok(());
    }

    print_units(&table);
    Ok(())
}

fn print_units(table: &UnitTable) {
    let is_tty = std::io::stdout().is_terminal();

    if is_tty {
        eprintln!("{} ({})", table.label.bright_white().bold(), table.id);
        eprintln!();
    }

    let mut out = new_table();
    for unit in table.units() {
        let base_marker = if unit.factor == 1.0 { "base" } else { "" };
        out.add_row(prettytable::row![
            unit.id,
            unit.label,
            unit.symbol,
            unit.factor,
            base_marker
        ]);
    }
    out.printstd();
}

use std::path::PathBuf;

use crate::prelude::{eprintln, println, *};
use utilikit_core::tables::{builtin_table, builtin_tables};
use utilikit_core::units::UnitTable;

pub mod convert;
pub mod save_table;
pub mod tables;

// Re-export public data functions
pub use convert::convert_data;

#[derive(Debug, clap::Parser)]
#[command(name = "units")]
#[command(about = "Unit conversion across built-in and user-defined tables")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a quantity into every unit of its table
    #[clap(name = "convert")]
    Convert(convert::ConvertOptions),

    /// List available tables (built-in and user-defined)
    #[clap(name = "tables")]
    Tables(tables::TablesOptions),

    /// Show the units of one table
    #[clap(name = "show")]
    Show(tables::ShowOptions),

    /// Save a user-defined table from a TOML file
    #[clap(name = "save")]
    Save(save_table::SaveOptions),

    /// Remove a user-defined table
    #[clap(name = "rm")]
    Rm(save_table::RmOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert(options) => convert::run(options, global),
        Commands::Tables(options) => tables::run(options, global),
        Commands::Show(options) => tables::run_show(options, global),
        Commands::Save(options) => save_table::run_save(options, global),
        Commands::Rm(options) => save_table::run_rm(options, global),
    }
}

// Shared utility functions

/// Directory holding user-defined tables
pub fn user_tables_dir() -> Result<PathBuf> {
    let data_dir = dirs_next::data_dir().ok_or_eyre("Could not determine user data directory")?;
    Ok(data_dir.join("utilikit").join("tables"))
}

/// Every known table: built-ins first, then user-defined ones
pub fn all_tables() -> Result<Vec<UnitTable>> {
    let mut tables = builtin_tables();

    let dir = user_tables_dir()?;
    for name in utilikit_core::store::list_tables(&dir).map_err(|e| eyre!("{e}"))? {
        match utilikit_core::store::load_table(&dir, &name) {
            Ok(table) => tables.push(table),
            Err(e) => eprintln!("Warning: skipping table '{name}': {e}"),
        }
    }

    Ok(tables)
}

/// Resolve the table to convert in.
///
/// With an explicit table id, built-ins are checked before user tables.
/// Without one, every table is searched for the unit token; finding it in
/// more than one table is an error that names the candidates.
pub fn resolve_table(table_id: Option<&str>, unit_token: &str) -> Result<UnitTable> {
    if let Some(id) = table_id {
        if let Some(table) = builtin_table(id) {
            return Ok(table);
        }

        let dir = user_tables_dir()?;
        return utilikit_core::store::load_table(&dir, id.trim())
            .map_err(|_| eyre!("Unknown table: {id}. Run `utilikit units tables` to list them."));
    }

    let matches: Vec<UnitTable> = all_tables()?
        .into_iter()
        .filter(|t| t.find_unit(unit_token).is_some())
        .collect();

    match matches.len() {
        0 => Err(eyre!(
            "Unknown unit: {unit_token}. Run `utilikit units tables` to list available tables."
        )),
        1 => Ok(matches.into_iter().next().expect("one match")),
        _ => {
            let ids: Vec<&str> = matches.iter().map(|t| t.id.as_str()).collect();
            Err(eyre!(
                "Unit '{unit_token}' exists in more than one table ({}). Pick one with --table.",
                ids.join(", ")
            ))
        }
    }
}

use std::path::PathBuf;

use crate::prelude::{println, *};
use serde::Deserialize;
use utilikit_core::store::{delete_table, save_table};
use utilikit_core::units::{Unit, UnitTable};

use super::user_tables_dir;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SaveOptions {
    /// Name to store the table under
    name: String,

    /// Path to a TOML table definition
    #[arg(short, long)]
    file: PathBuf,

    /// Overwrite an existing table with the same name
    #[arg(long)]
    update: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RmOptions {
    /// Name of the table to remove
    name: String,
}

/// TOML shape accepted from the user. Validation happens in
/// `UnitTable::new`, so a bad factor is rejected before anything is written.
#[derive(Debug, Deserialize)]
struct TableDefinition {
    id: String,
    label: String,
    units: Vec<Unit>,
}

pub fn run_save(options: SaveOptions, global: crate::Global) -> Result<()> {
    let content = std::fs::read_to_string(&options.file)
        .with_context(|| f!("Failed to read {}", options.file.display()))?;

    let definition: TableDefinition = toml::from_str(&content)
        .map_err(|e| eyre!("Invalid table definition: {e}"))?;

    let table = UnitTable::new(&definition.id, &definition.label, definition.units)
        .map_err(|e| eyre!("Invalid table definition: {e}"))?;

    let dir = user_tables_dir()?;
    save_table(&dir, &options.name, &table, options.update).map_err(|e| eyre!("{e}"))?;

    if global.verbose {
        println!("Saved to {}", dir.join(f!("{}.toml", options.name)).display());
    }
    println!("Saved table '{}' ({} units).", options.name, table.units().len());

    Ok(())
}

pub fn run_rm(options: RmOptions, _global: crate::Global) -> Result<()> {
    let dir = user_tables_dir()?;
    delete_table(&dir, &options.name).map_err(|e| eyre!("{e}"))?;

    println!("Removed table '{}'.", options.name);
    Ok(())
}

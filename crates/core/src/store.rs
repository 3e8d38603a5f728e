//! Custom unit-table storage and retrieval functions
//!
//! Pure functions for managing user-defined unit tables in the filesystem.
//! Tables are stored one per file as TOML documents under a caller-supplied
//! directory, so callers inject the location and tests use a temp dir.
//! Loading always revalidates through [`UnitTable::new`]: a hand-edited file
//! must not be able to smuggle a zero or non-finite factor into conversions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::units::{Unit, UnitTable};

/// Error type for table storage operations
#[derive(Debug)]
pub enum StoreError {
    IoError(String),
    TableNotFound(String),
    TableAlreadyExists(String),
    InvalidTableName(String),
    InvalidTable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "IO error: {}", msg),
            StoreError::TableNotFound(name) => write!(f, "Table not found: {}", name),
            StoreError::TableAlreadyExists(name) => {
                write!(f, "Table already exists: {}. Use --update to overwrite.", name)
            }
            StoreError::InvalidTableName(name) => write!(f, "Invalid table name: {}", name),
            StoreError::InvalidTable(msg) => write!(f, "Invalid table: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err.to_string())
    }
}

/// On-disk shape of a table file. Kept separate from `UnitTable` so that
/// deserialization cannot bypass construction-time validation.
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    id: String,
    label: String,
    units: Vec<Unit>,
}

/// List all saved tables in the given directory
///
/// Returns a sorted vector of table names (without .toml extension)
pub fn list_tables(tables_dir: &Path) -> Result<Vec<String>, StoreError> {
    // If directory doesn't exist, return empty list
    if !tables_dir.exists() {
        return Ok(Vec::new());
    }

    let mut tables = Vec::new();

    for entry in fs::read_dir(tables_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("toml") {
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                tables.push(name.to_string());
            }
        }
    }

    tables.sort();
    Ok(tables)
}

/// Load and validate a table from the filesystem
///
/// # Arguments
/// * `tables_dir` - Directory containing .toml table files
/// * `name` - Table name (without .toml extension)
pub fn load_table(tables_dir: &Path, name: &str) -> Result<UnitTable, StoreError> {
    validate_table_name(name)?;

    let table_path = tables_dir.join(format!("{}.toml", name));

    if !table_path.exists() {
        return Err(StoreError::TableNotFound(name.to_string()));
    }

    let content = fs::read_to_string(&table_path)?;
    let file: TableFile =
        toml::from_str(&content).map_err(|e| StoreError::InvalidTable(e.to_string()))?;

    UnitTable::new(&file.id, &file.label, file.units)
        .map_err(|e| StoreError::InvalidTable(e.to_string()))
}

/// Save a table to the filesystem
///
/// # Arguments
/// * `tables_dir` - Directory to store .toml table files
/// * `name` - Table name (without .toml extension)
/// * `table` - The validated table to persist
/// * `overwrite` - If true, overwrites an existing table; if false, errors on existing
pub fn save_table(
    tables_dir: &Path,
    name: &str,
    table: &UnitTable,
    overwrite: bool,
) -> Result<(), StoreError> {
    validate_table_name(name)?;

    // Create directory if it doesn't exist
    fs::create_dir_all(tables_dir)?;

    let table_path = tables_dir.join(format!("{}.toml", name));

    if table_path.exists() && !overwrite {
        return Err(StoreError::TableAlreadyExists(name.to_string()));
    }

    let file = TableFile {
        id: table.id.clone(),
        label: table.label.clone(),
        units: table.units().to_vec(),
    };

    let content = toml::to_string_pretty(&file).map_err(|e| StoreError::InvalidTable(e.to_string()))?;
    fs::write(&table_path, content)?;
    Ok(())
}

/// Delete a table from the filesystem
pub fn delete_table(tables_dir: &Path, name: &str) -> Result<(), StoreError> {
    validate_table_name(name)?;

    let table_path = tables_dir.join(format!("{}.toml", name));

    if !table_path.exists() {
        return Err(StoreError::TableNotFound(name.to_string()));
    }

    fs::remove_file(&table_path)?;
    Ok(())
}

/// Validate table name for security and usability
///
/// Table names must:
/// - Not be empty
/// - Only contain alphanumeric characters, hyphens, and underscores
fn validate_table_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::InvalidTableName(
            "Table name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::InvalidTableName(
            "Table name can only contain alphanumeric characters, hyphens, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_table() -> UnitTable {
        UnitTable::new(
            "coffee",
            "Coffee Measures",
            vec![
                Unit {
                    id: "gram".to_string(),
                    label: "Gram".to_string(),
                    symbol: "g".to_string(),
                    factor: 1.0,
                },
                Unit {
                    id: "scoop".to_string(),
                    label: "Scoop".to_string(),
                    symbol: "scp".to_string(),
                    factor: 7.0,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_load_table() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        let table = sample_table();
        save_table(tables_dir, "coffee", &table, false).unwrap();

        let loaded = load_table(tables_dir, "coffee").unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_list_tables_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        let table = sample_table();
        save_table(tables_dir, "zeta", &table, false).unwrap();
        save_table(tables_dir, "alpha", &table, false).unwrap();

        let tables = list_tables(tables_dir).unwrap();
        assert_eq!(tables, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_save_existing_without_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        let table = sample_table();
        save_table(tables_dir, "coffee", &table, false).unwrap();

        let result = save_table(tables_dir, "coffee", &table, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_existing_with_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        let table = sample_table();
        save_table(tables_dir, "coffee", &table, false).unwrap();
        save_table(tables_dir, "coffee", &table, true).unwrap();
    }

    #[test]
    fn test_delete_table() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        let table = sample_table();
        save_table(tables_dir, "coffee", &table, false).unwrap();
        delete_table(tables_dir, "coffee").unwrap();

        assert!(load_table(tables_dir, "coffee").is_err());
    }

    #[test]
    fn test_load_nonexistent_table() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_table(temp_dir.path(), "missing");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_factor() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        // Hand-written file with a zero factor must fail validation on load.
        let content = r#"
id = "broken"
label = "Broken"

[[units]]
id = "base"
label = "Base"
symbol = "b"
factor = 1.0

[[units]]
id = "void"
label = "Void"
symbol = "v"
factor = 0.0
"#;
        fs::write(tables_dir.join("broken.toml"), content).unwrap();

        let result = load_table(tables_dir, "broken");
        assert!(matches!(result, Err(StoreError::InvalidTable(_))));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        fs::write(tables_dir.join("garbled.toml"), "not [valid toml").unwrap();

        let result = load_table(tables_dir, "garbled");
        assert!(matches!(result, Err(StoreError::InvalidTable(_))));
    }

    #[test]
    fn test_validate_table_name() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path();

        assert!(load_table(tables_dir, "bad name").is_err());
        assert!(load_table(tables_dir, "../escape").is_err());
        assert!(load_table(tables_dir, "").is_err());
    }

    #[test]
    fn test_list_nonexistent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let tables_dir = temp_dir.path().join("nonexistent");

        let tables = list_tables(&tables_dir).unwrap();
        assert_eq!(tables, Vec::<String>::new());
    }
}

//! Unit-value conversion through a validated factor table
//!
//! Every converter pivots through a base unit: the input is multiplied by the
//! source unit's factor to reach the base value, then divided by each target
//! unit's factor. Tables are validated once at construction so conversion
//! itself can never divide by zero or produce a non-finite value.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single unit within a conversion table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable identifier, e.g. "kilogram"
    pub id: String,
    /// Display name, e.g. "Kilogram"
    pub label: String,
    /// Short display symbol, e.g. "kg"
    pub symbol: String,
    /// Multiplicative factor to the table's base unit
    pub factor: f64,
}

/// A closed, immutable table of units for one measurement category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTable {
    pub id: String,
    pub label: String,
    units: Vec<Unit>,
}

/// Error type for table construction and conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Table id and label cannot be empty")]
    EmptyTableName,

    #[error("Table '{0}' must contain at least two units")]
    TooFewUnits(String),

    #[error("Unit id cannot be empty in table '{0}'")]
    EmptyUnitId(String),

    #[error("Duplicate unit id '{0}'")]
    DuplicateUnitId(String),

    #[error("Unit '{0}' has a non-finite or non-positive factor")]
    InvalidFactor(String),

    #[error("Table '{0}' must contain exactly one base unit with factor 1")]
    MissingBaseUnit(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// One converted value in a conversion result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub unit_id: String,
    pub label: String,
    pub symbol: String,
    pub value: f64,
}

impl UnitTable {
    /// Build a table, validating every invariant the conversion math relies on.
    ///
    /// Rules:
    /// - table id and label are non-empty
    /// - at least two units (a single-unit converter converts nothing)
    /// - unit ids are non-empty and unique
    /// - every factor is finite and strictly positive
    /// - exactly one unit has factor 1 (the base unit)
    pub fn new(id: &str, label: &str, units: Vec<Unit>) -> Result<Self, UnitError> {
        if id.trim().is_empty() || label.trim().is_empty() {
            return Err(UnitError::EmptyTableName);
        }

        if units.len() < 2 {
            return Err(UnitError::TooFewUnits(id.to_string()));
        }

        let mut base_count = 0;
        for (i, unit) in units.iter().enumerate() {
            if unit.id.trim().is_empty() {
                return Err(UnitError::EmptyUnitId(id.to_string()));
            }

            if units[..i].iter().any(|u| u.id == unit.id) {
                return Err(UnitError::DuplicateUnitId(unit.id.clone()));
            }

            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(UnitError::InvalidFactor(unit.id.clone()));
            }

            if unit.factor == 1.0 {
                base_count += 1;
            }
        }

        if base_count != 1 {
            return Err(UnitError::MissingBaseUnit(id.to_string()));
        }

        Ok(UnitTable {
            id: id.to_string(),
            label: label.to_string(),
            units,
        })
    }

    /// Units in declaration order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The unit whose factor is 1
    pub fn base_unit(&self) -> &Unit {
        // Validated at construction: exactly one unit has factor 1.
        self.units
            .iter()
            .find(|u| u.factor == 1.0)
            .expect("validated table has a base unit")
    }

    /// Look up a unit by id (case-insensitive) or display symbol.
    ///
    /// Ids are matched case-insensitively. Symbols are matched exactly first
    /// so that case-distinguished symbols keep priority, then
    /// case-insensitively as a convenience for terminal input.
    pub fn find_unit(&self, token: &str) -> Option<&Unit> {
        let token = token.trim();

        if let Some(unit) = self.units.iter().find(|u| u.id.eq_ignore_ascii_case(token)) {
            return Some(unit);
        }

        if let Some(unit) = self.units.iter().find(|u| u.symbol == token) {
            return Some(unit);
        }

        self.units
            .iter()
            .find(|u| u.symbol.eq_ignore_ascii_case(token))
    }
}

/// Parse a raw numeric input string under the silent-failure policy.
///
/// Empty, non-numeric, and non-finite input all yield `None` ("no result
/// yet") rather than an error: malformed values are the normal state while a
/// user is still typing.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a combined quantity string like "12.5 kg" (or "12.5kg") into an
/// amount and a unit token. Returns `None` when no leading number is present;
/// the unit token may be empty when the input is a bare number.
pub fn parse_quantity(raw: &str) -> Option<(f64, String)> {
    let re = Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(.*?)\s*$").unwrap();
    let caps = re.captures(raw)?;

    let amount = caps.get(1)?.as_str().parse::<f64>().ok()?;
    if !amount.is_finite() {
        return None;
    }

    let unit = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some((amount, unit))
}

/// Convert an amount from one unit to every unit in the table.
///
/// `base = amount * factor(from)`, then `value = base / factor(u)` for every
/// unit `u`, returned in table order. The source unit's own entry equals the
/// input amount (subject to floating-point rounding).
pub fn convert(amount: f64, from: &str, table: &UnitTable) -> Result<Vec<Conversion>, UnitError> {
    let from_unit = table
        .find_unit(from)
        .ok_or_else(|| UnitError::UnknownUnit(from.to_string()))?;

    let base = amount * from_unit.factor;

    Ok(table
        .units()
        .iter()
        .map(|u| Conversion {
            unit_id: u.id.clone(),
            label: u.label.clone(),
            symbol: u.symbol.clone(),
            value: base / u.factor,
        })
        .collect())
}

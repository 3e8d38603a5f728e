//! Built-in unit tables
//!
//! Each table is a closed list of units with multiplicative factors to the
//! table's base unit (the one whose factor is 1). Factors are compile-time
//! constants; `UnitTable::new` still validates them so a typo in this file
//! fails loudly in tests instead of corrupting conversions.

use crate::units::{Unit, UnitTable};

fn unit(id: &str, label: &str, symbol: &str, factor: f64) -> Unit {
    Unit {
        id: id.to_string(),
        label: label.to_string(),
        symbol: symbol.to_string(),
        factor,
    }
}

fn table(id: &str, label: &str, units: Vec<Unit>) -> UnitTable {
    // All inputs are compile-time constants covered by tests.
    UnitTable::new(id, label, units).expect("built-in table is well-formed")
}

/// Length units, base meter
pub fn length() -> UnitTable {
    table(
        "length",
        "Length",
        vec![
            unit("millimeter", "Millimeter", "mm", 0.001),
            unit("centimeter", "Centimeter", "cm", 0.01),
            unit("meter", "Meter", "m", 1.0),
            unit("kilometer", "Kilometer", "km", 1000.0),
            unit("inch", "Inch", "in", 0.0254),
            unit("foot", "Foot", "ft", 0.3048),
            unit("yard", "Yard", "yd", 0.9144),
            unit("mile", "Mile", "mi", 1609.344),
        ],
    )
}

/// Area units, base square meter
pub fn area() -> UnitTable {
    table(
        "area",
        "Area",
        vec![
            unit("square-millimeter", "Square Millimeter", "mm²", 1e-6),
            unit("square-centimeter", "Square Centimeter", "cm²", 1e-4),
            unit("square-meter", "Square Meter", "m²", 1.0),
            unit("hectare", "Hectare", "ha", 10_000.0),
            unit("square-kilometer", "Square Kilometer", "km²", 1e6),
            unit("square-inch", "Square Inch", "in²", 0.000_645_16),
            unit("square-foot", "Square Foot", "ft²", 0.092_903_04),
            unit("acre", "Acre", "ac", 4046.856_422_4),
        ],
    )
}

/// Weight units, base gram
pub fn weight() -> UnitTable {
    table(
        "weight",
        "Weight",
        vec![
            unit("milligram", "Milligram", "mg", 0.001),
            unit("gram", "Gram", "g", 1.0),
            unit("kilogram", "Kilogram", "kg", 1000.0),
            unit("tonne", "Tonne", "t", 1e6),
            unit("ounce", "Ounce", "oz", 28.349_523_125),
            unit("pound", "Pound", "lb", 453.592_37),
            unit("stone", "Stone", "st", 6350.293_18),
        ],
    )
}

/// Volume units, base liter
pub fn volume() -> UnitTable {
    table(
        "volume",
        "Volume",
        vec![
            unit("milliliter", "Milliliter", "mL", 0.001),
            unit("liter", "Liter", "L", 1.0),
            unit("cubic-meter", "Cubic Meter", "m³", 1000.0),
            unit("fluid-ounce", "Fluid Ounce (US)", "fl oz", 0.029_573_529_562_5),
            unit("cup", "Cup (US)", "cup", 0.236_588_236_5),
            unit("pint", "Pint (US)", "pt", 0.473_176_473),
            unit("quart", "Quart (US)", "qt", 0.946_352_946),
            unit("gallon", "Gallon (US)", "gal", 3.785_411_784),
        ],
    )
}

/// Speed units, base meter per second
pub fn speed() -> UnitTable {
    table(
        "speed",
        "Speed",
        vec![
            unit("meter-per-second", "Meter per Second", "m/s", 1.0),
            unit("kilometer-per-hour", "Kilometer per Hour", "km/h", 1.0 / 3.6),
            unit("mile-per-hour", "Mile per Hour", "mph", 0.447_04),
            unit("foot-per-second", "Foot per Second", "ft/s", 0.3048),
            unit("knot", "Knot", "kn", 1852.0 / 3600.0),
        ],
    )
}

/// Data size units, base byte, binary multiples
pub fn data() -> UnitTable {
    table(
        "data",
        "Data Size",
        vec![
            unit("bit", "Bit", "bit", 0.125),
            unit("byte", "Byte", "B", 1.0),
            unit("kilobyte", "Kilobyte", "KB", 1024.0),
            unit("megabyte", "Megabyte", "MB", 1_048_576.0),
            unit("gigabyte", "Gigabyte", "GB", 1_073_741_824.0),
            unit("terabyte", "Terabyte", "TB", 1_099_511_627_776.0),
        ],
    )
}

/// Time units, base second
pub fn time() -> UnitTable {
    table(
        "time",
        "Time",
        vec![
            unit("millisecond", "Millisecond", "ms", 0.001),
            unit("second", "Second", "s", 1.0),
            unit("minute", "Minute", "min", 60.0),
            unit("hour", "Hour", "h", 3600.0),
            unit("day", "Day", "d", 86_400.0),
            unit("week", "Week", "wk", 604_800.0),
        ],
    )
}

/// Currency units, base US dollar, static reference rates
pub fn currency() -> UnitTable {
    table(
        "currency",
        "Currency",
        vec![
            unit("usd", "US Dollar", "USD", 1.0),
            unit("eur", "Euro", "EUR", 1.08),
            unit("gbp", "British Pound", "GBP", 1.27),
            unit("jpy", "Japanese Yen", "JPY", 0.0067),
            unit("cad", "Canadian Dollar", "CAD", 0.74),
            unit("aud", "Australian Dollar", "AUD", 0.66),
            unit("chf", "Swiss Franc", "CHF", 1.13),
        ],
    )
}

/// All built-in tables in display order
pub fn builtin_tables() -> Vec<UnitTable> {
    vec![
        length(),
        area(),
        weight(),
        volume(),
        speed(),
        data(),
        time(),
        currency(),
    ]
}

/// Look up a built-in table by id (case-insensitive)
pub fn builtin_table(id: &str) -> Option<UnitTable> {
    builtin_tables()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert;

    #[test]
    fn test_all_builtin_tables_validate() {
        // `table()` expects on construction, so simply building them all is
        // the validation.
        let tables = builtin_tables();
        assert_eq!(tables.len(), 8);
    }

    #[test]
    fn test_every_table_has_a_base_unit() {
        for table in builtin_tables() {
            assert_eq!(
                table.base_unit().factor,
                1.0,
                "table '{}' base unit",
                table.id
            );
        }
    }

    #[test]
    fn test_builtin_table_lookup() {
        assert_eq!(builtin_table("weight").unwrap().id, "weight");
        assert_eq!(builtin_table("  LENGTH ").unwrap().id, "length");
        assert!(builtin_table("sorcery").is_none());
    }

    #[test]
    fn test_length_mile_in_meters() {
        let table = length();
        let results = convert(1.0, "mile", &table).unwrap();
        let meters = results.iter().find(|c| c.unit_id == "meter").unwrap();
        assert!((meters.value - 1609.344).abs() < 1e-9);
    }

    #[test]
    fn test_speed_kmh_to_ms() {
        let table = speed();
        let results = convert(36.0, "km/h", &table).unwrap();
        let ms = results
            .iter()
            .find(|c| c.unit_id == "meter-per-second")
            .unwrap();
        assert!((ms.value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_kilobyte_to_bits() {
        let table = data();
        let results = convert(1.0, "kilobyte", &table).unwrap();
        let bits = results.iter().find(|c| c.unit_id == "bit").unwrap();
        assert!((bits.value - 8192.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_day_to_hours() {
        let table = time();
        let results = convert(2.0, "day", &table).unwrap();
        let hours = results.iter().find(|c| c.unit_id == "hour").unwrap();
        assert!((hours.value - 48.0).abs() < 1e-9);
    }
}

use crate::units::types::{Unit, UnitId, UnitType};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Kelvin offset from Celsius
pub const KELVIN_OFFSET: f64 = 273.15;
/// Rankine offset of the Fahrenheit scale
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Returned whenever a token cannot be resolved
pub static UNKNOWN: Unit = Unit {
    id: UnitId::Unknown,
    unit_type: UnitType::Unknown,
    scale: 0.0,
    names: &["???"],
};

const fn length(id: UnitId, scale: f64, names: &'static [&'static str]) -> Unit {
    Unit {
        id,
        unit_type: UnitType::Length,
        scale,
        names,
    }
}

const fn weight(id: UnitId, scale: f64, names: &'static [&'static str]) -> Unit {
    Unit {
        id,
        unit_type: UnitType::Weight,
        scale,
        names,
    }
}

const fn temperature(id: UnitId, offset: f64, names: &'static [&'static str]) -> Unit {
    Unit {
        id,
        unit_type: UnitType::Temperature,
        scale: offset,
        names,
    }
}

/// Every unit the converter understands, in display order
pub static UNITS: [Unit; 16] = [
    length(UnitId::Meter, 1.0, &["meter", "m", "meters"]),
    length(UnitId::Centimeter, 0.01, &["centimeter", "cm", "centimeters"]),
    length(UnitId::Millimeter, 0.001, &["millimeter", "mm", "millimeters"]),
    length(UnitId::Kilometer, 1000.0, &["kilometer", "km", "kilometers"]),
    length(UnitId::Mile, 1609.35, &["mile", "mi", "miles"]),
    length(UnitId::Yard, 0.9144, &["yard", "yd", "yards"]),
    length(UnitId::Foot, 0.3048, &["foot", "ft", "feet"]),
    length(UnitId::Inch, 0.0254, &["inch", "in", "inches"]),
    weight(UnitId::Gram, 1.0, &["gram", "g", "grams"]),
    weight(UnitId::Kilogram, 1000.0, &["kilogram", "kg", "kilograms"]),
    weight(UnitId::Milligram, 0.001, &["milligram", "mg", "milligrams"]),
    weight(UnitId::Pound, 453.592, &["pound", "lb", "pounds"]),
    weight(UnitId::Ounce, 28.3495, &["ounce", "oz", "ounces"]),
    temperature(
        UnitId::Celsius,
        0.0,
        &["degree celsius", "c", "dc", "celsius", "degrees celsius"],
    ),
    temperature(
        UnitId::Fahrenheit,
        FAHRENHEIT_OFFSET,
        &[
            "degree fahrenheit",
            "f",
            "df",
            "fahrenheit",
            "degrees fahrenheit",
        ],
    ),
    temperature(UnitId::Kelvin, KELVIN_OFFSET, &["kelvin", "k", "kelvins"]),
];

lazy_static! {
    /// Alias -> unit. Aliases are unique across the table.
    static ref ALIAS_INDEX: HashMap<&'static str, &'static Unit> = {
        let mut index = HashMap::new();
        for unit in UNITS.iter() {
            for name in unit.names {
                index.insert(*name, unit);
            }
        }
        index
    };

    static ref ALL_NAMES: HashSet<&'static str> = ALIAS_INDEX.keys().copied().collect();
}

/// Flat set of every recognized alias
pub fn all_names() -> &'static HashSet<&'static str> {
    &ALL_NAMES
}

/// Resolve a lowercase alias to its unit, or `UNKNOWN`
pub fn match_by_name(name: &str) -> &'static Unit {
    ALIAS_INDEX.get(name).copied().unwrap_or(&UNKNOWN)
}

pub fn lookup(id: UnitId) -> &'static Unit {
    UNITS.iter().find(|u| u.id == id).unwrap_or(&UNKNOWN)
}

/// Units of a given type, in table order
pub fn known_units(unit_type: UnitType) -> impl Iterator<Item = &'static Unit> {
    UNITS.iter().filter(move |u| u.unit_type == unit_type)
}

const NAME_WIDTH: usize = 18;
const SCALE_WIDTH: usize = 10;

/// Text listing of the table: one section per type, then name, scale and
/// aliases in aligned columns
pub fn render_listing() -> String {
    let mut listing = String::new();
    for unit_type in [UnitType::Length, UnitType::Weight, UnitType::Temperature] {
        listing.push_str(&format!("{}:\n", unit_type));
        for unit in known_units(unit_type) {
            listing.push_str(&format!(
                "  {:<name$} {:>scale$} {}\n",
                unit.singular(),
                unit.scale,
                unit.names.join(", "),
                name = NAME_WIDTH,
                scale = SCALE_WIDTH,
            ));
        }
    }
    listing
}

// Fixed table of length, weight and temperature units

pub mod table;
pub mod types;

pub use table::{
    all_names, known_units, lookup, match_by_name, render_listing, FAHRENHEIT_OFFSET,
    KELVIN_OFFSET, UNITS, UNKNOWN,
};
pub use types::{Unit, UnitId, UnitType};

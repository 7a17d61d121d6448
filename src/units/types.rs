use serde::Serialize;
use std::fmt;

/// Classification that decides which formula applies and whether negative
/// quantities are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Length,
    Weight,
    Temperature,
    // Parse-failure marker, never convertible
    Unknown,
}

impl UnitType {
    /// Linear types share a base unit and reject negative magnitudes
    pub fn is_linear(&self) -> bool {
        matches!(self, UnitType::Length | UnitType::Weight)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Length => write!(f, "Length"),
            UnitType::Weight => write!(f, "Weight"),
            UnitType::Temperature => write!(f, "Temperature"),
            UnitType::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitId {
    Unknown,
    Meter,
    Centimeter,
    Millimeter,
    Kilometer,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// A measurement unit from the fixed table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub id: UnitId,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    /// Factor relative to the base unit of the type (meter, gram).
    /// Temperature units store their offset constant here instead.
    pub scale: f64,
    /// Recognized aliases: singular first, plural last
    pub names: &'static [&'static str],
}

impl Unit {
    pub fn singular(&self) -> &'static str {
        self.names.first().copied().unwrap_or("???")
    }

    pub fn plural(&self) -> &'static str {
        self.names.last().copied().unwrap_or("???")
    }

    pub fn is_known(&self) -> bool {
        self.unit_type != UnitType::Unknown
    }
}

use crate::convert::error::ConvertError;
use crate::units::{Unit, UnitId, UnitType, FAHRENHEIT_OFFSET, KELVIN_OFFSET};
use lazy_static::lazy_static;
use std::collections::HashMap;

type Formula = fn(f64) -> f64;

fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

fn celsius_to_kelvin(value: f64) -> f64 {
    value + KELVIN_OFFSET
}

fn kelvin_to_celsius(value: f64) -> f64 {
    value - KELVIN_OFFSET
}

fn kelvin_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 - FAHRENHEIT_OFFSET
}

fn fahrenheit_to_kelvin(value: f64) -> f64 {
    (value + FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

lazy_static! {
    /// (from, to) -> formula for every ordered pair of distinct temperature scales
    static ref TEMPERATURE_FORMULAS: HashMap<(UnitId, UnitId), Formula> = {
        let mut formulas: HashMap<(UnitId, UnitId), Formula> = HashMap::new();
        formulas.insert((UnitId::Celsius, UnitId::Fahrenheit), celsius_to_fahrenheit);
        formulas.insert((UnitId::Celsius, UnitId::Kelvin), celsius_to_kelvin);
        formulas.insert((UnitId::Kelvin, UnitId::Celsius), kelvin_to_celsius);
        formulas.insert((UnitId::Kelvin, UnitId::Fahrenheit), kelvin_to_fahrenheit);
        formulas.insert((UnitId::Fahrenheit, UnitId::Kelvin), fahrenheit_to_kelvin);
        formulas.insert((UnitId::Fahrenheit, UnitId::Celsius), fahrenheit_to_celsius);
        formulas
    };
}

/// Scale through the shared base unit of the type
pub fn convert_linear(value: f64, from: &Unit, to: &Unit) -> f64 {
    if from.id == to.id {
        return value;
    }
    value * from.scale / to.scale
}

/// Apply the formula for the (from, to) pair. Same-scale conversions are the
/// identity; `None` means one side is not a temperature scale.
pub fn convert_temperature(value: f64, from: UnitId, to: UnitId) -> Option<f64> {
    if from == to {
        return match from {
            UnitId::Celsius | UnitId::Fahrenheit | UnitId::Kelvin => Some(value),
            _ => None,
        };
    }

    TEMPERATURE_FORMULAS.get(&(from, to)).map(|formula| formula(value))
}

pub fn calculate(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConvertError> {
    let impossible = || ConvertError::ConversionImpossible {
        from: from.plural().to_string(),
        to: to.plural().to_string(),
    };

    if from.unit_type != to.unit_type {
        return Err(impossible());
    }

    match from.unit_type {
        UnitType::Length | UnitType::Weight => Ok(convert_linear(value, from, to)),
        UnitType::Temperature => convert_temperature(value, from.id, to.id).ok_or_else(impossible),
        UnitType::Unknown => Err(impossible()),
    }
}

use crate::units::Unit;
use serde::Serialize;
use std::fmt;

/// Pick the singular alias for exactly one (or minus one) unit, plural otherwise
pub fn display_name(unit: &Unit, magnitude: f64) -> &'static str {
    if magnitude == 1.0 || magnitude == -1.0 {
        unit.singular()
    } else {
        unit.plural()
    }
}

/// Render a value as a decimal with at least one fractional digit
/// ("1.0", "1609.35") in [1e-3, 1e7), and in scientific notation
/// ("1.0E7", "1.5E-4") outside it
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// A completed conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub from: &'static Unit,
    pub result: f64,
    pub to: &'static Unit,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_value(self.value),
            display_name(self.from, self.value),
            format_value(self.result),
            display_name(self.to, self.result)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{lookup, UnitId};

    #[test]
    fn test_display_name() {
        let mile = lookup(UnitId::Mile);
        assert_eq!(display_name(mile, 1.0), "mile");
        assert_eq!(display_name(mile, -1.0), "mile");
        assert_eq!(display_name(mile, 0.0), "miles");
        assert_eq!(display_name(mile, 2.0), "miles");
        assert_eq!(display_name(mile, 1.0000001), "miles");

        let celsius = lookup(UnitId::Celsius);
        assert_eq!(display_name(celsius, 1.0), "degree celsius");
        assert_eq!(display_name(celsius, 20.0), "degrees celsius");
    }

    #[test]
    fn test_format_decimal_range() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(-1.0), "-1.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(1609.35), "1609.35");
        assert_eq!(format_value(273.15), "273.15");
        assert_eq!(format_value(0.001), "0.001");
        assert_eq!(format_value(9999999.0), "9999999.0");
    }

    #[test]
    fn test_format_scientific_range() {
        assert_eq!(format_value(1e7), "1.0E7");
        assert_eq!(format_value(1.5e-4), "1.5E-4");
        assert_eq!(format_value(-2.5e10), "-2.5E10");
        assert_eq!(format_value(0.0001), "1.0E-4");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_conversion_display() {
        let conversion = Conversion {
            value: 1.0,
            from: lookup(UnitId::Mile),
            result: 1609.35,
            to: lookup(UnitId::Meter),
        };
        assert_eq!(conversion.to_string(), "1.0 mile is 1609.35 meters");
    }
}

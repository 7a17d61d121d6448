use crate::convert::detector::parse_number;
use crate::convert::error::ConvertError;
use crate::units::{all_names, match_by_name, Unit, UNKNOWN};
use tracing::debug;

/// Shortest accepted request: "<value> <unit> to <unit>"
pub const MIN_TOKENS: usize = 4;
/// Longest accepted request: both sides spelled "degrees <scale>"
pub const MAX_TOKENS: usize = 6;

const DEGREE_WORDS: [&str; 2] = ["degree", "degrees"];
const SCALE_WORDS: [&str; 2] = ["celsius", "fahrenheit"];

/// A validated request, ready for the calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRequest {
    pub value: f64,
    pub from: &'static Unit,
    pub to: &'static Unit,
}

/// Parse one raw input line.
///
/// Tokens are split on single spaces. Anything between the source and target
/// unit (normally "to") is skipped by position and never validated.
pub fn parse_request(line: &str) -> Result<ParsedRequest, ConvertError> {
    let normalized = line.to_lowercase();
    let tokens: Vec<&str> = normalized.split(' ').collect();

    if !(MIN_TOKENS..=MAX_TOKENS).contains(&tokens.len()) {
        debug!(tokens = tokens.len(), "token count out of range");
        return Err(ConvertError::Parse);
    }

    let value = parse_number(tokens[0]).ok_or(ConvertError::Parse)?;
    let from = source_unit(&tokens);
    let to = target_unit(&tokens);
    debug!(value, from = ?from.id, to = ?to.id, "resolved request");

    if !from.is_known() || from.unit_type != to.unit_type {
        return Err(ConvertError::ConversionImpossible {
            from: from.plural().to_string(),
            to: to.plural().to_string(),
        });
    }

    if from.unit_type.is_linear() && value < 0.0 {
        return Err(ConvertError::NegativeUnit {
            unit_type: from.unit_type,
        });
    }

    Ok(ParsedRequest { value, from, to })
}

/// Source unit: the token after the number, or "degree(s) <scale>" spanning two
fn source_unit(tokens: &[&str]) -> &'static Unit {
    resolve_unit(tokens[1], tokens[1], tokens[2])
}

/// Target unit: the last token, or "degree(s) <scale>" ending the line
fn target_unit(tokens: &[&str]) -> &'static Unit {
    let last = tokens.len() - 1;
    resolve_unit(tokens[last], tokens[last - 1], tokens[last])
}

fn resolve_unit(single: &str, degree: &str, scale: &str) -> &'static Unit {
    if all_names().contains(single) {
        return match_by_name(single);
    }

    if DEGREE_WORDS.contains(&degree) && SCALE_WORDS.contains(&scale) {
        return match_by_name(&format!("{} {}", degree, scale));
    }

    &UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{UnitId, UnitType};

    #[test]
    fn test_parse_simple() {
        let request = parse_request("1 km to m").unwrap();
        assert_eq!(request.value, 1.0);
        assert_eq!(request.from.id, UnitId::Kilometer);
        assert_eq!(request.to.id, UnitId::Meter);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let request = parse_request("3 Pounds TO Ounces").unwrap();
        assert_eq!(request.from.id, UnitId::Pound);
        assert_eq!(request.to.id, UnitId::Ounce);
    }

    #[test]
    fn test_parse_two_word_units() {
        let request = parse_request("-40 degrees Celsius to degrees Fahrenheit").unwrap();
        assert_eq!(request.value, -40.0);
        assert_eq!(request.from.id, UnitId::Celsius);
        assert_eq!(request.to.id, UnitId::Fahrenheit);

        let request = parse_request("1 degree fahrenheit in k").unwrap();
        assert_eq!(request.from.id, UnitId::Fahrenheit);
        assert_eq!(request.to.id, UnitId::Kelvin);

        let request = parse_request("300 kelvins to degree celsius").unwrap();
        assert_eq!(request.from.id, UnitId::Kelvin);
        assert_eq!(request.to.id, UnitId::Celsius);
    }

    #[test]
    fn test_filler_words_are_not_validated() {
        let request = parse_request("12 inches into the feet").unwrap();
        assert_eq!(request.from.id, UnitId::Inch);
        assert_eq!(request.to.id, UnitId::Foot);
    }

    #[test]
    fn test_token_count_bounds() {
        assert_eq!(parse_request("1 m"), Err(ConvertError::Parse));
        assert_eq!(parse_request("1 m m"), Err(ConvertError::Parse));
        assert_eq!(parse_request("1 m to very very very m"), Err(ConvertError::Parse));
        assert_eq!(parse_request(""), Err(ConvertError::Parse));
    }

    #[test]
    fn test_double_spaces_count_as_tokens() {
        assert_eq!(
            parse_request("1  m  to  km"),
            Err(ConvertError::Parse)
        );
    }

    #[test]
    fn test_first_token_must_be_numeric() {
        assert_eq!(parse_request("abc meter to feet"), Err(ConvertError::Parse));
        assert_eq!(parse_request("nan meter to feet"), Err(ConvertError::Parse));
    }

    #[test]
    fn test_unknown_units() {
        assert_eq!(
            parse_request("1 parsec to m"),
            Err(ConvertError::ConversionImpossible {
                from: "???".to_string(),
                to: "meters".to_string(),
            })
        );
        assert_eq!(
            parse_request("1 g to ???"),
            Err(ConvertError::ConversionImpossible {
                from: "grams".to_string(),
                to: "???".to_string(),
            })
        );
        assert_eq!(
            parse_request("1 degree kelvin to c"),
            Err(ConvertError::ConversionImpossible {
                from: "???".to_string(),
                to: "degrees celsius".to_string(),
            })
        );
    }

    #[test]
    fn test_mismatched_types() {
        assert_eq!(
            parse_request("1 meter to degree celsius"),
            Err(ConvertError::ConversionImpossible {
                from: "meters".to_string(),
                to: "degrees celsius".to_string(),
            })
        );
        assert_eq!(
            parse_request("5 kg to ft"),
            Err(ConvertError::ConversionImpossible {
                from: "kilograms".to_string(),
                to: "feet".to_string(),
            })
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(
            parse_request("-5 meters to feet"),
            Err(ConvertError::NegativeUnit {
                unit_type: UnitType::Length
            })
        );
        assert_eq!(
            parse_request("-1 lb to g"),
            Err(ConvertError::NegativeUnit {
                unit_type: UnitType::Weight
            })
        );
        assert!(parse_request("-273.15 c to k").is_ok());
        assert!(parse_request("-0 m to km").is_ok());
    }

    #[test]
    fn test_type_mismatch_reported_before_sign() {
        assert_eq!(
            parse_request("-5 m to kg"),
            Err(ConvertError::ConversionImpossible {
                from: "meters".to_string(),
                to: "kilograms".to_string(),
            })
        );
    }
}

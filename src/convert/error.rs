use crate::units::UnitType;
use thiserror::Error;

/// Recoverable request failures. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Parse error")]
    Parse,
    #[error("Conversion from {from} to {to} is impossible")]
    ConversionImpossible { from: String, to: String },
    #[error("{unit_type} shouldn't be negative")]
    NegativeUnit { unit_type: UnitType },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ConvertError::Parse.to_string(), "Parse error");
        assert_eq!(
            ConvertError::ConversionImpossible {
                from: "meters".to_string(),
                to: "???".to_string(),
            }
            .to_string(),
            "Conversion from meters to ??? is impossible"
        );
        assert_eq!(
            ConvertError::NegativeUnit {
                unit_type: UnitType::Weight
            }
            .to_string(),
            "Weight shouldn't be negative"
        );
    }
}

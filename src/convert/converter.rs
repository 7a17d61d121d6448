use crate::convert::calculator::calculate;
use crate::convert::error::ConvertError;
use crate::convert::formatter::Conversion;
use crate::convert::parser::parse_request;
use tracing::debug;

/// Turns request lines into conversions over the fixed unit table
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Parse, validate and convert one request line
    pub fn convert(&self, line: &str) -> Result<Conversion, ConvertError> {
        let request = parse_request(line)?;
        let result = calculate(request.value, request.from, request.to)?;

        debug!(
            value = request.value,
            from = ?request.from.id,
            to = ?request.to.id,
            result,
            "converted"
        );

        Ok(Conversion {
            value: request.value,
            from: request.from,
            result,
            to: request.to,
        })
    }
}

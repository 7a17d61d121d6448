// Request parsing, validation and conversion

pub mod calculator;
pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;


pub use calculator::{calculate, convert_linear, convert_temperature};
pub use converter::Converter;
pub use detector::{looks_like_number, parse_number};
pub use error::ConvertError;
pub use formatter::{display_name, format_value, Conversion};
pub use parser::{parse_request, ParsedRequest, MAX_TOKENS, MIN_TOKENS};

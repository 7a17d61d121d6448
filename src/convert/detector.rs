use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Decimal floating-point literal, optionally signed, with optional exponent
    /// and an optional `d`/`f` type suffix.
    /// Examples: "1", "-2.5", ".5", "3.", "1e3", "2.5E-2", "10d"
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?[dDfF]?$"
    ).unwrap();

    /// Hexadecimal floating-point literal with a mandatory binary exponent.
    /// Examples: "0x1p3", "-0x1.8p1", "0x.8p0", "0X1Fp-2d"
    static ref HEX_NUMBER_PATTERN: Regex = Regex::new(
        r"^(?P<sign>[+-]?)0[xX](?P<int>[0-9a-fA-F]*)(\.(?P<frac>[0-9a-fA-F]*))?[pP](?P<exp>[+-]?\d+)[dDfF]?$"
    ).unwrap();
}

/// Check if a token is a numeric literal
pub fn looks_like_number(token: &str) -> bool {
    NUMBER_PATTERN.is_match(token) || parse_hex_number(token).is_some()
}

/// Parse a numeric token into an `f64`
pub fn parse_number(token: &str) -> Option<f64> {
    if NUMBER_PATTERN.is_match(token) {
        let literal = token.trim_end_matches(['d', 'D', 'f', 'F']);
        return literal.parse::<f64>().ok();
    }

    parse_hex_number(token)
}

fn parse_hex_number(token: &str) -> Option<f64> {
    let caps = HEX_NUMBER_PATTERN.captures(token)?;
    let int_digits = caps.name("int").map_or("", |m| m.as_str());
    let frac_digits = caps.name("frac").map_or("", |m| m.as_str());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut mantissa = 0.0_f64;
    for digit in int_digits.chars() {
        mantissa = mantissa * 16.0 + f64::from(digit.to_digit(16)?);
    }
    let mut place = 1.0_f64 / 16.0;
    for digit in frac_digits.chars() {
        mantissa += f64::from(digit.to_digit(16)?) * place;
        place /= 16.0;
    }

    let exponent: i32 = caps.name("exp")?.as_str().parse().ok()?;
    let value = mantissa * 2.0_f64.powi(exponent);

    match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => Some(-value),
        _ => Some(value),
    }
}

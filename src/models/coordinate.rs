use serde::Serialize;
use crate::models::error::{Field, InputParseError};

/// A latitude/longitude pair. Ranges are not checked.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parses both fields, latitude first. Surrounding whitespace is ignored.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InputParseError> {
        let lat = parse_field(Field::Latitude, latitude)?;
        let lon = parse_field(Field::Longitude, longitude)?;
        Ok(Self::new(lat, lon))
    }
}

/// First code point of every Unicode decimal digit block (`0` through `9` are contiguous).
const DECIMAL_ZEROS: &[u32] = &[
    0x30, 0x660, 0x6f0, 0x7c0, 0x966, 0x9e6, 0xa66, 0xae6, 0xb66, 0xbe6, 0xc66, 0xce6, 0xd66,
    0xde6, 0xe50, 0xed0, 0xf20, 0x1040, 0x1090, 0x17e0, 0x1810, 0x1946, 0x19d0, 0x1a80, 0x1a90,
    0x1b50, 0x1bb0, 0x1c40, 0x1c50, 0xa620, 0xa8d0, 0xa900, 0xa9d0, 0xa9f0, 0xaa50, 0xabf0,
    0xff10, 0x104a0, 0x10d30, 0x11066, 0x110f0, 0x11136, 0x111d0, 0x112f0, 0x11450, 0x114d0,
    0x11650, 0x116c0, 0x11730, 0x118e0, 0x11950, 0x11c50, 0x11d50, 0x11da0, 0x16a60, 0x16ac0,
    0x16b50, 0x1d7ce, 0x1d7d8, 0x1d7e2, 0x1d7ec, 0x1d7f6, 0x1e140, 0x1e2f0, 0x1e950, 0x1fbf0,
];

fn parse_field(field: Field, input: &str) -> Result<f64, InputParseError> {
    normalize_number(input)
        .and_then(|number| number.parse::<f64>().ok())
        .ok_or_else(|| InputParseError::new(field, input))
}

/// Maps decimal digits of any script to ASCII and drops digit-group underscores.
/// An underscore that is not between two digits makes the input invalid.
fn normalize_number(input: &str) -> Option<String> {
    let chars: Vec<char> = input
        .trim()
        .chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect();

    let mut number = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            number.push(c);
            continue;
        }
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let before_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }
    Some(number)
}

fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii() {
        return c.is_ascii_digit().then_some(c);
    }
    let code = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Latitude => write!(f, "latitude"),
            Field::Longitude => write!(f, "longitude"),
        }
    }
}

/// A latitude or longitude that could not be read as a floating-point number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field} value {input:?}")]
pub struct InputParseError {
    pub field: Field,
    pub input: String,
}

impl InputParseError {
    pub fn new(field: Field, input: &str) -> Self {
        Self {
            field,
            input: input.to_string(),
        }
    }
}

/// Failures that end a collector run. Parse errors never reach this type.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("terminal stream failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to export coordinate log: {0}")]
    Export(#[from] serde_json::Error),
}

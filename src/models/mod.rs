pub mod coordinate;
pub mod coordinate_log;
pub mod error;

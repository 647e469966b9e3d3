use serde::Serialize;
use crate::models::coordinate::Coordinate;

/// Append-only history of the coordinates entered during one run.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct CoordinateLog {
    entries: Vec<Coordinate>,
}

impl CoordinateLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.entries.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, paired with their 1-based index.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Coordinate)> {
        self.entries.iter().enumerate().map(|(i, c)| (i + 1, c))
    }
}

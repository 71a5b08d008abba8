//! Seat codes and the seat grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A seat code, e.g. `"A12"`.
///
/// The ledgers accept any string: the grid defines which codes a screen
/// offers, but membership is not enforced at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatCode(String);

impl SeatCode {
    /// Create a seat code from a raw string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for SeatCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for SeatCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Seat grid dimensions for a screen.
///
/// Codes are linear rather than row-addressed: `A1` through
/// `A{rows * cols}`, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatGrid {
    /// Number of rows.
    pub rows: u8,

    /// Number of columns per row.
    pub cols: u8,
}

impl SeatGrid {
    /// Create a grid with the given dimensions.
    #[must_use]
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    /// Total number of seats.
    #[must_use]
    pub const fn seat_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Enumerate every seat code in grid order.
    pub fn seat_codes(&self) -> impl Iterator<Item = SeatCode> {
        (1..=self.seat_count()).map(|n| SeatCode::new(format!("A{n}")))
    }

    /// Whether a code belongs to this grid.
    #[must_use]
    pub fn contains(&self, code: &SeatCode) -> bool {
        code.as_str()
            .strip_prefix('A')
            .and_then(|n| n.parse::<usize>().ok())
            .is_some_and(|n| n >= 1 && n <= self.seat_count())
    }
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self { rows: 5, cols: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_forty_seats() {
        let grid = SeatGrid::default();
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.cols, 8);
        assert_eq!(grid.seat_count(), 40);
    }

    #[test]
    fn seat_codes_are_linear() {
        let grid = SeatGrid::new(2, 3);
        let codes: Vec<String> = grid.seat_codes().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["A1", "A2", "A3", "A4", "A5", "A6"]);
    }

    #[test]
    fn contains_checks_bounds() {
        let grid = SeatGrid::default();

        assert!(grid.contains(&SeatCode::new("A1")));
        assert!(grid.contains(&SeatCode::new("A40")));
        assert!(!grid.contains(&SeatCode::new("A0")));
        assert!(!grid.contains(&SeatCode::new("A41")));
        assert!(!grid.contains(&SeatCode::new("B1")));
        assert!(!grid.contains(&SeatCode::new("")));
    }

    #[test]
    fn seat_code_serializes_as_bare_string() {
        let code = SeatCode::new("A12");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""A12""#);

        let parsed: SeatCode = serde_json::from_str(r#""A12""#).unwrap();
        assert_eq!(parsed, code);
    }
}

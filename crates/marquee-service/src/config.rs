//! Service configuration.

use marquee_core::SeatGrid;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Path to the `RocksDB` data directory (default: "./marquee-data").
    pub data_dir: String,

    /// Auditorium layout shared by every movie (default: 5 rows of 8).
    pub grid: SeatGrid,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./marquee-data".into()),
            grid: SeatGrid::new(env_u8("SEAT_ROWS", 5), env_u8("SEAT_COLS", 8)),
        }
    }
}

fn env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: "./marquee-data".into(),
            grid: SeatGrid::default(),
        }
    }
}

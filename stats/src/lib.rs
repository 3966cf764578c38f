//! Local stat computation for statdex.
//!
//! Pure, synchronous functions over an already loaded catalog: nothing in
//! this crate performs I/O.
//!
//! # Overview
//!
//! ```text
//! statdex-protocol (data model, validation)
//!        │
//!        ▼
//! statdex-stats (level scaling, radar geometry, fuzzy ranking) ← THIS CRATE
//!        │
//!        └─> statdex-client (catalog snapshot, autocomplete)
//! ```
//!
//! # Main Types
//!
//! ## Transformations
//! - [`Level`] - A level in 1..=100
//! - [`level_stats`] - Base stats scaled to a level
//! - [`radar_points`] - Stat vector projected onto six radar spokes
//! - [`radar_chart`] - Two-series chart for a [`RadarMode`]
//!
//! ## Queries
//! - [`rank`] - Fuzzy autocomplete ranking over catalog names
//!
//! # Example Usage
//!
//! ```ignore
//! use statdex_stats::{Level, RadarLayout, RadarMode, level_stats, radar_chart, rank};
//!
//! let suggestions = rank("pika", &catalog);
//! let pikachu = suggestions[0].entry;
//!
//! let level = Level::new(50)?;
//! let scaled = level_stats(&pikachu.base_stats, level);
//! println!("Lv.50 HP: {}", scaled.hp);
//!
//! let chart = radar_chart(&pikachu.base_stats, level, RadarMode::Growth, &RadarLayout::for_size(240.0));
//! println!("{}", chart.secondary.path());
//! ```

use thiserror::Error;

pub mod query;
pub mod transform;

pub use query::{MAX_SUGGESTIONS, MatchResult, MatchTier, NameScore, Span, rank, rank_with_limit};
pub use transform::{
    Level, RadarChart, RadarLayout, RadarMode, RadarPoint, RadarSeries, SeriesRole, StatMaxima,
    growth, level_stats, radar_chart, radar_points, svg_path,
};

// Re-export the model types every caller needs
pub use statdex_protocol::{CatalogEntry, Stat, StatBlock};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Level {0} is out of range (1-100)")]
    LevelOutOfRange(i64),

    #[error("Maximum for {stat} must be a positive number, got {value}")]
    InvalidMaximum { stat: &'static str, value: f64 },
}

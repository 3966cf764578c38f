//! Stat transformations for display
//!
//! Level scaling turns base stats into approximate in-game stats; radar
//! geometry turns any stat vector into chart coordinates.

mod level;
mod radar;

pub use level::{Level, growth, level_stats, scale_stat};
pub use radar::{
    GRID_FRACTIONS, LABEL_OFFSET, RadarChart, RadarLayout, RadarMode, RadarPoint, RadarSeries,
    SeriesRole, StatMaxima, grid_ring, label_points, radar_chart, radar_chart_with_maxima,
    radar_points, spoke_angle, stat_values, svg_path,
};

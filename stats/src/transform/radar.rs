//! Radar chart geometry
//!
//! Six spokes at 60° spacing, the first pointing straight up. A stat value
//! is normalized against a per-stat ceiling, capped at 1, and projected onto
//! its spoke. Every chart mode goes through [`radar_points`]; modes only
//! differ in which two series they feed it.

use std::f64::consts::PI;
use std::fmt::Write;

use statdex_protocol::{Stat, StatBlock};

use super::level::{Level, growth, level_stats};
use crate::StatsError;

/// Fractions of the radius at which background rings are drawn
pub const GRID_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Distance beyond the outer ring where stat labels sit
pub const LABEL_OFFSET: f64 = 20.0;

/// Space kept between the outer ring and the chart edge
const CHART_MARGIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

impl RadarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-stat normalization ceilings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatMaxima([f64; 6]);

impl StatMaxima {
    /// Approximate highest base stats in the games
    /// (Blissey HP, Mega Mewtwo X Atk, Shuckle Def, Mega Mewtwo Y SpA, Shuckle SpD, Ninjask Spe)
    pub const BASE: StatMaxima = StatMaxima([255.0, 190.0, 230.0, 194.0, 230.0, 180.0]);

    /// Ceilings must be finite and strictly positive
    pub fn new(values: [f64; 6]) -> Result<Self, StatsError> {
        for (stat, value) in Stat::ALL.into_iter().zip(values) {
            if !(value.is_finite() && value > 0.0) {
                return Err(StatsError::InvalidMaximum {
                    stat: stat.key(),
                    value,
                });
            }
        }
        Ok(Self(values))
    }

    /// Ceilings for level-scaled series, which can exceed base maxima
    pub fn doubled(&self) -> Self {
        Self(self.0.map(|v| v * 2.0))
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.0[stat.index()]
    }

    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }
}

impl Default for StatMaxima {
    fn default() -> Self {
        Self::BASE
    }
}

/// Angle of spoke `index` in radians (0 is straight up, clockwise on screen)
pub fn spoke_angle(index: usize) -> f64 {
    index as f64 * (PI / 3.0) - PI / 2.0
}

fn project(center: RadarPoint, index: usize, distance: f64) -> RadarPoint {
    let angle = spoke_angle(index);
    RadarPoint {
        x: center.x + angle.cos() * distance,
        y: center.y + angle.sin() * distance,
    }
}

/// Stat values in canonical order, as floats for projection
pub fn stat_values(stats: &StatBlock) -> [f64; 6] {
    stats.to_array().map(f64::from)
}

/// Project six stat values onto the radar spokes
pub fn radar_points(
    values: &[f64; 6],
    maxima: &StatMaxima,
    center: RadarPoint,
    radius: f64,
) -> [RadarPoint; 6] {
    std::array::from_fn(|i| {
        let normalized = (values[i] / maxima.0[i]).min(1.0);
        project(center, i, radius * normalized)
    })
}

/// Hexagon at `fraction` of the full radius
pub fn grid_ring(center: RadarPoint, radius: f64, fraction: f64) -> [RadarPoint; 6] {
    std::array::from_fn(|i| project(center, i, radius * fraction))
}

/// Label anchor for each stat, `offset` beyond the outer ring
pub fn label_points(center: RadarPoint, radius: f64, offset: f64) -> [(Stat, RadarPoint); 6] {
    std::array::from_fn(|i| (Stat::ALL[i], project(center, i, radius + offset)))
}

/// SVG path data for a closed polygon: `M x y L x y ... Z`
pub fn svg_path(points: &[RadarPoint]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail
        let _ = write!(path, "{} {} {} ", command, point.x, point.y);
    }
    path.push('Z');
    path
}

/// Which pair of series a chart shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadarMode {
    /// Base stats against level-scaled stats
    #[default]
    Comparison,
    /// Base stats against base plus growth
    Growth,
    /// Dimmed base reference against level-scaled stats
    LevelOnly,
}

/// Meaning of a series, which decides how it is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesRole {
    Base,
    Level,
    Growth,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    pub center: RadarPoint,
    pub radius: f64,
}

impl RadarLayout {
    /// Square chart of `size` pixels with a margin for labels
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: RadarPoint::new(half, half),
            radius: (half - CHART_MARGIN).max(0.0),
        }
    }
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self::for_size(200.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub role: SeriesRole,
    pub label: String,
    pub values: [f64; 6],
    pub points: [RadarPoint; 6],
}

impl RadarSeries {
    fn new(
        role: SeriesRole,
        label: String,
        values: [f64; 6],
        maxima: &StatMaxima,
        layout: &RadarLayout,
    ) -> Self {
        let points = radar_points(&values, maxima, layout.center, layout.radius);
        Self {
            role,
            label,
            values,
            points,
        }
    }

    pub fn path(&self) -> String {
        svg_path(&self.points)
    }
}

/// Everything needed to draw one radar chart
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub mode: RadarMode,
    pub level: Level,
    pub primary: RadarSeries,
    pub secondary: RadarSeries,
    pub grid: Vec<[RadarPoint; 6]>,
    pub labels: [(Stat, RadarPoint); 6],
}

/// Build a chart for `base` at `level` using the default ceilings
pub fn radar_chart(
    base: &StatBlock,
    level: Level,
    mode: RadarMode,
    layout: &RadarLayout,
) -> RadarChart {
    radar_chart_with_maxima(base, level, mode, layout, &StatMaxima::BASE)
}

/// Build a chart with custom base ceilings; level series use double these
pub fn radar_chart_with_maxima(
    base: &StatBlock,
    level: Level,
    mode: RadarMode,
    layout: &RadarLayout,
    maxima: &StatMaxima,
) -> RadarChart {
    let base_values = stat_values(base);
    let level_values = stat_values(&level_stats(base, level));
    let level_maxima = maxima.doubled();
    let n = level.get();

    let (primary, secondary) = match mode {
        RadarMode::Comparison => (
            RadarSeries::new(
                SeriesRole::Base,
                "Base Stats".to_string(),
                base_values,
                maxima,
                layout,
            ),
            RadarSeries::new(
                SeriesRole::Level,
                format!("Lv.{n} Stats"),
                level_values,
                &level_maxima,
                layout,
            ),
        ),
        RadarMode::Growth => {
            let deltas = growth(base, level);
            let grown: [f64; 6] = std::array::from_fn(|i| base_values[i] + f64::from(deltas[i]));
            (
                RadarSeries::new(
                    SeriesRole::Base,
                    "Base Stats".to_string(),
                    base_values,
                    maxima,
                    layout,
                ),
                RadarSeries::new(
                    SeriesRole::Growth,
                    format!("+Growth (Lv.{n})"),
                    grown,
                    &level_maxima,
                    layout,
                ),
            )
        }
        RadarMode::LevelOnly => (
            RadarSeries::new(
                SeriesRole::Reference,
                "Base Reference".to_string(),
                base_values,
                maxima,
                layout,
            ),
            RadarSeries::new(
                SeriesRole::Level,
                format!("Lv.{n} Stats"),
                level_values,
                &level_maxima,
                layout,
            ),
        ),
    };

    RadarChart {
        mode,
        level,
        primary,
        secondary,
        grid: GRID_FRACTIONS
            .iter()
            .map(|&f| grid_ring(layout.center, layout.radius, f))
            .collect(),
        labels: label_points(layout.center, layout.radius, LABEL_OFFSET),
    }
}

//! Level scaling of base stats

use statdex_protocol::{Stat, StatBlock};

use crate::StatsError;

/// IV assumed for every stat when scaling
const ASSUMED_IV: u32 = 31;

/// A Pokemon level (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(100);

    /// Levels offered by the level selector
    pub const MENU: [Level; 5] = [Level(1), Level(25), Level(50), Level(75), Level(100)];

    /// Create a level, rejecting values outside 1..=100
    pub fn new(level: u8) -> Result<Self, StatsError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(StatsError::LevelOutOfRange(level.into()))
        }
    }

    /// Create a level, clamping into 1..=100
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(Self::MIN.0.into(), Self::MAX.0.into()) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for Level {
    type Error = StatsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Scale a single stat to `level`.
///
/// HP: `floor((2*base + 31) * level / 100) + level + 10`
/// Others: `floor((2*base + 31) * level / 100) + 5`
///
/// All terms are non-negative, so integer division gives the floor.
pub fn scale_stat(stat: Stat, base: u16, level: Level) -> u16 {
    let level = u32::from(level.get());
    let scaled = (2 * u32::from(base) + ASSUMED_IV) * level / 100;
    let value = match stat {
        Stat::Hp => scaled + level + 10,
        _ => scaled + 5,
    };
    // base <= u16::MAX keeps this below (2*65535+31)+110
    value.min(u32::from(u16::MAX)) as u16
}

/// Scale every stat in `base` to `level`
pub fn level_stats(base: &StatBlock, level: Level) -> StatBlock {
    let mut scaled = StatBlock::default();
    for (stat, value) in base.iter() {
        scaled.set(stat, scale_stat(stat, value, level));
    }
    scaled
}

/// Per-stat difference between level-scaled and base stats.
///
/// Negative at low levels, where the scaled value is below the base value.
pub fn growth(base: &StatBlock, level: Level) -> [i32; 6] {
    let scaled = level_stats(base, level).to_array();
    let base = base.to_array();
    std::array::from_fn(|i| i32::from(scaled[i]) - i32::from(base[i]))
}

//! The six base stats and their fixed ordering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::validate::{MAX_STAT_VALUE, MIN_STAT_VALUE, ValidationError, parse_stats_string};

/// One of the six stats, in the order used for serialization and radar spokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All stats in canonical order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Position of this stat in canonical order (0..6)
    pub fn index(self) -> usize {
        match self {
            Stat::Hp => 0,
            Stat::Attack => 1,
            Stat::Defense => 2,
            Stat::SpecialAttack => 3,
            Stat::SpecialDefense => 4,
            Stat::Speed => 5,
        }
    }

    /// Key used by the service in JSON stat objects
    pub fn key(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special_attack",
            Stat::SpecialDefense => "special_defense",
            Stat::Speed => "speed",
        }
    }

    /// Short label for charts and tables
    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Atk",
            Stat::SpecialDefense => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }

    /// Range-check a value the service sent for this stat
    pub(crate) fn checked(self, value: i64) -> Result<u16, ParseError> {
        if (MIN_STAT_VALUE..=MAX_STAT_VALUE).contains(&value) {
            Ok(value as u16)
        } else {
            Err(ParseError::StatOutOfRange {
                stat: self.key(),
                value,
            })
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Six stat values in canonical order.
///
/// Values coming from the service or from user input are range-checked to
/// 0..=999 before a `StatBlock` is built, and deserializing rejects anything
/// outside that range. Level-scaled blocks may exceed it; constructors do not
/// enforce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStatBlock")]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    pub fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        special_attack: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn from_array(values: [u16; 6]) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] = values;
        Self::new(hp, attack, defense, special_attack, special_defense, speed)
    }

    pub fn to_array(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set the value for a stat
    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Iterate `(stat, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&v| u32::from(v)).sum()
    }

    /// Comma-joined form accepted by the similarity and battle endpoints
    pub fn to_stats_string(&self) -> String {
        self.to_array()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_stats_string())
    }
}

#[derive(Deserialize)]
struct RawStatBlock {
    hp: i64,
    attack: i64,
    defense: i64,
    special_attack: i64,
    special_defense: i64,
    speed: i64,
}

impl TryFrom<RawStatBlock> for StatBlock {
    type Error = ParseError;

    fn try_from(raw: RawStatBlock) -> Result<Self, Self::Error> {
        Ok(StatBlock::new(
            Stat::Hp.checked(raw.hp)?,
            Stat::Attack.checked(raw.attack)?,
            Stat::Defense.checked(raw.defense)?,
            Stat::SpecialAttack.checked(raw.special_attack)?,
            Stat::SpecialDefense.checked(raw.special_defense)?,
            Stat::Speed.checked(raw.speed)?,
        ))
    }
}

impl FromStr for StatBlock {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_stats_string(s)
    }
}

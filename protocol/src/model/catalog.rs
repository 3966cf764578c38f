//! Catalog entries as returned by the listing and name-search endpoints

use serde::{Deserialize, Serialize};

use super::stat::{Stat, StatBlock};
use crate::ParseError;

/// A single Pokemon from the catalog.
///
/// Immutable once decoded. Wire form:
/// `{id, name, metadata: {stats, types, sprite_url, height, weight, base_experience}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WirePokemon", into = "WirePokemon")]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    /// Type names in slot order (e.g. `["grass", "poison"]`)
    pub types: Vec<String>,
    pub base_stats: StatBlock,
    /// Sprite URL, empty when the service has none
    pub sprite_ref: String,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub base_experience: Option<u32>,
}

impl CatalogEntry {
    pub fn new(id: u32, name: impl Into<String>, base_stats: StatBlock) -> Self {
        Self {
            id,
            name: name.into(),
            types: Vec::new(),
            base_stats,
            sprite_ref: String::new(),
            height: None,
            weight: None,
            base_experience: None,
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sprite(mut self, sprite_ref: impl Into<String>) -> Self {
        self.sprite_ref = sprite_ref.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WirePokemon {
    id: u32,
    name: String,
    metadata: WireMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireMetadata {
    stats: Option<WireStats>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    sprite_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_experience: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireStats {
    hp: Option<i64>,
    attack: Option<i64>,
    defense: Option<i64>,
    special_attack: Option<i64>,
    special_defense: Option<i64>,
    speed: Option<i64>,
}

impl WireStats {
    fn field(&self, stat: Stat) -> Option<i64> {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    fn to_block(&self) -> Result<StatBlock, ParseError> {
        let mut block = StatBlock::default();
        for stat in Stat::ALL {
            let value = self
                .field(stat)
                .ok_or_else(|| ParseError::MissingField(format!("metadata.stats.{}", stat.key())))?;
            block.set(stat, stat.checked(value)?);
        }
        Ok(block)
    }
}

impl From<StatBlock> for WireStats {
    fn from(block: StatBlock) -> Self {
        Self {
            hp: Some(block.hp.into()),
            attack: Some(block.attack.into()),
            defense: Some(block.defense.into()),
            special_attack: Some(block.special_attack.into()),
            special_defense: Some(block.special_defense.into()),
            speed: Some(block.speed.into()),
        }
    }
}

impl TryFrom<WirePokemon> for CatalogEntry {
    type Error = ParseError;

    fn try_from(wire: WirePokemon) -> Result<Self, Self::Error> {
        let stats = wire
            .metadata
            .stats
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("metadata.stats".to_string()))?;

        Ok(Self {
            id: wire.id,
            base_stats: stats.to_block()?,
            name: wire.name,
            types: wire.metadata.types,
            sprite_ref: wire.metadata.sprite_url.unwrap_or_default(),
            height: wire.metadata.height,
            weight: wire.metadata.weight,
            base_experience: wire.metadata.base_experience,
        })
    }
}

impl From<CatalogEntry> for WirePokemon {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            metadata: WireMetadata {
                stats: Some(entry.base_stats.into()),
                types: entry.types,
                sprite_url: Some(entry.sprite_ref),
                height: entry.height,
                weight: entry.weight,
                base_experience: entry.base_experience,
            },
        }
    }
}
